
pub mod config;
pub mod image_client;
pub mod images;
pub mod prompt;

pub use config::PromptConfig;
pub use images::get_image_data;
pub use prompt::{generate_prompt, generate_prompt_with, PromptMessage, PromptMessageContent, ImageSource};
