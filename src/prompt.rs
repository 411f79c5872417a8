
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::config::PromptConfig;
use crate::images::get_image_data;

pub const SAMPLE_IMAGE_URLS: [&str; 2] = [
    "https://upload.wikimedia.org/wikipedia/commons/a/a7/Camponotus_flavomarginatus_ant.jpg",
    "https://upload.wikimedia.org/wikipedia/commons/b/b5/Iridescent.green.sweat.bee1.jpg",
];

pub const IMAGE_MEDIA_TYPE: &str = "image/jpeg";

pub const SYSTEM_INSTRUCTION: &str =
    "You are an expert at answering questions about images. Please write in a short, concise, and concise manner.";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PromptMessage {
    pub role: String,
    pub content: Vec<PromptMessageContent>,
}

// content parts are discriminated by "type", e.g. {"type": "text", "text": ...}
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PromptMessageContent {
    Text { text: String },
    Image { source: ImageSource },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ImageSource {
    Base64 { media_type: String, data: String },
}

/// Builds the system + user image payload for the configured sample image.
///
/// `context` is echoed to stdout before the image is fetched. Any fetch
/// failure is returned as-is.
pub async fn generate_prompt(context: &Value) -> Result<Vec<PromptMessage>> {
    let config = PromptConfig::from_env()?;
    generate_prompt_with(context, &config).await
}

pub async fn generate_prompt_with(context: &Value, config: &PromptConfig) -> Result<Vec<PromptMessage>> {
    println!("{context}");
    let image_url = config.image_url.as_str();
    let image_data = get_image_data(image_url).await?;
    info!("prompt built from {}", image_url);
    Ok(vec![
        system_message(),
        image_message(&config.media_type, image_data),
    ])
}

pub fn system_message() -> PromptMessage {
    PromptMessage {
        role: "system".into(),
        content: vec![
            PromptMessageContent::Text {
                text: SYSTEM_INSTRUCTION.into(),
            }
        ]
    }
}

pub fn image_message(media_type: &str, data: String) -> PromptMessage {
    PromptMessage {
        role: "user".into(),
        content: vec![
            PromptMessageContent::Image {
                source: ImageSource::Base64 {
                    media_type: media_type.into(),
                    data,
                },
            }
        ]
    }
}
