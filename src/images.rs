
use anyhow::Result;
use tracing::info;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as Base64;

use crate::image_client::ImageClient;

pub fn encode_base64(data: &[u8]) -> String {
    Base64.encode(data)
}

/// Downloads `image_url` and returns the body as standard (padded) base64.
pub async fn get_image_data(image_url: &str) -> Result<String> {
    let client = ImageClient::new()?;
    let data = client.download(image_url).await?;
    let data_base64 = encode_base64(&data);
    info!("encoded image: {} base64 chars", data_base64.len());
    Ok(data_base64)
}
