
use std::env;
use anyhow::{Result, Context, bail};

use crate::prompt::{SAMPLE_IMAGE_URLS, IMAGE_MEDIA_TYPE};

pub const IMAGE_INDEX_VAR: &str = "VISION_PROMPT_IMAGE_INDEX";
pub const IMAGE_URL_VAR: &str = "VISION_PROMPT_IMAGE_URL";
pub const MEDIA_TYPE_VAR: &str = "VISION_PROMPT_MEDIA_TYPE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptConfig {
    pub image_url: String,
    pub media_type: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            image_url: SAMPLE_IMAGE_URLS[0].into(),
            media_type: IMAGE_MEDIA_TYPE.into(),
        }
    }
}

impl PromptConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // split out so tests don't have to mutate the process environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let image_url = match lookup(IMAGE_URL_VAR) {
            Some(url) if !url.is_empty() => url,
            _ => {
                let index = match lookup(IMAGE_INDEX_VAR) {
                    Some(index) => index.trim().parse::<usize>()
                        .with_context(|| format!("{IMAGE_INDEX_VAR} is not an index: {index:?}"))?,
                    None => 0,
                };
                let Some(url) = SAMPLE_IMAGE_URLS.get(index) else {
                    bail!("{IMAGE_INDEX_VAR} out of range: {index} (have {})", SAMPLE_IMAGE_URLS.len());
                };
                (*url).into()
            }
        };
        let media_type = lookup(MEDIA_TYPE_VAR)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| IMAGE_MEDIA_TYPE.into());
        Ok(Self {
            image_url,
            media_type,
        })
    }
}
