use anyhow::Result;

use crate::models::UploadedImage;

/// One piece of a multimodal request, in the order it is sent.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentPart {
    Text(String),
    InlineImage { mime_type: String, data: Vec<u8> },
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn image(image: &UploadedImage) -> Self {
        Self::InlineImage {
            mime_type: image.mime_type.to_string(),
            data: image.data.clone(),
        }
    }
}

/// Trait for multimodal model backends (Gemini, OpenRouter, etc.)
///
/// One call: a list of mixed text/image parts in, the response text out.
/// Implementations own the wire format and the credentials.
#[async_trait::async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate_content(&self, parts: Vec<ContentPart>) -> Result<String>;
}
