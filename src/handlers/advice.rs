use anyhow::Result;
use std::sync::Arc;

use crate::models::UploadedImage;
use crate::prompts::SYSTEM_PROMPT;
use crate::services::{ContentPart, GenerativeModel};

/// The one user-triggered action: a food photo plus a prompt in, the model's
/// advice text out. Stateless; nothing survives the call.
pub struct AdviceHandler {
    model: Arc<dyn GenerativeModel>,
}

impl AdviceHandler {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Sends exactly three parts (the fixed instruction, then the image,
    /// then the resolved prompt) and returns the answer untouched.
    pub async fn generate_advice(&self, image: &UploadedImage, prompt: &str) -> Result<String> {
        log::info!(
            "🥗 Generating nutrition advice for a {} {}x{} image (prompt: {} chars)",
            image.mime_type,
            image.width,
            image.height,
            prompt.len()
        );

        let parts = vec![
            ContentPart::text(SYSTEM_PROMPT),
            ContentPart::image(image),
            ContentPart::text(prompt),
        ];

        self.model.generate_content(parts).await
    }
}
