use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// An uploaded picture, decoded once to prove it really is an image.
///
/// `data` keeps the original bytes (that is what goes to the model);
/// the decode only sniffs the MIME type and the dimensions.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub data: Vec<u8>,
    pub mime_type: &'static str,
    pub width: u32,
    pub height: u32,
}

impl UploadedImage {
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let format = image::guess_format(&data).context("Could not detect image format")?;

        // MIME types Gemini accepts inline; the file picker only offers
        // jpg/jpeg/png, the rest cover renamed files
        let mime_type = match format {
            image::ImageFormat::Jpeg => "image/jpeg",
            image::ImageFormat::Png => "image/png",
            image::ImageFormat::WebP => "image/webp",
            image::ImageFormat::Gif => "image/gif",
            other => anyhow::bail!("Unsupported image format: {:?}", other),
        };

        let decoded = image::load_from_memory_with_format(&data, format)
            .context("Could not decode image")?;

        use image::GenericImageView;
        let (width, height) = decoded.dimensions();

        log::debug!(
            "🖼️ Decoded upload: {} {}x{} ({} bytes)",
            mime_type,
            width,
            height,
            data.len()
        );

        Ok(Self {
            data,
            mime_type,
            width,
            height,
        })
    }
}

/// Body of a successful `POST /api/advice`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceResponse {
    pub advice: String,
}
