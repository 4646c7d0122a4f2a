pub mod ai_service; // Multimodal model seam
pub mod gemini; // Google Gemini client

pub use ai_service::{ContentPart, GenerativeModel};
pub use gemini::GeminiClient;
