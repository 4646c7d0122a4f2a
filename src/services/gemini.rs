use anyhow::Result;
use base64::{engine::general_purpose, Engine};
use serde::{Deserialize, Serialize};

use super::ai_service::{ContentPart, GenerativeModel};

/// Google Generative Language API base, `{base}/{model}:generateContent`.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

/// Untagged union of text and inline media parts; the variant order
/// matters for deserialization.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Client for Gemini's `generateContent` endpoint.
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(api_key, model, GEMINI_API_BASE.to_string())
    }

    /// Same client against a different API base (tests, proxies).
    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Self {
        Self {
            api_key,
            model,
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    fn build_request(parts: Vec<ContentPart>) -> GenerateContentRequest {
        let parts = parts
            .into_iter()
            .map(|part| match part {
                ContentPart::Text(text) => Part::Text { text },
                ContentPart::InlineImage { mime_type, data } => {
                    let encoded = general_purpose::STANDARD.encode(&data);
                    log::debug!(
                        "🔄 Inlined {} image: {} bytes -> {} bytes of base64",
                        mime_type,
                        data.len(),
                        encoded.len()
                    );
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type,
                            data: encoded,
                        },
                    }
                }
            })
            .collect();

        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
        }
    }
}

/// First candidate's text parts, concatenated. A blocked or partless
/// response is an error; an empty text part is a legitimate (empty) answer.
fn extract_text(response: GenerateContentResponse) -> Result<String> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("Gemini returned no candidates"))?;

    let content = candidate
        .content
        .ok_or_else(|| anyhow::anyhow!("Gemini candidate carries no content"))?;

    let mut text = String::new();
    let mut found_text = false;
    for part in content.parts {
        if let Part::Text { text: chunk } = part {
            text.push_str(&chunk);
            found_text = true;
        }
    }

    if !found_text {
        anyhow::bail!("Gemini response contained no text parts");
    }

    Ok(text)
}

#[async_trait::async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate_content(&self, parts: Vec<ContentPart>) -> Result<String> {
        let request = Self::build_request(parts);

        log::info!("🤖 Sending request to Gemini with model: {}", self.model);
        log::debug!(
            "📤 Request payload size: {} bytes",
            serde_json::to_string(&request)?.len()
        );

        let response = self
            .client
            .post(self.api_url())
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        log::debug!("📥 Gemini response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            log::error!("❌ Gemini API error response: {}", error_text);
            anyhow::bail!("Gemini API error ({}): {}", status, error_text);
        }

        let response_text = response.text().await?;
        log::debug!("📄 Raw Gemini response size: {} bytes", response_text.len());

        let parsed: GenerateContentResponse = serde_json::from_str(&response_text)?;
        let text = extract_text(parsed)?;

        log::info!("💬 Gemini answered with {} chars", text.len());
        Ok(text)
    }
}
