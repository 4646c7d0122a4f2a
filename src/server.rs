use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use crate::handlers::AdviceHandler;
use crate::models::{AdviceResponse, UploadedImage};
use crate::prompts;

/// Static instructional message shown while no image has been uploaded.
pub const NO_IMAGE_MESSAGE: &str = "Please upload an image to proceed.";

// Phone photos easily exceed axum's 2 MB default body cap
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub struct AppState {
    pub advice_handler: Arc<AdviceHandler>,
}

pub fn create_router(advice_handler: Arc<AdviceHandler>) -> Router {
    let state = Arc::new(AppState { advice_handler });

    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health_check))
        .route("/api/scenarios", get(get_scenarios))
        .route("/api/advice", post(generate_advice))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// The whole UI is one embedded page; everything else is JSON.
async fn index_page() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

async fn health_check() -> &'static str {
    "OK"
}

/// Scenario titles plus the free-text option, in display order.
async fn get_scenarios() -> Json<Vec<&'static str>> {
    Json(prompts::scenario_options())
}

/// What the advice form carries. `image` is `None` when the file part is
/// missing or empty (browsers send an empty part when no file was picked).
struct AdviceForm {
    image: Option<Vec<u8>>,
    scenario: Option<String>,
    query: String,
}

async fn read_advice_form(multipart: &mut Multipart) -> anyhow::Result<AdviceForm> {
    let mut form = AdviceForm {
        image: None,
        scenario: None,
        query: String::new(),
    };

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let data = field.bytes().await?;
                if !data.is_empty() {
                    form.image = Some(data.to_vec());
                }
            }
            "scenario" => form.scenario = Some(field.text().await?),
            "query" => form.query = field.text().await?,
            other => log::warn!("⚠️ Ignoring unexpected form field: {}", other),
        }
    }

    Ok(form)
}

async fn generate_advice(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<AdviceResponse>, (StatusCode, String)> {
    let form = read_advice_form(&mut multipart).await.map_err(|e| {
        log::error!("❌ Unreadable advice form: {:#}", e);
        (StatusCode::UNPROCESSABLE_ENTITY, format!("{:#}", e))
    })?;

    let Some(image_bytes) = form.image else {
        // Not a failure: the page shows this same message until a file is picked
        log::info!("ℹ️ Advice requested without an image");
        return Err((StatusCode::BAD_REQUEST, NO_IMAGE_MESSAGE.to_string()));
    };

    let choice = form.scenario.unwrap_or_default();
    let Some(prompt) = prompts::resolve_prompt(&choice, &form.query) else {
        log::warn!("⚠️ Unknown scenario choice: '{}'", choice);
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("Unknown scenario: {}", choice),
        ));
    };

    let image = UploadedImage::from_bytes(image_bytes).map_err(|e| {
        log::error!("❌ Rejecting upload: {:#}", e);
        (StatusCode::UNPROCESSABLE_ENTITY, format!("{:#}", e))
    })?;

    let advice = state
        .advice_handler
        .generate_advice(&image, &prompt)
        .await
        .map_err(|e| {
            // The page shows this text in its error box; the process stays
            // up for the next attempt
            log::error!("❌ Advice generation failed: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e))
        })?;

    log::info!("✅ Advice generated ({} chars)", advice.len());
    Ok(Json(AdviceResponse { advice }))
}
