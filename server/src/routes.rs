//! HTTP routes

use crate::{ApiError, AppSettings};
use actix_web::{error, web, HttpRequest, HttpResponse};
use doc_model::Presentation;
use export::{export_html, export_rasterized, PdfExportOptions, SceneRasterizer};
use generation::{CompletionClient, GenerationRequest, PresentationGenerator};
use serde_json::json;
use std::sync::Arc;

/// Shared per-process state handed to every handler
pub struct AppState {
    pub generator: PresentationGenerator,
    pub rasterizer: SceneRasterizer,
    pub pdf_options: PdfExportOptions,
}

impl AppState {
    pub fn new(client: Arc<dyn CompletionClient>, settings: &AppSettings) -> Self {
        Self {
            generator: PresentationGenerator::new(client)
                .with_config(settings.generation.client_config(None))
                .with_options(settings.generation.generator_options()),
            rasterizer: SceneRasterizer::default().with_scale(settings.export.scale),
            pdf_options: settings.export.pdf_options(),
        }
    }
}

/// Register all routes; `json_limit` bounds request bodies
pub fn configure(cfg: &mut web::ServiceConfig, json_limit: usize) {
    let json_config = web::JsonConfig::default()
        .limit(json_limit)
        .error_handler(|err, _req: &HttpRequest| {
            let message = match &err {
                error::JsonPayloadError::Deserialize(e) => format!("Invalid request body: {}", e),
                other => other.to_string(),
            };
            ApiError::BadRequest(message).into()
        });

    cfg.app_data(json_config)
        .route("/healthz", web::get().to(healthz))
        .service(
            web::scope("/api")
                .route("/generate", web::post().to(generate))
                .route("/export/html", web::post().to(export_html_file))
                .route("/export/pdf", web::post().to(export_pdf_file)),
        );
}

async fn healthz() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

async fn generate(
    state: web::Data<AppState>,
    body: web::Json<GenerationRequest>,
) -> Result<HttpResponse, ApiError> {
    let presentation = state.generator.generate(&body).await?;
    Ok(HttpResponse::Ok().json(presentation))
}

async fn export_html_file(body: web::Json<Presentation>) -> Result<HttpResponse, ApiError> {
    let html = export_html(&body)?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .insert_header(attachment(&body.title, "html"))
        .body(html))
}

async fn export_pdf_file(
    state: web::Data<AppState>,
    body: web::Json<Presentation>,
) -> Result<HttpResponse, ApiError> {
    let options = state.pdf_options.clone().with_title(body.title.clone());
    let bytes = export_rasterized(&body, &state.rasterizer, options).await?;
    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header(attachment(&body.title, "pdf"))
        .body(bytes))
}

/// `Content-Disposition` header naming the download after the presentation
fn attachment(title: &str, extension: &str) -> (&'static str, String) {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let stem = if stem.trim().is_empty() {
        "presentation".to_string()
    } else {
        stem
    };
    (
        "Content-Disposition",
        format!("attachment; filename=\"{}.{}\"", stem, extension),
    )
}
