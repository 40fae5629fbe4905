//! HTTP endpoint tests against a scripted completion client

use actix_web::{http::StatusCode, test, web, App};
use ai_presenter::{configure, AppSettings, AppState};
use async_trait::async_trait;
use doc_model::{Presentation, Slide};
use generation::{CompletionClient, CompletionRequest, GenerationError, Result};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct FixedClient {
    body: Option<String>,
    calls: AtomicUsize,
}

#[async_trait]
impl CompletionClient for FixedClient {
    async fn complete(&self, _request: &CompletionRequest) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.body
            .clone()
            .ok_or_else(|| GenerationError::failed("No response from OpenAI"))
    }
}

fn deck_json(slides: usize) -> String {
    let slides: Vec<Value> = (0..slides)
        .map(|i| {
            json!({
                "title": format!("Slide {}", i + 1),
                "content": ["One", "Two", "Three", "Four"],
                "speakerNotes": "Talk track",
            })
        })
        .collect();
    json!({ "title": "Q3 Sales Review", "slides": slides }).to_string()
}

fn state(body: Option<String>) -> (web::Data<AppState>, Arc<FixedClient>) {
    let client = Arc::new(FixedClient {
        body,
        calls: AtomicUsize::new(0),
    });
    let mut settings = AppSettings::default();
    settings.export.scale = 0.25;
    let state = web::Data::new(AppState::new(client.clone(), &settings));
    (state, client)
}

fn sample_presentation() -> Presentation {
    Presentation::new(
        "Board <Update>",
        vec![
            Slide::new("Board Update").with_content(["October"]),
            Slide::new("Highlights").with_content(["Revenue up", "Churn down", "Hiring on plan"]),
        ],
    )
}

#[actix_rt::test]
async fn test_generate_returns_presentation() {
    let (state, client) = state(Some(deck_json(7)));
    let app = test::init_service(
        App::new()
            .app_data(state)
            .configure(|cfg| configure(cfg, 1 << 20)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(json!({
            "topic": "Q3 Sales Review",
            "numberOfSlides": 7,
            "purpose": "report",
            "tone": "professional",
            "targetAudience": "Sales leadership",
            "template": "modern"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["title"], "Q3 Sales Review");
    assert_eq!(body["slides"].as_array().unwrap().len(), 7);
    assert_eq!(body["slides"][0]["speakerNotes"], "Talk track");
    assert_eq!(body["template"], "modern");
    assert_eq!(client.calls.load(Ordering::SeqCst), 1);
}

#[actix_rt::test]
async fn test_generate_validation_is_400() {
    let (state, client) = state(Some(deck_json(7)));
    let app = test::init_service(
        App::new()
            .app_data(state)
            .configure(|cfg| configure(cfg, 1 << 20)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(json!({ "topic": "", "targetAudience": "Sales" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Topic and target audience are required");
    assert_eq!(client.calls.load(Ordering::SeqCst), 0);
}

#[actix_rt::test]
async fn test_generate_failure_is_500() {
    let (state, _) = state(None);
    let app = test::init_service(
        App::new()
            .app_data(state)
            .configure(|cfg| configure(cfg, 1 << 20)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(json!({ "topic": "Q3", "targetAudience": "Sales", "numberOfSlides": 5 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("Failed to generate presentation"));
}

#[actix_rt::test]
async fn test_malformed_body_is_json_400() {
    let (state, _) = state(None);
    let app = test::init_service(
        App::new()
            .app_data(state)
            .configure(|cfg| configure(cfg, 1 << 20)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/generate")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_rt::test]
async fn test_export_html_attachment() {
    let (state, _) = state(None);
    let app = test::init_service(
        App::new()
            .app_data(state)
            .configure(|cfg| configure(cfg, 1 << 20)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/export/html")
        .set_json(sample_presentation())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let disposition = resp
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(disposition, "attachment; filename=\"Board _Update_.html\"");

    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Board &lt;Update&gt;"));
    assert_eq!(html.matches("class=\"slide ").count(), 2);
}

#[actix_rt::test]
async fn test_export_pdf() {
    let (state, _) = state(None);
    let app = test::init_service(
        App::new()
            .app_data(state)
            .configure(|cfg| configure(cfg, 1 << 20)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/export/pdf")
        .set_json(sample_presentation())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap().to_str().unwrap(),
        "application/pdf"
    );
    let body = test::read_body(resp).await;
    assert!(body.starts_with(b"%PDF-1.4"));
    assert!(String::from_utf8_lossy(&body).contains("/Count 2"));
}

#[actix_rt::test]
async fn test_healthz() {
    let (state, _) = state(None);
    let app = test::init_service(
        App::new()
            .app_data(state)
            .configure(|cfg| configure(cfg, 1 << 20)),
    )
    .await;
    let resp = test::call_service(&app, test::TestRequest::get().uri("/healthz").to_request()).await;
    assert!(resp.status().is_success());
}
