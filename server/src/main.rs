//! AI Presenter - HTTP service entry point

use actix_web::{middleware, web, App, HttpServer};
use ai_presenter::{configure, AppState, SettingsManager};
use anyhow::Context;
use generation::{GenerationConfig, OpenAiClient};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match dotenv {
        Ok(path) => tracing::info!("Loaded environment from {:?}", path),
        Err(e) => tracing::debug!("No .env file loaded: {}", e),
    }

    let mut settings_manager = SettingsManager::from_env();
    let settings_path = settings_manager.settings_path().display().to_string();
    settings_manager
        .load_sync()
        .with_context(|| format!("reading {}", settings_path))?;
    settings_manager.apply_env_overrides();
    let settings = settings_manager.get().clone();

    let api_key = GenerationConfig::from_env().api_key;
    if api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; generation requests will fail");
    }
    let client = OpenAiClient::new(settings.generation.client_config(api_key))
        .context("building completion client")?;
    let state = web::Data::new(AppState::new(Arc::new(client), &settings));

    let json_limit = settings.server.json_limit_bytes;
    let bind = (settings.server.host.clone(), settings.server.port);
    tracing::info!("Starting AI Presenter at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(|cfg| configure(cfg, json_limit))
    })
    .bind(bind)
    .context("binding HTTP listener")?
    .run()
    .await?;

    tracing::info!("AI Presenter stopped");
    Ok(())
}
