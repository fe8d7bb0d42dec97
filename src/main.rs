use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use dotenv::dotenv;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use comment_sentiment::api;
use comment_sentiment::config::Config;
use comment_sentiment::Pipeline;

#[derive(OpenApi)]
#[openapi(
    paths(api::analyze, api::health),
    components(
        schemas(
            api::AnalyzeRequest,
            api::AnalyzeResponseDoc,
            api::ErrorResponse,
            api::HealthResponse,
            comment_sentiment::report::AnalysisReport,
            comment_sentiment::report::PieSlice,
            comment_sentiment::report::Bar,
            comment_sentiment::sentiment::SentimentTally,
            comment_sentiment::keywords::KeywordCount
        )
    ),
    tags(
        (name = "analysis", description = "Video comment sentiment analysis")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();
    if config.api_key.is_none() {
        tracing::warn!("⚠️ YOUTUBE_API_KEY is not set; every analysis will fail with an auth error");
    }

    let pipeline = Pipeline::new(&config).context("failed to initialize analysis pipeline")?;
    let state = Arc::new(api::AppState {
        pipeline,
        api_key_configured: config.api_key.is_some(),
    });

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/analyze", post(api::analyze))
        .route("/health", get(api::health))
        .fallback_service(ServeDir::new("static")) // Serve Dashboard
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("🌐 Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
