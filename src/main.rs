use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use pdf_summarizer::application::ports::ApiKey;
use pdf_summarizer::application::services::SummarizationService;
use pdf_summarizer::infrastructure::llm::GeminiClient;
use pdf_summarizer::infrastructure::observability::{TracingConfig, init_tracing};
use pdf_summarizer::infrastructure::text_processing::PdfAdapter;
use pdf_summarizer::presentation::config::API_KEY_VAR;
use pdf_summarizer::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(&TracingConfig {
        environment: environment.to_string(),
        level: settings.logging.level.clone(),
        json_format: settings.logging.enable_json,
    });

    let api_key = ApiKey::from_optional(settings.llm.api_key.clone());
    if api_key.is_none() {
        tracing::warn!(
            variable = API_KEY_VAR,
            "Provider API key is not set; summarize requests will be rejected"
        );
    }

    let llm_client = Arc::new(GeminiClient::new(
        &settings.llm.base_url,
        &settings.llm.model,
        Duration::from_secs(settings.llm.timeout_secs),
    )?);
    tracing::info!(model = llm_client.model(), "Gemini client configured");

    let summarization_service = Arc::new(SummarizationService::new(
        Arc::new(PdfAdapter::new()),
        llm_client,
        api_key,
        settings.summary.limits(),
    ));

    let state = AppState::new(summarization_service, settings.server.max_upload_bytes());
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
