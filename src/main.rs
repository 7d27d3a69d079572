use axum::routing::{get, post};
use axum::Router;
use card_tokenizer::audit::FileAuditSink;
use card_tokenizer::config::AppConfig;
use card_tokenizer::service::payment_service::PaymentService;
use card_tokenizer::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let audit_sink = Arc::new(FileAuditSink::open(&cfg.audit_log_path)?);
    let state = AppState {
        payment_service: PaymentService::new(audit_sink),
        trust_forwarded_headers: cfg.trust_forwarded_headers,
    };

    let app = Router::new()
        .route(
            "/api/payment",
            post(card_tokenizer::http::handlers::payments::create_payment),
        )
        .route("/health", get(card_tokenizer::http::handlers::payments::health))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
