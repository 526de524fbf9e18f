//! Example payment service using Axum.
//!
//! Exposes the card validation core behind an HTTP endpoint: requests are
//! validated and, when accepted, charged through the configured charger.
//!
//! Run with:
//! ```bash
//! cargo run --example server
//! ```
//!
//! Environment variables:
//! - APP_PORT: Server port (default: 50051)
//! - CHARGER_BACKEND: "noop" (default) or "remote"
//! - PROCESSOR_URL: Remote processor base URL (required for "remote")

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use paycard_rs::service::{PaymentService, ServiceConfig};
use paycard_rs::types::ChargeRequest;
use paycard_rs::PaymentError;
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

struct AppState {
    service: PaymentService,
}

/// Charge endpoint: validate the card, then charge it.
async fn charge_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChargeRequest>,
) -> Result<Response, AppError> {
    let response = state
        .service
        .handle_charge(request, chrono::Utc::now())
        .await?;
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Health check endpoint.
async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "paycard",
    }))
}

/// Root endpoint with information.
async fn root_handler() -> impl IntoResponse {
    Json(json!({
        "service": "paycard payment service",
        "endpoints": {
            "/charge": "POST - Validate and charge a card",
            "/health": "GET - Health check"
        },
    }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration from environment
    let config = ServiceConfig::from_env()?;

    println!("🔧 Starting paycard payment service");
    println!("   Charger: {:?}", config.backend);
    println!("   Port: {}", config.port);

    // Build the charger once at startup and inject it into the service
    let service = PaymentService::new(config.backend.build());
    let state = Arc::new(AppState { service });

    // Build router
    let app = Router::new()
        .route("/", get(root_handler))
        .route("/charge", post(charge_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!("✅ Payment service listening on http://{}", addr);
    println!("\nTry:");
    println!("  curl http://localhost:{}/health", config.port);
    println!(
        "  curl -X POST http://localhost:{}/charge -H 'Content-Type: application/json' \\",
        config.port
    );
    println!(
        "       -d '{{\"amount\":{{\"currencyCode\":\"USD\",\"units\":10,\"nanos\":0}},\"creditCard\":{{\"creditCardNumber\":\"4242424242424242\",\"creditCardCvv\":123,\"creditCardExpirationYear\":2030,\"creditCardExpirationMonth\":2}}}}'"
    );
    println!();

    axum::serve(listener, app).await?;

    Ok(())
}

// Error handling
struct AppError(PaymentError);

impl From<PaymentError> for AppError {
    fn from(err: PaymentError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            PaymentError::CardRejected(outcome) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": self.0.to_string(), "rejection": outcome }),
            ),
            PaymentError::ChargeDeclined(_) | PaymentError::HttpError(_) => (
                StatusCode::BAD_GATEWAY,
                json!({ "error": self.0.to_string() }),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.0.to_string() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
