use std::net::SocketAddr;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use rushcrew_api::routes;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "RushCrew API",
        version = "0.1.0",
        description = "RushCrew backend. Every response uses the uniform success/error envelope; error codes are the stable contract."
    ),
    paths(routes::health::health_check),
    components(schemas(
        routes::health::HealthResponse,
        rushcrew_core::response::ApiResponse<routes::health::HealthResponse>,
        rushcrew_core::response::ErrorResponse,
        rushcrew_core::response::ValidationError,
        rushcrew_core::role::UserRole,
    ))
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // Load .env if present (dev only)
    let _ = dotenvy::dotenv();

    // Structured JSON logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rushcrew_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .merge(routes::health::router())
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("RushCrew API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
