use axum::{extract::DefaultBodyLimit, routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use thesis_api::config::AppConfig;
use thesis_api::database::manager::DatabaseManager;
use thesis_api::handlers;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, THESIS_DB, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = thesis_api::config::config();
    tracing::info!("Starting Thesis API in {:?} mode", config.environment);

    let app = app(config);

    // Allow tests or deployments to override port via env
    let port = std::env::var("THESIS_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("Thesis API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app(config: &AppConfig) -> Router {
    let router = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Thesis API
        .merge(thesis_routes())
        // Global middleware
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .layer(CorsLayer::permissive());

    if config.api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

fn thesis_routes() -> Router {
    use handlers::thesis;

    Router::new()
        // Collection-level operations
        .route(
            "/api/thesis",
            get(thesis::thesis_list).post(thesis::thesis_create),
        )
        // Record-level operations
        .route(
            "/api/thesis/:id",
            get(thesis::thesis_show)
                .put(thesis::thesis_update)
                .delete(thesis::thesis_delete),
        )
        // Retrieval by user and by workflow status
        .route("/api/thesis/user/:user_id", get(thesis::thesis_by_user))
        .route("/api/thesis/status/:status", get(thesis::thesis_by_status))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Thesis API",
            "version": version,
            "description": "REST backend for tracking academic theses through their review workflow",
            "endpoints": {
                "home": "/",
                "health": "/health",
                "thesis": "/api/thesis[/:id]",
                "by_user": "/api/thesis/user/:user_id",
                "by_status": "/api/thesis/status/:status[?from=..&to=..]",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
