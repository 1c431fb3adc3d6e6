use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use bookmark_api_rust::database::manager::DatabaseManager;
use bookmark_api_rust::{config, handlers, middleware};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL and JWT_SECRET
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting Bookmark API in {:?} mode", config.environment);

    if let Err(e) = DatabaseManager::migrate().await {
        panic!("database migration failed: {}", e);
    }

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("BOOKMARK_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 Bookmark API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(auth_routes())
        // Protected
        .merge(user_routes())
        .merge(bookmark_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn auth_routes() -> Router {
    use axum::routing::post;
    use handlers::auth;

    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

fn user_routes() -> Router {
    use handlers::user;

    Router::new()
        .route("/user", get(user::show).put(user::update))
        .route_layer(axum::middleware::from_fn(middleware::require_auth))
}

fn bookmark_routes() -> Router {
    use axum::routing::{post, put};
    use handlers::bookmark;

    Router::new()
        .route("/bookmark", post(bookmark::create))
        .route("/bookmark/user", get(bookmark::list))
        .route(
            "/bookmark/bookmarkId/:id",
            get(bookmark::show).delete(bookmark::remove),
        )
        .route("/bookmark/:id", put(bookmark::update))
        .route_layer(axum::middleware::from_fn(middleware::require_auth))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Bookmark API (Rust)",
        "version": version,
        "endpoints": {
            "auth": "/auth/register, /auth/login (public)",
            "user": "/user (protected - GET, PUT)",
            "bookmark": "/bookmark, /bookmark/user, /bookmark/bookmarkId/:id, /bookmark/:id (protected)",
            "health": "/health (public)"
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
