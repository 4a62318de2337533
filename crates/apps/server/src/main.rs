use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Static host for the story page assets and the study spot dataset.
///
/// The viewer fetches `/data/studyspots.geojson` from here; a missing file
/// is a plain 404, which the loader surfaces as a fetch error.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let assets_root = env::var("STORY_ASSETS_ROOT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("crates/apps/viewer/assets"));
    let addr: SocketAddr = env::var("STORY_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
        .parse()
        .expect("invalid STORY_ADDR");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods([Method::GET, Method::OPTIONS]);

    let app = Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(ServeDir::new(&assets_root))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    info!(assets = %assets_root.display(), "story server listening on http://{addr}");
    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}

async fn healthz() -> Response {
    (StatusCode::OK, "ok").into_response()
}
