//! Web router using Axum

use axum::{response::Html, routing::get, Router};
use skillmap_core::{ContentError, ContentStore, DegradedState};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Create the web router
///
/// Serves the Trunk-built bundle from `dist/` when one exists, falling back
/// to a setup page explaining the frontend build.
pub fn create_router(store: Arc<ContentStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .route("/api/roadmaps", get(roadmaps_handler))
        .route("/api/roadmaps/{id}", get(roadmap_handler))
        .route("/api/site", get(site_handler))
        .route("/api/health", get(health_handler));

    let dist = Path::new(env!("CARGO_MANIFEST_DIR")).join("dist");
    let router = if dist.join("index.html").is_file() {
        // Unknown paths fall back to index.html so SPA deep links work
        let index = ServeFile::new(dist.join("index.html"));
        router.fallback_service(ServeDir::new(&dist).fallback(index))
    } else {
        router.route("/", get(index_handler)).fallback(index_handler)
    };

    router.layer(cors).with_state(store)
}

async fn index_handler() -> Html<String> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>skillmap - Developer Roadmaps</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: system-ui, -apple-system, sans-serif;
            background: #f5f5f5;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
        }
        .setup-message {
            max-width: 600px;
            background: white;
            padding: 2rem;
            border-radius: 8px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
        }
        h1 {
            font-size: 2rem;
            margin-bottom: 1rem;
            color: #1a1a1a;
        }
        p {
            margin-bottom: 1rem;
            color: #333;
            line-height: 1.6;
        }
        code {
            background: #f0f0f0;
            padding: 0.25rem 0.5rem;
            border-radius: 4px;
            font-family: monospace;
        }
        .step {
            margin: 1.5rem 0;
            padding: 1rem;
            background: #f8f8f8;
            border-left: 3px solid #333;
        }
        .api-links {
            margin-top: 2rem;
            padding-top: 1.5rem;
            border-top: 1px solid #ddd;
        }
        a {
            color: #0066cc;
            text-decoration: none;
        }
        a:hover {
            text-decoration: underline;
        }
    </style>
</head>
<body>
    <div class="setup-message">
        <h1>skillmap - Frontend Build Required</h1>
        <p>The Leptos WASM frontend needs to be compiled before the site can be displayed.</p>

        <div class="step">
            <strong>Setup Instructions:</strong>
            <ol style="margin-left: 1.5rem; margin-top: 0.5rem;">
                <li>Install Trunk: <code>cargo install trunk</code></li>
                <li>Add WASM target: <code>rustup target add wasm32-unknown-unknown</code></li>
                <li>Build frontend: <code>cd crates/skillmap-web && trunk build --release</code></li>
                <li>Restart server: <code>cargo run -- serve</code></li>
            </ol>
        </div>

        <div class="api-links">
            <p><strong>API Endpoints (available now):</strong></p>
            <ul style="margin-left: 1.5rem;">
                <li><a href="/api/health">/api/health</a> - Health check</li>
                <li><a href="/api/roadmaps">/api/roadmaps</a> - Roadmaps JSON</li>
                <li><a href="/api/site">/api/site</a> - Site configuration JSON</li>
            </ul>
        </div>
    </div>
</body>
</html>"#
            .to_string(),
    )
}

async fn roadmaps_handler(
    axum::extract::State(store): axum::extract::State<Arc<ContentStore>>,
) -> axum::Json<serde_json::Value> {
    let roadmaps = store.roadmaps();
    let list: Vec<_> = roadmaps.iter().map(|r| r.as_ref()).collect();

    axum::Json(serde_json::json!({
        "count": list.len(),
        "roadmaps": list,
    }))
}

async fn roadmap_handler(
    axum::extract::State(store): axum::extract::State<Arc<ContentStore>>,
    axum::extract::Path(id): axum::extract::Path<String>,
) -> axum::response::Response {
    use axum::response::IntoResponse;

    match store.roadmap(&id) {
        Some(roadmap) => axum::Json(
            serde_json::to_value(roadmap.as_ref()).unwrap_or(serde_json::Value::Null),
        )
        .into_response(),
        None => (
            axum::http::StatusCode::NOT_FOUND,
            axum::Json(serde_json::json!({
                "error": ContentError::RoadmapNotFound { id }.to_string(),
            })),
        )
            .into_response(),
    }
}

async fn site_handler(
    axum::extract::State(store): axum::extract::State<Arc<ContentStore>>,
) -> axum::Json<serde_json::Value> {
    let site = store.site();
    axum::Json(serde_json::to_value(&site).unwrap_or(serde_json::Value::Null))
}

async fn health_handler(
    axum::extract::State(store): axum::extract::State<Arc<ContentStore>>,
) -> axum::Json<serde_json::Value> {
    let state = store.degraded_state();
    let site_loaded = match &state {
        DegradedState::Healthy => true,
        DegradedState::Partial { missing, .. } => !missing.iter().any(|m| m == "site"),
    };

    axum::Json(serde_json::json!({
        "status": if state.is_healthy() { "healthy" } else { "degraded" },
        "roadmaps": store.roadmap_count(),
        "site_loaded": site_loaded,
    }))
}
