//! skillmap-web - Web frontend for skillmap using Leptos + Axum

#![recursion_limit = "1024"]

pub mod analytics;
pub mod api;
pub mod app;
pub mod components;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod router;

pub use app::App;
#[cfg(feature = "ssr")]
pub use router::create_router;

#[cfg(feature = "ssr")]
use anyhow::Result;
#[cfg(feature = "ssr")]
use skillmap_core::ContentStore;
#[cfg(feature = "ssr")]
use std::sync::Arc;

/// Run the web server
#[cfg(feature = "ssr")]
pub async fn run(store: Arc<ContentStore>, port: u16) -> Result<()> {
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tracing::info;

    let router = create_router(store);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await?;

    info!("Web server listening on http://{}", addr);
    println!("Web server listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
