/* src/cli/core/src/serve.rs */

// `corpsite serve`: render pages on request, with static assets under /assets.

use std::path::Path;

use anyhow::{Context, Result};
use axum::Router;
use corpsite_server_axum::IntoAxumRouter;
use tower_http::services::ServeDir;

use crate::config::SiteConfig;
use crate::site::site_server;
use crate::ui;

pub const ASSETS_PREFIX: &str = "/assets";

pub(crate) fn build_app(config: &SiteConfig, base_dir: &Path) -> Result<Router> {
  let router = site_server(config, base_dir)?.into_axum_router()?;

  let public_dir = base_dir.join(&config.server.public_dir);
  if !public_dir.is_dir() {
    ui::detail(&format!("no {} directory, serving pages only", public_dir.display()));
    return Ok(router);
  }
  ui::detail(&format!("{ASSETS_PREFIX} -> {}", public_dir.display()));
  Ok(router.nest_service(ASSETS_PREFIX, ServeDir::new(public_dir)))
}

pub async fn run_serve(config: &SiteConfig, base_dir: &Path, port: Option<u16>) -> Result<()> {
  let port = port.unwrap_or(config.server.port);
  let app = build_app(config, base_dir)?;

  let addr = format!("0.0.0.0:{port}");
  let listener =
    tokio::net::TcpListener::bind(&addr).await.with_context(|| format!("failed to bind {addr}"))?;
  ui::ok(&format!("serving http://localhost:{port} (CMS {})", config.cms.base_url));
  tracing::info!(port, cms = %config.cms.base_url, env = ?config.environment, "server started");

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;
  ui::ok("server stopped");
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(error = %e, "failed to listen for ctrl-c");
    std::future::pending::<()>().await;
  }
}
