/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;


use corpsite_server::{ContentSource, SiteError, SiteParts, SiteServer};

/// Re-export corpsite-server core for convenience
pub use corpsite_server;

/// Extension trait that turns a configured site into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> Result<axum::Router, SiteError>;
  fn serve(
    self,
    addr: &str,
  ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>> + Send;
}

impl<S: ContentSource + 'static> IntoAxumRouter for SiteParts<S> {
  fn into_axum_router(self) -> Result<axum::Router, SiteError> {
    Ok(handler::build_router(self))
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = self.into_axum_router()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!("site running on http://localhost:{}", local_addr.port());
    axum::serve(listener, router).await?;
    Ok(())
  }
}

impl<S: ContentSource + 'static> IntoAxumRouter for SiteServer<S> {
  fn into_axum_router(self) -> Result<axum::Router, SiteError> {
    self.into_parts()?.into_axum_router()
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    self.into_parts()?.serve(addr).await
  }
}
