/* src/server/adapter/axum/src/handler/seo.rs */

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use corpsite_server::ContentSource;

use super::AppState;

pub(super) async fn handle_robots<S: ContentSource + 'static>(
  State(state): State<Arc<AppState<S>>>,
) -> impl IntoResponse {
  ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], state.site.robots_txt())
}

pub(super) async fn handle_sitemap<S: ContentSource + 'static>(
  State(state): State<Arc<AppState<S>>>,
) -> impl IntoResponse {
  ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], state.site.sitemap_xml())
}
