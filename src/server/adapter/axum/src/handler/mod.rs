/* src/server/adapter/axum/src/handler/mod.rs */

mod contact;
mod locale;
mod page;
mod seo;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use corpsite_server::{ContentSource, ResolveStrategy, Site, SiteParts};

pub(crate) struct AppState<S> {
  pub site: Arc<Site<S>>,
  pub strategies: Vec<Box<dyn ResolveStrategy>>,
  pub locale_redirect: bool,
  pub cookie_name: String,
}

/// Fixed endpoints plus a fallback that renders every other path as a page.
pub(crate) fn build_router<S: ContentSource + 'static>(parts: SiteParts<S>) -> Router {
  let state = Arc::new(AppState {
    site: parts.site,
    strategies: parts.strategies,
    locale_redirect: parts.locale_redirect,
    cookie_name: parts.cookie_name,
  });

  Router::new()
    .route("/robots.txt", get(seo::handle_robots::<S>))
    .route("/sitemap.xml", get(seo::handle_sitemap::<S>))
    .route("/api/locale", post(locale::handle_locale_switch::<S>))
    .route("/api/contact", post(contact::handle_contact::<S>))
    .fallback(page::handle_page::<S>)
    .with_state(state)
}
