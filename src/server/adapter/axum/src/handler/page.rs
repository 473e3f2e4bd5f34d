/* src/server/adapter/axum/src/handler/page.rs */

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};
use corpsite_server::{
  ContentSource, Locale, PageRoute, ResolveData, SiteError, parse_path, resolve_chain,
};

use super::AppState;
use crate::error::AxumError;

/// Where an un-prefixed request should go instead, if anywhere: the Indonesian
/// URL of the same page when the visitor resolves to `id`.
fn locale_redirect<S: ContentSource + 'static>(
  state: &AppState<S>,
  uri: &Uri,
  headers: &HeaderMap,
) -> Option<String> {
  let parsed = parse_path(uri.path());
  if !state.locale_redirect || parsed.locale != Locale::En {
    return None;
  }
  let routes = state.site.routes();
  if PageRoute::from_path(routes, &parsed) == PageRoute::NotFound {
    return None;
  }

  let data = ResolveData {
    url: uri.path_and_query().map_or("", |pq| pq.as_str()),
    cookie_header: headers.get(header::COOKIE).and_then(|v| v.to_str().ok()),
    accept_language: headers.get(header::ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok()),
    default_locale: Locale::En,
  };
  match resolve_chain(&state.strategies, &data) {
    Locale::Id => Some(routes.localize_path(uri.path(), Locale::Id)),
    Locale::En => None,
  }
}

/// Fallback for every path not claimed by a fixed route.
pub(super) async fn handle_page<S: ContentSource + 'static>(
  State(state): State<Arc<AppState<S>>>,
  method: Method,
  uri: Uri,
  headers: HeaderMap,
) -> Response {
  if method != Method::GET && method != Method::HEAD {
    return AxumError(SiteError::with_code("METHOD_NOT_ALLOWED", "Method not allowed"))
      .into_response();
  }

  if let Some(target) = locale_redirect(&state, &uri, &headers) {
    tracing::debug!(from = uri.path(), to = %target, "redirecting to preferred locale");
    return (StatusCode::FOUND, [(header::LOCATION, target)]).into_response();
  }

  let page = state.site.render(uri.path()).await;
  let status = StatusCode::from_u16(page.status).unwrap_or(StatusCode::OK);
  if page.route == PageRoute::NotFound {
    tracing::debug!(path = uri.path(), "page not found");
  }

  let mut response = (status, Html(page.html)).into_response();
  response
    .headers_mut()
    .insert(header::CONTENT_LANGUAGE, HeaderValue::from_static(page.locale.as_str()));
  if state.locale_redirect && page.locale == Locale::En {
    let vary = HeaderValue::from_static("Cookie, Accept-Language");
    response.headers_mut().insert(header::VARY, vary);
  }
  response
}
