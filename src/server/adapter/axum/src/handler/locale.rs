/* src/server/adapter/axum/src/handler/locale.rs */

use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use corpsite_server::{ContentSource, Locale, SiteError};
use serde::Deserialize;

use super::AppState;
use crate::error::AxumError;

const ONE_YEAR_SECS: u32 = 60 * 60 * 24 * 365;

#[derive(Deserialize)]
pub(super) struct LocaleForm {
  #[serde(default)]
  lang: String,
  #[serde(default)]
  from: Option<String>,
}

/// Same-site absolute path, or `None`. Rejects `//host` and `/\host`, which
/// browsers treat as another origin.
pub(super) fn safe_return_path(from: Option<&str>) -> Option<&str> {
  let from = from?.trim();
  let local = from.starts_with('/') && !from.starts_with("//") && !from.starts_with("/\\");
  let printable = from.bytes().all(|b| b.is_ascii_graphic());
  (local && printable).then_some(from)
}

/// `POST /api/locale` with form fields `lang` and `from`: remember the choice in a
/// cookie and send the visitor back.
pub(super) async fn handle_locale_switch<S: ContentSource + 'static>(
  State(state): State<Arc<AppState<S>>>,
  Form(form): Form<LocaleForm>,
) -> Result<Response, AxumError> {
  let locale = Locale::parse(&form.lang)
    .ok_or_else(|| SiteError::validation(format!("unsupported language '{}'", form.lang)))?;

  let target = match safe_return_path(form.from.as_deref()) {
    Some(path) => path.to_string(),
    None => state.site.routes().build_localized_url("", locale),
  };
  let cookie =
    format!("{}={locale}; Path=/; Max-Age={ONE_YEAR_SECS}; SameSite=Lax", state.cookie_name);
  tracing::debug!(%locale, %target, "locale switched");

  Ok((StatusCode::SEE_OTHER, [(header::SET_COOKIE, cookie), (header::LOCATION, target)])
    .into_response())
}
