/* src/server/adapter/axum/src/handler/contact.rs */

use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use corpsite_server::{ContentSource, Locale, SiteError};
use serde::Deserialize;

use super::AppState;
use crate::error::AxumError;

const MAX_MESSAGE_LEN: usize = 5000;

#[derive(Deserialize)]
pub(super) struct ContactForm {
  #[serde(default)]
  lang: String,
  #[serde(default)]
  name: String,
  #[serde(default)]
  email: String,
  #[serde(default)]
  department: String,
  #[serde(default)]
  message: String,
}

impl ContactForm {
  fn validate(&self) -> Result<(), SiteError> {
    if self.name.trim().is_empty() {
      return Err(SiteError::validation("name is required"));
    }
    let email = self.email.trim();
    let plausible = email.split_once('@').is_some_and(|(user, host)| {
      !user.is_empty() && host.contains('.') && !email.contains(char::is_whitespace)
    });
    if !plausible {
      return Err(SiteError::validation("a valid email address is required"));
    }
    let message = self.message.trim();
    if message.is_empty() {
      return Err(SiteError::validation("message is required"));
    }
    if message.len() > MAX_MESSAGE_LEN {
      return Err(SiteError::validation(format!(
        "message is longer than {MAX_MESSAGE_LEN} characters"
      )));
    }
    Ok(())
  }
}

/// `POST /api/contact`: validate the enquiry, record it in the log and send the
/// visitor back to the contact page of their language.
pub(super) async fn handle_contact<S: ContentSource + 'static>(
  State(state): State<Arc<AppState<S>>>,
  Form(form): Form<ContactForm>,
) -> Result<Response, AxumError> {
  form.validate()?;
  let locale = Locale::parse(&form.lang).unwrap_or(Locale::En);
  let department = Some(form.department.trim()).filter(|d| !d.is_empty());

  tracing::info!(
    name = form.name.trim(),
    email = form.email.trim(),
    department,
    message_len = form.message.trim().len(),
    "contact request received"
  );

  let target = format!("{}?sent=1", state.site.routes().build_localized_url("contact", locale));
  Ok((StatusCode::SEE_OTHER, [(header::LOCATION, target)]).into_response())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn form(name: &str, email: &str, message: &str) -> ContactForm {
    ContactForm {
      lang: "en".into(),
      name: name.into(),
      email: email.into(),
      department: String::new(),
      message: message.into(),
    }
  }

  #[test]
  fn validation() {
    assert!(form("Rina", "rina@acme.example", "Hello").validate().is_ok());
    assert!(form(" ", "rina@acme.example", "Hello").validate().is_err());
    assert!(form("Rina", "rina.acme.example", "Hello").validate().is_err());
    assert!(form("Rina", "rina@localhost", "Hello").validate().is_err());
    assert!(form("Rina", "ri na@acme.example", "Hello").validate().is_err());
    assert!(form("Rina", "rina@acme.example", "  ").validate().is_err());
    let long = "x".repeat(MAX_MESSAGE_LEN + 1);
    assert!(form("Rina", "rina@acme.example", &long).validate().is_err());
  }
}
