/* src/server/core/src/errors.rs */

use std::fmt;

/// Error surfaced to visitors or operators. Outbound CMS failures never become a
/// `SiteError`; they are carried as [`crate::cms::FetchError`] and degrade to empty content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteError {
  code: String,
  message: String,
  status: u16,
}

fn default_status(code: &str) -> u16 {
  match code {
    "VALIDATION_ERROR" => 400,
    "NOT_FOUND" => 404,
    "METHOD_NOT_ALLOWED" => 405,
    _ => 500,
  }
}

impl SiteError {
  pub fn new(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
    Self { code: code.into(), message: message.into(), status }
  }

  pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
    let code = code.into();
    let status = default_status(&code);
    Self { code, message: message.into(), status }
  }

  pub fn validation(msg: impl Into<String>) -> Self {
    Self::with_code("VALIDATION_ERROR", msg)
  }

  /// Misconfiguration detected at startup (route table, templates).
  pub fn config(msg: impl Into<String>) -> Self {
    Self::with_code("CONFIG_ERROR", msg)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }
}

impl fmt::Display for SiteError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for SiteError {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_status_known_codes() {
    assert_eq!(default_status("VALIDATION_ERROR"), 400);
    assert_eq!(default_status("NOT_FOUND"), 404);
    assert_eq!(default_status("METHOD_NOT_ALLOWED"), 405);
    assert_eq!(default_status("CONFIG_ERROR"), 500);
  }

  #[test]
  fn convenience_constructors() {
    assert_eq!(SiteError::validation("x").status(), 400);
    assert_eq!(SiteError::config("x").code(), "CONFIG_ERROR");
  }

  #[test]
  fn explicit_status_wins() {
    let err = SiteError::new("GONE", "moved", 410);
    assert_eq!(err.status(), 410);
    assert_eq!(err.message(), "moved");
  }

  #[test]
  fn display_format() {
    assert_eq!(SiteError::validation("bad lang").to_string(), "VALIDATION_ERROR: bad lang");
  }
}
