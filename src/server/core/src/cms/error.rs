/* src/server/core/src/cms/error.rs */

use std::error::Error as _;
use std::fmt;

/// Why a CMS request produced no data. Never surfaced to visitors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
  InvalidRequest(String),
  /// Non-2xx HTTP status
  Status(u16),
  Timeout,
  /// Certificate validation failed (self-signed, expired, unknown issuer, ...)
  Tls(String),
  Transport(String),
  /// Body was not the expected JSON envelope
  Decode(String),
}

// Node/OpenSSL style codes plus the phrases rustls and native-tls use.
const TLS_MARKERS: &[&str] = &[
  "UNABLE_TO_VERIFY_LEAF_SIGNATURE",
  "SELF_SIGNED_CERT_IN_CHAIN",
  "DEPTH_ZERO_SELF_SIGNED_CERT",
  "CERT_HAS_EXPIRED",
  "ERR_TLS_CERT_ALTNAME_INVALID",
  "invalid peer certificate",
  "certificate verify failed",
  "UnknownIssuer",
  "self-signed certificate",
  "self signed certificate",
];

pub(crate) fn is_tls_failure(message: &str) -> bool {
  TLS_MARKERS.iter().any(|marker| message.contains(marker))
}

impl FetchError {
  pub(crate) fn from_reqwest(err: &reqwest::Error) -> Self {
    if err.is_timeout() {
      return Self::Timeout;
    }
    if err.is_builder() {
      return Self::InvalidRequest(err.to_string());
    }

    // The interesting part of a TLS failure sits deep in the source chain.
    let mut chain = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
      chain.push_str(": ");
      chain.push_str(&inner.to_string());
      source = inner.source();
    }

    if is_tls_failure(&chain) { Self::Tls(chain) } else { Self::Transport(chain) }
  }

  pub fn is_tls(&self) -> bool {
    matches!(self, Self::Tls(_))
  }
}

impl fmt::Display for FetchError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidRequest(msg) => write!(f, "invalid CMS request: {msg}"),
      Self::Status(code) => write!(f, "CMS responded with HTTP {code}"),
      Self::Timeout => f.write_str("CMS request timed out"),
      Self::Tls(msg) => write!(f, "TLS certificate validation failed: {msg}"),
      Self::Transport(msg) => write!(f, "CMS transport error: {msg}"),
      Self::Decode(msg) => write!(f, "malformed CMS response: {msg}"),
    }
  }
}

impl std::error::Error for FetchError {}
