/* src/server/core/src/cms/mod.rs */

mod envelope;
mod error;
pub mod tls;


use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;

pub use envelope::{Envelope, PaginationMeta};
pub use error::FetchError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Per-call options. Query entries with a `None` value are skipped.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
  pub query: Vec<(String, Option<String>)>,
  pub headers: Vec<(String, String)>,
  pub timeout: Option<Duration>,
}

impl RequestOptions {
  pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
    self.query.push((key.into(), Some(value.to_string())));
    self
  }

  pub fn query_opt<V: ToString>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
    self.query.push((key.into(), value.as_ref().map(ToString::to_string)));
    self
  }

  pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.headers.push((name.into(), value.into()));
    self
  }

  pub fn timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }
}

/// Read-only JSON client for the headless CMS.
///
/// Every call is a single GET bounded by a timeout. Failures come back as
/// [`FetchError`] after being logged; nothing is retried here.
#[derive(Clone)]
pub struct CmsClient {
  base_url: String,
  http: reqwest::Client,
  timeout: Duration,
}

impl CmsClient {
  /// Uses the process-wide client, so [`tls::install`] must run first to take effect.
  pub fn new(base_url: impl Into<String>) -> Self {
    Self { base_url: base_url.into(), http: tls::shared_client(), timeout: DEFAULT_TIMEOUT }
  }

  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  pub fn build_url(
    &self,
    endpoint: &str,
    query: &[(String, Option<String>)],
  ) -> Result<Url, FetchError> {
    let joined =
      format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint.trim_start_matches('/'));
    let mut url =
      Url::parse(&joined).map_err(|e| FetchError::InvalidRequest(format!("{joined}: {e}")))?;
    {
      let mut pairs = url.query_pairs_mut();
      for (key, value) in query {
        if let Some(value) = value {
          pairs.append_pair(key, value);
        }
      }
    }
    // An empty serializer still leaves a dangling '?'
    if url.query() == Some("") {
      url.set_query(None);
    }
    Ok(url)
  }

  pub async fn request<T: DeserializeOwned>(
    &self,
    endpoint: &str,
    opts: &RequestOptions,
  ) -> Result<T, FetchError> {
    let result = self.request_inner(endpoint, opts).await;
    if let Err(ref err) = result {
      log_failure(endpoint, err);
    }
    result
  }

  async fn request_inner<T: DeserializeOwned>(
    &self,
    endpoint: &str,
    opts: &RequestOptions,
  ) -> Result<T, FetchError> {
    let url = self.build_url(endpoint, &opts.query)?;
    let mut req = self.http.get(url).header(reqwest::header::ACCEPT, "application/json");
    for (name, value) in &opts.headers {
      req = req.header(name.as_str(), value.as_str());
    }

    let timeout = opts.timeout.unwrap_or(self.timeout);
    // Dropping the future on expiry aborts the in-flight call.
    let call = async {
      let resp = req.send().await.map_err(|e| FetchError::from_reqwest(&e))?;
      let status = resp.status();
      if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
      }
      resp.bytes().await.map_err(|e| FetchError::from_reqwest(&e))
    };
    let body = tokio::time::timeout(timeout, call).await.map_err(|_| FetchError::Timeout)??;

    serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
  }
}

fn log_failure(endpoint: &str, err: &FetchError) {
  match err {
    FetchError::Tls(_) => tracing::error!(
      endpoint,
      error = %err,
      "CMS certificate rejected; set CMS_INSECURE_TLS=1 outside production to accept self-signed certificates"
    ),
    FetchError::Status(status) => {
      tracing::warn!(endpoint, status, "CMS returned non-success status");
    }
    _ => tracing::warn!(endpoint, error = %err, "CMS request failed"),
  }
}
