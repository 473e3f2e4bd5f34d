/* src/server/core/src/cms/tls.rs */

use std::sync::OnceLock;

/// Deployment environment, read once at startup.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
  Production,
  #[default]
  Development,
}

impl Environment {
  /// `production` / `prod` (any case) -> Production; anything else, including unset,
  /// -> Development.
  pub fn parse(raw: Option<&str>) -> Self {
    match raw.map(|s| s.trim().to_ascii_lowercase()) {
      Some(s) if s == "production" || s == "prod" => Self::Production,
      _ => Self::Development,
    }
  }

  pub fn is_production(self) -> bool {
    self == Self::Production
  }
}

/// Whether outbound CMS calls may skip certificate validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlsPolicy {
  pub environment: Environment,
  /// Explicit developer opt-in (`CMS_INSECURE_TLS=1`)
  pub allow_insecure: bool,
}

impl TlsPolicy {
  pub fn new(environment: Environment, allow_insecure: bool) -> Self {
    Self { environment, allow_insecure }
  }

  /// Production always validates certificates, whatever the opt-in says.
  pub fn relaxed(self) -> bool {
    self.allow_insecure && !self.environment.is_production()
  }
}

struct SharedHttp {
  client: reqwest::Client,
  relaxed: bool,
}

static SHARED: OnceLock<SharedHttp> = OnceLock::new();

fn build(relaxed: bool) -> SharedHttp {
  if relaxed {
    match reqwest::Client::builder().danger_accept_invalid_certs(true).build() {
      Ok(client) => {
        tracing::warn!("TLS certificate validation disabled for CMS requests (development only)");
        return SharedHttp { client, relaxed: true };
      }
      Err(e) => {
        tracing::error!(error = %e, "failed to build relaxed TLS client; validating certificates");
      }
    }
  }
  SharedHttp { client: reqwest::Client::new(), relaxed: false }
}

/// Install the process-wide HTTP client for `policy`. Only the first call has any
/// effect; later calls (and clients created before it) see the state it fixed.
/// Returns whether certificate validation is relaxed.
pub fn install(policy: TlsPolicy) -> bool {
  SHARED.get_or_init(|| build(policy.relaxed())).relaxed
}

/// Process-wide client. Strict TLS unless [`install`] relaxed it first.
pub fn shared_client() -> reqwest::Client {
  SHARED.get_or_init(|| build(false)).client.clone()
}
