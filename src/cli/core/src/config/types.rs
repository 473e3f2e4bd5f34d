/* src/cli/core/src/config/types.rs */

use anyhow::{Result, bail};
use corpsite_server::{Environment, TlsPolicy};
use serde::Deserialize;

/// Parsed `site.toml`. Every section is optional; a missing file behaves like an
/// empty one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
  #[serde(default)]
  pub site: SiteSection,
  #[serde(default)]
  pub cms: CmsSection,
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub build: BuildSection,
  #[serde(default)]
  pub i18n: I18nSection,
  /// From `SITE_ENV`, never from the file
  #[serde(skip)]
  pub environment: Environment,
  /// From `CMS_INSECURE_TLS`, never from the file
  #[serde(skip)]
  pub insecure_tls: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSection {
  #[serde(default = "default_site_name")]
  pub name: String,
  /// Absolute origin for canonical links, robots.txt and sitemap.xml
  #[serde(default = "default_site_url")]
  pub url: String,
  /// Directory whose files override the built-in templates
  pub templates: Option<String>,
}

impl Default for SiteSection {
  fn default() -> Self {
    Self { name: default_site_name(), url: default_site_url(), templates: None }
  }
}

fn default_site_name() -> String {
  "Corpsite".to_string()
}

fn default_site_url() -> String {
  "http://localhost:3000".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct CmsSection {
  #[serde(default = "default_cms_url")]
  pub base_url: String,
  #[serde(default = "default_timeout_ms")]
  pub timeout_ms: u64,
}

impl Default for CmsSection {
  fn default() -> Self {
    Self { base_url: default_cms_url(), timeout_ms: default_timeout_ms() }
  }
}

fn default_cms_url() -> String {
  "http://localhost:1337/api".to_string()
}

fn default_timeout_ms() -> u64 {
  10_000
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_port")]
  pub port: u16,
  /// Served under `/assets`
  #[serde(default = "default_public_dir")]
  pub public_dir: String,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { port: default_port(), public_dir: default_public_dir() }
  }
}

fn default_port() -> u16 {
  3000
}

fn default_public_dir() -> String {
  "public".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildSection {
  #[serde(default = "default_out_dir")]
  pub out_dir: String,
  /// `pagination[pageSize]` used while walking collections
  #[serde(default = "default_page_size")]
  pub page_size: u32,
}

impl Default for BuildSection {
  fn default() -> Self {
    Self { out_dir: default_out_dir(), page_size: default_page_size() }
  }
}

fn default_out_dir() -> String {
  "dist".to_string()
}

fn default_page_size() -> u32 {
  100
}

#[derive(Debug, Clone, Deserialize)]
pub struct I18nSection {
  /// Redirect un-prefixed paths to `/id/...` for visitors resolved to Indonesian
  #[serde(default = "default_redirect")]
  pub redirect: bool,
  #[serde(default = "default_cookie")]
  pub cookie: String,
}

impl Default for I18nSection {
  fn default() -> Self {
    Self { redirect: default_redirect(), cookie: default_cookie() }
  }
}

fn default_redirect() -> bool {
  true
}

fn default_cookie() -> String {
  corpsite_server::DEFAULT_LOCALE_COOKIE.to_string()
}

fn is_http_url(url: &str) -> bool {
  url.starts_with("http://") || url.starts_with("https://")
}

impl SiteConfig {
  pub fn validate(&self) -> Result<()> {
    if !is_http_url(&self.cms.base_url) {
      bail!("cms.base_url must be an http(s) URL, got \"{}\"", self.cms.base_url);
    }
    if !is_http_url(&self.site.url) {
      bail!("site.url must be an absolute http(s) URL, got \"{}\"", self.site.url);
    }
    if self.cms.timeout_ms == 0 {
      bail!("cms.timeout_ms must be greater than 0");
    }
    if self.build.page_size == 0 {
      bail!("build.page_size must be greater than 0");
    }
    let cookie_ok = !self.i18n.cookie.is_empty()
      && self.i18n.cookie.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
    if !cookie_ok {
      bail!("i18n.cookie \"{}\" is not a valid cookie name", self.i18n.cookie);
    }
    Ok(())
  }

  pub fn tls_policy(&self) -> TlsPolicy {
    TlsPolicy::new(self.environment, self.insecure_tls)
  }
}
