/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use corpsite_server::Environment;

use super::types::SiteConfig;
use crate::ui;

pub const CONFIG_FILE: &str = "site.toml";

/// Walk up from `start` until a directory holding `site.toml` is found.
pub fn find_site_config(start: &Path) -> Result<PathBuf> {
  for dir in start.ancestors() {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
  }
  bail!("no {CONFIG_FILE} found in {} or any parent directory", start.display());
}

pub fn load_site_config(path: &Path) -> Result<SiteConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

fn is_truthy(raw: &str) -> bool {
  matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

/// Overlay environment variables on a loaded config. `lookup` is `std::env::var`
/// in production and a map in tests.
pub fn apply_env(config: &mut SiteConfig, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
  let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

  config.environment = Environment::parse(lookup("SITE_ENV").as_deref());
  config.insecure_tls = lookup("CMS_INSECURE_TLS").is_some_and(|v| is_truthy(&v));
  if let Some(url) = non_empty("SITE_URL") {
    config.site.url = url.trim().to_string();
  }
  if let Some(url) = non_empty("CMS_URL") {
    config.cms.base_url = url.trim().to_string();
  }
  if let Some(port) = non_empty("PORT") {
    config.server.port =
      port.trim().parse().with_context(|| format!("PORT must be a port number, got \"{port}\""))?;
  }
  Ok(())
}

/// Load the explicit config, or the discovered one, or defaults when there is none;
/// then apply the environment and validate. Returns the config and the directory
/// relative paths in it are resolved against.
pub fn resolve_config(
  explicit: Option<&Path>,
  lookup: impl Fn(&str) -> Option<String>,
) -> Result<(SiteConfig, PathBuf)> {
  let cwd = std::env::current_dir().context("failed to get current directory")?;
  let path = match explicit {
    Some(path) => Some(path.to_path_buf()),
    None => find_site_config(&cwd).ok(),
  };

  let (mut config, base_dir) = match path {
    Some(path) => {
      let config = load_site_config(&path)?;
      let base_dir = path.parent().map_or_else(|| cwd.clone(), Path::to_path_buf);
      ui::detail(&format!("config {}", path.display()));
      (config, base_dir)
    }
    None => {
      ui::detail(&format!("no {CONFIG_FILE} found, using defaults"));
      (SiteConfig::default(), cwd)
    }
  };

  apply_env(&mut config, lookup)?;
  config.validate()?;
  Ok((config, base_dir))
}
