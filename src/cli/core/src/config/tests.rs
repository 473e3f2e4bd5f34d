/* src/cli/core/src/config/tests.rs */

use std::collections::HashMap;

use corpsite_server::Environment;

use super::loader::{CONFIG_FILE, apply_env, find_site_config, load_site_config};
use super::*;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
  let map: HashMap<String, String> =
    pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
  move |key: &str| map.get(key).cloned()
}

#[test]
fn empty_file_uses_defaults() {
  let config: SiteConfig = toml::from_str("").unwrap();
  assert_eq!(config.site.name, "Corpsite");
  assert_eq!(config.cms.base_url, "http://localhost:1337/api");
  assert_eq!(config.cms.timeout_ms, 10_000);
  assert_eq!(config.server.port, 3000);
  assert_eq!(config.server.public_dir, "public");
  assert_eq!(config.build.out_dir, "dist");
  assert_eq!(config.build.page_size, 100);
  assert!(config.i18n.redirect);
  assert_eq!(config.i18n.cookie, "lang");
  assert_eq!(config.environment, Environment::Development);
  assert!(config.validate().is_ok());
}

#[test]
fn parse_full_file() {
  let config: SiteConfig = toml::from_str(
    r#"
[site]
name = "Acme IT"
url = "https://acme.example"
templates = "theme"

[cms]
base_url = "https://cms.acme.example/api"
timeout_ms = 2500

[server]
port = 8080
public_dir = "static"

[build]
out_dir = "out"
page_size = 25

[i18n]
redirect = false
cookie = "site_lang"
"#,
  )
  .unwrap();
  assert_eq!(config.site.name, "Acme IT");
  assert_eq!(config.site.templates.as_deref(), Some("theme"));
  assert_eq!(config.cms.timeout_ms, 2500);
  assert_eq!(config.server.port, 8080);
  assert_eq!(config.build.page_size, 25);
  assert!(!config.i18n.redirect);
  assert_eq!(config.i18n.cookie, "site_lang");
  assert!(config.validate().is_ok());
}

#[test]
fn environment_overrides_file() {
  let mut config = SiteConfig::default();
  let lookup = env(&[
    ("SITE_URL", "https://acme.example"),
    ("CMS_URL", " https://cms.acme.example/api "),
    ("PORT", "4000"),
    ("CMS_INSECURE_TLS", "1"),
  ]);
  apply_env(&mut config, lookup).unwrap();
  assert_eq!(config.site.url, "https://acme.example");
  assert_eq!(config.cms.base_url, "https://cms.acme.example/api");
  assert_eq!(config.server.port, 4000);
  assert!(config.insecure_tls);
  assert!(config.tls_policy().relaxed());
}

#[test]
fn empty_variables_are_ignored() {
  let mut config = SiteConfig::default();
  apply_env(&mut config, env(&[("SITE_URL", ""), ("CMS_INSECURE_TLS", "0")])).unwrap();
  assert_eq!(config.site.url, "http://localhost:3000");
  assert!(!config.insecure_tls);
}

#[test]
fn production_never_relaxes_tls() {
  let mut config = SiteConfig::default();
  apply_env(&mut config, env(&[("SITE_ENV", "production"), ("CMS_INSECURE_TLS", "true")]))
    .unwrap();
  assert!(config.environment.is_production());
  assert!(config.insecure_tls);
  assert!(!config.tls_policy().relaxed());
}

#[test]
fn invalid_port_is_an_error() {
  let mut config = SiteConfig::default();
  let err = apply_env(&mut config, env(&[("PORT", "eighty")])).unwrap_err();
  assert!(err.to_string().contains("PORT"));
}

#[test]
fn validation_failures() {
  let mut config = SiteConfig::default();
  config.cms.base_url = "cms.local/api".into();
  assert!(config.validate().is_err());

  let mut config = SiteConfig::default();
  config.build.page_size = 0;
  assert!(config.validate().is_err());

  let mut config = SiteConfig::default();
  config.i18n.cookie = "lang; Path=/".into();
  assert!(config.validate().is_err());

  let mut config = SiteConfig::default();
  config.site.url = "/relative".into();
  assert!(config.validate().is_err());
}

#[test]
fn find_config_walks_upward() {
  let tmp = tempfile::tempdir().unwrap();
  let nested = tmp.path().join("content/blog/drafts");
  std::fs::create_dir_all(&nested).unwrap();
  std::fs::write(tmp.path().join(CONFIG_FILE), "[site]\nname = \"Found\"\n").unwrap();

  let found = find_site_config(&nested).unwrap();
  assert_eq!(found, tmp.path().join(CONFIG_FILE));
  assert_eq!(load_site_config(&found).unwrap().site.name, "Found");
}

#[test]
fn malformed_file_reports_path() {
  let tmp = tempfile::tempdir().unwrap();
  let path = tmp.path().join(CONFIG_FILE);
  std::fs::write(&path, "[server]\nport = \"not a number\"\n").unwrap();

  let err = load_site_config(&path).unwrap_err();
  assert!(format!("{err:#}").contains("site.toml"));
}

#[test]
fn explicit_config_resolves_relative_to_its_directory() {
  let tmp = tempfile::tempdir().unwrap();
  let path = tmp.path().join(CONFIG_FILE);
  std::fs::write(&path, "[build]\nout_dir = \"public-html\"\n").unwrap();

  let lookup = env(&[("PORT", "9000")]);
  let (config, base_dir) = resolve_config(Some(path.as_path()), lookup).unwrap();
  assert_eq!(base_dir, tmp.path());
  assert_eq!(config.build.out_dir, "public-html");
  assert_eq!(config.server.port, 9000);
}
