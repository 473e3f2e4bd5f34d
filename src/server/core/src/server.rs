/* src/server/core/src/server.rs */

use std::sync::Arc;

use crate::collections::ContentSource;
use crate::errors::SiteError;
use crate::resolve::{ResolveStrategy, from_accept_language, from_cookie, from_url_query};
use crate::routes::RouteTable;
use crate::site::{Site, SiteSettings};
use crate::template::TemplateSet;

pub const DEFAULT_LOCALE_COOKIE: &str = "lang";

/// Framework-agnostic parts extracted from `SiteServer`.
/// Adapter crates consume this to build framework-specific routers.
pub struct SiteParts<S> {
  pub site: Arc<Site<S>>,
  pub strategies: Vec<Box<dyn ResolveStrategy>>,
  /// Redirect un-prefixed paths to `/id/...` when the visitor resolves to Indonesian
  pub locale_redirect: bool,
  pub cookie_name: String,
}

pub struct SiteServer<S> {
  source: S,
  routes: Option<RouteTable>,
  templates: Option<TemplateSet>,
  settings: SiteSettings,
  strategies: Option<Vec<Box<dyn ResolveStrategy>>>,
  locale_redirect: bool,
  cookie_name: String,
}

impl<S: ContentSource + 'static> SiteServer<S> {
  pub fn new(source: S) -> Self {
    Self {
      source,
      routes: None,
      templates: None,
      settings: SiteSettings::default(),
      strategies: None,
      locale_redirect: true,
      cookie_name: DEFAULT_LOCALE_COOKIE.to_string(),
    }
  }

  pub fn routes(mut self, routes: RouteTable) -> Self {
    self.routes = Some(routes);
    self
  }

  pub fn templates(mut self, templates: TemplateSet) -> Self {
    self.templates = Some(templates);
    self
  }

  pub fn settings(mut self, settings: SiteSettings) -> Self {
    self.settings = settings;
    self
  }

  /// Replaces the default query -> cookie -> Accept-Language chain.
  pub fn resolve_strategies(mut self, strategies: Vec<Box<dyn ResolveStrategy>>) -> Self {
    self.strategies = Some(strategies);
    self
  }

  pub fn locale_redirect(mut self, enabled: bool) -> Self {
    self.locale_redirect = enabled;
    self
  }

  pub fn cookie_name(mut self, name: impl Into<String>) -> Self {
    self.cookie_name = name.into();
    self
  }

  /// Consume the builder. Fails only when the built-in templates cannot be loaded.
  pub fn into_parts(self) -> Result<SiteParts<S>, SiteError> {
    let templates = match self.templates {
      Some(t) => t,
      None => TemplateSet::builtin()?,
    };
    let strategies = self.strategies.unwrap_or_else(|| {
      vec![from_url_query("locale"), from_cookie(&self.cookie_name), from_accept_language()]
    });
    let site = Site::new(self.source, self.routes.unwrap_or_default(), templates, self.settings);

    Ok(SiteParts {
      site: Arc::new(site),
      strategies,
      locale_redirect: self.locale_redirect,
      cookie_name: self.cookie_name,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_support::MemorySource;

  #[test]
  fn defaults() {
    let parts = SiteServer::new(MemorySource::default()).into_parts().unwrap();
    assert!(parts.locale_redirect);
    assert_eq!(parts.cookie_name, "lang");
    let kinds: Vec<_> = parts.strategies.iter().map(|s| s.kind()).collect();
    assert_eq!(kinds, vec!["url_query", "cookie", "accept_language"]);
  }

  #[test]
  fn custom_cookie_feeds_default_chain() {
    let parts = SiteServer::new(MemorySource::default())
      .cookie_name("site_lang")
      .locale_redirect(false)
      .into_parts()
      .unwrap();
    assert!(!parts.locale_redirect);
    assert_eq!(parts.cookie_name, "site_lang");
  }
}
