/* src/cli/core/src/site.rs */

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use corpsite_server::{Cms, CmsClient, SiteServer, SiteSettings, TemplateSet};

use crate::config::SiteConfig;

/// Site builder for `config`, shared by `serve` and `prerender`.
pub(crate) fn site_server(config: &SiteConfig, base_dir: &Path) -> Result<SiteServer<Cms>> {
  let client = CmsClient::new(config.cms.base_url.as_str())
    .with_timeout(Duration::from_millis(config.cms.timeout_ms));
  let settings = SiteSettings { name: config.site.name.clone(), base_url: config.site.url.clone() };

  let mut server = SiteServer::new(Cms::new(client))
    .settings(settings)
    .locale_redirect(config.i18n.redirect)
    .cookie_name(config.i18n.cookie.as_str());

  if let Some(dir) = &config.site.templates {
    let dir = base_dir.join(dir);
    let templates = TemplateSet::from_dir(&dir)
      .with_context(|| format!("failed to load templates from {}", dir.display()))?;
    server = server.templates(templates);
  }
  Ok(server)
}
