/* src/server/core/src/site.rs */

use std::collections::BTreeSet;
use std::sync::Arc;

use serde_json::{Map, Value, json};

use crate::collections::ContentSource;
use crate::locale::Locale;
use crate::page::{LoadContext, PageRoute, loaders_for, run_loaders};
use crate::prerender;
use crate::routes::{RouteTable, parse_path};
use crate::sitemap;
use crate::template::{TemplateSet, inject};

/// Navigation order, by route key.
const NAV: &[&str] = &[
  "",
  "about",
  "solution",
  "case-study",
  "blog",
  "partners",
  "certifications",
  "careers",
  "contact",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
  pub name: String,
  /// Absolute origin used in canonical links, robots.txt and sitemap.xml
  pub base_url: String,
}

impl Default for SiteSettings {
  fn default() -> Self {
    Self { name: "Corpsite".into(), base_url: "http://localhost:3000".into() }
  }
}

#[derive(Debug, Clone)]
pub struct RenderedPage {
  pub status: u16,
  pub html: String,
  pub route: PageRoute,
  pub locale: Locale,
}

/// Renders pages from a content source. Shared by the HTTP server and the prerenderer.
pub struct Site<S> {
  source: Arc<S>,
  routes: Arc<RouteTable>,
  templates: TemplateSet,
  settings: SiteSettings,
}

impl<S: ContentSource + 'static> Site<S> {
  pub fn new(
    source: S,
    routes: RouteTable,
    templates: TemplateSet,
    settings: SiteSettings,
  ) -> Self {
    Self { source: Arc::new(source), routes: Arc::new(routes), templates, settings }
  }

  pub fn routes(&self) -> &RouteTable {
    &self.routes
  }

  pub fn settings(&self) -> &SiteSettings {
    &self.settings
  }

  /// Render whatever page `path` addresses. Unknown paths, and detail pages whose
  /// entity does not exist, render the not-found page with status 404.
  pub async fn render(&self, path: &str) -> RenderedPage {
    let parsed = parse_path(path);
    let locale = parsed.locale;
    let route = PageRoute::from_path(&self.routes, &parsed);

    let ctx = LoadContext { source: self.source.clone(), routes: self.routes.clone(), locale };
    let data = run_loaders(loaders_for(&route, &ctx)).await;

    let route = match route.primary_key() {
      Some(key) if data.get(key).is_none_or(Value::is_null) => {
        tracing::debug!(path, "detail entity not found");
        PageRoute::NotFound
      }
      _ => route,
    };
    self.render_route(route, locale, path, data)
  }

  fn render_route(
    &self,
    route: PageRoute,
    locale: Locale,
    path: &str,
    mut data: Map<String, Value>,
  ) -> RenderedPage {
    let t = self.templates.messages(locale);
    let table = &*self.routes;
    let current = route.path(table, locale).unwrap_or_else(|| path.to_string());
    let other = locale.other();
    let alternate =
      route.path(table, other).unwrap_or_else(|| table.build_localized_url("", other));

    let nav: Vec<Value> = NAV
      .iter()
      .map(|&key| {
        let label_key = if key.is_empty() { "home" } else { key };
        json!({
          "label": t["nav"][label_key],
          "href": table.build_localized_url(key, locale),
          "current": (route.nav_key() == Some(key)).then_some("page"),
        })
      })
      .collect();

    let fallback = data.values().any(|v| v.get("fallback") == Some(&Value::Bool(true)));
    let (title, description) = describe(&route, &data, &t);

    let site = json!({ "name": self.settings.name, "url": self.settings.base_url });
    data.insert("site".into(), site);
    data.insert("locale".into(), json!(locale));
    data.insert("home_href".into(), json!(table.build_localized_url("", locale)));
    data.insert("contact_href".into(), json!(table.build_localized_url("contact", locale)));
    data.insert("nav".into(), Value::Array(nav));
    data.insert(
      "alternate".into(),
      json!({
        "locale": other,
        "href": alternate,
        "absolute": self.absolute(&alternate),
        "label": t["switch"]["label"],
      }),
    );
    data.insert(
      "page".into(),
      json!({
        "title": title,
        "description": description,
        "path": current,
        "canonical": self.absolute(&current),
        "section": route.section(),
      }),
    );
    data.insert("fallback".into(), Value::Bool(fallback));
    data.insert("t".into(), t);

    let html = inject(self.templates.page(route.template()), &Value::Object(data));
    RenderedPage { status: route.status(), html, route, locale }
  }

  fn absolute(&self, path: &str) -> String {
    format!("{}{path}", self.settings.base_url.trim_end_matches('/'))
  }

  pub fn robots_txt(&self) -> String {
    sitemap::robots_txt(&self.settings.base_url)
  }

  pub fn sitemap_xml(&self) -> String {
    sitemap::sitemap_xml(&self.settings.base_url, &self.routes)
  }

  pub async fn prerender_paths(&self, page_size: u32) -> BTreeSet<String> {
    prerender::enumerate_paths(&*self.source, &self.routes, page_size).await
  }
}

/// Page title and meta description: the detail entity when there is one, else the
/// section strings.
fn describe(route: &PageRoute, data: &Map<String, Value>, t: &Value) -> (Value, Value) {
  let section = &t[route.section()];
  let entity = route.primary_key().and_then(|key| data.get(key)).filter(|v| !v.is_null());
  match entity {
    Some(entity) => {
      let title = [&entity["title"], &entity["name"]]
        .into_iter()
        .find(|v| v.is_string())
        .cloned()
        .unwrap_or_else(|| section["title"].clone());
      let description = [&entity["excerpt"], &entity["summary"], &entity["description"]]
        .into_iter()
        .find(|v| v.as_str().is_some_and(|s| !s.is_empty()))
        .cloned()
        .unwrap_or_else(|| section["intro"].clone());
      (title, description)
    }
    None => (section["title"].clone(), section["intro"].clone()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_support::{MemorySource, sample_source};

  fn site(source: MemorySource) -> Site<MemorySource> {
    Site::new(
      source,
      RouteTable::default(),
      TemplateSet::builtin().unwrap(),
      SiteSettings { name: "Acme IT".into(), base_url: "https://acme.example/".into() },
    )
  }

  #[tokio::test]
  async fn renders_home_in_both_languages() {
    let s = site(sample_source());
    let en = s.render("/").await;
    assert_eq!(en.status, 200);
    assert!(en.html.contains(r#"<html lang="en""#));
    assert!(en.html.contains("Post 1"));
    assert!(en.html.contains(r#"href="/id""#));

    let id = s.render("/id").await;
    assert!(id.html.contains(r#"<html lang="id""#));
    assert!(id.html.contains(r#"href="/id/tentang-kami""#));
    assert!(id.html.contains(r#"<link href="https://acme.example/id" rel="canonical">"#));
  }

  #[tokio::test]
  async fn unknown_path_is_404() {
    let page = site(sample_source()).render("/id/about").await;
    assert_eq!(page.status, 404);
    assert_eq!(page.route, PageRoute::NotFound);
    assert_eq!(page.locale, Locale::Id);
  }

  #[tokio::test]
  async fn missing_entity_is_404() {
    let page = site(sample_source()).render("/blog/read/x/nope").await;
    assert_eq!(page.status, 404);
  }

  #[tokio::test]
  async fn blog_post_page() {
    let page = site(sample_source()).render("/blog/read/hello-world/post-1").await;
    assert_eq!(page.status, 200);
    assert!(page.html.contains("<title>Post 1 | Acme IT</title>"));
    assert!(page.html.contains(r#"href="/id/blog/read/hello-world/post-1""#));
  }

  #[tokio::test]
  async fn cms_outage_renders_empty_states() {
    let mut source = sample_source();
    source.down = true;
    let page = site(source).render("/partners").await;
    assert_eq!(page.status, 200);
    assert!(page.html.contains(r#"class="empty""#));
  }

  #[tokio::test]
  async fn active_nav_entry_marked() {
    let page = site(sample_source()).render("/id/studi-kasus").await;
    assert!(page.html.contains(r#"aria-current="page""#));
  }

  #[tokio::test]
  async fn contact_page_has_form() {
    let s = site(sample_source());
    let en = s.render("/contact").await;
    assert_eq!(en.status, 200);
    assert!(en.html.contains(r#"<form method="post" action="/api/contact">"#));
    assert!(en.html.contains(r#"<input value="en" type="hidden" name="lang">"#));
    assert!(en.html.contains(r#"<option value="Sales">Sales</option>"#));
    assert!(en.html.contains(r#"name="message""#));

    let id = s.render("/id/kontak").await;
    assert_eq!(id.status, 200);
    assert!(id.html.contains(r#"<form method="post" action="/api/contact">"#));
    assert!(id.html.contains(r#"<input value="id" type="hidden" name="lang">"#));
    assert!(id.html.contains("Kirim pesan"));
  }

  #[tokio::test]
  async fn not_found_links_home() {
    let page = site(sample_source()).render("/nope").await;
    assert_eq!(page.status, 404);
    assert!(page.html.contains(r#"<a href="/" class="cta">"#));
  }
}
