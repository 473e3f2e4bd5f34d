/* src/server/core/src/page/tests.rs */

use std::sync::Arc;

use serde_json::Value;

use super::*;
use crate::routes::parse_path;
use crate::test_support::sample_source;

fn route(path: &str) -> PageRoute {
  PageRoute::from_path(&RouteTable::default(), &parse_path(path))
}

fn ctx(locale: Locale) -> LoadContext<crate::test_support::MemorySource> {
  LoadContext {
    source: Arc::new(sample_source()),
    routes: Arc::new(RouteTable::default()),
    locale,
  }
}

#[test]
fn static_pages_in_both_languages() {
  assert_eq!(route("/"), PageRoute::Home);
  assert_eq!(route("/id"), PageRoute::Home);
  assert_eq!(route("/about"), PageRoute::About);
  assert_eq!(route("/id/tentang-kami"), PageRoute::About);
  assert_eq!(route("/id/kontak"), PageRoute::Contact);
  assert_eq!(route("/careers/"), PageRoute::Careers);
}

#[test]
fn slugs_must_match_the_path_language() {
  assert_eq!(route("/id/about"), PageRoute::NotFound);
  assert_eq!(route("/tentang-kami"), PageRoute::NotFound);
  assert_eq!(route("/pricing"), PageRoute::NotFound);
  assert_eq!(route("/about/team"), PageRoute::NotFound);
}

#[test]
fn dynamic_pages() {
  assert_eq!(
    route("/id/blog/read/halo-dunia/post-3"),
    PageRoute::BlogPost { slug: "halo-dunia".into(), document_id: "post-3".into() }
  );
  assert_eq!(route("/blog/cloud"), PageRoute::BlogCategory { slug: "cloud".into() });
  assert_eq!(route("/id/studi-kasus/erp"), PageRoute::CaseStudy { slug: "erp".into() });
  assert_eq!(route("/solution/cloud-solutions"), PageRoute::Solution {
    slug: "cloud-solutions".into()
  });
  assert_eq!(route("/blog/read/only-slug"), PageRoute::NotFound);
}

#[test]
fn page_paths_round_trip() {
  let table = RouteTable::default();
  for path in ["/", "/id", "/case-study/erp", "/id/studi-kasus/erp", "/id/blog/read/a/b"] {
    let parsed = parse_path(path);
    let page = PageRoute::from_path(&table, &parsed);
    assert_eq!(page.path(&table, parsed.locale).as_deref(), Some(path));
  }
  assert_eq!(
    PageRoute::About.path(&table, Locale::Id).as_deref(),
    Some("/id/tentang-kami")
  );
  assert_eq!(PageRoute::NotFound.path(&table, Locale::En), None);
}

#[test]
fn not_found_status() {
  assert_eq!(PageRoute::NotFound.status(), 404);
  assert_eq!(PageRoute::Partners.status(), 200);
}

#[tokio::test]
async fn loaders_fan_out_and_collect() {
  let c = ctx(Locale::En);
  let data = run_loaders(loaders_for(&PageRoute::Home, &c)).await;
  let keys: Vec<&str> = data.keys().map(String::as_str).collect();
  for key in ["posts", "projects", "testimonies", "partners", "areas"] {
    assert!(keys.contains(&key), "{key}");
  }
  assert_eq!(data["posts"]["items"].as_array().unwrap().len(), 2);
  assert_eq!(data["partners"]["items"][0]["name"], "Acme Networks");
  assert_eq!(data["testimonies"]["empty"], true);
  assert_eq!(data["areas"]["items"][0]["href"], "/solution/data-center-infrastructure");
}

#[tokio::test]
async fn failing_source_still_yields_every_key() {
  let mut source = sample_source();
  source.down = true;
  let c = LoadContext { source: Arc::new(source), ..ctx(Locale::En) };
  let data = run_loaders(loaders_for(&PageRoute::BlogIndex, &c)).await;
  assert_eq!(data["posts"]["failed"], true);
  assert_eq!(data["posts"]["empty"], true);
  assert_eq!(data["categories"]["failed"], true);
}

fn explode() -> Value {
  panic!("loader exploded")
}

#[tokio::test]
async fn panicking_loader_leaves_null() {
  let loaders = vec![
    LoaderDef { data_key: "ok", load: Box::pin(async { Value::from(1) }) },
    LoaderDef { data_key: "boom", load: Box::pin(async { explode() }) },
  ];
  let data = run_loaders(loaders).await;
  assert_eq!(data["ok"], 1);
  assert!(data["boom"].is_null());
}

#[tokio::test]
async fn category_page_resolves_slug_to_name() {
  let c = ctx(Locale::En);
  let page = PageRoute::BlogCategory { slug: "network-and-security".into() };
  let data = run_loaders(loaders_for(&page, &c)).await;
  assert_eq!(data["category"]["name"], "Network & Security");
  let posts = data["category"]["posts"]["items"].as_array().unwrap();
  assert_eq!(posts.len(), 1);
  assert_eq!(posts[0]["href"], "/blog/read/2/post-2");
}

#[tokio::test]
async fn unknown_detail_is_null() {
  let c = ctx(Locale::En);
  for page in [
    PageRoute::BlogCategory { slug: "nope".into() },
    PageRoute::BlogPost { slug: "x".into(), document_id: "missing".into() },
    PageRoute::CaseStudy { slug: "missing".into() },
    PageRoute::Solution { slug: "missing".into() },
  ] {
    let key = page.primary_key().unwrap();
    let data = run_loaders(loaders_for(&page, &c)).await;
    assert!(data[key].is_null(), "{page:?}");
  }
}

#[tokio::test]
async fn case_study_found_by_derived_slug() {
  let c = ctx(Locale::Id);
  let page = PageRoute::CaseStudy { slug: "21".into() };
  let data = run_loaders(loaders_for(&page, &c)).await;
  assert_eq!(data["project"]["title"], "Proyek X");
  assert_eq!(data["project"]["href"], "/id/studi-kasus/21");
}
