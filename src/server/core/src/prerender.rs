/* src/server/core/src/prerender.rs */

//! Build-time enumeration of every path worth prerendering.

use std::collections::BTreeSet;
use std::future::Future;

use crate::collections::{Collection, ContentSource, ListQuery};
use crate::locale::Locale;
use crate::page::view;
use crate::routes::RouteTable;
use crate::solutions::SOLUTION_AREAS;

/// Route keys prerendered in both locales. `contact` is rendered per request.
pub const STATIC_ROUTES: &[&str] =
  &["", "about", "blog", "case-study", "solution", "partners", "certifications", "careers"];

pub const DEFAULT_PAGE_SIZE: u32 = 100;

pub fn static_paths(table: &RouteTable) -> Vec<String> {
  Locale::ALL
    .iter()
    .flat_map(|&locale| STATIC_ROUTES.iter().map(move |r| table.build_localized_url(r, locale)))
    .collect()
}

/// Walk every page of a collection. Stops early on an empty or failed page.
async fn fetch_all<T, F, Fut>(fetch: F, locale: Locale, page_size: u32, what: &str) -> Vec<T>
where
  F: Fn(ListQuery) -> Fut,
  Fut: Future<Output = Collection<T>>,
{
  let mut items = Vec::new();
  let mut page = 1;
  loop {
    let batch = fetch(ListQuery::new(locale).page(page, page_size)).await;
    if batch.is_failed() {
      tracing::warn!(collection = what, %locale, page, "skipping paths for unreachable collection");
    }
    let page_count = batch.meta.map_or(1, |m| m.page_count);
    let done = batch.is_empty() || page >= page_count;
    items.extend(batch.items);
    if done {
      return items;
    }
    page += 1;
  }
}

/// Every concrete path to prerender. The result depends only on the content the
/// source returns, so two runs against the same snapshot produce the same set.
pub async fn enumerate_paths<S: ContentSource>(
  source: &S,
  table: &RouteTable,
  page_size: u32,
) -> BTreeSet<String> {
  let page_size = page_size.max(1);
  let mut paths: BTreeSet<String> = static_paths(table).into_iter().collect();

  for locale in Locale::ALL {
    let (posts, categories, projects) = tokio::join!(
      fetch_all(move |q| async move { source.blogs(&q).await }, locale, page_size, "blogs"),
      fetch_all(
        move |q| async move { source.categories(&q).await },
        locale,
        page_size,
        "categories"
      ),
      fetch_all(move |q| async move { source.projects(&q).await }, locale, page_size, "projects"),
    );

    paths.extend(posts.iter().map(|p| view::post_path(table, locale, p)));
    paths.extend(categories.iter().map(|c| view::category_path(table, locale, c)));
    paths.extend(projects.iter().map(|p| view::project_path(table, locale, p)));
  }

  for area in SOLUTION_AREAS {
    for locale in Locale::ALL {
      paths.insert(view::solution_path(table, locale, area));
    }
  }

  paths
}
