/* src/server/core/src/page/loaders.rs */

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::{Map, Value, json};
use tokio::task::JoinSet;

use super::PageRoute;
use super::view;
use crate::collections::{ContentSource, ListQuery};
use crate::locale::Locale;
use crate::routes::RouteTable;
use crate::solutions::{self, SOLUTION_AREAS};

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// One piece of page data, stored under `data_key` once `load` finishes.
pub struct LoaderDef {
  pub data_key: &'static str,
  pub load: BoxFuture<Value>,
}

/// What every loader gets to work with.
pub struct LoadContext<S> {
  pub source: Arc<S>,
  pub routes: Arc<RouteTable>,
  pub locale: Locale,
}

impl<S> Clone for LoadContext<S> {
  fn clone(&self) -> Self {
    Self { source: self.source.clone(), routes: self.routes.clone(), locale: self.locale }
  }
}

impl<S> LoadContext<S> {
  fn list(&self) -> ListQuery {
    ListQuery::new(self.locale)
  }
}

fn loader<S, Fut>(
  data_key: &'static str,
  ctx: &LoadContext<S>,
  load: impl FnOnce(LoadContext<S>) -> Fut,
) -> LoaderDef
where
  Fut: Future<Output = Value> + Send + 'static,
{
  LoaderDef { data_key, load: Box::pin(load(ctx.clone())) }
}

const LIST_SIZE: u32 = 24;
const TEASER_SIZE: u32 = 3;
// Enough to hold every category/partner/certification the CMS has.
const ALL: u32 = 100;

/// Loaders for one page view. Independent fetches run concurrently in [`run_loaders`].
pub fn loaders_for<S: ContentSource + 'static>(
  route: &PageRoute,
  ctx: &LoadContext<S>,
) -> Vec<LoaderDef> {
  match route {
    PageRoute::Home => vec![
      latest_posts("posts", ctx),
      loader("projects", ctx, |c| async move {
        let items = c.source.projects(&c.list().page(1, TEASER_SIZE)).await;
        view::collection(&items, |p| view::project(&c.routes, c.locale, p))
      }),
      testimonies(ctx),
      partners(ctx),
      solution_areas(ctx),
    ],
    PageRoute::About => vec![
      testimonies(ctx),
      loader("certifications", ctx, |c| async move {
        let items = c.source.certifications(&c.list().page(1, 6)).await;
        view::collection(&items, view::certification)
      }),
    ],
    PageRoute::BlogIndex => vec![
      loader("posts", ctx, |c| async move {
        let items = c.source.blogs(&c.list().page(1, LIST_SIZE)).await;
        view::collection(&items, |p| view::post(&c.routes, c.locale, p))
      }),
      categories(ctx),
    ],
    PageRoute::BlogCategory { slug } => {
      let slug = slug.clone();
      vec![
        loader("category", ctx, |c| async move {
          let all = c.source.categories(&c.list().page(1, ALL)).await;
          let Some(category) = all.items.iter().find(|cat| view::category_slug(cat) == slug)
          else {
            return Value::Null;
          };
          let posts =
            c.source.blogs_in_category(&c.list().page(1, LIST_SIZE), &category.name).await;
          let mut value = view::category(&c.routes, c.locale, category);
          value["posts"] = view::collection(&posts, |p| view::post(&c.routes, c.locale, p));
          value["fallback"] = Value::Bool(all.is_fallback() || posts.is_fallback());
          value
        }),
        categories(ctx),
      ]
    }
    PageRoute::BlogPost { document_id, .. } => {
      let document_id = document_id.clone();
      vec![
        loader("post", ctx, |c| async move {
          let found = c.source.blog(c.locale, &document_id).await;
          let fallback = found.is_fallback();
          match found.first() {
            Some(post) => {
              let mut value = view::post_detail(&c.routes, c.locale, post);
              value["fallback"] = Value::Bool(fallback);
              value
            }
            None => Value::Null,
          }
        }),
        latest_posts("recent", ctx),
        categories(ctx),
      ]
    }
    PageRoute::CaseStudies => vec![loader("projects", ctx, |c| async move {
      let items = c.source.projects(&c.list().page(1, LIST_SIZE)).await;
      view::collection(&items, |p| view::project(&c.routes, c.locale, p))
    })],
    PageRoute::CaseStudy { slug } => {
      let slug = slug.clone();
      vec![
        loader("project", ctx, |c| async move {
          match c.source.project_by_slug(c.locale, &slug).await {
            Some(project) => view::project_detail(&c.routes, c.locale, &project),
            None => Value::Null,
          }
        }),
        testimonies(ctx),
      ]
    }
    PageRoute::Solutions => vec![solution_areas(ctx)],
    PageRoute::Solution { slug } => {
      let slug = slug.clone();
      vec![
        loader("solution", ctx, |c| async move {
          let Some(area) = solutions::find_by_slug(&slug) else {
            return Value::Null;
          };
          let mut value = view::solution_area(&c.routes, c.locale, area);
          let detail = c.source.solutions(&c.list().filter("slug", slug.as_str())).await;
          let html = detail.first().map(|s| crate::content::to_html(&s.content));
          value["content_html"] = Value::String(html.unwrap_or_default());
          value
        }),
        solution_areas(ctx),
      ]
    }
    PageRoute::Partners => vec![partners(ctx)],
    PageRoute::Certifications => vec![loader("certifications", ctx, |c| async move {
      let items = c.source.certifications(&c.list().page(1, ALL)).await;
      view::collection(&items, view::certification)
    })],
    PageRoute::Careers | PageRoute::Contact => vec![loader("departments", ctx, |c| async move {
      let items = c.source.departments(&c.list().page(1, ALL)).await;
      view::collection(&items, view::department)
    })],
    PageRoute::NotFound => Vec::new(),
  }
}

fn latest_posts<S: ContentSource + 'static>(key: &'static str, ctx: &LoadContext<S>) -> LoaderDef {
  loader(key, ctx, |c| async move {
    let items = c.source.blogs(&c.list().page(1, TEASER_SIZE)).await;
    view::collection(&items, |p| view::post(&c.routes, c.locale, p))
  })
}

fn categories<S: ContentSource + 'static>(ctx: &LoadContext<S>) -> LoaderDef {
  loader("categories", ctx, |c| async move {
    let items = c.source.categories(&c.list().page(1, ALL)).await;
    view::collection(&items, |cat| view::category(&c.routes, c.locale, cat))
  })
}

fn testimonies<S: ContentSource + 'static>(ctx: &LoadContext<S>) -> LoaderDef {
  loader("testimonies", ctx, |c| async move {
    let items = c.source.testimonies(&c.list().page(1, 6)).await;
    view::collection(&items, view::testimony)
  })
}

fn partners<S: ContentSource + 'static>(ctx: &LoadContext<S>) -> LoaderDef {
  loader("partners", ctx, |c| async move {
    let items = c.source.partners(&c.list().page(1, ALL)).await;
    view::collection(&items, view::partner)
  })
}

fn solution_areas<S: ContentSource + 'static>(ctx: &LoadContext<S>) -> LoaderDef {
  loader("areas", ctx, |c| async move {
    let items: Vec<Value> =
      SOLUTION_AREAS.iter().map(|a| view::solution_area(&c.routes, c.locale, a)).collect();
    json!({ "items": items })
  })
}

/// Run page loaders concurrently and collect keyed results. A failed fetch already
/// shows up as an empty collection; a panicking loader leaves its key `null`.
pub async fn run_loaders(loaders: Vec<LoaderDef>) -> Map<String, Value> {
  let mut data = Map::new();
  let mut join_set = JoinSet::new();

  for loader in loaders {
    data.insert(loader.data_key.to_string(), Value::Null);
    let key = loader.data_key;
    let load = loader.load;
    join_set.spawn(async move { (key, load.await) });
  }

  while let Some(result) = join_set.join_next().await {
    match result {
      Ok((key, value)) => {
        data.insert(key.to_string(), value);
      }
      Err(err) => tracing::error!(error = %err, "page loader task failed"),
    }
  }
  data
}
