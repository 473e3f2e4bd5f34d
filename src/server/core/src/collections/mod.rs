/* src/server/core/src/collections/mod.rs */

mod source;


use serde::de::DeserializeOwned;

use crate::cms::{CmsClient, Envelope, FetchError, PaginationMeta, RequestOptions};
use crate::entities::{
  BlogPost, Category, Certification, Department, Partner, Project, Solution, Testimony,
};
use crate::locale::Locale;

pub use source::ContentSource;

/// CMS collection path segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
  Blogs,
  Categories,
  Solutions,
  Projects,
  Testimonies,
  Certifications,
  Departments,
  Partners,
}

impl Endpoint {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Blogs => "blogs",
      Self::Categories => "categories",
      Self::Solutions => "solutions",
      Self::Projects => "projects",
      Self::Testimonies => "testimonies",
      // Spelled this way on the CMS side.
      Self::Certifications => "certificantions",
      Self::Departments => "departments",
      Self::Partners => "partners",
    }
  }
}

/// Locale, pagination and equality filters for a collection request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
  pub locale: Locale,
  pub page: Option<u32>,
  pub page_size: Option<u32>,
  /// Dotted field path (`category.name`) -> value, sent as `filters[category][name][$eq]`
  pub filters: Vec<(String, String)>,
}

impl ListQuery {
  pub fn new(locale: Locale) -> Self {
    Self { locale, page: None, page_size: None, filters: Vec::new() }
  }

  pub fn page(mut self, page: u32, page_size: u32) -> Self {
    self.page = Some(page);
    self.page_size = Some(page_size);
    self
  }

  pub fn filter(mut self, field: &str, value: impl Into<String>) -> Self {
    self.filters.push((field.to_string(), value.into()));
    self
  }

  pub fn with_locale(&self, locale: Locale) -> Self {
    Self { locale, ..self.clone() }
  }

  pub fn to_options(&self) -> RequestOptions {
    let mut opts = RequestOptions::default()
      .query("locale", self.locale)
      .query("populate", "*")
      .query_opt("pagination[page]", self.page)
      .query_opt("pagination[pageSize]", self.page_size);
    for (field, value) in &self.filters {
      let path: String = field.split('.').map(|part| format!("[{part}]")).collect();
      opts = opts.query(format!("filters{path}[$eq]"), value);
    }
    opts
  }
}

/// How a collection fetch went. Keeps "the CMS has nothing" apart from "the CMS
/// could not be reached"; both render as an empty state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  Loaded,
  Empty,
  Failed(FetchError),
}

#[derive(Debug, Clone)]
pub struct Collection<T> {
  /// Locale the caller asked for
  pub requested_locale: Locale,
  /// Locale the items are actually in; differs after a fallback
  pub locale: Locale,
  pub items: Vec<T>,
  pub meta: Option<PaginationMeta>,
  pub outcome: Outcome,
}

impl<T> Collection<T> {
  pub fn from_result(locale: Locale, result: Result<Envelope<T>, FetchError>) -> Self {
    match result {
      Ok(envelope) => {
        let (items, meta) = envelope.into_parts();
        let outcome = if items.is_empty() { Outcome::Empty } else { Outcome::Loaded };
        Self { requested_locale: locale, locale, items, meta, outcome }
      }
      Err(err) => Self::failed(locale, err),
    }
  }

  pub fn failed(locale: Locale, err: FetchError) -> Self {
    Self {
      requested_locale: locale,
      locale,
      items: Vec::new(),
      meta: None,
      outcome: Outcome::Failed(err),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Content is shown in a language other than the one requested.
  pub fn is_fallback(&self) -> bool {
    self.requested_locale != self.locale
  }

  pub fn is_failed(&self) -> bool {
    matches!(self.outcome, Outcome::Failed(_))
  }

  pub fn first(&self) -> Option<&T> {
    self.items.first()
  }

  pub fn into_first(self) -> Option<T> {
    self.items.into_iter().next()
  }
}

/// Typed fetchers over [`CmsClient`], one per CMS collection.
#[derive(Clone)]
pub struct Cms {
  client: CmsClient,
}

impl Cms {
  pub fn new(client: CmsClient) -> Self {
    Self { client }
  }

  pub async fn fetch<T: DeserializeOwned>(
    &self,
    endpoint: Endpoint,
    query: &ListQuery,
  ) -> Collection<T> {
    let opts = query.to_options();
    let result = self.client.request::<Envelope<T>>(endpoint.as_str(), &opts).await;
    Collection::from_result(query.locale, result)
  }

  /// Indonesian requests that come back empty are retried once in English; the
  /// result keeps `requested_locale = id` and reports `locale = en`.
  async fn fetch_with_fallback<T: DeserializeOwned>(
    &self,
    endpoint: Endpoint,
    query: &ListQuery,
  ) -> Collection<T> {
    let primary = self.fetch(endpoint, query).await;
    if query.locale != Locale::Id || !primary.is_empty() {
      return primary;
    }

    tracing::debug!(endpoint = endpoint.as_str(), "no Indonesian content, using English");
    let mut fallback = self.fetch(endpoint, &query.with_locale(Locale::En)).await;
    fallback.requested_locale = query.locale;
    fallback
  }

  /// Indonesian blog content falls back to English.
  pub async fn blogs(&self, query: &ListQuery) -> Collection<BlogPost> {
    self.fetch_with_fallback(Endpoint::Blogs, query).await
  }

  pub async fn categories(&self, query: &ListQuery) -> Collection<Category> {
    self.fetch_with_fallback(Endpoint::Categories, query).await
  }
}

impl ContentSource for Cms {
  async fn blogs(&self, query: &ListQuery) -> Collection<BlogPost> {
    Cms::blogs(self, query).await
  }

  async fn categories(&self, query: &ListQuery) -> Collection<Category> {
    Cms::categories(self, query).await
  }

  async fn solutions(&self, query: &ListQuery) -> Collection<Solution> {
    self.fetch(Endpoint::Solutions, query).await
  }

  async fn projects(&self, query: &ListQuery) -> Collection<Project> {
    self.fetch(Endpoint::Projects, query).await
  }

  async fn testimonies(&self, query: &ListQuery) -> Collection<Testimony> {
    self.fetch(Endpoint::Testimonies, query).await
  }

  async fn partners(&self, query: &ListQuery) -> Collection<Partner> {
    self.fetch(Endpoint::Partners, query).await
  }

  async fn certifications(&self, query: &ListQuery) -> Collection<Certification> {
    self.fetch(Endpoint::Certifications, query).await
  }

  async fn departments(&self, query: &ListQuery) -> Collection<Department> {
    self.fetch(Endpoint::Departments, query).await
  }
}
