/* src/server/core/src/test_support.rs */

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::cms::{FetchError, PaginationMeta};
use crate::collections::{Collection, ContentSource, ListQuery, Outcome};
use crate::entities::{
  BlogPost, Category, Certification, Department, DocumentMeta, Partner, Project, Solution,
  Testimony,
};
use crate::locale::Locale;

/// Serve `router` on an ephemeral port; returns the CMS base URL (`http://addr/api`).
pub(crate) async fn spawn_cms(router: axum::Router) -> String {
  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  tokio::spawn(async move {
    axum::serve(listener, router).await.unwrap();
  });
  format!("http://{addr}/api")
}

/// Shared request counter for fake CMS handlers.
#[derive(Clone, Default)]
pub(crate) struct Hits(Arc<AtomicUsize>);

impl Hits {
  pub(crate) fn bump(&self) {
    self.0.fetch_add(1, Ordering::SeqCst);
  }

  pub(crate) fn get(&self) -> usize {
    self.0.load(Ordering::SeqCst)
  }
}

/// In-memory content keyed by each document's `locale` field.
#[derive(Clone, Default)]
pub(crate) struct MemorySource {
  pub(crate) blogs: Vec<BlogPost>,
  pub(crate) categories: Vec<Category>,
  pub(crate) projects: Vec<Project>,
  pub(crate) partners: Vec<Partner>,
  pub(crate) departments: Vec<Department>,
  /// Every call fails with a timeout
  pub(crate) down: bool,
  pub(crate) calls: Hits,
}

fn doc_field<'a>(doc: &'a DocumentMeta, field: &str) -> Option<&'a str> {
  match field {
    "documentId" => Some(doc.document_id.as_str()),
    _ => None,
  }
}

impl MemorySource {
  fn select<T: Clone>(
    &self,
    items: &[T],
    query: &ListQuery,
    doc: impl Fn(&T) -> &DocumentMeta,
    field: impl Fn(&T, &str) -> Option<String>,
  ) -> Collection<T> {
    self.calls.bump();
    if self.down {
      return Collection::failed(query.locale, FetchError::Timeout);
    }
    let matching: Vec<T> = items
      .iter()
      .filter(|item| doc(item).locale.as_deref() == Some(query.locale.as_str()))
      .filter(|item| {
        query.filters.iter().all(|(f, v)| {
          doc_field(doc(item), f).map(String::from).or_else(|| field(item, f)).as_ref() == Some(v)
        })
      })
      .cloned()
      .collect();

    let total = matching.len() as u32;
    let (page, page_size) = (query.page.unwrap_or(1), query.page_size.unwrap_or(25));
    let items: Vec<T> = matching
      .into_iter()
      .skip(((page - 1) * page_size) as usize)
      .take(page_size as usize)
      .collect();
    let outcome = if items.is_empty() { Outcome::Empty } else { Outcome::Loaded };
    Collection {
      requested_locale: query.locale,
      locale: query.locale,
      items,
      meta: Some(PaginationMeta { page, page_size, page_count: total.div_ceil(page_size), total }),
      outcome,
    }
  }
}

impl ContentSource for MemorySource {
  async fn blogs(&self, query: &ListQuery) -> Collection<BlogPost> {
    self.select(&self.blogs, query, |p| &p.doc, |p, f| match f {
      "category.name" => p.category.as_ref().map(|c| c.name.clone()),
      _ => None,
    })
  }

  async fn categories(&self, query: &ListQuery) -> Collection<Category> {
    self.select(&self.categories, query, |c| &c.doc, |_, _| None)
  }

  async fn solutions(&self, query: &ListQuery) -> Collection<Solution> {
    self.select(&[], query, |s: &Solution| &s.doc, |_, _| None)
  }

  async fn projects(&self, query: &ListQuery) -> Collection<Project> {
    self.select(&self.projects, query, |p| &p.doc, |p, f| match f {
      "slug" => p.slug.clone(),
      _ => None,
    })
  }

  async fn testimonies(&self, query: &ListQuery) -> Collection<Testimony> {
    self.select(&[], query, |t: &Testimony| &t.doc, |_, _| None)
  }

  async fn partners(&self, query: &ListQuery) -> Collection<Partner> {
    self.select(&self.partners, query, |p| &p.doc, |_, _| None)
  }

  async fn certifications(&self, query: &ListQuery) -> Collection<Certification> {
    self.select(&[], query, |c: &Certification| &c.doc, |_, _| None)
  }

  async fn departments(&self, query: &ListQuery) -> Collection<Department> {
    self.select(&self.departments, query, |d| &d.doc, |_, _| None)
  }
}

pub(crate) fn meta(id: u64, document_id: &str, locale: Locale) -> DocumentMeta {
  DocumentMeta {
    id,
    document_id: document_id.to_string(),
    locale: Some(locale.as_str().to_string()),
    ..Default::default()
  }
}

pub(crate) fn blog(id: u64, slug: Option<&str>, locale: Locale, category: &str) -> BlogPost {
  BlogPost {
    doc: meta(id, &format!("post-{id}"), locale),
    title: format!("Post {id}"),
    slug: slug.map(String::from),
    category: Some(Category { name: category.to_string(), ..Default::default() }),
    ..Default::default()
  }
}

fn category(id: u64, document_id: &str, locale: Locale, name: &str) -> Category {
  Category { doc: meta(id, document_id, locale), name: name.to_string(), ..Default::default() }
}

/// Two locales worth of posts, categories, projects and partners.
pub(crate) fn sample_source() -> MemorySource {
  MemorySource {
    blogs: vec![
      blog(1, Some("Hello World"), Locale::En, "Cloud"),
      blog(2, None, Locale::En, "Network & Security"),
      blog(3, Some("halo-dunia"), Locale::Id, "Cloud"),
    ],
    categories: vec![
      category(10, "cat-cloud", Locale::En, "Cloud"),
      category(11, "cat-net", Locale::En, "Network & Security"),
      category(12, "cat-cloud", Locale::Id, "Cloud"),
    ],
    projects: vec![
      Project {
        doc: meta(20, "prj-erp", Locale::En),
        title: "ERP Rollout".into(),
        slug: Some("erp-rollout".into()),
        ..Default::default()
      },
      Project {
        doc: meta(21, "prj-x", Locale::Id),
        title: "Proyek X".into(),
        ..Default::default()
      },
    ],
    partners: vec![Partner {
      doc: meta(30, "ptn-1", Locale::En),
      name: "Acme Networks".into(),
      ..Default::default()
    }],
    departments: vec![Department {
      doc: meta(40, "dep-1", Locale::En),
      name: "Sales".into(),
      email: Some("sales@example.com".into()),
      ..Default::default()
    }],
    ..Default::default()
  }
}
