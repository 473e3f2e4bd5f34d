/* src/server/core/src/collections/source.rs */

use std::future::Future;

use super::{Collection, ListQuery};
use crate::entities::{
  BlogPost, Category, Certification, Department, Partner, Project, Solution, Testimony,
};
use crate::locale::Locale;
use crate::slug::entity_slug;

/// Where page loaders and the path enumerator get content from.
/// [`super::Cms`] is the HTTP-backed implementation.
pub trait ContentSource: Send + Sync {
  fn blogs(&self, query: &ListQuery) -> impl Future<Output = Collection<BlogPost>> + Send;
  fn categories(&self, query: &ListQuery) -> impl Future<Output = Collection<Category>> + Send;
  fn solutions(&self, query: &ListQuery) -> impl Future<Output = Collection<Solution>> + Send;
  fn projects(&self, query: &ListQuery) -> impl Future<Output = Collection<Project>> + Send;
  fn testimonies(&self, query: &ListQuery) -> impl Future<Output = Collection<Testimony>> + Send;
  fn partners(&self, query: &ListQuery) -> impl Future<Output = Collection<Partner>> + Send;
  fn certifications(
    &self,
    query: &ListQuery,
  ) -> impl Future<Output = Collection<Certification>> + Send;
  fn departments(&self, query: &ListQuery) -> impl Future<Output = Collection<Department>> + Send;

  /// Single post by its locale-independent document id.
  fn blog(
    &self,
    locale: Locale,
    document_id: &str,
  ) -> impl Future<Output = Collection<BlogPost>> + Send {
    async move { self.blogs(&ListQuery::new(locale).filter("documentId", document_id)).await }
  }

  fn blogs_in_category(
    &self,
    query: &ListQuery,
    category_name: &str,
  ) -> impl Future<Output = Collection<BlogPost>> + Send {
    async move { self.blogs(&query.clone().filter("category.name", category_name)).await }
  }

  /// Project whose URL slug is `slug`. URL slugs are derived, so when the CMS field
  /// does not match verbatim the first page of projects is searched.
  fn project_by_slug(
    &self,
    locale: Locale,
    slug: &str,
  ) -> impl Future<Output = Option<Project>> + Send {
    async move {
      let direct = self.projects(&ListQuery::new(locale).filter("slug", slug)).await;
      if let Some(project) = direct.into_first() {
        return Some(project);
      }
      let all = self.projects(&ListQuery::new(locale).page(1, 100)).await;
      all.items.into_iter().find(|p| entity_slug(p.slug.as_deref(), p.doc.id) == slug)
    }
  }
}
