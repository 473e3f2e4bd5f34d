/* src/server/core/src/page/view.rs */

//! Template-facing JSON for CMS entities. Links are resolved here so templates
//! never build URLs themselves.

use serde_json::{Value, json};

use crate::collections::Collection;
use crate::content;
use crate::entities::{
  BlogPost, Category, Certification, Department, Media, Partner, Project, Testimony,
};
use crate::locale::Locale;
use crate::routes::RouteTable;
use crate::slug::entity_slug;
use crate::solutions::SolutionArea;

/// `{items, empty, failed, fallback, locale, pagination}`
pub fn collection<T>(collection: &Collection<T>, item: impl Fn(&T) -> Value) -> Value {
  json!({
    "items": collection.items.iter().map(item).collect::<Vec<_>>(),
    "empty": collection.is_empty(),
    "failed": collection.is_failed(),
    "fallback": collection.is_fallback(),
    "locale": collection.locale,
    "pagination": collection.meta,
  })
}

fn media(media: Option<&Media>) -> Value {
  match media {
    Some(m) if !m.url.is_empty() => {
      json!({ "url": m.url, "alt": m.alternative_text.as_deref().unwrap_or_default() })
    }
    _ => Value::Null,
  }
}

/// `2024-05-01T08:00:00.000Z` -> `2024-05-01`
fn date(timestamp: Option<&str>) -> Value {
  match timestamp {
    Some(ts) if !ts.is_empty() => Value::String(ts.split('T').next().unwrap_or(ts).to_string()),
    _ => Value::Null,
  }
}

pub fn post_path(table: &RouteTable, locale: Locale, post: &BlogPost) -> String {
  let slug = entity_slug(post.slug.as_deref(), post.doc.id);
  table.build_localized_url(&format!("blog/read/{slug}/{}", post.doc.document_id), locale)
}

/// Categories have no slug field; the name stands in, then the id.
pub fn category_slug(category: &Category) -> String {
  entity_slug(Some(&category.name), category.doc.id)
}

pub fn category_path(table: &RouteTable, locale: Locale, category: &Category) -> String {
  table.build_localized_url(&format!("blog/{}", category_slug(category)), locale)
}

pub fn project_path(table: &RouteTable, locale: Locale, project: &Project) -> String {
  let slug = entity_slug(project.slug.as_deref(), project.doc.id);
  table.build_localized_url(&format!("case-study/{slug}"), locale)
}

pub fn solution_path(table: &RouteTable, locale: Locale, area: &SolutionArea) -> String {
  table.build_localized_url(&format!("solution/{}", area.slug()), locale)
}

pub fn category(table: &RouteTable, locale: Locale, category: &Category) -> Value {
  json!({
    "name": category.name,
    "description": category.description,
    "href": category_path(table, locale, category),
  })
}

pub fn post(table: &RouteTable, locale: Locale, post: &BlogPost) -> Value {
  let excerpt = post
    .excerpt
    .clone()
    .filter(|e| !e.trim().is_empty())
    .unwrap_or_else(|| truncate(&content::to_plain_text(&post.content), 180));
  json!({
    "title": post.title,
    "href": post_path(table, locale, post),
    "excerpt": excerpt,
    "date": date(post.doc.published_at.as_deref().or(post.doc.created_at.as_deref())),
    "cover": media(post.cover.as_ref()),
    "category": post.category.as_ref().map(|c| category(table, locale, c)),
    "author": post.author.as_ref().map(|a| a.name.clone()),
  })
}

pub fn post_detail(table: &RouteTable, locale: Locale, blog_post: &BlogPost) -> Value {
  let mut view = post(table, locale, blog_post);
  view["content_html"] = Value::String(content::to_html(&blog_post.content));
  view
}

pub fn project(table: &RouteTable, locale: Locale, project: &Project) -> Value {
  json!({
    "title": project.title,
    "href": project_path(table, locale, project),
    "client": project.client,
    "industry": project.industry,
    "summary": project.summary,
    "cover": media(project.cover.as_ref()),
  })
}

pub fn project_detail(table: &RouteTable, locale: Locale, case_study: &Project) -> Value {
  let mut view = project(table, locale, case_study);
  view["content_html"] = Value::String(content::to_html(&case_study.content));
  view
}

pub fn solution_area(table: &RouteTable, locale: Locale, area: &SolutionArea) -> Value {
  json!({
    "title": area.title(locale),
    "summary": area.summary(locale),
    "slug": area.slug(),
    "href": solution_path(table, locale, area),
  })
}

pub fn testimony(testimony: &Testimony) -> Value {
  let role = [testimony.position.as_deref(), testimony.company.as_deref()]
    .into_iter()
    .flatten()
    .filter(|s| !s.is_empty())
    .collect::<Vec<_>>()
    .join(", ");
  json!({
    "name": testimony.name,
    "role": role,
    "message": testimony.message,
    "avatar": media(testimony.avatar.as_ref()),
  })
}

pub fn partner(partner: &Partner) -> Value {
  json!({
    "name": partner.name,
    "description": partner.description,
    "website": partner.website,
    "logo": media(partner.logo.as_ref()),
  })
}

pub fn certification(cert: &Certification) -> Value {
  json!({
    "name": cert.name,
    "issuer": cert.issuer,
    "description": cert.description,
    "image": media(cert.image.as_ref()),
  })
}

pub fn department(department: &Department) -> Value {
  json!({
    "name": department.name,
    "email": department.email,
    "mailto": department.email.as_ref().map(|e| format!("mailto:{e}")),
    "description": department.description,
  })
}

fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }
  let cut: String = text.chars().take(max_chars).collect();
  let cut = cut.rsplit_once(' ').map_or(cut.as_str(), |(head, _)| head);
  format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::entities::DocumentMeta;

  fn doc(id: u64, document_id: &str) -> DocumentMeta {
    DocumentMeta { id, document_id: document_id.into(), ..Default::default() }
  }

  #[test]
  fn post_links_use_slug_or_id() {
    let table = RouteTable::default();
    let mut p = BlogPost { doc: doc(7, "d7"), title: "T".into(), ..Default::default() };
    assert_eq!(post_path(&table, Locale::En, &p), "/blog/read/7/d7");
    p.slug = Some("Hello World".into());
    assert_eq!(post_path(&table, Locale::Id, &p), "/id/blog/read/hello-world/d7");
  }

  #[test]
  fn project_links_follow_locale_base() {
    let table = RouteTable::default();
    let p = Project { doc: doc(1, "p1"), slug: Some("erp".into()), ..Default::default() };
    assert_eq!(project_path(&table, Locale::En, &p), "/case-study/erp");
    assert_eq!(project_path(&table, Locale::Id, &p), "/id/studi-kasus/erp");
  }

  #[test]
  fn post_view_fields() {
    let table = RouteTable::default();
    let p = BlogPost {
      doc: DocumentMeta {
        published_at: Some("2024-05-01T08:00:00.000Z".into()),
        ..doc(1, "d1")
      },
      title: "Hi".into(),
      content: json!([{ "type": "paragraph", "children": [{ "type": "text", "text": "Body" }] }]),
      category: Some(Category { name: "Cloud & Edge".into(), ..Default::default() }),
      ..Default::default()
    };
    let view = post_detail(&table, Locale::En, &p);
    assert_eq!(view["date"], "2024-05-01");
    assert_eq!(view["excerpt"], "Body");
    assert_eq!(view["category"]["href"], "/blog/cloud-and-edge");
    assert_eq!(view["content_html"], "<p>Body</p>");
    assert!(view["cover"].is_null());
  }

  #[test]
  fn unnamed_category_links_by_id() {
    let table = RouteTable::default();
    let unnamed = Category { doc: doc(12, "c12"), ..Default::default() };
    assert_eq!(category(&table, Locale::Id, &unnamed)["href"], "/id/blog/12");
  }

  #[test]
  fn testimony_role_joins_present_parts() {
    let t = Testimony { position: Some("CTO".into()), company: None, ..Default::default() };
    assert_eq!(testimony(&t)["role"], "CTO");
  }

  #[test]
  fn truncate_on_word_boundary() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("alpha beta gamma", 12), "alpha beta…");
  }
}
