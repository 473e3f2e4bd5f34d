/* src/server/core/src/page/mod.rs */

mod loaders;
pub mod view;

#[cfg(test)]
mod tests;

use crate::locale::Locale;
use crate::routes::{ParsedPath, RouteTable};

pub use loaders::{BoxFuture, LoadContext, LoaderDef, loaders_for, run_loaders};

/// Logical page addressed by a URL, independent of locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRoute {
  Home,
  About,
  BlogIndex,
  BlogCategory { slug: String },
  BlogPost { slug: String, document_id: String },
  CaseStudies,
  CaseStudy { slug: String },
  Solutions,
  Solution { slug: String },
  Partners,
  Certifications,
  Careers,
  Contact,
  NotFound,
}

impl PageRoute {
  /// Map a parsed path onto a page. Slugs must be in the path's own language:
  /// `/id/about` and `/tentang-kami` are both unknown.
  pub fn from_path(table: &RouteTable, parsed: &ParsedPath) -> Self {
    let key = table.route_key(&parsed.main_route, parsed.locale);
    if table.translate(key, parsed.locale) != parsed.main_route {
      return Self::NotFound;
    }

    let rest: Vec<&str> = parsed.remaining_segments.iter().map(String::as_str).collect();
    match (key, rest.as_slice()) {
      ("", []) => Self::Home,
      ("about", []) => Self::About,
      ("blog", []) => Self::BlogIndex,
      ("blog", ["read", slug, document_id]) => {
        Self::BlogPost { slug: (*slug).to_string(), document_id: (*document_id).to_string() }
      }
      ("blog", [slug]) => Self::BlogCategory { slug: (*slug).to_string() },
      ("case-study", []) => Self::CaseStudies,
      ("case-study", [slug]) => Self::CaseStudy { slug: (*slug).to_string() },
      ("solution", []) => Self::Solutions,
      ("solution", [slug]) => Self::Solution { slug: (*slug).to_string() },
      ("partners", []) => Self::Partners,
      ("certifications", []) => Self::Certifications,
      ("careers", []) => Self::Careers,
      ("contact", []) => Self::Contact,
      _ => Self::NotFound,
    }
  }

  /// Path of this page in `locale`; `None` for the not-found page.
  pub fn path(&self, table: &RouteTable, locale: Locale) -> Option<String> {
    let route = match self {
      Self::Home => String::new(),
      Self::About => "about".into(),
      Self::BlogIndex => "blog".into(),
      Self::BlogCategory { slug } => format!("blog/{slug}"),
      Self::BlogPost { slug, document_id } => format!("blog/read/{slug}/{document_id}"),
      Self::CaseStudies => "case-study".into(),
      Self::CaseStudy { slug } => format!("case-study/{slug}"),
      Self::Solutions => "solution".into(),
      Self::Solution { slug } => format!("solution/{slug}"),
      Self::Partners => "partners".into(),
      Self::Certifications => "certifications".into(),
      Self::Careers => "careers".into(),
      Self::Contact => "contact".into(),
      Self::NotFound => return None,
    };
    Some(table.build_localized_url(&route, locale))
  }

  /// Template file name.
  pub fn template(&self) -> &'static str {
    match self {
      Self::Home => "home",
      Self::About => "about",
      Self::BlogIndex => "blog",
      Self::BlogCategory { .. } => "blog-category",
      Self::BlogPost { .. } => "blog-post",
      Self::CaseStudies => "case-studies",
      Self::CaseStudy { .. } => "case-study",
      Self::Solutions => "solutions",
      Self::Solution { .. } => "solution",
      Self::Partners => "partners",
      Self::Certifications => "certifications",
      Self::Careers => "careers",
      Self::Contact => "contact",
      Self::NotFound => "not-found",
    }
  }

  /// Section in the UI strings (`t.<section>.title`, ...).
  pub fn section(&self) -> &'static str {
    match self {
      Self::Home => "home",
      Self::About => "about",
      Self::BlogIndex | Self::BlogCategory { .. } | Self::BlogPost { .. } => "blog",
      Self::CaseStudies | Self::CaseStudy { .. } => "case_study",
      Self::Solutions | Self::Solution { .. } => "solution",
      Self::Partners => "partners",
      Self::Certifications => "certifications",
      Self::Careers => "careers",
      Self::Contact => "contact",
      Self::NotFound => "not_found",
    }
  }

  /// Route key of the navigation entry this page belongs to.
  pub fn nav_key(&self) -> Option<&'static str> {
    Some(match self {
      Self::Home => "",
      Self::About => "about",
      Self::BlogIndex | Self::BlogCategory { .. } | Self::BlogPost { .. } => "blog",
      Self::CaseStudies | Self::CaseStudy { .. } => "case-study",
      Self::Solutions | Self::Solution { .. } => "solution",
      Self::Partners => "partners",
      Self::Certifications => "certifications",
      Self::Careers => "careers",
      Self::Contact => "contact",
      Self::NotFound => return None,
    })
  }

  /// Loader key whose absence turns a detail page into a 404.
  pub fn primary_key(&self) -> Option<&'static str> {
    match self {
      Self::BlogPost { .. } => Some("post"),
      Self::BlogCategory { .. } => Some("category"),
      Self::CaseStudy { .. } => Some("project"),
      Self::Solution { .. } => Some("solution"),
      _ => None,
    }
  }

  pub fn status(&self) -> u16 {
    if *self == Self::NotFound { 404 } else { 200 }
  }
}
