/* src/server/core/src/entities.rs */

//! Read-only snapshots of CMS documents. Field names follow the CMS (camelCase);
//! everything optional on the CMS side is optional here so one missing field never
//! drops a whole collection.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
  #[serde(default)]
  pub url: String,
  #[serde(default)]
  pub alternative_text: Option<String>,
  #[serde(default)]
  pub width: Option<u32>,
  #[serde(default)]
  pub height: Option<u32>,
}

/// Fields every CMS document carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMeta {
  pub id: u64,
  #[serde(default)]
  pub document_id: String,
  #[serde(default)]
  pub locale: Option<String>,
  #[serde(default)]
  pub created_at: Option<String>,
  #[serde(default)]
  pub updated_at: Option<String>,
  #[serde(default)]
  pub published_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
  #[serde(flatten)]
  pub doc: DocumentMeta,
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
  #[serde(flatten)]
  pub doc: DocumentMeta,
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub bio: Option<String>,
  #[serde(default)]
  pub avatar: Option<Media>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
  #[serde(flatten)]
  pub doc: DocumentMeta,
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub slug: Option<String>,
  #[serde(default)]
  pub excerpt: Option<String>,
  /// Rich-text blocks or an HTML/markdown string, see [`crate::content`]
  #[serde(default)]
  pub content: serde_json::Value,
  #[serde(default)]
  pub cover: Option<Media>,
  #[serde(default)]
  pub category: Option<Category>,
  #[serde(default)]
  pub author: Option<Author>,
}

/// Case study.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
  #[serde(flatten)]
  pub doc: DocumentMeta,
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub slug: Option<String>,
  #[serde(default)]
  pub client: Option<String>,
  #[serde(default)]
  pub industry: Option<String>,
  #[serde(default)]
  pub summary: Option<String>,
  #[serde(default)]
  pub content: serde_json::Value,
  #[serde(default)]
  pub cover: Option<Media>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
  #[serde(flatten)]
  pub doc: DocumentMeta,
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub slug: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub content: serde_json::Value,
  #[serde(default)]
  pub icon: Option<Media>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
  #[serde(flatten)]
  pub doc: DocumentMeta,
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub website: Option<String>,
  #[serde(default)]
  pub logo: Option<Media>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
  #[serde(flatten)]
  pub doc: DocumentMeta,
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub issuer: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub image: Option<Media>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimony {
  #[serde(flatten)]
  pub doc: DocumentMeta,
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub position: Option<String>,
  #[serde(default)]
  pub company: Option<String>,
  #[serde(default)]
  pub message: String,
  #[serde(default)]
  pub avatar: Option<Media>,
}

/// Department a contact request or job opening belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
  #[serde(flatten)]
  pub doc: DocumentMeta,
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub email: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
}
