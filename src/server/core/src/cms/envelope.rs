/* src/server/core/src/cms/envelope.rs */

use serde::{Deserialize, Serialize};

/// `{ data: T[] | T | null, meta?: { pagination } }`
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
  data: Option<Data<T>>,
  #[serde(default)]
  meta: Option<Meta>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Data<T> {
  Many(Vec<T>),
  One(T),
}

#[derive(Debug, Default, Deserialize)]
struct Meta {
  #[serde(default)]
  pagination: Option<PaginationMeta>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
  pub page: u32,
  pub page_size: u32,
  pub page_count: u32,
  pub total: u32,
}

impl<T> Envelope<T> {
  pub fn into_parts(self) -> (Vec<T>, Option<PaginationMeta>) {
    let items = match self.data {
      Some(Data::Many(items)) => items,
      Some(Data::One(item)) => vec![item],
      None => Vec::new(),
    };
    (items, self.meta.and_then(|m| m.pagination))
  }
}
