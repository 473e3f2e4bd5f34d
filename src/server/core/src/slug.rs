/* src/server/core/src/slug.rs */

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
// ASCII word characters only; accented letters are dropped.
static NON_WORD: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_-]+").expect("valid regex"));

/// URL slug for a display name, in this order: lower-case, trim, whitespace runs
/// -> `-`, `&` -> `and`, drop everything but ASCII word characters and hyphens.
/// Hyphen runs are kept as they are.
pub fn name_to_slug(name: &str) -> String {
  let lowered = name.to_lowercase();
  let hyphenated = WHITESPACE.replace_all(lowered.trim(), "-");
  let anded = hyphenated.replace('&', "and");
  NON_WORD.replace_all(&anded, "").into_owned()
}

/// Slug for an entity: its own slug (or name) when that yields one, otherwise its
/// numeric id.
pub fn entity_slug(slug: Option<&str>, id: u64) -> String {
  match slug.map(name_to_slug) {
    Some(s) if !s.is_empty() => s,
    _ => id.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn strips_punctuation() {
    assert_eq!(name_to_slug("Internet of Things (IoT)"), "internet-of-things-iot");
  }

  #[test]
  fn ampersand_becomes_and() {
    assert_eq!(name_to_slug("Network & Security"), "network-and-security");
    assert_eq!(name_to_slug("R&D"), "randd");
  }

  #[test]
  fn trims_and_hyphenates_whitespace() {
    assert_eq!(name_to_slug("  Cloud   Solutions \t"), "cloud-solutions");
    assert_eq!(name_to_slug("Data - Center"), "data---center");
  }

  #[test]
  fn keeps_existing_slugs() {
    assert_eq!(name_to_slug("erp-rollout-2024"), "erp-rollout-2024");
  }

  #[test]
  fn drops_non_ascii_letters() {
    assert_eq!(name_to_slug("Solusi Teknologi Café"), "solusi-teknologi-caf");
  }

  #[test]
  fn entity_slug_falls_back_to_id() {
    assert_eq!(entity_slug(Some("My Post"), 7), "my-post");
    assert_eq!(entity_slug(Some("   "), 7), "7");
    assert_eq!(entity_slug(None, 42), "42");
    assert_eq!(entity_slug(Some("!!!"), 9), "9");
  }
}
