/* src/server/core/src/routes.rs */

use std::collections::HashMap;

use crate::errors::SiteError;
use crate::locale::Locale;

/// English route key -> Indonesian slug. Home ("") is implicit and never listed.
pub const ROUTE_PAIRS: &[(&str, &str)] = &[
  ("about", "tentang-kami"),
  ("blog", "blog"),
  ("case-study", "studi-kasus"),
  ("solution", "solusi"),
  ("partners", "mitra"),
  ("certifications", "sertifikasi"),
  ("careers", "karir"),
  ("contact", "kontak"),
];

/// Bidirectional English <-> Indonesian slug table.
///
/// Construction rejects anything that would make the mapping non-bijective, so a
/// lookup can only fall back to identity for slugs the table does not know at all.
#[derive(Debug, Clone)]
pub struct RouteTable {
  keys: Vec<String>,
  en_to_id: HashMap<String, String>,
  id_to_en: HashMap<String, String>,
}

impl RouteTable {
  pub fn new<I, K, V>(pairs: I) -> Result<Self, SiteError>
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    let mut keys = Vec::new();
    let mut en_to_id = HashMap::new();
    let mut id_to_en = HashMap::new();

    for (en, id) in pairs {
      let (en, id) = (en.into(), id.into());
      for slug in [&en, &id] {
        if slug.is_empty() || slug.contains('/') {
          return Err(SiteError::config(format!("invalid route slug \"{slug}\"")));
        }
      }
      // "id" as a first segment is the locale marker
      if en == "id" || id == "id" {
        return Err(SiteError::config("route slug \"id\" collides with the locale prefix"));
      }
      if en_to_id.contains_key(&en) {
        return Err(SiteError::config(format!("duplicate English route \"{en}\"")));
      }
      if id_to_en.contains_key(&id) {
        return Err(SiteError::config(format!("duplicate Indonesian route \"{id}\"")));
      }
      keys.push(en.clone());
      en_to_id.insert(en.clone(), id.clone());
      id_to_en.insert(id, en);
    }

    Ok(Self { keys, en_to_id, id_to_en })
  }

  /// English route keys in declaration order.
  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.keys.iter().map(String::as_str)
  }

  /// Translate a single slug toward `target`. Unknown slugs come back unchanged.
  pub fn translate<'a>(&'a self, slug: &'a str, target: Locale) -> &'a str {
    let mapped = match target {
      Locale::Id => self.en_to_id.get(slug),
      Locale::En => self.id_to_en.get(slug),
    };
    mapped.map_or(slug, String::as_str)
  }

  /// Route key for a slug seen in a URL of the given locale.
  pub fn route_key<'a>(&'a self, slug: &'a str, locale: Locale) -> &'a str {
    match locale {
      Locale::En => slug,
      Locale::Id => self.translate(slug, Locale::En),
    }
  }

  /// Canonical path for an English route (optionally followed by more segments).
  pub fn build_localized_url(&self, route: &str, locale: Locale) -> String {
    let trimmed = route.trim_matches('/');
    let (head, tail) = match trimmed.split_once('/') {
      Some((head, tail)) => (head, Some(tail)),
      None => (trimmed, None),
    };

    let mut path = locale.prefix().to_string();
    if !head.is_empty() {
      path.push('/');
      path.push_str(self.translate(head, locale));
    }
    if let Some(tail) = tail {
      path.push('/');
      path.push_str(tail);
    }
    if path.is_empty() {
      path.push('/');
    }
    path
  }

  /// Same page in another locale: `/id/tentang-kami` -> `/about`.
  pub fn localize_path(&self, pathname: &str, target: Locale) -> String {
    let parsed = parse_path(pathname);
    let key = self.route_key(&parsed.main_route, parsed.locale);
    let mut route = key.to_string();
    for segment in &parsed.remaining_segments {
      route.push('/');
      route.push_str(segment);
    }
    self.build_localized_url(&route, target)
  }
}

impl Default for RouteTable {
  fn default() -> Self {
    Self::new(ROUTE_PAIRS.iter().copied()).expect("built-in route table is a bijection")
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPath {
  pub locale: Locale,
  /// First segment after the locale marker, untranslated. Empty for the home page.
  pub main_route: String,
  pub remaining_segments: Vec<String>,
}

/// Split a pathname into locale, main route and the rest.
/// `id` is the locale marker only when it is the first segment.
pub fn parse_path(pathname: &str) -> ParsedPath {
  let mut segments = pathname.split('/').filter(|s| !s.is_empty()).map(String::from).peekable();

  let locale = if segments.peek().is_some_and(|s| s == "id") {
    segments.next();
    Locale::Id
  } else {
    Locale::En
  };

  let main_route = segments.next().unwrap_or_default();
  ParsedPath { locale, main_route, remaining_segments: segments.collect() }
}
