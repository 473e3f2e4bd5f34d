/* src/server/core/src/template/set.rs */

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use super::OUTLET;
use crate::errors::SiteError;
use crate::locale::Locale;

/// Page templates, each rendered inside `layout.html`.
pub const PAGE_TEMPLATES: &[&str] = &[
  "home",
  "about",
  "blog",
  "blog-category",
  "blog-post",
  "case-studies",
  "case-study",
  "solutions",
  "solution",
  "partners",
  "certifications",
  "careers",
  "contact",
  "not-found",
];

macro_rules! builtin {
  ($($name:literal),* $(,)?) => {
    &[$(($name, include_str!(concat!("../../templates/", $name, ".html")))),*]
  };
}

const BUILTIN_TEMPLATES: &[(&str, &str)] = builtin!(
  "layout",
  "home",
  "about",
  "blog",
  "blog-category",
  "blog-post",
  "case-studies",
  "case-study",
  "solutions",
  "solution",
  "partners",
  "certifications",
  "careers",
  "contact",
  "not-found",
);

const BUILTIN_MESSAGES: &[(Locale, &str)] = &[
  (Locale::En, include_str!("../../templates/i18n/en.json")),
  (Locale::Id, include_str!("../../templates/i18n/id.json")),
];

/// Layout-composed page templates plus UI strings per locale.
#[derive(Debug, Clone)]
pub struct TemplateSet {
  pages: HashMap<String, String>,
  messages: HashMap<Locale, Value>,
}

impl TemplateSet {
  /// Templates compiled into the binary.
  pub fn builtin() -> Result<Self, SiteError> {
    Self::compose(
      |name| Ok(lookup_builtin(name).map(str::to_string)),
      |locale| Ok(lookup_messages(locale).map(str::to_string)),
    )
  }

  /// Built-ins with per-file overrides from `dir` (`<name>.html`, `i18n/<locale>.json`).
  pub fn from_dir(dir: &Path) -> Result<Self, SiteError> {
    let read = |path: &Path| -> Result<Option<String>, SiteError> {
      match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(SiteError::config(format!("failed to read {}: {e}", path.display()))),
      }
    };
    Self::compose(
      |name| {
        let custom = read(&dir.join(format!("{name}.html")))?;
        Ok(custom.or_else(|| lookup_builtin(name).map(str::to_string)))
      },
      |locale| {
        let custom = read(&dir.join("i18n").join(format!("{locale}.json")))?;
        Ok(custom.or_else(|| lookup_messages(locale).map(str::to_string)))
      },
    )
  }

  fn compose(
    template: impl Fn(&str) -> Result<Option<String>, SiteError>,
    messages: impl Fn(Locale) -> Result<Option<String>, SiteError>,
  ) -> Result<Self, SiteError> {
    let missing = |name: &str| SiteError::config(format!("template '{name}' not found"));
    let layout = template("layout")?.ok_or_else(|| missing("layout"))?;
    if !layout.contains(OUTLET) {
      return Err(SiteError::config("layout template has no <!--site:outlet--> marker"));
    }

    let mut pages = HashMap::new();
    for name in PAGE_TEMPLATES {
      let body = template(name)?.ok_or_else(|| missing(name))?;
      pages.insert((*name).to_string(), layout.replacen(OUTLET, &body, 1));
    }

    let mut parsed = HashMap::new();
    for locale in Locale::ALL {
      let raw = messages(locale)?.ok_or_else(|| missing(&format!("i18n/{locale}.json")))?;
      let value: Value = serde_json::from_str(&raw)
        .map_err(|e| SiteError::config(format!("invalid i18n/{locale}.json: {e}")))?;
      parsed.insert(locale, value);
    }

    Ok(Self { pages, messages: parsed })
  }

  /// Full document template for a page (layout applied). Every name in
  /// [`PAGE_TEMPLATES`] is present; anything else is empty.
  pub fn page(&self, name: &str) -> &str {
    self.pages.get(name).map_or("", String::as_str)
  }

  /// UI strings for `locale`; an empty object when absent.
  pub fn messages(&self, locale: Locale) -> Value {
    self.messages.get(&locale).cloned().unwrap_or_else(|| Value::Object(Default::default()))
  }
}

fn lookup_builtin(name: &str) -> Option<&'static str> {
  BUILTIN_TEMPLATES.iter().find(|(n, _)| *n == name).map(|(_, body)| *body)
}

fn lookup_messages(locale: Locale) -> Option<&'static str> {
  BUILTIN_MESSAGES.iter().find(|(l, _)| *l == locale).map(|(_, raw)| *raw)
}
