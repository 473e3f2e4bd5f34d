/* src/server/core/src/resolve.rs */

use crate::locale::Locale;

/// Request facts a strategy may look at. Borrowed straight from the incoming request.
pub struct ResolveData<'a> {
  /// Path plus optional query string, e.g. `/about?locale=id`
  pub url: &'a str,
  pub cookie_header: Option<&'a str>,
  pub accept_language: Option<&'a str>,
  pub default_locale: Locale,
}

/// One step of the locale resolution chain. The first strategy returning `Some` wins.
pub trait ResolveStrategy: Send + Sync {
  fn kind(&self) -> &'static str;
  fn resolve(&self, data: &ResolveData<'_>) -> Option<Locale>;
}

/// Run the chain; falls back to `data.default_locale`.
pub fn resolve_chain(strategies: &[Box<dyn ResolveStrategy>], data: &ResolveData<'_>) -> Locale {
  strategies.iter().find_map(|s| s.resolve(data)).unwrap_or(data.default_locale)
}

/// query `locale` -> cookie `lang` -> Accept-Language
pub fn default_strategies() -> Vec<Box<dyn ResolveStrategy>> {
  vec![from_url_query("locale"), from_cookie("lang"), from_accept_language()]
}

// -- url prefix --

struct UrlPrefix;

impl ResolveStrategy for UrlPrefix {
  fn kind(&self) -> &'static str {
    "url_prefix"
  }

  fn resolve(&self, data: &ResolveData<'_>) -> Option<Locale> {
    let path = data.url.split(['?', '#']).next().unwrap_or_default();
    let first = path.split('/').find(|s| !s.is_empty())?;
    (first == "id").then_some(Locale::Id)
  }
}

/// `/id/...` -> `id`. Un-prefixed paths are left to later strategies.
pub fn from_url_prefix() -> Box<dyn ResolveStrategy> {
  Box::new(UrlPrefix)
}

// -- query parameter --

struct UrlQuery {
  param: String,
}

impl ResolveStrategy for UrlQuery {
  fn kind(&self) -> &'static str {
    "url_query"
  }

  fn resolve(&self, data: &ResolveData<'_>) -> Option<Locale> {
    let (_, query) = data.url.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();
    query
      .split('&')
      .filter_map(|pair| pair.split_once('='))
      .filter(|(k, _)| *k == self.param)
      .find_map(|(_, v)| Locale::parse(v))
  }
}

pub fn from_url_query(param: &str) -> Box<dyn ResolveStrategy> {
  Box::new(UrlQuery { param: param.to_string() })
}

// -- cookie --

struct Cookie {
  name: String,
}

impl ResolveStrategy for Cookie {
  fn kind(&self) -> &'static str {
    "cookie"
  }

  fn resolve(&self, data: &ResolveData<'_>) -> Option<Locale> {
    parse_cookie_locale(data.cookie_header?, &self.name)
  }
}

pub fn from_cookie(name: &str) -> Box<dyn ResolveStrategy> {
  Box::new(Cookie { name: name.to_string() })
}

fn parse_cookie_locale(header: &str, name: &str) -> Option<Locale> {
  header
    .split(';')
    .filter_map(|pair| pair.trim().split_once('='))
    .filter(|(k, _)| k.trim() == name)
    .find_map(|(_, v)| Locale::parse(v))
}

// -- Accept-Language --

struct AcceptLanguage;

impl ResolveStrategy for AcceptLanguage {
  fn kind(&self) -> &'static str {
    "accept_language"
  }

  fn resolve(&self, data: &ResolveData<'_>) -> Option<Locale> {
    parse_accept_language(data.accept_language?)
  }
}

pub fn from_accept_language() -> Box<dyn ResolveStrategy> {
  Box::new(AcceptLanguage)
}

/// Any acceptable `id` tag (`id`, `id-ID`, `ID`) selects Indonesian regardless of
/// its q-value; otherwise an `en` tag selects English; anything else is no answer.
fn parse_accept_language(header: &str) -> Option<Locale> {
  let mut saw_english = false;

  for part in header.split(',') {
    let mut params = part.split(';');
    let tag = params.next().unwrap_or_default().trim();
    if tag.is_empty() {
      continue;
    }
    let refused = params
      .filter_map(|p| p.trim().strip_prefix("q="))
      .any(|q| q.trim().parse::<f64>().is_ok_and(|v| v <= 0.0));
    if refused {
      continue;
    }

    let primary = tag.split('-').next().unwrap_or(tag);
    match Locale::parse(primary) {
      Some(Locale::Id) => return Some(Locale::Id),
      Some(Locale::En) => saw_english = true,
      None => {}
    }
  }

  saw_english.then_some(Locale::En)
}
