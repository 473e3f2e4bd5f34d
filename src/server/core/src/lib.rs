/* src/server/core/src/lib.rs */

pub mod cms;
pub mod collections;
pub mod content;
pub mod entities;
pub mod errors;
pub mod locale;
pub mod page;
pub mod prerender;
pub mod resolve;
pub mod routes;
pub mod server;
pub mod site;
pub mod sitemap;
pub mod slug;
pub mod solutions;
pub mod template;

#[cfg(test)]
mod test_support;

// Re-exports for ergonomic use
pub use cms::tls::{Environment, TlsPolicy};
pub use cms::{CmsClient, FetchError, PaginationMeta, RequestOptions};
pub use collections::{Cms, Collection, ContentSource, Endpoint, ListQuery, Outcome};
pub use errors::SiteError;
pub use locale::Locale;
pub use page::PageRoute;
pub use prerender::{STATIC_ROUTES, enumerate_paths};
pub use resolve::{
  ResolveData, ResolveStrategy, default_strategies, from_accept_language, from_cookie,
  from_url_prefix, from_url_query, resolve_chain,
};
pub use routes::{ParsedPath, ROUTE_PAIRS, RouteTable, parse_path};
pub use server::{DEFAULT_LOCALE_COOKIE, SiteParts, SiteServer};
pub use site::{RenderedPage, Site, SiteSettings};
pub use slug::{entity_slug, name_to_slug};
pub use template::TemplateSet;
