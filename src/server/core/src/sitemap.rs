/* src/server/core/src/sitemap.rs */

use std::fmt::Write as _;

use crate::locale::Locale;
use crate::routes::RouteTable;
use crate::template::escape_html;

/// Fixed sitemap entry for a route key.
#[derive(Debug, Clone, Copy)]
pub struct SitemapEntry {
  pub route: &'static str,
  pub priority: &'static str,
  pub changefreq: &'static str,
}

// Dynamic entries (posts, case studies) are not listed yet.
pub const SITEMAP_ENTRIES: &[SitemapEntry] = &[
  SitemapEntry { route: "", priority: "1.0", changefreq: "weekly" },
  SitemapEntry { route: "about", priority: "0.8", changefreq: "monthly" },
  SitemapEntry { route: "solution", priority: "0.9", changefreq: "monthly" },
  SitemapEntry { route: "case-study", priority: "0.8", changefreq: "weekly" },
  SitemapEntry { route: "blog", priority: "0.8", changefreq: "daily" },
  SitemapEntry { route: "partners", priority: "0.6", changefreq: "monthly" },
  SitemapEntry { route: "certifications", priority: "0.6", changefreq: "monthly" },
  SitemapEntry { route: "careers", priority: "0.7", changefreq: "weekly" },
  SitemapEntry { route: "contact", priority: "0.7", changefreq: "yearly" },
];

fn absolute(base_url: &str, path: &str) -> String {
  let base = base_url.trim_end_matches('/');
  if path == "/" { format!("{base}/") } else { format!("{base}{path}") }
}

pub fn robots_txt(base_url: &str) -> String {
  format!(
    "User-agent: *\nAllow: /\nDisallow: /api/\n\nSitemap: {}\n",
    absolute(base_url, "/sitemap.xml")
  )
}

/// One `<url>` per entry and locale, each linking its translations.
pub fn sitemap_xml(base_url: &str, table: &RouteTable) -> String {
  let mut xml = String::from(concat!(
    r#"<?xml version="1.0" encoding="UTF-8"?>"#,
    "\n",
    r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" "#,
    r#"xmlns:xhtml="http://www.w3.org/1999/xhtml">"#,
    "\n"
  ));

  for entry in SITEMAP_ENTRIES {
    for locale in Locale::ALL {
      let loc = absolute(base_url, &table.build_localized_url(entry.route, locale));
      let _ = writeln!(xml, "  <url>\n    <loc>{}</loc>", escape_html(&loc));
      for alt in Locale::ALL {
        let href = absolute(base_url, &table.build_localized_url(entry.route, alt));
        let _ = writeln!(
          xml,
          r#"    <xhtml:link rel="alternate" hreflang="{alt}" href="{}"/>"#,
          escape_html(&href)
        );
      }
      let _ = writeln!(
        xml,
        "    <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>",
        entry.changefreq, entry.priority
      );
    }
  }

  xml.push_str("</urlset>\n");
  xml
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn robots_points_at_sitemap() {
    let robots = robots_txt("https://example.co.id/");
    assert!(robots.starts_with("User-agent: *\n"));
    assert!(robots.ends_with("Sitemap: https://example.co.id/sitemap.xml\n"));
  }

  #[test]
  fn sitemap_lists_every_entry_per_locale() {
    let xml = sitemap_xml("https://example.co.id", &RouteTable::default());
    assert_eq!(xml.matches("<url>").count(), SITEMAP_ENTRIES.len() * 2);
    assert!(xml.contains("<loc>https://example.co.id/</loc>"));
    assert!(xml.contains("<loc>https://example.co.id/id/tentang-kami</loc>"));
    assert!(xml.contains(r#"hreflang="id" href="https://example.co.id/id/solusi""#));
    assert!(xml.contains("<changefreq>daily</changefreq>"));
    assert!(xml.ends_with("</urlset>\n"));
  }
}
