/* src/cli/core/src/prerender.rs */

// `corpsite prerender`: enumerate every static and CMS-backed path, render each to
// `<out_dir>/<path>/index.html`, then write robots.txt and sitemap.xml.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use corpsite_server::{ContentSource, Site};
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::SiteConfig;
use crate::site::site_server;
use crate::ui::{self, DIM, RESET};

#[derive(Debug, Default)]
pub(crate) struct PrerenderReport {
  pub written: usize,
  /// Path and reason for every page that could not be written
  pub failed: Vec<(String, String)>,
}

/// File a page path is written to, or `None` for paths that would escape `out_dir`.
pub(crate) fn output_path(out_dir: &Path, path: &str) -> Option<PathBuf> {
  let mut file = out_dir.to_path_buf();
  for segment in path.split('/').filter(|s| !s.is_empty()) {
    if segment == "." || segment == ".." || segment.contains('\\') {
      return None;
    }
    file.push(segment);
  }
  file.push("index.html");
  Some(file)
}

fn write_file(file: &Path, contents: &str) -> Result<()> {
  if let Some(parent) = file.parent() {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  std::fs::write(file, contents).with_context(|| format!("failed to write {}", file.display()))
}

/// Render and write every path. A page that renders as an error or cannot be
/// written is recorded in the report; the rest carry on.
pub(crate) async fn render_all<S: ContentSource + 'static>(
  site: &Site<S>,
  paths: &BTreeSet<String>,
  out_dir: &Path,
  progress: &ProgressBar,
) -> PrerenderReport {
  let mut report = PrerenderReport::default();
  for path in paths {
    progress.set_message(path.clone());
    let result = match output_path(out_dir, path) {
      None => Err("path escapes the output directory".to_string()),
      Some(file) => {
        let page = site.render(path).await;
        if page.status == 200 {
          write_file(&file, &page.html).map_err(|e| format!("{e:#}"))
        } else {
          Err(format!("rendered with status {}", page.status))
        }
      }
    };
    match result {
      Ok(()) => report.written += 1,
      Err(reason) => {
        tracing::warn!(path = %path, %reason, "page not prerendered");
        report.failed.push((path.clone(), reason));
      }
    }
    progress.inc(1);
  }
  report
}

fn progress_bar(len: usize) -> ProgressBar {
  let bar = ProgressBar::new(len as u64);
  if let Ok(style) = ProgressStyle::with_template("  {bar:30.cyan/dim} {pos}/{len} {wide_msg:.dim}")
  {
    bar.set_style(style.progress_chars("=> "));
  }
  bar
}

pub async fn run_prerender(
  config: &SiteConfig,
  base_dir: &Path,
  out_dir: Option<&Path>,
) -> Result<()> {
  let started = Instant::now();
  let out_dir = out_dir.map_or_else(|| base_dir.join(&config.build.out_dir), Path::to_path_buf);
  let site = site_server(config, base_dir)?.into_parts()?.site;

  ui::step(1, 3, "enumerating paths");
  let paths = site.prerender_paths(config.build.page_size).await;
  ui::detail(&format!("{} paths", paths.len()));

  ui::step(2, 3, &format!("rendering into {}", out_dir.display()));
  std::fs::create_dir_all(&out_dir)
    .with_context(|| format!("failed to create {}", out_dir.display()))?;
  let bar = progress_bar(paths.len());
  let report = render_all(&site, &paths, &out_dir, &bar).await;
  bar.finish_and_clear();

  ui::step(3, 3, "writing robots.txt and sitemap.xml");
  write_file(&out_dir.join("robots.txt"), &site.robots_txt())?;
  write_file(&out_dir.join("sitemap.xml"), &site.sitemap_xml())?;
  ui::detail_ok("robots.txt");
  ui::detail_ok("sitemap.xml");

  for (path, reason) in &report.failed {
    ui::warn(&format!("{path} {DIM}{reason}{RESET}"));
  }
  let elapsed = ui::format_duration(started.elapsed());
  if report.failed.is_empty() {
    ui::ok(&format!("{} pages in {elapsed}", report.written));
  } else {
    ui::warn(&format!(
      "{} pages written, {} failed, in {elapsed}",
      report.written,
      report.failed.len()
    ));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn page_paths_map_to_index_files() {
    let out = Path::new("/srv/out");
    assert_eq!(output_path(out, "/").unwrap(), out.join("index.html"));
    assert_eq!(output_path(out, "/id").unwrap(), out.join("id/index.html"));
    assert_eq!(
      output_path(out, "/id/blog/read/halo/doc-1").unwrap(),
      out.join("id/blog/read/halo/doc-1/index.html")
    );
    assert!(output_path(out, "/blog/../../etc").is_none());
    assert!(output_path(out, "/a\\b").is_none());
  }

  #[tokio::test]
  async fn renders_static_pages_when_cms_is_down() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = SiteConfig::default();
    config.cms.base_url = "http://127.0.0.1:9/api".into();
    config.site.url = "https://acme.example".into();
    config.build.out_dir = "out".into();

    run_prerender(&config, tmp.path(), None).await.unwrap();

    let out = tmp.path().join("out");
    assert!(out.join("index.html").is_file());
    assert!(out.join("about/index.html").is_file());
    assert!(out.join("id/tentang-kami/index.html").is_file());
    assert!(out.join("id/solusi/cloud-solutions/index.html").is_file());
    // Contact is rendered per request.
    assert!(!out.join("contact/index.html").exists());

    let robots = std::fs::read_to_string(out.join("robots.txt")).unwrap();
    assert!(robots.contains("https://acme.example/sitemap.xml"));
    assert!(out.join("sitemap.xml").is_file());
  }

  #[tokio::test]
  async fn non_ok_pages_are_reported() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = SiteConfig::default();
    config.cms.base_url = "http://127.0.0.1:9/api".into();
    let site = site_server(&config, tmp.path()).unwrap().into_parts().unwrap().site;

    let paths: BTreeSet<String> =
      ["/about", "/case-study/gone", "/../x"].into_iter().map(String::from).collect();
    let report = render_all(&site, &paths, tmp.path(), &ProgressBar::hidden()).await;

    assert_eq!(report.written, 1);
    assert_eq!(report.failed.len(), 2);
    assert!(tmp.path().join("about/index.html").is_file());
    assert!(report.failed.iter().any(|(p, r)| p == "/case-study/gone" && r.contains("404")));
  }
}
