/* src/cli/core/src/main.rs */

mod config;
mod prerender;
mod serve;
mod site;
mod ui;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use corpsite_server::cms::tls;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::config::{SiteConfig, resolve_config};
use crate::site::site_server;

#[derive(Parser)]
#[command(name = "corpsite", version, about = "Bilingual company website server")]
struct Cli {
  /// Path to site.toml (default: searched upward from the current directory)
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Serve pages rendered on request
  Serve {
    /// Overrides server.port and PORT
    #[arg(short, long)]
    port: Option<u16>,
  },
  /// Render every enumerable page to static HTML
  Prerender {
    /// Overrides build.out_dir
    #[arg(short, long)]
    out_dir: Option<PathBuf>,
  },
  /// Print the paths `prerender` would write, one per line
  Paths,
}

impl Command {
  fn name(&self) -> &'static str {
    match self {
      Self::Serve { .. } => "serve",
      Self::Prerender { .. } => "prerender",
      Self::Paths => "paths",
    }
  }
}

fn init_tracing() {
  let filter =
    EnvFilter::builder().with_default_directive(LevelFilter::INFO.into()).from_env_lossy();
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

async fn run_paths(config: &SiteConfig, base_dir: &Path) -> Result<()> {
  let site = site_server(config, base_dir)?.into_parts()?.site;
  let paths = site.prerender_paths(config.build.page_size).await;
  let mut out = std::io::stdout().lock();
  for path in &paths {
    writeln!(out, "{path}").context("failed to write to stdout")?;
  }
  Ok(())
}

async fn run(cli: Cli) -> Result<()> {
  ui::banner(cli.command.name());
  let (config, base_dir) = resolve_config(cli.config.as_deref(), |key| std::env::var(key).ok())?;

  if tls::install(config.tls_policy()) {
    ui::warn("CMS certificate validation is disabled (CMS_INSECURE_TLS)");
  } else if config.insecure_tls && config.environment.is_production() {
    ui::warn("CMS_INSECURE_TLS ignored in production");
  }

  match cli.command {
    Command::Serve { port } => serve::run_serve(&config, &base_dir, port).await,
    Command::Prerender { out_dir } => {
      prerender::run_prerender(&config, &base_dir, out_dir.as_deref()).await
    }
    Command::Paths => run_paths(&config, &base_dir).await,
  }
}

#[tokio::main]
async fn main() {
  init_tracing();
  let cli = Cli::parse();
  if let Err(e) = run(cli).await {
    ui::fail(&format!("{e:#}"));
    std::process::exit(1);
  }
}
