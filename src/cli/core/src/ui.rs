/* src/cli/core/src/ui.rs */

// Human-facing progress output. Everything goes to stderr so `corpsite paths`
// can be piped.

#![allow(clippy::print_stderr)]

use std::time::Duration;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

pub fn banner(command: &str) {
  let version = env!("CARGO_PKG_VERSION");
  eprintln!("{BOLD}corpsite{RESET} {DIM}v{version}{RESET} {CYAN}{command}{RESET}");
}

pub fn step(n: usize, total: usize, msg: &str) {
  eprintln!("{DIM}[{n}/{total}]{RESET} {msg}");
}

pub fn detail(msg: &str) {
  eprintln!("  {DIM}{msg}{RESET}");
}

pub fn detail_ok(msg: &str) {
  eprintln!("  {GREEN}+{RESET} {msg}");
}

pub fn ok(msg: &str) {
  eprintln!("{GREEN}ok{RESET} {msg}");
}

pub fn warn(msg: &str) {
  eprintln!("{YELLOW}warn{RESET} {msg}");
}

pub fn fail(msg: &str) {
  eprintln!("{RED}error{RESET} {msg}");
}

pub fn format_duration(d: Duration) -> String {
  let ms = d.as_millis();
  if ms < 1000 { format!("{ms}ms") } else { format!("{:.2}s", d.as_secs_f64()) }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn durations() {
    assert_eq!(format_duration(Duration::from_millis(42)), "42ms");
    assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
  }
}
