//! CLI output formatting utilities.
//!
//! Provides consistent formatting for terminal output including colored status
//! messages, slot rows, and Unicode symbols.

use anyhow::Context;
use owo_colors::{OwoColorize, Stream};

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const WARNING: &str = "⚠";
  pub const INFO: &str = "•";
  pub const ARROW: &str = "→";
  pub const UNMAPPED: &str = "-";
}

/// Shorten `name` to at most `max` characters, marking the cut with `…`.
pub fn truncate_name(name: &str, max: usize) -> String {
  if name.chars().count() <= max {
    return name.to_string();
  }
  let kept: String = name.chars().take(max.saturating_sub(1)).collect();
  format!("{}…", kept)
}

/// Animation file name without its `.vmd` extension, for compact display.
pub fn display_anim_name(file: &str) -> &str {
  let len = file.len();
  if len > 4 && file.is_char_boundary(len - 4) && file[len - 4..].eq_ignore_ascii_case(".vmd") {
    &file[..len - 4]
  } else {
    file
  }
}

pub fn print_success(message: &str) {
  println!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    message
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_warning(message: &str) {
  eprintln!(
    "{} {}",
    symbols::WARNING.if_supports_color(Stream::Stderr, |s| s.yellow()),
    message.if_supports_color(Stream::Stderr, |s| s.yellow())
  );
}

pub fn print_info(message: &str) {
  println!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
    message
  );
}

pub fn print_stat(label: &str, value: &str) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

/// One slot line: mapped slots in green with their file, unmapped dimmed.
pub fn print_slot_row(slot: &str, file: Option<&str>) {
  match file {
    Some(file) => println!(
      "  {} {:<12} {} {}",
      symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
      slot,
      symbols::ARROW.if_supports_color(Stream::Stdout, |s| s.dimmed()),
      file
    ),
    None => println!(
      "  {} {}",
      symbols::UNMAPPED.if_supports_color(Stream::Stdout, |s| s.dimmed()),
      slot.if_supports_color(Stream::Stdout, |s| s.dimmed())
    ),
  }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}
