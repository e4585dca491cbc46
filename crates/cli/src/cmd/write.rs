//! Commands that change a model's mapping.

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use animslot_lib::AnimSlot;
use animslot_lib::mapping::storage::parse_mapping;

use crate::output::{print_success, print_warning, symbols};

use super::Context;

pub fn cmd_set(ctx: &Context, model: &str, slot: &str, file: Option<&str>) -> Result<()> {
  let dir = ctx.existing_model(model)?;
  if slot.is_empty() {
    anyhow::bail!("slot name must not be empty");
  }
  if slot.parse::<AnimSlot>().is_err() {
    print_warning(&format!("'{}' is not a known slot; mapping it anyway", slot));
  }

  ctx.store.set_mapping(&dir, slot, file);
  ctx.verify_persisted(&dir)?;

  match file.filter(|f| !f.is_empty()) {
    Some(file) => print_success(&format!("{} {} {}", slot, symbols::ARROW, file)),
    None => print_success(&format!("Unmapped {}", slot)),
  }
  Ok(())
}

pub fn cmd_clear(ctx: &Context, model: &str) -> Result<()> {
  let dir = ctx.existing_model(model)?;
  let previous = ctx.store.get_mapping(&dir).len();

  ctx.store.save_mapping(&dir, std::iter::empty::<(String, String)>());
  ctx.verify_persisted(&dir)?;

  print_success(&format!("Cleared {} mapping(s) for '{}'", previous, model));
  Ok(())
}

pub fn cmd_import(ctx: &Context, model: &str, file: &Path) -> Result<()> {
  let dir = ctx.existing_model(model)?;
  let content = fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
  let entries = parse_mapping(&content).with_context(|| format!("Invalid mapping file {}", file.display()))?;

  let count = entries.len();
  ctx.store.save_mapping(&dir, entries);
  ctx.verify_persisted(&dir)?;

  print_success(&format!("Imported {} mapping(s) for '{}'", count, model));
  Ok(())
}
