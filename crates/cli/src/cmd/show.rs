//! Read-only mapping commands.

use anyhow::{Result, bail};

use crate::output::{print_info, print_json, print_slot_row};

use super::Context;

pub fn cmd_show(ctx: &Context, model: &str, json: bool) -> Result<()> {
  let dir = ctx.model_key(model)?;
  let mapping = ctx.store.get_mapping(&dir);

  if json {
    return print_json(&mapping);
  }

  if mapping.is_empty() {
    print_info(&format!("No animations mapped for '{}'.", model));
    return Ok(());
  }

  println!("{}:", model);
  for (slot, file) in mapping.iter() {
    print_slot_row(slot, Some(file));
  }
  Ok(())
}

pub fn cmd_get(ctx: &Context, model: &str, slot: &str) -> Result<()> {
  let dir = ctx.model_key(model)?;
  match ctx.store.get_mapped_file(&dir, slot) {
    Some(file) => {
      println!("{}", file);
      Ok(())
    }
    None => bail!("slot '{}' is not mapped for model '{}'", slot, model),
  }
}
