use anyhow::Result;
use animslot_lib::{PathResolver, scan_candidates};

use crate::output::{print_info, print_json, symbols};

use super::Context;

pub fn cmd_candidates(ctx: &Context, model: &str, json: bool) -> Result<()> {
  let dir = ctx.existing_model(model)?;
  let candidates = scan_candidates(ctx.paths(), &dir);

  if json {
    return print_json(&candidates);
  }

  if candidates.is_empty() {
    print_info(&format!(
      "No animation files found. Put .vmd files in {}",
      ctx.store.resolver().anims_dir(&dir).display()
    ));
    return Ok(());
  }

  for name in &candidates {
    println!("  {} {}", symbols::INFO, name);
  }
  Ok(())
}
