//! Slot overview, the text form of the mapping editor panel.

use anyhow::Result;
use animslot_lib::{AnimSlot, EditSession};

use crate::output::{display_anim_name, print_json, print_slot_row, print_stat, truncate_name};

use super::Context;

const NAME_WIDTH: usize = 24;

pub fn cmd_slots(ctx: &Context, model: &str, json: bool) -> Result<()> {
  let dir = ctx.existing_model(model)?;
  let session = EditSession::open(&ctx.store, dir);
  let stats = session.stats();

  if json {
    let slots: Vec<_> = AnimSlot::ALL
      .iter()
      .map(|slot| serde_json::json!({ "slot": slot.name(), "file": session.mapped(*slot) }))
      .collect();
    return print_json(&serde_json::json!({ "model": model, "slots": slots, "stats": stats }));
  }

  println!("{}:", truncate_name(model, NAME_WIDTH));
  for slot in AnimSlot::ALL {
    let file = session.mapped(slot).map(|f| truncate_name(display_anim_name(f), NAME_WIDTH));
    print_slot_row(slot.name(), file.as_deref());
  }
  println!();
  print_stat("Mapped", &stats.to_string());
  Ok(())
}
