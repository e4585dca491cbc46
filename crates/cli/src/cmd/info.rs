use animslot_lib::PathResolver;
use animslot_lib::consts::MODELS_DIR_ENV;

use crate::output::print_stat;

use super::Context;

pub fn cmd_info(ctx: &Context, model: Option<&str>) {
  println!("Paths:");
  print_stat("Models root", &ctx.paths().models_root().display().to_string());
  if let Ok(value) = std::env::var(MODELS_DIR_ENV) {
    print_stat(MODELS_DIR_ENV, &value);
  }

  let Some(model) = model else {
    return;
  };
  let dir = ctx.paths().model_key(model);
  print_stat("Model", &dir);
  print_stat("Mapping file", &ctx.paths().config_file(&dir).display().to_string());
  print_stat("Animations", &ctx.paths().anims_dir(&dir).display().to_string());
}
