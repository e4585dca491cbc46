use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

use output::print_error;

/// animslot - per-model animation slot mappings
#[derive(Parser)]
#[command(name = "animslot")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Root directory holding one directory per model (default: $ANIMSLOT_MODELS_DIR or the data dir)
  #[arg(long, global = true, value_name = "PATH")]
  models_dir: Option<PathBuf>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Show the mapping of a model
  Show {
    model: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
  },

  /// Print the file mapped to a slot
  Get { model: String, slot: String },

  /// Map a slot to an animation file
  Set { model: String, slot: String, file: String },

  /// Remove a slot's mapping
  Unset { model: String, slot: String },

  /// Remove every mapping of a model
  Clear { model: String },

  /// Replace a model's mapping with the contents of a JSON file
  Import { model: String, file: PathBuf },

  /// List animation files a model's slots can be mapped to
  Candidates {
    model: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
  },

  /// List every known slot with its mapped file
  Slots {
    model: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
  },

  /// Show resolved paths
  Info {
    /// Model to show paths for
    model: Option<String>,
  },
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let default_filter = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let ctx = cmd::Context::new(cli.models_dir);

  match run(&ctx, cli.command) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      print_error(&format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}

fn run(ctx: &cmd::Context, command: Commands) -> Result<()> {
  match command {
    Commands::Show { model, json } => cmd::cmd_show(ctx, &model, json),
    Commands::Get { model, slot } => cmd::cmd_get(ctx, &model, &slot),
    Commands::Set { model, slot, file } => cmd::cmd_set(ctx, &model, &slot, Some(file.as_str())),
    Commands::Unset { model, slot } => cmd::cmd_set(ctx, &model, &slot, None),
    Commands::Clear { model } => cmd::cmd_clear(ctx, &model),
    Commands::Import { model, file } => cmd::cmd_import(ctx, &model, &file),
    Commands::Candidates { model, json } => cmd::cmd_candidates(ctx, &model, json),
    Commands::Slots { model, json } => cmd::cmd_slots(ctx, &model, json),
    Commands::Info { model } => {
      cmd::cmd_info(ctx, model.as_deref());
      Ok(())
    }
  }
}
