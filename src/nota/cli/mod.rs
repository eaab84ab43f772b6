//! # CLI Layer
//!
//! The only place that knows about terminal I/O, logging setup and exit codes.
//!
//! 1. **Argument Parsing**: clap definitions in `setup.rs`
//! 2. **API Setup**: locate (or bootstrap) the config file, load it, build `NotaApi`.
//!    Listing only reads: a missing config means an empty one, nothing is created.
//! 3. **API Dispatch**: create a note, or list existing ones with `--list`
//! 4. **Output Formatting**: `print.rs` turns `CmdResult` values into terminal lines

mod print;
mod setup;

use clap::Parser;
use nota::api::{CmdMessage, NotaApi};
use nota::config::NotaConfig;
use nota::error::Result;
use nota::init::{config_home, find_config, locate_config};
use nota::model::NoteRequest;
use setup::Cli;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub use print::print_error;

/// Env var holding a tracing filter directive, e.g. `NOTA_LOG=nota=debug`.
const LOG_ENV: &str = "NOTA_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let api = init_api(&cli)?;

    match cli.note_request() {
        Some(request) if !cli.list => handle_create(&api, &request),
        _ => handle_list(&api, &cli),
    }
}

fn handle_create(api: &NotaApi, request: &NoteRequest) -> Result<()> {
    let result = api.create_note(request)?;
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &NotaApi, cli: &Cli) -> Result<()> {
    let kind = cli.kind.note_kind();
    let result = api.list_notes(&kind, cli.root.as_deref())?;
    print::print_notes(&result.listed_notes);
    print::print_messages(&result.messages);
    Ok(())
}

fn init_api(cli: &Cli) -> Result<NotaApi> {
    let home = config_home()?;
    let config = if cli.list {
        load_existing_config(cli, &home)?
    } else {
        load_or_bootstrap_config(cli, &home)?
    };
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    Ok(NotaApi::new(config, home, cwd))
}

fn load_existing_config(cli: &Cli, home: &Path) -> Result<NotaConfig> {
    match find_config(cli.config.as_deref(), home)? {
        Some(path) => {
            debug!(config = %path.display(), "loading configuration");
            NotaConfig::load(&path)
        }
        None => {
            debug!(home = %home.display(), "no configuration, listing with defaults");
            Ok(NotaConfig::default())
        }
    }
}

fn load_or_bootstrap_config(cli: &Cli, home: &Path) -> Result<NotaConfig> {
    let location = locate_config(cli.config.as_deref(), home)?;

    if location.bootstrapped {
        print::print_messages(&[CmdMessage::info(format!(
            "Configuration file not found! Copied templates to: {}",
            home.display()
        ))]);
    }

    debug!(config = %location.path.display(), "loading configuration");
    NotaConfig::load(&location.path)
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
