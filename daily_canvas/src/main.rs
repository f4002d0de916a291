//! Daily canvas updater CLI.
//!
//! Finds the configured canvas in a vault and points every node inside the
//! configured group at today's journal note. Meant to run once per day, e.g.
//! from a login hook or scheduler.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use daily_canvas::exit_codes;
use daily_canvas::io::config::{DailyConfig, default_config_path, load_config, write_config};
use daily_canvas::logging;
use daily_canvas::update::{UpdateRequest, run_update};

#[derive(Parser)]
#[command(
    name = "daily-canvas",
    version,
    about = "Point the nodes of a canvas group at today's journal note"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Clone)]
struct VaultArgs {
    /// Vault directory searched for the canvas.
    #[arg(long, default_value = ".")]
    vault: PathBuf,

    /// Config file (defaults to `<vault>/.daily-canvas/config.toml`).
    #[arg(long)]
    config: Option<PathBuf>,
}

impl VaultArgs {
    fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| default_config_path(&self.vault))
    }
}

#[derive(Subcommand)]
enum Command {
    /// Rewrite the canvas once for today's date.
    Update {
        #[command(flatten)]
        vault: VaultArgs,

        /// Use this date (YYYY-MM-DD) instead of today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Write the default config file if missing.
    Init {
        #[command(flatten)]
        vault: VaultArgs,

        /// Overwrite an existing config file.
        #[arg(short, long)]
        force: bool,
    },
    /// Show or edit the config file.
    Config {
        #[command(flatten)]
        vault: VaultArgs,

        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective config as TOML.
    Show,
    /// Change one or more config keys and save.
    Set {
        /// File name of the canvas to update.
        #[arg(long)]
        canvas_name: Option<String>,

        /// Label of the group whose nodes are relocated.
        #[arg(long)]
        group_name: Option<String>,

        /// Prefix for the dated journal file name (e.g. `Journal/`).
        #[arg(long)]
        journal_dir: Option<String>,

        /// Report malformed canvas files as errors.
        #[arg(long)]
        strict_parse: Option<bool>,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Update { vault, date } => cmd_update(&vault, date),
        Command::Init { vault, force } => cmd_init(&vault, force),
        Command::Config { vault, action } => cmd_config(&vault, action),
    }
}

fn cmd_update(vault: &VaultArgs, date: Option<NaiveDate>) -> Result<()> {
    let config = load_config(&vault.config_path()).context("load config")?;
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    debug!(vault = %vault.vault.display(), %date, "running update");
    let outcome = run_update(&UpdateRequest {
        vault_root: &vault.vault,
        config: &config,
        date,
    })?;
    println!("{outcome}");
    Ok(())
}

fn cmd_init(vault: &VaultArgs, force: bool) -> Result<()> {
    let path = vault.config_path();
    if !force && path.exists() {
        println!("init: config exists at {}", path.display());
        return Ok(());
    }
    write_config(&path, &DailyConfig::default())
        .with_context(|| format!("write config {}", path.display()))?;
    println!("init: wrote {}", path.display());
    Ok(())
}

fn cmd_config(vault: &VaultArgs, action: ConfigAction) -> Result<()> {
    let path = vault.config_path();
    let mut config = load_config(&path).context("load config")?;
    match action {
        ConfigAction::Show => print_config(&config),
        ConfigAction::Set {
            canvas_name,
            group_name,
            journal_dir,
            strict_parse,
        } => {
            if let Some(canvas_name) = canvas_name {
                config.canvas_name = canvas_name;
            }
            if let Some(group_name) = group_name {
                config.group_name = group_name;
            }
            if let Some(journal_dir) = journal_dir {
                config.journal_dir = journal_dir;
            }
            if let Some(strict_parse) = strict_parse {
                config.strict_parse = strict_parse;
            }
            save_config(&path, &config)?;
            print_config(&config)
        }
    }
}

fn save_config(path: &Path, config: &DailyConfig) -> Result<()> {
    write_config(path, config).with_context(|| format!("write config {}", path.display()))
}

fn print_config(config: &DailyConfig) -> Result<()> {
    let rendered = toml::to_string_pretty(config).context("serialize config toml")?;
    print!("{rendered}");
    Ok(())
}
