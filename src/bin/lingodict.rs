//! Command-line front end for dictionary discovery.
//!
//! Usage:
//!   lingodict list [--path DIR] [--json]
//!   lingodict resolve fi-x-standard [--path DIR] [--json]
//!   lingodict locations [--path DIR]
//!
//! Search locations come from `LINGODICT_PATH`, the per-user and system
//! directories, and the build-time default; `LINGODICT_VARIANT` overrides the
//! variant picked for unqualified requests. `RUST_LOG` controls diagnostics.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lingodict::{Dictionary, DictionaryFinder};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "lingodict")]
#[command(about = "Find installed dictionaries and resolve one for a locale")]
struct Cli {
    /// Log discovery details to stderr; adds a debug directive on top of RUST_LOG.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every discovered dictionary in resolution order.
    List {
        /// Extra directory searched before all others.
        #[arg(long)]
        path: Option<PathBuf>,
        /// Emit a JSON array instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Resolve the dictionary that serves a locale tag.
    Resolve {
        /// Locale tag, e.g. `fi`, `fi-x-standard`, `fi_FI.UTF-8`.
        locale: String,
        /// Extra directory searched before all others.
        #[arg(long)]
        path: Option<PathBuf>,
        /// Emit the selected dictionary as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the search locations, highest priority first.
    Locations {
        /// Extra directory searched before all others.
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let finder = DictionaryFinder::from_env();

    match cli.command {
        Command::List { path, json } => {
            let dictionaries = finder.find_all_available(path.as_deref());
            if json {
                println!("{}", serde_json::to_string_pretty(&dictionaries)?);
            } else {
                for dict in &dictionaries {
                    println!("{}", describe(dict));
                }
            }
        }
        Command::Resolve { locale, path, json } => {
            let dict = finder
                .load(&locale, path.as_deref())
                .with_context(|| format!("resolving dictionary for '{locale}'"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&dict)?);
            } else {
                println!("{}", describe(&dict));
            }
        }
        Command::Locations { path } => {
            for location in finder.locations(path.as_deref()) {
                println!("{}", location.display());
            }
        }
    }
    Ok(())
}

fn describe(dict: &Dictionary) -> String {
    format!(
        "{}\t{}\tv{}\t{}\t{}",
        dict.language(),
        if dict.is_default() { "default" } else { "-" },
        dict.location().format_version,
        dict.location().path.display(),
        dict.description()
    )
}

fn init_logging(verbose: bool) {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if verbose {
        filter = filter.add_directive(LevelFilter::DEBUG.into());
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
