//! PrefStore command-line tool — entry point.
//!
//! A small inspector and editor for `.prefs` files. Applications
//! normally read and write preferences through `prefstore-core`; this
//! binary exists for everything around them: checking what an
//! application actually saved, fixing a value without launching the
//! application, and seeding a preferences file in a setup script.
//!
//! # Usage
//!
//! ```text
//! prefstore <COMMAND>
//!
//! Commands:
//!   show     List every preference in a file
//!   get      Print one stored value, raw
//!   set      Insert or replace one value
//!   compare  Compare two version strings
//! ```
//!
//! Examples:
//!
//! ```text
//! prefstore show MyApp.prefs
//! prefstore get MyApp.prefs libraryPath
//! prefstore set MyApp.prefs gridSize 32
//! prefstore set MyApp.prefs motto true --type text
//! prefstore compare 1.4 1.2.9
//! ```
//!
//! `set` infers the storage class of the value (boolean, then integer,
//! then float, then text); `--type` forces one instead. `get` exits
//! non-zero when the key holds no value, so scripts can branch on it.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use prefstore_cli::commands::{self, ValueKind};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Inspect and edit PrefStore preferences files.
///
/// The `#[derive(Parser)]` macro from `clap` generates the argument
/// parser from the struct and the subcommand enum below.
#[derive(Debug, Parser)]
#[command(
    name = "prefstore",
    about = "Inspect and edit PrefStore preferences files",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every preference in a file.
    Show {
        /// Path to the preferences file.
        file: PathBuf,
    },

    /// Print one stored value, raw.
    Get {
        /// Path to the preferences file.
        file: PathBuf,
        /// Preference key to read.
        key: String,
    },

    /// Insert or replace one value.
    Set {
        /// Path to the preferences file (created if missing).
        file: PathBuf,
        /// Preference key to write.
        key: String,
        /// Value to store.
        value: String,
        /// Storage class to use instead of inferring one from the value.
        #[arg(long = "type", value_enum)]
        kind: Option<KindArg>,
    },

    /// Compare two version strings.
    Compare {
        /// Version to evaluate (e.g. the latest published release).
        candidate: String,
        /// Version to compare against (e.g. the installed release).
        baseline: String,
    },
}

/// `--type` argument values, mapped onto [`ValueKind`].
#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Text,
    Bool,
    Int,
    Float,
}

impl From<KindArg> for ValueKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Text => ValueKind::Text,
            KindArg::Bool => ValueKind::Bool,
            KindArg::Int => ValueKind::Int,
            KindArg::Float => ValueKind::Float,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // `EnvFilter::try_from_default_env()` reads the `RUST_LOG`
    // environment variable. If it is absent or invalid, fall back to
    // `info` level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Show { file } => {
            print!("{}", commands::show(&file)?);
        }
        Command::Get { file, key } => {
            println!("{}", commands::get(&file, &key)?);
        }
        Command::Set {
            file,
            key,
            value,
            kind,
        } => {
            let value = match kind {
                Some(kind) => ValueKind::from(kind).parse_value(&value)?,
                None => commands::infer_value(&value),
            };
            commands::set(&file, &key, value)?;
        }
        Command::Compare {
            candidate,
            baseline,
        } => {
            println!("{}", commands::compare(&candidate, &baseline));
        }
    }
    Ok(())
}
