//! Command-line interface definitions.
//!
//! Lives in the library so the xtask crate can build man pages from the
//! same definitions the binary parses.

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Version string, with the git hash on dev builds.
pub fn version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| {
        let version = env!("CARGO_PKG_VERSION");
        let date = option_env!("HACKTYPER_BUILD_DATE").unwrap_or("unknown");
        match option_env!("VERGEN_GIT_SHA") {
            Some(sha) if !cfg!(feature = "release") => {
                let short = sha.get(..7).unwrap_or(sha);
                format!("{}-{} ({})", version, short, date)
            }
            _ => format!("{} ({})", version, date),
        }
    })
}

/// Type like a movie hacker.
///
/// Any key reveals the next few characters of very convincing code.
#[derive(Debug, Parser)]
#[command(name = "hacktyper", version = version(), about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Options for the default `run` command
    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the show (default)
    Run(RunArgs),

    /// Inspect or create the config file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// Text file to type out instead of the built-in kernel source
    #[arg(long, value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// Characters revealed per keypress
    #[arg(long, value_name = "N")]
    pub speed: Option<usize>,

    /// Directory with the sound files
    #[arg(long, value_name = "DIR")]
    pub sounds: Option<PathBuf>,

    /// Disable all sound
    #[arg(long)]
    pub mute: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Write a config file with all defaults
    Init {
        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },
}
