use anyhow::Result;
use clap::Parser;

use hacktyper::cli::{Cli, Commands, ConfigCommands, RunArgs};
use hacktyper::tui::theme::{set_theme, theme_by_name, THEME_NAMES};
use hacktyper::tui::current_theme;
use hacktyper::Config;

mod commands;

use commands::run::RunOptions;

fn main() {
    let cli = Cli::parse();
    if let Some(path) = hacktyper::logging::init_tracing() {
        tracing::info!(path = %path, version = hacktyper::cli::version(), "logging enabled");
    }

    if let Err(e) = run(cli) {
        let theme = current_theme();
        eprintln!("{}", theme.error_text(&format!("Error: {:#}", e)));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None => start(cli.run),
        Some(Commands::Run(args)) => start(args),
        Some(Commands::Config(ConfigCommands::Show)) => commands::config::handle_show(),
        Some(Commands::Config(ConfigCommands::Path)) => commands::config::handle_path(),
        Some(Commands::Config(ConfigCommands::Init { force })) => {
            commands::config::handle_init(force)
        }
        Some(Commands::Completions { shell }) => commands::completions::handle(shell),
    }
}

fn start(args: RunArgs) -> Result<()> {
    let config = Config::load()?;
    match theme_by_name(&config.ui.theme) {
        Some(theme) => set_theme(theme),
        None => tracing::warn!(
            theme = %config.ui.theme,
            known = ?THEME_NAMES,
            "unknown theme, using default"
        ),
    }

    commands::run::handle(
        config,
        RunOptions {
            source: args.source,
            speed: args.speed,
            sounds: args.sounds,
            mute: args.mute,
        },
    )
}
