//! Config subcommands handler

use anyhow::Result;
use std::io::{self, BufRead, Write};

use hacktyper::tui::current_theme;
use hacktyper::Config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(&toml_str));
    Ok(())
}

/// Print the config file location.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write a config file with every default spelled out.
///
/// An existing file is only replaced after confirmation, or with `force`.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(force: bool) -> Result<()> {
    let theme = current_theme();
    let config_path = Config::config_path()?;

    if config_path.exists()
        && !force
        && !prompt_confirmation(&format!("Overwrite {}?", config_path.display()))?
    {
        println!("{}", theme.primary_text("No changes made."));
        return Ok(());
    }

    let path = Config::default().save()?;
    println!(
        "{}",
        theme.accent_text(&format!("Config written to {}", path.display()))
    );
    Ok(())
}

/// Prompt user for yes/no confirmation.
///
/// Returns true if user confirms (y/yes), false otherwise.
/// If stdin is not a TTY (non-interactive), returns false.
fn prompt_confirmation(message: &str) -> Result<bool> {
    let theme = current_theme();

    // Check if stdin is a TTY - if not, skip prompt and return false
    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            theme.secondary_text("Non-interactive mode: use --force to overwrite")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", theme.primary_text(message));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
    let response = input.trim().to_lowercase();
    response == "y" || response == "yes"
}
