use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm};
use moments_config::{Config, Theme};

use crate::cli::core::CommandError;
use crate::cli::output::{self, OutputPreferences};

/// Print an informational message via the standard CLI output helpers.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

pub fn print_hint(message: impl fmt::Display) {
    output::hint(message);
}

/// Pushes display-related settings into the output helpers.
pub fn apply_config(config: &Config) {
    colored::control::set_override(config.ui_color_enabled && !config.accessibility.plain_output);
    output::set_preferences(OutputPreferences {
        screen_reader_mode: config.accessibility.screen_reader,
        high_contrast_mode: config.accessibility.high_contrast,
        plain_output: config.accessibility.plain_output,
        plain_icons: config.theme == Theme::Plain,
    });
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

/// Blocks until the user acknowledges an alert.
pub fn acknowledge(theme: &ColorfulTheme, prompt: &str) -> Result<(), CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(true)
        .show_default(false)
        .wait_for_newline(true)
        .interact()
        .map(|_| ())
        .map_err(CommandError::from)
}
