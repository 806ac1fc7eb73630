use std::path::PathBuf;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::errors::MomentsError;
use crate::theme;

const DEFAULT_THEME_FILE: &str = "theme.config.json";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "theme",
        "Rewrite stylesheet variables from a theme file",
        "theme apply [theme.config.json] [style-root]",
        cmd_theme,
    )]
}

fn cmd_theme(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|action| action.to_lowercase()) {
        Some(action) if action == "apply" => {}
        _ => {
            return Err(CommandError::usage(
                "theme apply [theme.config.json] [style-root]",
            ))
        }
    }

    let config_path = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_THEME_FILE));
    let style_root = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| context.config.resolve_style_root());

    let report = theme::apply_theme(&config_path, &style_root)
        .map_err(|err| CommandError::Core(MomentsError::from(err)))?;
    for file in &report.files {
        io::print_info(format!("  updated {}", file.display()));
    }
    io::print_success(format!(
        "Theme applied: {} declarations across {} files.",
        report.updated,
        report.files.len()
    ));
    Ok(())
}
