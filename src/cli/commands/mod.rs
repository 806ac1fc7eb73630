pub mod config;
pub mod date;
pub mod form;
pub mod relationship;
pub mod system;
pub mod theme;

use crate::cli::core::CommandError;
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(system::definitions());
    commands.extend(form::definitions());
    commands.extend(relationship::definitions());
    commands.extend(date::definitions());
    commands.extend(config::definitions());
    commands.extend(theme::definitions());
    commands
}

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in all_definitions() {
        registry.register(entry);
    }
}

/// Parses a 1-based row or option number into a 0-based index.
pub(crate) fn parse_position(raw: Option<&&str>, usage: &str) -> Result<usize, CommandError> {
    raw.and_then(|value| value.parse::<usize>().ok())
        .filter(|value| *value >= 1)
        .map(|value| value - 1)
        .ok_or_else(|| CommandError::usage(usage))
}
