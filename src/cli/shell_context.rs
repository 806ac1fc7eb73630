//! Shared runtime state for CLI interactions and command execution.

use std::{path::PathBuf, sync::Arc};

use dialoguer::theme::ColorfulTheme;
use moments_config::{Config, ConfigManager};
use moments_core::{Clock, IntakeController};

use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub controller: IntakeController,
    pub theme: ColorfulTheme,
    pub clock: Arc<dyn Clock>,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub base_dir: PathBuf,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn status(&self) -> String {
        format!(
            "ShellContext {{ running: {}, last_command: {:?}, step: {} }}",
            self.running,
            self.last_command,
            self.controller.current_step()
        )
    }
}
