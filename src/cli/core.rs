//! Shell context construction, dispatch, and form event reporting.

use std::{io, path::Path, sync::Arc};

use dialoguer::theme::ColorfulTheme;
use moments_config::{default_base_dir, ConfigManager};
use moments_core::{
    Clock, FormCommand, FormEvent, IntakeController, MemorySessionStore, SessionStore,
};
use moments_domain::Catalog;
use moments_storage_json::JsonSessionStore;
use thiserror::Error;
use tracing::{debug, warn};

use super::commands;
use super::io as cli_io;
use super::registry::{CommandEntry, CommandRegistry};
use super::system_clock::SystemClock;
use super::views;
pub use crate::errors::CliError;
use crate::errors::MomentsError;
pub use crate::cli::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] MomentsError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl CommandError {
    pub(crate) fn usage(usage: &str) -> Self {
        CommandError::InvalidArguments(format!("usage: {usage}"))
    }
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_clock(mode, Arc::new(SystemClock))
    }

    pub fn with_clock(mode: CliMode, clock: Arc<dyn Clock>) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let base_dir = default_base_dir();
        let config_manager = ConfigManager::with_base_dir(base_dir.clone())?;
        let config = config_manager.load()?;
        cli_io::apply_config(&config);

        let mut store = open_session_store(&config.resolve_session_dir(&base_dir));
        let catalog = Catalog::standard();
        let controller = if config.resume_session {
            IntakeController::restore(store, catalog, clock.clone())
        } else {
            if let Err(err) = store.clear() {
                warn!(error = %err, "failed to clear previous session");
            }
            IntakeController::fresh(store, catalog, clock.clone())
        };

        Ok(ShellContext {
            mode,
            registry,
            controller,
            theme: ColorfulTheme::default(),
            clock,
            config_manager,
            config,
            base_dir,
            last_command: None,
            running: true,
        })
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn prompt(&self) -> String {
        format!("moments [step {}]> ", self.controller.current_step())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(best) = self.registry.suggest(input) {
            cli_io::print_info(format!("Suggestion: `{}`?", best));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit shell?", true)
            .map_err(|err| CliError::Input(err.to_string()))
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(&message);
                cli_io::print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                cli_io::print_error(other.to_string());
                Ok(())
            }
        }
    }

    /// Sends `command` to the form and prints whatever the UI should refresh.
    pub(crate) fn run_form(&mut self, command: FormCommand) -> Result<FormEvent, CommandError> {
        let event = self.controller.dispatch(command);
        debug!(?event, "form event");
        match &event {
            FormEvent::StepRendered(_) => views::print_step(&self.controller.render()),
            FormEvent::TraitsUpdated => {
                views::print_trait_chips(&moments_core::render::trait_chips(
                    self.controller.state(),
                    self.controller.catalog(),
                ));
            }
            FormEvent::FieldUpdated(key) => {
                let draft = self.controller.machine().draft();
                cli_io::print_success(format!("{} = {}", key, draft.get(key)));
            }
            FormEvent::RelationshipUpdated(index) => {
                if let Some(entry) = self.controller.state().data.step3.relationships.get(*index) {
                    views::print_relationship_row(*index, entry);
                }
            }
            FormEvent::TypePickerUpdated => {
                if let Some(view) = self.controller.type_picker_view() {
                    views::print_type_picker(&view);
                }
            }
            FormEvent::TypePickerClosed => cli_io::print_info("Relationship picker closed."),
            FormEvent::DatePickerUpdated => {
                if let Some(calendar) = self.controller.calendar() {
                    views::print_calendar(&calendar, self.controller.date_picker());
                }
            }
            FormEvent::DatePickerClosed(field) => {
                cli_io::print_info(format!("Date picker closed; back to `{}`.", field.key()));
            }
            FormEvent::ValidationFailed(failure) => {
                cli_io::print_error(&failure.message);
                if !failure.invalid_fields.is_empty() {
                    cli_io::print_hint(format!("Check: {}", failure.invalid_fields.join(", ")));
                }
                if self.mode == CliMode::Interactive {
                    cli_io::acknowledge(&self.theme, "OK")?;
                }
            }
            FormEvent::Completed(submission) => {
                cli_io::print_success("All steps complete. Collected data:");
                println!("{}", serde_json::to_string_pretty(submission)?);
            }
            FormEvent::Ignored => {}
        }
        Ok(event)
    }

    pub(crate) fn persist_config(&mut self) -> CommandResult {
        self.config_manager
            .save(&self.config)
            .map_err(|err| CommandError::Core(err.into()))?;
        cli_io::apply_config(&self.config);
        Ok(())
    }
}

/// File-backed when possible; an unusable directory degrades to memory.
fn open_session_store(dir: &Path) -> Box<dyn SessionStore> {
    match JsonSessionStore::open(dir.to_path_buf()) {
        Ok(store) => Box::new(store),
        Err(err) => {
            warn!(
                dir = %dir.display(),
                error = %err,
                "session file unavailable, keeping it in memory"
            );
            Box::new(MemorySessionStore::new())
        }
    }
}
