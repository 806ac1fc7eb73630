pub mod commands;
mod core;
pub mod io;
pub mod output;
pub mod registry;
mod shell;
pub mod shell_context;
pub mod system_clock;
pub mod views;

pub use self::core::{CommandError, CommandResult};
pub use shell::run_cli;
pub use shell_context::{CliMode, ShellContext};
