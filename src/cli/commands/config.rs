use moments_config::Config;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and manage CLI preferences",
        "config [show|set <key> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        show_config(context);
        return Ok(());
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 2 {
                return Err(CommandError::InvalidArguments(format!(
                    "usage: config set <{}> <value>",
                    Config::KEYS.join("|")
                )));
            }
            let key = args[1];
            let value = args[2..].join(" ");
            context
                .config
                .set(key, &value)
                .map_err(|err| CommandError::Core(err.into()))?;
            context.persist_config()?;
            io::print_success(format!("Updated `{key}`."));
            if key == "resume_session" || key == "session_dir" {
                io::print_hint("Takes effect the next time the shell starts.");
            }
            Ok(())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{other}`"
        ))),
    }
}

fn show_config(context: &ShellContext) {
    output_section("Configuration");
    for (key, value) in context.config.entries() {
        io::print_info(format!("  {key:<28} {value}"));
    }
    io::print_info(format!(
        "  {:<28} {}",
        "file",
        context.config_manager.config_path().display()
    ));
    io::print_info(format!(
        "  {:<28} {}",
        "session",
        context.config.resolve_session_dir(&context.base_dir).display()
    ));
}
