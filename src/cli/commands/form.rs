use moments_core::fields::find_field;
use moments_core::{FieldKind, FormCommand, FormEvent};
use moments_domain::MAX_SELECTED_TRAITS;

use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::views;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("show", "Show the current step", "show", cmd_show),
        CommandEntry::new(
            "next",
            "Validate this step and continue",
            "next",
            cmd_next,
        ),
        CommandEntry::new("back", "Return to the previous step", "back", cmd_back),
        CommandEntry::new(
            "set",
            "Fill in a field on the current step",
            "set <field> <value>",
            cmd_set,
        ),
        CommandEntry::new(
            "trait",
            "Select or deselect a personality trait",
            "trait <label>",
            cmd_trait,
        ),
        CommandEntry::new("data", "Print the collected data", "data", cmd_data),
        CommandEntry::new(
            "reset",
            "Discard the session and start over",
            "reset",
            cmd_reset,
        ),
    ]
}

fn cmd_show(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    views::print_step(&context.controller.render());
    Ok(())
}

fn cmd_next(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.run_form(FormCommand::Next)?;
    Ok(())
}

fn cmd_back(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if let FormEvent::Ignored = context.run_form(FormCommand::Back)? {
        io::print_info("Already at the first step.");
    }
    Ok(())
}

fn cmd_set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let usage = "set <field> <value>";
    let key = args.first().ok_or_else(|| CommandError::usage(usage))?;
    let value = args[1..].join(" ");
    let step = context.controller.current_step();

    let Some(field) = find_field(step, key) else {
        return Err(CommandError::InvalidArguments(format!(
            "step {step} has no field `{key}`"
        )));
    };

    let event = context.run_form(FormCommand::SetField {
        key: field.key.to_string(),
        value,
    })?;
    if let FormEvent::Ignored = event {
        match field.kind {
            FieldKind::Date => io::print_warning(format!(
                "`{}` is picked from the calendar: `date open {}`.",
                field.key, field.key
            )),
            FieldKind::Choice(options) => {
                let tokens: Vec<&str> = options.iter().map(|(token, _)| *token).collect();
                io::print_warning(format!(
                    "`{}` must be one of: {}.",
                    field.key,
                    tokens.join(", ")
                ));
            }
            FieldKind::Text | FieldKind::TextArea => {
                io::print_warning(format!("`{}` was not updated.", field.key))
            }
        }
    }
    Ok(())
}

fn cmd_trait(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::usage("trait <label>"));
    }
    let label = args.join(" ");
    if let FormEvent::Ignored = context.run_form(FormCommand::ToggleTrait(label.clone()))? {
        let personality = &context.controller.state().data.step2;
        if context.controller.current_step() != 2 {
            io::print_warning("Traits are chosen on step 2.");
        } else if context.controller.catalog().find_trait(&label).is_none() {
            io::print_warning(format!("Unknown trait `{label}`."));
        } else if personality.is_full() {
            io::print_warning(format!(
                "You can select up to {MAX_SELECTED_TRAITS} traits."
            ));
        }
    }
    Ok(())
}

fn cmd_data(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let json = serde_json::to_string_pretty(context.controller.state())?;
    println!("{json}");
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.mode == CliMode::Interactive
        && !io::confirm_action(&context.theme, "Discard everything entered so far?", false)?
    {
        io::print_info("Operation cancelled.");
        return Ok(());
    }
    context.controller.reset();
    io::print_success("Session cleared.");
    views::print_step(&context.controller.render());
    Ok(())
}
