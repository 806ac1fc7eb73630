use moments_core::{FormCommand, FormEvent};

use super::parse_position;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;

const USAGE: &str = "rel [add|remove <n>|name <n> <text>|deceased <n>|type <n>\
                     |search <text>|pick <n>|close]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "rel",
        "Edit the relationships listed on step 3",
        USAGE,
        cmd_rel,
    )]
}

fn cmd_rel(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(action) = args.first() else {
        return Err(CommandError::usage(USAGE));
    };

    let command = match action.to_lowercase().as_str() {
        "add" => FormCommand::AddRelationship,
        "remove" => FormCommand::RemoveRelationship(parse_position(args.get(1), "rel remove <n>")?),
        "name" => {
            let index = parse_position(args.get(1), "rel name <n> <text>")?;
            FormCommand::SetRelationshipName(index, args[2..].join(" "))
        }
        "deceased" => FormCommand::ToggleDeceased(parse_position(args.get(1), "rel deceased <n>")?),
        "type" => FormCommand::OpenTypePicker(parse_position(args.get(1), "rel type <n>")?),
        "search" => FormCommand::SearchTypePicker(args[1..].join(" ")),
        "pick" => {
            let number = parse_position(args.get(1), "rel pick <n>")? + 1;
            let Some(view) = context.controller.type_picker_view() else {
                io::print_warning("Open a picker first with `rel type <n>`.");
                return Ok(());
            };
            let option = view.option(number).ok_or_else(|| {
                CommandError::InvalidArguments(format!("no option numbered {number}"))
            })?;
            FormCommand::ChooseRelationshipType(option)
        }
        "close" => FormCommand::CloseTypePicker,
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown rel action `{other}`; usage: {USAGE}"
            )))
        }
    };

    if let FormEvent::Ignored = context.run_form(command)? {
        report_ignored(context);
    }
    Ok(())
}

fn report_ignored(context: &ShellContext) {
    let step = context.controller.current_step();
    if step != 3 {
        io::print_warning("Relationships are edited on step 3.");
        return;
    }
    let rows = context.controller.state().data.step3.relationships.len();
    io::print_warning(format!(
        "Nothing changed. Rows are numbered 1 to {rows}; `rel pick` needs an open picker."
    ));
}
