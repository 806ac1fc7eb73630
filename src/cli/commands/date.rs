use std::str::FromStr;

use moments_core::{CalendarAction, DateField, FormCommand, FormEvent};

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;

const USAGE: &str = "date [open <birth|passing>|prev-month|next-month|prev-year|next-year\
                     |day <n>|today|confirm|close]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "date",
        "Pick the dates of birth and passing from a calendar",
        USAGE,
        cmd_date,
    )]
}

fn cmd_date(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(action) = args.first() else {
        return Err(CommandError::usage(USAGE));
    };
    let action = action.to_lowercase();

    let command = match action.as_str() {
        "open" => {
            let raw = args
                .get(1)
                .ok_or_else(|| CommandError::usage("date open <birth|passing>"))?;
            let field = DateField::from_str(raw).map_err(CommandError::InvalidArguments)?;
            FormCommand::OpenDatePicker(field)
        }
        "day" => {
            let day = args
                .get(1)
                .and_then(|value| value.parse::<u32>().ok())
                .ok_or_else(|| CommandError::usage("date day <n>"))?;
            let Some(calendar) = context.controller.calendar() else {
                io::print_warning("Open the calendar first with `date open <birth|passing>`.");
                return Ok(());
            };
            let cell = calendar.current_month_day(day).ok_or_else(|| {
                CommandError::InvalidArguments(format!("{} has no day {day}", calendar.title()))
            })?;
            FormCommand::SelectDay(cell.date)
        }
        "today" => FormCommand::SelectToday,
        "confirm" => FormCommand::ConfirmDate,
        "close" => FormCommand::CloseDatePicker,
        other => match CalendarAction::from_str(other) {
            Ok(step) => FormCommand::NavigateCalendar(step),
            Err(_) => {
                return Err(CommandError::InvalidArguments(format!(
                    "unknown date action `{other}`; usage: {USAGE}"
                )))
            }
        },
    };

    if let FormEvent::Ignored = context.run_form(command)? {
        report_ignored(context, &action);
    }
    Ok(())
}

fn report_ignored(context: &ShellContext, action: &str) {
    if context.controller.current_step() != 1 {
        io::print_warning("Dates are picked on step 1.");
    } else if !context.controller.date_picker().is_open() {
        io::print_warning("Open the calendar first with `date open <birth|passing>`.");
    } else if action == "confirm" {
        io::print_warning("Select a day before confirming.");
    } else {
        io::print_warning("That day is outside the allowed range.");
    }
}
