//! Terminal rendering of the form's view models.

use moments_core::calendar::{CalendarMonth, DayCell, WEEKDAY_LABELS};
use moments_core::dates::format_display;
use moments_core::render::{
    FieldView, HeadingIcon, ProgressIndicator, RelationshipRowView, StepBody, StepView,
    TraitChipView,
};
use moments_core::{DatePickerController, FieldKind, TypePickerView};
use moments_domain::Relationship;

use crate::cli::io as cli_io;
use crate::cli::output::{self, current_preferences};

const PROGRESS_WIDTH: usize = 28;

/// Progress bar width scaled to the terminal, capped for wide windows.
fn progress_width() -> usize {
    crossterm::terminal::size()
        .map(|(columns, _)| (usize::from(columns) / 3).clamp(10, 40))
        .unwrap_or(PROGRESS_WIDTH)
}

fn plain_icons() -> bool {
    let prefs = current_preferences();
    prefs.plain_icons || prefs.screen_reader_mode
}

fn heading_glyph(icon: HeadingIcon) -> &'static str {
    match icon {
        HeadingIcon::Heart => "♥",
        HeadingIcon::Star => "★",
        HeadingIcon::Users => "👥",
    }
}

pub fn progress_line(progress: &ProgressIndicator, width: usize) -> String {
    let filled = ((progress.percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!(
        "[{}{}] {}% {}",
        "#".repeat(filled),
        "-".repeat(width - filled),
        progress.value_now,
        progress.label
    )
}

pub fn field_line(field: &FieldView) -> String {
    let marker = if field.descriptor.required { "*" } else { " " };
    let value = if field.value.is_empty() {
        field
            .descriptor
            .placeholder
            .map(|hint| format!("<{hint}>"))
            .unwrap_or_default()
    } else {
        field.value.clone()
    };
    let kind = match field.descriptor.kind {
        FieldKind::Date => " (date picker)".to_string(),
        FieldKind::Choice(options) => {
            let tokens: Vec<&str> = options.iter().map(|(token, _)| *token).collect();
            format!(" ({})", tokens.join("/"))
        }
        FieldKind::Text | FieldKind::TextArea => String::new(),
    };
    let invalid = if field.invalid { "  <- required" } else { "" };
    format!(
        "{marker} {:<16} {}{}: {}{}",
        field.descriptor.key, field.descriptor.label, kind, value, invalid
    )
}

pub fn trait_chip_line(number: usize, chip: &TraitChipView) -> String {
    let state = if chip.selected {
        "[x]"
    } else if chip.disabled {
        "[-]"
    } else {
        "[ ]"
    };
    if plain_icons() {
        format!("{number:>2}. {state} {}", chip.label)
    } else {
        format!("{number:>2}. {state} {} {}", chip.emoji, chip.label)
    }
}

pub fn relationship_line(row: &RelationshipRowView) -> String {
    let name = if row.name.is_empty() {
        "(no name)"
    } else {
        row.name.as_str()
    };
    let deceased = if row.deceased { "  [deceased]" } else { "" };
    format!("{:>2}. {:<24} {}{}", row.index + 1, name, row.type_label, deceased)
}

pub fn calendar_cell(cell: &DayCell) -> String {
    if cell.is_other_month() {
        return "  · ".to_string();
    }
    if cell.is_disabled {
        return " -- ".to_string();
    }
    if cell.is_selected {
        format!("[{:>2}]", cell.day())
    } else if cell.is_today {
        format!("({:>2})", cell.day())
    } else {
        format!(" {:>2} ", cell.day())
    }
}

pub fn print_step(view: &StepView) {
    let heading = &view.heading;
    let title = match heading.icon {
        Some(icon) if !plain_icons() => format!("{} {}", heading_glyph(icon), heading.title),
        _ => heading.title.clone(),
    };
    output::section(&heading.kicker);
    cli_io::print_info(title);
    cli_io::print_info(&heading.description);
    println!();

    match &view.body {
        StepBody::PersonalDetails { fields } => print_fields(fields),
        StepBody::Personality { traits, fields } => {
            cli_io::print_info("What were they like? (pick up to 5, `trait <label>`)");
            print_trait_chips(traits);
            println!();
            print_fields(fields);
        }
        StepBody::Relationships { rows, fields } => {
            cli_io::print_info("Relationships (`rel ...`):");
            for row in rows {
                cli_io::print_info(relationship_line(row));
            }
            println!();
            print_fields(fields);
        }
        StepBody::NotImplemented { step } => {
            cli_io::print_info(format!(
                "Step {step} is not available yet. Use `next` to continue."
            ));
        }
    }

    println!();
    cli_io::print_info(progress_line(&view.chrome.progress, progress_width()));
    if view.chrome.back_visible {
        cli_io::print_hint("`back` returns to the previous step.");
    }
}

fn print_fields(fields: &[FieldView]) {
    for field in fields {
        cli_io::print_info(field_line(field));
    }
}

pub fn print_trait_chips(chips: &[TraitChipView]) {
    for (position, chip) in chips.iter().enumerate() {
        cli_io::print_info(trait_chip_line(position + 1, chip));
    }
}

pub fn print_relationship_row(index: usize, entry: &Relationship) {
    cli_io::print_success(relationship_line(&RelationshipRowView::from_entry(index, entry)));
}

pub fn print_type_picker(view: &TypePickerView) {
    output::section(format!("Relationship for row {}", view.index + 1));
    if !view.query.is_empty() {
        cli_io::print_info(format!("Search: {}", view.query));
    }
    let mut number = 0;
    for group in &view.groups {
        cli_io::print_info(group.title);
        for entry in &group.entries {
            number += 1;
            let label = if plain_icons() {
                entry.label.clone()
            } else {
                entry.display_label()
            };
            cli_io::print_info(format!("  {number:>2}. {label}"));
        }
    }
    if let Some(custom) = &view.custom {
        number += 1;
        cli_io::print_info(format!("  {number:>2}. Add: {custom}"));
    }
    if number == 0 {
        cli_io::print_warning("No matches.");
    } else {
        cli_io::print_hint("`rel pick <number>` to choose.");
    }
}

pub fn print_calendar(month: &CalendarMonth, picker: &DatePickerController) {
    output::section(month.title());
    let header: Vec<String> = WEEKDAY_LABELS
        .iter()
        .map(|label| format!(" {label:>2} "))
        .collect();
    cli_io::print_info(header.join(""));
    for week in month.weeks() {
        let line: Vec<String> = week.iter().map(calendar_cell).collect();
        cli_io::print_info(line.join(""));
    }
    let bounds = picker.bounds();
    if let Some(min) = bounds.min {
        cli_io::print_hint(format!("Earliest: {}", format_display(min)));
    }
    if let Some(max) = bounds.max {
        cli_io::print_hint(format!("Latest: {}", format_display(max)));
    }
    match picker.selected() {
        Some(date) => cli_io::print_info(format!("Selected: {}", format_display(date))),
        None => cli_io::print_info("Selected: none"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use moments_core::calendar::MonthPosition;
    use moments_core::fields::step_fields;

    fn cell(day: u32, position: MonthPosition) -> DayCell {
        DayCell {
            date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            position,
            is_today: false,
            is_selected: false,
            is_disabled: false,
        }
    }

    #[test]
    fn calendar_cells_mark_state() {
        let mut selected = cell(5, MonthPosition::Current);
        selected.is_selected = true;
        assert_eq!(calendar_cell(&selected), "[ 5]");

        let mut disabled = cell(6, MonthPosition::Current);
        disabled.is_disabled = true;
        assert_eq!(calendar_cell(&disabled), " -- ");

        assert_eq!(calendar_cell(&cell(30, MonthPosition::Previous)), "  · ");
        assert_eq!(calendar_cell(&cell(12, MonthPosition::Current)), " 12 ");
    }

    #[test]
    fn progress_line_shows_accessible_value() {
        insta::assert_snapshot!(
            progress_line(&ProgressIndicator::for_step(1), PROGRESS_WIDTH),
            @"[####------------------------] 14.29% Step 1 of 7"
        );
        insta::assert_snapshot!(
            progress_line(&ProgressIndicator::for_step(7), 10),
            @"[##########] 100.00% Step 7 of 7"
        );
    }

    #[test]
    fn invalid_required_fields_are_flagged() {
        let field = FieldView {
            descriptor: step_fields(1)[0],
            value: String::new(),
            invalid: true,
        };
        let line = field_line(&field);
        assert!(line.starts_with('*'));
        assert!(line.contains("<- required"));
        assert!(line.contains("<e.g, John Arthur Doe>"));
    }
}
