//! Inline date picker bound to one of the step-1 date fields.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};

use crate::calendar::{build_month, CalendarMonth, DateBounds};
use crate::dates::{format_display, parse_display, shift_months, shift_years};

/// Date inputs the picker can be opened for. Birth and passing constrain each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    Birth,
    Passing,
}

impl DateField {
    pub fn key(self) -> &'static str {
        match self {
            DateField::Birth => "dateBirth",
            DateField::Passing => "datePassing",
        }
    }

    pub fn sibling(self) -> DateField {
        match self {
            DateField::Birth => DateField::Passing,
            DateField::Passing => DateField::Birth,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "dateBirth" => Some(DateField::Birth),
            "datePassing" => Some(DateField::Passing),
            _ => None,
        }
    }
}

impl FromStr for DateField {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "birth" | "datebirth" | "date-birth" => Ok(DateField::Birth),
            "passing" | "datepassing" | "date-passing" => Ok(DateField::Passing),
            other => Err(format!("unknown date field `{other}` (use birth or passing)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarAction {
    PrevYear,
    NextYear,
    PrevMonth,
    NextMonth,
}

impl CalendarAction {
    pub fn as_str(self) -> &'static str {
        match self {
            CalendarAction::PrevYear => "prev-year",
            CalendarAction::NextYear => "next-year",
            CalendarAction::PrevMonth => "prev-month",
            CalendarAction::NextMonth => "next-month",
        }
    }
}

impl FromStr for CalendarAction {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "prev-year" => Ok(CalendarAction::PrevYear),
            "next-year" => Ok(CalendarAction::NextYear),
            "prev-month" => Ok(CalendarAction::PrevMonth),
            "next-month" => Ok(CalendarAction::NextMonth),
            other => Err(format!("unknown calendar action `{other}`")),
        }
    }
}

impl fmt::Display for CalendarAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value produced by confirming the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSelection {
    pub field: DateField,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PickerStatus {
    Closed,
    Open,
}

/// Transient picker state. Never persisted.
#[derive(Debug, Clone)]
pub struct DatePickerController {
    status: PickerStatus,
    focus: NaiveDate,
    selected: Option<NaiveDate>,
    target: Option<DateField>,
    bounds: DateBounds,
}

impl DatePickerController {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            status: PickerStatus::Closed,
            focus: today,
            selected: None,
            target: None,
            bounds: DateBounds::default(),
        }
    }

    /// Opens the picker for `target`. `target_value` and `sibling_value` are the
    /// current texts of the two date inputs. Bounds are fixed here and not
    /// revisited until the next open.
    pub fn open(
        &mut self,
        target: DateField,
        target_value: &str,
        sibling_value: &str,
        today: NaiveDate,
    ) {
        self.target = Some(target);
        self.bounds = DateBounds::default();
        let sibling = parse_display(sibling_value);
        match target {
            DateField::Passing => self.bounds.min = sibling,
            DateField::Birth => self.bounds.max = sibling,
        }

        match parse_display(target_value) {
            Some(existing) => {
                self.focus = existing;
                self.selected = Some(existing);
            }
            None => {
                self.focus = today;
                self.selected = None;
            }
        }
        self.status = PickerStatus::Open;
        tracing::debug!(field = target.key(), bounds = ?self.bounds, "date picker opened");
    }

    pub fn is_open(&self) -> bool {
        self.status == PickerStatus::Open
    }

    pub fn target(&self) -> Option<DateField> {
        self.target
    }

    pub fn focus(&self) -> NaiveDate {
        self.focus
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn bounds(&self) -> DateBounds {
        self.bounds
    }

    /// Moves the month/year cursor. Selection is untouched.
    pub fn navigate(&mut self, action: CalendarAction) -> bool {
        if !self.is_open() {
            return false;
        }
        self.focus = match action {
            CalendarAction::PrevYear => shift_years(self.focus, -1),
            CalendarAction::NextYear => shift_years(self.focus, 1),
            CalendarAction::PrevMonth => shift_months(self.focus, -1),
            CalendarAction::NextMonth => shift_months(self.focus, 1),
        };
        true
    }

    /// Selects `date` unless it lies outside the bounds. Does not close.
    pub fn select_day(&mut self, date: NaiveDate) -> bool {
        if !self.is_open() || !self.bounds.contains(date) {
            return false;
        }
        self.selected = Some(date);
        true
    }

    pub fn select_today(&mut self, today: NaiveDate) -> bool {
        if !self.is_open() {
            return false;
        }
        self.focus = today;
        self.selected = Some(today);
        true
    }

    /// Formats the selection for the target field and closes. `None` when
    /// nothing is selected, in which case the picker stays open.
    pub fn confirm(&mut self) -> Option<DateSelection> {
        if !self.is_open() {
            return None;
        }
        let selected = self.selected?;
        let field = self.target?;
        self.close();
        Some(DateSelection {
            field,
            value: format_display(selected),
        })
    }

    /// Hides the picker and clears bounds. Returns the field focus goes back to.
    pub fn close(&mut self) -> Option<DateField> {
        if !self.is_open() {
            return None;
        }
        self.status = PickerStatus::Closed;
        self.bounds = DateBounds::default();
        self.target
    }

    pub fn calendar(&self, today: NaiveDate) -> CalendarMonth {
        build_month(
            self.focus.year(),
            self.focus.month(),
            today,
            self.selected,
            &self.bounds,
        )
    }
}
