//! Six-week month grids for the date picker.

use chrono::{Datelike, Days, NaiveDate};

/// Every grid holds six full weeks.
pub const GRID_CELLS: usize = 42;

pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthPosition {
    Previous,
    Current,
    Next,
}

/// Optional inclusive limits on selectable days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateBounds {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl DateBounds {
    pub fn contains(&self, date: NaiveDate) -> bool {
        let above_min = self.min.map(|min| date >= min).unwrap_or(true);
        let below_max = self.max.map(|max| date <= max).unwrap_or(true);
        above_min && below_max
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub position: MonthPosition,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_disabled: bool,
}

impl DayCell {
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn is_other_month(&self) -> bool {
        self.position != MonthPosition::Current
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<DayCell>,
}

impl CalendarMonth {
    /// Heading such as `January 2024`.
    pub fn title(&self) -> String {
        let name = MONTH_NAMES
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("?");
        format!("{} {}", name, self.year)
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> + '_ {
        self.cells.chunks(7)
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.date == date)
    }

    /// Cell for `day` of the focused month.
    pub fn current_month_day(&self, day: u32) -> Option<&DayCell> {
        self.cells
            .iter()
            .find(|cell| cell.position == MonthPosition::Current && cell.day() == day)
    }
}

/// Builds the grid for `month` of `year`. Weeks start on Sunday: leading cells
/// are the trailing days of the previous month, trailing cells the first days
/// of the next one.
pub fn build_month(
    year: i32,
    month: u32,
    today: NaiveDate,
    selected: Option<NaiveDate>,
    bounds: &DateBounds,
) -> CalendarMonth {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return CalendarMonth {
            year,
            month,
            cells: Vec::new(),
        };
    };
    let leading = first.weekday().num_days_from_sunday() as u64;

    // Grids at the edge of the representable range come back empty.
    let cells = first
        .checked_sub_days(Days::new(leading))
        .and_then(|grid_start| {
            (0..GRID_CELLS as u64)
                .map(|offset| grid_start.checked_add_days(Days::new(offset)))
                .collect::<Option<Vec<NaiveDate>>>()
        })
        .unwrap_or_default()
        .into_iter()
        .map(|date| DayCell {
            date,
            position: position_of(date, year, month),
            is_today: date == today,
            is_selected: selected == Some(date),
            is_disabled: !bounds.contains(date),
        })
        .collect();

    CalendarMonth { year, month, cells }
}

fn position_of(date: NaiveDate, year: i32, month: u32) -> MonthPosition {
    match (date.year(), date.month()).cmp(&(year, month)) {
        std::cmp::Ordering::Less => MonthPosition::Previous,
        std::cmp::Ordering::Equal => MonthPosition::Current,
        std::cmp::Ordering::Greater => MonthPosition::Next,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn count(month: &CalendarMonth, position: MonthPosition) -> usize {
        month
            .cells
            .iter()
            .filter(|cell| cell.position == position)
            .count()
    }

    #[test]
    fn february_starting_on_sunday_has_42_cells() {
        // February 2015: 28 days, the 1st is a Sunday.
        let grid = build_month(2015, 2, date(2000, 1, 1), None, &DateBounds::default());
        assert_eq!(grid.cells.len(), GRID_CELLS);
        assert_eq!(count(&grid, MonthPosition::Previous), 0);
        assert_eq!(count(&grid, MonthPosition::Current), 28);
        assert_eq!(count(&grid, MonthPosition::Next), 14);
        assert_eq!(grid.cells[0].date, date(2015, 2, 1));
    }

    #[test]
    fn long_month_starting_on_saturday_has_42_cells() {
        // August 2020: 31 days, the 1st is a Saturday.
        let grid = build_month(2020, 8, date(2000, 1, 1), None, &DateBounds::default());
        assert_eq!(grid.cells.len(), GRID_CELLS);
        assert_eq!(count(&grid, MonthPosition::Previous), 6);
        assert_eq!(count(&grid, MonthPosition::Current), 31);
        assert_eq!(count(&grid, MonthPosition::Next), 5);
        assert_eq!(grid.cells[0].date, date(2020, 7, 26));
        assert_eq!(grid.cells[41].date, date(2020, 9, 5));
    }

    #[test]
    fn every_month_of_a_decade_has_42_cells() {
        for year in 2020..2030 {
            for month in 1..=12 {
                let grid = build_month(year, month, date(2000, 1, 1), None, &DateBounds::default());
                assert_eq!(grid.cells.len(), GRID_CELLS, "{}", grid.title());
            }
        }
    }

    #[test]
    fn flags_today_selection_and_bounds() {
        let bounds = DateBounds {
            min: Some(date(2024, 5, 10)),
            max: Some(date(2024, 5, 20)),
        };
        let grid = build_month(
            2024,
            5,
            date(2024, 5, 15),
            Some(date(2024, 5, 12)),
            &bounds,
        );
        let today = grid.current_month_day(15).unwrap();
        assert!(today.is_today && !today.is_disabled);
        assert!(grid.current_month_day(12).unwrap().is_selected);
        assert!(grid.current_month_day(9).unwrap().is_disabled);
        assert!(!grid.current_month_day(10).unwrap().is_disabled);
        assert!(!grid.current_month_day(20).unwrap().is_disabled);
        assert!(grid.current_month_day(21).unwrap().is_disabled);
        assert_eq!(grid.title(), "May 2024");
    }

    #[test]
    fn spillover_days_spanning_a_year_boundary() {
        let grid = build_month(2025, 1, date(2000, 1, 1), None, &DateBounds::default());
        let first = grid.cells[0];
        assert_eq!(first.position, MonthPosition::Previous);
        assert_eq!(first.date, date(2024, 12, 29));
        assert!(first.is_other_month());
        assert_eq!(grid.weeks().count(), 6);
    }

    #[test]
    fn grid_past_the_last_representable_date_is_empty() {
        let last = NaiveDate::MAX;
        let grid = build_month(
            last.year(),
            last.month(),
            date(2000, 1, 1),
            None,
            &DateBounds::default(),
        );
        assert!(grid.cells.is_empty());
        assert_eq!(grid.weeks().count(), 0);
    }
}
