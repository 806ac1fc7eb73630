use chrono::{DateTime, Local, NaiveDate, Utc};

use moments_core::Clock;

/// Real-time clock. "Today" follows the local calendar, like the form's date picker.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
