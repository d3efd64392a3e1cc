//! Source of "today" for the default readings window.

use chrono::{Local, NaiveDate};

/// Supplies the current calendar date.
///
/// [`crate::RecordSearch`] derives its default `max_date` (today) and
/// `min_date` (six months back) from this, so tests can pin the date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// The local system date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock that always reports the same date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ea_record_search::{Clock, FixedClock};
///
/// let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
/// assert_eq!(clock.today().to_string(), "2024-03-15");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
