//! Month work-day calculator.
//!
//! A work day is a Monday–Friday that is not in the holiday set of the
//! configured country.

use parttime_time::{Country, Date, HolidayCalendar, MonthRange};
use tracing::debug;

/// Return the work days of the month containing `start`, in date order.
///
/// Only the year and month of `start` matter.
pub fn compute_workdays(start: Date, calendar: &dyn HolidayCalendar) -> Vec<Date> {
    let range = MonthRange::containing(start);
    debug!(
        first = %range.first(),
        last = %range.last(),
        calendar = calendar.name(),
        "enumerating month"
    );

    let workdays: Vec<Date> = range
        .days()
        .filter(|d| d.weekday().iso_index() < 5)
        .filter(|d| match calendar.holiday_name(*d) {
            Some(holiday) => {
                debug!(date = %d, holiday, "skipping holiday");
                false
            }
            None => true,
        })
        .collect();

    debug!(month = %range, count = workdays.len(), "counted workdays");
    workdays
}

/// Work-day calculator bound to one holiday calendar.
#[derive(Debug)]
pub struct WorkdayCalculator {
    calendar: Box<dyn HolidayCalendar>,
}

impl WorkdayCalculator {
    /// Create a calculator over an arbitrary holiday source.
    pub fn new(calendar: Box<dyn HolidayCalendar>) -> Self {
        Self { calendar }
    }

    /// Create a calculator over the built-in calendar of `country`.
    pub fn for_country(country: Country) -> Self {
        Self::new(country.calendar())
    }

    /// The holiday calendar in use.
    pub fn calendar(&self) -> &dyn HolidayCalendar {
        self.calendar.as_ref()
    }

    /// Work days of the month containing `start`.
    pub fn compute_workdays(&self, start: Date) -> Vec<Date> {
        compute_workdays(start, self.calendar())
    }

    /// Holidays of the month containing `start` that fall on Monday–Friday,
    /// i.e. the days [`compute_workdays`](Self::compute_workdays) removed
    /// on top of weekends.
    pub fn weekday_holidays(&self, start: Date) -> Vec<(Date, String)> {
        let range = MonthRange::containing(start);
        self.calendar
            .holidays_between(range.first(), range.last())
            .into_iter()
            .filter(|(d, _)| d.weekday().is_weekday())
            .map(|(d, name)| (d, name.to_owned()))
            .collect()
    }
}
