//! # parttime-time
//!
//! Date, month range, and holiday calendar types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalendar` trait and generic implementations.
pub mod calendar;

/// Country calendars and the country-code registry.
pub mod calendars;

/// `Date` type.
pub mod date;

/// `Month`: month of the year.
pub mod month;

/// `MonthRange`: all days of one calendar month.
pub mod month_range;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{HolidayCalendar, HolidaySet, WeekendsOnly};
pub use calendars::{country_calendar, Country};
pub use date::Date;
pub use month::Month;
pub use month_range::{Days, MonthRange};
pub use weekday::Weekday;
