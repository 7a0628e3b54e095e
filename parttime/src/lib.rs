//! # parttime
//!
//! Counts the work days of a month for a country and derives the number of
//! "commitment" days a percentage of them amounts to.
//!
//! ```
//! use parttime::{calc_commitment, WorkdayCalculator};
//! use parttime_time::{Country, Date};
//!
//! let calc = WorkdayCalculator::for_country(Country::CzechRepublic);
//! let workdays = calc.compute_workdays(Date::from_ymd(2024, 2, 1).unwrap());
//! assert_eq!(workdays.len(), 21);
//! assert_eq!(calc_commitment(workdays.len(), 20.0), 5.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Command-line interface and run entry point.
pub mod cli;

/// Commitment arithmetic.
pub mod commitment;

/// Tracing subscriber setup.
pub mod logging;

/// The report printed by the CLI.
pub mod report;

/// Month work-day calculator.
pub mod workdays;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use cli::{run, Cli};
pub use commitment::calc_commitment;
pub use report::WorkdayReport;
pub use workdays::{compute_workdays, WorkdayCalculator};
