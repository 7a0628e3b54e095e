//! Poland public holidays.

use crate::calendar::HolidayCalendar;
use crate::date::Date;

use super::easter;

/// Poland calendar.
///
/// The following public holidays are observed:
/// * New Year's Day (Jan 1)
/// * Epiphany (Jan 6, since 2011)
/// * Easter Sunday and Easter Monday
/// * Labour Day (May 1)
/// * Constitution Day (May 3)
/// * Pentecost Sunday
/// * Corpus Christi
/// * Assumption of Mary (Aug 15)
/// * All Saints' Day (Nov 1)
/// * Independence Day (Nov 11)
/// * Christmas Eve (Dec 24, since 2025)
/// * Christmas Day (Dec 25)
/// * Second Day of Christmas (Dec 26)
#[derive(Debug, Clone, Copy, Default)]
pub struct Poland;

impl HolidayCalendar for Poland {
    fn name(&self) -> &str {
        "Poland"
    }

    fn holiday_name(&self, date: Date) -> Option<&str> {
        let y = date.year();
        let fixed = match (date.month(), date.day_of_month()) {
            (1, 1) => Some("New Year's Day"),
            (1, 6) if y >= 2011 => Some("Epiphany"),
            (5, 1) => Some("Labour Day"),
            (5, 3) => Some("Constitution Day"),
            (8, 15) => Some("Assumption of Mary"),
            (11, 1) => Some("All Saints' Day"),
            (11, 11) => Some("Independence Day"),
            (12, 24) if y >= 2025 => Some("Christmas Eve"),
            (12, 25) => Some("Christmas Day"),
            (12, 26) => Some("Second Day of Christmas"),
            _ => None,
        };
        fixed.or(match easter::offset(date) {
            -1 => Some("Easter Sunday"),
            0 => Some("Easter Monday"),
            48 => Some("Pentecost"),
            59 => Some("Corpus Christi"),
            _ => None,
        })
    }
}
