//! Germany nationwide public holidays.

use crate::calendar::HolidayCalendar;
use crate::date::Date;

use super::easter;

/// Germany calendar (holidays observed in every federal state).
///
/// * New Year's Day (Jan 1)
/// * Good Friday
/// * Easter Monday
/// * Labour Day (May 1)
/// * Ascension Day
/// * Whit Monday
/// * German Unity Day (Oct 3, since 1990)
/// * Reformation Day (Oct 31, 2017 only)
/// * Christmas Day (Dec 25)
/// * Second Day of Christmas (Dec 26)
///
/// Christmas Eve and New Year's Eve are bank closing days, not public
/// holidays, and are not part of this set.
#[derive(Debug, Clone, Copy, Default)]
pub struct Germany;

impl HolidayCalendar for Germany {
    fn name(&self) -> &str {
        "Germany"
    }

    fn holiday_name(&self, date: Date) -> Option<&str> {
        let y = date.year();
        let fixed = match (date.month(), date.day_of_month()) {
            (1, 1) => Some("New Year's Day"),
            (5, 1) => Some("Labour Day"),
            (10, 3) if y >= 1990 => Some("German Unity Day"),
            (10, 31) if y == 2017 => Some("Reformation Day"),
            (12, 25) => Some("Christmas Day"),
            (12, 26) => Some("Second Day of Christmas"),
            _ => None,
        };
        fixed.or(match easter::offset(date) {
            -3 => Some("Good Friday"),
            0 => Some("Easter Monday"),
            38 => Some("Ascension Day"),
            49 => Some("Whit Monday"),
            _ => None,
        })
    }
}
