//! Austria public holidays.

use crate::calendar::HolidayCalendar;
use crate::date::Date;

use super::easter;

/// Austria calendar.
///
/// The following public holidays are observed:
/// * New Year's Day (Jan 1)
/// * Epiphany (Jan 6)
/// * Easter Monday
/// * Labour Day (May 1)
/// * Ascension Day
/// * Whit Monday
/// * Corpus Christi
/// * Assumption of Mary (Aug 15)
/// * National Day (Oct 26)
/// * All Saints' Day (Nov 1)
/// * Immaculate Conception (Dec 8)
/// * Christmas Day (Dec 25)
/// * St. Stephen's Day (Dec 26)
#[derive(Debug, Clone, Copy, Default)]
pub struct Austria;

impl HolidayCalendar for Austria {
    fn name(&self) -> &str {
        "Austria"
    }

    fn holiday_name(&self, date: Date) -> Option<&str> {
        let fixed = match (date.month(), date.day_of_month()) {
            (1, 1) => Some("New Year's Day"),
            (1, 6) => Some("Epiphany"),
            (5, 1) => Some("Labour Day"),
            (8, 15) => Some("Assumption Day"),
            (10, 26) => Some("National Day"),
            (11, 1) => Some("All Saints' Day"),
            (12, 8) => Some("Immaculate Conception"),
            (12, 25) => Some("Christmas Day"),
            (12, 26) => Some("St. Stephen's Day"),
            _ => None,
        };
        fixed.or(match easter::offset(date) {
            0 => Some("Easter Monday"),
            38 => Some("Ascension Day"),
            49 => Some("Whit Monday"),
            59 => Some("Corpus Christi"),
            _ => None,
        })
    }
}
