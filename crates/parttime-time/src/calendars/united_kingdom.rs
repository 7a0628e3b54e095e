//! United Kingdom (England & Wales) bank holidays.

use crate::calendar::HolidayCalendar;
use crate::date::Date;
use crate::weekday::Weekday;

use super::{easter, is_last_weekday_of_month, week_of_month};

/// United Kingdom calendar, England & Wales bank holidays.
///
/// * New Year's Day (Jan 1; if Sat/Sun → next Mon)
/// * Good Friday
/// * Easter Monday
/// * Early May Bank Holiday (1st Mon in May, since 1978; moved to May 8 in 1995 and 2020)
/// * Spring Bank Holiday (last Mon in May, since 1971; moved in jubilee years)
/// * Summer Bank Holiday (last Mon in Aug, since 1971)
/// * Christmas Day and Boxing Day (Dec 25/26; substitute days when they fall on a weekend)
/// * One-off royal and millennium holidays
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitedKingdom;

impl HolidayCalendar for UnitedKingdom {
    fn name(&self) -> &str {
        "United Kingdom"
    }

    fn holiday_name(&self, date: Date) -> Option<&str> {
        let w = date.weekday();
        let y = date.year();
        let m = date.month();
        let d = date.day_of_month();

        if let Some(name) = one_off_holiday(y, m, d) {
            return Some(name);
        }
        match easter::offset(date) {
            -3 => return Some("Good Friday"),
            0 => return Some("Easter Monday"),
            _ => {}
        }
        let monday = w == Weekday::Monday;
        match (m, d) {
            (1, 1) => Some("New Year's Day"),
            (1, 2 | 3) if monday => Some("New Year's Day (substitute)"),
            (5, _) if monday && week_of_month(date) == 1 && y >= 1978 && !matches!(y, 1995 | 2020) => {
                Some("Early May Bank Holiday")
            }
            (5, _) if monday && is_last_weekday_of_month(date) && y >= 1971 && !matches!(y, 2002 | 2012 | 2022) => {
                Some("Spring Bank Holiday")
            }
            (8, _) if monday && is_last_weekday_of_month(date) && y >= 1971 => Some("Summer Bank Holiday"),
            (12, 25) => Some("Christmas Day"),
            (12, 26) => Some("Boxing Day"),
            (12, 27) if matches!(w, Weekday::Monday | Weekday::Tuesday) => Some("Christmas Day (substitute)"),
            (12, 28) if matches!(w, Weekday::Monday | Weekday::Tuesday) => Some("Boxing Day (substitute)"),
            _ => None,
        }
    }
}

fn one_off_holiday(y: u16, m: u8, d: u8) -> Option<&'static str> {
    match (y, m, d) {
        (1995, 5, 8) | (2020, 5, 8) => Some("Early May Bank Holiday"),
        (1999, 12, 31) => Some("Millennium Celebrations"),
        (2002, 6, 3) => Some("Golden Jubilee of Elizabeth II"),
        (2002, 6, 4) | (2012, 6, 4) | (2022, 6, 2) => Some("Spring Bank Holiday"),
        (2011, 4, 29) => Some("Wedding of William and Catherine"),
        (2012, 6, 5) => Some("Diamond Jubilee of Elizabeth II"),
        (2022, 6, 3) => Some("Platinum Jubilee of Elizabeth II"),
        (2022, 9, 19) => Some("State Funeral of Elizabeth II"),
        (2023, 5, 8) => Some("Coronation of Charles III"),
        _ => None,
    }
}
