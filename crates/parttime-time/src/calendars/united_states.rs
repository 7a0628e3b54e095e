//! United States federal holidays.

use crate::calendar::HolidayCalendar;
use crate::date::Date;
use crate::weekday::Weekday;

use super::{is_last_weekday_of_month, week_of_month};

/// United States calendar (federal holidays).
///
/// Fixed-date holidays falling on a Saturday are observed on the preceding
/// Friday, those falling on a Sunday on the following Monday.
///
/// * New Year's Day (Jan 1)
/// * Martin Luther King Jr. Day (3rd Mon in Jan, since 1986)
/// * Washington's Birthday (3rd Mon in Feb)
/// * Memorial Day (last Mon in May)
/// * Juneteenth (Jun 19, since 2021)
/// * Independence Day (Jul 4)
/// * Labor Day (1st Mon in Sep)
/// * Columbus Day (2nd Mon in Oct)
/// * Veterans Day (Nov 11)
/// * Thanksgiving Day (4th Thu in Nov)
/// * Christmas Day (Dec 25)
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitedStates;

impl HolidayCalendar for UnitedStates {
    fn name(&self) -> &str {
        "United States"
    }

    fn holiday_name(&self, date: Date) -> Option<&str> {
        let w = date.weekday();
        let y = date.year();
        let m = date.month();
        let d = date.day_of_month();

        if let Some((name, _)) = fixed_holiday(y, m, d) {
            return Some(name);
        }
        // A fixed holiday on Saturday is observed on Friday, on Sunday on Monday
        let neighbour = match w {
            Weekday::Friday => date.succ(),
            Weekday::Monday => date.add_days(-1).ok(),
            _ => None,
        };
        if let Some((_, observed)) =
            neighbour.and_then(|n| fixed_holiday(n.year(), n.month(), n.day_of_month()))
        {
            return Some(observed);
        }

        let nth = week_of_month(date);
        match (m, w) {
            (1, Weekday::Monday) if nth == 3 && y >= 1986 => Some("Martin Luther King Jr. Day"),
            (2, Weekday::Monday) if nth == 3 => Some("Washington's Birthday"),
            (5, Weekday::Monday) if is_last_weekday_of_month(date) => Some("Memorial Day"),
            (9, Weekday::Monday) if nth == 1 => Some("Labor Day"),
            (10, Weekday::Monday) if nth == 2 => Some("Columbus Day"),
            (11, Weekday::Thursday) if nth == 4 => Some("Thanksgiving Day"),
            _ => None,
        }
    }
}

/// Fixed-date holiday on `m`/`d` as `(name, observed name)`.
fn fixed_holiday(y: u16, m: u8, d: u8) -> Option<(&'static str, &'static str)> {
    match (m, d) {
        (1, 1) => Some(("New Year's Day", "New Year's Day (observed)")),
        (6, 19) if y >= 2021 => Some((
            "Juneteenth National Independence Day",
            "Juneteenth National Independence Day (observed)",
        )),
        (7, 4) => Some(("Independence Day", "Independence Day (observed)")),
        (11, 11) => Some(("Veterans Day", "Veterans Day (observed)")),
        (12, 25) => Some(("Christmas Day", "Christmas Day (observed)")),
        _ => None,
    }
}
