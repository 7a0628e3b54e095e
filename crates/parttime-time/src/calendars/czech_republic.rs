//! Czech Republic public holidays.

use crate::calendar::HolidayCalendar;
use crate::date::Date;

use super::easter;

/// Czech Republic calendar.
///
/// The following public holidays are observed:
/// * Restoration Day of the Independent Czech State / New Year's Day (Jan 1)
/// * Good Friday (since 2016)
/// * Easter Monday
/// * Labour Day (May 1)
/// * Victory Day (May 8)
/// * Saints Cyril & Methodius Day (Jul 5)
/// * Jan Hus Day (Jul 6)
/// * Czech Statehood Day (Sep 28, since 2000)
/// * Independence Day (Oct 28)
/// * Struggle for Freedom and Democracy Day (Nov 17, since 2000)
/// * Christmas Eve (Dec 24)
/// * Christmas Day (Dec 25)
/// * St. Stephen's Day (Dec 26)
#[derive(Debug, Clone, Copy, Default)]
pub struct CzechRepublic;

impl HolidayCalendar for CzechRepublic {
    fn name(&self) -> &str {
        "Czech Republic"
    }

    fn holiday_name(&self, date: Date) -> Option<&str> {
        let y = date.year();
        let fixed = match (date.month(), date.day_of_month()) {
            (1, 1) => Some("New Year's Day"),
            (5, 1) => Some("Labour Day"),
            (5, 8) => Some("Victory Day"),
            (7, 5) => Some("Saints Cyril and Methodius Day"),
            (7, 6) => Some("Jan Hus Day"),
            (9, 28) if y >= 2000 => Some("Czech Statehood Day"),
            (10, 28) => Some("Independence Day"),
            (11, 17) if y >= 2000 => Some("Struggle for Freedom and Democracy Day"),
            (12, 24) => Some("Christmas Eve"),
            (12, 25) => Some("Christmas Day"),
            (12, 26) => Some("St. Stephen's Day"),
            _ => None,
        };
        fixed.or(match easter::offset(date) {
            -3 if y >= 2016 => Some("Good Friday"),
            0 => Some("Easter Monday"),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn new_years_day() {
        let cal = CzechRepublic;
        assert_eq!(cal.holiday_name(date(2023, 1, 1)), Some("New Year's Day"));
    }

    #[test]
    fn good_friday_since_2016() {
        let cal = CzechRepublic;
        // Easter Monday 2023: April 10, Good Friday = April 7
        assert!(cal.contains(date(2023, 4, 7)));
        // Good Friday not observed before 2016
        // Easter Monday 2015: April 6, Good Friday = April 3
        assert!(!cal.contains(date(2015, 4, 3)));
        assert!(cal.contains(date(2015, 4, 6)));
    }

    #[test]
    fn christmas_eve() {
        let cal = CzechRepublic;
        assert_eq!(cal.holiday_name(date(2024, 12, 24)), Some("Christmas Eve"));
    }

    #[test]
    fn holiday_on_weekend_is_still_a_holiday() {
        let cal = CzechRepublic;
        // 2023-10-28 is a Saturday
        assert!(cal.contains(date(2023, 10, 28)));
        assert!(!cal.is_workday(date(2023, 10, 28)));
    }

    #[test]
    fn normal_business_day() {
        let cal = CzechRepublic;
        assert!(cal.is_workday(date(2023, 6, 15)));
    }
}
