//! Slovakia public holidays.

use crate::calendar::HolidayCalendar;
use crate::date::Date;

use super::easter;

/// Slovakia calendar.
///
/// The following public holidays are observed:
/// * Republic Day (Jan 1)
/// * Epiphany (Jan 6)
/// * Good Friday
/// * Easter Monday
/// * Labour Day (May 1)
/// * Victory Day (May 8)
/// * Saints Cyril & Methodius Day (Jul 5)
/// * SNP Anniversary (Aug 29)
/// * Constitution Day (Sep 1, until 2023)
/// * Our Lady of Seven Sorrows (Sep 15)
/// * All Saints' Day (Nov 1)
/// * Struggle for Freedom and Democracy Day (Nov 17, from 2001, except 2025)
/// * Christmas Eve (Dec 24)
/// * Christmas Day (Dec 25)
/// * St. Stephen's Day (Dec 26)
#[derive(Debug, Clone, Copy, Default)]
pub struct Slovakia;

impl HolidayCalendar for Slovakia {
    fn name(&self) -> &str {
        "Slovakia"
    }

    fn holiday_name(&self, date: Date) -> Option<&str> {
        let y = date.year();
        let fixed = match (date.month(), date.day_of_month()) {
            (1, 1) => Some("Republic Day"),
            (1, 6) => Some("Epiphany"),
            (5, 1) => Some("Labour Day"),
            (5, 8) => Some("Victory Day"),
            (7, 5) => Some("Saints Cyril and Methodius Day"),
            (8, 29) => Some("Slovak National Uprising Anniversary"),
            (9, 1) if y <= 2023 => Some("Constitution Day"),
            (9, 15) => Some("Our Lady of Seven Sorrows"),
            (11, 1) => Some("All Saints' Day"),
            // suspended for 2025 by the consolidation act
            (11, 17) if y >= 2001 && y != 2025 => {
                Some("Struggle for Freedom and Democracy Day")
            }
            (12, 24) => Some("Christmas Eve"),
            (12, 25) => Some("Christmas Day"),
            (12, 26) => Some("St. Stephen's Day"),
            _ => None,
        };
        fixed.or(match easter::offset(date) {
            -3 => Some("Good Friday"),
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
    fn epiphany() {
        assert_eq!(Slovakia.holiday_name(date(2025, 1, 6)), Some("Epiphany"));
    }

    #[test]
    fn good_friday_2015() {
        // observed in Slovakia regardless of year
        assert!(Slovakia.contains(date(2015, 4, 3)));
    }

    #[test]
    fn days_off_dropped_by_consolidation() {
        assert!(Slovakia.contains(date(2023, 9, 1)));
        assert!(Slovakia.is_workday(date(2025, 9, 1)));
        assert!(Slovakia.contains(date(2024, 11, 17)));
        assert!(Slovakia.is_workday(date(2025, 11, 17)));
        assert!(!Slovakia.contains(date(2000, 11, 17)));
    }

    #[test]
    fn snp_anniversary() {
        assert!(Slovakia.contains(date(2024, 8, 29)));
        assert!(Slovakia.is_workday(date(2024, 8, 28)));
    }
}
