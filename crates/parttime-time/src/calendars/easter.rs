//! Easter-based movable feasts.

use crate::date::{days_in_month, Date};

/// Day of the year (1-based) of Western Easter Monday in `year`.
///
/// Easter Sunday follows Oudin's algorithm for the Gregorian calendar.
pub(crate) fn easter_monday(year: u16) -> u16 {
    let y = year as i32;
    let g = y % 19;
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
    let p = i - j;
    let e_day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let e_month = 3 + (p + 26) / 30;

    let before: u16 = (1..e_month as u8)
        .map(|m| days_in_month(year, m) as u16)
        .sum();
    before + e_day as u16 + 1
}

/// Signed distance in days from Easter Monday of the same year to `date`.
///
/// Good Friday is `-3`, Easter Sunday `-1`, Ascension `38`, Whit Monday `49`,
/// Corpus Christi `59`.
pub(crate) fn offset(date: Date) -> i32 {
    date.day_of_year() as i32 - easter_monday(date.year()) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn known_easter_mondays() {
        for (y, m, d) in [(2000, 4, 24), (2016, 3, 28), (2023, 4, 10), (2024, 4, 1), (2025, 4, 21)] {
            assert_eq!(offset(date(y, m, d)), 0, "Easter Monday {y}");
        }
    }

    #[test]
    fn good_friday_2023() {
        assert_eq!(offset(date(2023, 4, 7)), -3);
    }
}
