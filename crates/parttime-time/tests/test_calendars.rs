//! Integration tests for the country holiday calendars.

use std::collections::HashSet;

use parttime_time::calendars::{CzechRepublic, PublishedCalendar, UnitedKingdom, UnitedStates};
use parttime_time::{country_calendar, Country, Date, HolidayCalendar, HolidaySet, MonthRange};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Assert that the holidays of `cal` in `[from, to]` are exactly `expected`.
fn check_holidays(cal: &dyn HolidayCalendar, from: Date, to: Date, expected: &[Date]) {
    let calculated: HashSet<Date> = cal
        .holidays_between(from, to)
        .into_iter()
        .map(|(d, _)| d)
        .collect();
    let exp_set: HashSet<Date> = expected.iter().copied().collect();

    for d in &calculated {
        assert!(
            exp_set.contains(d),
            "{}: {} calculated as holiday but not expected ({})",
            cal.name(),
            d,
            d.weekday()
        );
    }
    for d in &exp_set {
        assert!(
            calculated.contains(d),
            "{}: {} expected as holiday but not found ({})",
            cal.name(),
            d,
            d.weekday()
        );
    }
}

// ─── Czech Republic ───────────────────────────────────────────────────────────

#[test]
fn test_czech_republic_holidays_2024() {
    let expected = [
        date(2024, 1, 1),
        date(2024, 3, 29),
        date(2024, 4, 1),
        date(2024, 5, 1),
        date(2024, 5, 8),
        date(2024, 7, 5),
        date(2024, 7, 6),
        date(2024, 9, 28),
        date(2024, 10, 28),
        date(2024, 11, 17),
        date(2024, 12, 24),
        date(2024, 12, 25),
        date(2024, 12, 26),
    ];
    check_holidays(&CzechRepublic, date(2024, 1, 1), date(2024, 12, 31), &expected);
}

// ─── United States ────────────────────────────────────────────────────────────

#[test]
fn test_united_states_holidays_2024() {
    let expected = [
        date(2024, 1, 1),
        date(2024, 1, 15),
        date(2024, 2, 19),
        date(2024, 5, 27),
        date(2024, 6, 19),
        date(2024, 7, 4),
        date(2024, 9, 2),
        date(2024, 10, 14),
        date(2024, 11, 11),
        date(2024, 11, 28),
        date(2024, 12, 25),
    ];
    check_holidays(&UnitedStates, date(2024, 1, 1), date(2024, 12, 31), &expected);
}

#[test]
fn test_united_states_observed_2022() {
    // Jan 1 2022 Sat, Jun 19 Sun, Dec 25 Sun
    let cal = UnitedStates;
    for d in [date(2021, 12, 31), date(2022, 6, 20), date(2022, 12, 26)] {
        assert!(!cal.is_workday(d), "{d} should be an observed holiday");
    }
}

// ─── United Kingdom ───────────────────────────────────────────────────────────

#[test]
fn test_united_kingdom_holidays_2022() {
    let expected = [
        date(2022, 1, 1),
        date(2022, 1, 3),
        date(2022, 4, 15),
        date(2022, 4, 18),
        date(2022, 5, 2),
        date(2022, 6, 2),
        date(2022, 6, 3),
        date(2022, 8, 29),
        date(2022, 9, 19),
        date(2022, 12, 25),
        date(2022, 12, 26),
        date(2022, 12, 27),
    ];
    check_holidays(&UnitedKingdom, date(2022, 1, 1), date(2022, 12, 31), &expected);
}

// ─── Registry ─────────────────────────────────────────────────────────────────

#[test]
fn test_every_country_has_new_years_day() {
    for country in Country::ALL {
        let cal = country.calendar();
        assert!(
            cal.contains(date(2024, 1, 1)),
            "{} ({country}) misses New Year's Day",
            cal.name()
        );
        assert!(cal.contains(date(2024, 12, 25)), "{country} misses Christmas");
    }
}

#[test]
fn test_every_country_keeps_ordinary_days() {
    // 2024-03-13 is a Wednesday without holidays anywhere supported
    for country in Country::ALL {
        assert!(country.calendar().is_workday(date(2024, 3, 13)), "{country}");
    }
}

#[test]
fn test_registry_lookup() {
    assert_eq!(country_calendar("sk").unwrap().name(), "Slovakia");
    assert!(country_calendar("ZZ").is_err());
}

#[test]
fn test_registry_reaches_beyond_rule_calendars() {
    for code in PublishedCalendar::codes() {
        assert!(country_calendar(&code.to_ascii_lowercase()).is_ok(), "{code}");
    }
    // Bastille Day is the only July holiday
    let france = country_calendar("FR").unwrap();
    assert_eq!(
        france
            .holidays_between(date(2024, 7, 1), date(2024, 7, 31))
            .into_iter()
            .map(|(d, _)| d)
            .collect::<Vec<_>>(),
        vec![date(2024, 7, 14)]
    );
    assert!(france.contains(date(2024, 12, 25)));
}

#[test]
fn test_holiday_set_as_substitute_calendar() {
    let range = MonthRange::containing(date(2024, 5, 1));
    let set: HolidaySet = [(date(2024, 5, 1), "Labour Day"), (date(2024, 5, 8), "Victory Day")]
        .into_iter()
        .collect();
    let workdays = range.days().filter(|d| set.is_workday(*d)).count();
    // May 2024 has 23 weekdays
    assert_eq!(workdays, 21);
    assert_eq!(
        set.holidays_between(range.first(), range.last()),
        CzechRepublic.holidays_between(range.first(), range.last())
    );
}
