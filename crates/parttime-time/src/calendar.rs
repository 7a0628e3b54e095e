//! `HolidayCalendar` trait and generic calendar implementations.
//!
//! A holiday calendar answers one question: is a given date a public holiday
//! in the country it represents?  Weekends are a separate concern; a holiday
//! that falls on a Sunday is still a member of the holiday set.

use std::collections::BTreeMap;

use crate::date::Date;

/// The set of public holidays of one country.
///
/// Implementors only need [`holiday_name`](HolidayCalendar::holiday_name);
/// membership and workday tests are derived from it.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Czech Republic"`).
    fn name(&self) -> &str;

    /// Return the name of the holiday on `date`, if there is one.
    fn holiday_name(&self, date: Date) -> Option<&str>;

    /// Return `true` if `date` is in this calendar's holiday set.
    fn contains(&self, date: Date) -> bool {
        self.holiday_name(date).is_some()
    }

    /// Return `true` if `date` falls on a Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return `true` if `date` is a Monday–Friday that is not a holiday.
    fn is_workday(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.contains(date)
    }

    /// List the holidays in the inclusive range `[from, to]`, in date order.
    fn holidays_between(&self, from: Date, to: Date) -> Vec<(Date, &str)> {
        let mut holidays = Vec::new();
        let mut d = Some(from);
        while let Some(date) = d.filter(|d| *d <= to) {
            if let Some(name) = self.holiday_name(date) {
                holidays.push((date, name));
            }
            d = date.succ();
        }
        holidays
    }
}

/// A calendar with no holidays: only Saturdays and Sundays are days off.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl HolidayCalendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn holiday_name(&self, _date: Date) -> Option<&str> {
        None
    }
}

/// An explicit, data-driven holiday set.
///
/// Useful when holidays come from an external table rather than from rules.
#[derive(Debug, Clone, Default)]
pub struct HolidaySet {
    name: String,
    holidays: BTreeMap<Date, String>,
}

impl HolidaySet {
    /// Create an empty set with the given calendar name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: BTreeMap::new(),
        }
    }

    /// Add (or rename) a holiday.
    pub fn insert(&mut self, date: Date, name: impl Into<String>) {
        self.holidays.insert(date, name.into());
    }

    /// Number of holidays in the set.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Return `true` if the set holds no holidays.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(Date, N)> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = (Date, N)>>(iter: I) -> Self {
        let mut set = HolidaySet::new("Custom");
        for (date, name) in iter {
            set.insert(date, name);
        }
        set
    }
}

impl HolidayCalendar for HolidaySet {
    fn name(&self) -> &str {
        &self.name
    }

    fn holiday_name(&self, date: Date) -> Option<&str> {
        self.holidays.get(&date).map(String::as_str)
    }

    fn holidays_between(&self, from: Date, to: Date) -> Vec<(Date, &str)> {
        if from > to {
            return Vec::new();
        }
        self.holidays
            .range(from..=to)
            .map(|(date, name)| (*date, name.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn weekends_only_saturday() {
        let cal = WeekendsOnly;
        // 2023-09-02 is a Saturday
        let sat = date(2023, 9, 2);
        assert!(!cal.is_workday(sat));
        assert!(!cal.contains(sat));
        let mon = date(2023, 9, 4);
        assert!(cal.is_workday(mon));
    }

    #[test]
    fn holiday_set_membership() {
        let set: HolidaySet = [(date(2024, 5, 1), "Labour Day"), (date(2024, 5, 4), "Saturday fair")]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.holiday_name(date(2024, 5, 1)), Some("Labour Day"));
        assert!(!set.is_workday(date(2024, 5, 1)));
        assert!(set.is_workday(date(2024, 5, 2)));
        // Saturday is both weekend and holiday
        assert!(set.contains(date(2024, 5, 4)));
        assert!(set.is_weekend(date(2024, 5, 4)));
    }

    #[test]
    fn holidays_between_is_inclusive_and_ordered() {
        let mut set = HolidaySet::new("Test");
        set.insert(date(2024, 12, 26), "St. Stephen's Day");
        set.insert(date(2024, 12, 24), "Christmas Eve");
        set.insert(date(2025, 1, 1), "New Year's Day");

        let from = date(2024, 12, 24);
        let to = date(2024, 12, 31);
        let expected = vec![
            (date(2024, 12, 24), "Christmas Eve"),
            (date(2024, 12, 26), "St. Stephen's Day"),
        ];
        assert_eq!(set.holidays_between(from, to), expected);
        assert!(set.holidays_between(to, from).is_empty());
    }
}
