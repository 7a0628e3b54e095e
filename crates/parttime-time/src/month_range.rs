//! `MonthRange`: the closed interval of days of one calendar month.

use std::iter::FusedIterator;

use crate::date::Date;
use crate::month::Month;

/// All days of the month containing a given date, `[first, last]`.
///
/// `MonthRange` is `Copy`; every call to [`days`](MonthRange::days) (or
/// `into_iter`) restarts the walk from the first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthRange {
    first: Date,
    last: Date,
}

impl MonthRange {
    /// The month containing `date`.
    ///
    /// The last day is the first day of the following month minus one day,
    /// so month lengths and the December → January rollover come from the
    /// date arithmetic itself.
    pub fn containing(date: Date) -> Self {
        let first = date.start_of_month();
        Self {
            first,
            last: first.end_of_month(),
        }
    }

    /// First day of the month (always day 1).
    pub fn first(&self) -> Date {
        self.first
    }

    /// Last day of the month.
    pub fn last(&self) -> Date {
        self.last
    }

    /// The month.
    pub fn month(&self) -> Month {
        self.first.month_of_year()
    }

    /// The year.
    pub fn year(&self) -> u16 {
        self.first.year()
    }

    /// Number of days in the range (28–31).
    pub fn len(&self) -> usize {
        (self.last - self.first + 1) as usize
    }

    /// Always `false`: a month has at least 28 days.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Return `true` if `date` lies within the month.
    pub fn contains(&self, date: Date) -> bool {
        (self.first..=self.last).contains(&date)
    }

    /// Lazily walk the days of the month in order, one day per step.
    pub fn days(&self) -> Days {
        Days {
            next: Some(self.first),
            last: self.last,
        }
    }
}

impl std::fmt::Display for MonthRange {
    /// `March 2024`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month(), self.year())
    }
}

impl IntoIterator for MonthRange {
    type Item = Date;
    type IntoIter = Days;

    fn into_iter(self) -> Days {
        self.days()
    }
}

impl IntoIterator for &MonthRange {
    type Item = Date;
    type IntoIter = Days;

    fn into_iter(self) -> Days {
        self.days()
    }
}

/// Iterator over consecutive days up to an inclusive end.
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<Date>,
    last: Date,
}

impl Iterator for Days {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.next?;
        let last = self.last;
        self.next = current.succ().filter(|d| *d <= last);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self
            .next
            .map_or(0, |d| (self.last - d + 1).max(0) as usize);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Days {}

impl FusedIterator for Days {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn leap_february() {
        let range = MonthRange::containing(date(2024, 2, 17));
        assert_eq!(range.first(), date(2024, 2, 1));
        assert_eq!(range.last(), date(2024, 2, 29));
        assert_eq!(range.len(), 29);
        assert_eq!(range.to_string(), "February 2024");
    }

    #[test]
    fn december_rolls_over_year() {
        let range = MonthRange::containing(date(2024, 12, 1));
        assert_eq!(range.last(), date(2024, 12, 31));
        assert!(!range.contains(date(2025, 1, 1)));
    }

    #[test]
    fn last_representable_month() {
        let range = MonthRange::containing(Date::MAX);
        assert_eq!(range.first(), date(9999, 12, 1));
        assert_eq!(range.last(), Date::MAX);
        assert_eq!(range.days().count(), 31);
    }

    #[test]
    fn days_are_consecutive_and_restartable() {
        let range = MonthRange::containing(date(2023, 4, 30));
        let days: Vec<Date> = range.into_iter().collect();
        assert_eq!(days.len(), 30);
        assert_eq!(days.first(), Some(&date(2023, 4, 1)));
        assert_eq!(days.last(), Some(&date(2023, 4, 30)));
        assert!(days.windows(2).all(|w| w[1] - w[0] == 1));

        let again: Vec<Date> = (&range).into_iter().collect();
        assert_eq!(days, again);
    }

    #[test]
    fn size_hint_is_exact() {
        let mut days = MonthRange::containing(date(2023, 6, 1)).days();
        assert_eq!(days.len(), 30);
        days.next();
        assert_eq!(days.len(), 29);
        for _ in days.by_ref() {}
        assert_eq!(days.len(), 0);
        assert_eq!(days.next(), None);
    }
}
