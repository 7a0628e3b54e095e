//! The workday / commitment report printed by the CLI.

use std::fmt;

use parttime_core::{Percent, Real};
use parttime_time::{Date, MonthRange};

use crate::commitment::calc_commitment;
use crate::workdays::WorkdayCalculator;

/// Result of one run: the month, its work days, and the commitment.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkdayReport {
    /// The analysed month.
    pub range: MonthRange,
    /// Work days of the month, in date order.
    pub workdays: Vec<Date>,
    /// Requested commitment percentage.
    pub percent: Percent,
    /// `ceil(workdays × percent / 100)`, a whole number.
    pub commitment_days: Real,
    /// Holidays that fell on Monday–Friday.
    pub weekday_holidays: Vec<(Date, String)>,
}

impl WorkdayReport {
    /// Run the full pipeline for the month containing `start`.
    pub fn build(calculator: &WorkdayCalculator, start: Date, percent: Percent) -> Self {
        let workdays = calculator.compute_workdays(start);
        let commitment_days = calc_commitment(workdays.len(), percent);
        Self {
            range: MonthRange::containing(start),
            weekday_holidays: calculator.weekday_holidays(start),
            workdays,
            percent,
            commitment_days,
        }
    }

    /// Number of work days.
    pub fn workday_count(&self) -> usize {
        self.workdays.len()
    }

    /// One `YYYY-MM-DD Weekday  Name` line per weekday holiday.
    pub fn holiday_lines(&self) -> Vec<String> {
        self.weekday_holidays
            .iter()
            .map(|(date, name)| format!("{date} {:<9}  {name}", date.weekday()))
            .collect()
    }
}

impl fmt::Display for WorkdayReport {
    /// The two report lines, without a trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Workdays in {}: {}", self.range, self.workday_count())?;
        write!(
            f,
            "{:.1}% commitment: {:.0} days",
            self.percent, self.commitment_days
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parttime_time::Country;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn february_2024_czech() {
        let calc = WorkdayCalculator::for_country(Country::CzechRepublic);
        let report = WorkdayReport::build(&calc, date(2024, 2, 1), 20.0);
        assert_eq!(
            report.to_string(),
            "Workdays in February 2024: 21\n20.0% commitment: 5 days"
        );
        assert!(report.holiday_lines().is_empty());
    }

    #[test]
    fn holiday_lines_format() {
        let calc = WorkdayCalculator::for_country(Country::UnitedStates);
        let report = WorkdayReport::build(&calc, date(2024, 12, 1), 50.0);
        assert_eq!(
            report.holiday_lines(),
            vec!["2024-12-25 Wednesday  Christmas Day".to_owned()]
        );
    }

    #[test]
    fn percent_has_one_decimal() {
        let calc = WorkdayCalculator::for_country(Country::CzechRepublic);
        let report = WorkdayReport::build(&calc, date(2024, 2, 1), 33.33);
        assert!(report.to_string().ends_with("\n33.3% commitment: 7 days"));
    }

    #[test]
    fn large_commitment_prints_every_digit() {
        let calc = WorkdayCalculator::for_country(Country::CzechRepublic);
        let report = WorkdayReport::build(&calc, date(2024, 2, 1), 1e20);
        assert_eq!(
            report.to_string(),
            "Workdays in February 2024: 21\n\
             100000000000000000000.0% commitment: 21000000000000000000 days"
        );
    }
}
