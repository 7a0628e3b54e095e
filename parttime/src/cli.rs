//! Command-line interface.
//!
//! Every option can also be set through a `PARTTIME_*` environment variable;
//! the flag wins when both are given.

use clap::Parser;
use parttime_core::errors::{Error, Result};
use parttime_core::{ensure, Percent};
use parttime_time::{country_calendar, Date};
use tracing::info;

use crate::report::WorkdayReport;
use crate::workdays::WorkdayCalculator;

/// Count the work days of a month and the part-time commitment they imply.
#[derive(Debug, Clone, Parser)]
#[command(name = "parttime")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Start date marking the relevant month (YYYY-MM-DD) [default: today]
    #[arg(long, env = "PARTTIME_START", value_name = "DATE")]
    pub start: Option<Date>,

    /// Per cent of work days commitment
    #[arg(long, env = "PARTTIME_PTC", default_value = "20", value_parser = parse_percent)]
    pub ptc: Percent,

    /// Country to determine holidays for (ISO 3166-1 alpha-2)
    #[arg(long, env = "PARTTIME_COUNTRY", default_value = "CZ", value_parser = normalize_country)]
    pub country: String,

    /// Also list the holidays that fall on weekdays of the month
    #[arg(long)]
    pub list_holidays: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse a commitment percentage: any finite, non-negative number.
fn parse_percent(s: &str) -> Result<Percent> {
    let value: Percent = s
        .trim()
        .parse()
        .map_err(|_| Error::InvalidArgument(format!("{s:?} is not a number")))?;
    ensure!(value.is_finite(), "percentage must be finite, got {s}");
    ensure!(value >= 0.0, "percentage must not be negative, got {s}");
    Ok(value)
}

fn normalize_country(s: &str) -> Result<String> {
    Ok(s.trim().to_ascii_uppercase())
}

impl Cli {
    /// The month to analyse; defaults to the evaluation date, read now.
    pub fn start_date(&self) -> Result<Date> {
        match self.start {
            Some(date) => Ok(date),
            None => Date::evaluation_date(),
        }
    }
}

/// Execute one run and return the report.
///
/// # Errors
/// [`Error::UnsupportedCountry`] for an unknown `--country`, a date error
/// if "today" cannot be determined, or a precondition error if the
/// commitment overflows to infinity.
pub fn run(cli: &Cli) -> Result<WorkdayReport> {
    let calculator = WorkdayCalculator::new(country_calendar(&cli.country)?);
    let start = cli.start_date()?;
    info!(
        country = %cli.country,
        calendar = calculator.calendar().name(),
        %start,
        percent = cli.ptc,
        "computing workdays"
    );
    let report = WorkdayReport::build(&calculator, start, cli.ptc);
    ensure!(
        report.commitment_days.is_finite(),
        "{}% of {} work days is not a finite number of days",
        cli.ptc,
        report.workday_count()
    );
    Ok(report)
}

/// Render the stdout text of a run: the report, then holiday lines on request.
pub fn render(cli: &Cli, report: &WorkdayReport) -> String {
    let mut out = report.to_string();
    if cli.list_holidays {
        for line in report.holiday_lines() {
            out.push('\n');
            out.push_str(&line);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("parttime").chain(args.iter().copied()))
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn explicit_flags() {
        let cli = parse(&["--start", "2024-12-01", "--ptc", "50", "--country", "us"]).unwrap();
        assert_eq!(cli.start, Some(Date::from_ymd(2024, 12, 1).unwrap()));
        assert_eq!(cli.ptc, 50.0);
        assert_eq!(cli.country, "US");
        assert!(!cli.list_holidays);
    }

    #[test]
    fn malformed_start_is_a_parse_error() {
        assert!(parse(&["--start", "2024-13-01"]).is_err());
        assert!(parse(&["--start", "yesterday"]).is_err());
    }

    #[test]
    fn percent_validation() {
        assert_eq!(parse_percent("12.5"), Ok(12.5));
        assert_eq!(parse_percent("150"), Ok(150.0));
        assert!(parse_percent("-1").is_err());
        assert!(parse_percent("NaN").is_err());
        assert!(parse_percent("inf").is_err());
        assert!(parse_percent("twenty").is_err());
    }

    #[test]
    fn start_accepts_any_four_digit_year() {
        let cli = parse(&["--start", "2200-03-01"]).unwrap();
        assert_eq!(cli.start, Some(Date::from_ymd(2200, 3, 1).unwrap()));
        assert!(run(&cli).is_ok());
        let cli = parse(&["--start", "1899-06-01"]).unwrap();
        assert_eq!(cli.start_date(), Date::from_ymd(1899, 6, 1));
        assert!(parse(&["--start", "0000-01-01"]).is_err());
    }

    #[test]
    fn countries_from_published_tables() {
        for code in ["fr", "JP", "it"] {
            let cli = parse(&["--start", "2024-07-01", "--country", code]).unwrap();
            assert!(run(&cli).is_ok(), "{code}");
        }
        // Bastille Day, Sunday 2024-07-14, falls on a weekend
        let cli = parse(&["--start", "2024-07-01", "--country", "FR"]).unwrap();
        assert_eq!(run(&cli).unwrap().workday_count(), 23);
    }

    #[test]
    fn huge_percent_is_exact() {
        let cli = parse(&["--start", "2024-02-01", "--ptc", "1e20"]).unwrap();
        let report = run(&cli).unwrap();
        assert!(render(&cli, &report).ends_with("% commitment: 21000000000000000000 days"));
    }

    #[test]
    fn infinite_commitment_fails_run() {
        let cli = parse(&["--start", "2024-02-01", "--ptc", "1e308"]).unwrap();
        assert!(matches!(run(&cli), Err(Error::Precondition(_))));
    }

    #[test]
    fn unsupported_country_fails_run() {
        let cli = parse(&["--start", "2024-02-01", "--country", "xx"]).unwrap();
        assert_eq!(run(&cli), Err(Error::UnsupportedCountry("XX".into())));
    }

    #[test]
    fn render_with_holidays() {
        let cli = parse(&["--start", "2024-12-01", "--country", "US", "--ptc", "50", "--list-holidays"])
            .unwrap();
        let report = run(&cli).unwrap();
        assert_eq!(
            render(&cli, &report),
            "Workdays in December 2024: 21\n\
             50.0% commitment: 11 days\n\
             2024-12-25 Wednesday  Christmas Day"
        );
    }
}
