//! Calendars backed by the published tables of the `holidays` crate.
//!
//! These cover every country without a rule calendar of its own.  The tables
//! carry no holiday names we rely on, so every day off is reported as
//! `"Public holiday"`.  Years outside the tables have no holidays.

use std::fmt;

use chrono::NaiveDate;
use holidays::Country as TableCountry;

use crate::calendar::HolidayCalendar;
use crate::date::Date;

/// Holiday calendar of one country from the `holidays` tables.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublishedCalendar {
    code: &'static str,
    name: &'static str,
}

impl PublishedCalendar {
    /// Calendar for an upper-case ISO 3166-1 alpha-2 `code`, if the tables
    /// know the country.
    pub fn from_code(code: &str) -> Option<Self> {
        CODES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|&(code, name)| Self { code, name })
    }

    /// The ISO 3166-1 alpha-2 code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Every country code the tables are consulted for, in order.
    pub fn codes() -> impl Iterator<Item = &'static str> {
        CODES.iter().map(|(code, _)| *code)
    }
}

impl fmt::Debug for PublishedCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublishedCalendar({})", self.code)
    }
}

impl HolidayCalendar for PublishedCalendar {
    fn name(&self) -> &str {
        self.name
    }

    fn holiday_name(&self, date: Date) -> Option<&str> {
        let country = table_country(self.code)?;
        let day = NaiveDate::from_ymd_opt(
            i32::from(date.year()),
            u32::from(date.month()),
            u32::from(date.day_of_month()),
        )?;
        holidays::contains(country, day)
            .unwrap_or(false)
            .then_some("Public holiday")
    }
}

const CODES: [(&str, &str); 40] = [
    ("AR", "Argentina"),
    ("AU", "Australia"),
    ("BE", "Belgium"),
    ("BG", "Bulgaria"),
    ("BR", "Brazil"),
    ("CA", "Canada"),
    ("CH", "Switzerland"),
    ("CL", "Chile"),
    ("CN", "China"),
    ("CO", "Colombia"),
    ("DK", "Denmark"),
    ("EE", "Estonia"),
    ("ES", "Spain"),
    ("FI", "Finland"),
    ("FR", "France"),
    ("GR", "Greece"),
    ("HR", "Croatia"),
    ("HU", "Hungary"),
    ("IE", "Ireland"),
    ("IL", "Israel"),
    ("IN", "India"),
    ("IS", "Iceland"),
    ("IT", "Italy"),
    ("JP", "Japan"),
    ("KR", "South Korea"),
    ("LT", "Lithuania"),
    ("LU", "Luxembourg"),
    ("LV", "Latvia"),
    ("MX", "Mexico"),
    ("NL", "Netherlands"),
    ("NO", "Norway"),
    ("NZ", "New Zealand"),
    ("PT", "Portugal"),
    ("RO", "Romania"),
    ("RS", "Serbia"),
    ("SE", "Sweden"),
    ("SI", "Slovenia"),
    ("TR", "Turkey"),
    ("UA", "Ukraine"),
    ("ZA", "South Africa"),
];

fn table_country(code: &str) -> Option<TableCountry> {
    Some(match code {
        "AR" => TableCountry::AR,
        "AU" => TableCountry::AU,
        "BE" => TableCountry::BE,
        "BG" => TableCountry::BG,
        "BR" => TableCountry::BR,
        "CA" => TableCountry::CA,
        "CH" => TableCountry::CH,
        "CL" => TableCountry::CL,
        "CN" => TableCountry::CN,
        "CO" => TableCountry::CO,
        "DK" => TableCountry::DK,
        "EE" => TableCountry::EE,
        "ES" => TableCountry::ES,
        "FI" => TableCountry::FI,
        "FR" => TableCountry::FR,
        "GR" => TableCountry::GR,
        "HR" => TableCountry::HR,
        "HU" => TableCountry::HU,
        "IE" => TableCountry::IE,
        "IL" => TableCountry::IL,
        "IN" => TableCountry::IN,
        "IS" => TableCountry::IS,
        "IT" => TableCountry::IT,
        "JP" => TableCountry::JP,
        "KR" => TableCountry::KR,
        "LT" => TableCountry::LT,
        "LU" => TableCountry::LU,
        "LV" => TableCountry::LV,
        "MX" => TableCountry::MX,
        "NL" => TableCountry::NL,
        "NO" => TableCountry::NO,
        "NZ" => TableCountry::NZ,
        "PT" => TableCountry::PT,
        "RO" => TableCountry::RO,
        "RS" => TableCountry::RS,
        "SE" => TableCountry::SE,
        "SI" => TableCountry::SI,
        "TR" => TableCountry::TR,
        "UA" => TableCountry::UA,
        "ZA" => TableCountry::ZA,
        _ => return None,
    })
}
