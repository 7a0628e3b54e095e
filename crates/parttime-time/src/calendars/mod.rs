//! Country holiday calendars and the country-code registry.
//!
//! [`country_calendar`] maps an ISO 3166-1 alpha-2 code to the calendar of
//! that country.  Countries with a rule calendar ([`Country`]) use it; every
//! other code the `holidays` tables know resolves to a [`PublishedCalendar`].
//! An unknown code is an error; there is no fallback calendar.

use std::fmt;
use std::str::FromStr;

use parttime_core::errors::{Error, Result};

use crate::calendar::HolidayCalendar;
use crate::date::{days_in_month, Date};

pub mod austria;
pub mod czech_republic;
pub(crate) mod easter;
pub mod germany;
pub mod poland;
pub mod published;
pub mod slovakia;
pub mod united_kingdom;
pub mod united_states;

pub use austria::Austria;
pub use czech_republic::CzechRepublic;
pub use germany::Germany;
pub use poland::Poland;
pub use published::PublishedCalendar;
pub use slovakia::Slovakia;
pub use united_kingdom::UnitedKingdom;
pub use united_states::UnitedStates;

/// A country with a built-in rule calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    /// Austria (`AT`).
    Austria,
    /// Czech Republic (`CZ`).
    CzechRepublic,
    /// Germany (`DE`).
    Germany,
    /// Poland (`PL`).
    Poland,
    /// Slovakia (`SK`).
    Slovakia,
    /// United Kingdom (`GB`, also accepted as `UK`).
    UnitedKingdom,
    /// United States (`US`).
    UnitedStates,
}

impl Country {
    /// Every country with a rule calendar, ordered by code.
    pub const ALL: [Country; 7] = [
        Country::Austria,
        Country::CzechRepublic,
        Country::Germany,
        Country::UnitedKingdom,
        Country::Poland,
        Country::Slovakia,
        Country::UnitedStates,
    ];

    /// Look up a country by ISO 3166-1 alpha-2 code, ignoring case and
    /// surrounding whitespace.
    pub fn from_code(code: &str) -> Result<Self> {
        let normalized = code.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "AT" => Ok(Country::Austria),
            "CZ" => Ok(Country::CzechRepublic),
            "DE" => Ok(Country::Germany),
            "GB" | "UK" => Ok(Country::UnitedKingdom),
            "PL" => Ok(Country::Poland),
            "SK" => Ok(Country::Slovakia),
            "US" => Ok(Country::UnitedStates),
            _ => Err(Error::UnsupportedCountry(normalized)),
        }
    }

    /// The canonical ISO 3166-1 alpha-2 code.
    pub fn code(&self) -> &'static str {
        match self {
            Country::Austria => "AT",
            Country::CzechRepublic => "CZ",
            Country::Germany => "DE",
            Country::Poland => "PL",
            Country::Slovakia => "SK",
            Country::UnitedKingdom => "GB",
            Country::UnitedStates => "US",
        }
    }

    /// The holiday calendar of this country.
    pub fn calendar(&self) -> Box<dyn HolidayCalendar> {
        match self {
            Country::Austria => Box::new(Austria),
            Country::CzechRepublic => Box::new(CzechRepublic),
            Country::Germany => Box::new(Germany),
            Country::Poland => Box::new(Poland),
            Country::Slovakia => Box::new(Slovakia),
            Country::UnitedKingdom => Box::new(UnitedKingdom),
            Country::UnitedStates => Box::new(UnitedStates),
        }
    }
}

impl FromStr for Country {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Country::from_code(s)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Return the holiday calendar for the country with ISO code `code`.
///
/// Rule calendars take precedence over the published tables.
///
/// # Errors
/// [`Error::UnsupportedCountry`] if no calendar is known for `code`.
pub fn country_calendar(code: &str) -> Result<Box<dyn HolidayCalendar>> {
    match Country::from_code(code) {
        Ok(country) => Ok(country.calendar()),
        Err(Error::UnsupportedCountry(normalized)) => PublishedCalendar::from_code(&normalized)
            .map(|calendar| Box::new(calendar) as Box<dyn HolidayCalendar>)
            .ok_or(Error::UnsupportedCountry(normalized)),
        Err(err) => Err(err),
    }
}

// ── Rule helpers ──────────────────────────────────────────────────────────────

/// Which occurrence (1-based) of its weekday `date` is within its month.
///
/// The third Monday of a month has `week_of_month == 3`.
pub(crate) fn week_of_month(date: Date) -> u8 {
    (date.day_of_month() - 1) / 7 + 1
}

/// Return `true` if `date` is the last occurrence of its weekday in its month.
pub(crate) fn is_last_weekday_of_month(date: Date) -> bool {
    date.day_of_month() + 7 > days_in_month(date.year(), date.month())
}
