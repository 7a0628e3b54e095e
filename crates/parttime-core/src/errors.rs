//! Error types for parttime.
//!
//! A single `thiserror`-derived enum covers every failure the workspace can
//! report.  The [`ensure!`](crate::ensure) macro returns early with a
//! [`Error::Precondition`].

use thiserror::Error;

/// The top-level error type used throughout parttime.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date construction, parsing, or arithmetic error.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No holiday calendar is known for the requested country code.
    #[error("unsupported country code: {0:?}")]
    UnsupportedCountry(String),
}

/// Shorthand `Result` type used throughout parttime.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use parttime_core::{ensure, errors::Error};
/// fn positive(x: f64) -> parttime_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked_ratio(num: f64, den: f64) -> Result<f64> {
        crate::ensure!(den != 0.0, "denominator is zero");
        Ok(num / den)
    }

    #[test]
    fn ensure_returns_precondition() {
        assert_eq!(checked_ratio(1.0, 2.0), Ok(0.5));
        assert_eq!(
            checked_ratio(1.0, 0.0),
            Err(Error::Precondition("denominator is zero".into()))
        );
    }

    #[test]
    fn display_unsupported_country() {
        let err = Error::UnsupportedCountry("XX".into());
        assert_eq!(err.to_string(), "unsupported country code: \"XX\"");
    }
}
