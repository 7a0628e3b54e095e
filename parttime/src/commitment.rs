//! Commitment arithmetic: how many days a percentage of the work days is.

use parttime_core::{Percent, Real};

/// The exact (unrounded) number of days `percent` % of `workday_count` is.
pub fn commitment_fraction(workday_count: usize, percent: Percent) -> Real {
    workday_count as Real * percent / 100.0
}

/// Number of commitment days: `ceil(workday_count × percent / 100)`.
///
/// The smallest whole number of days that covers the requested share, so
/// `percent = 0` gives `0` and `percent > 100` may exceed `workday_count`.
/// The result is a whole-valued [`Real`] so that products beyond any
/// fixed-width integer stay exact.  Negative or NaN products give `0`.
pub fn calc_commitment(workday_count: usize, percent: Percent) -> Real {
    let days = commitment_fraction(workday_count, percent).ceil();
    // also folds -0.0 into 0.0
    if days > 0.0 {
        days
    } else {
        0.0
    }
}
