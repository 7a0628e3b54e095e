//! Process-wide settings.
//!
//! [`Settings`] holds an optional **evaluation date** override, the date the
//! calculator treats as "today".  When no override is set, callers read the
//! system clock at the moment they need the date, so a long-lived process
//! never works with a stale "today".
//!
//! The override is stored as a date serial number (see `parttime-time`'s
//! `Date`) so that this crate stays free of calendar types.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// Process-wide settings used by parttime.
pub struct Settings {
    evaluation_date: Mutex<Option<i32>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    fn slot(&self) -> MutexGuard<'_, Option<i32>> {
        // The slot holds plain data, so a poisoned lock is still consistent.
        self.evaluation_date
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the evaluation date override as a serial number.
    ///
    /// Returns `None` if "today" should come from the system clock.
    pub fn evaluation_date_serial(&self) -> Option<i32> {
        *self.slot()
    }

    /// Set the evaluation date override as a serial number.
    pub fn set_evaluation_date_serial(&self, serial: i32) {
        *self.slot() = Some(serial);
    }

    /// Clear the override, resetting it to "use the system clock".
    pub fn reset_evaluation_date(&self) {
        *self.slot() = None;
    }
}

/// RAII guard that pins the evaluation date for its lifetime and restores
/// the previous value on drop.
#[must_use = "the override is removed as soon as the guard is dropped"]
pub struct ScopedEvaluationDate {
    previous: Option<i32>,
}

impl ScopedEvaluationDate {
    /// Pin the evaluation date to `serial` until the guard is dropped.
    pub fn new(serial: i32) -> Self {
        let settings = Settings::instance();
        let previous = settings.evaluation_date_serial();
        settings.set_evaluation_date_serial(serial);
        Self { previous }
    }
}

impl Drop for ScopedEvaluationDate {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(serial) => settings.set_evaluation_date_serial(serial),
            None => settings.reset_evaluation_date(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_override_restores_previous() {
        let settings = Settings::instance();
        let before = settings.evaluation_date_serial();
        {
            let _guard = ScopedEvaluationDate::new(45_000);
            assert_eq!(settings.evaluation_date_serial(), Some(45_000));
            {
                let _inner = ScopedEvaluationDate::new(45_001);
                assert_eq!(settings.evaluation_date_serial(), Some(45_001));
            }
            assert_eq!(settings.evaluation_date_serial(), Some(45_000));
        }
        assert_eq!(settings.evaluation_date_serial(), before);
    }
}
