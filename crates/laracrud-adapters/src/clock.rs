//! Clock adapters.

use chrono::{Local, NaiveDateTime};

use laracrud_core::application::ports::Clock;

/// Local wall-clock time, matching what `php artisan make:migration` uses.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant. Makes generated paths reproducible.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn fixed_clock_is_fixed() {
        let at = NaiveDate::from_ymd_opt(2024, 1, 31)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let clock = FixedClock(at);
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().format("%Y%m%d_%H%M%S").to_string(), "20240131_120000");
    }
}
