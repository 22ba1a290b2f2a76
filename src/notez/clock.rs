use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};

pub const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

/// Source of wall-clock time for ids and note dates.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// True when `fmt` is a non-empty strftime pattern chrono can render.
pub fn is_valid_date_format(fmt: &str) -> bool {
    !fmt.is_empty() && StrftimeItems::new(fmt).all(|item| !matches!(item, Item::Error))
}

/// Renders `at` with `fmt`, falling back to [`DEFAULT_DATE_FORMAT`] for bad patterns.
///
/// chrono panics when a `Display` of an invalid pattern is written, so the
/// pattern is checked first.
pub fn format_timestamp(at: &DateTime<Local>, fmt: &str) -> String {
    let fmt = if is_valid_date_format(fmt) {
        fmt
    } else {
        DEFAULT_DATE_FORMAT
    };
    at.format(fmt).to_string()
}

#[cfg(any(test, feature = "test_utils"))]
pub use manual::ManualClock;

#[cfg(any(test, feature = "test_utils"))]
mod manual {
    use super::Clock;
    use chrono::{DateTime, Duration, Local, TimeZone};
    use std::cell::Cell;

    /// A clock that only moves when told to.
    #[derive(Debug, Clone)]
    pub struct ManualClock {
        now: Cell<DateTime<Local>>,
    }

    impl ManualClock {
        pub fn at_millis(millis: i64) -> Self {
            let now = Local
                .timestamp_millis_opt(millis)
                .single()
                .unwrap_or_else(Local::now);
            Self {
                now: Cell::new(now),
            }
        }

        pub fn set(&self, now: DateTime<Local>) {
            self.now.set(now);
        }

        pub fn advance_secs(&self, secs: i64) {
            self.now.set(self.now.get() + Duration::seconds(secs));
        }
    }

    impl Default for ManualClock {
        fn default() -> Self {
            Self::at_millis(1_700_000_000_000)
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Local> {
            self.now.get()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn default_format_is_day_month_year() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(format_timestamp(&at, DEFAULT_DATE_FORMAT), "09.03.2024, 07:05:01");
    }

    #[test]
    fn invalid_format_falls_back() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert!(!is_valid_date_format("%Q"));
        assert!(!is_valid_date_format(""));
        assert_eq!(format_timestamp(&at, "%Q"), "09.03.2024, 07:05:01");
    }

    #[test]
    fn custom_format_is_used() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(format_timestamp(&at, "%Y-%m-%d"), "2024-03-09");
    }

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::at_millis(1_000);
        clock.advance_secs(2);
        assert_eq!(clock.now().timestamp_millis(), 3_000);
    }
}
