//! # Observance Period
//!
//! Maps a calendar date to a 1-based "period day number" inside a fixed
//! window that straddles two months. The default window is Margazhi:
//!
//! ```text
//!   Dec 16 ── Dec 31 │ Jan 1 ── Jan 14
//!   day 1      day 16 │ day 17    day 30
//! ```
//!
//! Only month and day matter; the year is ignored. The start-month numbers
//! are `day - start_day + 1`, the end-month numbers are counted backwards
//! from `length`, so the last day of the window is always `length`.

use chrono::{Datelike, NaiveDate};

pub const DEFAULT_PERIOD_NAME: &str = "Margazhi";
pub const DEFAULT_START_MONTH: u32 = 12;
pub const DEFAULT_START_DAY: u32 = 16;
pub const DEFAULT_END_MONTH: u32 = 1;
pub const DEFAULT_END_DAY: u32 = 14;
pub const DEFAULT_PERIOD_LENGTH: u32 = 30;

/// A two-month observance window with its day-number thresholds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservancePeriod {
    pub name: String,
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
    pub length: u32,
}

impl Default for ObservancePeriod {
    fn default() -> Self {
        Self::margazhi()
    }
}

impl ObservancePeriod {
    /// Dec 16 through Jan 14, 30 days.
    pub fn margazhi() -> Self {
        Self {
            name: DEFAULT_PERIOD_NAME.to_string(),
            start_month: DEFAULT_START_MONTH,
            start_day: DEFAULT_START_DAY,
            end_month: DEFAULT_END_MONTH,
            end_day: DEFAULT_END_DAY,
            length: DEFAULT_PERIOD_LENGTH,
        }
    }

    /// Returns the period day number for `date`, or `None` outside the window.
    pub fn day_number(&self, date: NaiveDate) -> Option<u32> {
        let (month, day) = (date.month(), date.day());
        if month == self.start_month && day >= self.start_day {
            Some(day - self.start_day + 1)
        } else if month == self.end_month && day <= self.end_day {
            self.length.checked_sub(self.end_day).map(|offset| offset + day)
        } else {
            None
        }
    }

    /// Zero-based verse index for `date`: `day - 1` inside the window, 0 outside.
    pub fn default_verse_index(&self, date: NaiveDate) -> usize {
        self.day_number(date)
            .map(|day| day.saturating_sub(1) as usize)
            .unwrap_or(0)
    }

    /// Human-readable status for `date`, e.g. `"Margazhi Day 1 - December 16, 2025"`.
    pub fn status_line(&self, date: NaiveDate) -> String {
        match self.day_number(date) {
            Some(day) => format!("{} Day {} - {}", self.name, day, format_date(date)),
            None => format!("Outside {} period - {}", self.name, format_date(date)),
        }
    }

    /// Checks that the thresholds describe a usable window.
    pub fn validate(&self) -> Result<(), String> {
        for (label, month) in [("start_month", self.start_month), ("end_month", self.end_month)] {
            if !(1..=12).contains(&month) {
                return Err(format!("{label} must be in 1..=12, got {month}"));
            }
        }
        for (label, day) in [("start_day", self.start_day), ("end_day", self.end_day)] {
            if !(1..=31).contains(&day) {
                return Err(format!("{label} must be in 1..=31, got {day}"));
            }
        }
        if self.start_month == self.end_month {
            return Err("start_month and end_month must differ".to_string());
        }
        if self.end_day >= self.length {
            return Err(format!(
                "end_day ({}) must be smaller than length ({})",
                self.end_day, self.length
            ));
        }
        // A 31-day start month must not run into the end month's day numbers
        let start_days = 31 - self.start_day + 1;
        if start_days > self.length - self.end_day {
            return Err(format!(
                "start_day ({}) leaves {} start-month days, but only {} fit before end_day ({})",
                self.start_day,
                start_days,
                self.length - self.end_day,
                self.end_day
            ));
        }
        Ok(())
    }
}

/// Long en-US date form: `"January 5, 2026"`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_start_month_days_count_from_sixteenth() {
        let period = ObservancePeriod::margazhi();
        for day in 16..=31 {
            assert_eq!(period.day_number(date(2025, 12, day)), Some(day - 15));
        }
        assert_eq!(period.day_number(date(2025, 12, 16)), Some(1));
        assert_eq!(period.day_number(date(2025, 12, 31)), Some(16));
    }

    #[test]
    fn test_end_month_days_continue_to_thirty() {
        let period = ObservancePeriod::margazhi();
        for day in 1..=14 {
            assert_eq!(period.day_number(date(2026, 1, day)), Some(16 + day));
        }
        assert_eq!(period.day_number(date(2026, 1, 1)), Some(17));
        assert_eq!(period.day_number(date(2026, 1, 14)), Some(30));
    }

    #[test]
    fn test_dates_outside_window_are_not_in_period() {
        let period = ObservancePeriod::margazhi();
        assert_eq!(period.day_number(date(2025, 12, 15)), None);
        assert_eq!(period.day_number(date(2025, 12, 1)), None);
        assert_eq!(period.day_number(date(2026, 1, 15)), None);
        assert_eq!(period.day_number(date(2026, 1, 31)), None);
        assert_eq!(period.day_number(date(2026, 2, 10)), None);
        assert_eq!(period.day_number(date(2026, 10, 16)), None);
    }

    #[test]
    fn test_every_day_of_a_year_yields_valid_result() {
        let period = ObservancePeriod::margazhi();
        let mut day = date(2024, 1, 1);
        let mut in_period = 0;
        while day.year() == 2024 {
            if let Some(n) = period.day_number(day) {
                assert!((1..=30).contains(&n), "{day} gave {n}");
                in_period += 1;
            }
            day = day.succ_opt().unwrap();
        }
        // Jan 1-14 plus Dec 16-31
        assert_eq!(in_period, 30);
    }

    #[test]
    fn test_default_verse_index() {
        let period = ObservancePeriod::margazhi();
        assert_eq!(period.default_verse_index(date(2025, 12, 16)), 0);
        assert_eq!(period.default_verse_index(date(2025, 12, 25)), 9);
        assert_eq!(period.default_verse_index(date(2026, 1, 14)), 29);
        assert_eq!(period.default_verse_index(date(2026, 6, 1)), 0);
    }

    #[test]
    fn test_status_line() {
        let period = ObservancePeriod::margazhi();
        assert_eq!(
            period.status_line(date(2025, 12, 16)),
            "Margazhi Day 1 - December 16, 2025"
        );
        assert_eq!(
            period.status_line(date(2026, 1, 5)),
            "Margazhi Day 21 - January 5, 2026"
        );
        assert_eq!(
            period.status_line(date(2026, 10, 16)),
            "Outside Margazhi period - October 16, 2026"
        );
    }

    #[test]
    fn test_custom_thresholds() {
        let period = ObservancePeriod {
            name: "Thai".to_string(),
            start_month: 1,
            start_day: 15,
            end_month: 2,
            end_day: 12,
            length: 29,
        };
        assert!(period.validate().is_ok());
        assert_eq!(period.day_number(date(2026, 1, 15)), Some(1));
        assert_eq!(period.day_number(date(2026, 2, 1)), Some(18));
        assert_eq!(period.day_number(date(2026, 2, 12)), Some(29));
        assert_eq!(period.day_number(date(2026, 2, 13)), None);
    }

    #[test]
    fn test_validate_rejects_bad_thresholds() {
        let mut period = ObservancePeriod::margazhi();
        assert!(period.validate().is_ok());

        period.start_month = 13;
        assert!(period.validate().unwrap_err().contains("start_month"));

        let mut period = ObservancePeriod::margazhi();
        period.end_day = 0;
        assert!(period.validate().unwrap_err().contains("end_day"));

        let mut period = ObservancePeriod::margazhi();
        period.end_month = 12;
        assert!(period.validate().is_err());

        let mut period = ObservancePeriod::margazhi();
        period.length = 14;
        assert!(period.validate().unwrap_err().contains("length"));

        // Dec 31 would be day 31 of a 30-day period
        let mut period = ObservancePeriod::margazhi();
        period.start_day = 1;
        assert!(period.validate().unwrap_err().contains("start_day"));

        // Dec 28-31 would repeat the day numbers of Jan 3-6
        let mut period = ObservancePeriod::margazhi();
        period.start_day = 10;
        assert!(period.validate().unwrap_err().contains("start_day"));
    }

    #[test]
    fn test_valid_periods_number_days_once_within_length() {
        let thai = ObservancePeriod {
            name: "Thai".to_string(),
            start_month: 1,
            start_day: 15,
            end_month: 2,
            end_day: 12,
            length: 29,
        };
        for period in [ObservancePeriod::margazhi(), thai] {
            assert!(period.validate().is_ok());
            let mut previous: Option<(NaiveDate, u32)> = None;
            let mut day = date(2025, 1, 1);
            while day.year() < 2027 {
                if let Some(n) = period.day_number(day) {
                    assert!((1..=period.length).contains(&n), "{day} gave {n}");
                    // Consecutive dates inside the window count up by one
                    if let Some((prev_day, prev_n)) = previous
                        && prev_day.succ_opt() == Some(day)
                    {
                        assert_eq!(n, prev_n + 1, "{prev_day} gave {prev_n} but {day} gave {n}");
                    }
                    previous = Some((day, n));
                }
                day = day.succ_opt().unwrap();
            }
        }
    }

    #[test]
    fn test_unvalidated_period_never_panics() {
        let period = ObservancePeriod {
            name: "Broken".to_string(),
            start_month: 12,
            start_day: 16,
            end_month: 1,
            end_day: 20,
            length: 10,
        };
        assert!(period.validate().is_err());
        assert_eq!(period.day_number(date(2026, 1, 5)), None);
        assert_eq!(period.default_verse_index(date(2026, 1, 5)), 0);
        assert_eq!(
            period.status_line(date(2026, 1, 5)),
            "Outside Broken period - January 5, 2026"
        );
        assert_eq!(period.day_number(date(2025, 12, 20)), Some(5));
    }
}
