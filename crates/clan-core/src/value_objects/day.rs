//! UTC calendar day - the snapshot granularity for stats and daily goals
//!
//! Daily-goal uniqueness and stats snapshots are always keyed by the UTC
//! midnight boundary, never local time, so behavior is identical for
//! members in different timezones.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};

/// One UTC calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcDay(NaiveDate);

impl UtcDay {
    /// The day containing a given instant
    #[must_use]
    pub fn of(instant: DateTime<Utc>) -> Self {
        Self(instant.date_naive())
    }

    /// The current UTC day
    #[must_use]
    pub fn today() -> Self {
        Self::of(Utc::now())
    }

    /// Wrap an already-truncated date
    #[must_use]
    pub const fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The snapshot date used as the stats ledger key
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// Inclusive start of the day window (00:00:00Z)
    #[must_use]
    pub fn start(self) -> DateTime<Utc> {
        self.0.and_time(NaiveTime::MIN).and_utc()
    }

    /// Exclusive end of the day window (next midnight)
    #[must_use]
    pub fn end(self) -> DateTime<Utc> {
        self.0
            .checked_add_days(Days::new(1))
            .unwrap_or(self.0)
            .and_time(NaiveTime::MIN)
            .and_utc()
    }

    /// Check whether an instant falls inside this day's [start, end) window
    #[must_use]
    pub fn contains(self, instant: DateTime<Utc>) -> bool {
        instant >= self.start() && instant < self.end()
    }
}

impl std::fmt::Display for UtcDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_day_of_instant() {
        let instant = Utc.with_ymd_and_hms(2025, 6, 1, 23, 59, 59).unwrap();
        assert_eq!(UtcDay::of(instant).date(), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    }

    #[test]
    fn test_window_bounds() {
        let day = UtcDay::from_date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(day.start(), Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap());
        assert_eq!(day.end(), Utc.with_ymd_and_hms(2025, 6, 2, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_contains_half_open() {
        let day = UtcDay::from_date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert!(day.contains(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()));
        assert!(day.contains(Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()));
        assert!(!day.contains(Utc.with_ymd_and_hms(2025, 6, 2, 0, 0, 0).unwrap()));
        assert!(!day.contains(Utc.with_ymd_and_hms(2025, 5, 31, 23, 59, 59).unwrap()));
    }

    #[test]
    fn test_two_submissions_same_utc_day() {
        // 09:00 and 10:00 on the same date share a window
        let nine = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
        let ten = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
        assert_eq!(UtcDay::of(nine), UtcDay::of(ten));
        assert!(UtcDay::of(nine).contains(ten));
    }
}
