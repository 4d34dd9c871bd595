use std::{fmt, ops::Add};

use time::{Duration, OffsetDateTime};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// A point in time with millisecond precision (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn from_secs(seconds: i64) -> Self {
        Self(seconds * 1000)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    pub const fn as_secs(self) -> i64 {
        self.0 / 1000
    }

    /// Number of whole days since the unix epoch.
    pub const fn day_number(self) -> i64 {
        self.0.div_euclid(MILLIS_PER_DAY)
    }

    pub fn add_days(self, days: u32) -> Self {
        self + Duration::days(days.into())
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self((from.unix_timestamp_nanos() / 1_000_000) as i64)
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;
    fn add(self, rhs: Duration) -> Self::Output {
        Self(self.0.saturating_add(rhs.whole_milliseconds() as i64))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.0) * 1_000_000) {
            Ok(dt) => write!(f, "{dt}"),
            Err(_) => write!(f, "{}ms", self.0),
        }
    }
}
