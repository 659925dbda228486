//! Time utilities: weekly time buckets and timezone-aware parsing.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One hour-long slot in the weekly cycle.
///
/// `weekday` counts from Sunday = 0, so Monday 09:xx is `1_9` no matter
/// which calendar week it falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeBucket {
    weekday: u8,
    hour: u8,
}

impl TimeBucket {
    pub fn new(weekday: u8, hour: u8) -> Option<Self> {
        if weekday <= 6 && hour <= 23 {
            Some(Self { weekday, hour })
        } else {
            None
        }
    }

    pub fn weekday(&self) -> u8 {
        self.weekday
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Bucket of `when` as seen on a wall clock in `tz`.
    pub fn from_utc(when: DateTime<Utc>, tz: Tz) -> Self {
        Self::from_local(&when.with_timezone(&tz))
    }

    pub fn from_local<Z: TimeZone>(when: &DateTime<Z>) -> Self {
        Self {
            weekday: when.weekday().num_days_from_sunday() as u8,
            hour: when.hour() as u8,
        }
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.weekday, self.hour)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidBucket(pub String);

impl fmt::Display for InvalidBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid time bucket key '{}'", self.0)
    }
}

impl std::error::Error for InvalidBucket {}

impl FromStr for TimeBucket {
    type Err = InvalidBucket;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s.split_once('_').ok_or_else(|| InvalidBucket(s.to_string()))?;
        let weekday = w.parse().map_err(|_| InvalidBucket(s.to_string()))?;
        let hour = h.parse().map_err(|_| InvalidBucket(s.to_string()))?;
        TimeBucket::new(weekday, hour).ok_or_else(|| InvalidBucket(s.to_string()))
    }
}

impl Serialize for TimeBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeBucket {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Parse an IANA zone name like "Asia/Tokyo".
pub fn parse_tz(tz: &str) -> Result<Tz, String> {
    tz.parse().map_err(|_| format!("invalid timezone: {tz}"))
}

/// Parse a local time like "2026-02-16 09:30" in `tz`, returning UTC.
pub fn parse_local_to_utc(local: &str, tz: Tz) -> Result<DateTime<Utc>, String> {
    let ndt = NaiveDateTime::parse_from_str(local, "%Y-%m-%d %H:%M")
        .map_err(|e| format!("invalid local datetime '{local}': {e}"))?;

    let local_dt = tz
        .from_local_datetime(&ndt)
        .single()
        .ok_or_else(|| format!("ambiguous or invalid local time (DST?): {local} {tz}"))?;

    Ok(local_dt.with_timezone(&Utc))
}
