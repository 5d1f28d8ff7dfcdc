//! Codec time zone.
//!
//! Accepted forms: `UTC`, `GMT`, `UT`, `Z`, `Etc/UTC`, `Etc/GMT`, and fixed
//! offsets such as `+02`, `-5`, `+05:30`, `+0530`, `UTC+2`, `GMT-03:00`,
//! and IANA region IDs such as `Europe/Berlin` (case-sensitive). A region's
//! offset is looked up per instant, so daylight saving applies.

use chrono::TimeZone as _;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::CodecError;

const MAX_OFFSET_SECONDS: i32 = 18 * 3600;
const UTC_NAMES: &[&str] = &["UTC", "GMT", "UT", "Z", "ZULU", "ETC/UTC", "ETC/GMT", "ETC/UCT"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeZone {
    zone: Zone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Zone {
    Fixed(FixedOffset),
    Region(Tz),
}

impl TimeZone {
    pub fn utc() -> Self {
        Self {
            zone: Zone::Fixed(Utc.fix()),
        }
    }

    /// Zone at a fixed offset east of UTC, if within +/-18 hours.
    pub fn from_offset_seconds(seconds: i32) -> Option<Self> {
        if seconds.abs() > MAX_OFFSET_SECONDS {
            return None;
        }
        FixedOffset::east_opt(seconds).map(|offset| Self {
            zone: Zone::Fixed(offset),
        })
    }

    pub fn from_region(tz: Tz) -> Self {
        Self {
            zone: Zone::Region(tz),
        }
    }

    /// The offset, for zones that are not regions.
    pub fn fixed_offset(&self) -> Option<FixedOffset> {
        match self.zone {
            Zone::Fixed(offset) => Some(offset),
            Zone::Region(_) => None,
        }
    }

    pub fn region(&self) -> Option<Tz> {
        match self.zone {
            Zone::Fixed(_) => None,
            Zone::Region(tz) => Some(tz),
        }
    }

    /// Offset in effect at `instant`.
    pub fn offset_at(&self, instant: DateTime<Utc>) -> FixedOffset {
        match self.zone {
            Zone::Fixed(offset) => offset,
            Zone::Region(tz) => tz.offset_from_utc_datetime(&instant.naive_utc()).fix(),
        }
    }

    pub fn is_utc(&self) -> bool {
        self.fixed_offset()
            .is_some_and(|offset| offset.local_minus_utc() == 0)
    }
}

impl Default for TimeZone {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let offset = match self.zone {
            Zone::Region(tz) => return f.write_str(tz.name()),
            Zone::Fixed(offset) => offset,
        };
        if self.is_utc() {
            return f.write_str("UTC");
        }
        let seconds = offset.local_minus_utc();
        let sign = if seconds < 0 { '-' } else { '+' };
        let minutes = seconds.abs() / 60;
        write!(f, "{sign}{:02}:{:02}", minutes / 60, minutes % 60)
    }
}

impl Serialize for TimeZone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for TimeZone {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CodecError::invalid(s, "time zone");
        let trimmed = s.trim();
        let upper = trimmed.to_ascii_uppercase();
        if UTC_NAMES.contains(&upper.as_str()) {
            return Ok(Self::utc());
        }

        let offset = ["UTC", "GMT", "UT"]
            .iter()
            .find_map(|name| upper.strip_prefix(*name))
            .unwrap_or(upper.as_str());
        if let Some(seconds) = parse_offset(offset) {
            return Self::from_offset_seconds(seconds).ok_or_else(invalid);
        }
        trimmed
            .parse::<Tz>()
            .map(Self::from_region)
            .map_err(|_| invalid())
    }
}

/// Parse `+H`, `+HH`, `+HH:MM` or `+HHMM` (and the `-` forms) into seconds.
fn parse_offset(raw: &str) -> Option<i32> {
    let (sign, rest) = match raw.as_bytes().first()? {
        b'+' => (1, &raw[1..]),
        b'-' => (-1, &raw[1..]),
        _ => return None,
    };
    if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_digit() || c == ':') {
        return None;
    }

    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) if m.len() == 2 => (h, m),
        Some(_) => return None,
        None if rest.len() <= 2 => (rest, "0"),
        None if rest.len() == 4 => rest.split_at(2),
        None => return None,
    };
    if hours.is_empty() || hours.len() > 2 {
        return None;
    }

    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 18 || minutes >= 60 {
        return None;
    }
    Some(sign * (hours * 3600 + minutes * 60))
}
