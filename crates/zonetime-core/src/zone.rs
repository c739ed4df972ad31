//! Timezone resolution and wall-clock time.
//!
//! Resolution goes through the timezone database bundled with `jiff`, so the
//! same identifier set is available regardless of the host platform.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp, Zoned};

use crate::error::{Result, ZoneError};

/// An instant's wall-clock time in a named timezone, together with whether
/// that zone is observing daylight-saving time at the instant.
///
/// Displays as zero-padded 24-hour `HH:MM`, suffixed with `" (DST)"` while
/// daylight-saving time is in effect. No seconds, no abbreviation, no offset.
#[derive(Debug, Clone)]
pub struct ZoneTime {
    zoned: Zoned,
    dst: bool,
}

impl ZoneTime {
    /// Whether the zone observes daylight-saving time at this instant.
    pub fn is_dst(&self) -> bool {
        self.dst
    }
}

impl fmt::Display for ZoneTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.zoned.strftime("%H:%M"))?;
        if self.dst {
            write!(f, " (DST)")?;
        }
        Ok(())
    }
}

/// Resolves a timezone identifier and computes the wall-clock time of `now`
/// in that zone.
///
/// The daylight-saving flag is derived from the zone's rule set at `now` on
/// every call; it is never cached, so a report straddling a transition picks
/// up the new phase immediately.
///
/// # Errors
///
/// Returns [`ZoneError::Resolution`] when the identifier is unknown to the
/// timezone database.
pub fn resolve(zone_id: &str, now: Timestamp) -> Result<ZoneTime> {
    let tz = TimeZone::get(zone_id).map_err(|source| ZoneError::resolution(zone_id, source))?;
    let dst = tz.to_offset_info(now).dst().is_dst();
    Ok(ZoneTime {
        zoned: now.to_zoned(tz),
        dst,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2022-01-01 00:00:00 UTC
    const WINTER: i64 = 1640995200;
    // 2022-07-01 12:00:00 UTC
    const SUMMER: i64 = 1656676800;

    fn at(second: i64) -> Timestamp {
        Timestamp::from_second(second).unwrap()
    }

    #[test]
    fn test_resolve_utc_midnight_zero_padded() {
        let time = resolve("UTC", at(WINTER)).unwrap();
        assert_eq!(format!("{}", time), "00:00");
    }

    #[test]
    fn test_resolve_new_york_summer_is_dst() {
        let time = resolve("America/New_York", at(SUMMER)).unwrap();
        assert!(time.is_dst());
        assert_eq!(format!("{}", time), "08:00 (DST)");
    }

    #[test]
    fn test_resolve_new_york_winter_is_not_dst() {
        let time = resolve("America/New_York", at(WINTER)).unwrap();
        assert!(!time.is_dst());
        // Midnight UTC on Jan 1 is still Dec 31 evening in New York
        assert_eq!(format!("{}", time), "19:00");
    }

    #[test]
    fn test_resolve_tokyo_never_dst() {
        for second in [WINTER, SUMMER] {
            let time = resolve("Asia/Tokyo", at(second)).unwrap();
            assert!(!time.is_dst());
        }
    }

    #[test]
    fn test_resolve_honolulu_summer_not_dst() {
        let time = resolve("Pacific/Honolulu", at(SUMMER)).unwrap();
        assert!(!time.is_dst());
        assert_eq!(format!("{}", time), "02:00");
    }

    #[test]
    fn test_resolve_kolkata_half_hour_offset() {
        let time = resolve("Asia/Kolkata", at(WINTER)).unwrap();
        assert_eq!(format!("{}", time), "05:30");
    }

    #[test]
    fn test_resolve_unknown_zone_fails() {
        let err = resolve("Invalid/Timezone", at(WINTER)).unwrap_err();
        assert!(err.to_string().contains("Invalid/Timezone"));
    }
}
