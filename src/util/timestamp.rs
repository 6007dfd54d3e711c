//! Local date-time to Unix timestamp conversion
//!
//! Minting deadlines are entered as `datetime-local` strings
//! (`YYYY-MM-DDTHH:MM`, optionally with seconds) without any zone information.
//! They are interpreted in the configured zone and floored to whole seconds.

use chrono::{
    DateTime, Duration, FixedOffset, Local, LocalResult, NaiveDateTime, Offset, TimeZone,
};
use thiserror::Error;

const DATETIME_LOCAL_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("expected YYYY-MM-DDTHH:MM, got '{0}'")]
    Malformed(String),
    #[error("{0} is before the Unix epoch")]
    BeforeEpoch(String),
    #[error("{0} does not exist in the configured time zone")]
    Unresolvable(String),
    #[error("invalid UTC offset '{0}', expected +HH:MM or -HH:MM")]
    InvalidOffset(String),
}

/// Time zone used to interpret local date-times
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LocalZone {
    /// The zone of the running process
    #[default]
    System,
    /// A fixed UTC offset
    Fixed(FixedOffset),
}

impl LocalZone {
    /// Parse `+HH:MM`, `-HH:MM`, `Z` or `UTC` into a fixed zone.
    pub fn parse_offset(s: &str) -> Result<Self, TimestampError> {
        let s = s.trim();
        let invalid = || TimestampError::InvalidOffset(s.to_string());
        if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
            return FixedOffset::east_opt(0).map(Self::Fixed).ok_or_else(invalid);
        }

        let (sign, rest) = match s.as_bytes().first() {
            Some(b'+') => (1, &s[1..]),
            Some(b'-') => (-1, &s[1..]),
            _ => return Err(invalid()),
        };
        let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
        let hours: i32 = hours.parse().map_err(|_| invalid())?;
        let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
        if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
            return Err(invalid());
        }

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .map(Self::Fixed)
            .ok_or_else(invalid)
    }

    /// Convert an optional deadline to Unix seconds; empty input means 0.
    pub fn unix_seconds(&self, input: &str) -> Result<u64, TimestampError> {
        match self {
            Self::System => expiration_to_unix_seconds(input, &Local),
            Self::Fixed(offset) => expiration_to_unix_seconds(input, offset),
        }
    }
}

/// Parse a `datetime-local` string.
pub fn parse_datetime_local(input: &str) -> Result<NaiveDateTime, TimestampError> {
    let input = input.trim();
    DATETIME_LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .ok_or_else(|| TimestampError::Malformed(input.to_string()))
}

/// Convert an optional local deadline to Unix seconds in zone `tz`.
///
/// Ambiguous local times (clocks turned back) resolve to the earlier instant.
/// Times inside a spring-forward gap use the offset in effect before the gap,
/// which moves them forward by the gap length.
pub fn expiration_to_unix_seconds<Tz: TimeZone>(
    input: &str,
    tz: &Tz,
) -> Result<u64, TimestampError> {
    if input.trim().is_empty() {
        return Ok(0);
    }

    let naive = parse_datetime_local(input)?;
    let seconds = match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.timestamp(),
        LocalResult::Ambiguous(earliest, _) => earliest.timestamp(),
        LocalResult::None => {
            let unresolvable = || TimestampError::Unresolvable(input.trim().to_string());
            let before = naive
                .checked_sub_signed(Duration::hours(24))
                .ok_or_else(unresolvable)?;
            let offset = tz
                .from_local_datetime(&before)
                .earliest()
                .ok_or_else(unresolvable)?
                .offset()
                .fix();
            let seconds = naive.and_utc().timestamp() - i64::from(offset.local_minus_utc());
            // The shifted instant must still be representable
            DateTime::from_timestamp(seconds, 0).ok_or_else(unresolvable)?;
            seconds
        }
    };

    u64::try_from(seconds).map_err(|_| TimestampError::BeforeEpoch(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(expiration_to_unix_seconds("", &Utc), Ok(0));
        assert_eq!(expiration_to_unix_seconds("   ", &Local), Ok(0));
        assert_eq!(LocalZone::System.unix_seconds(""), Ok(0));
    }

    #[test]
    fn test_utc_and_fixed_offsets() {
        assert_eq!(
            expiration_to_unix_seconds("2025-01-01T00:00", &Utc),
            Ok(1_735_689_600)
        );

        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            expiration_to_unix_seconds("2025-01-01T00:00", &plus_two),
            Ok(1_735_682_400)
        );
    }

    #[test]
    fn test_system_zone_matches_local_clock() {
        let expected = Local
            .with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
            .earliest()
            .unwrap()
            .timestamp() as u64;
        assert_eq!(LocalZone::System.unix_seconds("2025-01-01T00:00"), Ok(expected));
    }

    #[test]
    fn test_seconds_are_floored() {
        assert_eq!(
            expiration_to_unix_seconds("2025-01-01T00:00:59.999", &Utc),
            Ok(1_735_689_659)
        );
        assert_eq!(
            expiration_to_unix_seconds("2025-01-01T00:00:30", &Utc),
            Ok(1_735_689_630)
        );
    }

    #[test]
    fn test_malformed_and_before_epoch() {
        assert!(matches!(
            expiration_to_unix_seconds("tomorrow", &Utc),
            Err(TimestampError::Malformed(_))
        ));
        assert!(matches!(
            expiration_to_unix_seconds("2025-13-01T00:00", &Utc),
            Err(TimestampError::Malformed(_))
        ));
        assert!(matches!(
            expiration_to_unix_seconds("1969-12-31T23:59", &Utc),
            Err(TimestampError::BeforeEpoch(_))
        ));
    }

    /// US Eastern rules for 2025: EDT from 2025-03-09 07:00 UTC to
    /// 2025-11-02 06:00 UTC, EST otherwise.
    #[derive(Debug, Clone, Copy)]
    struct Eastern2025;

    impl Eastern2025 {
        fn est() -> FixedOffset {
            FixedOffset::west_opt(5 * 3600).unwrap()
        }

        fn edt() -> FixedOffset {
            FixedOffset::west_opt(4 * 3600).unwrap()
        }
    }

    impl TimeZone for Eastern2025 {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            Eastern2025
        }

        fn offset_from_local_date(&self, local: &chrono::NaiveDate) -> LocalResult<FixedOffset> {
            self.offset_from_local_datetime(&local.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            // Earlier instant first: EDT is the larger offset
            let matches: Vec<FixedOffset> = [Self::edt(), Self::est()]
                .into_iter()
                .filter(|offset| {
                    let utc = *local - Duration::seconds(i64::from(offset.local_minus_utc()));
                    self.offset_from_utc_datetime(&utc) == *offset
                })
                .collect();
            match matches.as_slice() {
                [] => LocalResult::None,
                [single] => LocalResult::Single(*single),
                [earliest, latest, ..] => LocalResult::Ambiguous(*earliest, *latest),
            }
        }

        fn offset_from_utc_date(&self, utc: &chrono::NaiveDate) -> FixedOffset {
            self.offset_from_utc_datetime(&utc.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            let start = parse_datetime_local("2025-03-09T07:00").unwrap();
            let end = parse_datetime_local("2025-11-02T06:00").unwrap();
            if *utc >= start && *utc < end {
                Self::edt()
            } else {
                Self::est()
            }
        }
    }

    #[test]
    fn test_dst_single_times() {
        // 2025-07-01 12:00 EDT
        assert_eq!(
            expiration_to_unix_seconds("2025-07-01T12:00", &Eastern2025),
            Ok(1_751_385_600)
        );
    }

    #[test]
    fn test_dst_gap_moves_forward() {
        assert!(matches!(
            Eastern2025.from_local_datetime(&parse_datetime_local("2025-03-09T02:30").unwrap()),
            LocalResult::None
        ));
        // 02:30 does not exist; it resolves to 03:30 EDT (07:30 UTC)
        assert_eq!(
            expiration_to_unix_seconds("2025-03-09T02:30", &Eastern2025),
            Ok(1_741_505_400)
        );
    }

    #[test]
    fn test_dst_overlap_takes_earlier_instant() {
        assert!(matches!(
            Eastern2025.from_local_datetime(&parse_datetime_local("2025-11-02T01:30").unwrap()),
            LocalResult::Ambiguous(_, _)
        ));
        // 01:30 EDT (05:30 UTC), not 01:30 EST (06:30 UTC)
        assert_eq!(
            expiration_to_unix_seconds("2025-11-02T01:30", &Eastern2025),
            Ok(1_762_061_400)
        );
    }

    #[test]
    fn test_out_of_range_years_are_errors() {
        let plus_two = LocalZone::parse_offset("+02:00").unwrap();
        assert!(matches!(
            plus_two.unix_seconds("-262143-01-01T00:00"),
            Err(TimestampError::Unresolvable(_))
        ));

        let minus_five = LocalZone::parse_offset("-05:00").unwrap();
        assert!(matches!(
            minus_five.unix_seconds("+262142-12-31T23:59"),
            Err(TimestampError::Unresolvable(_))
        ));
    }

    #[test]
    fn test_parse_offset() {
        assert_eq!(
            LocalZone::parse_offset("+05:30"),
            Ok(LocalZone::Fixed(FixedOffset::east_opt(19_800).unwrap()))
        );
        assert_eq!(
            LocalZone::parse_offset("-08:00"),
            Ok(LocalZone::Fixed(FixedOffset::west_opt(28_800).unwrap()))
        );
        assert_eq!(
            LocalZone::parse_offset("UTC"),
            Ok(LocalZone::Fixed(FixedOffset::east_opt(0).unwrap()))
        );
        assert!(LocalZone::parse_offset("0200").is_err());
        assert!(LocalZone::parse_offset("+25:00").is_err());
    }
}
