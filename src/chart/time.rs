use chrono::{DateTime, Datelike, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::{OffsetComponents, Tz};
use swisseph::swe::julday;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimeError {
    #[error("invalid calendar date {year}-{month}-{day}")]
    InvalidDate { year: i64, month: i64, day: i64 },
    #[error("invalid time of day {hour}:{minute}:{second}")]
    InvalidTime { hour: i64, minute: i64, second: i64 },
    #[error("local time {0} does not exist in {1}")]
    NonexistentLocalTime(NaiveDateTime, Tz),
}

/// Civil date and time as entered, before any zone is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTimestamp {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
}

impl LocalTimestamp {
    fn naive(&self) -> Result<NaiveDateTime, TimeError> {
        let invalid_date = || TimeError::InvalidDate {
            year: self.year,
            month: self.month,
            day: self.day,
        };
        let invalid_time = || TimeError::InvalidTime {
            hour: self.hour,
            minute: self.minute,
            second: self.second,
        };

        let date = NaiveDate::from_ymd_opt(
            i32::try_from(self.year).map_err(|_| invalid_date())?,
            u32::try_from(self.month).map_err(|_| invalid_date())?,
            u32::try_from(self.day).map_err(|_| invalid_date())?,
        )
        .ok_or_else(invalid_date)?;

        date.and_hms_opt(
            u32::try_from(self.hour).map_err(|_| invalid_time())?,
            u32::try_from(self.minute).map_err(|_| invalid_time())?,
            u32::try_from(self.second).map_err(|_| invalid_time())?,
        )
        .ok_or_else(invalid_time)
    }

    /// The UTC instant this local time denotes in `zone`.
    ///
    /// A time repeated by a DST fall-back resolves to its standard-time
    /// instance; a time skipped by a spring-forward gap is rejected.
    pub fn to_utc(&self, zone: Tz) -> Result<DateTime<Utc>, TimeError> {
        let naive = self.naive()?;
        let local = match zone.from_local_datetime(&naive) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(earliest, latest) => [earliest, latest]
                .into_iter()
                .find(|dt| dt.offset().dst_offset().is_zero())
                .unwrap_or(earliest),
            LocalResult::None => return Err(TimeError::NonexistentLocalTime(naive, zone)),
        };
        Ok(local.with_timezone(&Utc))
    }
}

/// GREG_CAL
const GREGORIAN: u32 = 1;

/// Julian Day for a proleptic Gregorian date and a fractional hour of day.
pub fn julian_day(year: i32, month: u32, day: u32, hours: f64) -> f64 {
    julday(year, month as i32, day as i32, hours, GREGORIAN)
}

/// Julian Day (UT) of a UTC instant, to the second.
pub fn julian_day_ut(instant: DateTime<Utc>) -> f64 {
    let hours =
        instant.hour() as f64 + instant.minute() as f64 / 60.0 + instant.second() as f64 / 3600.0;
    julian_day(instant.year(), instant.month(), instant.day(), hours)
}
