//! Julian date handling for solar event calculations.
//!
//! All internal angle-to-time conversions work on UTC-based Julian dates. Conversion to
//! the caller's time zone only happens when a result leaves the crate.

use crate::math::round;
use crate::{Error, Result};
use chrono::{DateTime, TimeZone, Timelike, Utc};

/// Seconds per day (86,400)
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
pub(crate) const J2000_JDN: f64 = 2_451_545.0;

/// Julian date of the Unix epoch (1970-01-01 00:00:00 UTC)
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Largest whole-second offset from the Unix epoch we try to hand to chrono.
const MAX_UNIX_SECONDS: f64 = 8.0e15;

/// Julian date (UTC based) with a fractional day part.
///
/// The integer part changes at noon UTC, so 2000-01-01 00:00 UTC is 2451544.5.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDate {
    jd: f64,
}

impl JulianDate {
    /// Wraps a raw Julian date value.
    #[must_use]
    pub const fn from_julian_date(jd: f64) -> Self {
        Self { jd }
    }

    /// Creates a Julian date from a timezone-aware chrono `DateTime`.
    ///
    /// The offset is applied, so the same instant in any zone maps to the same Julian date.
    ///
    /// # Example
    /// ```
    /// # use solar_events::time::JulianDate;
    /// # use chrono::{DateTime, FixedOffset};
    /// let datetime = "2000-01-01T13:00:00+01:00".parse::<DateTime<FixedOffset>>().unwrap();
    /// assert_eq!(JulianDate::from_datetime(&datetime).julian_date(), 2_451_545.0);
    /// ```
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        let seconds =
            datetime.timestamp() as f64 + f64::from(datetime.timestamp_subsec_nanos()) / 1e9;
        Self::from_unix_seconds(seconds)
    }

    /// Creates a Julian date from proleptic Gregorian UTC components.
    ///
    /// # Errors
    /// Returns error if any component is outside its valid range (month 1-12, day within the
    /// month, hour 0-23, minute 0-59, second 0-59.999).
    ///
    /// # Example
    /// ```
    /// # use solar_events::time::JulianDate;
    /// let jd = JulianDate::from_utc(2019, 6, 24, 12, 0, 0.0).unwrap();
    /// assert_eq!(jd.julian_date(), 2_458_659.0);
    /// ```
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_datetime(
                "second must be between 0 and 59.999...",
            ));
        }

        let day_number = julian_day_number(year, month, day) as f64;
        let jd = day_number
            + (f64::from(hour) - 12.0) / 24.0
            + f64::from(minute) / 1440.0
            + second / SECONDS_PER_DAY;
        Ok(Self { jd })
    }

    /// Julian date of 12:00 local time on the calendar date of `datetime`, in its own offset.
    pub(crate) fn local_noon<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        let since_midnight = i64::from(datetime.naive_local().num_seconds_from_midnight());
        let noon = datetime.timestamp() - since_midnight + 43_200;
        Self::from_unix_seconds(noon as f64)
    }

    fn from_unix_seconds(seconds: f64) -> Self {
        Self {
            jd: UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY,
        }
    }

    /// Gets the Julian Date (JD) value.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.jd
    }

    /// Days elapsed since the J2000.0 epoch (may be negative).
    #[must_use]
    pub fn days_since_j2000(&self) -> f64 {
        self.jd - J2000_JDN
    }

    /// Shifts the date by a (fractional) number of days.
    #[must_use]
    pub fn add_days(self, days: f64) -> Self {
        Self { jd: self.jd + days }
    }

    /// The instant halfway between two Julian dates.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            jd: (self.jd + other.jd) / 2.0,
        }
    }

    /// Converts to a UTC `DateTime`, rounded to the nearest whole second.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the instant is not finite or outside chrono's range.
    pub fn to_utc(&self) -> Result<DateTime<Utc>> {
        let seconds = round((self.jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY);
        if !seconds.is_finite() || seconds.abs() > MAX_UNIX_SECONDS {
            return Err(Error::invalid_datetime(
                "instant is outside the supported range",
            ));
        }

        DateTime::from_timestamp(seconds as i64, 0).ok_or(Error::invalid_datetime(
            "instant is outside the supported range",
        ))
    }

    /// Converts to a `DateTime` in the given zone, rounded to the nearest whole second.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the instant is not finite or outside chrono's range.
    pub fn to_datetime<Tz: TimeZone>(&self, tz: &Tz) -> Result<DateTime<Tz>> {
        Ok(self.to_utc()?.with_timezone(tz))
    }
}

/// Integer Julian Day Number of a proleptic Gregorian date (Fliegel & Van Flandern).
fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - i64::from(month)) / 12;
    let y = i64::from(year) + 4800 - a;
    let m = i64::from(month) + 12 * a - 3;
    i64::from(day) + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_julian_date_creation() {
        let jd = JulianDate::from_utc(2000, 1, 1, 12, 0, 0.0).unwrap();

        // J2000.0 epoch should be exactly 2451545.0
        assert!((jd.julian_date() - J2000_JDN).abs() < EPSILON);
        assert!(jd.days_since_j2000().abs() < EPSILON);
    }

    #[test]
    fn test_specific_julian_dates() {
        let unix_epoch = JulianDate::from_utc(1970, 1, 1, 0, 0, 0.0).unwrap();
        assert!((unix_epoch.julian_date() - UNIX_EPOCH_JD).abs() < EPSILON);

        let y2k = JulianDate::from_utc(2000, 1, 1, 0, 0, 0.0).unwrap();
        assert!((y2k.julian_date() - 2_451_544.5).abs() < EPSILON);

        let jd = JulianDate::from_utc(2019, 1, 24, 18, 30, 0.0).unwrap();
        assert!((jd.julian_date() - 2_458_508.270_833_333).abs() < 1e-6);
    }

    #[test]
    fn test_julian_date_validation() {
        assert!(JulianDate::from_utc(2024, 13, 1, 0, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(2024, 0, 1, 0, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(2024, 1, 32, 0, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(2024, 1, 0, 0, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(2024, 1, 1, 24, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(2024, 1, 1, 0, 60, 0.0).is_err());
        assert!(JulianDate::from_utc(2024, 1, 1, 0, 0, 60.0).is_err());
    }

    #[test]
    fn test_proleptic_gregorian_leap_years() {
        assert!(JulianDate::from_utc(2024, 2, 29, 0, 0, 0.0).is_ok());
        assert!(JulianDate::from_utc(2000, 2, 29, 0, 0, 0.0).is_ok());
        assert!(JulianDate::from_utc(1900, 2, 29, 0, 0, 0.0).is_err());
        // No Julian calendar before 1582: 1500 is not a leap year here
        assert!(JulianDate::from_utc(1500, 2, 29, 0, 0, 0.0).is_err());
        assert!(JulianDate::from_utc(2019, 4, 31, 0, 0, 0.0).is_err());
    }

    #[test]
    fn test_from_datetime_matches_components() {
        let datetime = "2019-06-24T12:00:00+02:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let from_datetime = JulianDate::from_datetime(&datetime);
        let from_components = JulianDate::from_utc(2019, 6, 24, 10, 0, 0.0).unwrap();

        assert!((from_datetime.julian_date() - from_components.julian_date()).abs() < EPSILON);
    }

    #[test]
    fn test_to_datetime_rounds_to_whole_seconds() {
        let jd = JulianDate::from_utc(2019, 6, 24, 1, 15, 15.4).unwrap();
        let utc = jd.to_utc().unwrap();
        assert_eq!(
            utc,
            NaiveDate::from_ymd_opt(2019, 6, 24)
                .unwrap()
                .and_hms_opt(1, 15, 15)
                .unwrap()
                .and_utc()
        );

        let jd = JulianDate::from_utc(2019, 6, 24, 1, 15, 15.6).unwrap();
        assert_eq!(utc.timestamp() + 1, jd.to_utc().unwrap().timestamp());

        let berlin = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = jd.to_datetime(&berlin).unwrap();
        assert_eq!(local.to_rfc3339(), "2019-06-24T03:15:16+02:00");
    }

    #[test]
    fn test_to_datetime_rejects_unrepresentable_instants() {
        assert!(JulianDate::from_julian_date(f64::NAN).to_utc().is_err());
        assert!(JulianDate::from_julian_date(1.0e15).to_utc().is_err());
    }

    #[test]
    fn test_local_noon() {
        let evening = "2019-01-24T23:30:00-05:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let noon = JulianDate::local_noon(&evening);
        let expected = JulianDate::from_utc(2019, 1, 24, 17, 0, 0.0).unwrap();

        assert!((noon.julian_date() - expected.julian_date()).abs() < EPSILON);
    }

    #[test]
    fn test_midpoint_and_add_days() {
        let dusk = JulianDate::from_julian_date(2_458_508.25);
        let dawn = JulianDate::from_julian_date(2_458_508.75);

        assert_eq!(dusk.midpoint(dawn).julian_date(), 2_458_508.5);
        assert_eq!(dusk.add_days(1.0).julian_date(), 2_458_509.25);
        assert!(dusk < dawn);
    }
}
