//! Solar ephemeris for one solar cycle.
//!
//! Low-precision sunrise equation series referred to the J2000.0 epoch. A solar cycle is the
//! number of mean solar days since J2000.0 and indexes exactly one meridian transit at the
//! observer's longitude. Event times derived from it are accurate to about one minute for
//! dates within a few centuries of 2000.

use crate::error::check_coordinates;
use crate::math::{
    acos, asin, cos, degrees_to_radians, normalize_degrees_0_to_360, radians_to_degrees, round,
    sin,
};
use crate::time::{J2000_JDN, JulianDate};
use crate::{Horizon, PolarType, Result, SunriseResult};
use chrono::{DateTime, TimeZone};

/// Offset of the mean transit at longitude 0 from the J2000.0 epoch, in days.
const TRANSIT_EPOCH_OFFSET: f64 = 0.0009;

/// Mean anomaly at J2000.0 (degrees).
const MEAN_ANOMALY_AT_EPOCH: f64 = 357.5291;

/// Mean anomaly rate (degrees per day).
const MEAN_ANOMALY_RATE: f64 = 0.985_600_28;

/// Argument of perihelion (degrees).
const PERIHELION: f64 = 102.9372;

/// Obliquity of the ecliptic (degrees).
const OBLIQUITY: f64 = 23.439;

const MINUTES_PER_DAY: f64 = 1440.0;

/// Solar angles for one meridian transit, as seen from a given latitude.
///
/// Values are recomputed on every call and never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarAngles {
    cycle: i64,
    mean_anomaly: f64,
    ecliptic_longitude: f64,
    /// radians, kept unconverted for the hour angle
    declination: f64,
    equation_of_time: f64,
    transit: JulianDate,
    latitude: f64,
}

impl SolarAngles {
    /// Solar cycle number (mean solar days since J2000.0).
    #[must_use]
    pub const fn cycle(&self) -> i64 {
        self.cycle
    }

    /// Mean anomaly in degrees [0, 360).
    #[must_use]
    pub const fn mean_anomaly(&self) -> f64 {
        self.mean_anomaly
    }

    /// Ecliptic longitude in degrees [0, 360).
    #[must_use]
    pub const fn ecliptic_longitude(&self) -> f64 {
        self.ecliptic_longitude
    }

    /// Declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        radians_to_degrees(self.declination)
    }

    /// Equation of time in minutes (apparent minus mean solar time).
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }

    /// Meridian transit (solar noon) as a UTC Julian date.
    #[must_use]
    pub const fn transit(&self) -> JulianDate {
        self.transit
    }

    /// Observer latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    fn cos_hour_angle(&self, horizon: Horizon) -> f64 {
        let phi = degrees_to_radians(self.latitude);
        let h0 = degrees_to_radians(horizon.elevation_angle());
        (sin(h0) - sin(phi) * sin(self.declination)) / (cos(phi) * cos(self.declination))
    }

    /// Hour angle in degrees at which the sun crosses `horizon`.
    ///
    /// Returns `None` when the sun does not cross it during this cycle.
    #[must_use]
    pub fn hour_angle(&self, horizon: Horizon) -> Option<f64> {
        let cos_omega = self.cos_hour_angle(horizon);
        (-1.0..=1.0)
            .contains(&cos_omega)
            .then(|| radians_to_degrees(acos(cos_omega)))
    }

    /// Polar condition for `horizon`, `None` if the sun crosses it during this cycle.
    #[must_use]
    pub fn polar_type(&self, horizon: Horizon) -> Option<PolarType> {
        let cos_omega = self.cos_hour_angle(horizon);
        if cos_omega < -1.0 {
            Some(PolarType::AllDay)
        } else if cos_omega > 1.0 {
            Some(PolarType::AllNight)
        } else {
            None
        }
    }

    /// Upward and downward crossings of `horizon` around this transit, as UTC Julian dates.
    #[must_use]
    pub fn crossings(&self, horizon: Horizon) -> SunriseResult<JulianDate> {
        let transit = self.transit;
        match self.hour_angle(horizon) {
            Some(omega) => SunriseResult::RegularDay {
                sunrise: transit.add_days(-omega / 360.0),
                transit,
                sunset: transit.add_days(omega / 360.0),
            },
            None if self.cos_hour_angle(horizon) < -1.0 => SunriseResult::AllDay { transit },
            None => SunriseResult::AllNight { transit },
        }
    }
}

/// Calculates the solar angles for the transit nearest to `datetime`.
///
/// # Arguments
/// * `datetime` - Date and time with timezone
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
///
/// # Errors
/// Returns error for invalid coordinates (latitude outside ±90°, longitude outside ±180°)
///
/// # Example
/// ```rust
/// use solar_events::ephemeris;
/// use chrono::{DateTime, FixedOffset};
///
/// let datetime = "2019-06-24T12:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let angles = ephemeris::solar_angles(datetime, 51.44968, 6.97337).unwrap();
///
/// assert!((angles.declination() - 23.42).abs() < 0.01);
/// assert!(angles.hour_angle(solar_events::Horizon::AstronomicalTwilight).is_none());
/// ```
pub fn solar_angles<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<SolarAngles> {
    check_coordinates(latitude, longitude)?;
    let jd = JulianDate::from_datetime(&datetime);
    Ok(compute(nearest_cycle(jd, longitude), latitude, longitude))
}

/// Calculates the solar angles for an explicit solar cycle.
///
/// # Errors
/// Returns error for invalid coordinates
pub fn solar_angles_for_cycle(cycle: i64, latitude: f64, longitude: f64) -> Result<SolarAngles> {
    check_coordinates(latitude, longitude)?;
    Ok(compute(cycle, latitude, longitude))
}

/// Cycle whose transit at `longitude` is nearest to `jd`.
pub(crate) fn nearest_cycle(jd: JulianDate, longitude: f64) -> i64 {
    round(jd.days_since_j2000() - TRANSIT_EPOCH_OFFSET + longitude / 360.0) as i64
}

/// Evaluates the series for already validated coordinates.
pub(crate) fn compute(cycle: i64, latitude: f64, longitude: f64) -> SolarAngles {
    let mean_transit = J2000_JDN + TRANSIT_EPOCH_OFFSET - longitude / 360.0 + cycle as f64;

    let mean_anomaly = normalize_degrees_0_to_360(
        MEAN_ANOMALY_AT_EPOCH + MEAN_ANOMALY_RATE * (mean_transit - J2000_JDN),
    );
    let m = degrees_to_radians(mean_anomaly);

    let center = 1.9148 * sin(m) + 0.0200 * sin(2.0 * m) + 0.0003 * sin(3.0 * m);
    let ecliptic_longitude =
        normalize_degrees_0_to_360(mean_anomaly + PERIHELION + center + 180.0);
    let lambda = degrees_to_radians(ecliptic_longitude);

    let transit_correction = 0.0053 * sin(m) - 0.0069 * sin(2.0 * lambda);
    let transit = JulianDate::from_julian_date(mean_transit + transit_correction);
    let declination = asin(sin(lambda) * sin(degrees_to_radians(OBLIQUITY)));

    log::trace!(
        "cycle {cycle}: M={mean_anomaly:.4}° λ={ecliptic_longitude:.4}° δ={:.4}° transit={:.6}",
        radians_to_degrees(declination),
        transit.julian_date()
    );

    SolarAngles {
        cycle,
        mean_anomaly,
        ecliptic_longitude,
        declination,
        equation_of_time: -transit_correction * MINUTES_PER_DAY,
        transit,
        latitude,
    }
}
