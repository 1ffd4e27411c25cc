//! Day, night and twilight classification of an instant.
//!
//! An instant is placed between the crossings of each threshold that surround it. Crossings
//! are compared as the same whole-second instants that [`events`](crate::events) returns, so
//! an event time fed back into the classifier lands exactly on its boundary. At a boundary
//! the sun counts as being at the threshold, i.e. in the brighter phase. Within a solar cycle
//! that never crosses a threshold, the cycle's polar state decides.

use crate::ephemeris::{SolarAngles, compute, nearest_cycle};
use crate::error::{check_coordinates, check_elevation_angle};
use crate::time::JulianDate;
use crate::{Horizon, PolarType, Result, SunPhase};
use chrono::{DateTime, TimeZone, Utc};

/// A threshold crossing: when, and whether the sun is rising through it.
type Crossing = (DateTime<Utc>, bool);

fn crossings_in_cycle(angles: &SolarAngles, horizon: Horizon) -> Result<[Option<Crossing>; 2]> {
    let crossings = angles.crossings(horizon);
    let rising = crossings.sunrise().map(JulianDate::to_utc).transpose()?;
    let setting = crossings.sunset().map(JulianDate::to_utc).transpose()?;
    Ok([rising.map(|t| (t, true)), setting.map(|t| (t, false))])
}

/// Whether the sun is at or above `horizon` at `instant`.
///
/// `window` holds the angles of the cycles before, at and after the one nearest `instant`.
/// A polar nearest cycle decides on its own, so crossings from a neighbouring regular cycle
/// never carry over into a cycle without any.
fn is_at_or_above(
    instant: DateTime<Utc>,
    window: &[SolarAngles; 3],
    horizon: Horizon,
) -> Result<bool> {
    let nearest = &window[1];
    if let Some(polar) = nearest.polar_type(horizon) {
        log::debug!(
            "no crossing of {}° in cycle {}, using polar state {polar:?}",
            horizon.elevation_angle(),
            nearest.cycle()
        );
        return Ok(polar == PolarType::AllDay);
    }

    let mut last_before: Option<Crossing> = None;
    let mut first_after: Option<Crossing> = None;

    for angles in window {
        for (time, rising) in crossings_in_cycle(angles, horizon)?.into_iter().flatten() {
            if time == instant {
                return Ok(true);
            }
            if time < instant {
                if last_before.is_none_or(|(before, _)| time > before) {
                    last_before = Some((time, rising));
                }
            } else if first_after.is_none_or(|(after, _)| time < after) {
                first_after = Some((time, rising));
            }
        }
    }

    // the nearest cycle crosses, so at least one side is known
    Ok(match (last_before, first_after) {
        (Some((_, rising)), _) => rising,
        (None, Some((_, rising))) => !rising,
        (None, None) => false,
    })
}

/// Validated inputs of a classification: the instant in UTC and the surrounding cycles.
fn prepare<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<(DateTime<Utc>, [SolarAngles; 3])> {
    check_coordinates(latitude, longitude)?;
    let cycle = nearest_cycle(JulianDate::from_datetime(datetime), longitude);
    let window = [cycle - 1, cycle, cycle + 1].map(|c| compute(c, latitude, longitude));
    Ok((datetime.with_timezone(&Utc), window))
}

/// Determines whether the sun is at or above `horizon` at `datetime`.
///
/// # Errors
/// Returns error for invalid coordinates or an elevation angle outside -90 to +90 degrees
pub fn is_sun_above<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    horizon: Horizon,
) -> Result<bool> {
    check_elevation_angle(horizon.elevation_angle())?;
    let (instant, window) = prepare(&datetime, latitude, longitude)?;
    is_at_or_above(instant, &window, horizon)
}

/// Determines the phase of the sun at `datetime`.
///
/// # Errors
/// Returns error for invalid coordinates
///
/// # Example
/// ```rust
/// use solar_events::{phase, SunPhase};
/// use chrono::{DateTime, FixedOffset};
///
/// let datetime = "2019-01-24T07:30:00+01:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let sun_phase = phase::sun_phase(datetime, 51.44968, 6.97337).unwrap();
/// assert_eq!(sun_phase, SunPhase::NauticalTwilight);
/// ```
pub fn sun_phase<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<SunPhase> {
    let (instant, window) = prepare(&datetime, latitude, longitude)?;
    for (phase, horizon) in SunPhase::BY_THRESHOLD {
        if is_at_or_above(instant, &window, horizon)? {
            return Ok(phase);
        }
    }
    Ok(SunPhase::Night)
}

/// Whether it is day (sun at or above the sunrise/sunset threshold) at `datetime`.
///
/// # Errors
/// Returns error for invalid coordinates
pub fn is_day<Tz: TimeZone>(datetime: DateTime<Tz>, latitude: f64, longitude: f64) -> Result<bool> {
    Ok(sun_phase(datetime, latitude, longitude)? == SunPhase::Day)
}

/// Whether it is night (sun below -18°) at `datetime`.
///
/// # Errors
/// Returns error for invalid coordinates
pub fn is_night<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<bool> {
    Ok(sun_phase(datetime, latitude, longitude)? == SunPhase::Night)
}

/// Whether it is any kind of twilight at `datetime`.
///
/// # Errors
/// Returns error for invalid coordinates
pub fn is_twilight<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<bool> {
    Ok(sun_phase(datetime, latitude, longitude)?.is_twilight())
}

/// Whether it is civil twilight (sun between -6° and -0.833°) at `datetime`.
///
/// # Errors
/// Returns error for invalid coordinates
pub fn is_civil_twilight<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<bool> {
    Ok(sun_phase(datetime, latitude, longitude)? == SunPhase::CivilTwilight)
}

/// Whether it is nautical twilight (sun between -12° and -6°) at `datetime`.
///
/// # Errors
/// Returns error for invalid coordinates
pub fn is_nautical_twilight<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<bool> {
    Ok(sun_phase(datetime, latitude, longitude)? == SunPhase::NauticalTwilight)
}

/// Whether it is astronomical twilight (sun between -18° and -12°) at `datetime`.
///
/// # Errors
/// Returns error for invalid coordinates
pub fn is_astronomical_twilight<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<bool> {
    Ok(sun_phase(datetime, latitude, longitude)? == SunPhase::AstronomicalTwilight)
}

fn polar_type_at<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<Option<PolarType>> {
    check_coordinates(latitude, longitude)?;
    let cycle = nearest_cycle(JulianDate::from_datetime(datetime), longitude);
    Ok(compute(cycle, latitude, longitude).polar_type(Horizon::SunriseSunset))
}

/// Whether the sun stays up for the whole solar day around `datetime`.
///
/// # Errors
/// Returns error for invalid coordinates
pub fn is_polar_day<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<bool> {
    Ok(polar_type_at(&datetime, latitude, longitude)? == Some(PolarType::AllDay))
}

/// Whether the sun stays down for the whole solar day around `datetime`.
///
/// # Errors
/// Returns error for invalid coordinates
pub fn is_polar_night<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<bool> {
    Ok(polar_type_at(&datetime, latitude, longitude)? == Some(PolarType::AllNight))
}

/// Whether artificial lighting should be on, i.e. the sun is below -3°.
///
/// # Errors
/// Returns error for invalid coordinates
pub fn switch_lights_on<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<bool> {
    Ok(!is_sun_above(datetime, latitude, longitude, Horizon::Lights)?)
}
