//! Solar event times.
//!
//! Crossing instants are solved on UTC Julian dates and only converted into the caller's
//! time zone on the way out. Events that do not happen (polar day or night for a
//! threshold) are `None`, never errors.

use crate::ephemeris::{SolarAngles, compute, nearest_cycle};
use crate::error::{check_coordinates, check_elevation_angle};
use crate::time::JulianDate;
use crate::{DayEvents, Horizon, Result, SolarEventKind, SunriseResult};
use chrono::{DateTime, TimeZone};

/// Solar cycle of the civil day of `date`: the one whose transit is nearest local noon.
fn civil_day_cycle<Tz: TimeZone>(date: &DateTime<Tz>, longitude: f64) -> i64 {
    nearest_cycle(JulianDate::local_noon(date), longitude)
}

fn crossing(angles: &SolarAngles, horizon: Horizon, rising: bool) -> Option<JulianDate> {
    let crossings = angles.crossings(horizon);
    let time = if rising {
        crossings.sunrise()
    } else {
        crossings.sunset()
    };

    if time.is_none() {
        log::debug!(
            "no {} crossing of {}° in cycle {}: {:?}",
            if rising { "upward" } else { "downward" },
            horizon.elevation_angle(),
            angles.cycle(),
            crossings.polar_type()
        );
    }
    time.copied()
}

/// Midpoint of the astronomical night that follows the transit of `angles`.
fn solar_midnight(angles: &SolarAngles, longitude: f64) -> Option<JulianDate> {
    let dusk = crossing(angles, Horizon::AstronomicalTwilight, false)?;
    let following = compute(angles.cycle() + 1, angles.latitude(), longitude);
    let dawn = crossing(&following, Horizon::AstronomicalTwilight, true)?;
    Some(dusk.midpoint(dawn))
}

fn event_for_angles(
    angles: &SolarAngles,
    longitude: f64,
    kind: SolarEventKind,
) -> Option<JulianDate> {
    match kind {
        SolarEventKind::SolarNoon => Some(angles.transit()),
        SolarEventKind::SolarMidnight => solar_midnight(angles, longitude),
        _ => kind
            .horizon()
            .and_then(|horizon| crossing(angles, horizon, kind.is_rising())),
    }
}

/// Time of `kind` belonging to solar cycle `cycle`, as a UTC Julian date.
pub(crate) fn event_in_cycle(
    cycle: i64,
    latitude: f64,
    longitude: f64,
    kind: SolarEventKind,
) -> Option<JulianDate> {
    event_for_angles(&compute(cycle, latitude, longitude), longitude, kind)
}

/// Calculates the crossings of `horizon` on the civil day of `date`.
///
/// The civil day is the calendar date of `date` in its own offset; the time of day is
/// ignored. Returned times are in the time zone of `date`, rounded to whole seconds.
///
/// # Errors
/// Returns error for invalid coordinates, an elevation angle outside -90 to +90 degrees,
/// or if a result cannot be represented as a `DateTime`
///
/// # Example
/// ```rust
/// use solar_events::{events, Horizon, SunriseResult};
/// use chrono::{DateTime, FixedOffset};
///
/// let date = "2019-01-24T00:00:00+01:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let result = events::sunrise_sunset_for_horizon(date, 51.44968, 6.97337, Horizon::SunriseSunset)
///     .unwrap();
///
/// if let SunriseResult::RegularDay { sunrise, transit, sunset } = result {
///     assert_eq!(sunrise.to_rfc3339(), "2019-01-24T08:23:11+01:00");
///     assert_eq!(transit.to_rfc3339(), "2019-01-24T12:45:14+01:00");
///     assert_eq!(sunset.to_rfc3339(), "2019-01-24T17:07:18+01:00");
/// }
/// ```
pub fn sunrise_sunset_for_horizon<Tz: TimeZone>(
    date: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    horizon: Horizon,
) -> Result<SunriseResult<DateTime<Tz>>> {
    check_coordinates(latitude, longitude)?;
    check_elevation_angle(horizon.elevation_angle())?;
    let tz = date.timezone();
    let angles = compute(civil_day_cycle(&date, longitude), latitude, longitude);
    angles.crossings(horizon).try_map(|jd| jd.to_datetime(&tz))
}

/// Calculates all solar events of the civil day of `date`.
///
/// Solar midnight is the one following the day's solar noon.
///
/// # Errors
/// Returns error for invalid coordinates, or if a result cannot be represented as a `DateTime`
pub fn day_events<Tz: TimeZone>(
    date: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<DayEvents<DateTime<Tz>>> {
    check_coordinates(latitude, longitude)?;
    let tz = date.timezone();
    let angles = compute(civil_day_cycle(&date, longitude), latitude, longitude);
    DayEvents::from_fn(|kind| event_for_angles(&angles, longitude, kind))
        .try_map(|jd| jd.to_datetime(&tz))
}

/// Calculates one solar event on the civil day of `date`.
///
/// # Errors
/// Returns error for invalid coordinates, or if the result cannot be represented as a `DateTime`
pub fn event_on_day<Tz: TimeZone>(
    date: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    kind: SolarEventKind,
) -> Result<Option<DateTime<Tz>>> {
    check_coordinates(latitude, longitude)?;
    let tz = date.timezone();
    event_in_cycle(civil_day_cycle(&date, longitude), latitude, longitude, kind)
        .map(|jd| jd.to_datetime(&tz))
        .transpose()
}

fn lights_crossing<Tz: TimeZone>(
    date: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    rising: bool,
) -> Result<Option<DateTime<Tz>>> {
    check_coordinates(latitude, longitude)?;
    let tz = date.timezone();
    let angles = compute(civil_day_cycle(&date, longitude), latitude, longitude);
    crossing(&angles, Horizon::Lights, rising)
        .map(|jd| jd.to_datetime(&tz))
        .transpose()
}

macro_rules! day_event_accessor {
    ($(#[$doc:meta])* $name:ident => $kind:ident) => {
        $(#[$doc])*
        ///
        /// # Errors
        /// Returns error for invalid coordinates, or if the result cannot be represented as a
        /// `DateTime`
        pub fn $name<Tz: TimeZone>(
            date: DateTime<Tz>,
            latitude: f64,
            longitude: f64,
        ) -> Result<Option<DateTime<Tz>>> {
            event_on_day(date, latitude, longitude, SolarEventKind::$kind)
        }
    };
}

day_event_accessor!(
    /// Astronomical dawn (sun rising through -18°) on the civil day of `date`.
    astronomical_dawn => AstronomicalDawn
);
day_event_accessor!(
    /// Nautical dawn (sun rising through -12°) on the civil day of `date`.
    nautical_dawn => NauticalDawn
);
day_event_accessor!(
    /// Civil dawn (sun rising through -6°) on the civil day of `date`.
    civil_dawn => CivilDawn
);
day_event_accessor!(
    /// Sunrise on the civil day of `date`.
    sunrise => Sunrise
);
day_event_accessor!(
    /// Solar noon on the civil day of `date`.
    ///
    /// Always present: the meridian transit is reported during polar day and polar night
    /// too, even though the sun does not cross the horizon. Callers that expect no noon
    /// without a sunrise should check [`sunrise`] as well.
    solar_noon => SolarNoon
);
day_event_accessor!(
    /// Sunset on the civil day of `date`.
    sunset => Sunset
);
day_event_accessor!(
    /// Civil dusk (sun setting through -6°) on the civil day of `date`.
    civil_dusk => CivilDusk
);
day_event_accessor!(
    /// Nautical dusk (sun setting through -12°) on the civil day of `date`.
    nautical_dusk => NauticalDusk
);
day_event_accessor!(
    /// Astronomical dusk (sun setting through -18°) on the civil day of `date`.
    astronomical_dusk => AstronomicalDusk
);

/// Morning time at which artificial lighting can be switched off (sun rising through -3°).
///
/// # Errors
/// Returns error for invalid coordinates, or if the result cannot be represented as a `DateTime`
pub fn lights_off<Tz: TimeZone>(
    date: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<Option<DateTime<Tz>>> {
    lights_crossing(date, latitude, longitude, true)
}

/// Evening time at which artificial lighting should be switched on (sun setting through -3°).
///
/// # Errors
/// Returns error for invalid coordinates, or if the result cannot be represented as a `DateTime`
pub fn lights_on<Tz: TimeZone>(
    date: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<Option<DateTime<Tz>>> {
    lights_crossing(date, latitude, longitude, false)
}

/// Finds the first occurrence of `kind` strictly after `reference`.
///
/// Looks at the solar cycles adjacent to the one nearest `reference`, so the result is less
/// than two days away. Returns `None` if the event does not happen in that window.
///
/// # Errors
/// Returns error for invalid coordinates, or if the result cannot be represented as a `DateTime`
pub fn next_event<Tz: TimeZone>(
    reference: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    kind: SolarEventKind,
) -> Result<Option<DateTime<Tz>>> {
    check_coordinates(latitude, longitude)?;
    let tz = reference.timezone();
    let cycle = nearest_cycle(JulianDate::from_datetime(&reference), longitude);

    for candidate in cycle - 1..=cycle + 1 {
        if let Some(jd) = event_in_cycle(candidate, latitude, longitude, kind) {
            let time = jd.to_datetime(&tz)?;
            if time > reference {
                return Ok(Some(time));
            }
        }
    }
    Ok(None)
}

/// Finds the last occurrence of `kind` strictly before `reference`.
///
/// # Errors
/// Returns error for invalid coordinates, or if the result cannot be represented as a `DateTime`
pub fn previous_event<Tz: TimeZone>(
    reference: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    kind: SolarEventKind,
) -> Result<Option<DateTime<Tz>>> {
    check_coordinates(latitude, longitude)?;
    let tz = reference.timezone();
    let cycle = nearest_cycle(JulianDate::from_datetime(&reference), longitude);

    for candidate in (cycle - 2..=cycle).rev() {
        if let Some(jd) = event_in_cycle(candidate, latitude, longitude, kind) {
            let time = jd.to_datetime(&tz)?;
            if time < reference {
                return Ok(Some(time));
            }
        }
    }
    Ok(None)
}

/// Finds the next solar midnight strictly after `reference`.
///
/// Solar midnight is the middle of the astronomical night, halfway between astronomical dusk
/// and the following astronomical dawn. It is `None` when the sun never gets 18° below the
/// horizon, as at 51.45°N in late June.
///
/// # Errors
/// Returns error for invalid coordinates, or if the result cannot be represented as a `DateTime`
///
/// # Example
/// ```rust
/// use solar_events::events;
/// use chrono::{DateTime, FixedOffset};
///
/// let winter = "2019-01-24T12:00:00+01:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let midnight = events::next_solar_midnight(winter, 51.44968, 6.97337).unwrap().unwrap();
/// assert_eq!(midnight.to_rfc3339(), "2019-01-25T00:44:46+01:00");
///
/// let summer = "2019-06-24T12:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
/// assert_eq!(events::next_solar_midnight(summer, 51.44968, 6.97337).unwrap(), None);
/// ```
pub fn next_solar_midnight<Tz: TimeZone>(
    reference: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<Option<DateTime<Tz>>> {
    next_event(reference, latitude, longitude, SolarEventKind::SolarMidnight)
}

/// Finds the last solar midnight strictly before `reference`.
///
/// # Errors
/// Returns error for invalid coordinates, or if the result cannot be represented as a `DateTime`
pub fn previous_solar_midnight<Tz: TimeZone>(
    reference: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<Option<DateTime<Tz>>> {
    previous_event(reference, latitude, longitude, SolarEventKind::SolarMidnight)
}
