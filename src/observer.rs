//! Observer location façade.

use crate::ephemeris::{self, SolarAngles};
use crate::error::check_coordinates;
use crate::{DayEvents, Horizon, Result, SolarEventKind, SunPhase, SunriseResult, events, phase};
use chrono::{DateTime, TimeZone};

/// A validated geographic location.
///
/// Holds no state besides its coordinates, so it can be copied freely and shared between
/// threads. Every method is a thin wrapper around the free functions of
/// [`events`], [`phase`] and [`ephemeris`].
///
/// # Example
/// ```rust
/// use solar_events::{Observer, SunPhase};
/// use chrono::{DateTime, FixedOffset};
///
/// let essen = Observer::new(51.44968, 6.97337).unwrap();
/// let datetime = "2019-01-24T12:00:00+01:00".parse::<DateTime<FixedOffset>>().unwrap();
///
/// assert_eq!(essen.sun_phase(datetime).unwrap(), SunPhase::Day);
/// let sunset = essen.sunset(datetime).unwrap().unwrap();
/// assert_eq!(sunset.to_rfc3339(), "2019-01-24T17:07:18+01:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    latitude: f64,
    longitude: f64,
}

impl Observer {
    /// Creates an observer at the given coordinates.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range or non-finite values
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// See [`ephemeris::solar_angles`].
    ///
    /// # Errors
    /// Never fails for a constructed observer; the signature matches the free function.
    pub fn solar_angles<Tz: TimeZone>(&self, datetime: DateTime<Tz>) -> Result<SolarAngles> {
        ephemeris::solar_angles(datetime, self.latitude, self.longitude)
    }

    /// See [`events::sunrise_sunset_for_horizon`].
    ///
    /// # Errors
    /// Returns error if a result cannot be represented as a `DateTime`
    pub fn sunrise_sunset_for_horizon<Tz: TimeZone>(
        &self,
        date: DateTime<Tz>,
        horizon: Horizon,
    ) -> Result<SunriseResult<DateTime<Tz>>> {
        events::sunrise_sunset_for_horizon(date, self.latitude, self.longitude, horizon)
    }

    /// See [`events::day_events`].
    ///
    /// # Errors
    /// Returns error if a result cannot be represented as a `DateTime`
    pub fn day_events<Tz: TimeZone>(&self, date: DateTime<Tz>) -> Result<DayEvents<DateTime<Tz>>> {
        events::day_events(date, self.latitude, self.longitude)
    }

    /// See [`events::event_on_day`].
    ///
    /// # Errors
    /// Returns error if the result cannot be represented as a `DateTime`
    pub fn event_on_day<Tz: TimeZone>(
        &self,
        date: DateTime<Tz>,
        kind: SolarEventKind,
    ) -> Result<Option<DateTime<Tz>>> {
        events::event_on_day(date, self.latitude, self.longitude, kind)
    }

    /// See [`events::sunrise`].
    ///
    /// # Errors
    /// Returns error if the result cannot be represented as a `DateTime`
    pub fn sunrise<Tz: TimeZone>(&self, date: DateTime<Tz>) -> Result<Option<DateTime<Tz>>> {
        events::sunrise(date, self.latitude, self.longitude)
    }

    /// See [`events::solar_noon`].
    ///
    /// # Errors
    /// Returns error if the result cannot be represented as a `DateTime`
    pub fn solar_noon<Tz: TimeZone>(&self, date: DateTime<Tz>) -> Result<Option<DateTime<Tz>>> {
        events::solar_noon(date, self.latitude, self.longitude)
    }

    /// See [`events::sunset`].
    ///
    /// # Errors
    /// Returns error if the result cannot be represented as a `DateTime`
    pub fn sunset<Tz: TimeZone>(&self, date: DateTime<Tz>) -> Result<Option<DateTime<Tz>>> {
        events::sunset(date, self.latitude, self.longitude)
    }

    /// See [`events::lights_off`].
    ///
    /// # Errors
    /// Returns error if the result cannot be represented as a `DateTime`
    pub fn lights_off<Tz: TimeZone>(&self, date: DateTime<Tz>) -> Result<Option<DateTime<Tz>>> {
        events::lights_off(date, self.latitude, self.longitude)
    }

    /// See [`events::lights_on`].
    ///
    /// # Errors
    /// Returns error if the result cannot be represented as a `DateTime`
    pub fn lights_on<Tz: TimeZone>(&self, date: DateTime<Tz>) -> Result<Option<DateTime<Tz>>> {
        events::lights_on(date, self.latitude, self.longitude)
    }

    /// See [`events::next_event`].
    ///
    /// # Errors
    /// Returns error if the result cannot be represented as a `DateTime`
    pub fn next_event<Tz: TimeZone>(
        &self,
        reference: DateTime<Tz>,
        kind: SolarEventKind,
    ) -> Result<Option<DateTime<Tz>>> {
        events::next_event(reference, self.latitude, self.longitude, kind)
    }

    /// See [`events::previous_event`].
    ///
    /// # Errors
    /// Returns error if the result cannot be represented as a `DateTime`
    pub fn previous_event<Tz: TimeZone>(
        &self,
        reference: DateTime<Tz>,
        kind: SolarEventKind,
    ) -> Result<Option<DateTime<Tz>>> {
        events::previous_event(reference, self.latitude, self.longitude, kind)
    }

    /// See [`events::next_solar_midnight`].
    ///
    /// # Errors
    /// Returns error if the result cannot be represented as a `DateTime`
    pub fn next_solar_midnight<Tz: TimeZone>(
        &self,
        reference: DateTime<Tz>,
    ) -> Result<Option<DateTime<Tz>>> {
        events::next_solar_midnight(reference, self.latitude, self.longitude)
    }

    /// See [`events::previous_solar_midnight`].
    ///
    /// # Errors
    /// Returns error if the result cannot be represented as a `DateTime`
    pub fn previous_solar_midnight<Tz: TimeZone>(
        &self,
        reference: DateTime<Tz>,
    ) -> Result<Option<DateTime<Tz>>> {
        events::previous_solar_midnight(reference, self.latitude, self.longitude)
    }

    /// See [`phase::sun_phase`].
    ///
    /// # Errors
    /// Returns error if a crossing cannot be represented as a `DateTime`
    pub fn sun_phase<Tz: TimeZone>(&self, datetime: DateTime<Tz>) -> Result<SunPhase> {
        phase::sun_phase(datetime, self.latitude, self.longitude)
    }

    /// See [`phase::is_sun_above`].
    ///
    /// # Errors
    /// Returns error if a crossing cannot be represented as a `DateTime`
    pub fn is_sun_above<Tz: TimeZone>(
        &self,
        datetime: DateTime<Tz>,
        horizon: Horizon,
    ) -> Result<bool> {
        phase::is_sun_above(datetime, self.latitude, self.longitude, horizon)
    }

    /// See [`phase::is_day`].
    ///
    /// # Errors
    /// Returns error if a crossing cannot be represented as a `DateTime`
    pub fn is_day<Tz: TimeZone>(&self, datetime: DateTime<Tz>) -> Result<bool> {
        phase::is_day(datetime, self.latitude, self.longitude)
    }

    /// See [`phase::is_night`].
    ///
    /// # Errors
    /// Returns error if a crossing cannot be represented as a `DateTime`
    pub fn is_night<Tz: TimeZone>(&self, datetime: DateTime<Tz>) -> Result<bool> {
        phase::is_night(datetime, self.latitude, self.longitude)
    }

    /// See [`phase::is_twilight`].
    ///
    /// # Errors
    /// Returns error if a crossing cannot be represented as a `DateTime`
    pub fn is_twilight<Tz: TimeZone>(&self, datetime: DateTime<Tz>) -> Result<bool> {
        phase::is_twilight(datetime, self.latitude, self.longitude)
    }

    /// See [`phase::is_polar_day`].
    ///
    /// # Errors
    /// Never fails for a constructed observer; the signature matches the free function.
    pub fn is_polar_day<Tz: TimeZone>(&self, datetime: DateTime<Tz>) -> Result<bool> {
        phase::is_polar_day(datetime, self.latitude, self.longitude)
    }

    /// See [`phase::is_polar_night`].
    ///
    /// # Errors
    /// Never fails for a constructed observer; the signature matches the free function.
    pub fn is_polar_night<Tz: TimeZone>(&self, datetime: DateTime<Tz>) -> Result<bool> {
        phase::is_polar_night(datetime, self.latitude, self.longitude)
    }

    /// See [`phase::switch_lights_on`].
    ///
    /// # Errors
    /// Returns error if a crossing cannot be represented as a `DateTime`
    pub fn switch_lights_on<Tz: TimeZone>(&self, datetime: DateTime<Tz>) -> Result<bool> {
        phase::switch_lights_on(datetime, self.latitude, self.longitude)
    }
}
