//! Core data types for solar event calculations.

use crate::Result;
use crate::error::check_elevation_angle;

/// Predefined elevation angles for sunrise/sunset and twilight calculations.
///
/// Each horizon is the sun elevation whose crossing marks the start (dawn) and end (dusk)
/// of a period of light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizon {
    /// Standard sunrise/sunset (sun's upper limb touches horizon, accounting for refraction)
    SunriseSunset,
    /// Artificial lighting threshold (sun is 3° below horizon)
    Lights,
    /// Civil twilight (sun is 6° below horizon)
    CivilTwilight,
    /// Nautical twilight (sun is 12° below horizon)
    NauticalTwilight,
    /// Astronomical twilight (sun is 18° below horizon)
    AstronomicalTwilight,
    /// Custom elevation angle.
    ///
    /// Build it with [`Horizon::custom`]. Operations taking a `Horizon` reject a value
    /// outside -90 to +90 degrees (or NaN) with `InvalidElevationAngle`.
    Custom(f64),
}

impl Horizon {
    /// Gets the elevation angle in degrees for this horizon definition.
    ///
    /// Negative values indicate the sun is below the horizon.
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        match self {
            Self::SunriseSunset => -0.833, // refraction plus solar radius
            Self::Lights => -3.0,
            Self::CivilTwilight => -6.0,
            Self::NauticalTwilight => -12.0,
            Self::AstronomicalTwilight => -18.0,
            Self::Custom(angle) => *angle,
        }
    }

    /// Creates a custom horizon with the specified elevation angle.
    ///
    /// # Errors
    /// Returns `InvalidElevationAngle` if elevation is outside -90 to +90 degrees.
    pub fn custom(elevation_degrees: f64) -> Result<Self> {
        check_elevation_angle(elevation_degrees)?;
        Ok(Self::Custom(elevation_degrees))
    }
}

/// Polar condition for one horizon on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarType {
    /// The sun stays above the horizon the whole day.
    AllDay,
    /// The sun stays below the horizon the whole day.
    AllNight,
}

/// Result of sunrise/sunset calculations for one horizon on a given day.
///
/// Solar events can vary significantly based on location and time of year,
/// especially at extreme latitudes where polar days and nights occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SunriseResult<T> {
    /// Regular day with distinct sunrise, transit (noon), and sunset times
    RegularDay {
        /// Time of the upward crossing (sunrise or dawn)
        sunrise: T,
        /// Time of solar transit (when sun crosses meridian, solar noon)
        transit: T,
        /// Time of the downward crossing (sunset or dusk)
        sunset: T,
    },
    /// Polar day - sun remains above the specified horizon all day
    AllDay {
        /// Time of solar transit (closest approach to zenith)
        transit: T,
    },
    /// Polar night - sun remains below the specified horizon all day
    AllNight {
        /// Time of solar transit (when sun is highest, though still below horizon)
        transit: T,
    },
}

impl<T> SunriseResult<T> {
    /// Gets the transit time (solar noon) for any sunrise result.
    pub const fn transit(&self) -> &T {
        match self {
            Self::RegularDay { transit, .. }
            | Self::AllDay { transit }
            | Self::AllNight { transit } => transit,
        }
    }

    /// Checks if this represents a regular day with sunrise and sunset.
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// Checks if this represents a polar day (sun never sets).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay { .. })
    }

    /// Checks if this represents a polar night (sun never rises).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight { .. })
    }

    /// The polar condition, if this is not a regular day.
    pub const fn polar_type(&self) -> Option<PolarType> {
        match self {
            Self::RegularDay { .. } => None,
            Self::AllDay { .. } => Some(PolarType::AllDay),
            Self::AllNight { .. } => Some(PolarType::AllNight),
        }
    }

    /// Gets sunrise time if this is a regular day.
    pub const fn sunrise(&self) -> Option<&T> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(sunrise)
        } else {
            None
        }
    }

    /// Gets sunset time if this is a regular day.
    pub const fn sunset(&self) -> Option<&T> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(sunset)
        } else {
            None
        }
    }

    /// Converts every contained time, stopping at the first failure.
    ///
    /// # Errors
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E>(
        self,
        mut f: impl FnMut(T) -> core::result::Result<U, E>,
    ) -> core::result::Result<SunriseResult<U>, E> {
        Ok(match self {
            Self::RegularDay {
                sunrise,
                transit,
                sunset,
            } => SunriseResult::RegularDay {
                sunrise: f(sunrise)?,
                transit: f(transit)?,
                sunset: f(sunset)?,
            },
            Self::AllDay { transit } => SunriseResult::AllDay {
                transit: f(transit)?,
            },
            Self::AllNight { transit } => SunriseResult::AllNight {
                transit: f(transit)?,
            },
        })
    }
}

/// Kinds of solar events, declared in their natural order through a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SolarEventKind {
    /// Sun rises through -18°
    AstronomicalDawn,
    /// Sun rises through -12°
    NauticalDawn,
    /// Sun rises through -6°
    CivilDawn,
    /// Sun rises through -0.833°
    Sunrise,
    /// Sun crosses the local meridian
    SolarNoon,
    /// Sun sets through -0.833°
    Sunset,
    /// Sun sets through -6°
    CivilDusk,
    /// Sun sets through -12°
    NauticalDusk,
    /// Sun sets through -18°
    AstronomicalDusk,
    /// Middle of the astronomical night following the day
    SolarMidnight,
}

impl SolarEventKind {
    /// Every kind, in chronological order.
    pub const ALL: [Self; 10] = [
        Self::AstronomicalDawn,
        Self::NauticalDawn,
        Self::CivilDawn,
        Self::Sunrise,
        Self::SolarNoon,
        Self::Sunset,
        Self::CivilDusk,
        Self::NauticalDusk,
        Self::AstronomicalDusk,
        Self::SolarMidnight,
    ];

    /// The horizon crossed by this event, `None` for solar noon and midnight.
    #[must_use]
    pub const fn horizon(self) -> Option<Horizon> {
        match self {
            Self::AstronomicalDawn | Self::AstronomicalDusk => Some(Horizon::AstronomicalTwilight),
            Self::NauticalDawn | Self::NauticalDusk => Some(Horizon::NauticalTwilight),
            Self::CivilDawn | Self::CivilDusk => Some(Horizon::CivilTwilight),
            Self::Sunrise | Self::Sunset => Some(Horizon::SunriseSunset),
            Self::SolarNoon | Self::SolarMidnight => None,
        }
    }

    /// Whether the sun is rising through the horizon at this event.
    #[must_use]
    pub const fn is_rising(self) -> bool {
        matches!(
            self,
            Self::AstronomicalDawn | Self::NauticalDawn | Self::CivilDawn | Self::Sunrise
        )
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// A solar event paired with the time it happens, if it happens at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarEvent<T> {
    kind: SolarEventKind,
    time: Option<T>,
}

impl<T> SolarEvent<T> {
    /// Creates an event; `None` means the event does not occur.
    pub const fn new(kind: SolarEventKind, time: Option<T>) -> Self {
        Self { kind, time }
    }

    /// The kind of event.
    pub const fn kind(&self) -> SolarEventKind {
        self.kind
    }

    /// When the event happens, `None` under polar conditions.
    pub const fn time(&self) -> Option<&T> {
        self.time.as_ref()
    }

    /// Whether the event happens.
    pub const fn occurs(&self) -> bool {
        self.time.is_some()
    }
}

/// All solar events of one day, ordered by [`SolarEventKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEvents<T> {
    events: [SolarEvent<T>; 10],
}

impl<T> DayEvents<T> {
    /// Builds the set by evaluating `f` for every kind in order.
    pub fn from_fn(mut f: impl FnMut(SolarEventKind) -> Option<T>) -> Self {
        Self {
            events: SolarEventKind::ALL.map(|kind| SolarEvent::new(kind, f(kind))),
        }
    }

    /// The event of the given kind.
    pub const fn event(&self, kind: SolarEventKind) -> &SolarEvent<T> {
        &self.events[kind.index()]
    }

    /// The time of the given kind of event, `None` if it does not occur.
    pub const fn get(&self, kind: SolarEventKind) -> Option<&T> {
        self.event(kind).time()
    }

    /// Iterates over all ten events in chronological kind order.
    pub fn iter(&self) -> impl Iterator<Item = &SolarEvent<T>> {
        self.events.iter()
    }

    /// Iterates over the events that occur, with their times.
    pub fn occurring(&self) -> impl Iterator<Item = (SolarEventKind, &T)> {
        self.events
            .iter()
            .filter_map(|event| event.time().map(|time| (event.kind, time)))
    }

    /// Sunrise, if the sun rises.
    pub const fn sunrise(&self) -> Option<&T> {
        self.get(SolarEventKind::Sunrise)
    }

    /// Solar noon. Present even on polar days and nights, since the meridian transit
    /// still happens.
    pub const fn solar_noon(&self) -> Option<&T> {
        self.get(SolarEventKind::SolarNoon)
    }

    /// Sunset, if the sun sets.
    pub const fn sunset(&self) -> Option<&T> {
        self.get(SolarEventKind::Sunset)
    }

    /// Solar midnight following the day, if astronomical night is reached.
    pub const fn solar_midnight(&self) -> Option<&T> {
        self.get(SolarEventKind::SolarMidnight)
    }

    /// Converts every present time, stopping at the first failure.
    ///
    /// # Errors
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E>(
        self,
        mut f: impl FnMut(T) -> core::result::Result<U, E>,
    ) -> core::result::Result<DayEvents<U>, E> {
        let mut failure = None;
        let events = self.events.map(|event| {
            let time = event.time.and_then(|time| match f(time) {
                Ok(mapped) => Some(mapped),
                Err(e) => {
                    failure.get_or_insert(e);
                    None
                }
            });
            SolarEvent::new(event.kind, time)
        });

        match failure {
            Some(e) => Err(e),
            None => Ok(DayEvents { events }),
        }
    }
}

/// Phase of the sun at an instant, ordered from darkest to brightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SunPhase {
    /// Sun below -18°
    Night,
    /// Sun between -18° and -12°
    AstronomicalTwilight,
    /// Sun between -12° and -6°
    NauticalTwilight,
    /// Sun between -6° and -0.833°
    CivilTwilight,
    /// Sun above -0.833°
    Day,
}

impl SunPhase {
    /// Phases from brightest to darkest, each paired with the horizon the sun must be at or
    /// above to be in it.
    pub(crate) const BY_THRESHOLD: [(Self, Horizon); 4] = [
        (Self::Day, Horizon::SunriseSunset),
        (Self::CivilTwilight, Horizon::CivilTwilight),
        (Self::NauticalTwilight, Horizon::NauticalTwilight),
        (Self::AstronomicalTwilight, Horizon::AstronomicalTwilight),
    ];

    /// Whether this is one of the three twilight phases.
    #[must_use]
    pub const fn is_twilight(self) -> bool {
        matches!(
            self,
            Self::CivilTwilight | Self::NauticalTwilight | Self::AstronomicalTwilight
        )
    }
}
