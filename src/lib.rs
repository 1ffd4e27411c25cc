//! # Solar Events Library
//!
//! Sunrise, sunset, twilight, solar noon and solar midnight times, and day/night state,
//! for any location on Earth.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The library derives the sun's declination, equation of time and meridian transit from a
//! low-precision series around the J2000.0 epoch (the "sunrise equation"), then inverts the
//! hour angle to find the instants at which the sun crosses a set of elevation thresholds:
//!
//! | Threshold | Elevation | Events |
//! |---|---|---|
//! | [`Horizon::SunriseSunset`] | -0.833° | sunrise, sunset |
//! | [`Horizon::Lights`] | -3° | lights off, lights on |
//! | [`Horizon::CivilTwilight`] | -6° | civil dawn, civil dusk |
//! | [`Horizon::NauticalTwilight`] | -12° | nautical dawn, nautical dusk |
//! | [`Horizon::AstronomicalTwilight`] | -18° | astronomical dawn, astronomical dusk |
//!
//! Event times are accurate to about a minute and are returned rounded to whole seconds, in
//! the time zone of the `DateTime` that was passed in. Events that do not happen on a given
//! day (polar day or polar night for a threshold) are `None`.
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std
//! solar-events = "0.1"
//!
//! # no_std
//! solar-events = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Logging
//!
//! Diagnostics are emitted through the [`log`](https://docs.rs/log) facade: `trace` for
//! computed ephemeris values, `debug` when an event does not occur or classification falls
//! back to the polar state. Install any logger to see them.
//!
//! ## Quick Start
//!
//! ### Events of a day
//! ```rust
//! use solar_events::{events, SolarEventKind};
//! use chrono::{DateTime, FixedOffset};
//!
//! // Essen, Germany, midsummer
//! let date = "2019-06-24T12:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let day = events::day_events(date, 51.44968, 6.97337).unwrap();
//!
//! assert_eq!(
//!     day.get(SolarEventKind::NauticalDawn).unwrap().to_rfc3339(),
//!     "2019-06-24T03:15:15+02:00"
//! );
//! // the sun never gets 18° below the horizon in late June at this latitude
//! assert_eq!(day.get(SolarEventKind::AstronomicalDawn), None);
//! assert_eq!(day.solar_midnight(), None);
//!
//! for (kind, time) in day.occurring() {
//!     println!("{kind:?}: {time}");
//! }
//! ```
//!
//! ### Sun phase
//! ```rust
//! use solar_events::{Observer, SunPhase};
//! use chrono::{DateTime, FixedOffset};
//!
//! let essen = Observer::new(51.44968, 6.97337).unwrap();
//! let datetime = "2019-01-24T07:00:00+01:00".parse::<DateTime<FixedOffset>>().unwrap();
//!
//! assert_eq!(essen.sun_phase(datetime).unwrap(), SunPhase::AstronomicalTwilight);
//! assert!(!essen.is_day(datetime).unwrap());
//! assert!(essen.switch_lights_on(datetime).unwrap());
//! ```
//!
//! ## Conventions
//!
//! - **Civil day**: the calendar date of the input in its own offset. Its events belong to
//!   the solar transit nearest local noon of that date.
//! - **Solar midnight**: halfway between astronomical dusk and the next astronomical dawn.
//! - **Boundaries**: at the exact instant of a crossing the sun counts as being in the
//!   brighter phase, so the sunrise and sunset instants are both [`SunPhase::Day`].

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::ephemeris::SolarAngles;
pub use crate::error::{Error, Result};
pub use crate::observer::Observer;
pub use crate::types::{
    DayEvents, Horizon, PolarType, SolarEvent, SolarEventKind, SunPhase, SunriseResult,
};

// Algorithm modules
pub mod ephemeris;
pub mod events;
pub mod phase;

// Core modules
pub mod error;
pub mod observer;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
