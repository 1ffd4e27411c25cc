//! Property tests for event ordering, search direction and boundary classification.

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use proptest::prelude::*;
use solar_events::{SunPhase, ephemeris, events, phase};

/// 1950-01-01 to 2050-01-01
const TIMESTAMPS: std::ops::Range<i64> = -631_152_000..2_524_608_000;

fn instant(timestamp: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(timestamp, 0).unwrap()
}

proptest! {
    #[test]
    fn sunrise_precedes_noon_precedes_sunset(
        timestamp in TIMESTAMPS,
        latitude in -65.0_f64..=65.0,
        longitude in -180.0_f64..=180.0,
    ) {
        let day = events::day_events(instant(timestamp), latitude, longitude).unwrap();

        let sunrise = day.sunrise().copied();
        let noon = day.solar_noon().copied();
        let sunset = day.sunset().copied();
        prop_assert!(sunrise.is_some() && noon.is_some() && sunset.is_some());
        prop_assert!(sunrise < noon && noon < sunset);
    }

    #[test]
    fn next_solar_midnight_is_strictly_after_reference(
        timestamp in TIMESTAMPS,
        latitude in -90.0_f64..=90.0,
        longitude in -180.0_f64..=180.0,
    ) {
        let reference = instant(timestamp);
        if let Some(next) = events::next_solar_midnight(reference, latitude, longitude).unwrap() {
            prop_assert!(next > reference);
            prop_assert!(next - reference < Duration::hours(49));

            let following = events::next_solar_midnight(next, latitude, longitude).unwrap();
            if let Some(following) = following {
                prop_assert!(following > next);
            }
        }
        let previous = events::previous_solar_midnight(reference, latitude, longitude).unwrap();
        if let Some(previous) = previous {
            prop_assert!(previous < reference);
        }
    }

    #[test]
    fn event_instants_are_bright_boundaries(
        timestamp in TIMESTAMPS,
        latitude in -65.0_f64..=65.0,
        longitude in -180.0_f64..=180.0,
    ) {
        let day = events::day_events(instant(timestamp), latitude, longitude).unwrap();
        let sunrise = *day.sunrise().unwrap();
        let sunset = *day.sunset().unwrap();
        let noon = *day.solar_noon().unwrap();

        prop_assert_eq!(phase::sun_phase(sunrise, latitude, longitude).unwrap(), SunPhase::Day);
        prop_assert_eq!(phase::sun_phase(sunset, latitude, longitude).unwrap(), SunPhase::Day);
        prop_assert_eq!(phase::sun_phase(noon, latitude, longitude).unwrap(), SunPhase::Day);
        prop_assert!(!phase::is_day(sunrise - Duration::seconds(1), latitude, longitude).unwrap());
        prop_assert!(!phase::is_day(sunset + Duration::seconds(1), latitude, longitude).unwrap());
    }

    #[test]
    fn polar_day_is_day(
        timestamp in TIMESTAMPS,
        latitude in prop_oneof![-90.0_f64..=-60.0, 60.0_f64..=90.0],
        longitude in -180.0_f64..=180.0,
    ) {
        let datetime = instant(timestamp);
        if phase::is_polar_day(datetime, latitude, longitude).unwrap() {
            prop_assert!(phase::is_day(datetime, latitude, longitude).unwrap());
        }
        if phase::is_polar_night(datetime, latitude, longitude).unwrap() {
            prop_assert!(!phase::is_day(datetime, latitude, longitude).unwrap());
        }
    }

    #[test]
    fn noon_phase_follows_noon_elevation(
        timestamp in TIMESTAMPS,
        latitude in prop_oneof![-90.0_f64..=-60.0, 60.0_f64..=90.0],
        longitude in -180.0_f64..=180.0,
    ) {
        let angles = ephemeris::solar_angles(instant(timestamp), latitude, longitude).unwrap();
        let elevation = 90.0 - (latitude - angles.declination()).abs();
        prop_assume!((elevation + 0.833).abs() > 0.01);

        let noon = angles.transit().to_utc().unwrap();
        prop_assert_eq!(
            phase::is_day(noon, latitude, longitude).unwrap(),
            elevation >= -0.833
        );
    }

    #[test]
    fn phase_does_not_depend_on_time_zone(
        timestamp in TIMESTAMPS,
        offset_hours in -12_i32..=14,
        latitude in -90.0_f64..=90.0,
        longitude in -180.0_f64..=180.0,
    ) {
        let utc = instant(timestamp);
        let zone = FixedOffset::east_opt(offset_hours * 3600).unwrap();
        let local = utc.with_timezone(&zone);

        prop_assert_eq!(
            phase::sun_phase(utc, latitude, longitude).unwrap(),
            phase::sun_phase(local, latitude, longitude).unwrap()
        );
    }

    #[test]
    fn invalid_latitude_is_rejected(
        timestamp in TIMESTAMPS,
        latitude in prop_oneof![-1000.0_f64..-90.001, 90.001_f64..1000.0],
    ) {
        let datetime = instant(timestamp);
        prop_assert!(events::day_events(datetime, latitude, 0.0).is_err());
        prop_assert!(events::next_solar_midnight(datetime, latitude, 0.0).is_err());
        prop_assert!(phase::sun_phase(datetime, latitude, 0.0).is_err());
        prop_assert!(phase::is_day(datetime, latitude, 0.0).is_err());
    }
}
