//! Solar midnight search across a whole year.

use chrono::{DateTime, Duration, TimeZone};
use chrono_tz::{America::New_York, Europe::Berlin, Tz};
use solar_events::{SolarEventKind, events};

const ESSEN: (f64, f64) = (51.44968, 6.97337);

fn walk_midnights(
    start: DateTime<Tz>,
    end: DateTime<Tz>,
    location: (f64, f64),
) -> Vec<DateTime<Tz>> {
    let mut found = Vec::new();
    let mut day = start;
    while day < end {
        if let Some(midnight) = events::next_solar_midnight(day, location.0, location.1).unwrap() {
            if found.last() != Some(&midnight) {
                found.push(midnight);
            }
        }
        day += Duration::hours(12);
    }
    found
}

#[test]
fn test_chained_midnights_advance_by_one_day() {
    let start = Berlin.with_ymd_and_hms(2019, 1, 1, 12, 0, 0).single().unwrap();
    let mut reference = events::next_solar_midnight(start, ESSEN.0, ESSEN.1)
        .unwrap()
        .unwrap();

    for _ in 0..100 {
        let next = events::next_solar_midnight(reference, ESSEN.0, ESSEN.1)
            .unwrap()
            .unwrap();
        let gap = next - reference;
        assert!(
            gap > Duration::minutes(23 * 60 + 59) && gap < Duration::minutes(24 * 60 + 1),
            "{reference} -> {next}"
        );
        reference = next;
    }
}

#[test]
fn test_no_astronomical_night_around_midsummer() {
    let start = Berlin.with_ymd_and_hms(2019, 1, 1, 12, 0, 0).single().unwrap();
    let end = Berlin.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).single().unwrap();
    let midnights = walk_midnights(start, end, ESSEN);

    let gaps: Vec<_> = midnights
        .windows(2)
        .filter(|pair| pair[1] - pair[0] > Duration::hours(25))
        .collect();

    // one interruption: late May to mid July
    assert_eq!(gaps.len(), 1, "{gaps:?}");
    let (before, after) = (gaps[0][0], gaps[0][1]);
    assert_eq!(before.format("%m").to_string(), "05");
    assert_eq!(after.format("%m").to_string(), "07");

    let midsummer = Berlin.with_ymd_and_hms(2019, 6, 21, 12, 0, 0).single().unwrap();
    assert_eq!(
        events::next_solar_midnight(midsummer, ESSEN.0, ESSEN.1).unwrap(),
        None
    );
    assert_eq!(
        events::previous_solar_midnight(midsummer, ESSEN.0, ESSEN.1).unwrap(),
        None
    );
}

#[test]
fn test_previous_and_next_bracket_the_reference() {
    let location = (40.7128, -74.006);
    let mut reference = New_York.with_ymd_and_hms(2019, 3, 1, 0, 0, 0).single().unwrap();

    for _ in 0..60 {
        let previous = events::previous_solar_midnight(reference, location.0, location.1)
            .unwrap()
            .unwrap();
        let next = events::next_solar_midnight(reference, location.0, location.1)
            .unwrap()
            .unwrap();

        assert!(previous < reference && reference < next, "{reference}");
        assert!(next - previous < Duration::hours(25), "{reference}");
        assert_eq!(
            events::next_solar_midnight(previous, location.0, location.1).unwrap(),
            Some(next),
            "{reference}"
        );
        reference += Duration::minutes(317);
    }
}

#[test]
fn test_next_event_for_every_kind() {
    let reference = Berlin.with_ymd_and_hms(2019, 1, 24, 12, 0, 0).single().unwrap();

    for kind in SolarEventKind::ALL {
        let next = events::next_event(reference, ESSEN.0, ESSEN.1, kind)
            .unwrap()
            .unwrap();
        let previous = events::previous_event(reference, ESSEN.0, ESSEN.1, kind)
            .unwrap()
            .unwrap();

        assert!(previous < reference && reference < next, "{kind:?}");
        assert!(next - previous < Duration::hours(25), "{kind:?}");
    }
}

#[test]
fn test_midnight_is_middle_of_astronomical_night() {
    let date = Berlin.with_ymd_and_hms(2019, 1, 24, 12, 0, 0).single().unwrap();
    let tomorrow = date + Duration::days(1);

    let dusk = events::astronomical_dusk(date, ESSEN.0, ESSEN.1).unwrap().unwrap();
    let dawn = events::astronomical_dawn(tomorrow, ESSEN.0, ESSEN.1).unwrap().unwrap();
    let midnight = events::next_solar_midnight(date, ESSEN.0, ESSEN.1).unwrap().unwrap();

    let to_dusk = midnight - dusk;
    let to_dawn = dawn - midnight;
    assert!((to_dusk - to_dawn).num_seconds().abs() <= 1);
}
