//! Day events and sun phases for a few locations across the globe, in their local time zones.

use chrono::{DateTime, Duration, TimeZone};
use chrono_tz::Tz;
use solar_events::{Observer, SolarEventKind};

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    zone: Tz,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        City {
            name: "Essen, Germany",
            latitude: 51.44968,
            longitude: 6.97337,
            zone: chrono_tz::Europe::Berlin,
        },
        City {
            name: "Tromsø, Norway (Arctic)",
            latitude: 69.6496,
            longitude: 18.956,
            zone: chrono_tz::Europe::Oslo,
        },
        City {
            name: "Quito, Ecuador",
            latitude: -0.1807,
            longitude: -78.4678,
            zone: chrono_tz::America::Guayaquil,
        },
        City {
            name: "Sydney, Australia",
            latitude: -33.8688,
            longitude: 151.2093,
            zone: chrono_tz::Australia::Sydney,
        },
    ];

    for city in &cities {
        let observer = Observer::new(city.latitude, city.longitude)?;
        let date = city
            .zone
            .with_ymd_and_hms(2019, 6, 24, 12, 0, 0)
            .single()
            .ok_or("ambiguous local time")?;

        println!("=== {} ===", city.name);
        println!(
            "Coordinates: {:.2}°N, {:.2}°E",
            city.latitude, city.longitude
        );
        print_day(&observer, date)?;
        print_phases(&observer, date)?;
        println!();
    }

    Ok(())
}

fn print_day(observer: &Observer, date: DateTime<Tz>) -> Result<(), Box<dyn std::error::Error>> {
    let day = observer.day_events(date)?;

    for event in day.iter() {
        match event.time() {
            Some(time) => println!("{:<18} {}", format!("{:?}", event.kind()), time),
            None => println!("{:<18} -", format!("{:?}", event.kind())),
        }
    }

    if observer.is_polar_day(date)? {
        println!("Polar day: the sun does not set");
    } else if observer.is_polar_night(date)? {
        println!("Polar night: the sun does not rise");
    }

    if day.get(SolarEventKind::SolarMidnight).is_none() {
        println!("No astronomical night");
    }
    Ok(())
}

fn print_phases(observer: &Observer, date: DateTime<Tz>) -> Result<(), Box<dyn std::error::Error>> {
    let midnight = date - Duration::hours(12);

    println!("Hourly phases:");
    for hour in (0..24).step_by(3) {
        let datetime = midnight + Duration::hours(hour);
        let lights = if observer.switch_lights_on(datetime)? {
            "lights on"
        } else {
            "lights off"
        };
        println!(
            "  {}  {:?} ({lights})",
            datetime.format("%H:%M"),
            observer.sun_phase(datetime)?
        );
    }
    Ok(())
}
