//! Feature encoding for delay-risk scoring.
//!
//! Raw request fields arrive as loosely-typed strings. Encoding never fails:
//! anything unparsable degrades to a fixed default so that a prediction can
//! always be produced.

use chrono::{NaiveTime, Timelike};

/// Hour substituted when the time of day cannot be parsed.
pub const DEFAULT_HOUR: u8 = 12;

/// Number of buckets station names are hashed into.
pub const STATION_BUCKETS: u32 = 10;

/// Weather severity code.
///
/// Codes 0-3; anything above 1 counts as adverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weather {
    Clear,
    Cloudy,
    Rain,
    Storm,
    Fog,
}

impl Weather {
    /// Case-insensitive lookup of a weather label.
    ///
    /// Returns `None` for labels outside the fixed table.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "clear" => Some(Weather::Clear),
            "cloudy" => Some(Weather::Cloudy),
            "rain" => Some(Weather::Rain),
            "storm" => Some(Weather::Storm),
            "fog" => Some(Weather::Fog),
            _ => None,
        }
    }

    /// The numeric severity code fed to the model.
    pub fn code(self) -> u8 {
        match self {
            Weather::Clear => 0,
            Weather::Cloudy => 1,
            // Fog disrupts about as much as rain.
            Weather::Rain | Weather::Fog => 2,
            Weather::Storm => 3,
        }
    }
}

/// Fixed-length numeric description of a train's conditions.
///
/// Field ranges: `hour` 0-23, `day_of_week` 0-6 (0 = Monday),
/// `weather_code` 0-3, `station_code` 0-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureVector {
    pub hour: u8,
    pub day_of_week: u8,
    pub weather_code: u8,
    pub station_code: u8,
}

impl FeatureVector {
    /// True during the morning (07-10) and evening (17-20) peaks, inclusive.
    pub fn is_peak_hour(&self) -> bool {
        (7..=10).contains(&self.hour) || (17..=20).contains(&self.hour)
    }

    /// True on Saturday and Sunday.
    pub fn is_weekend(&self) -> bool {
        self.day_of_week >= 5
    }

    /// True for rain, fog and storms.
    pub fn is_adverse_weather(&self) -> bool {
        self.weather_code >= 2
    }

    /// The vector as an ordered array `[hour, day, weather, station]`.
    pub fn as_array(&self) -> [u8; 4] {
        [
            self.hour,
            self.day_of_week,
            self.weather_code,
            self.station_code,
        ]
    }
}

/// Build a feature vector from raw request fields.
///
/// # Examples
///
/// ```
/// use dispatch_server::risk::encode;
///
/// let features = encode("08:15", 2, "Storm", "Mumbai");
/// assert_eq!(features.hour, 8);
/// assert_eq!(features.weather_code, 3);
///
/// // Garbage degrades to defaults rather than failing.
/// let features = encode("late", 2, "volcanic ash", "Mumbai");
/// assert_eq!(features.hour, 12);
/// assert_eq!(features.weather_code, 0);
/// ```
pub fn encode(
    time_of_day: &str,
    day_of_week: u8,
    weather_label: &str,
    station_name: &str,
) -> FeatureVector {
    FeatureVector {
        hour: parse_hour(time_of_day),
        day_of_week: day_of_week.min(6),
        weather_code: Weather::from_label(weather_label).map_or(0, Weather::code),
        station_code: station_code(station_name),
    }
}

/// Extract the hour from an `HH:MM` string, or [`DEFAULT_HOUR`].
pub fn parse_hour(time_of_day: &str) -> u8 {
    NaiveTime::parse_from_str(time_of_day.trim(), "%H:%M")
        .map(|t| t.hour() as u8)
        .unwrap_or(DEFAULT_HOUR)
}

/// Stable bucket for a station name.
///
/// Uses 32-bit FNV-1a over the UTF-8 bytes of the name, so the same name maps
/// to the same code in every process.
pub fn station_code(name: &str) -> u8 {
    (fnv1a_32(name.as_bytes()) % STATION_BUCKETS) as u8
}

fn fnv1a_32(bytes: &[u8]) -> u32 {
    const OFFSET_BASIS: u32 = 0x811c_9dc5;
    const PRIME: u32 = 0x0100_0193;

    bytes.iter().fold(OFFSET_BASIS, |hash, &b| {
        (hash ^ u32::from(b)).wrapping_mul(PRIME)
    })
}
