// src/domain/weather.rs
use std::fmt;

const KELVIN_OFFSET: f64 = 273.0;

/// City and state abbreviation as resolved from a zipcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    city: String,
    state: String,
}

impl Location {
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Free-text query understood by the weather provider.
    pub fn weather_query(&self) -> String {
        format!("{}, {}, Brazil", self.city, self.state)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.city, self.state)
    }
}

/// Current temperature of a city in Celsius, Fahrenheit and Kelvin.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub city: String,
    pub temp_c: f64,
    pub temp_f: f64,
    pub temp_k: f64,
}

impl WeatherReading {
    /// Each scale is derived from the raw Celsius value and rounded on its
    /// own; rounded values are never fed into another conversion.
    pub fn from_celsius(city: impl Into<String>, temp_c: f64) -> Self {
        Self {
            city: city.into(),
            temp_c: round_one_decimal(temp_c),
            temp_f: round_one_decimal(celsius_to_fahrenheit(temp_c)),
            temp_k: round_one_decimal(celsius_to_kelvin(temp_c)),
        }
    }
}

fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}

fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + KELVIN_OFFSET
}

// Half away from zero.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
