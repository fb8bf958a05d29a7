use serde::{Deserialize, Serialize};

use crate::icon::IconClass;

/// Current-weather payload as the provider sends it (metric units).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderWeather {
    pub name: String,
    pub coord: Coord,
    pub main: MainReadings,
    pub wind: Wind,
    /// Meters.
    pub visibility: u32,
    pub sys: SunTimes,
    pub weather: Vec<Condition>,
    /// Offset from UTC in seconds.
    pub timezone: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub pressure: u32,
    pub humidity: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

/// Epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SunTimes {
    pub sunrise: i64,
    pub sunset: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Condition {
    pub icon: String,
}

/// Renderable snapshot of one city search.
///
/// `sunrise`/`sunset` are in the viewer's local zone while `time` is the wall
/// clock at the queried city; the two must not be mixed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherView {
    pub temperature: i32,
    pub feels_like: i32,
    pub pressure: u32,
    pub humidity: u8,
    /// km/h as reported.
    pub wind_speed: f64,
    /// Kilometers, one fractional digit.
    pub visibility: String,
    pub sunrise: String,
    pub sunset: String,
    pub location: String,
    pub time: String,
    pub icon: IconClass,
    pub lat: f64,
    pub lon: f64,
}

/// Place name resolved for a map position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationView {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}
