//! City search: one remote call, then a pure mapping onto [`WeatherView`].

use std::{fmt::Display, sync::Arc};

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use tracing::instrument;

use crate::{
    WeatherError,
    icon::IconClass,
    model::{ProviderWeather, WeatherView},
    provider::WeatherProvider,
};

const CITY_TIME_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";
const SUN_TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Clone)]
pub struct WeatherNormalizer {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherNormalizer {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Look up current weather for `city`. Each call is independent; nothing is
    /// retained or retried.
    #[instrument(skip(self))]
    pub async fn lookup(&self, city: &str) -> Result<WeatherView, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::EmptyQuery);
        }

        let raw = self.provider.current_by_name(city).await?;
        normalize(&raw, Utc::now(), &Local)
    }
}

/// Map a provider payload onto the view-model.
///
/// `now` drives the city wall clock; `local` is the zone sunrise and sunset are
/// rendered in.
pub fn normalize<Tz>(
    raw: &ProviderWeather,
    now: DateTime<Utc>,
    local: &Tz,
) -> Result<WeatherView, WeatherError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let condition = raw
        .weather
        .first()
        .ok_or_else(|| WeatherError::transport("provider response contained no conditions"))?;

    Ok(WeatherView {
        temperature: truncate_degrees(raw.main.temp),
        feels_like: truncate_degrees(raw.main.feels_like),
        pressure: raw.main.pressure,
        humidity: raw.main.humidity,
        wind_speed: raw.wind.speed,
        visibility: format_visibility(raw.visibility),
        sunrise: local_time_of_day(raw.sys.sunrise, local)?,
        sunset: local_time_of_day(raw.sys.sunset, local)?,
        location: raw.name.clone(),
        time: city_wall_clock(now, raw.timezone),
        icon: IconClass::classify(&condition.icon),
        lat: raw.coord.lat,
        lon: raw.coord.lon,
    })
}

/// Floor, never round: -0.5 becomes -1.
pub fn truncate_degrees(celsius: f64) -> i32 {
    celsius.floor() as i32
}

/// Meters to kilometers with exactly one fractional digit.
///
/// Exact halves (x.x250 / x.x750 km) round up; every other value is formatted
/// from the float quotient.
pub fn format_visibility(meters: u32) -> String {
    if matches!(meters % 1000, 250 | 750) {
        let tenths = (meters + 50) / 100;
        return format!("{}.{}", tenths / 10, tenths % 10);
    }
    format!("{:.1}", f64::from(meters) / 1000.0)
}

/// Present instant taken as UTC, shifted by the city's offset.
pub fn city_wall_clock(now: DateTime<Utc>, offset_secs: i32) -> String {
    let shifted = now.naive_utc() + Duration::seconds(i64::from(offset_secs));
    shifted.format(CITY_TIME_FORMAT).to_string()
}

fn local_time_of_day<Tz>(epoch_secs: i64, local: &Tz) -> Result<String, WeatherError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let utc = DateTime::<Utc>::from_timestamp(epoch_secs, 0)
        .ok_or_else(|| WeatherError::transport(format!("timestamp out of range: {epoch_secs}")))?;

    Ok(utc.with_timezone(local).format(SUN_TIME_FORMAT).to_string())
}
