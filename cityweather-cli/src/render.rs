//! Plain-text rendering of the view-models.

use cityweather_core::WeatherView;

pub fn weather(view: &WeatherView) -> String {
    let mut out = format!("{}  ({})\n", view.location, view.time);
    out.push_str(&format!(
        "{} °C, feels like {} °C\n",
        view.temperature, view.feels_like
    ));
    out.push_str(&format!("  Humidity    {} %\n", view.humidity));
    out.push_str(&format!("  Wind speed  {} Km/h\n", view.wind_speed));
    out.push_str(&format!("  Pressure    {} hPa\n", view.pressure));
    out.push_str(&format!("  Visibility  {} km\n", view.visibility));
    out.push_str(&format!("  Sunrise     {}\n", view.sunrise));
    out.push_str(&format!("  Sunset      {}\n", view.sunset));
    out.push_str(&format!("  Map         {:.4}, {:.4}\n", view.lat, view.lon));
    out.push_str(&format!(
        "  Icon        {} -> {} ({} background)\n",
        view.icon.code,
        view.icon.asset.file_name(),
        view.icon.gradient
    ));

    out
}

pub fn photos(city: &str, urls: &[String]) -> String {
    urls.iter()
        .enumerate()
        .map(|(i, url)| format!("  {city} view {}: {url}\n", i + 1))
        .collect()
}
