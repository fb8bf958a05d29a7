//! Static classification of OpenWeather condition icon codes.
//!
//! Each code maps to a displayable asset group and a background gradient. The
//! table is ordered and matched by code prefix, first hit wins.

use serde::Serialize;

/// Asset group used to pick the weather image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetGroup {
    Clear,
    Cloud,
    Rain,
    Storm,
    Snow,
    Drizzle,
}

impl AssetGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetGroup::Clear => "clear",
            AssetGroup::Cloud => "cloud",
            AssetGroup::Rain => "rain",
            AssetGroup::Storm => "storm",
            AssetGroup::Snow => "snow",
            AssetGroup::Drizzle => "drizzle",
        }
    }

    /// Asset reference handed to the renderer.
    pub fn file_name(&self) -> String {
        format!("{}.png", self.as_str())
    }
}

impl std::fmt::Display for AssetGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Background gradient category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gradient {
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
    Snowy,
    Misty,
    Default,
}

impl Gradient {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gradient::Sunny => "sunny",
            Gradient::Cloudy => "cloudy",
            Gradient::Rainy => "rainy",
            Gradient::Stormy => "stormy",
            Gradient::Snowy => "snowy",
            Gradient::Misty => "misty",
            Gradient::Default => "default",
        }
    }

    pub fn css(&self) -> &'static str {
        match self {
            Gradient::Sunny => "linear-gradient(120deg, #fceabb 0%, #f8b500 100%)",
            Gradient::Cloudy => "linear-gradient(120deg, #a1c4fd 0%, #c2e9fb 100%)",
            Gradient::Rainy => "linear-gradient(120deg, #667db6 0%, #0082c8 50%, #0082c8 100%)",
            Gradient::Stormy => "linear-gradient(120deg, #232526 0%, #414345 100%)",
            Gradient::Snowy => "linear-gradient(120deg, #e0eafc 0%, #cfdef3 100%)",
            Gradient::Misty => "linear-gradient(120deg, #bdc3c7 0%, #2c3e50 100%)",
            Gradient::Default => "linear-gradient(45deg, #2f4680, #500ae4)",
        }
    }
}

impl std::fmt::Display for Gradient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Codes the provider is documented to send (day and night variants).
pub const KNOWN_ICON_CODES: [&str; 18] = [
    "01d", "01n", "02d", "02n", "03d", "03n", "04d", "04n", "09d", "09n", "10d", "10n", "11d",
    "11n", "13d", "13n", "50d", "50n",
];

const ICON_TABLE: &[(&str, AssetGroup, Gradient)] = &[
    ("01", AssetGroup::Clear, Gradient::Sunny),
    ("02", AssetGroup::Cloud, Gradient::Cloudy),
    ("03", AssetGroup::Cloud, Gradient::Cloudy),
    ("04", AssetGroup::Cloud, Gradient::Cloudy),
    ("09", AssetGroup::Rain, Gradient::Rainy),
    ("10", AssetGroup::Rain, Gradient::Rainy),
    ("11", AssetGroup::Storm, Gradient::Stormy),
    ("13", AssetGroup::Snow, Gradient::Snowy),
    ("50", AssetGroup::Drizzle, Gradient::Misty),
];

/// Result of classifying one icon code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconClass {
    pub code: String,
    pub asset: AssetGroup,
    pub gradient: Gradient,
}

impl IconClass {
    pub fn classify(code: &str) -> Self {
        let entry = ICON_TABLE.iter().find(|(prefix, _, _)| code.starts_with(prefix));

        let asset = match entry {
            Some((_, asset, _)) if KNOWN_ICON_CODES.contains(&code) => *asset,
            _ => AssetGroup::Clear,
        };
        let gradient = entry.map_or(Gradient::Default, |(_, _, gradient)| *gradient);

        Self {
            code: code.to_string(),
            asset,
            gradient,
        }
    }

    pub fn is_known(&self) -> bool {
        KNOWN_ICON_CODES.contains(&self.code.as_str())
    }
}
