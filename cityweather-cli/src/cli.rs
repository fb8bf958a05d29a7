use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use cityweather_core::{
    Config, DEFAULT_PHOTO_COUNT, FilePreferenceStore, LocationResolver, PhotoLookup, ProviderId,
    Theme, ThemeState, WeatherNormalizer,
    location::label_or_fallback,
    provider::{photo_provider_from_config, weather_provider_from_config},
};
use inquire::Password;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "cityweather",
    version,
    about = "Current weather, place names and photos for a city"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure credentials for a specific provider.
    Configure {
        /// Provider short name, "openweather" or "unsplash".
        provider: String,
    },

    /// Show current weather for a city.
    Show {
        /// City name.
        city: String,

        /// Number of photos to list.
        #[arg(long, default_value_t = DEFAULT_PHOTO_COUNT)]
        photos: u32,

        /// Print the view-model as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Name the place at a coordinate.
    Locate {
        #[arg(allow_negative_numbers = true)]
        lat: f64,

        #[arg(allow_negative_numbers = true)]
        lon: f64,

        /// Print the view-model as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show or change the display theme.
    Theme {
        action: Option<ThemeAction>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeAction {
    Light,
    Dark,
    Toggle,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { provider } => configure(&provider),
            Command::Show { city, photos, json } => show(&city, photos, json).await,
            Command::Locate { lat, lon, json } => locate(lat, lon, json).await,
            Command::Theme { action } => theme(action),
        }
    }
}

fn configure(provider: &str) -> anyhow::Result<()> {
    let id = ProviderId::try_from(provider)?;

    let api_key = Password::new(&format!("API key for {id}:"))
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    // Load the file only, so environment overrides are not persisted.
    let path = Config::config_file_path()?;
    let mut config = Config::load_from(&path)?;
    config.upsert_provider_api_key(id, api_key.trim().to_string());
    config.save_to(&path)?;

    println!("Saved {id} credentials to {}", path.display());
    Ok(())
}

async fn show(city: &str, photo_count: u32, json: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = weather_provider_from_config(&config)?;
    let normalizer = WeatherNormalizer::new(Arc::from(provider));

    let view = match normalizer.lookup(city).await {
        Ok(view) => view,
        Err(err) => {
            tracing::debug!(error = %err, "city search failed");
            anyhow::bail!(err.user_message());
        }
    };

    let photos = PhotoLookup::new(Arc::from(photo_provider_from_config(&config)?));
    let urls = photos.lookup(&view.location, photo_count).await;

    if json {
        let out = serde_json::json!({ "weather": view, "photos": urls });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", render::weather(&view));
        print!("{}", render::photos(&view.location, &urls));
    }

    Ok(())
}

async fn locate(lat: f64, lon: f64, json: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = weather_provider_from_config(&config)?;
    let resolver = LocationResolver::new(Arc::from(provider));

    let result = resolver.resolve(lat, lon).await;
    let label = label_or_fallback(&result);

    if json {
        let out = serde_json::json!({ "name": label, "lat": lat, "lon": lon });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{label} ({lat:.4}, {lon:.4})");
    }

    Ok(())
}

fn theme(action: Option<ThemeAction>) -> anyhow::Result<()> {
    let mut state = ThemeState::init(FilePreferenceStore::default_location()?);

    let theme = match action {
        None => state.current(),
        Some(ThemeAction::Toggle) => state.toggle()?,
        Some(ThemeAction::Light) => {
            state.set(Theme::Light)?;
            Theme::Light
        }
        Some(ThemeAction::Dark) => {
            state.set(Theme::Dark)?;
            Theme::Dark
        }
    };

    println!("Theme: {theme}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_show_with_defaults() {
        let cli =
            Cli::try_parse_from(["cityweather", "show", "New York"]).expect("parses");
        match cli.command {
            Command::Show { city, photos, json } => {
                assert_eq!(city, "New York");
                assert_eq!(photos, DEFAULT_PHOTO_COUNT);
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_negative_coordinates() {
        let cli = Cli::try_parse_from(["cityweather", "locate", "51.5", "-0.12"])
            .expect("parses");
        match cli.command {
            Command::Locate { lat, lon, .. } => {
                assert_eq!(lat, 51.5);
                assert_eq!(lon, -0.12);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn theme_action_is_optional() {
        let cli = Cli::try_parse_from(["cityweather", "theme"]).expect("parses");
        assert!(matches!(cli.command, Command::Theme { action: None }));

        let cli =
            Cli::try_parse_from(["cityweather", "theme", "toggle"]).expect("parses");
        assert!(matches!(
            cli.command,
            Command::Theme {
                action: Some(ThemeAction::Toggle)
            }
        ));
    }

    #[test]
    fn rejects_unknown_theme() {
        assert!(Cli::try_parse_from(["cityweather", "theme", "blue"]).is_err());
    }
}
