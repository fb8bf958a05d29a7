//! Core library for the `cityweather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Provider clients for current weather and city photos
//! - The normalization from provider payloads to renderable view-models
//! - The persisted theme preference
//!
//! It is used by `cityweather-cli`, but can also be reused by other front ends.

pub mod config;
pub mod error;
pub mod icon;
pub mod location;
pub mod model;
pub mod photos;
pub mod provider;
pub mod theme;
pub mod weather;

pub use config::{Config, ProviderConfig};
pub use error::WeatherError;
pub use icon::{AssetGroup, Gradient, IconClass};
pub use location::{FALLBACK_LOCATION_LABEL, LocationResolver};
pub use model::{LocationView, ProviderWeather, WeatherView};
pub use photos::{DEFAULT_PHOTO_COUNT, PhotoLookup};
pub use provider::{PhotoProvider, ProviderId, WeatherProvider};
pub use theme::{FilePreferenceStore, PreferenceStore, Theme, ThemeState};
pub use weather::WeatherNormalizer;
