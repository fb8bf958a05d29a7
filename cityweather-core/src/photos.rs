use std::sync::Arc;

use tracing::{instrument, warn};

use crate::provider::PhotoProvider;

pub const DEFAULT_PHOTO_COUNT: u32 = 5;

/// Photo enrichment for a city. Never fails: photos are optional.
#[derive(Debug, Clone)]
pub struct PhotoLookup {
    provider: Arc<dyn PhotoProvider>,
}

impl PhotoLookup {
    pub fn new(provider: Arc<dyn PhotoProvider>) -> Self {
        Self { provider }
    }

    /// Up to `count` image URLs in provider ranking order; empty on any failure.
    #[instrument(skip(self))]
    pub async fn lookup(&self, city: &str, count: u32) -> Vec<String> {
        let city = city.trim();
        if city.is_empty() || count == 0 {
            return Vec::new();
        }

        match self.provider.search(city, count).await {
            Ok(mut urls) => {
                urls.truncate(count as usize);
                urls
            }
            Err(err) => {
                warn!(error = %err, "photo search failed, showing none");
                Vec::new()
            }
        }
    }
}
