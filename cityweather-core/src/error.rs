use thiserror::Error;

/// Shown when the provider rejects a query without saying why.
pub const CITY_NOT_FOUND: &str = "City not found!";

const EMPTY_QUERY_MESSAGE: &str = "Please enter a city name!";
const FETCH_FAILED_MESSAGE: &str = "An error occurred while fetching weather data!";

/// Failure taxonomy shared by every remote lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    /// The query was empty or whitespace only; no request was sent.
    #[error("empty query")]
    EmptyQuery,

    /// The provider answered with a non-success status.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request could not be sent, or the response could not be read or parsed.
    #[error("transport error: {0}")]
    Transport(String),
}

impl WeatherError {
    /// The single line of text a user gets to see in place of weather data.
    pub fn user_message(&self) -> String {
        match self {
            WeatherError::EmptyQuery => EMPTY_QUERY_MESSAGE.to_string(),
            WeatherError::NotFound(msg) => msg.clone(),
            WeatherError::Transport(_) => FETCH_FAILED_MESSAGE.to_string(),
        }
    }

    /// Build a `NotFound` from the provider's optional `message` field.
    pub fn not_found(message: Option<String>) -> Self {
        match message {
            Some(msg) if !msg.trim().is_empty() => WeatherError::NotFound(msg),
            _ => WeatherError::NotFound(CITY_NOT_FOUND.to_string()),
        }
    }

    pub fn transport(detail: impl std::fmt::Display) -> Self {
        WeatherError::Transport(detail.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_prefers_provider_message() {
        let err = WeatherError::not_found(Some("city not found".into()));
        assert_eq!(err.user_message(), "city not found");
    }

    #[test]
    fn not_found_falls_back_to_generic_text() {
        assert_eq!(WeatherError::not_found(None).user_message(), CITY_NOT_FOUND);
        assert_eq!(
            WeatherError::not_found(Some("  ".into())).user_message(),
            CITY_NOT_FOUND
        );
    }

    #[test]
    fn transport_hides_detail_from_user() {
        let err = WeatherError::transport("connection refused");
        assert_eq!(err.user_message(), FETCH_FAILED_MESSAGE);
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn empty_query_message() {
        assert_eq!(
            WeatherError::EmptyQuery.user_message(),
            "Please enter a city name!"
        );
    }
}
