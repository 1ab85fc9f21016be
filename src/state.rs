//! Application state - single source of truth

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A scalar value exactly as the weather API sent it.
///
/// Any field may arrive as a JSON string, number, boolean or `null`
/// (temperatures usually come as decimal strings such as `"10.00"`).
/// Values are displayed verbatim and never converted; `null` shows as empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Reading {
    #[default]
    Empty,
    Number(serde_json::Number),
    Flag(bool),
    Text(String),
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Empty => Ok(()),
            Reading::Number(n) => write!(f, "{n}"),
            Reading::Flag(b) => write!(f, "{b}"),
            Reading::Text(s) => f.write_str(s),
        }
    }
}

impl PartialEq<str> for Reading {
    fn eq(&self, other: &str) -> bool {
        match self {
            Reading::Text(s) => s == other,
            other_kind => other_kind.to_string() == other,
        }
    }
}

impl PartialEq<&str> for Reading {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl From<i64> for Reading {
    fn from(value: i64) -> Self {
        Reading::Number(value.into())
    }
}

impl From<&str> for Reading {
    fn from(value: &str) -> Self {
        Reading::Text(value.to_string())
    }
}

/// Weather result from the local weather API.
///
/// Every field passes through untouched; missing keys stay empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct WeatherResult {
    pub location: Reading,
    /// Icon URI
    pub icon: Reading,
    pub temperature_c: Reading,
    pub temperature_f: Reading,
    #[serde(rename = "Country")]
    pub country: Reading,
    pub description: Reading,
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, Default, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Last successful lookup, replaced wholesale on the next one
    #[debug(section = "Weather", label = "Result", debug_fmt)]
    pub weather: Option<WeatherResult>,

    /// Location of the lookup in flight
    #[debug(section = "Lookup", label = "Pending", debug_fmt)]
    pub pending: Option<String>,

    /// Id of the latest submission; older responses are ignored
    #[debug(section = "Lookup", label = "Request", debug_fmt)]
    pub request_seq: u64,

    /// Current text of the input form
    #[debug(skip)]
    pub query: String,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a response carrying `request_id` is still wanted
    pub fn is_current(&self, request_id: u64) -> bool {
        request_id == self.request_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_numeric_payload() {
        let json = r#"{"location":"London","icon":"http://x/icon.png","temperature_c":10,"temperature_f":50,"Country":"UK","description":"Cloudy"}"#;
        let result: WeatherResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.location, "London");
        assert_eq!(result.icon, "http://x/icon.png");
        assert_eq!(result.temperature_c.to_string(), "10");
        assert_eq!(result.temperature_f.to_string(), "50");
        assert_eq!(result.country, "UK");
        assert_eq!(result.description, "Cloudy");
    }

    #[test]
    fn test_decimal_strings_pass_through() {
        let json = r#"{"location":"Oslo","temperature_c":"-3.50","temperature_f":"25.70"}"#;
        let result: WeatherResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.temperature_c, Reading::from("-3.50"));
        assert_eq!(result.temperature_f.to_string(), "25.70");
        assert_eq!(result.country, "");
    }

    #[test]
    fn test_float_reading_keeps_digits() {
        let reading: Reading = serde_json::from_str("10.5").unwrap();
        assert_eq!(reading.to_string(), "10.5");
    }

    #[test]
    fn test_numeric_location_passes_through() {
        let json = r#"{"location":12345,"icon":"http://x/icon.png","Country":"UK","description":"Cloudy"}"#;
        let result: WeatherResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.location, Reading::from(12345_i64));
        assert_eq!(result.location.to_string(), "12345");
        assert_eq!(result.country, "UK");
    }

    #[test]
    fn test_null_icon_is_empty() {
        let json = r#"{"location":"London","icon":null,"description":null}"#;
        let result: WeatherResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.icon, Reading::Empty);
        assert_eq!(result.icon.to_string(), "");
        assert_eq!(result.description, "");
        assert_eq!(result.location, "London");
    }

    #[test]
    fn test_boolean_field_is_shown_verbatim() {
        let json = r#"{"description":true}"#;
        let result: WeatherResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.description.to_string(), "true");
    }

    #[test]
    fn test_lowercase_country_is_not_the_api_key() {
        let json = r#"{"country":"UK"}"#;
        let result: WeatherResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.country, "");
    }

    #[test]
    fn test_is_current() {
        let state = AppState {
            request_seq: 3,
            ..Default::default()
        };
        assert!(state.is_current(3));
        assert!(!state.is_current(2));
    }
}
