use chrono::Utc;
use sea_orm::prelude::{DateTimeWithTimeZone, Json};
use serde::{Deserialize, Serialize};

/// Body of every error response and of bare acknowledgements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Current time for created_at/updated_at columns
pub fn timestamp_now() -> DateTimeWithTimeZone {
    Utc::now().fixed_offset()
}

/// Read a JSON array column, treating anything malformed as empty
pub fn json_list<T: serde::de::DeserializeOwned>(value: &Json) -> Vec<T> {
    serde_json::from_value(value.clone()).unwrap_or_default()
}

/// Trimmed, non-empty value of a required text field
pub fn required(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_list() {
        let urls: Vec<String> = json_list(&json!(["a.png", "b.png"]));
        assert_eq!(urls, vec!["a.png", "b.png"]);

        let broken: Vec<String> = json_list(&json!({"not": "a list"}));
        assert!(broken.is_empty());
    }

    #[test]
    fn test_required() {
        assert_eq!(required(&Some("  shirt ".to_string())), Some("shirt"));
        assert_eq!(required(&Some("   ".to_string())), None);
        assert_eq!(required(&None), None);
    }
}
