use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the device event log.
///
/// Both fields are optional: the device is an external collaborator and a
/// record with a missing (or non-string) field must not spoil the rest of the
/// log. Such records are simply not displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
}

impl EventRecord {
    pub fn new(word: &str, time: &str) -> Self {
        Self {
            word: Some(word.to_string()),
            time: Some(time.to_string()),
        }
    }

    /// Lenient conversion from one element of the device JSON array.
    /// Non-object elements and non-string fields become `None`.
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Self {
            word: field("word"),
            time: field("time"),
        }
    }

    /// Decode a whole device log body (must be a JSON array).
    pub fn list_from_value(value: &Value) -> Option<Vec<Self>> {
        value
            .as_array()
            .map(|items| items.iter().map(Self::from_value).collect())
    }

    /// Word, treating an empty string as missing.
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref().filter(|w| !w.is_empty())
    }

    /// Raw timestamp, treating an empty string as missing.
    pub fn time(&self) -> Option<&str> {
        self.time.as_deref().filter(|t| !t.is_empty())
    }
}
