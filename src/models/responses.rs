use serde::Deserialize;
use serde_json::Value;

/// Message used when a 2xx body carries neither `results` nor `error`
pub const GENERIC_PROCESSING_ERROR: &str = "There was an error in processing your request";

/// Envelope shared by the matching and search endpoints
///
/// Both fields are kept as raw JSON so the caller can tell "missing" apart from
/// "present but not an array".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultsEnvelope {
    #[serde(default)]
    pub results: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl ResultsEnvelope {
    /// Build an envelope from any JSON value; non-object bodies yield an empty envelope
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Server-supplied error message, if one is present and non-empty
    pub fn error_message(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::Null => None,
            Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
