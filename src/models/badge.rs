use serde::{Deserialize, Serialize};

/// Shields.io endpoint badge payload.
///
/// Field order matches the JSON written to disk.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Badge {
    #[serde(rename = "schemaVersion")]
    pub schema_version: u8,
    pub label: String,
    pub message: String,
    pub color: String,
}

impl Badge {
    pub fn new(label: &str, message: String, color: &str) -> Self {
        Badge {
            schema_version: 1,
            label: label.to_string(),
            message,
            color: color.to_string(),
        }
    }
}
