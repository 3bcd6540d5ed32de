use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default_currency<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_currency))
}

/// Monetary amount attached to a single cost line item.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CostAmount {
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: f64,
    #[serde(
        default = "default_currency",
        deserialize_with = "null_as_default_currency"
    )]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for CostAmount {
    fn default() -> Self {
        CostAmount {
            value: 0.0,
            currency: default_currency(),
        }
    }
}

/// One cost line item as returned inside a bucket.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CostResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: CostAmount,
    #[serde(default)]
    pub line_item: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
}

impl CostResult {
    pub fn line_item_label(&self) -> &str {
        self.line_item.as_deref().unwrap_or("N/A")
    }

    pub fn project_label(&self) -> &str {
        self.project_id.as_deref().unwrap_or("N/A")
    }
}

/// Time-windowed group of results; timestamps are UNIX seconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CostBucket {
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_time: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_time: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<CostResult>,
}

/// One page of `/organization/costs`.
///
/// `data` stays `None` when the field is absent or `null`, which callers treat
/// the same as an empty list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CostPage {
    #[serde(default)]
    pub data: Option<Vec<CostBucket>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_more: bool,
    #[serde(default)]
    pub next_page: Option<String>,
}

impl CostPage {
    /// Buckets of a page that carries usable data, `None` otherwise.
    pub fn buckets(&self) -> Option<&[CostBucket]> {
        match self.data.as_deref() {
            Some(buckets) if !buckets.is_empty() => Some(buckets),
            _ => None,
        }
    }

    /// Cursor for the following page, exactly as sent; blank values count as
    /// no cursor.
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_page
            .as_deref()
            .filter(|c| !c.trim().is_empty())
    }
}
