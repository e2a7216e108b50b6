use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A single roster entry
///
/// Opaque to categorization; only the roster detail view reads it. Loading is
/// lenient: a field with an unexpected shape falls back to its default instead
/// of rejecting the whole team list, and unknown fields are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    #[serde(default = "Uuid::new_v4", deserialize_with = "lenient_id")]
    id: Uuid,
    #[serde(default, deserialize_with = "lenient_string")]
    name: String,
    #[serde(default, deserialize_with = "lenient_number")]
    number: Option<u32>,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    position: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            number: None,
            position: None,
            extra: Map::new(),
        }
    }

    pub fn with_number(mut self, number: u32) -> Self {
        self.number = Some(number);
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> Option<u32> {
        self.number
    }

    pub fn position(&self) -> Option<&str> {
        self.position.as_deref()
    }

    /// Fields this model does not name, as they were loaded
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Uuid, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::new_v4))
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(lenient_optional_string(deserializer)?.unwrap_or_default())
}

fn lenient_optional_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Jersey numbers arrive as integers or numeric strings; anything else is dropped
fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let number = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(number)
}
