//! Garment - the record describing one clothing item up for swap.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Default condition and rarity when the caller leaves them out.
pub const DEFAULT_QUALITY: f64 = 0.5;

/// A single garment as described by the caller.
///
/// Every field except `name` is optional on the wire and falls back to a
/// deterministic default. Unknown fields are ignored.
///
/// `condition` and `rarity` are expected in `[0, 1]` but are not rejected
/// outside it; the scoring engine clamps the parity scores it derives from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Garment {
    /// Free-text identifier ("Vintage Denim Jacket").
    #[serde(default)]
    pub name: String,

    /// Classification such as "Outerwear" or "Tops".
    #[serde(default)]
    pub category: String,

    /// Style tags; order and duplicates are irrelevant for scoring.
    #[serde(default)]
    pub style_tags: Vec<String>,

    /// Descriptive traits, used only for prompt text.
    #[serde(default)]
    pub personality: Vec<String>,

    /// Single vibe value, compared case-sensitively.
    #[serde(default)]
    pub vibe: String,

    /// Quality proxy in `[0, 1]`.
    #[serde(default = "default_quality")]
    pub condition: f64,

    /// Rarity in `[0, 1]`.
    #[serde(default = "default_quality")]
    pub rarity: f64,

    /// Size label, compared by exact match.
    #[serde(default)]
    pub size: String,
}

fn default_quality() -> f64 {
    DEFAULT_QUALITY
}

impl Garment {
    /// Creates a garment with the given name and every other field defaulted.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: String::new(),
            style_tags: Vec::new(),
            personality: Vec::new(),
            vibe: String::new(),
            condition: DEFAULT_QUALITY,
            rarity: DEFAULT_QUALITY,
            size: String::new(),
        }
    }

    /// Parses and validates a garment taken from a request body.
    ///
    /// `field` names the request field (e.g. `garment_a`) for error messages.
    ///
    /// # Errors
    ///
    /// - `Missing` when the value is absent, `null`, or an empty object
    /// - `InvalidFormat` when it is not an object or a field has the wrong type
    /// - `EmptyField` when the name is blank
    pub fn from_request_value(
        field: &str,
        value: Option<&serde_json::Value>,
    ) -> Result<Self, ValidationError> {
        if matches!(value, Some(serde_json::Value::Object(map)) if map.is_empty()) {
            return Err(ValidationError::missing("garment data"));
        }

        let garment = Self::from_tool_value(field, value)?;
        if garment.name.trim().is_empty() {
            return Err(ValidationError::empty_field(format!("{}.name", field)));
        }

        Ok(garment)
    }

    /// Parses a garment passed as a tool argument.
    ///
    /// Looser than [`Garment::from_request_value`]: every field, `name`
    /// included, falls back to its default, so `{}` is a valid garment.
    ///
    /// # Errors
    ///
    /// - `Missing` when the value is absent or `null`
    /// - `InvalidFormat` when it is not an object or a field has the wrong type
    pub fn from_tool_value(
        field: &str,
        value: Option<&serde_json::Value>,
    ) -> Result<Self, ValidationError> {
        match value {
            None | Some(serde_json::Value::Null) => Err(ValidationError::missing("garment data")),
            Some(value @ serde_json::Value::Object(_)) => serde_json::from_value(value.clone())
                .map_err(|e| ValidationError::invalid_format(field, e.to_string())),
            Some(_) => Err(ValidationError::invalid_format(
                field,
                "expected a JSON object",
            )),
        }
    }

    /// Style tags as a set, which is how the scoring engine compares them.
    pub fn style_set(&self) -> BTreeSet<&str> {
        self.style_tags.iter().map(String::as_str).collect()
    }

    /// Vibe for prompt text, `neutral` when unset.
    pub fn display_vibe(&self) -> &str {
        non_empty_or(&self.vibe, "neutral")
    }

    /// Size for prompt text, `M` when unset.
    pub fn display_size(&self) -> &str {
        non_empty_or(&self.size, "M")
    }

    /// Category for prompt text, `Unknown` when unset.
    pub fn display_category(&self) -> &str {
        non_empty_or(&self.category, "Unknown")
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
