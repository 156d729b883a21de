//! Form data submitted by create/update and its validation.
//!
//! The form is loosely typed on the wire. Decoding never fails on a field of
//! the wrong type; such a field is simply treated as absent, and validation
//! then rejects the form as a whole.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use catalog_core::{DomainError, DomainResult};

use crate::product::ProductFields;

/// Transient create/update input.
///
/// `categories` is a single comma-separated string, not a list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductFormData {
    #[serde(default, deserialize_with = "string_or_absent")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    pub categories: Option<String>,
    #[serde(default, deserialize_with = "number_or_absent")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "number_or_absent")]
    pub stock: Option<f64>,
}

impl ProductFormData {
    /// Decode a raw request body.
    ///
    /// An empty body is an empty form. Anything else must be a JSON object.
    pub fn from_body(body: &[u8]) -> DomainResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| DomainError::validation(format!("malformed JSON body: {e}")))?;
        if !value.is_object() {
            return Err(DomainError::validation("expected a JSON object"));
        }

        serde_json::from_value(value).map_err(|e| DomainError::validation(e.to_string()))
    }

    /// Check that every field is present and truthy, then build the store payload.
    ///
    /// Truthiness follows the loose rules the API has always applied: an empty
    /// string, `0` and `NaN` all count as missing. Infinite numbers are missing
    /// too. A whitespace-only name is accepted, and so is a categories string
    /// that splits to nothing (`","`).
    pub fn validate(self) -> DomainResult<ProductFields> {
        let name = truthy_str(self.name).ok_or(DomainError::missing("name"))?;
        let categories = truthy_str(self.categories).ok_or(DomainError::missing("categories"))?;
        let price = truthy_num(self.price).ok_or(DomainError::missing("price"))?;
        let stock = truthy_num(self.stock).ok_or(DomainError::missing("stock"))?;

        Ok(ProductFields {
            name,
            categories: parse_categories(&categories),
            price,
            stock,
        })
    }
}

/// Split a comma-separated category string.
///
/// Pieces are trimmed and empty pieces dropped; order and duplicates are kept.
pub fn parse_categories(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_owned)
        .collect()
}

fn truthy_str(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.is_empty())
}

fn truthy_num(v: Option<f64>) -> Option<f64> {
    v.filter(|n| *n != 0.0 && n.is_finite())
}

fn string_or_absent<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

// Numeric strings are accepted because the store casts them on write.
// Non-finite values ("inf", "-infinity") cannot be stored as numbers and count
// as absent.
fn number_or_absent<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let n = match Option::<Value>::deserialize(d)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(n.filter(|n| n.is_finite()))
}
