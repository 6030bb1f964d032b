use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

pub const MSG_REQUIRED: &str = "Name, quantity, and price are required";
pub const MSG_NOT_NUMERIC: &str = "Quantity and price must be valid numbers";
pub const MSG_NEGATIVE: &str = "Quantity and price must be non-negative";

/// Persisted inventory row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Create body as the client sent it. Every field is loosely typed; `null`
/// and a missing key both land as `None`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateItemInput {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub quantity: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
}

/// A create request that passed validation; safe to bind straight into SQL.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    pub description: String,
}

impl CreateItemInput {
    /// Coerces the loose payload into a [`NewItem`], checking the rules in
    /// order: presence, numeric parse, then sign.
    pub fn validate(self) -> Result<NewItem, AppError> {
        let name = match self.name {
            Some(Value::String(name)) if !name.is_empty() => name,
            _ => return Err(AppError::Validation(MSG_REQUIRED.to_string())),
        };
        let (Some(raw_quantity), Some(raw_price)) = (self.quantity, self.price) else {
            return Err(AppError::Validation(MSG_REQUIRED.to_string()));
        };

        let (Some(quantity), Some(price)) = (coerce_number(&raw_quantity), coerce_number(&raw_price))
        else {
            return Err(AppError::Validation(MSG_NOT_NUMERIC.to_string()));
        };

        // sign is checked on the untruncated value, so -0.5 is negative
        if quantity < 0.0 || price < 0.0 {
            return Err(AppError::Validation(MSG_NEGATIVE.to_string()));
        }

        let Some(quantity) = to_integer(&raw_quantity, quantity) else {
            return Err(AppError::Validation(MSG_NOT_NUMERIC.to_string()));
        };

        Ok(NewItem {
            name,
            quantity,
            // normalises -0.0
            price: price + 0.0,
            description: description_or_empty(self.description),
        })
    }
}

/// Numbers pass through; strings are trimmed and parsed. Anything else, and
/// any non-finite result, is rejected.
fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<f64>().ok()?
        }
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Truncates an already coerced quantity toward zero. JSON integers are
/// taken exactly so large values do not round through `f64`.
fn to_integer(raw: &Value, coerced: f64) -> Option<i64> {
    if let Value::Number(n) = raw {
        if let Some(i) = n.as_i64() {
            return Some(i);
        }
    }
    let n = coerced.trunc();
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    (n >= i64::MIN as f64 && n < i64::MAX as f64).then_some(n as i64)
}

fn description_or_empty(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s,
        None | Some(Value::Null) | Some(Value::Bool(false)) => String::new(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
        Some(other) => other.to_string(),
    }
}
