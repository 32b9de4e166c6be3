//! Domain identifier types
//!
//! The two product identifiers the pipeline derives: the numeric EAN barcode
//! and the internal (prefixed) SKU.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// European Article Number
///
/// Any numeric vendor value is kept as a number: whole values exactly, others
/// (fractional, or beyond `i64`) as `f64`. Values that are not numbers have no
/// `Ean` and the row carrying them is dropped.
///
/// # Examples
///
/// ```
/// use catalog_sync::domain::ids::Ean;
/// use std::str::FromStr;
///
/// let ean = Ean::from_str(" 8712345678906 ").unwrap();
/// assert_eq!(ean, Ean::Whole(8712345678906));
/// assert_eq!(Ean::from_str("12.5").unwrap(), Ean::Fractional(12.5));
/// assert!(Ean::from_str("n.v.t.").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ean {
    /// Integral value, held exactly
    Whole(i64),
    /// Finite non-integral value, or one outside the `i64` range
    Fractional(f64),
}

impl Ean {
    /// Creates an EAN from a whole number
    pub fn new(value: i64) -> Self {
        Ean::Whole(value)
    }

    /// Coerces a raw vendor JSON value into an EAN
    ///
    /// Accepts numbers and strings holding a number. Returns `None` for null,
    /// empty, non-numeric or non-finite input.
    pub fn coerce(raw: &Value) -> Option<Self> {
        match raw {
            Value::Number(n) => match n.as_i64() {
                Some(i) => Some(Ean::Whole(i)),
                None => n.as_f64().and_then(Self::from_float),
            },
            Value::String(s) => Self::from_str(s).ok(),
            _ => None,
        }
    }

    fn from_float(f: f64) -> Option<Self> {
        if !f.is_finite() {
            return None;
        }
        if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
            Some(Ean::Whole(f as i64))
        } else {
            Some(Ean::Fractional(f))
        }
    }

    /// The value as a float, as stored in the database
    pub fn as_f64(&self) -> f64 {
        match *self {
            Ean::Whole(i) => i as f64,
            Ean::Fractional(f) => f,
        }
    }
}

impl fmt::Display for Ean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ean::Whole(i) => write!(f, "{i}"),
            Ean::Fractional(v) => write!(f, "{v}"),
        }
    }
}

impl FromStr for Ean {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("EAN cannot be empty".to_string());
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Ok(Ean::Whole(i));
        }
        trimmed
            .parse::<f64>()
            .ok()
            .and_then(Self::from_float)
            .ok_or_else(|| format!("EAN is not numeric: {trimmed}"))
    }
}

/// Internal stock-keeping unit
///
/// The vendor code with the supplier's fixed prefix in front of it. This is
/// the primary key of the per-run database table.
///
/// # Examples
///
/// ```
/// use catalog_sync::domain::ids::InternalSku;
///
/// let sku = InternalSku::derive("THG", "ABC123");
/// assert_eq!(sku.as_str(), "THGABC123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InternalSku(String);

impl InternalSku {
    /// Builds the internal SKU from a prefix and the vendor code
    ///
    /// An empty code yields the bare prefix; uniqueness is enforced by the
    /// snapshot table's key, not here.
    pub fn derive(prefix: &str, vendor_code: &str) -> Self {
        Self(format!("{prefix}{vendor_code}"))
    }

    /// Returns the SKU as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for InternalSku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for InternalSku {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
