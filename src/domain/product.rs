//! Vendor product records
//!
//! A [`Product`] is one raw catalog entry as returned by the vendor's
//! `read-v2` endpoint. Known fields are typed; every other attribute the
//! vendor sends is kept in [`Product::extra`] so the export CSV can carry the
//! vendor's complete column set.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One vendor catalog entry
///
/// `code`, `price` and `freeStock` are required and typed. A row where one of
/// them is missing, null or of the wrong type fails the whole page, which
/// aborts the run instead of exporting a partial catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Vendor article code
    pub code: String,

    /// Product name
    #[serde(default)]
    pub name: Option<String>,

    /// Raw EAN; may be null, a number or an arbitrary string
    #[serde(default)]
    pub ean: Value,

    /// Gross price before discount
    pub price: f64,

    /// Units in stock
    pub free_stock: i64,

    /// Brand, either an object with a `name` or a plain string
    #[serde(default)]
    pub brand: Value,

    /// Nested category object
    #[serde(default)]
    pub category: Option<Map<String, Value>>,

    /// Nested image object; a product without one is not exported
    #[serde(default)]
    pub image: Option<Map<String, Value>>,

    /// Marketing bullet points, not exported
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub highlights: Value,

    /// Any other vendor attribute
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Product {
    /// The image file name, if the product has a usable image reference
    pub fn image_file_name(&self) -> Option<&str> {
        self.image
            .as_ref()
            .and_then(|image| image.get("fileName"))
            .and_then(Value::as_str)
            .filter(|name| !name.trim().is_empty())
    }

    /// The brand name, flattened from the nested brand object
    pub fn brand_name(&self) -> Option<String> {
        match &self.brand {
            Value::Object(map) => map.get("name").and_then(Value::as_str).map(str::to_string),
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// The singular category name
    pub fn category_name(&self) -> Option<String> {
        self.category
            .as_ref()
            .and_then(|category| category.get("singularName"))
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// Body of one `read-v2` catalog page
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPage {
    /// Products on this page, in API order
    pub rows: Vec<Product>,
}

/// Renders a JSON value the way it is written into a CSV cell
pub fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
