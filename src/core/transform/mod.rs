//! Catalog transformation
//!
//! Turns raw vendor products into priced [`CatalogRow`]s:
//!
//! - products without an image file name are dropped
//! - brand, category and image objects are flattened into columns
//! - image URL, internal SKU and the empty placeholder columns are derived
//! - the configured discount is applied
//! - products whose EAN is not a number are dropped
//!
//! The transform is pure; the same input always gives the same table.

pub mod pricing;

use crate::domain::product::value_to_cell;
use crate::domain::{CatalogRow, CatalogTable, Ean, InternalSku, Product};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Inputs of the transform that come from configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TransformSettings {
    /// Discount percentage, e.g. `10.0`
    pub discount_percent: f64,
    /// Prefix for image file names
    pub image_base_url: String,
    /// Prefix for the internal SKU
    pub sku_prefix: String,
}

/// Result of one transform
#[derive(Debug, Clone, PartialEq)]
pub struct TransformOutput {
    /// Rows kept, in input order
    pub table: CatalogTable,
    /// Products received
    pub input: usize,
    /// Dropped because no image file name was present
    pub dropped_missing_image: usize,
    /// Dropped because the EAN was not a number
    pub dropped_invalid_ean: usize,
}

impl TransformOutput {
    /// Total rows dropped
    pub fn dropped(&self) -> usize {
        self.dropped_missing_image + self.dropped_invalid_ean
    }
}

/// Transform raw products into the export table
pub fn transform(products: Vec<Product>, settings: &TransformSettings) -> TransformOutput {
    let input = products.len();
    let mut rows = Vec::with_capacity(input);
    let mut dropped_missing_image = 0;
    let mut dropped_invalid_ean = 0;

    for product in products {
        let Some(file_name) = product.image_file_name() else {
            tracing::debug!(code = %product.code, "Dropping product without image");
            dropped_missing_image += 1;
            continue;
        };
        let image_url = format!("{}{}", settings.image_base_url, file_name);

        let Some(ean) = Ean::coerce(&product.ean) else {
            tracing::debug!(code = %product.code, ean = %product.ean, "Dropping product with invalid EAN");
            dropped_invalid_ean += 1;
            continue;
        };

        let eigen_sku = InternalSku::derive(&settings.sku_prefix, &product.code);

        let discount_amount = pricing::discount_amount(product.price, settings.discount_percent);
        let price = pricing::net_price(product.price, discount_amount);

        let mut attributes: BTreeMap<String, String> = product
            .extra
            .iter()
            .map(|(key, value)| (key.clone(), value_to_cell(value)))
            .collect();
        if let Some(category) = &product.category {
            attributes.extend(prefixed_columns("category_", category, "singularName"));
        }
        if let Some(image) = &product.image {
            attributes.extend(prefixed_columns("image_", image, "fileName"));
        }

        rows.push(CatalogRow {
            brand: product.brand_name(),
            category: product.category_name(),
            code: product.code,
            name: product.name.unwrap_or_default(),
            ean,
            free_stock: product.free_stock,
            price,
            discount_amount,
            image_url,
            eigen_sku,
            attributes,
        });
    }

    let output = TransformOutput {
        table: CatalogTable::new(rows),
        input,
        dropped_missing_image,
        dropped_invalid_ean,
    };

    tracing::info!(
        input = output.input,
        kept = output.table.len(),
        dropped_missing_image = output.dropped_missing_image,
        dropped_invalid_ean = output.dropped_invalid_ean,
        "Transformed catalog"
    );

    output
}

/// Flattens a nested object into `prefix + key` columns, leaving out the
/// key that already has a dedicated column
fn prefixed_columns<'a>(
    prefix: &'a str,
    object: &'a Map<String, Value>,
    dedicated: &'a str,
) -> impl Iterator<Item = (String, String)> + 'a {
    object
        .iter()
        .filter(move |(key, _)| key.as_str() != dedicated)
        .map(move |(key, value)| (format!("{prefix}{key}"), value_to_cell(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings() -> TransformSettings {
        TransformSettings {
            discount_percent: 10.0,
            image_base_url: "https://api.example.com/images/".to_string(),
            sku_prefix: "THG".to_string(),
        }
    }

    fn product(raw: Value) -> Product {
        serde_json::from_value(raw).unwrap()
    }

    fn base(code: &str) -> Value {
        json!({
            "code": code,
            "name": "Stoelpoot 40mm",
            "ean": "8712345678906",
            "price": 50.0,
            "freeStock": 7,
            "brand": {"id": 1, "name": "Acme"},
            "category": {"id": 3, "singularName": "Stoelpoot", "pluralName": "Stoelpoten"},
            "image": {"id": 9, "fileName": "abc.jpg"},
            "highlights": ["stevig"],
            "unit": "stuk"
        })
    }

    #[test]
    fn test_transform_single_product() {
        let output = transform(vec![product(base("ABC123"))], &settings());

        assert_eq!(output.input, 1);
        assert_eq!(output.dropped(), 0);
        let row = &output.table.rows()[0];
        assert_eq!(row.eigen_sku.as_str(), "THGABC123");
        assert_eq!(row.discount_amount, 5.0);
        assert_eq!(row.price, 45.0);
        assert_eq!(row.image_url, "https://api.example.com/images/abc.jpg");
        assert_eq!(row.brand.as_deref(), Some("Acme"));
        assert_eq!(row.category.as_deref(), Some("Stoelpoot"));
        assert_eq!(row.ean, Ean::Whole(8712345678906));
        assert_eq!(row.attributes.get("unit").map(String::as_str), Some("stuk"));
        assert_eq!(
            row.attributes.get("category_pluralName").map(String::as_str),
            Some("Stoelpoten")
        );
        assert_eq!(row.attributes.get("image_id").map(String::as_str), Some("9"));
        assert!(!row.attributes.contains_key("image_fileName"));
        assert!(!row.attributes.contains_key("category_singularName"));
        assert!(!row.attributes.contains_key("highlights"));
    }

    #[test]
    fn test_drops_missing_image() {
        let mut no_image = base("A");
        no_image["image"] = Value::Null;
        let mut no_file_name = base("B");
        no_file_name["image"] = json!({"id": 2});
        let mut absent = base("C");
        absent.as_object_mut().unwrap().remove("image");

        let output = transform(
            vec![
                product(no_image),
                product(no_file_name),
                product(absent),
                product(base("D")),
            ],
            &settings(),
        );

        assert_eq!(output.dropped_missing_image, 3);
        assert_eq!(output.table.len(), 1);
        assert_eq!(output.table.rows()[0].code, "D");
    }

    #[test]
    fn test_drops_non_numeric_ean() {
        let mut text = base("A");
        text["ean"] = json!("n.v.t.");
        let mut null = base("B");
        null["ean"] = Value::Null;
        let mut number = base("C");
        number["ean"] = json!(5412345678900_i64);

        let output = transform(vec![product(text), product(null), product(number)], &settings());

        assert_eq!(output.dropped_invalid_ean, 2);
        assert_eq!(output.table.len(), 1);
        assert_eq!(output.table.rows()[0].ean, Ean::Whole(5412345678900));
    }

    #[test]
    fn test_keeps_negative_and_fractional_ean() {
        let mut negative = base("A");
        negative["ean"] = json!(-5);
        let mut fractional = base("B");
        fractional["ean"] = json!(12.5);
        let mut fractional_text = base("C");
        fractional_text["ean"] = json!("0.75");

        let output = transform(
            vec![product(negative), product(fractional), product(fractional_text)],
            &settings(),
        );

        assert_eq!(output.dropped(), 0);
        let eans: Vec<_> = output.table.rows().iter().map(|r| r.ean).collect();
        assert_eq!(
            eans,
            vec![Ean::Whole(-5), Ean::Fractional(12.5), Ean::Fractional(0.75)]
        );
        let loaded: Vec<_> = output.table.load_rows().iter().map(|r| r.ean).collect();
        assert_eq!(loaded, vec![-5.0, 12.5, 0.75]);
    }

    #[test]
    fn test_keeps_empty_code_with_bare_prefix() {
        let output = transform(vec![product(base(""))], &settings());
        assert_eq!(output.dropped(), 0);
        assert_eq!(output.table.len(), 1);
        let row = &output.table.rows()[0];
        assert_eq!(row.code, "");
        assert_eq!(row.eigen_sku.as_str(), "THG");
    }

    #[test]
    fn test_transform_is_deterministic() {
        let input = vec![product(base("A")), product(base("B"))];
        assert_eq!(
            transform(input.clone(), &settings()),
            transform(input, &settings())
        );
    }

    #[test]
    fn test_keeps_input_order() {
        let input = ["C", "A", "B"].map(|c| product(base(c))).to_vec();
        let output = transform(input, &settings());
        let codes: Vec<_> = output.table.rows().iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["C", "A", "B"]);
    }
}
