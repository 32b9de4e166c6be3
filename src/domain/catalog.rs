//! Transformed catalog rows
//!
//! [`CatalogRow`] is one product after flattening and pricing, still using the
//! vendor's column names; it is what the export CSV holds. [`LoadRow`] is the
//! same product renamed and projected onto the fixed database schema.

use super::ids::{Ean, InternalSku};
use std::collections::{BTreeMap, BTreeSet};

/// Columns that lead every export CSV, in vendor naming
pub const LEADING_COLUMNS: [&str; 6] = ["code", "name", "ean", "brand", "freeStock", "price"];

/// Columns that close every export CSV
pub const TRAILING_COLUMNS: [&str; 9] = [
    "image_fileName",
    "category_singularName",
    "eigen_sku",
    "advies_prijs",
    "gewicht",
    "url_artikel",
    "lange_omschrijving",
    "verpakings_eenheid",
    "lk",
];

/// Database column order for the per-run table
pub const LOAD_COLUMNS: [&str; 14] = [
    "eigen_sku",
    "sku",
    "ean",
    "voorraad",
    "merk",
    "prijs",
    "advies_prijs",
    "category",
    "gewicht",
    "url_plaatje",
    "url_artikel",
    "product_title",
    "lange_omschrijving",
    "verpakings_eenheid",
];

/// One flattened, priced product in vendor column naming
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow {
    /// Vendor article code
    pub code: String,
    /// Product name
    pub name: String,
    /// Numeric EAN
    pub ean: Ean,
    /// Flattened brand name
    pub brand: Option<String>,
    /// Units in stock
    pub free_stock: i64,
    /// Net price after discount
    pub price: f64,
    /// Discount amount taken off the gross price
    pub discount_amount: f64,
    /// Absolute image URL
    pub image_url: String,
    /// Singular category name
    pub category: Option<String>,
    /// Prefixed internal SKU
    pub eigen_sku: InternalSku,
    /// Remaining vendor attributes plus `category_*` / `image_*` columns
    pub attributes: BTreeMap<String, String>,
}

impl CatalogRow {
    /// Value of a named column, as written to CSV
    pub fn cell(&self, column: &str) -> String {
        match column {
            "code" => self.code.clone(),
            "name" => self.name.clone(),
            "ean" => self.ean.to_string(),
            "brand" => self.brand.clone().unwrap_or_default(),
            "freeStock" => self.free_stock.to_string(),
            "price" => format!("{:.2}", self.price),
            "image_fileName" => self.image_url.clone(),
            "category_singularName" => self.category.clone().unwrap_or_default(),
            "eigen_sku" => self.eigen_sku.to_string(),
            "lk" => format!("{:.2}", self.discount_amount),
            "advies_prijs" | "gewicht" | "url_artikel" | "lange_omschrijving"
            | "verpakings_eenheid" => String::new(),
            other => self.attributes.get(other).cloned().unwrap_or_default(),
        }
    }

    /// Renames and projects this row onto the database schema
    pub fn to_load_row(&self) -> LoadRow {
        LoadRow {
            eigen_sku: self.eigen_sku.to_string(),
            sku: self.code.clone(),
            ean: self.ean.as_f64(),
            voorraad: self.free_stock,
            merk: self.brand.clone(),
            prijs: self.price,
            advies_prijs: String::new(),
            category: self.category.clone(),
            gewicht: String::new(),
            url_plaatje: self.image_url.clone(),
            url_artikel: String::new(),
            product_title: self.name.clone(),
            lange_omschrijving: String::new(),
            verpakings_eenheid: String::new(),
        }
    }
}

/// The full transformed table used for export
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogTable {
    rows: Vec<CatalogRow>,
}

impl CatalogTable {
    /// Wraps transformed rows
    pub fn new(rows: Vec<CatalogRow>) -> Self {
        Self { rows }
    }

    /// Rows in API order
    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no product survived the transform
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column set: leading columns, the sorted union of every row's
    /// attribute columns, then the derived trailing columns
    pub fn columns(&self) -> Vec<String> {
        let fixed: BTreeSet<&str> = LEADING_COLUMNS
            .iter()
            .chain(TRAILING_COLUMNS.iter())
            .copied()
            .collect();

        let attributes: BTreeSet<&str> = self
            .rows
            .iter()
            .flat_map(|row| row.attributes.keys().map(String::as_str))
            .filter(|key| !fixed.contains(key))
            .collect();

        LEADING_COLUMNS
            .iter()
            .copied()
            .chain(attributes)
            .chain(TRAILING_COLUMNS.iter().copied())
            .map(str::to_string)
            .collect()
    }

    /// Rows renamed and projected for the load sink
    pub fn load_rows(&self) -> Vec<LoadRow> {
        self.rows.iter().map(CatalogRow::to_load_row).collect()
    }
}

/// One row of the per-run database table
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRow {
    pub eigen_sku: String,
    pub sku: String,
    pub ean: f64,
    pub voorraad: i64,
    pub merk: Option<String>,
    pub prijs: f64,
    pub advies_prijs: String,
    pub category: Option<String>,
    pub gewicht: String,
    pub url_plaatje: String,
    pub url_artikel: String,
    pub product_title: String,
    pub lange_omschrijving: String,
    pub verpakings_eenheid: String,
}

/// Aggregates written to the import log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportStats {
    /// Rows in the per-run table
    pub item_count: i64,
    /// Sum of stock, truncated to an integer
    pub total_stock: i64,
    /// Sum of net prices, truncated to an integer
    pub total_price: i64,
}
