//! Integration tests for transform and CSV export

use catalog_sync::core::export::{latest_export, write_catalog_csv};
use catalog_sync::core::transform::{transform, TransformSettings};
use catalog_sync::domain::Product;
use serde_json::json;
use tempfile::TempDir;

fn settings() -> TransformSettings {
    TransformSettings {
        discount_percent: 10.0,
        image_base_url: "https://shop.example.com/images/".to_string(),
        sku_prefix: "THG".to_string(),
    }
}

fn products() -> Vec<Product> {
    let raw = json!([
        {
            "code": "A1",
            "name": "Stoelpoot 40mm",
            "ean": "8712345678906",
            "price": 50.0,
            "freeStock": 12,
            "brand": {"name": "Ter Heegde"},
            "category": {"singularName": "Stoelpoot", "pluralName": "Stoelpoten"},
            "image": {"fileName": "a1.jpg"},
            "unit": "stuk"
        },
        {
            "code": "B2",
            "name": "Tafelpoot",
            "ean": 8712345678913_i64,
            "price": 12.5,
            "freeStock": 3,
            "brand": "Ter Heegde",
            "image": {"fileName": "b2.jpg"},
            "color": "zwart"
        },
        {
            "code": "C3",
            "ean": "n.v.t.",
            "price": 1.0,
            "freeStock": 1,
            "image": {"fileName": "c3.jpg"}
        },
        {
            "code": "D4",
            "ean": "8712345678920",
            "price": 1.0,
            "freeStock": 1
        }
    ]);
    serde_json::from_value(raw).unwrap()
}

#[test]
fn test_csv_holds_every_kept_row_and_column() {
    let dir = TempDir::new().unwrap();
    let output = transform(products(), &settings());
    assert_eq!(output.table.len(), 2);
    assert_eq!(output.dropped_invalid_ean, 1);
    assert_eq!(output.dropped_missing_image, 1);

    let path = write_catalog_csv(
        dir.path(),
        "THG",
        "Fri Oct 16 14-03-22 2026",
        &output.table,
    )
    .unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(headers, output.table.columns());
    assert!(headers.contains(&"unit".to_string()));
    assert!(headers.contains(&"color".to_string()));
    assert!(headers.contains(&"category_pluralName".to_string()));

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 2);

    let column = |name: &str| headers.iter().position(|h| h == name).unwrap();
    let first = &records[0];
    assert_eq!(&first[column("code")], "A1");
    assert_eq!(&first[column("ean")], "8712345678906");
    assert_eq!(&first[column("brand")], "Ter Heegde");
    assert_eq!(&first[column("price")], "45.00");
    assert_eq!(&first[column("lk")], "5.00");
    assert_eq!(&first[column("eigen_sku")], "THGA1");
    assert_eq!(
        &first[column("image_fileName")],
        "https://shop.example.com/images/a1.jpg"
    );
    assert_eq!(&first[column("category_singularName")], "Stoelpoot");
    assert_eq!(&first[column("color")], "");

    let second = &records[1];
    assert_eq!(&second[column("color")], "zwart");
    assert_eq!(&second[column("category_singularName")], "");
}

#[test]
fn test_latest_export_ignores_other_suppliers() {
    let dir = TempDir::new().unwrap();
    let output = transform(products(), &settings());

    assert!(latest_export(dir.path(), "THG").unwrap().is_none());

    write_catalog_csv(dir.path(), "XYZ", "Thu Oct 15 09-00-00 2026", &output.table).unwrap();
    let path = write_catalog_csv(dir.path(), "THG", "Fri Oct 16 14-03-22 2026", &output.table)
        .unwrap();
    std::fs::write(dir.path().join("notes.txt"), "x").unwrap();

    assert_eq!(latest_export(dir.path(), "THG").unwrap(), Some(path));
}
