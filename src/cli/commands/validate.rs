//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the catalog-sync configuration file.

use crate::config::parse_config;
use crate::config::schema::SyncConfig;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match parse_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        match config.validate() {
            Ok(_) => {
                println!("✅ Configuration is valid");
                println!();
                print_config_summary(&config);
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2)
            }
        }
    }
}

fn print_config_summary(config: &SyncConfig) {
    use secrecy::ExposeSecret;

    let supplier = config
        .supplier
        .resolve_name()
        .unwrap_or_else(|_| "<unresolved>".to_string());
    let discount = config
        .pricing
        .discount_for(&supplier)
        .map(|d| format!("{d}%"))
        .unwrap_or_else(|_| "<missing>".to_string());
    let conn_str: &str = config.postgresql.connection_string.expose_secret().as_str();

    println!("Configuration Summary:");
    println!("  Log Level: {}", config.application.log_level);
    println!("  Supplier: {} (code {})", supplier, config.supplier.code);
    println!("  SKU Prefix: {}", config.supplier.sku_prefix());
    println!("  Discount: {discount}");
    println!("  Vendor API: {}", config.vendor.base_url);
    println!("  Shop Tag: {}", config.vendor.tag_id);
    println!(
        "  Paging: {} per page, at most {} pages",
        config.vendor.page_size, config.vendor.max_pages
    );
    println!("  Output Directory: {}", config.export.output_dir);
    println!("  Dropbox Folder: {}", config.dropbox.folder);
    println!(
        "  PostgreSQL: {}",
        conn_str.rsplit('@').next().unwrap_or("***")
    );
    println!("  Import Log Table: {}", config.postgresql.import_log_table);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_validate_missing_file() {
        let code = ValidateArgs {}.execute("no-such-file.toml").await.unwrap();
        assert_eq!(code, 2);
    }

    #[tokio::test]
    async fn test_validate_invalid_values() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
[supplier]
code = "THG"
name = "TERHEEGDE"

[vendor]
base_url = "https://api.example.com"
email = "a@example.com"
password = "x"
page_size = 0

[pricing.discounts]
terheegde = 10

[dropbox]
access_token = "t"
folder = "/macro/datafiles/THG"

[postgresql]
connection_string = "postgresql://u:p@localhost/db"
"#,
        )
        .unwrap();
        file.flush().unwrap();

        let path = file.path().to_string_lossy().to_string();
        let code = ValidateArgs {}.execute(&path).await.unwrap();
        assert_eq!(code, 2);
    }
}
