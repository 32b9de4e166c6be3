//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::SyncConfig;
use super::secret::secret_string;
use crate::domain::errors::SyncError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into SyncConfig
/// 4. Applies environment variable overrides (CATALOG_SYNC_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use catalog_sync::config::loader::load_config;
///
/// let config = load_config("catalog-sync.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<SyncConfig> {
    let config = parse_config(path)?;

    config.validate().map_err(|e| {
        SyncError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Reads, substitutes and parses the configuration without validating it
///
/// Used at startup to pick up the logging section before the full
/// validation runs, so validation failures still reach the log file.
pub fn parse_config(path: impl AsRef<Path>) -> Result<SyncConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SyncError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        SyncError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: SyncConfig = toml::from_str(&contents)
        .map_err(|e| SyncError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| SyncError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        // Placeholders in comments are left alone
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(SyncError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the CATALOG_SYNC_* prefix
///
/// Environment variables follow the pattern: CATALOG_SYNC_<SECTION>_<KEY>
/// For example: CATALOG_SYNC_VENDOR_PASSWORD, CATALOG_SYNC_SUPPLIER_NAME
fn apply_env_overrides(config: &mut SyncConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("CATALOG_SYNC_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("CATALOG_SYNC_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // Supplier overrides
    if let Ok(val) = std::env::var("CATALOG_SYNC_SUPPLIER_NAME") {
        config.supplier.name = Some(val);
    }
    if let Ok(val) = std::env::var("CATALOG_SYNC_SUPPLIER_CODE") {
        config.supplier.code = val;
    }

    // Vendor overrides
    if let Ok(val) = std::env::var("CATALOG_SYNC_VENDOR_BASE_URL") {
        config.vendor.base_url = val;
    }
    if let Ok(val) = std::env::var("CATALOG_SYNC_VENDOR_EMAIL") {
        config.vendor.email = val;
    }
    if let Ok(val) = std::env::var("CATALOG_SYNC_VENDOR_PASSWORD") {
        config.vendor.password = secret_string(val);
    }
    if let Ok(val) = std::env::var("CATALOG_SYNC_VENDOR_PAGE_SIZE") {
        if let Ok(size) = val.parse() {
            config.vendor.page_size = size;
        }
    }
    if let Ok(val) = std::env::var("CATALOG_SYNC_VENDOR_MAX_PAGES") {
        if let Ok(pages) = val.parse() {
            config.vendor.max_pages = pages;
        }
    }

    // Export overrides
    if let Ok(val) = std::env::var("CATALOG_SYNC_EXPORT_OUTPUT_DIR") {
        config.export.output_dir = val;
    }

    // Dropbox overrides
    if let Ok(val) = std::env::var("CATALOG_SYNC_DROPBOX_ACCESS_TOKEN") {
        config.dropbox.access_token = secret_string(val);
    }
    if let Ok(val) = std::env::var("CATALOG_SYNC_DROPBOX_FOLDER") {
        config.dropbox.folder = val;
    }

    // PostgreSQL overrides
    if let Ok(val) = std::env::var("CATALOG_SYNC_POSTGRESQL_CONNECTION_STRING") {
        config.postgresql.connection_string = secret_string(val);
    }
    if let Ok(val) = std::env::var("CATALOG_SYNC_POSTGRESQL_INSERT_BATCH_SIZE") {
        if let Ok(size) = val.parse() {
            config.postgresql.insert_batch_size = size;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("CATALOG_SYNC_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("CATALOG_SYNC_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("CATALOG_SYNC_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}
