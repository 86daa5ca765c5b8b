use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Arguments
/// * `search_api_key` - The search API key to validate
/// * `search_endpoint` - The search endpoint URL to validate
/// * `http_timeout_seconds` - The HTTP timeout to validate
/// * `log_file_path` - Optional log file path to validate
///
/// # Returns
/// * `Ok(())` - Configuration is valid
/// * `Err(AppError)` - Configuration validation failed
///
/// # Validation Rules
/// - Search API key cannot be empty
/// - Search endpoint must be a valid URL or domain name
/// - HTTP timeout must be greater than zero
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    search_api_key: &str,
    search_endpoint: &str,
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if search_api_key.trim().is_empty() {
        return Err(AppError::config_error("Search API key cannot be empty"));
    }

    if search_endpoint.is_empty() {
        return Err(AppError::config_error("Search endpoint cannot be empty"));
    }

    // Check if the endpoint looks like a valid URL or domain
    if !search_endpoint.starts_with("http://") && !search_endpoint.starts_with("https://") {
        // If it doesn't start with protocol, it should at least look like a domain
        if !search_endpoint.contains('.') && !search_endpoint.starts_with("localhost") {
            return Err(AppError::config_error(
                "Search endpoint must be a valid URL or domain name",
            ));
        }
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be greater than zero",
        ));
    }

    // Validate log file path if provided
    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.exists()
        {
            // Try to create the directory to validate the path
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
