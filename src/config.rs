//! Runtime configuration

use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{DEFAULT_HTTP_URL, DEFAULT_LOG_FILE, DEFAULT_TIMEOUT_SECS};
use crate::models::HttpMethod;

/// Settings for one session
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Initial text of the URL field
    pub url: String,
    /// Initial method
    pub method: HttpMethod,
    /// Transport timeout
    pub timeout: Duration,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            url: DEFAULT_HTTP_URL.to_string(),
            method: HttpMethod::GET,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}
