//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default URL placed in the URL field at startup
pub const DEFAULT_HTTP_URL: &str = "https://httpbin.org/get";

/// Application name
pub const APP_NAME: &str = "postman-tui";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Transport timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Log file written next to the working directory
pub const DEFAULT_LOG_FILE: &str = "postman-tui.log";

/// Content type sent with every non-GET request
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Header cell of column 0 in the query table
pub const QUERY_TABLE_TITLE: &str = "Query Params";

/// Header cell of column 0 in the body table
pub const BODY_TABLE_TITLE: &str = "Request Body";

/// Shown in the response panel before the first request
pub const RESPONSE_BANNER: &str = r#"
                 _                               _         _
 _ __   ___  ___| |_ _ __ ___   __ _ _ __       | |_ _   _(_)
| '_ \ / _ \/ __| __| '_ ` _ \ / _` | '_ \ _____| __| | | | |
| |_) | (_) \__ \ |_| | | | | | (_| | | | |_____| |_| |_| | |
| .__/ \___/|___/\__|_| |_| |_|\__,_|_| |_|      \__|\__,_|_|
|_|"#;
