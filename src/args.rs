//! Command-line arguments

use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub use clap::Parser;

use crate::config::AppConfig;
use crate::constants::{APP_NAME, APP_VERSION, DEFAULT_HTTP_URL, DEFAULT_LOG_FILE, DEFAULT_TIMEOUT_SECS};
use crate::models::HttpMethod;

#[derive(Parser, Debug)]
#[command(name = APP_NAME, version = APP_VERSION, about = "Compose and send HTTP requests from the terminal")]
pub struct CommandLineArgs {
    #[clap(long, default_value = DEFAULT_HTTP_URL, help = "initial request URL")]
    url: String,
    #[clap(
        short = 'X',
        long,
        default_value = "GET",
        value_parser = HttpMethod::from_str,
        help = "initial HTTP method (GET/POST/PUT/PATCH/DELETE)"
    )]
    method: HttpMethod,
    #[clap(short = 't', long, default_value_t = DEFAULT_TIMEOUT_SECS, help = "request timeout in seconds")]
    timeout: u64,
    #[clap(long, default_value = DEFAULT_LOG_FILE, help = "log file path")]
    log_file: PathBuf,
}

impl CommandLineArgs {
    pub fn get() -> Self {
        CommandLineArgs::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn config(&self) -> AppConfig {
        AppConfig {
            url: self.url.clone(),
            method: self.method,
            timeout: Duration::from_secs(self.timeout),
            log_file: self.log_file.clone(),
        }
    }
}

/// Maps the single-dash `-version` spelling onto clap's `--version`
fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if arg.to_str() == Some("-version") {
                OsString::from("--version")
            } else {
                arg
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_config_defaults() {
        let args = CommandLineArgs::try_parse_from(["postman-tui"]).unwrap();
        assert_eq!(args.config(), AppConfig::default());
    }

    #[test]
    fn test_overrides() {
        let args = CommandLineArgs::try_parse_from([
            "postman-tui",
            "--url",
            "http://localhost:8080/items",
            "-X",
            "POST",
            "--timeout",
            "5",
        ])
        .unwrap();
        let config = args.config();
        assert_eq!(config.url, "http://localhost:8080/items");
        assert_eq!(config.method, HttpMethod::POST);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_unknown_method_is_rejected() {
        assert!(CommandLineArgs::try_parse_from(["postman-tui", "-X", "FETCH"]).is_err());
    }

    #[test]
    fn test_version_flag_exits_cleanly() {
        let err = CommandLineArgs::try_parse_from(["postman-tui", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_single_dash_version_exits_cleanly() {
        let err = CommandLineArgs::try_parse_from(normalize_args(["postman-tui", "-version"])).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_normalize_leaves_other_args_alone() {
        let args = normalize_args(["postman-tui", "--url", "-version", "-X", "PUT"]);
        assert_eq!(args[2], OsString::from("--version"));
        assert_eq!(args[3], OsString::from("-X"));
        let parsed = CommandLineArgs::try_parse_from(normalize_args(["postman-tui", "-X", "PUT"])).unwrap();
        assert_eq!(parsed.config().method, HttpMethod::PUT);
    }
}
