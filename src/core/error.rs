use std::fmt;

/// Comprehensive error types for siteup operations
#[derive(Debug)]
pub enum SiteUpError {
    /// Target URL is syntactically invalid (rejected before any network call)
    InvalidTarget(String),

    /// IO error (config file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// HTTP client error
    Http(reqwest::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for SiteUpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteUpError::InvalidTarget(msg) => write!(f, "Invalid target: {msg}"),
            SiteUpError::Io(err) => write!(f, "IO error: {err}"),
            SiteUpError::Config(msg) => write!(f, "Configuration error: {msg}"),
            SiteUpError::Http(err) => write!(f, "HTTP error: {err}"),
            SiteUpError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            SiteUpError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for SiteUpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SiteUpError::Io(err) => Some(err),
            SiteUpError::Http(err) => Some(err),
            SiteUpError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SiteUpError {
    fn from(err: std::io::Error) -> Self {
        SiteUpError::Io(err)
    }
}

impl From<reqwest::Error> for SiteUpError {
    fn from(err: reqwest::Error) -> Self {
        SiteUpError::Http(err)
    }
}

impl From<toml::de::Error> for SiteUpError {
    fn from(err: toml::de::Error) -> Self {
        SiteUpError::TomlParsing(err)
    }
}

/// Type alias for Results using SiteUpError
pub type Result<T> = std::result::Result<T, SiteUpError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let target_error = SiteUpError::InvalidTarget("no scheme".to_string());
        assert_eq!(format!("{target_error}"), "Invalid target: no scheme");

        let config_error = SiteUpError::Config("Invalid timeout".to_string());
        assert_eq!(
            format!("{config_error}"),
            "Configuration error: Invalid timeout"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let siteup_error = SiteUpError::from(io_error);

        match siteup_error {
            SiteUpError::Io(_) => {} // Expected
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_from_reqwest() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let reqwest_error = rt.block_on(async {
            reqwest::get("http://invalid-domain-that-does-not-exist.com")
                .await
                .unwrap_err()
        });
        let siteup_error = SiteUpError::from(reqwest_error);

        match siteup_error {
            SiteUpError::Http(_) => {} // Expected
            _ => panic!("Expected Http variant"),
        }
    }

    #[test]
    fn test_error_from_toml() {
        let toml_error = toml::from_str::<toml::Value>("invalid toml [").unwrap_err();
        let siteup_error = SiteUpError::from(toml_error);

        match siteup_error {
            SiteUpError::TomlParsing(_) => {} // Expected
            _ => panic!("Expected TomlParsing variant"),
        }
    }

    #[test]
    fn test_string_error_variants_display() {
        let errors = vec![
            SiteUpError::InvalidTarget("not a url".to_string()),
            SiteUpError::Config("Bad config".to_string()),
            SiteUpError::InvalidArgument("Bad arg".to_string()),
        ];

        for error in errors {
            let display_str = format!("{error}");
            assert!(!display_str.is_empty());
            assert!(display_str.contains(":"));
        }
    }

    #[test]
    fn test_error_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let siteup_error = SiteUpError::Io(io_error);

        assert!(siteup_error.source().is_some());

        let config_error = SiteUpError::Config("test".to_string());
        assert!(config_error.source().is_none());

        let target_error = SiteUpError::InvalidTarget("test".to_string());
        assert!(target_error.source().is_none());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SiteUpError>();
    }

    #[test]
    fn test_result_type_alias() {
        let success: Result<i32> = Ok(42);
        let error: Result<i32> = Err(SiteUpError::Config("test".to_string()));

        assert!(success.is_ok());
        assert!(error.is_err());
        if let Ok(value) = success {
            assert_eq!(value, 42);
        }
    }

    #[test]
    fn test_error_debug_format() {
        let errors = vec![
            SiteUpError::InvalidTarget("debug target".to_string()),
            SiteUpError::Config("debug config".to_string()),
            SiteUpError::InvalidArgument("debug arg".to_string()),
        ];

        for error in errors {
            let debug_str = format!("{error:?}");
            assert!(!debug_str.is_empty());
            assert!(debug_str.contains("debug"));
        }
    }
}
