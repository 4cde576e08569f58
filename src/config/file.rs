use serde::Deserialize;
use std::fs;

use crate::utils::error::{BookingError, Result};

/// Optional TOML config file. Every field is a fallback: explicit CLI
/// flags win over anything supplied here.
#[derive(Debug, Clone, Deserialize)]
pub struct FileConfig {
    pub data_dir: Option<String>,
    pub verbose: Option<bool>,
}

impl FileConfig {
    pub fn from_path(path: &str) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|err| BookingError::Config {
            message: format!("cannot read {}: {}", path, err),
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|err| BookingError::Config {
            message: format!("invalid config file: {}", err),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let config = FileConfig::from_toml_str(
            r#"
data_dir = "/var/lib/roomdesk"
verbose = true
"#,
        )
        .unwrap();
        assert_eq!(config.data_dir.as_deref(), Some("/var/lib/roomdesk"));
        assert_eq!(config.verbose, Some(true));
    }

    #[test]
    fn test_all_fields_optional() {
        let config = FileConfig::from_toml_str("").unwrap();
        assert!(config.data_dir.is_none());
        assert!(config.verbose.is_none());
    }

    #[test]
    fn test_invalid_toml_reports_config_error() {
        let err = FileConfig::from_toml_str("data_dir = [").unwrap_err();
        assert!(matches!(err, BookingError::Config { .. }));
    }

    #[test]
    fn test_from_path_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "data_dir = \"./bookings\"").unwrap();

        let config = FileConfig::from_path(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.data_dir.as_deref(), Some("./bookings"));
    }

    #[test]
    fn test_missing_file_reports_config_error() {
        let err = FileConfig::from_path("/no/such/config.toml").unwrap_err();
        assert!(matches!(err, BookingError::Config { .. }));
    }
}
