use crate::{
    error::{AnalysisError, AnalysisResult},
    types::ChurnPeriod,
};
use serde::{Deserialize, Serialize};

fn default_churn_period() -> u32 {
    1
}

fn default_delimiter() -> char {
    ','
}

/// Construction-time settings for one analysis.
///
/// Every field has a default, so `{}` is a valid config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_churn_period")]
    pub churn_period: u32,
    #[serde(default = "default_delimiter")]
    pub delimiter:    char,
    /// Skip the first row. Source tables carry no header, so this is off by default.
    #[serde(default)]
    pub has_headers:  bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            churn_period: default_churn_period(),
            delimiter:    default_delimiter(),
            has_headers:  false,
        }
    }
}

impl AnalysisConfig {
    /// Load from a JSON file.
    /// In tests, use AnalysisConfig::default_test().
    pub fn load(path: &str) -> AnalysisResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AnalysisError::Io {
            path: path.to_string(),
            source,
        })?;
        let config: AnalysisConfig = serde_json::from_str(&content)?;
        config.validate()?;
        log::debug!("Loaded analysis config from {path}: {config:?}");
        Ok(config)
    }

    /// Config with hardcoded defaults for use in unit tests.
    pub fn default_test() -> Self {
        Self::default()
    }

    pub fn with_churn_period(mut self, churn_period: u32) -> Self {
        self.churn_period = churn_period;
        self
    }

    pub fn churn_period(&self) -> AnalysisResult<ChurnPeriod> {
        ChurnPeriod::new(self.churn_period)
    }

    /// The delimiter as the single byte the reader expects.
    pub fn delimiter_byte(&self) -> AnalysisResult<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(AnalysisError::InvalidDelimiter { delimiter: self.delimiter })
        }
    }

    pub fn validate(&self) -> AnalysisResult<()> {
        self.churn_period()?;
        self.delimiter_byte()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "churn_period": 3 }}"#).unwrap();

        let config = AnalysisConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.churn_period, 3);
        assert_eq!(config.delimiter, ',');
        assert!(!config.has_headers);
    }

    #[test]
    fn zero_churn_period_fails_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "churn_period": 0 }}"#).unwrap();

        let err = AnalysisConfig::load(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidChurnPeriod { value: 0 }));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "churn_period = 2").unwrap();

        let err = AnalysisConfig::load(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, AnalysisError::Config(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AnalysisConfig::load("/nonexistent/analysis.json").unwrap_err();
        assert!(matches!(err, AnalysisError::Io { .. }));
    }

    #[test]
    fn non_ascii_delimiter_is_rejected() {
        let config = AnalysisConfig { delimiter: '§', ..AnalysisConfig::default_test() };
        assert!(matches!(
            config.delimiter_byte(),
            Err(AnalysisError::InvalidDelimiter { .. })
        ));
        assert_eq!(AnalysisConfig::default_test().delimiter_byte().unwrap(), b',');
    }
}
