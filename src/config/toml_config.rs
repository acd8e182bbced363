pub use crate::core::business::DisplayConfig;
use crate::core::formatting::DEFAULT_TRUNCATE_SUFFIX;
use crate::utils::error::{HelperError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
    pub display: DisplayConfig,
    pub format: FormatConfig,
    pub timing: TimingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub truncate_suffix: String,
    pub default_max_length: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            truncate_suffix: DEFAULT_TRUNCATE_SUFFIX.to_string(),
            default_max_length: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub debounce_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

impl HelperConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Loading config from {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path).map_err(HelperError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HelperError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LABEL})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HelperError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for HelperConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("display.unknown_user_label", &self.display.unknown_user_label)?;
        validate_non_empty_string("display.user_label_prefix", &self.display.user_label_prefix)?;
        validate_positive_number("format.default_max_length", self.format.default_max_length, 1)?;
        validate_range("timing.debounce_ms", self.timing.debounce_ms, 1, 60_000)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[display]
unknown_user_label = "Unknown user"
user_label_prefix = "User "

[format]
truncate_suffix = "~"
default_max_length = 20

[timing]
debounce_ms = 150
"#;

        let config = HelperConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.display.unknown_user_label, "Unknown user");
        assert_eq!(config.format.truncate_suffix, "~");
        assert_eq!(config.format.default_max_length, 20);
        assert_eq!(config.timing.debounce_ms, 150);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = HelperConfig::from_toml_str("[timing]\ndebounce_ms = 10\n").unwrap();

        assert_eq!(config.display, DisplayConfig::default());
        assert_eq!(config.display.unknown_user_label, "未知用户");
        assert_eq!(config.format.truncate_suffix, "...");
        assert_eq!(config.timing.debounce_ms, 10);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TYPED_HELPERS_TEST_SUFFIX", "…");

        let toml_content = r#"
[format]
truncate_suffix = "${TYPED_HELPERS_TEST_SUFFIX}"
"#;

        let config = HelperConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.format.truncate_suffix, "…");

        std::env::remove_var("TYPED_HELPERS_TEST_SUFFIX");
    }

    #[test]
    fn test_config_validation() {
        let config = HelperConfig::from_toml_str("[timing]\ndebounce_ms = 0\n").unwrap();
        assert!(config.validate().is_err());

        let config =
            HelperConfig::from_toml_str("[display]\nunknown_user_label = \"\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = HelperConfig::from_toml_str("[timing]\ndebounce_ms = \"soon\"\n");
        assert!(matches!(result, Err(HelperError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[display]\nuser_label_prefix = \"member-\"\n")
            .unwrap();

        let config = HelperConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.display.user_label_prefix, "member-");
    }
}
