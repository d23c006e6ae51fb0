use crate::domain::model::OutputFormat;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, StudyError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub number: Option<i32>,
    pub limit: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| StudyError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StudyError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TIMES_NUMBER})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StudyError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn preset_number(&self) -> Option<i32> {
        self.input.number
    }

    fn preset_limit(&self) -> Option<i32> {
        self.input.limit
    }

    fn output_format(&self) -> Option<OutputFormat> {
        // 格式錯誤由 validate() 回報
        self.output.format.as_deref().and_then(|f| f.parse().ok())
    }

    fn verbose(&self) -> bool {
        self.logging.verbose.unwrap_or(false)
    }

    fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(format) = &self.output.format {
            format.parse::<OutputFormat>()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[input]
number = 12
limit = 6

[output]
format = "json"

[logging]
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.preset_number(), Some(12));
        assert_eq!(config.preset_limit(), Some(6));
        assert_eq!(config.output_format(), Some(OutputFormat::Json));
        assert!(config.verbose());
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.preset_number(), None);
        assert_eq!(config.preset_limit(), None);
        assert_eq!(config.output_format(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TIMES_TABLE_TEST_NUMBER", "97");

        let toml_content = r#"
[input]
number = ${TIMES_TABLE_TEST_NUMBER}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.preset_number(), Some(97));

        std::env::remove_var("TIMES_TABLE_TEST_NUMBER");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[output]
format = "${TIMES_TABLE_SURELY_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.output.format.as_deref(),
            Some("${TIMES_TABLE_SURELY_UNSET_VAR}")
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[output]\nformat = \"yaml\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, StudyError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[input\nnumber = ").unwrap_err();
        assert!(matches!(err, StudyError::ConfigError { .. }));

        let err = TomlConfig::from_toml_str("[input]\nnumber = \"five\"\n").unwrap_err();
        assert!(matches!(err, StudyError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[input]\nlimit = 10\n\n[output]\nformat = \"csv\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.preset_limit(), Some(10));
        assert_eq!(config.output_format(), Some(OutputFormat::Csv));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = TomlConfig::from_file("/definitely/not/here/times.toml").unwrap_err();
        assert!(matches!(err, StudyError::ConfigError { .. }));
    }
}
