use crate::core::PipettingLimits;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{
    validate_positive_number, validate_positive_quantity, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_EXCESS: f64 = 10.0;
pub const DEFAULT_ADAPTER_VOLUME: f64 = 1.0;
pub const DEFAULT_WORKING_VOLUME: f64 = 10.0;
pub const DEFAULT_MINIMUM_VOLUME: f64 = 0.5;
pub const DEFAULT_STEP: f64 = 0.1;
pub const DEFAULT_MAX_STEPS: u32 = 100_000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProtocolConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub pipetting: PipettingConfig,
}

/// Fallbacks for CLI options the user did not pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    pub excess: Option<f64>,
    pub adapter: Option<f64>,
    pub working: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipettingConfig {
    pub minimum_volume: Option<f64>,
    pub adapter_step: Option<f64>,
    pub working_step: Option<f64>,
    pub max_steps: Option<u32>,
}

impl ProtocolConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let config: ProtocolConfig = toml::from_str(&processed_content)?;
        Ok(config)
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| CalcError::invalid_input("config", "${...}", &e.to_string()))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn excess(&self) -> f64 {
        self.defaults.excess.unwrap_or(DEFAULT_EXCESS)
    }

    pub fn adapter_volume(&self) -> f64 {
        self.defaults.adapter.unwrap_or(DEFAULT_ADAPTER_VOLUME)
    }

    pub fn working_volume(&self) -> f64 {
        self.defaults.working.unwrap_or(DEFAULT_WORKING_VOLUME)
    }
}

impl PipettingLimits for ProtocolConfig {
    fn minimum_volume(&self) -> f64 {
        self.pipetting.minimum_volume.unwrap_or(DEFAULT_MINIMUM_VOLUME)
    }

    fn adapter_step(&self) -> f64 {
        self.pipetting.adapter_step.unwrap_or(DEFAULT_STEP)
    }

    fn working_step(&self) -> f64 {
        self.pipetting.working_step.unwrap_or(DEFAULT_STEP)
    }

    fn max_steps(&self) -> u32 {
        self.pipetting.max_steps.unwrap_or(DEFAULT_MAX_STEPS)
    }
}

impl Validate for ProtocolConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_quantity("defaults.excess", self.excess())?;
        validate_positive_quantity("defaults.adapter", self.adapter_volume())?;
        validate_positive_quantity("defaults.working", self.working_volume())?;

        validate_positive_quantity("pipetting.minimum_volume", self.minimum_volume())?;
        validate_positive_quantity("pipetting.adapter_step", self.adapter_step())?;
        validate_positive_quantity("pipetting.working_step", self.working_step())?;
        // Steps above 1 ml are treated as unit mistakes.
        validate_range("pipetting.adapter_step", self.adapter_step(), 0.0, 1000.0)?;
        validate_range("pipetting.working_step", self.working_step(), 0.0, 1000.0)?;
        validate_positive_number("pipetting.max_steps", self.max_steps(), 1)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ProtocolConfig::from_toml_str("").unwrap();

        assert_eq!(config.excess(), 10.0);
        assert_eq!(config.adapter_volume(), 1.0);
        assert_eq!(config.working_volume(), 10.0);
        assert_eq!(config.minimum_volume(), 0.5);
        assert_eq!(config.adapter_step(), 0.1);
        assert_eq!(config.max_steps(), 100_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[defaults]
excess = 20.0
adapter = 2.0
working = 25.0

[pipetting]
minimum_volume = 1.0
adapter_step = 0.5
working_step = 0.25
max_steps = 500
"#;

        let config = ProtocolConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.excess(), 20.0);
        assert_eq!(config.adapter_volume(), 2.0);
        assert_eq!(config.working_volume(), 25.0);
        assert_eq!(config.minimum_volume(), 1.0);
        assert_eq!(config.adapter_step(), 0.5);
        assert_eq!(config.working_step(), 0.25);
        assert_eq!(config.max_steps(), 500);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LIGATION_CALC_TEST_MIN_VOLUME", "0.8");

        let toml_content = r#"
[pipetting]
minimum_volume = ${LIGATION_CALC_TEST_MIN_VOLUME}
"#;

        let config = ProtocolConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.minimum_volume(), 0.8);

        std::env::remove_var("LIGATION_CALC_TEST_MIN_VOLUME");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let toml_content = r#"
[pipetting]
minimum_volum = 0.8
"#;
        assert!(matches!(
            ProtocolConfig::from_toml_str(toml_content),
            Err(CalcError::TomlError(_))
        ));
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[pipetting]
working_step = 0.0
"#;

        let config = ProtocolConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[defaults]\nexcess = 15.0\n")
            .unwrap();

        let config = ProtocolConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.excess(), 15.0);
    }
}
