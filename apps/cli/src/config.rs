//! Layered configuration: defaults → TOML file → `TEXTGUARD_` env → CLI flags.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use textguard_validator::StringValidator;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "textguard.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "TEXTGUARD_";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Rules in evaluation order; repeated kinds collapse to the last one.
    pub rules: StringValidator,
    /// Tracing filter directive.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rules: StringValidator::new()
                .not_empty()
                .max_length(20)
                .not_equals("foo"),
            log_level: "warn".to_owned(),
        }
    }
}

impl AppConfig {
    /// Loads the layered configuration.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>, log_level: Option<&str>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) if !path.is_file() => return Err(ConfigError::NotFound(path.to_owned())),
            Some(path) => path.to_owned(),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };

        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(&file))
            .merge(Env::prefixed(ENV_PREFIX).only(&["log_level"]));

        if let Some(level) = log_level {
            figment = figment.merge(Serialized::default("log_level", level));
        }

        let config: AppConfig = figment.extract().map_err(Box::new)?;
        tracing::debug!(file = %file.display(), rules = config.rules.len(), "configuration loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use pretty_assertions::assert_eq;
    use textguard_validator::rules::{Rule, RuleKind};

    #[test]
    fn test_defaults_are_the_sample_validator() {
        let config = AppConfig::default();
        let kinds: Vec<RuleKind> = config.rules.rules().iter().map(Rule::kind).collect();
        assert_eq!(
            kinds,
            [RuleKind::MinLength, RuleKind::MaxLength, RuleKind::NotEqual]
        );
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = AppConfig::load(Some(Path::new("/definitely/not/here.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_layers() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_FILE,
                r#"
                    log_level = "info"

                    [[rules]]
                    kind = "min_length"
                    min = 2

                    [[rules]]
                    kind = "equal"
                    value = "yes"
                "#,
            )?;

            let config = AppConfig::load(None, None).expect("file layer");
            assert_eq!(config.log_level, "info");
            assert_eq!(
                config.rules,
                StringValidator::new().min_length(2).equals("yes")
            );

            jail.set_env("TEXTGUARD_LOG_LEVEL", "debug");
            let config = AppConfig::load(None, None).expect("env layer");
            assert_eq!(config.log_level, "debug");

            let config = AppConfig::load(None, Some("trace")).expect("flag layer");
            assert_eq!(config.log_level, "trace");
            Ok(())
        });
    }
}
