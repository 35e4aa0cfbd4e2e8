//! Settings loader.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::schema::Settings;

/// Settings loader with environment variable substitution.
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Settings, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load settings from a string.
    pub fn load_str(content: &str) -> Result<Settings, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let settings: Settings = toml::from_str(&expanded)?;
        Ok(settings)
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();
        let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.config`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }

    /// Default settings path under the user config directory.
    pub fn default_settings_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ledgermesh")
            .join("settings.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_settings() {
        let settings = SettingsLoader::load_str("").unwrap();
        assert!(settings.ledger.config_list.is_empty());
    }

    #[test]
    fn test_load_ledger_entries() {
        let content = r#"
            [[ledger.config_list]]
            id = "sovrin-main"
            pool_name = "sovrin"
            is_production = true
            is_write = true
            keepalive = 5

            [[ledger.config_list]]
            id = "local"
            pool_name = "local-pool"
        "#;
        let settings = SettingsLoader::load_str(content).unwrap();
        assert_eq!(settings.ledger.config_list.len(), 2);
        assert_eq!(settings.ledger.config_list[0].keepalive, 5);
        assert!(!settings.ledger.config_list[1].is_production);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[[ledger.config_list]]\nid = \"a\"\npool_name = \"pool-a\""
        )
        .unwrap();

        let settings = SettingsLoader::load(file.path()).unwrap();
        assert_eq!(settings.ledger.config_list[0].id, "a");
    }

    #[test]
    fn test_load_missing_file() {
        let result = SettingsLoader::load(Path::new("/nonexistent/settings.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_expand_env_vars() {
        unsafe { std::env::set_var("LEDGERMESH_TEST_POOL", "expanded-pool") };
        let content = r#"
            [[ledger.config_list]]
            id = "a"
            pool_name = "${LEDGERMESH_TEST_POOL}"
        "#;
        let settings = SettingsLoader::load_str(content).unwrap();
        assert_eq!(settings.ledger.config_list[0].pool_name, "expanded-pool");
    }

    #[test]
    fn test_expand_env_vars_unset() {
        let content = r#"
            [[ledger.config_list]]
            id = "a"
            pool_name = "${LEDGERMESH_TEST_UNSET_VAR}"
        "#;
        let result = SettingsLoader::load_str(content);
        assert!(matches!(result, Err(ConfigError::EnvVarNotSet(_))));
    }

    #[test]
    fn test_malformed_entry_fails() {
        let content = r#"
            [[ledger.config_list]]
            pool_name = "missing-id"
        "#;
        let result = SettingsLoader::load_str(content);
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_expand_path() {
        let expanded = SettingsLoader::expand_path("~/.ledgermesh");
        assert!(!expanded.starts_with('~'));
    }

    #[test]
    fn test_default_settings_path() {
        let path = SettingsLoader::default_settings_path();
        assert!(path.ends_with("ledgermesh/settings.toml"));
    }
}
