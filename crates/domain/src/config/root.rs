use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::hostnames::HostnameConfig;
use super::table::NeighborTableConfig;

const LOCAL_CONFIG_FILE: &str = "neighbor-lookup.toml";

/// Main configuration structure for neighbor lookups
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LookupConfig {
    /// Neighbor table command and row layout
    #[serde(default)]
    pub table: NeighborTableConfig,

    /// Reverse DNS enrichment
    #[serde(default)]
    pub hostnames: HostnameConfig,
}

impl LookupConfig {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. neighbor-lookup.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_FILE).exists() {
            Self::from_file(LOCAL_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table.command.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Neighbor table command cannot be empty".to_string(),
            ));
        }

        self.table
            .layout
            .validate()
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColumnLayout;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = LookupConfig::from_toml_str("").unwrap();

        assert_eq!(config.table, NeighborTableConfig::default());
        assert!(config.hostnames.enabled);
    }

    #[test]
    fn test_partial_table_section_keeps_default_layout() {
        let config = LookupConfig::from_toml_str(
            r#"
[table]
command = "/usr/sbin/arp"
"#,
        )
        .unwrap();

        assert_eq!(config.table.command, "/usr/sbin/arp");
        assert_eq!(config.table.args, NeighborTableConfig::default().args);
        assert_eq!(config.table.layout, ColumnLayout::default());
    }

    #[test]
    fn test_load_from_explicit_path() {
        let content = r#"
[table]
command = "arp"
args = ["-a"]

[table.layout]
token_count = 3
ip_column = 0
mac_column = 1

[hostnames]
enabled = false
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = LookupConfig::load(temp_file.path().to_str()).unwrap();

        assert_eq!(config.table, NeighborTableConfig::windows());
        assert!(!config.hostnames.enabled);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = LookupConfig::load(Some("/nonexistent/neighbor-lookup.toml"));

        assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[table\ncommand = ").unwrap();
        temp_file.flush().unwrap();

        let result = LookupConfig::load(temp_file.path().to_str());

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_rejects_inconsistent_layout() {
        let content = r#"
[table.layout]
token_count = 2
ip_column = 0
mac_column = 2
"#;
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let result = LookupConfig::load(temp_file.path().to_str());

        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_blank_command() {
        let mut config = LookupConfig::default();
        config.table.command = "  ".to_string();

        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }
}
