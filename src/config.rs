//! Environment-sourced run configuration.
//!
//! Both settings are required before any remote call is attempted. The env
//! binding itself happens at the CLI layer (clap `env` attributes); this
//! module only validates presence and carries the resolved values as one
//! explicit bundle, constructed once at process start.

use std::path::PathBuf;

use thiserror::Error;

/// Resolved run configuration passed into the pipeline and exporter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Identifier of the spreadsheet holding the form-response links.
    pub spreadsheet_id: String,
    /// Destination path for the exported XLSX file.
    pub output_path: PathBuf,
}

/// Errors raised while resolving configuration.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// A required setting was neither passed as a flag nor set in the environment
    #[error("missing required setting '{name}': set the {env} environment variable or pass {flag}")]
    Missing {
        /// Human name of the setting
        name: &'static str,
        /// Environment variable that supplies it
        env: &'static str,
        /// CLI flag that overrides it
        flag: &'static str,
    },
}

impl Config {
    /// Resolves the configuration from already-merged CLI/env values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when either setting is absent.
    pub fn resolve(
        spreadsheet_id: Option<String>,
        output_path: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let spreadsheet_id = spreadsheet_id.ok_or(ConfigError::Missing {
            name: "source spreadsheet id",
            env: "SPREADSHEET_ID",
            flag: "--spreadsheet-id",
        })?;
        let output_path = output_path.ok_or(ConfigError::Missing {
            name: "export destination path",
            env: "OUTPUT_PATH",
            flag: "--output",
        })?;

        Ok(Self {
            spreadsheet_id,
            output_path,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_with_both_values_succeeds() {
        let config = Config::resolve(
            Some("sheet-id".to_string()),
            Some(PathBuf::from("out/data.xlsx")),
        )
        .unwrap();
        assert_eq!(config.spreadsheet_id, "sheet-id");
        assert_eq!(config.output_path, PathBuf::from("out/data.xlsx"));
    }

    #[test]
    fn test_resolve_missing_spreadsheet_id_names_env_var() {
        let err = Config::resolve(None, Some(PathBuf::from("out.xlsx"))).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("SPREADSHEET_ID"), "should name env var: {msg}");
        assert!(msg.contains("--spreadsheet-id"), "should name flag: {msg}");
    }

    #[test]
    fn test_resolve_missing_output_path_names_env_var() {
        let err = Config::resolve(Some("sheet-id".to_string()), None).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("OUTPUT_PATH"), "should name env var: {msg}");
    }
}
