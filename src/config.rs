//! Configuration management for the replay tool
//!
//! Loads recorded remote failures and classification options from a TOML
//! file, with `HDFS_CLASSIFY_*` environment overrides for the options.

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::Deserialize;

use crate::error::ReplayError;
use crate::remote::{RemoteError, RemoteFailure};

/// Replay configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ReplayConfig {
    /// Classify as a file creation (environment: HDFS_CLASSIFY_CREATE_MODE)
    #[serde(default)]
    pub create_mode: bool,

    /// Print the remote message of failures that pass through untranslated
    /// (environment: HDFS_CLASSIFY_SHOW_MESSAGE)
    #[serde(default)]
    pub show_message: bool,

    /// Recorded remote failures, in the order they are classified
    #[serde(default)]
    pub failures: Vec<RemoteError>,
}

impl ReplayConfig {
    /// Load configuration from a file with environment overrides
    pub fn load(path: &str) -> Result<Self, ReplayError> {
        let settings = Self::builder()?
            .add_source(File::with_name(path))
            .add_source(Environment::with_prefix("HDFS_CLASSIFY"))
            .build()?;

        Self::finish(settings)
    }

    /// Load configuration from TOML text, without environment overrides
    pub fn from_toml_str(toml: &str) -> Result<Self, ReplayError> {
        let settings = Self::builder()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        Self::finish(settings)
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, ReplayError> {
        Ok(Config::builder()
            .set_default("create_mode", false)?
            .set_default("show_message", false)?)
    }

    fn finish(settings: Config) -> Result<Self, ReplayError> {
        let config: ReplayConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Every batch needs at least one failure, and every failure an exception name
    fn validate(&self) -> Result<(), ReplayError> {
        if self.failures.is_empty() {
            return Err(ReplayError::EmptyBatch);
        }

        for (index, failure) in self.failures.iter().enumerate() {
            if failure.exception().trim().is_empty() {
                return Err(ReplayError::InvalidFailure {
                    index,
                    reason: "exception cannot be empty".into(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml_str_reads_failures() {
        let config = ReplayConfig::from_toml_str(
            r#"
            create_mode = true

            [[failures]]
            method = "create"
            desc = "ERROR_APPLICATION"
            exception = "org.apache.hadoop.hdfs.protocol.AlreadyBeingCreatedException"
            message = "lease held by another client"

            [[failures]]
            exception = "java.io.FileNotFoundException"
            "#,
        )
        .unwrap();

        assert!(config.create_mode);
        assert!(!config.show_message);
        assert_eq!(config.failures.len(), 2);
        assert_eq!(config.failures[0].method(), "create");
        assert_eq!(config.failures[1].method(), "");
        assert_eq!(
            config.failures[1].exception(),
            "java.io.FileNotFoundException"
        );
    }

    #[test]
    fn test_empty_batch_rejected() {
        let err = ReplayConfig::from_toml_str("show_message = true").unwrap_err();
        assert!(matches!(err, ReplayError::EmptyBatch));
    }

    #[test]
    fn test_blank_exception_rejected() {
        let err = ReplayConfig::from_toml_str(
            r#"
            [[failures]]
            exception = "java.io.IOException"

            [[failures]]
            method = "delete"
            exception = "  "
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ReplayError::InvalidFailure { index: 1, .. }));
    }

    #[test]
    fn test_missing_exception_is_config_error() {
        let err = ReplayConfig::from_toml_str(
            r#"
            [[failures]]
            method = "delete"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ReplayError::Config(_)));
    }

    #[test]
    fn test_load_create_mode_from_environment() {
        let path = std::env::temp_dir().join(format!(
            "hdfs-classify-create-mode-{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"
            [[failures]]
            method = "create"
            exception = "org.apache.hadoop.hdfs.protocol.AlreadyBeingCreatedException"
            "#,
        )
        .unwrap();

        // SAFETY: no other test in this crate reads or writes this variable.
        unsafe { std::env::set_var("HDFS_CLASSIFY_CREATE_MODE", "true") };
        let loaded = ReplayConfig::load(path.to_str().unwrap());
        unsafe { std::env::remove_var("HDFS_CLASSIFY_CREATE_MODE") };
        std::fs::remove_file(&path).unwrap();

        let config = loaded.unwrap();
        assert!(config.create_mode);
        assert!(!config.show_message);
        assert_eq!(config.failures.len(), 1);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = ReplayConfig::load("does/not/exist/replay").unwrap_err();
        assert!(matches!(err, ReplayError::Config(_)));
    }
}
