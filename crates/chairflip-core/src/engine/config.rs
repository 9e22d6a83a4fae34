use crate::core::strain::table::{StrainTable, StrainTableLoadError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Conflicting strain table sources: a file path and an explicit table were both given")]
    ConflictingStrainTable,

    #[error("Strain table path cannot be empty")]
    EmptyStrainTablePath,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum StrainTableSource {
    #[default]
    Standard,
    File(PathBuf),
    Table(StrainTable),
}

impl StrainTableSource {
    pub fn resolve(&self) -> Result<StrainTable, StrainTableLoadError> {
        match self {
            StrainTableSource::Standard => Ok(StrainTable::standard()),
            StrainTableSource::File(path) => StrainTable::load(path),
            StrainTableSource::Table(table) => Ok(table.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub strain_table: StrainTableSource,
    pub include_geometry: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            strain_table: StrainTableSource::Standard,
            include_geometry: true,
        }
    }
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    strain_table_path: Option<PathBuf>,
    strain_table: Option<StrainTable>,
    include_geometry: Option<bool>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strain_table_path(mut self, path: PathBuf) -> Self {
        self.strain_table_path = Some(path);
        self
    }
    pub fn strain_table(mut self, table: StrainTable) -> Self {
        self.strain_table = Some(table);
        self
    }
    pub fn include_geometry(mut self, include: bool) -> Self {
        self.include_geometry = Some(include);
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let strain_table = match (self.strain_table_path, self.strain_table) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingStrainTable),
            (Some(path), None) => {
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::EmptyStrainTablePath);
                }
                StrainTableSource::File(path)
            }
            (None, Some(table)) => StrainTableSource::Table(table),
            (None, None) => StrainTableSource::Standard,
        };

        Ok(AnalysisConfig {
            strain_table,
            include_geometry: self.include_geometry.unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_standard_table_with_geometry() {
        let config = AnalysisConfigBuilder::new().build().unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.strain_table, StrainTableSource::Standard);
        assert!(config.include_geometry);
    }

    #[test]
    fn builder_accepts_strain_table_path() {
        let config = AnalysisConfigBuilder::new()
            .strain_table_path(PathBuf::from("custom.toml"))
            .include_geometry(false)
            .build()
            .unwrap();
        assert_eq!(
            config.strain_table,
            StrainTableSource::File(PathBuf::from("custom.toml"))
        );
        assert!(!config.include_geometry);
    }

    #[test]
    fn builder_rejects_empty_path() {
        let result = AnalysisConfigBuilder::new()
            .strain_table_path(PathBuf::new())
            .build();
        assert_eq!(result, Err(ConfigError::EmptyStrainTablePath));
    }

    #[test]
    fn builder_rejects_path_and_table_together() {
        let result = AnalysisConfigBuilder::new()
            .strain_table_path(PathBuf::from("custom.toml"))
            .strain_table(StrainTable::standard())
            .build();
        assert_eq!(result, Err(ConfigError::ConflictingStrainTable));
    }

    #[test]
    fn explicit_table_source_resolves_to_that_table() {
        let table = StrainTable::with_overrides([("CH3", 2.0)]).unwrap();
        let config = AnalysisConfigBuilder::new()
            .strain_table(table.clone())
            .build()
            .unwrap();
        assert_eq!(config.strain_table.resolve().unwrap(), table);
    }

    #[test]
    fn missing_file_source_fails_to_resolve() {
        let source = StrainTableSource::File(PathBuf::from("/non/existent/strain.toml"));
        assert!(matches!(
            source.resolve(),
            Err(StrainTableLoadError::Io { .. })
        ));
    }
}
