use crate::cli::AnalyzeArgs;
use crate::error::{CliError, Result};
use chairflip::engine::config::{AnalysisConfig, AnalysisConfigBuilder};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_PRECISION: usize = 2;
const MAX_PRECISION: usize = 10;

/// Presentation settings that never reach the core engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    pub geometry: bool,
    pub precision: usize,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            geometry: false,
            precision: DEFAULT_PRECISION,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialStrainConfig {
    #[serde(rename = "table-path")]
    table_path: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    geometry: Option<bool>,
    precision: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAnalysisConfig {
    strain: Option<PartialStrainConfig>,
    output: Option<PartialOutputConfig>,
}

impl PartialAnalysisConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the file named by `--config`, or starts empty when none was given.
    pub fn for_args(args: &AnalyzeArgs) -> Result<Self> {
        match &args.config {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolves the final settings with precedence `--set` > flags > file > defaults.
    pub fn merge_with_cli(mut self, args: &AnalyzeArgs) -> Result<(AnalysisConfig, OutputOptions)> {
        if let Some(path) = &args.strain_table {
            self.strain.get_or_insert_with(Default::default).table_path = Some(path.clone());
        }
        if args.geometry {
            self.output.get_or_insert_with(Default::default).geometry = Some(true);
        }
        self.apply_set_values(&args.set_values)?;

        let strain = self.strain.unwrap_or_default();
        let output = self.output.unwrap_or_default();

        let precision = output.precision.unwrap_or(DEFAULT_PRECISION);
        if precision > MAX_PRECISION {
            return Err(CliError::Config(format!(
                "`output.precision` must be at most {}, got {}",
                MAX_PRECISION, precision
            )));
        }
        let options = OutputOptions {
            geometry: output.geometry.unwrap_or(false),
            precision,
        };

        let mut builder = AnalysisConfigBuilder::new().include_geometry(options.geometry);
        if let Some(path) = strain.table_path {
            builder = builder.strain_table_path(path);
        }
        let config = builder
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        Ok((config, options))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key {
                "strain.table-path" => {
                    self.strain.get_or_insert_with(Default::default).table_path =
                        Some(PathBuf::from(value_str));
                }
                "output.geometry" => {
                    self.output.get_or_insert_with(Default::default).geometry =
                        Some(value_str.parse().map_err(|_| {
                            CliError::Config(format!(
                                "Invalid boolean value for {}: {}",
                                key, value_str
                            ))
                        })?);
                }
                "output.precision" => {
                    self.output.get_or_insert_with(Default::default).precision =
                        Some(value_str.parse().map_err(|_| {
                            CliError::Config(format!(
                                "Invalid integer value for {}: {}",
                                key, value_str
                            ))
                        })?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}
