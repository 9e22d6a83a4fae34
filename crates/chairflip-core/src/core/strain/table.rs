use phf::{OrderedMap, phf_ordered_map};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

// A-values (kcal/mol): free-energy penalty for the axial over the equatorial
// position, from 1,3-diaxial interactions.
static STANDARD_STRAIN_CONSTANTS: OrderedMap<&'static str, f64> = phf_ordered_map! {
    "F" => 0.24,
    "Cl" => 0.43,
    "Br" => 0.38,
    "I" => 0.43,
    "OH" => 0.87,
    "OCH3" => 0.60,
    "NH2" => 1.40,
    "CN" => 0.17,
    "CH3" => 1.74,
    "CH2CH3" => 1.79,
    "CH2OH" => 1.76,
    "CH(CH3)2" => 2.15,
    "C(CH3)3" => 4.90,
    "C6H5" => 2.80,
    "COOH" => 1.41,
};

/// Strain constant for `group` from the built-in table.
///
/// Unknown groups yield `0.0`: an unrecognized group is treated as sterically
/// inert rather than rejected.
pub fn strain_constant(group: &str) -> f64 {
    STANDARD_STRAIN_CONSTANTS.get(group).copied().unwrap_or(0.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct KnownSubstituent {
    pub group: String,
    pub strain_constant: f64,
}

/// Built-in groups with their strain constants, in table order.
pub fn list_known_substituents() -> Vec<KnownSubstituent> {
    StrainTable::standard().entries()
}

/// Group → strain-constant lookup.
///
/// The built-in constants are always the base layer. Custom constants loaded
/// from a file or given explicitly shadow built-in ones with the same group name
/// and add new groups.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StrainTable {
    custom: BTreeMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct StrainRecord {
    group: String,
    strain_constant: f64,
}

#[derive(Debug, Error)]
pub enum StrainTableLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid strain constant {value} for group '{group}': must be finite and non-negative")]
    InvalidConstant { group: String, value: f64 },
}

impl StrainTable {
    pub fn standard() -> Self {
        Self::default()
    }

    pub fn with_overrides<I, S>(constants: I) -> Result<Self, StrainTableLoadError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut custom = BTreeMap::new();
        for (group, value) in constants {
            let group = group.into();
            if !value.is_finite() || value < 0.0 {
                return Err(StrainTableLoadError::InvalidConstant { group, value });
            }
            custom.insert(group, value);
        }
        Ok(Self { custom })
    }

    /// Loads custom constants layered over the built-in table.
    ///
    /// Files ending in `.csv` need `group,strain_constant` columns; anything else
    /// is read as a flat TOML table of `group = constant` pairs.
    pub fn load(path: &Path) -> Result<Self, StrainTableLoadError> {
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        let constants = if is_csv {
            Self::load_csv(path)?
        } else {
            Self::load_toml(path)?
        };
        debug!(
            "Loaded {} custom strain constant(s) from {:?}",
            constants.len(),
            path
        );
        Self::with_overrides(constants)
    }

    fn load_toml(path: &Path) -> Result<Vec<(String, f64)>, StrainTableLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| StrainTableLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let constants: HashMap<String, f64> =
            toml::from_str(&content).map_err(|e| StrainTableLoadError::Toml {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
        Ok(constants.into_iter().collect())
    }

    fn load_csv(path: &Path) -> Result<Vec<(String, f64)>, StrainTableLoadError> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| StrainTableLoadError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

        let mut constants = Vec::new();
        for result in reader.deserialize::<StrainRecord>() {
            let record = result.map_err(|e| StrainTableLoadError::Csv {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
            constants.push((record.group, record.strain_constant));
        }
        Ok(constants)
    }

    /// Strain constant for `group`, or `0.0` if neither layer knows it.
    pub fn constant(&self, group: &str) -> f64 {
        self.custom
            .get(group)
            .copied()
            .unwrap_or_else(|| strain_constant(group))
    }

    pub fn contains(&self, group: &str) -> bool {
        self.custom.contains_key(group) || STANDARD_STRAIN_CONSTANTS.contains_key(group)
    }

    pub fn custom_len(&self) -> usize {
        self.custom.len()
    }

    /// All known groups: built-in groups in table order (with any overrides
    /// applied), then custom-only groups sorted by name.
    pub fn entries(&self) -> Vec<KnownSubstituent> {
        let builtin = STANDARD_STRAIN_CONSTANTS
            .entries()
            .map(|(&group, &value)| KnownSubstituent {
                group: group.to_string(),
                strain_constant: self.custom.get(group).copied().unwrap_or(value),
            });
        let extra = self
            .custom
            .iter()
            .filter(|(group, _)| !STANDARD_STRAIN_CONSTANTS.contains_key(group.as_str()))
            .map(|(group, &value)| KnownSubstituent {
                group: group.clone(),
                strain_constant: value,
            });
        builtin.chain(extra).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn strain_constant_returns_builtin_value() {
        assert_eq!(strain_constant("CH3"), 1.74);
        assert_eq!(strain_constant("OH"), 0.87);
        assert_eq!(strain_constant("C(CH3)3"), 4.90);
    }

    // Documented default: unknown groups contribute zero strain, so a misspelled
    // group is silently inert.
    #[test]
    fn strain_constant_defaults_to_zero_for_unknown_group() {
        assert_eq!(strain_constant("unobtainium"), 0.0);
        assert_eq!(strain_constant("ch3"), 0.0);
        assert_eq!(StrainTable::standard().constant("unobtainium"), 0.0);
    }

    #[test]
    fn builtin_constants_are_non_negative() {
        for entry in list_known_substituents() {
            assert!(entry.strain_constant >= 0.0, "{} is negative", entry.group);
        }
    }

    #[test]
    fn list_known_substituents_preserves_table_order() {
        let groups: Vec<_> = list_known_substituents()
            .into_iter()
            .map(|entry| entry.group)
            .collect();
        assert_eq!(groups.first().map(String::as_str), Some("F"));
        assert_eq!(groups.last().map(String::as_str), Some("COOH"));
        assert_eq!(groups.len(), STANDARD_STRAIN_CONSTANTS.len());
    }

    #[test]
    fn overrides_shadow_builtin_and_add_new_groups() {
        let table = StrainTable::with_overrides([("CH3", 1.70), ("SiMe3", 2.5)]).unwrap();
        assert_eq!(table.constant("CH3"), 1.70);
        assert_eq!(table.constant("SiMe3"), 2.5);
        assert_eq!(table.constant("OH"), 0.87);
        assert!(table.contains("SiMe3"));
        assert!(!table.contains("Xe"));

        let entries = table.entries();
        assert_eq!(entries.len(), STANDARD_STRAIN_CONSTANTS.len() + 1);
        assert_eq!(entries.last().unwrap().group, "SiMe3");
        let methyl = entries.iter().find(|entry| entry.group == "CH3").unwrap();
        assert_eq!(methyl.strain_constant, 1.70);
    }

    #[test]
    fn overrides_reject_negative_and_non_finite_constants() {
        assert!(matches!(
            StrainTable::with_overrides([("CH3", -0.1)]),
            Err(StrainTableLoadError::InvalidConstant { .. })
        ));
        assert!(matches!(
            StrainTable::with_overrides([("CH3", f64::NAN)]),
            Err(StrainTableLoadError::InvalidConstant { .. })
        ));
    }

    #[test]
    fn load_reads_toml_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("strain.toml");
        let mut file = File::create(&path).unwrap();
        writeln!(
            file,
            r#"
            CH3 = 1.8
            "Si(CH3)3" = 2.5
            "#
        )
        .unwrap();

        let table = StrainTable::load(&path).unwrap();
        assert_eq!(table.custom_len(), 2);
        assert_eq!(table.constant("CH3"), 1.8);
        assert_eq!(table.constant("Si(CH3)3"), 2.5);
    }

    #[test]
    fn load_reads_csv_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("strain.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "group,strain_constant").unwrap();
        writeln!(file, "CH3,1.7").unwrap();
        writeln!(file, "SH,1.2").unwrap();

        let table = StrainTable::load(&path).unwrap();
        assert_eq!(table.constant("CH3"), 1.7);
        assert_eq!(table.constant("SH"), 1.2);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let result = StrainTable::load(Path::new("/non/existent/strain.toml"));
        assert!(matches!(result, Err(StrainTableLoadError::Io { .. })));
    }

    #[test]
    fn load_fails_for_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("strain.toml");
        std::fs::write(&path, "CH3 = \"heavy\"").unwrap();
        assert!(matches!(
            StrainTable::load(&path),
            Err(StrainTableLoadError::Toml { .. })
        ));
    }

    #[test]
    fn load_fails_for_malformed_csv_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("strain.csv");
        std::fs::write(&path, "group,strain_constant\nCH3,heavy\n").unwrap();
        assert!(matches!(
            StrainTable::load(&path),
            Err(StrainTableLoadError::Csv { .. })
        ));
    }

    #[test]
    fn load_rejects_negative_constant_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("strain.toml");
        std::fs::write(&path, "CH3 = -1.0").unwrap();
        assert!(matches!(
            StrainTable::load(&path),
            Err(StrainTableLoadError::InvalidConstant { .. })
        ));
    }
}
