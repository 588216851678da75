//! Per-state limit overrides from TOML
//!
//! ```toml
//! [states.CO]
//! single_axle = 20000
//! tandem_axle = 36000
//! gross_vehicle_weight = 85000
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;
use weighcheck_domain::model::WeightLimit;
use weighcheck_domain::service::LimitTable;
use weighcheck_types::{ConfigError, Error, Result, UsState};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LimitOverridesFile {
    #[serde(default)]
    states: BTreeMap<String, WeightLimit>,
}

/// Parse override entries from TOML text
pub fn parse_limit_overrides(content: &str) -> Result<Vec<(UsState, WeightLimit)>> {
    let file: LimitOverridesFile = toml::from_str(content)?;

    let mut overrides = Vec::with_capacity(file.states.len());
    for (code, limit) in file.states {
        let state = UsState::parse_code(&code).ok_or_else(|| {
            ConfigError::ParseError(format!("unknown state in limits file: {}", code))
        })?;
        if !limit.is_valid() {
            return Err(ConfigError::ParseError(format!(
                "limits for {} must all be positive",
                state
            ))
            .into());
        }
        overrides.push((state, limit));
    }
    Ok(overrides)
}

pub fn load_limit_overrides(path: &Path) -> Result<Vec<(UsState, WeightLimit)>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let overrides = parse_limit_overrides(&content)?;
    info!(path = %path.display(), count = overrides.len(), "loaded limit overrides");
    Ok(overrides)
}

/// Built-in table, with the overrides from `path` applied when given
pub fn load_limit_table(path: Option<&Path>) -> Result<LimitTable> {
    match path {
        Some(path) => Ok(LimitTable::builtin().with_overrides(load_limit_overrides(path)?)),
        None => Ok(LimitTable::builtin().clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use weighcheck_types::{AxleClass, Jurisdiction};

    #[test]
    fn test_parse_overrides() {
        let content = r#"
            [states.TX]
            single_axle = 20000
            tandem_axle = 34000
            gross_vehicle_weight = 84000

            [states.mi]
            single_axle = 18000
            tandem_axle = 32000
            gross_vehicle_weight = 80000
        "#;
        let overrides = parse_limit_overrides(content).unwrap();
        assert_eq!(overrides.len(), 2);
        assert!(overrides.contains(&(UsState::TX, WeightLimit::new(20_000, 34_000, 84_000))));
        assert!(overrides.contains(&(UsState::MI, WeightLimit::new(18_000, 32_000, 80_000))));
    }

    #[test]
    fn test_unknown_state_rejected() {
        let content = r#"
            [states.ZZ]
            single_axle = 1
            tandem_axle = 1
            gross_vehicle_weight = 1
        "#;
        let err = parse_limit_overrides(content).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let content = r#"
            [states.TX]
            single_axle = 0
            tandem_axle = 34000
            gross_vehicle_weight = 80000
        "#;
        assert!(parse_limit_overrides(content).is_err());
    }

    #[test]
    fn test_missing_field_rejected() {
        let content = r#"
            [states.TX]
            single_axle = 20000
        "#;
        assert!(matches!(parse_limit_overrides(content), Err(Error::Toml(_))));
    }

    #[test]
    fn test_load_limit_table_applies_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[states.CO]").unwrap();
        writeln!(file, "single_axle = 20000").unwrap();
        writeln!(file, "tandem_axle = 36000").unwrap();
        writeln!(file, "gross_vehicle_weight = 90000").unwrap();

        let table = load_limit_table(Some(file.path())).unwrap();
        assert_eq!(
            table.limit_for(Jurisdiction::State(UsState::CO), AxleClass::GrossVehicleWeight),
            90_000
        );
        // untouched states keep built-in values
        assert_eq!(
            table.limit_for(Jurisdiction::State(UsState::TX), AxleClass::GrossVehicleWeight),
            80_000
        );
    }

    #[test]
    fn test_load_limit_table_without_file() {
        let table = load_limit_table(None).unwrap();
        assert_eq!(&table, LimitTable::builtin());
    }
}
