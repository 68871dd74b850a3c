//! YAML scenario files: a start time, researched chips and models to score.

use serde::{Deserialize, Serialize};
use sim_core::{validate_model, ComputerModel, CustomChip, GameTime, ValidationError};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid scenario yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid scenario: {0}")]
    Invalid(#[from] ValidationError),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub start: GameTime,
    #[serde(default)]
    pub advance_quarters: u32,
    #[serde(default)]
    pub custom_chips: Vec<CustomChip>,
    #[serde(default)]
    pub models: Vec<ComputerModel>,
}

impl Scenario {
    pub fn from_yaml(text: &str) -> Result<Self, ScenarioError> {
        let s: Scenario = serde_yaml::from_str(text)?;
        sim_core::validate_time(&s.start)?;
        for m in &s.models {
            validate_model(m)?;
        }
        Ok(s)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioError> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Built-in scenario: an office 486 in spring 1989.
    pub fn demo(start: GameTime) -> Self {
        Self {
            start,
            advance_quarters: 0,
            custom_chips: vec![],
            models: vec![ComputerModel {
                name: "Office 486".into(),
                cpu: "Intel 80486".into(),
                gpu: "VGA Graphics".into(),
                ram: "2MB RAM".into(),
                sound: "Yamaha YM2149".into(),
                accessories: vec!["40MB Hard Drive".into(), "VGA Monitor".into()],
                case: Some("Standard Case".into()),
                case_quality: None,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parses_minimal_yaml() {
        let s = Scenario::from_yaml("start: { year: 1985, quarter: 3 }\n").unwrap();
        assert_eq!(s.start, GameTime::new(1985, 3));
        assert!(s.models.is_empty());
        assert_eq!(s.advance_quarters, 0);
    }

    #[test]
    fn rejects_bad_quarter() {
        let err = Scenario::from_yaml("start: { year: 1985, quarter: 9 }\n").unwrap_err();
        assert!(matches!(err, ScenarioError::Invalid(ValidationError::QuarterOutOfRange(9))));
    }

    #[test]
    fn rejects_malformed_yaml() {
        assert!(matches!(
            Scenario::from_yaml("start: [1985"),
            Err(ScenarioError::Yaml(_))
        ));
    }

    #[test]
    fn bundled_scenario_loads() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../assets/scenarios/1989_office.yaml");
        let s = Scenario::load(path).unwrap();
        assert_eq!(s.start, GameTime::new(1989, 2));
        assert_eq!(s.custom_chips.len(), 1);
        assert_eq!(s.models.len(), 2);
    }
}
