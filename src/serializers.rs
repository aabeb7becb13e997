//! JSON persistence for patient records
//!
//! The persisted form is a JSON array of patients, each with its name and
//! ordered `(day, value)` observations. Saving and reloading yields the same
//! sequence under patient equality.

use std::fs;
use std::path::Path;

use crate::error::AnalysisError;
use crate::models::Patient;

/// Saves and loads patient records as JSON.
pub struct PatientJsonSerializer;

impl PatientJsonSerializer {
    /// Serialize patients to a JSON string.
    pub fn to_json(patients: &[Patient]) -> Result<String, AnalysisError> {
        Ok(serde_json::to_string_pretty(patients)?)
    }

    /// Parse patients from a JSON string.
    pub fn from_json(json: &str) -> Result<Vec<Patient>, AnalysisError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write patients to a JSON file.
    pub fn save(patients: &[Patient], path: &Path) -> Result<(), AnalysisError> {
        fs::write(path, Self::to_json(patients)?)?;
        Ok(())
    }

    /// Read patients back from a JSON file.
    pub fn load(path: &Path) -> Result<Vec<Patient>, AnalysisError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Observation;
    use pretty_assertions::assert_eq;

    fn sample_patients() -> Vec<Patient> {
        vec![
            Patient::with_observations(
                "Alice",
                (0..3).map(|i| Observation::new(i, (i + 1) as f64)).collect(),
            ),
            Patient::with_observations(
                "Bob",
                (0..3).map(|i| Observation::new(i, (2 * i) as f64)).collect(),
            ),
        ]
    }

    #[test]
    fn test_json_round_trip() {
        let patients = sample_patients();

        let json = PatientJsonSerializer::to_json(&patients).unwrap();
        let reloaded = PatientJsonSerializer::from_json(&json).unwrap();

        assert_eq!(reloaded.len(), patients.len());
        for (got, want) in reloaded.iter().zip(&patients) {
            assert_eq!(got, want);
        }
    }

    #[test]
    fn test_file_round_trip() {
        let patients = sample_patients();
        let path = std::env::temp_dir().join("inflammetry-serializer-roundtrip.json");

        PatientJsonSerializer::save(&patients, &path).unwrap();
        let reloaded = PatientJsonSerializer::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(reloaded, patients);
    }

    #[test]
    fn test_observation_order_preserved() {
        let patients = vec![Patient::with_observations(
            "Carol",
            vec![
                Observation::new(2, 7.0),
                Observation::new(0, 5.0),
                Observation::new(1, 6.0),
            ],
        )];

        let json = PatientJsonSerializer::to_json(&patients).unwrap();
        let reloaded = PatientJsonSerializer::from_json(&json).unwrap();

        let days: Vec<u32> = reloaded[0].observations.iter().map(|o| o.day).collect();
        assert_eq!(days, vec![2, 0, 1]);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = PatientJsonSerializer::from_json("{not json").unwrap_err();
        assert!(matches!(err, AnalysisError::Json(_)));
    }
}
