//! Patients, doctors and their observations
//!
//! Entity model for the measurement data. Patient and Doctor are independent
//! structs that share the [`Named`] capability; there is no common base
//! type. A patient exclusively owns its observation sequence, in insertion
//! order, which is also chronological order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Title rendered in front of a doctor's name.
pub const DOCTOR_TITLE: &str = "Dr";

/// Anything addressable by a display name.
pub trait Named {
    fn name(&self) -> &str;
}

/// A single inflammation reading taken on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub day: u32,
    pub value: f64,
}

impl Observation {
    pub fn new(day: u32, value: f64) -> Self {
        Self { day, value }
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}: {}", self.day, self.value)
    }
}

/// A patient and their chronologically ordered observations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub name: String,
    pub observations: Vec<Observation>,
}

impl Patient {
    /// Create a patient with no observations yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            observations: Vec::new(),
        }
    }

    pub fn with_observations(name: impl Into<String>, observations: Vec<Observation>) -> Self {
        Self {
            name: name.into(),
            observations,
        }
    }

    /// Record a new observation and return it.
    ///
    /// With `day` of `None` the reading lands on the day after the last
    /// recorded one, starting from day 0 for an empty sequence. An explicit
    /// `day` is taken as given, even when it collides with or precedes
    /// existing readings.
    pub fn add_observation(&mut self, value: f64, day: Option<u32>) -> Observation {
        let day = day.unwrap_or_else(|| self.observations.last().map_or(0, |obs| obs.day + 1));

        let observation = Observation::new(day, value);
        self.observations.push(observation.clone());
        observation
    }
}

/// Two patients compare equal when their names match and their observations
/// match pairwise up to the length of the shorter sequence; a trailing tail
/// on either side is not compared.
impl PartialEq for Patient {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self
                .observations
                .iter()
                .zip(&other.observations)
                .all(|(a, b)| a == b)
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Named for Patient {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A doctor and the patients under their care.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
    pub title: String,
    pub patients: Vec<Patient>,
}

impl Doctor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: DOCTOR_TITLE.to_string(),
            patients: Vec::new(),
        }
    }

    pub fn add_patient(&mut self, patient: Patient) {
        self.patients.push(patient);
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.title, self.name)
    }
}

impl Named for Doctor {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A cohort of patients, optionally labelled. Members are held by value, so
/// the same patient may also live in other groups or lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientGroup {
    pub label: Option<String>,
    pub patients: Vec<Patient>,
    /// Marks this cohort as the control arm.
    pub control: bool,
}

impl PatientGroup {
    /// Create an empty, non-control cohort.
    pub fn new(label: Option<String>) -> Self {
        Self {
            label,
            patients: Vec::new(),
            control: false,
        }
    }

    pub fn with_patients(label: Option<String>, patients: Vec<Patient>) -> Self {
        Self {
            label,
            patients,
            control: false,
        }
    }
}

impl Default for PatientGroup {
    fn default() -> Self {
        Self::new(None)
    }
}
