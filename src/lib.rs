//! Inflammetry - in-memory management and analysis of patient inflammation series
//!
//! The crate models tabular inflammation readings (rows = patients, columns
//! = days) together with the people they belong to, and provides:
//!
//! ## Modules
//!
//! - **table**: tagged cell values and the rectangular measurement table
//! - **stats**: per-day mean/max/min reductions
//! - **normalizer**: per-patient rescaling of three-day tables behind a
//!   strict validation contract
//! - **models**: observations, patients, doctors and patient groups
//! - **serializers**: exact JSON round-trip of patient records
//! - **ingest** / **views**: CSV reading and plain-text rendering

pub mod error;
pub mod ingest;
pub mod models;
pub mod normalizer;
pub mod serializers;
pub mod stats;
pub mod table;
pub mod views;

pub use error::{AnalysisError, ErrorKind};
pub use models::{Doctor, Named, Observation, Patient, PatientGroup};
pub use normalizer::patient_normalise;
pub use stats::{daily_max, daily_mean, daily_min, daily_summary, DailySummary};
pub use table::{ElementKind, Table, Value};

/// Crate version embedded in the CLI
pub const INFLAMMETRY_VERSION: &str = env!("CARGO_PKG_VERSION");
