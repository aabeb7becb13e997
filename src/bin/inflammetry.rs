//! Inflammetry CLI - patient inflammation data management
//!
//! Views:
//! - visualize: render per-day mean/max/min for each input table
//! - record: display a single patient's observations
//! - serialize-patient-data: write one patient record as JSON next to its input
//! - serialize-all-patient-data: collect every row of every input into one JSON file

use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

use inflammetry::models::{Observation, Patient};
use inflammetry::serializers::PatientJsonSerializer;
use inflammetry::table::Table;
use inflammetry::{ingest, stats, views, AnalysisError, INFLAMMETRY_VERSION};

/// A basic patient inflammation data management system
#[derive(Parser)]
#[command(name = "inflammetry")]
#[command(author = "Riverway Clinical Informatics")]
#[command(version = INFLAMMETRY_VERSION)]
#[command(about = "Manage and analyse patient inflammation series", long_about = None)]
struct Cli {
    /// Input CSV(s), one inflammation series per patient row (use - for stdin)
    #[arg(required = true)]
    infiles: Vec<PathBuf>,

    /// Which view should be used?
    #[arg(long, value_enum, default_value = "visualize")]
    view: View,

    /// Which patient (row index) should be displayed?
    #[arg(long, default_value_t = 0)]
    patient: usize,

    /// Output path for serialize-all-patient-data
    #[arg(long, default_value = "patients.json")]
    output: PathBuf,

    /// Emit the visualize summary as JSON instead of a text table
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum View {
    /// Per-day mean/max/min summary
    Visualize,
    /// One patient's observations as text
    Record,
    /// One patient's record as JSON, written next to the input file
    SerializePatientData,
    /// All patients from all inputs into a single JSON file
    SerializeAllPatientData,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Analysis(#[from] AnalysisError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("no patient at row {row} (table has {rows} rows)")]
    NoSuchPatient { row: usize, rows: usize },

    #[error("cannot derive an output path for stdin input, use --output")]
    NoOutputPath,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("inflammetry: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut all_patients = Vec::new();

    for path in &cli.infiles {
        let table = load_table(path)?;

        match cli.view {
            View::Visualize => cmd_visualize(&table, cli.json)?,
            View::Record => {
                let patient = patient_from_row(&table, cli.patient)?;
                let mut stdout = io::stdout().lock();
                views::display_patient_record(&patient, &mut stdout)?;
            }
            View::SerializePatientData => {
                let patient = patient_from_row(&table, cli.patient)?;
                if path.to_string_lossy() == "-" {
                    return Err(CliError::NoOutputPath);
                }
                let out = path.with_extension("json");
                PatientJsonSerializer::save(std::slice::from_ref(&patient), &out)?;
            }
            View::SerializeAllPatientData => {
                for row in 0..table.n_rows() {
                    all_patients.push(patient_from_row(&table, row)?);
                }
            }
        }
    }

    if matches!(cli.view, View::SerializeAllPatientData) {
        PatientJsonSerializer::save(&all_patients, &cli.output)?;
    }

    Ok(())
}

fn load_table(path: &PathBuf) -> Result<Table, CliError> {
    if path.to_string_lossy() == "-" {
        if atty::is(atty::Stream::Stdin) {
            eprintln!("inflammetry: reading CSV from terminal stdin, finish with Ctrl-D");
        }
        Ok(ingest::read_csv(io::stdin().lock())?)
    } else {
        Ok(ingest::load_csv(path)?)
    }
}

fn cmd_visualize(table: &Table, json: bool) -> Result<(), CliError> {
    let summary = stats::daily_summary(table)?;

    let mut stdout = io::stdout().lock();
    if json {
        let rendered = serde_json::to_string_pretty(&summary).map_err(AnalysisError::from)?;
        writeln!(stdout, "{rendered}")?;
    } else {
        views::display_daily_summary(&summary, &mut stdout)?;
    }
    Ok(())
}

/// Build a patient from one table row, one observation per day column.
fn patient_from_row(table: &Table, row: usize) -> Result<Patient, CliError> {
    let cells = table.row(row).ok_or(CliError::NoSuchPatient {
        row,
        rows: table.n_rows(),
    })?;

    let mut observations = Vec::with_capacity(cells.len());
    for (day, cell) in cells.iter().enumerate() {
        let value = cell.as_f64().ok_or_else(|| AnalysisError::NotNumeric {
            row,
            col: day,
            found: cell.to_string(),
        })?;
        observations.push(Observation::new(day as u32, value));
    }

    Ok(Patient::with_observations("UNKNOWN", observations))
}
