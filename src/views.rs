//! Text views over patients and daily statistics
//!
//! Pure sinks: they render to any writer and feed nothing back into the
//! analysis layers.

use std::io::{self, Write};

use crate::models::Patient;
use crate::stats::DailySummary;

/// Write a patient's record: the name, then one line per observation.
pub fn display_patient_record<W: Write>(patient: &Patient, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", patient.name)?;
    if patient.observations.is_empty() {
        writeln!(out, "No observations made so far")?;
    } else {
        for observation in &patient.observations {
            writeln!(out, "{observation}")?;
        }
    }
    Ok(())
}

/// Write the per-day summary as an aligned table, one row per day.
pub fn display_daily_summary<W: Write>(summary: &DailySummary, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{:>4}  {:>10}  {:>10}  {:>10}",
        "day", "average", "max", "min"
    )?;
    for (day, ((average, max), min)) in summary
        .average
        .iter()
        .zip(&summary.max)
        .zip(&summary.min)
        .enumerate()
    {
        writeln!(out, "{day:>4}  {average:>10.2}  {max:>10.2}  {min:>10.2}")?;
    }
    Ok(())
}
