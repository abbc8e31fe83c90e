//! The summarization entry point.

use std::collections::BTreeMap;

use plantwatch_types::{EquipmentReading, SummaryResult, MAX_REPORTED_ANOMALIES};
use thiserror::Error;

use crate::anomaly::detect_anomalies;
use crate::insight::build_insights;
use crate::stats::{mean, sample_std_dev};

/// Errors from the summarization engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SummaryError {
    /// The caller passed an empty dataset. Callers are expected to filter
    /// this case and short-circuit with their own empty response.
    #[error("cannot summarize an empty dataset")]
    EmptyDataset,
}

/// Summarize a dataset of equipment readings.
///
/// Computes per-metric means and the equipment-type distribution, detects
/// z-score anomalies, and renders the insight narrative. Anomalies are
/// reported metric-by-metric (flowrate, pressure, temperature), in input
/// order within each metric, truncated to the first
/// [`MAX_REPORTED_ANOMALIES`]; the narrative quotes the count before
/// truncation.
///
/// # Errors
///
/// Returns [`SummaryError::EmptyDataset`] when `readings` is empty.
pub fn summarize(readings: &[EquipmentReading]) -> Result<SummaryResult, SummaryError> {
    if readings.is_empty() {
        return Err(SummaryError::EmptyDataset);
    }

    let flowrates: Vec<f64> = readings.iter().map(|r| r.flowrate).collect();
    let pressures: Vec<f64> = readings.iter().map(|r| r.pressure).collect();
    let temperatures: Vec<f64> = readings.iter().map(|r| r.temperature).collect();

    let average_flowrate = mean(&flowrates);
    let average_pressure = mean(&pressures);
    let average_temperature = mean(&temperatures);

    let mut equipment_type_distribution: BTreeMap<String, u64> = BTreeMap::new();
    for reading in readings {
        *equipment_type_distribution
            .entry(reading.equipment_type.clone())
            .or_insert(0) += 1;
    }

    let mut anomalies = detect_anomalies(readings);
    let anomaly_count = anomalies.len();
    anomalies.truncate(MAX_REPORTED_ANOMALIES);

    let pressure_std_dev = sample_std_dev(&pressures).unwrap_or(0.0);
    let insights = build_insights(
        anomaly_count,
        average_temperature,
        average_pressure,
        pressure_std_dev,
    );

    Ok(SummaryResult {
        total_equipment: readings.len() as u64,
        average_flowrate,
        average_pressure,
        average_temperature,
        equipment_type_distribution,
        anomalies,
        insights,
    })
}
