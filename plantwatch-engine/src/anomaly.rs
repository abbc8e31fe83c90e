//! Z-score anomaly detection across the three metrics.

use plantwatch_types::{AnomalyRecord, EquipmentReading, Metric, Severity};

use crate::stats::{mean, sample_std_dev};

/// Deviations beyond this many standard deviations are anomalous.
const DETECTION_SIGMA: f64 = 3.0;

/// Deviations beyond this many standard deviations are critical.
const CRITICAL_SIGMA: f64 = 4.0;

/// Detect statistical anomalies in a dataset.
///
/// Metrics are scanned in the fixed order flowrate, pressure, temperature;
/// within one metric, anomalies appear in input order. A metric whose
/// standard deviation is undefined (single reading) or zero (all values
/// identical) produces no anomalies.
///
/// The returned list is NOT truncated; [`summarize`](crate::summarize)
/// applies the reporting cap and quotes the full count in the narrative.
pub fn detect_anomalies(readings: &[EquipmentReading]) -> Vec<AnomalyRecord> {
    let mut anomalies = Vec::new();

    for metric in Metric::ALL {
        let values: Vec<f64> = readings.iter().map(|r| metric.value_of(r)).collect();

        let mu = mean(&values);
        let sigma = match sample_std_dev(&values) {
            Some(s) if s > 0.0 => s,
            _ => continue,
        };

        for (reading, &value) in readings.iter().zip(&values) {
            let deviation = (value - mu).abs();
            if deviation > DETECTION_SIGMA * sigma {
                let severity = if deviation > CRITICAL_SIGMA * sigma {
                    Severity::Critical
                } else {
                    Severity::Warning
                };
                let direction = if value > mu { "higher" } else { "lower" };

                anomalies.push(AnomalyRecord {
                    equipment_name: reading.name.clone(),
                    metric,
                    value,
                    severity,
                    reason: format!("Value is significantly {direction} than average."),
                });
            }
        }
    }

    anomalies
}
