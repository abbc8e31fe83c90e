//! Summary - the computed output record for one dataset.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::EquipmentReading;

/// The three metrics a reading carries, in detection order.
///
/// Anomaly detection walks metrics in this fixed order (flowrate, pressure,
/// temperature); the order decides which anomalies survive truncation, so
/// it is part of the output contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    Flowrate,
    Pressure,
    Temperature,
}

impl Metric {
    /// All metrics in detection order.
    pub const ALL: [Metric; 3] = [Metric::Flowrate, Metric::Pressure, Metric::Temperature];

    /// Extract this metric's value from a reading.
    pub fn value_of(&self, reading: &EquipmentReading) -> f64 {
        match self {
            Metric::Flowrate => reading.flowrate,
            Metric::Pressure => reading.pressure,
            Metric::Temperature => reading.temperature,
        }
    }

    /// Capitalized metric name, as it appears in anomaly records.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Metric::Flowrate => "Flowrate",
            Metric::Pressure => "Pressure",
            Metric::Temperature => "Temperature",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How far outside the expected band an anomalous value sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Deviation beyond 4 standard deviations.
    Critical,
    /// Deviation beyond 3 but within 4 standard deviations.
    Warning,
}

impl Severity {
    /// Severity label, as it appears in anomaly records.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::Warning => "Warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One statistically anomalous reading for one metric.
///
/// A single reading can appear up to three times - once per metric it is
/// anomalous in.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnomalyRecord {
    /// Name of the equipment the reading belongs to.
    pub equipment_name: String,

    /// Which metric the value was anomalous in.
    pub metric: Metric,

    /// The anomalous value itself.
    pub value: f64,

    /// Critical or Warning.
    pub severity: Severity,

    /// Fixed-template explanation sentence.
    pub reason: String,
}

impl AnomalyRecord {
    /// Whether this anomaly is critical.
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

/// The computed summary for one dataset of readings.
///
/// Field names are part of the JSON wire contract; consumers render this
/// directly into API responses, report tables, and dashboards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryResult {
    /// Number of input readings.
    pub total_equipment: u64,

    /// Arithmetic mean flow rate.
    pub average_flowrate: f64,

    /// Arithmetic mean pressure.
    pub average_pressure: f64,

    /// Arithmetic mean temperature.
    pub average_temperature: f64,

    /// Count of readings per exact `equipment_type` string.
    pub equipment_type_distribution: BTreeMap<String, u64>,

    /// Detected anomalies, at most [`MAX_REPORTED_ANOMALIES`](crate::MAX_REPORTED_ANOMALIES).
    pub anomalies: Vec<AnomalyRecord>,

    /// Templated natural-language narrative.
    pub insights: String,
}

impl SummaryResult {
    /// Whether any anomalies were reported.
    pub fn has_anomalies(&self) -> bool {
        !self.anomalies.is_empty()
    }

    /// Number of reported critical anomalies.
    pub fn critical_count(&self) -> usize {
        self.anomalies.iter().filter(|a| a.is_critical()).count()
    }

    /// Number of reported warning anomalies.
    pub fn warning_count(&self) -> usize {
        self.anomalies.len() - self.critical_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn sample_anomaly(severity: Severity) -> AnomalyRecord {
        AnomalyRecord {
            equipment_name: "P-101".to_string(),
            metric: Metric::Pressure,
            value: 42.0,
            severity,
            reason: "Value is significantly higher than average.".to_string(),
        }
    }

    #[test]
    fn metric_order_is_flowrate_pressure_temperature() {
        assert_eq!(
            Metric::ALL,
            [Metric::Flowrate, Metric::Pressure, Metric::Temperature]
        );
    }

    #[test]
    fn metric_value_of_selects_field() {
        let r = EquipmentReading::new("P-101", "Pump", 1.0, 2.0, 3.0);
        assert_eq!(Metric::Flowrate.value_of(&r), 1.0);
        assert_eq!(Metric::Pressure.value_of(&r), 2.0);
        assert_eq!(Metric::Temperature.value_of(&r), 3.0);
    }

    #[test]
    fn metric_display_is_capitalized() {
        assert_eq!(Metric::Flowrate.to_string(), "Flowrate");
        assert_eq!(Metric::Pressure.to_string(), "Pressure");
        assert_eq!(Metric::Temperature.to_string(), "Temperature");
    }

    #[test]
    fn severity_display() {
        assert_eq!(Severity::Critical.to_string(), "Critical");
        assert_eq!(Severity::Warning.to_string(), "Warning");
    }

    #[test]
    fn summary_counts_by_severity() {
        let summary = SummaryResult {
            total_equipment: 3,
            average_flowrate: 1.0,
            average_pressure: 2.0,
            average_temperature: 3.0,
            equipment_type_distribution: BTreeMap::new(),
            anomalies: vec![
                sample_anomaly(Severity::Critical),
                sample_anomaly(Severity::Warning),
                sample_anomaly(Severity::Warning),
            ],
            insights: String::new(),
        };

        assert!(summary.has_anomalies());
        assert_eq!(summary.critical_count(), 1);
        assert_eq!(summary.warning_count(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn metric_serializes_as_capitalized_name() {
        let json = serde_json::to_string(&Metric::Temperature).unwrap();
        assert_eq!(json, "\"Temperature\"");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn severity_serializes_as_label() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"Critical\"");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn anomaly_record_json_keys() {
        let value = serde_json::to_value(sample_anomaly(Severity::Warning)).unwrap();
        let obj = value.as_object().unwrap();
        let keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
        for key in ["equipment_name", "metric", "value", "severity", "reason"] {
            assert!(keys.contains(&key), "missing key {key}");
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn summary_json_keys_match_wire_contract() {
        let summary = SummaryResult {
            total_equipment: 1,
            average_flowrate: 10.0,
            average_pressure: 5.0,
            average_temperature: 20.0,
            equipment_type_distribution: BTreeMap::from([("Pump".to_string(), 1)]),
            anomalies: vec![],
            insights: "ok".to_string(),
        };

        let value = serde_json::to_value(&summary).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "total_equipment",
            "average_flowrate",
            "average_pressure",
            "average_temperature",
            "equipment_type_distribution",
            "anomalies",
            "insights",
        ] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert_eq!(obj.len(), 7);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn summary_serde_roundtrip() {
        let summary = SummaryResult {
            total_equipment: 2,
            average_flowrate: 10.5,
            average_pressure: 5.25,
            average_temperature: 20.125,
            equipment_type_distribution: BTreeMap::from([
                ("Pump".to_string(), 1),
                ("Valve".to_string(), 1),
            ]),
            anomalies: vec![sample_anomaly(Severity::Critical)],
            insights: "Detected 1 operational anomalies.".to_string(),
        };

        let json = serde_json::to_string(&summary).unwrap();
        let parsed: SummaryResult = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, parsed);
    }
}
