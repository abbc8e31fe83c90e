//! Templated natural-language insight narrative.

/// Mean temperature (°C) above which the thermal-baseline warning fires.
pub const HIGH_TEMPERATURE_BASELINE: f64 = 40.0;

/// Pressure std-dev / mean ratio above which the variance caution fires.
pub const PRESSURE_VARIANCE_RATIO: f64 = 0.2;

/// Build the insight narrative for one dataset.
///
/// `anomaly_count` is the number of anomalies found BEFORE the reporting
/// cap is applied, so the narrative can quote more anomalies than the
/// summary carries. `pressure_std_dev` is the sample standard deviation of
/// pressure, taken as 0 when fewer than two readings exist.
///
/// Fragments are emitted in a fixed order and joined with single spaces.
pub fn build_insights(
    anomaly_count: usize,
    average_temperature: f64,
    average_pressure: f64,
    pressure_std_dev: f64,
) -> String {
    let mut fragments = Vec::new();

    if anomaly_count == 0 {
        fragments.push(
            "Overall system health is Optimal. No statistical anomalies detected across active sensors."
                .to_string(),
        );
    } else {
        fragments.push(format!(
            "Detected {anomaly_count} operational anomalies. Critical attention required for equipment highlighted in red."
        ));
    }

    if average_temperature > HIGH_TEMPERATURE_BASELINE {
        fragments.push(
            "Warning: High average thermal baseline detected (>40°C). Consider inspecting cooling subsystems."
                .to_string(),
        );
    }

    if pressure_std_dev > average_pressure * PRESSURE_VARIANCE_RATIO {
        fragments.push(
            "Caution: High pressure variance detected. This may indicate unstable valve operations or sensor calibration issues."
                .to_string(),
        );
    }

    fragments.join(" ")
}
