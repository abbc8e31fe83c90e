//! # plantwatch-engine
//!
//! The summarization engine: a pure function from a dataset of equipment
//! readings to a summary record (statistics + anomalies + narrative insight).
//!
//! ## Quick Start
//!
//! ```rust
//! use plantwatch_engine::summarize;
//! use plantwatch_types::EquipmentReading;
//!
//! let readings = vec![
//!     EquipmentReading::new("P-101", "Pump", 120.0, 5.1, 36.5),
//!     EquipmentReading::new("C-7", "Compressor", 80.0, 9.8, 41.2),
//! ];
//!
//! let summary = summarize(&readings).unwrap();
//! assert_eq!(summary.total_equipment, 2);
//! assert_eq!(summary.equipment_type_distribution["Pump"], 1);
//! ```
//!
//! ## Properties
//!
//! - **Pure**: no I/O, no shared state, no suspension points. Safe to call
//!   concurrently from any number of threads; each invocation owns its
//!   input slice and allocates its own output.
//! - **Deterministic**: the same sequence of readings always produces the
//!   same summary. Input order does not affect aggregate statistics but
//!   does decide which anomalies survive truncation.
//! - **Bounded**: single pass per metric, linear in input size, with the
//!   dataset size already capped upstream at
//!   [`MAX_DATASET_ROWS`](plantwatch_types::MAX_DATASET_ROWS).

mod anomaly;
mod engine;
mod history;
mod insight;
mod stats;

pub use anomaly::detect_anomalies;
pub use engine::{summarize, SummaryError};
pub use history::{recent_history, recent_history_with_limit, DEFAULT_HISTORY_LIMIT};
pub use insight::{build_insights, HIGH_TEMPERATURE_BASELINE, PRESSURE_VARIANCE_RATIO};
pub use stats::{mean, sample_std_dev};

// Re-export types for convenience
pub use plantwatch_types::{
    AnomalyRecord, Dataset, DatasetSummary, EquipmentReading, Metric, Severity, SummaryResult,
};
