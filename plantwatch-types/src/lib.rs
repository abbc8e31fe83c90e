//! # plantwatch-types
//!
//! Core types for sensor-equipment analytics. This crate defines the
//! universal schema shared by the summarization engine, the ingestion
//! boundary, and any consumer that renders or serializes summaries.
//!
//! ## Design Goals
//!
//! - **Zero required dependencies**: Core types work without any serialization framework
//! - **Optional serialization**: Enable the `serde` feature as needed
//! - **Typed boundary**: Raw tabular input is converted into [`EquipmentReading`]
//!   records at the edge; everything downstream operates on typed data only
//! - **Stable JSON shape**: Field names of [`SummaryResult`] and [`AnomalyRecord`]
//!   are part of the wire contract and must not drift
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `serde`: JSON/etc. serialization via serde
//!
//! ## Example
//!
//! ```rust
//! use plantwatch_types::EquipmentReading;
//!
//! let reading = EquipmentReading::new("P-101", "Pump", 120.0, 5.1, 36.5);
//! assert_eq!(reading.equipment_type, "Pump");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod dataset;
mod reading;
mod summary;

pub use dataset::*;
pub use reading::*;
pub use summary::*;

/// Hard ceiling on the number of readings in one dataset.
///
/// Enforced at the ingestion boundary, never by the engine: by the time a
/// dataset reaches summarization its size is already bounded.
pub const MAX_DATASET_ROWS: usize = 25_000;

/// Maximum number of anomaly records carried by a [`SummaryResult`].
///
/// Detection may find more; the reported list is truncated to the first
/// `MAX_REPORTED_ANOMALIES` in metric-then-input order. The insight
/// narrative still quotes the pre-truncation count.
pub const MAX_REPORTED_ANOMALIES: usize = 10;
