//! # plantwatch-ingest
//!
//! The typed ingestion boundary: raw CSV datasets become
//! [`EquipmentReading`](plantwatch_types::EquipmentReading) records here,
//! and nothing downstream ever touches an untyped row.
//!
//! ## Contract
//!
//! - The header row must be exactly
//!   `Equipment Name, Type, Flowrate, Pressure, Temperature`.
//! - A file with no data rows is rejected, as is one with more than
//!   [`MAX_DATASET_ROWS`](plantwatch_types::MAX_DATASET_ROWS) rows.
//! - Rows repeating an earlier row's case-folded `(name, type)` pair are
//!   skipped; the first occurrence wins.
//! - A row that cannot be parsed into the typed record fails the load.
//!
//! ## Example
//!
//! ```rust
//! use std::io::Cursor;
//!
//! let csv = "\
//! Equipment Name,Type,Flowrate,Pressure,Temperature
//! P-101,Pump,120.0,5.1,36.5
//! V-12,Valve,80.0,9.8,41.2
//! ";
//!
//! let readings = plantwatch_ingest::parse_csv(Cursor::new(csv)).unwrap();
//! assert_eq!(readings.len(), 2);
//! ```

mod csv_source;
mod error;

pub use csv_source::{load_dataset, parse_csv, read_csv, EXPECTED_HEADERS};
pub use error::IngestError;
