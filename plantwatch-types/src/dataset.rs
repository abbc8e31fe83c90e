//! Datasets - one uploaded batch of readings plus identity metadata.

use alloc::string::String;
use alloc::vec::Vec;

use crate::{EquipmentReading, SummaryResult};

/// One batch of equipment readings with identity metadata.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dataset {
    /// Caller-assigned dataset identifier.
    pub id: u64,

    /// Human-readable name, typically the source file name.
    pub name: String,

    /// Unix timestamp in milliseconds when the dataset was ingested.
    pub uploaded_at_ms: u64,

    /// The readings themselves.
    pub readings: Vec<EquipmentReading>,
}

impl Dataset {
    /// Create a new dataset.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        uploaded_at_ms: u64,
        readings: Vec<EquipmentReading>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            uploaded_at_ms,
            readings,
        }
    }

    /// Whether the dataset has no readings.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Number of readings.
    pub fn len(&self) -> usize {
        self.readings.len()
    }
}

/// A computed summary wrapped with the identity of the dataset it came from.
///
/// This is the per-entry shape of the recent-history surface.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DatasetSummary {
    /// Identifier of the summarized dataset.
    pub dataset_id: u64,

    /// Name of the summarized dataset.
    pub dataset_name: String,

    /// When the dataset was ingested (Unix milliseconds).
    pub uploaded_at_ms: u64,

    /// The summary itself.
    pub summary: SummaryResult,
}
