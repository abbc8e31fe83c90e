//! Equipment readings - the typed input records of the system.

use alloc::string::String;

/// One physical sensor/device measurement.
///
/// A reading is produced by the ingestion boundary and is immutable from
/// then on. The engine consumes a sequence of these and never mutates or
/// persists them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentReading {
    /// Equipment identifier, e.g. `"P-101"`.
    pub name: String,

    /// Equipment category, e.g. `"Pump"`.
    ///
    /// Compared byte-for-byte when building type distributions: distinct
    /// casings or whitespace are distinct categories.
    pub equipment_type: String,

    /// Flow rate in m³/h.
    pub flowrate: f64,

    /// Pressure in Pa.
    pub pressure: f64,

    /// Temperature in °C.
    pub temperature: f64,
}

impl EquipmentReading {
    /// Create a new reading.
    pub fn new(
        name: impl Into<String>,
        equipment_type: impl Into<String>,
        flowrate: f64,
        pressure: f64,
        temperature: f64,
    ) -> Self {
        Self {
            name: name.into(),
            equipment_type: equipment_type.into(),
            flowrate,
            pressure,
            temperature,
        }
    }

    /// Case- and whitespace-insensitive identity of this reading.
    ///
    /// Two rows with the same key describe the same piece of equipment;
    /// ingestion keeps only the first occurrence.
    pub fn dedup_key(&self) -> (String, String) {
        (
            self.name.trim().to_lowercase(),
            self.equipment_type.trim().to_lowercase(),
        )
    }
}

/// Per-reading projection for scatter charts.
///
/// Maps temperature to the x axis and pressure to the y axis, carrying
/// flowrate and type along for sizing/coloring.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScatterPoint {
    /// Temperature in °C.
    pub x: f64,

    /// Pressure in Pa.
    pub y: f64,

    /// Flow rate in m³/h.
    pub flowrate: f64,

    /// Equipment category.
    pub equipment_type: String,
}

impl From<&EquipmentReading> for ScatterPoint {
    fn from(reading: &EquipmentReading) -> Self {
        Self {
            x: reading.temperature,
            y: reading.pressure,
            flowrate: reading.flowrate,
            equipment_type: reading.equipment_type.clone(),
        }
    }
}
