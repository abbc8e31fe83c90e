//! CSV dataset loading.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::UNIX_EPOCH;

use plantwatch_types::{Dataset, EquipmentReading, MAX_DATASET_ROWS};
use serde::Deserialize;
use tracing::debug;

use crate::error::IngestError;

/// The exact header row every dataset file must carry, in order.
pub const EXPECTED_HEADERS: [&str; 5] =
    ["Equipment Name", "Type", "Flowrate", "Pressure", "Temperature"];

/// One raw CSV row, named after the upstream column contract.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Equipment Name")]
    name: String,
    #[serde(rename = "Type")]
    equipment_type: String,
    #[serde(rename = "Flowrate")]
    flowrate: f64,
    #[serde(rename = "Pressure")]
    pressure: f64,
    #[serde(rename = "Temperature")]
    temperature: f64,
}

impl From<RawRow> for EquipmentReading {
    fn from(row: RawRow) -> Self {
        EquipmentReading::new(
            row.name,
            row.equipment_type,
            row.flowrate,
            row.pressure,
            row.temperature,
        )
    }
}

/// Parse a CSV dataset from any reader.
///
/// Enforces the header contract and the row ceiling, and keeps only the
/// first row for each case-folded `(name, type)` pair.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<EquipmentReading>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.iter().ne(EXPECTED_HEADERS) {
        return Err(IngestError::InvalidHeader {
            expected: &EXPECTED_HEADERS,
            received: headers.iter().map(str::to_string).collect(),
        });
    }

    let mut readings = Vec::new();
    let mut seen_keys: HashSet<(String, String)> = HashSet::new();
    let mut row_count = 0usize;

    for row in csv_reader.deserialize::<RawRow>() {
        row_count += 1;
        if row_count > MAX_DATASET_ROWS {
            return Err(IngestError::TooManyRows {
                max: MAX_DATASET_ROWS,
            });
        }

        let reading = EquipmentReading::from(row?);
        if !seen_keys.insert(reading.dedup_key()) {
            debug!(name = %reading.name, equipment_type = %reading.equipment_type,
                "skipping duplicate equipment row");
            continue;
        }
        readings.push(reading);
    }

    if row_count == 0 {
        return Err(IngestError::Empty);
    }

    Ok(readings)
}

/// Parse a CSV dataset from a file.
pub fn read_csv(path: impl AsRef<Path>) -> Result<Vec<EquipmentReading>, IngestError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_csv(file)
}

/// Load a CSV file as a [`Dataset`].
///
/// The dataset takes its name from the file name and its upload time from
/// the file's modification time.
pub fn load_dataset(path: impl AsRef<Path>, id: u64) -> Result<Dataset, IngestError> {
    let path = path.as_ref();
    let readings = read_csv(path)?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let uploaded_at_ms = std::fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    Ok(Dataset::new(id, name, uploaded_at_ms, readings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Write;

    const VALID_CSV: &str = "\
Equipment Name,Type,Flowrate,Pressure,Temperature
P-101,Pump,120.0,5.1,36.5
V-12,Valve,80.0,9.8,41.2
";

    #[test]
    fn parses_valid_rows() {
        let readings = parse_csv(Cursor::new(VALID_CSV)).unwrap();

        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].name, "P-101");
        assert_eq!(readings[0].equipment_type, "Pump");
        assert_eq!(readings[0].flowrate, 120.0);
        assert_eq!(readings[1].pressure, 9.8);
        assert_eq!(readings[1].temperature, 41.2);
    }

    #[test]
    fn rejects_wrong_headers() {
        let csv = "Name,Type,Flow,Pressure,Temperature\nP-101,Pump,1,2,3\n";
        let err = parse_csv(Cursor::new(csv)).unwrap_err();

        match err {
            IngestError::InvalidHeader { received, .. } => {
                assert_eq!(received[0], "Name");
            }
            other => panic!("expected InvalidHeader, got {other:?}"),
        }
    }

    #[test]
    fn rejects_reordered_headers() {
        let csv = "Type,Equipment Name,Flowrate,Pressure,Temperature\nPump,P-101,1,2,3\n";
        assert!(matches!(
            parse_csv(Cursor::new(csv)),
            Err(IngestError::InvalidHeader { .. })
        ));
    }

    #[test]
    fn rejects_header_only_file() {
        let csv = "Equipment Name,Type,Flowrate,Pressure,Temperature\n";
        assert!(matches!(
            parse_csv(Cursor::new(csv)),
            Err(IngestError::Empty)
        ));
    }

    #[test]
    fn rejects_non_numeric_metric() {
        let csv = "\
Equipment Name,Type,Flowrate,Pressure,Temperature
P-101,Pump,abc,5.1,36.5
";
        assert!(matches!(
            parse_csv(Cursor::new(csv)),
            Err(IngestError::Csv(_))
        ));
    }

    #[test]
    fn first_occurrence_wins_on_duplicate_key() {
        let csv = "\
Equipment Name,Type,Flowrate,Pressure,Temperature
Pump A,Pump,1.0,1.0,1.0
 pump a ,PUMP,2.0,2.0,2.0
Pump B,Pump,3.0,3.0,3.0
";
        let readings = parse_csv(Cursor::new(csv)).unwrap();

        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].name, "Pump A");
        assert_eq!(readings[0].flowrate, 1.0);
        assert_eq!(readings[1].name, "Pump B");
    }

    #[test]
    fn same_name_different_type_is_kept() {
        let csv = "\
Equipment Name,Type,Flowrate,Pressure,Temperature
Unit 1,Pump,1.0,1.0,1.0
Unit 1,Valve,2.0,2.0,2.0
";
        let readings = parse_csv(Cursor::new(csv)).unwrap();
        assert_eq!(readings.len(), 2);
    }

    #[test]
    fn rejects_files_over_the_row_ceiling() {
        let mut csv = String::from("Equipment Name,Type,Flowrate,Pressure,Temperature\n");
        for i in 0..=MAX_DATASET_ROWS {
            csv.push_str(&format!("EQ-{i},Pump,1.0,2.0,3.0\n"));
        }

        assert!(matches!(
            parse_csv(Cursor::new(csv)),
            Err(IngestError::TooManyRows { max }) if max == MAX_DATASET_ROWS
        ));
    }

    #[test]
    fn accepts_files_at_the_row_ceiling() {
        let mut csv = String::from("Equipment Name,Type,Flowrate,Pressure,Temperature\n");
        for i in 0..MAX_DATASET_ROWS {
            csv.push_str(&format!("EQ-{i},Pump,1.0,2.0,3.0\n"));
        }

        let readings = parse_csv(Cursor::new(csv)).unwrap();
        assert_eq!(readings.len(), MAX_DATASET_ROWS);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_csv("/nonexistent/readings.csv").unwrap_err();
        match err {
            IngestError::Io { path, .. } => {
                assert_eq!(path.to_string_lossy(), "/nonexistent/readings.csv");
            }
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn load_dataset_uses_file_name_and_mtime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plant_a.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(VALID_CSV.as_bytes()).unwrap();
        drop(file);

        let dataset = load_dataset(&path, 7).unwrap();
        assert_eq!(dataset.id, 7);
        assert_eq!(dataset.name, "plant_a.csv");
        assert_eq!(dataset.len(), 2);
        assert!(dataset.uploaded_at_ms > 0);
    }
}
