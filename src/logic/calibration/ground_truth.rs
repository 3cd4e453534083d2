//! Ground-Truth Parser
//!
//! Reads an uploaded CSV of field observations. Rows with unparseable
//! coordinates or density are skipped and counted, never fatal.

use serde::{Deserialize, Serialize};

use crate::constants::{COLUMN_DENSITY, COLUMN_LATITUDE, COLUMN_LONGITUDE, DENSITY_CUTOFF};
use crate::logic::detection::Location;
use crate::logic::error::{SentinelError, SentinelResult};

/// One ground-truth sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledObservation {
    pub location: Location,
    pub density: f64,
}

impl LabeledObservation {
    pub fn new(lat: f64, lon: f64, density: f64) -> Self {
        Self {
            location: Location::new(lat, lon),
            density,
        }
    }

    /// Observed bloom: density at or above the cutoff
    pub fn is_bloom(&self) -> bool {
        self.density >= DENSITY_CUTOFF
    }
}

/// Parser output
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedGroundTruth {
    pub observations: Vec<LabeledObservation>,
    pub skipped_rows: usize,
}

impl ParsedGroundTruth {
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

struct ColumnIndex {
    lat: usize,
    lon: usize,
    density: usize,
}

/// Parse uploaded ground-truth bytes.
pub fn parse(content: &[u8]) -> SentinelResult<ParsedGroundTruth> {
    let text = std::str::from_utf8(content).map_err(|e| SentinelError::Decode(e.to_string()))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| SentinelError::Decode(e.to_string()))?
        .clone();
    let columns = resolve_columns(&headers)?;

    let mut parsed = ParsedGroundTruth::default();
    for (row, result) in reader.records().enumerate() {
        let observation = result.ok().and_then(|record| {
            Some(LabeledObservation::new(
                field(&record, columns.lat)?,
                field(&record, columns.lon)?,
                field(&record, columns.density)?,
            ))
        });

        match observation {
            Some(obs) => parsed.observations.push(obs),
            None => {
                // +2: one for the header, one for 1-based line numbers
                tracing::debug!(line = row + 2, "Skipping malformed ground-truth row");
                parsed.skipped_rows += 1;
            }
        }
    }

    tracing::info!(
        accepted = parsed.observations.len(),
        skipped = parsed.skipped_rows,
        "Parsed ground-truth upload"
    );
    Ok(parsed)
}

fn resolve_columns(headers: &csv::StringRecord) -> SentinelResult<ColumnIndex> {
    // Last occurrence wins for duplicated header names
    let find = |name: &str| {
        headers
            .iter()
            .enumerate()
            .filter(|(_, h)| h.trim() == name)
            .map(|(idx, _)| idx)
            .last()
    };

    let lat = find(COLUMN_LATITUDE);
    let lon = find(COLUMN_LONGITUDE);
    let density = find(COLUMN_DENSITY);

    match (lat, lon, density) {
        (Some(lat), Some(lon), Some(density)) => Ok(ColumnIndex { lat, lon, density }),
        _ => {
            let missing = [
                (COLUMN_LATITUDE, lat),
                (COLUMN_LONGITUDE, lon),
                (COLUMN_DENSITY, density),
            ]
            .iter()
            .filter(|(_, idx)| idx.is_none())
            .map(|(name, _)| name.to_string())
            .collect();
            Err(SentinelError::Schema { missing })
        }
    }
}

fn field(record: &csv::StringRecord, idx: usize) -> Option<f64> {
    record
        .get(idx)?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "latitude,longitude,observed_cyanobacteria_density";

    #[test]
    fn test_malformed_rows_skipped() {
        let csv = format!("{}\n1.0,2.0,15.0\nbad,2.0,5.0\n3.0,4.0,not_a_number\n", HEADER);
        let parsed = parse(csv.as_bytes()).unwrap();

        assert_eq!(parsed.observations, vec![LabeledObservation::new(1.0, 2.0, 15.0)]);
        assert_eq!(parsed.skipped_rows, 2);
    }

    #[test]
    fn test_missing_columns() {
        let err = parse(b"latitude,density\n1.0,2.0\n").unwrap_err();
        assert_eq!(
            err,
            SentinelError::Schema {
                missing: vec![
                    "longitude".to_string(),
                    "observed_cyanobacteria_density".to_string()
                ]
            }
        );
    }

    #[test]
    fn test_empty_upload_is_schema_error() {
        assert!(matches!(parse(b"").unwrap_err(), SentinelError::Schema { .. }));
    }

    #[test]
    fn test_invalid_utf8() {
        let err = parse(&[0x6c, 0x61, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, SentinelError::Decode(_)));
    }

    #[test]
    fn test_header_only_yields_no_data() {
        let parsed = parse(format!("{}\n", HEADER).as_bytes()).unwrap();
        assert!(parsed.is_empty());
        assert_eq!(parsed.skipped_rows, 0);
    }

    #[test]
    fn test_extra_and_reordered_columns() {
        let csv = "site,observed_cyanobacteria_density,longitude,notes,latitude\n\
                   A, 12.5 ,-83.2,clear,41.6\n\
                   B,3,-83.1,,41.7\n";
        let parsed = parse(csv.as_bytes()).unwrap();

        assert_eq!(
            parsed.observations,
            vec![
                LabeledObservation::new(41.6, -83.2, 12.5),
                LabeledObservation::new(41.7, -83.1, 3.0),
            ]
        );
        assert!(parsed.observations[0].is_bloom());
        assert!(!parsed.observations[1].is_bloom());
    }

    #[test]
    fn test_short_rows_and_non_finite_values_skipped() {
        let csv = format!("{}\n1.0,2.0\n1.0,2.0,inf\n5.0,6.0,10.0\n", HEADER);
        let parsed = parse(csv.as_bytes()).unwrap();

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.skipped_rows, 2);
        assert!(parsed.observations[0].is_bloom());
    }

    #[test]
    fn test_duplicate_header_uses_last_column() {
        let csv = "latitude,longitude,observed_cyanobacteria_density,latitude\n\
                   1.0,2.0,12.0,7.5\n";
        let parsed = parse(csv.as_bytes()).unwrap();
        assert_eq!(parsed.observations, vec![LabeledObservation::new(7.5, 2.0, 12.0)]);
    }

    #[test]
    fn test_byte_order_mark_ignored() {
        let csv = format!("\u{feff}{}\n1.0,2.0,3.0\n", HEADER);
        let parsed = parse(csv.as_bytes()).unwrap();
        assert_eq!(parsed.len(), 1);
    }
}
