//! Reads delivery rows from the csv upload format.

#[cfg(test)]
#[path = "../tests/unit/reader_test.rs"]
mod reader_test;

use crate::FormatError;
use csv::StringRecord;
use dispatch_core::models::{DeliveryRecord, Priority};
use dispatch_core::utils::{Float, GenericResult};
use serde::Deserialize;
use std::io::{BufReader, Read};

/// Normalized names of columns which must be present in the upload.
const REQUIRED_COLUMNS: &[&str] = &["address", "customerid", "pincode", "cylindertype"];

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CsvDeliveryRow {
    address: String,
    #[serde(rename = "customerid")]
    customer_id: String,
    pincode: String,
    #[serde(rename = "cylindertype")]
    cylinder_type: String,
    priority: String,
    #[serde(alias = "lat")]
    latitude: String,
    #[serde(alias = "lng")]
    longitude: String,
}

impl CsvDeliveryRow {
    fn into_delivery(self) -> DeliveryRecord {
        DeliveryRecord {
            address: self.address,
            customer_id: self.customer_id,
            pincode: self.pincode,
            cylinder_type: self.cylinder_type,
            priority: parse_priority(&self.priority),
            latitude: parse_coordinate(&self.latitude),
            longitude: parse_coordinate(&self.longitude),
            ..DeliveryRecord::default()
        }
    }
}

/// Reads deliveries from csv rows with a header line. Column names are matched case and spacing
/// insensitively ("Customer ID", "customerId" and "customer id" are the same column), unknown
/// columns are ignored and column order does not matter.
///
/// Individual malformed fields never fail the read: missing or short fields become empty strings,
/// an unrecognized priority becomes `Medium`, and a coordinate becomes absent when it does not
/// parse or equals zero (each axis on its own). The whole input is rejected only when a required
/// column is missing or when there are no delivery rows at all.
pub fn read_deliveries<R: Read>(reader: BufReader<R>) -> Result<Vec<DeliveryRecord>, FormatError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|err| create_format_error("E0001", "cannot read csv", err.to_string()))?
        .iter()
        .map(normalize_header)
        .collect::<StringRecord>();

    let missing = REQUIRED_COLUMNS
        .iter()
        .filter(|&&column| !headers.iter().any(|header| header.contains(column)))
        .copied()
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        return Err(FormatError::new_with_details(
            "E0002".to_string(),
            "cannot find required columns".to_string(),
            "provide address, customer id, pincode and cylinder type columns".to_string(),
            missing.join(", "),
        ));
    }
    let deliveries = read_rows(&mut reader, &headers)
        .map_err(|err| create_format_error("E0001", "cannot read csv", err.to_string()))?;

    if deliveries.is_empty() {
        return Err(FormatError::new(
            "E0003".to_string(),
            "no delivery rows".to_string(),
            "provide at least one delivery row".to_string(),
        ));
    }

    Ok(deliveries)
}

fn read_rows<R: Read>(reader: &mut csv::Reader<BufReader<R>>, headers: &StringRecord) -> GenericResult<Vec<DeliveryRecord>> {
    let mut deliveries = vec![];

    for row in reader.records() {
        let mut row = row.map_err(|err| err.to_string())?;
        // a short row deserializes like a row with trailing empty fields
        while row.len() < headers.len() {
            row.push_field("");
        }

        let row: CsvDeliveryRow = row.deserialize(Some(headers)).map_err(|err| err.to_string())?;
        deliveries.push(row.into_delivery());
    }

    Ok(deliveries)
}

/// Lowercases a header and strips any whitespace, e.g. "Cylinder type" -> "cylindertype".
fn normalize_header(header: &str) -> String {
    header.to_lowercase().split_whitespace().collect()
}

/// Maps a raw priority value to a tier: anything but the exact "High" or "Low" means `Medium`.
fn parse_priority(raw: &str) -> Priority {
    match raw {
        "High" => Priority::High,
        "Low" => Priority::Low,
        _ => Priority::Medium,
    }
}

/// Parses a coordinate axis, treating a parse failure or an exact zero as an absent value.
/// Each axis is nulled on its own, the counterpart is left untouched.
fn parse_coordinate(raw: &str) -> Option<Float> {
    match raw.trim().parse::<Float>() {
        Ok(value) if value != 0. => Some(value),
        _ => None,
    }
}

fn create_format_error(code: &str, cause: &str, details: String) -> FormatError {
    FormatError::new_with_details(code.to_string(), cause.to_string(), "check csv definition".to_string(), details)
}
