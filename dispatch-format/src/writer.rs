//! Writes assignment results to the csv export format.

#[cfg(test)]
#[path = "../tests/unit/writer_test.rs"]
mod writer_test;

use dispatch_core::models::AssignedDelivery;
use dispatch_core::utils::Float;

const FULL_COLUMNS: &[&str] =
    &["Delivery ID", "Address", "Customer ID", "Pincode", "Cylinder Type", "Priority", "Latitude", "Longitude", "Driver", "Vehicle"];

const LEGACY_COLUMNS: &[&str] = &["Address", "Customer ID", "Pincode", "Cylinder Type", "Driver", "Vehicle"];

/// Selects the column shape of the csv export.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ExportColumns {
    /// The complete export with run identity, priority and coordinates.
    #[default]
    Full,
    /// The narrow historical shape kept for existing downstream consumers.
    Legacy,
}

/// Serializes assigned deliveries to csv text: an unquoted header row followed by one row per
/// delivery with every value double quoted and comma joined, rows separated by a newline with no
/// trailing one. Embedded quotes and newlines are not escaped - a known limitation of the format.
pub fn write_assigned_deliveries(deliveries: &[AssignedDelivery], columns: ExportColumns) -> String {
    let headers = match columns {
        ExportColumns::Full => FULL_COLUMNS,
        ExportColumns::Legacy => LEGACY_COLUMNS,
    };

    let mut lines = vec![headers.join(",")];
    lines.extend(deliveries.iter().map(|assigned| {
        let delivery = &assigned.delivery;
        let values = match columns {
            ExportColumns::Full => vec![
                assigned.id.clone(),
                delivery.address.clone(),
                delivery.customer_id.clone(),
                delivery.pincode.clone(),
                delivery.cylinder_type.clone(),
                delivery.priority.to_string(),
                coordinate_value(delivery.latitude),
                coordinate_value(delivery.longitude),
                assigned.driver.clone(),
                assigned.vehicle.clone(),
            ],
            ExportColumns::Legacy => vec![
                delivery.address.clone(),
                delivery.customer_id.clone(),
                delivery.pincode.clone(),
                delivery.cylinder_type.clone(),
                assigned.driver.clone(),
                assigned.vehicle.clone(),
            ],
        };

        values.iter().map(|value| format!("\"{value}\"")).collect::<Vec<_>>().join(",")
    }));

    lines.join("\n")
}

fn coordinate_value(value: Option<Float>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}
