use super::*;
use dispatch_core::models::DeliveryStatus;

fn read(csv: &str) -> Result<Vec<DeliveryRecord>, FormatError> {
    read_deliveries(BufReader::new(csv.as_bytes()))
}

#[test]
fn can_read_deliveries_with_alias_headers() {
    let csv = r"
Address,Customer ID,Pincode,Cylinder type,Priority,Lat,Lng
12 MG Road,C1,560001,14.2kg,High,12.9716,77.5946
4 Brigade Road,C2,560025,19kg,,,
";

    let deliveries = read(csv).unwrap();

    assert_eq!(deliveries.len(), 2);
    assert_eq!(deliveries[0].address, "12 MG Road");
    assert_eq!(deliveries[0].customer_id, "C1");
    assert_eq!(deliveries[0].pincode, "560001");
    assert_eq!(deliveries[0].cylinder_type, "14.2kg");
    assert_eq!(deliveries[0].priority, Priority::High);
    assert_eq!(deliveries[0].coordinates(), Some((12.9716, 77.5946)));
    assert_eq!(deliveries[1].priority, Priority::Medium);
    assert_eq!(deliveries[1].coordinates(), None);
}

#[test]
fn can_default_missing_optional_columns() {
    let csv = r"
address,customerId,pincode,cylinderType
12 MG Road,C1,560001,14.2kg
";

    let deliveries = read(csv).unwrap();

    assert_eq!(deliveries.len(), 1);
    assert_eq!(deliveries[0].priority, Priority::Medium);
    assert_eq!(deliveries[0].latitude, None);
    assert_eq!(deliveries[0].longitude, None);
    assert_eq!(deliveries[0].status, DeliveryStatus::Pending);
}

#[test]
fn can_treat_zero_coordinate_as_absent_per_axis() {
    let csv = r"
Address,Customer ID,Pincode,Cylinder Type,Latitude,Longitude
12 MG Road,C1,560001,14.2kg,0,77.5946
";

    let deliveries = read(csv).unwrap();

    assert_eq!(deliveries[0].latitude, None);
    assert_eq!(deliveries[0].longitude, Some(77.5946));
    assert_eq!(deliveries[0].coordinates(), None);
}

#[test]
fn can_require_exact_priority_values() {
    let csv = r"
Address,Customer ID,Pincode,Cylinder Type,Priority
a,C1,560001,t,high
b,C2,560001,t,Low
c,C3,560001,t,urgent
";

    let deliveries = read(csv).unwrap();

    let priorities = deliveries.iter().map(|delivery| delivery.priority).collect::<Vec<_>>();
    assert_eq!(priorities, vec![Priority::Medium, Priority::Low, Priority::Medium]);
}

#[test]
fn can_default_short_rows_to_empty_fields() {
    let csv = r"
Address,Customer ID,Pincode,Cylinder Type
12 MG Road,C1
";

    let deliveries = read(csv).unwrap();

    assert_eq!(deliveries[0].customer_id, "C1");
    assert_eq!(deliveries[0].pincode, "");
    assert_eq!(deliveries[0].cylinder_type, "");
}

#[test]
fn can_accept_upload_with_mixed_row_lengths() {
    let csv = r"
Address,Customer ID,Pincode,Cylinder Type
12 MG Road,C1,560001,14.2kg
4 Brigade Road,C2
8 Residency Road,C3,560025,19kg
";

    let deliveries = read(csv).unwrap();

    assert_eq!(deliveries.len(), 3);
    assert_eq!(deliveries[1].customer_id, "C2");
    assert_eq!(deliveries[1].pincode, "");
    assert_eq!(deliveries[2].pincode, "560025");
}

#[test]
fn can_ignore_unknown_columns() {
    let csv = r"
Address,Customer ID,Pincode,Cylinder Type,Notes
12 MG Road,C1,560001,14.2kg,call before arrival
";

    let deliveries = read(csv).unwrap();

    assert_eq!(deliveries.len(), 1);
    assert_eq!(deliveries[0].pincode, "560001");
}

#[test]
fn can_reject_missing_required_columns() {
    let csv = r"
Address,Customer ID,Cylinder Type
12 MG Road,C1,14.2kg
";

    let error = read(csv).expect_err("should reject columns");

    assert_eq!(error.code, "E0002");
    assert_eq!(error.details, Some("pincode".to_string()));
}

#[test]
fn can_reject_input_without_headers() {
    let error = read("").expect_err("should reject empty input");

    assert_eq!(error.code, "E0002");
}

#[test]
fn can_reject_input_without_rows() {
    let csv = r"
Address,Customer ID,Pincode,Cylinder Type
";

    let error = read(csv).expect_err("should reject empty rows");

    assert_eq!(error.code, "E0003");
}
