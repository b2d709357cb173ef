use crate::models::DeliveryRecord;

/// Represents a delivery with its generated run identity: a unique id and the driver/vehicle
/// pair it was allocated to. Created once per assignment run and replaced wholesale on re-run.
#[derive(Clone, Debug, PartialEq)]
pub struct AssignedDelivery {
    /// A unique, zero padded identifier, strictly increasing in assignment order.
    pub id: String,
    /// A driver label, e.g. "Driver 1".
    pub driver: String,
    /// A vehicle label derived from the driver index, e.g. "Vehicle A".
    pub vehicle: String,
    /// An original delivery request.
    pub delivery: DeliveryRecord,
}

/// Represents a driver centric aggregation of assigned deliveries.
#[derive(Clone, Debug)]
pub struct DriverAssignment {
    /// A driver label.
    pub driver: String,
    /// A vehicle label paired with the driver.
    pub vehicle: String,
    /// Amount of deliveries allocated to the driver.
    pub delivery_count: usize,
    /// Deliveries of the driver in assignment order.
    pub deliveries: Vec<AssignedDelivery>,
}

/// Represents a pincode centric aggregation of assigned deliveries.
#[derive(Clone, Debug)]
pub struct PincodeGroup {
    /// A postal code shared by the deliveries.
    pub pincode: String,
    /// Deliveries of the pincode in assignment order.
    pub deliveries: Vec<AssignedDelivery>,
}

/// Represents aggregate counters of a single assignment run for dashboard style consumers.
#[derive(Clone, Debug, Default)]
pub struct DispatchStats {
    /// Total amount of assigned deliveries.
    pub total_deliveries: usize,
    /// Amount of drivers used by the run.
    pub driver_count: usize,
    /// Amount of distinct pincodes in the run.
    pub pincode_count: usize,
    /// Per driver delivery counts in view order.
    pub per_driver: Vec<(String, usize)>,
}
