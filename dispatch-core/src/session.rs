//! An owned dataset context with an explicit load/clear lifecycle. The hosting application
//! shell owns an instance and passes it around instead of keeping process-wide state.

#[cfg(test)]
#[path = "../tests/unit/session_test.rs"]
mod session_test;

use crate::dispatch::{DispatchConfig, assign_deliveries};
use crate::models::{AssignedDelivery, DeliveryRecord};

/// Holds the loaded dataset and the latest assignment run for its owner. Every reassignment
/// discards the previous run wholesale, there is no incremental update path.
#[derive(Debug, Default)]
pub struct DispatchSession {
    records: Vec<DeliveryRecord>,
    assigned: Vec<AssignedDelivery>,
}

impl DispatchSession {
    /// Loads a new dataset, replacing the records and dropping the previous run.
    pub fn load(&mut self, records: Vec<DeliveryRecord>) {
        self.records = records;
        self.assigned.clear();
    }

    /// Clears the dataset and the latest run.
    pub fn clear(&mut self) {
        self.records.clear();
        self.assigned.clear();
    }

    /// Runs the assignment engine over the loaded dataset and keeps the result.
    pub fn reassign(&mut self, config: &DispatchConfig) -> &[AssignedDelivery] {
        self.assigned = assign_deliveries(self.records.clone(), config);
        &self.assigned
    }

    /// Returns deliveries of the latest run.
    pub fn assigned(&self) -> &[AssignedDelivery] {
        &self.assigned
    }

    /// Returns the loaded, not yet assigned deliveries.
    pub fn records(&self) -> &[DeliveryRecord] {
        &self.records
    }

    /// Checks whether any loaded delivery carries coordinates, which enables distance clustering.
    pub fn has_coordinates(&self) -> bool {
        self.records.iter().any(|record| record.coordinates().is_some())
    }
}
