use serde::{Deserialize, Serialize};
use weighcheck_types::{AxleClass, Jurisdiction};

use super::BridgeFormulaInput;

/// One recorded scale measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeighTicket {
    pub ticket_number: String,
    pub date: Option<chrono::NaiveDate>,
    pub vehicle_id: String,
    pub jurisdiction: Jurisdiction,
    pub axle_class: AxleClass,
    pub weight_pounds: f64,
    pub axle_count: Option<u32>,   // axles in the measured group
    pub spacing_feet: Option<f64>, // outer-to-outer spacing of that group
}

impl WeighTicket {
    /// Bridge formula input, when both axle count and spacing were recorded
    pub fn bridge_input(&self) -> Option<BridgeFormulaInput> {
        match (self.axle_count, self.spacing_feet) {
            (Some(count), Some(spacing)) => Some(BridgeFormulaInput::new(count, spacing)),
            _ => None,
        }
    }
}
