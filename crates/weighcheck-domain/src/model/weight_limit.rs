//! Legal weight ceilings for one jurisdiction

use serde::{Deserialize, Serialize};
use weighcheck_types::AxleClass;

/// Single, tandem and gross ceilings in whole pounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightLimit {
    pub single_axle: u32,
    pub tandem_axle: u32,
    pub gross_vehicle_weight: u32,
}

impl WeightLimit {
    pub const fn new(single_axle: u32, tandem_axle: u32, gross_vehicle_weight: u32) -> Self {
        Self {
            single_axle,
            tandem_axle,
            gross_vehicle_weight,
        }
    }

    /// Ceiling for the given axle class
    pub fn ceiling(&self, axle_class: AxleClass) -> u32 {
        match axle_class {
            AxleClass::SingleAxle => self.single_axle,
            AxleClass::TandemAxle => self.tandem_axle,
            AxleClass::GrossVehicleWeight => self.gross_vehicle_weight,
        }
    }

    /// All three ceilings are non-zero
    pub fn is_valid(&self) -> bool {
        self.single_axle > 0 && self.tandem_axle > 0 && self.gross_vehicle_weight > 0
    }
}
