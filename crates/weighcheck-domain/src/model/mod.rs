//! Domain model types

pub mod axle_group;
pub mod weigh_ticket;
pub mod weight_limit;

pub use axle_group::{BridgeFormulaInput, BridgeLimit};
pub use weigh_ticket::WeighTicket;
pub use weight_limit::WeightLimit;
