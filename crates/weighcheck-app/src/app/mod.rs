//! Application Layer
//!
//! Orchestrates between the CLI and the domain/infrastructure layers.

pub mod compliance_service;

pub use compliance_service::{
    check_ticket_source, evaluate, ComplianceRequest, TicketBatch, TicketFilter,
};
