//! Domain services

pub mod bridge_formula;
pub mod classifier;
pub mod limit_table;
pub mod ticket_checker;

pub use bridge_formula::max_group_weight;
pub use classifier::{
    classify, classify_axle_group, classify_with_state_override, parse_weight,
    ComplianceClassifier,
};
pub use limit_table::{limit_for, LimitTable, FEDERAL_BASELINE};
pub use ticket_checker::{
    check_ticket, check_tickets, generate_compliance_report, summarize, TicketCheckResult,
    TicketSummary,
};
