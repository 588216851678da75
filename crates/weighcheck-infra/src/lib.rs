//! Infrastructure layer - ticket CSV loading, limit overrides, file repositories

pub mod limits_toml;
pub mod persistence;
pub mod ticket_csv;

pub use limits_toml::{load_limit_overrides, load_limit_table, parse_limit_overrides};
pub use ticket_csv::{load_tickets_from_csv, parse_tickets_csv};
