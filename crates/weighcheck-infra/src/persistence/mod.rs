//! Persistence implementations
//!
//! File-based implementations of the repository traits.

mod file_weigh_ticket_repo;

pub use file_weigh_ticket_repo::FileWeighTicketRepository;
