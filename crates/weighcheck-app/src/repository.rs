//! Repository adapters for persistence layer

use std::path::PathBuf;

use weighcheck_infra::persistence::FileWeighTicketRepository;
use weighcheck_types::Result;

/// Open weigh ticket repository from CSV
pub fn open_ticket_repo(csv_path: PathBuf) -> Result<FileWeighTicketRepository> {
    FileWeighTicketRepository::new(csv_path)
}
