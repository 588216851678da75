//! File-based implementation of WeighTicketRepository

use std::path::PathBuf;

use weighcheck_domain::model::WeighTicket;
use weighcheck_domain::repository::WeighTicketRepository;
use weighcheck_types::Error;

use crate::ticket_csv::load_tickets_from_csv;

/// Ticket repository backed by one CSV file, loaded eagerly
pub struct FileWeighTicketRepository {
    tickets: Vec<WeighTicket>,
}

impl FileWeighTicketRepository {
    /// Create a new repository from a CSV file path
    pub fn new(csv_path: PathBuf) -> Result<Self, Error> {
        let tickets = load_tickets_from_csv(&csv_path)?;
        Ok(Self { tickets })
    }
}

impl WeighTicketRepository for FileWeighTicketRepository {
    fn find_all(&self) -> Result<Vec<WeighTicket>, Error> {
        Ok(self.tickets.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(rows: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "ticket_number,date,vehicle_id,jurisdiction,axle_class,weight_pounds,axle_count,spacing_feet"
        )
        .unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        file
    }

    #[test]
    fn test_find_by_vehicle_and_date() {
        let file = write_csv(&[
            "T-1,2024-05-01,TRK-1,TX,gross,70000,,",
            "T-2,2024-05-02,TRK-2,TX,gross,71000,,",
            "T-3,2024-05-02,trk-1,TX,gross,72000,,",
        ]);
        let repo = FileWeighTicketRepository::new(file.path().to_path_buf()).unwrap();

        assert_eq!(repo.find_all().unwrap().len(), 3);
        let by_vehicle = repo.find_by_vehicle("TRK-1").unwrap();
        assert_eq!(by_vehicle.len(), 2);

        let date = chrono::NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        let by_date = repo.find_by_date(date).unwrap();
        let numbers: Vec<_> = by_date.iter().map(|t| t.ticket_number.as_str()).collect();
        assert_eq!(numbers, vec!["T-2", "T-3"]);
    }
}
