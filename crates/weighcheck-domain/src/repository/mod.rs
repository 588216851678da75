//! Repository trait definitions for ticket sources

use chrono::NaiveDate;

use crate::model::WeighTicket;
use weighcheck_types::Error;

/// Source of recorded weigh tickets
pub trait WeighTicketRepository {
    /// Load all tickets
    fn find_all(&self) -> Result<Vec<WeighTicket>, Error>;

    /// Find tickets recorded on a date
    fn find_by_date(&self, date: NaiveDate) -> Result<Vec<WeighTicket>, Error> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|t| t.date == Some(date))
            .collect())
    }

    /// Find tickets for a vehicle
    fn find_by_vehicle(&self, vehicle_id: &str) -> Result<Vec<WeighTicket>, Error> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|t| t.vehicle_id.eq_ignore_ascii_case(vehicle_id.trim()))
            .collect())
    }
}
