//! CSV loader for weigh tickets
//!
//! Expected header:
//! `ticket_number,date,vehicle_id,jurisdiction,axle_class,weight_pounds,axle_count,spacing_feet`
//!
//! `date`, `axle_count` and `spacing_feet` may be empty. Rows whose axle class
//! or weight cannot be parsed are skipped with a warning.

use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};
use weighcheck_domain::model::WeighTicket;
use weighcheck_domain::service::parse_weight;
use weighcheck_types::{AxleClass, Error, Jurisdiction, Result};

#[derive(Debug, Deserialize)]
struct TicketRow {
    ticket_number: String,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    vehicle_id: String,
    #[serde(default)]
    jurisdiction: String,
    axle_class: String,
    weight_pounds: String,
    #[serde(default)]
    axle_count: Option<u32>,
    #[serde(default)]
    spacing_feet: Option<f64>,
}

/// Load tickets from a CSV file
pub fn load_tickets_from_csv(path: &Path) -> Result<Vec<WeighTicket>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?;
    let tickets = read_tickets(reader)?;
    info!(path = %path.display(), count = tickets.len(), "loaded weigh tickets");
    Ok(tickets)
}

/// Load tickets from CSV text
pub fn parse_tickets_csv(content: &str) -> Result<Vec<WeighTicket>> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());
    read_tickets(reader)
}

fn read_tickets<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<WeighTicket>> {
    let headers = reader.headers()?.clone();
    for required in ["ticket_number", "axle_class", "weight_pounds"] {
        if !headers.iter().any(|h| h == required) {
            return Err(Error::InvalidTicketFile(format!(
                "missing required column '{}'",
                required
            )));
        }
    }

    let mut tickets = Vec::new();
    for (index, row) in reader.deserialize::<TicketRow>().enumerate() {
        // header is line 1
        let line = index + 2;
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                warn!(line, error = %e, "skipping unreadable ticket row");
                continue;
            }
        };
        match row_to_ticket(row) {
            Ok(ticket) => tickets.push(ticket),
            Err(reason) => warn!(line, %reason, "skipping ticket row"),
        }
    }
    Ok(tickets)
}

fn row_to_ticket(row: TicketRow) -> std::result::Result<WeighTicket, String> {
    let axle_class: AxleClass = row.axle_class.parse()?;
    let weight_pounds = parse_weight(&row.weight_pounds).map_err(|e| e.to_string())?;
    let date = row.date.as_deref().and_then(parse_optional_date);

    Ok(WeighTicket {
        ticket_number: row.ticket_number,
        date,
        vehicle_id: row.vehicle_id,
        jurisdiction: Jurisdiction::from_code(&row.jurisdiction),
        axle_class,
        weight_pounds,
        axle_count: row.axle_count,
        spacing_feet: row.spacing_feet,
    })
}

fn parse_optional_date(s: &str) -> Option<chrono::NaiveDate> {
    if s.trim().is_empty() {
        return None;
    }
    let formats = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];
    for fmt in formats {
        if let Ok(date) = chrono::NaiveDate::parse_from_str(s.trim(), fmt) {
            return Some(date);
        }
    }
    None
}
