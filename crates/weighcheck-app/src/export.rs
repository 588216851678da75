//! Excel export functionality

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use weighcheck_types::{Error, Result};

use crate::app::TicketBatch;

/// Export checked tickets to an Excel file
pub fn export_to_excel(batch: &TicketBatch, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    // Add summary sheet
    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, batch)?;

    // Add details sheet
    let details_sheet = workbook.add_worksheet();
    write_details_sheet(details_sheet, batch)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, batch: &TicketBatch) -> Result<()> {
    sheet
        .set_name("Summary")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();
    sheet
        .write_string_with_format(0, 0, "Weight Compliance Report", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let summary = &batch.summary;
    let rows: [(&str, f64); 5] = [
        ("Total Tickets:", summary.total as f64),
        ("Compliant:", summary.compliant as f64),
        ("Warning:", summary.warning as f64),
        ("Non-Compliant:", summary.non_compliant as f64),
        ("Rejected:", summary.rejected as f64),
    ];

    sheet
        .write_string(2, 0, "Checked At:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(2, 1, batch.checked_at.to_rfc3339())
        .map_err(|e| Error::Excel(e.to_string()))?;

    let mut row = 3;
    for (label, value) in rows {
        sheet
            .write_string(row, 0, label)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 1, value)
            .map_err(|e| Error::Excel(e.to_string()))?;
        row += 1;
    }

    if let Some(rate) = summary.non_compliance_rate() {
        sheet
            .write_string(row, 0, "Non-Compliance Rate (%):")
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 1, rate)
            .map_err(|e| Error::Excel(e.to_string()))?;
        row += 1;
    }

    row += 1;
    sheet
        .write_string_with_format(row, 0, "Sources", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;
    for source in &batch.sources {
        row += 1;
        sheet
            .write_string(row, 0, source.display().to_string())
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    Ok(())
}

fn write_details_sheet(sheet: &mut Worksheet, batch: &TicketBatch) -> Result<()> {
    sheet
        .set_name("Details")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();
    let headers = [
        "Ticket",
        "Date",
        "Vehicle",
        "Jurisdiction",
        "Axle Class",
        "Weight (lbs)",
        "Limit (lbs)",
        "Load %",
        "Status",
        "Message",
    ];

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (row_idx, result) in batch.results.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        let ticket = &result.ticket;

        sheet
            .write_string(row, 0, &ticket.ticket_number)
            .map_err(|e| Error::Excel(e.to_string()))?;
        if let Some(date) = ticket.date {
            sheet
                .write_string(row, 1, date.format("%Y-%m-%d").to_string())
                .map_err(|e| Error::Excel(e.to_string()))?;
        }
        sheet
            .write_string(row, 2, &ticket.vehicle_id)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 3, ticket.jurisdiction.code())
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 4, ticket.axle_class.label())
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 5, ticket.weight_pounds)
            .map_err(|e| Error::Excel(e.to_string()))?;

        match (&result.verdict, &result.error) {
            (Some(verdict), _) => {
                sheet
                    .write_number(row, 6, verdict.applicable_limit as f64)
                    .map_err(|e| Error::Excel(e.to_string()))?;
                sheet
                    .write_number(row, 7, verdict.percent_of_limit)
                    .map_err(|e| Error::Excel(e.to_string()))?;
                sheet
                    .write_string(row, 8, verdict.status.label())
                    .map_err(|e| Error::Excel(e.to_string()))?;
                sheet
                    .write_string(row, 9, &verdict.message)
                    .map_err(|e| Error::Excel(e.to_string()))?;
            }
            (None, error) => {
                sheet
                    .write_string(row, 8, "Rejected")
                    .map_err(|e| Error::Excel(e.to_string()))?;
                if let Some(error) = error {
                    sheet
                        .write_string(row, 9, error)
                        .map_err(|e| Error::Excel(e.to_string()))?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{check_ticket_source, TicketFilter};
    use weighcheck_domain::service::LimitTable;

    #[test]
    fn test_export_writes_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("tickets.csv");
        std::fs::write(
            &csv,
            "ticket_number,date,vehicle_id,jurisdiction,axle_class,weight_pounds,axle_count,spacing_feet\n\
             T-1,2024-06-01,TRK-1,TX,gross,81000,,\n\
             T-2,,TRK-2,CO,gross,75000,,\n",
        )
        .unwrap();
        let batch = check_ticket_source(LimitTable::builtin(), &csv, &TicketFilter::default()).unwrap();

        let out = dir.path().join("report.xlsx");
        export_to_excel(&batch, &out).unwrap();
        let metadata = std::fs::metadata(&out).unwrap();
        assert!(metadata.len() > 0);
    }
}
