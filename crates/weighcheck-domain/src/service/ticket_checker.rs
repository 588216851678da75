//! Batch compliance checking for weigh tickets

use serde::{Deserialize, Serialize};
use weighcheck_types::{ComplianceError, ComplianceStatus, ComplianceVerdict};

use super::classifier::{format_pounds, ComplianceClassifier};
use crate::model::WeighTicket;

/// Result of checking a single ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketCheckResult {
    pub ticket: WeighTicket,
    pub verdict: Option<ComplianceVerdict>,
    pub error: Option<String>,
}

impl TicketCheckResult {
    pub fn status(&self) -> Option<ComplianceStatus> {
        self.verdict.as_ref().map(|v| v.status)
    }
}

/// Counts per verdict across a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketSummary {
    pub total: usize,
    pub compliant: usize,
    pub warning: usize,
    pub non_compliant: usize,
    pub rejected: usize,
}

impl TicketSummary {
    /// Non-compliant share of classified tickets, in percent
    pub fn non_compliance_rate(&self) -> Option<f64> {
        let classified = self.total - self.rejected;
        if classified == 0 {
            None
        } else {
            Some(self.non_compliant as f64 / classified as f64 * 100.0)
        }
    }
}

/// Classify one ticket, using the bridge formula when the axle group is known
pub fn check_ticket(
    ticket: &WeighTicket,
    classifier: &ComplianceClassifier<'_>,
) -> Result<ComplianceVerdict, ComplianceError> {
    match ticket.bridge_input() {
        Some(group) => classifier.classify_axle_group(
            ticket.weight_pounds,
            ticket.axle_class,
            ticket.jurisdiction,
            group,
        ),
        None => classifier.classify(ticket.weight_pounds, ticket.axle_class, ticket.jurisdiction),
    }
}

pub fn check_tickets(
    tickets: &[WeighTicket],
    classifier: &ComplianceClassifier<'_>,
) -> Vec<TicketCheckResult> {
    tickets
        .iter()
        .map(|ticket| match check_ticket(ticket, classifier) {
            Ok(verdict) => TicketCheckResult {
                ticket: ticket.clone(),
                verdict: Some(verdict),
                error: None,
            },
            Err(e) => TicketCheckResult {
                ticket: ticket.clone(),
                verdict: None,
                error: Some(e.to_string()),
            },
        })
        .collect()
}

pub fn summarize(results: &[TicketCheckResult]) -> TicketSummary {
    let mut summary = TicketSummary {
        total: results.len(),
        ..Default::default()
    };
    for result in results {
        match result.status() {
            Some(ComplianceStatus::Compliant) => summary.compliant += 1,
            Some(ComplianceStatus::Warning) => summary.warning += 1,
            Some(ComplianceStatus::NonCompliant) => summary.non_compliant += 1,
            None => summary.rejected += 1,
        }
    }
    summary
}

pub fn generate_compliance_report(results: &[TicketCheckResult]) -> String {
    let summary = summarize(results);

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("           Weight Compliance Report               \n");
    report.push_str("==================================================\n\n");
    report.push_str("[Summary]\n");
    report.push_str(&format!("  Total tickets:        {}\n", summary.total));
    report.push_str(&format!("  Compliant:            {}\n", summary.compliant));
    report.push_str(&format!("  Warning:              {}\n", summary.warning));
    report.push_str(&format!("  Non-compliant:        {}\n", summary.non_compliant));
    report.push_str(&format!("  Rejected:             {}\n", summary.rejected));
    if let Some(rate) = summary.non_compliance_rate() {
        report.push_str(&format!("  Non-compliance rate:  {:.1}%\n", rate));
    }
    report.push('\n');

    let flagged: Vec<_> = results
        .iter()
        .filter_map(|r| r.verdict.as_ref().map(|v| (r, v)))
        .filter(|(_, v)| v.status != ComplianceStatus::Compliant)
        .collect();

    if flagged.is_empty() {
        report.push_str("[No Flagged Tickets]\n");
        report.push_str("  All classified tickets are below 95% of their limits.\n\n");
    } else {
        report.push_str("[Flagged Tickets]\n");
        report.push_str("-".repeat(78).as_str());
        report.push('\n');
        report.push_str(&format!(
            "{:<12} {:<12} {:<4} {:<7} {:>10} {:>10} {:>7}  {}\n",
            "Ticket", "Vehicle", "Jur", "Class", "Weight", "Limit", "Ratio", "Status"
        ));
        report.push_str("-".repeat(78).as_str());
        report.push('\n');
        for (result, verdict) in flagged {
            report.push_str(&format!(
                "{:<12} {:<12} {:<4} {:<7} {:>10} {:>10} {:>6.1}%  {}\n",
                truncate_str(&result.ticket.ticket_number, 11),
                truncate_str(&result.ticket.vehicle_id, 11),
                verdict.jurisdiction.code(),
                short_class(verdict),
                format_pounds(verdict.weight_pounds),
                format_pounds(verdict.applicable_limit as f64),
                verdict.percent_of_limit,
                verdict.status.label()
            ));
        }
        report.push('\n');
    }

    if summary.rejected > 0 {
        report.push_str("[Rejected Tickets]\n");
        report.push_str("-".repeat(50).as_str());
        report.push('\n');
        for result in results.iter().filter(|r| r.verdict.is_none()) {
            report.push_str(&format!(
                "{:<12} {}\n",
                truncate_str(&result.ticket.ticket_number, 11),
                result.error.as_deref().unwrap_or("unknown error")
            ));
        }
        report.push('\n');
    }

    report.push_str("==================================================\n");
    report
}

fn short_class(verdict: &ComplianceVerdict) -> &'static str {
    match verdict.axle_class {
        weighcheck_types::AxleClass::SingleAxle => "single",
        weighcheck_types::AxleClass::TandemAxle => "tandem",
        weighcheck_types::AxleClass::GrossVehicleWeight => "gross",
    }
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weighcheck_types::{AxleClass, Jurisdiction, UsState};

    fn ticket(number: &str, state: UsState, axle_class: AxleClass, weight: f64) -> WeighTicket {
        WeighTicket {
            ticket_number: number.to_string(),
            date: None,
            vehicle_id: "TRK-7".to_string(),
            jurisdiction: Jurisdiction::State(state),
            axle_class,
            weight_pounds: weight,
            axle_count: None,
            spacing_feet: None,
        }
    }

    #[test]
    fn test_check_tickets_classifies_each() {
        let tickets = vec![
            ticket("001", UsState::TX, AxleClass::GrossVehicleWeight, 70_000.0),
            ticket("002", UsState::TX, AxleClass::GrossVehicleWeight, 79_000.0),
            ticket("003", UsState::CA, AxleClass::SingleAxle, 30_000.0),
        ];
        let results = check_tickets(&tickets, &ComplianceClassifier::default());
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].status(), Some(ComplianceStatus::Compliant));
        assert_eq!(results[1].status(), Some(ComplianceStatus::Warning));
        assert_eq!(results[2].status(), Some(ComplianceStatus::NonCompliant));
    }

    #[test]
    fn test_invalid_ticket_is_rejected_not_dropped() {
        let tickets = vec![ticket("004", UsState::TX, AxleClass::SingleAxle, -10.0)];
        let results = check_tickets(&tickets, &ComplianceClassifier::default());
        assert_eq!(results.len(), 1);
        assert!(results[0].verdict.is_none());
        assert!(results[0].error.as_deref().unwrap().contains("Invalid weight"));
    }

    #[test]
    fn test_bridge_input_used_when_present() {
        let mut t = ticket("005", UsState::TX, AxleClass::GrossVehicleWeight, 60_000.0);
        t.axle_count = Some(3);
        t.spacing_feet = Some(30.0);
        let verdict = check_ticket(&t, &ComplianceClassifier::default()).unwrap();
        assert_eq!(verdict.applicable_limit, 58_500);
        assert_eq!(verdict.status, ComplianceStatus::NonCompliant);
    }

    #[test]
    fn test_summarize_counts() {
        let tickets = vec![
            ticket("001", UsState::TX, AxleClass::GrossVehicleWeight, 70_000.0),
            ticket("002", UsState::TX, AxleClass::GrossVehicleWeight, 81_000.0),
            ticket("003", UsState::TX, AxleClass::GrossVehicleWeight, f64::NAN),
        ];
        let results = check_tickets(&tickets, &ComplianceClassifier::default());
        let summary = summarize(&results);
        assert_eq!(
            summary,
            TicketSummary {
                total: 3,
                compliant: 1,
                warning: 0,
                non_compliant: 1,
                rejected: 1,
            }
        );
        assert_eq!(summary.non_compliance_rate(), Some(50.0));
    }

    #[test]
    fn test_empty_summary_has_no_rate() {
        assert_eq!(summarize(&[]).non_compliance_rate(), None);
    }

    #[test]
    fn test_generate_report() {
        let tickets = vec![
            ticket("001", UsState::TX, AxleClass::GrossVehicleWeight, 81_000.0),
            ticket("002", UsState::CO, AxleClass::GrossVehicleWeight, 75_000.0),
            ticket("003", UsState::TX, AxleClass::SingleAxle, -1.0),
        ];
        let results = check_tickets(&tickets, &ComplianceClassifier::default());
        let report = generate_compliance_report(&results);
        assert!(report.contains("Weight Compliance Report"));
        assert!(report.contains("[Flagged Tickets]"));
        assert!(report.contains("81,000"));
        assert!(report.contains("Non-Compliant"));
        assert!(report.contains("[Rejected Tickets]"));
    }

    #[test]
    fn test_report_without_flags() {
        let tickets = vec![ticket("001", UsState::CO, AxleClass::GrossVehicleWeight, 75_000.0)];
        let results = check_tickets(&tickets, &ComplianceClassifier::default());
        let report = generate_compliance_report(&results);
        assert!(report.contains("[No Flagged Tickets]"));
        assert!(!report.contains("[Rejected Tickets]"));
    }
}
