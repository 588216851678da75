//! Compliance Service - use cases behind the CLI
//!
//! - evaluate a single weight (raw string input, parsed at this boundary)
//! - check every ticket in a CSV file or directory of CSV files

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use weighcheck_domain::model::{BridgeFormulaInput, WeighTicket};
use weighcheck_domain::repository::WeighTicketRepository;
use weighcheck_domain::service::{
    check_tickets, parse_weight, summarize, ComplianceClassifier, LimitTable, TicketCheckResult,
    TicketSummary,
};
use weighcheck_types::{AxleClass, ComplianceError, ComplianceVerdict, Jurisdiction, Result};

use crate::config::Config;
use crate::repository::open_ticket_repo;
use crate::scanner::resolve_ticket_sources;

/// One weight to evaluate, as entered by a user or upstream system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceRequest {
    /// Raw weight, e.g. "79000" or "79,000 lbs"
    pub weight: String,
    pub axle_class: AxleClass,
    /// Falls back to the configured default when absent
    pub jurisdiction: Option<String>,
    /// Explicit state limit; wins over any table value
    pub state_limit: Option<u32>,
    pub axle_count: Option<u32>,
    pub spacing_feet: Option<f64>,
}

impl ComplianceRequest {
    pub fn new(weight: impl Into<String>, axle_class: AxleClass) -> Self {
        Self {
            weight: weight.into(),
            axle_class,
            jurisdiction: None,
            state_limit: None,
            axle_count: None,
            spacing_feet: None,
        }
    }

    fn axle_group(&self) -> std::result::Result<Option<BridgeFormulaInput>, ComplianceError> {
        match (self.axle_count, self.spacing_feet) {
            (Some(count), Some(spacing)) => Ok(Some(BridgeFormulaInput::new(count, spacing))),
            // a lone axle needs no spacing
            (Some(1), None) => Ok(Some(BridgeFormulaInput::new(1, 0.0))),
            (Some(_), None) => Err(ComplianceError::InvalidSpacing("missing".to_string())),
            (None, Some(_)) => Err(ComplianceError::InvalidRequest(
                "axle spacing given without an axle count".to_string(),
            )),
            (None, None) => Ok(None),
        }
    }
}

/// Evaluate a single request against `table`
pub fn evaluate(
    config: &Config,
    table: &LimitTable,
    request: &ComplianceRequest,
) -> Result<ComplianceVerdict> {
    let weight = parse_weight(&request.weight)?;
    let jurisdiction = request
        .jurisdiction
        .as_deref()
        .map(Jurisdiction::from_code)
        .unwrap_or_else(|| config.jurisdiction());
    let group = request.axle_group()?;
    if request.state_limit.is_some() && group.is_some() {
        return Err(ComplianceError::InvalidRequest(
            "a state limit cannot be combined with an axle group".to_string(),
        )
        .into());
    }
    let classifier = ComplianceClassifier::new(table);

    let verdict = if request.state_limit.is_some() {
        classifier.classify_with_state_override(
            weight,
            request.axle_class,
            jurisdiction,
            request.state_limit,
        )?
    } else if let Some(group) = group {
        classifier.classify_axle_group(weight, request.axle_class, jurisdiction, group)?
    } else {
        classifier.classify(weight, request.axle_class, jurisdiction)?
    };
    Ok(verdict)
}

/// Results of checking one or more ticket files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketBatch {
    pub sources: Vec<PathBuf>,
    pub results: Vec<TicketCheckResult>,
    pub summary: TicketSummary,
    pub checked_at: DateTime<Utc>,
}

/// Restricts which tickets a batch check looks at
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketFilter {
    pub vehicle_id: Option<String>,
    pub date: Option<NaiveDate>,
}

impl TicketFilter {
    fn select(&self, repo: &impl WeighTicketRepository) -> Result<Vec<WeighTicket>> {
        match (&self.vehicle_id, self.date) {
            (Some(vehicle), Some(date)) => {
                let mut tickets = repo.find_by_vehicle(vehicle)?;
                tickets.retain(|t| t.date == Some(date));
                Ok(tickets)
            }
            (Some(vehicle), None) => repo.find_by_vehicle(vehicle),
            (None, Some(date)) => repo.find_by_date(date),
            (None, None) => repo.find_all(),
        }
    }
}

/// Check every ticket in a CSV file, or in all CSV files under a directory
pub fn check_ticket_source(
    table: &LimitTable,
    path: &Path,
    filter: &TicketFilter,
) -> Result<TicketBatch> {
    let sources = resolve_ticket_sources(path)?;
    let classifier = ComplianceClassifier::new(table);

    let mut results = Vec::new();
    for source in &sources {
        let repo = open_ticket_repo(source.clone())?;
        let tickets = filter.select(&repo)?;
        results.extend(check_tickets(&tickets, &classifier));
    }

    let summary = summarize(&results);
    info!(
        files = sources.len(),
        tickets = summary.total,
        non_compliant = summary.non_compliant,
        "checked weigh tickets"
    );

    Ok(TicketBatch {
        sources,
        results,
        summary,
        checked_at: Utc::now(),
    })
}
