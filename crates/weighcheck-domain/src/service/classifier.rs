//! Compliance classification
//!
//! A measured weight is compared against the applicable ceiling:
//! - above the ceiling: `NonCompliant`
//! - at or above 95% of it: `Warning`
//! - otherwise: `Compliant`
//!
//! The ceiling comes from the limit table, from a caller-supplied state limit,
//! or from the bridge formula when it is lower than the axle-class ceiling.

use tracing::debug;
use weighcheck_types::{
    validate_weight, AxleClass, ComplianceError, ComplianceStatus, ComplianceVerdict, Jurisdiction,
    LimitSource,
};

use super::bridge_formula;
use super::limit_table::LimitTable;
use crate::model::{BridgeFormulaInput, BridgeLimit};

/// Classifier bound to a limit table
#[derive(Debug, Clone, Copy)]
pub struct ComplianceClassifier<'a> {
    table: &'a LimitTable,
}

impl Default for ComplianceClassifier<'static> {
    fn default() -> Self {
        Self::new(LimitTable::builtin())
    }
}

impl<'a> ComplianceClassifier<'a> {
    pub fn new(table: &'a LimitTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a LimitTable {
        self.table
    }

    /// Classify against the table entry for `jurisdiction`
    pub fn classify(
        &self,
        weight_pounds: f64,
        axle_class: AxleClass,
        jurisdiction: Jurisdiction,
    ) -> Result<ComplianceVerdict, ComplianceError> {
        let weight_pounds = validate_weight(weight_pounds)?;
        let (limits, source) = self.table.resolve(jurisdiction);
        Ok(build_verdict(
            weight_pounds,
            limits.ceiling(axle_class),
            jurisdiction,
            axle_class,
            source,
        ))
    }

    /// Classify with an explicit state limit.
    ///
    /// A supplied state limit is used as-is, whether it is above or below the
    /// federal ceiling. Without one the federal baseline applies.
    pub fn classify_with_state_override(
        &self,
        weight_pounds: f64,
        axle_class: AxleClass,
        jurisdiction: Jurisdiction,
        state_limit: Option<u32>,
    ) -> Result<ComplianceVerdict, ComplianceError> {
        let weight_pounds = validate_weight(weight_pounds)?;
        let (limit, source) = match state_limit {
            Some(0) => return Err(ComplianceError::InvalidLimit(0)),
            Some(limit) => (limit, LimitSource::StateOverride),
            None => (self.table.federal().ceiling(axle_class), LimitSource::Federal),
        };
        Ok(build_verdict(weight_pounds, limit, jurisdiction, axle_class, source))
    }

    /// Classify an axle group, taking the lower of the axle-class ceiling and
    /// the floored bridge-formula weight
    pub fn classify_axle_group(
        &self,
        weight_pounds: f64,
        axle_class: AxleClass,
        jurisdiction: Jurisdiction,
        group: BridgeFormulaInput,
    ) -> Result<ComplianceVerdict, ComplianceError> {
        let weight_pounds = validate_weight(weight_pounds)?;
        let bridge = bridge_formula::evaluate(&group)?;
        let (limits, table_source) = self.table.resolve(jurisdiction);
        let class_limit = limits.ceiling(axle_class);

        let (limit, source) = match bridge.floor_pounds() {
            Some(bridge_limit) if bridge_limit < class_limit => {
                (bridge_limit, LimitSource::BridgeFormula)
            }
            _ => (class_limit, table_source),
        };
        if bridge == BridgeLimit::NotApplicable {
            debug!("single axle group, bridge formula not applied");
        }
        Ok(build_verdict(weight_pounds, limit, jurisdiction, axle_class, source))
    }
}

/// Classify against the built-in table by jurisdiction code
pub fn classify(
    weight_pounds: f64,
    axle_class: AxleClass,
    jurisdiction_code: &str,
) -> Result<ComplianceVerdict, ComplianceError> {
    ComplianceClassifier::default().classify(
        weight_pounds,
        axle_class,
        Jurisdiction::from_code(jurisdiction_code),
    )
}

pub fn classify_with_state_override(
    weight_pounds: f64,
    axle_class: AxleClass,
    jurisdiction_code: &str,
    state_limit: Option<u32>,
) -> Result<ComplianceVerdict, ComplianceError> {
    ComplianceClassifier::default().classify_with_state_override(
        weight_pounds,
        axle_class,
        Jurisdiction::from_code(jurisdiction_code),
        state_limit,
    )
}

pub fn classify_axle_group(
    weight_pounds: f64,
    axle_class: AxleClass,
    jurisdiction_code: &str,
    group: BridgeFormulaInput,
) -> Result<ComplianceVerdict, ComplianceError> {
    ComplianceClassifier::default().classify_axle_group(
        weight_pounds,
        axle_class,
        Jurisdiction::from_code(jurisdiction_code),
        group,
    )
}

/// Parse a weight string such as `"79,000 lbs"` into validated pounds
pub fn parse_weight(input: &str) -> Result<f64, ComplianceError> {
    let lowered = input.trim().to_lowercase();
    let without_unit = ["pounds", "lbs", "lb"]
        .iter()
        .find_map(|unit| lowered.strip_suffix(unit))
        .unwrap_or(&lowered);
    let cleaned: String = without_unit
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();

    let weight: f64 = cleaned
        .parse()
        .map_err(|_| ComplianceError::InvalidWeight(input.trim().to_string()))?;
    validate_weight(weight).map_err(|_| ComplianceError::InvalidWeight(input.trim().to_string()))
}

fn build_verdict(
    weight_pounds: f64,
    limit: u32,
    jurisdiction: Jurisdiction,
    axle_class: AxleClass,
    limit_source: LimitSource,
) -> ComplianceVerdict {
    let limit_f = limit as f64;
    let status = ComplianceStatus::from_weight(weight_pounds, limit_f);
    let percent_of_limit = weight_pounds / limit_f * 100.0;
    let excess_pounds = match status {
        ComplianceStatus::NonCompliant => Some(weight_pounds - limit_f),
        _ => None,
    };

    let limit_label = match limit_source {
        LimitSource::BridgeFormula => "bridge formula".to_string(),
        _ => format!("{} {}", jurisdiction.name(), axle_class.label()),
    };
    let mut message = format!(
        "{}: {} lbs is {:.1}% of the {} lbs {} limit",
        status.label(),
        format_pounds(weight_pounds),
        percent_of_limit,
        format_pounds(limit_f),
        limit_label
    );
    if let Some(excess) = excess_pounds {
        message.push_str(&format!(" ({} lbs over)", format_pounds(excess)));
    }

    debug!(
        jurisdiction = %jurisdiction,
        axle_class = %axle_class,
        weight_pounds,
        limit,
        status = status.as_str(),
        "classified weight"
    );

    ComplianceVerdict {
        status,
        weight_pounds,
        applicable_limit: limit,
        percent_of_limit,
        message,
        jurisdiction,
        axle_class,
        limit_source,
        excess_pounds,
    }
}

/// Whole pounds with thousands separators; fractions are kept to one place
pub fn format_pounds(pounds: f64) -> String {
    let rounded = (pounds * 10.0).round() / 10.0;
    let digits = format!("{:.0}", rounded.trunc());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let fraction = rounded - rounded.trunc();
    if fraction.abs() >= 0.05 {
        format!("{}.{}", grouped, (fraction * 10.0).round() as u64)
    } else {
        grouped
    }
}
