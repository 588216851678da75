//! Value types shared by the compliance engine and its callers

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ComplianceError;
use crate::jurisdiction::Jurisdiction;

/// Fraction of a limit at which a compliant weight becomes a warning
pub const WARNING_THRESHOLD: f64 = 0.95;

/// Axle grouping (or whole-vehicle measure) a ceiling applies to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxleClass {
    #[value(name = "single", alias = "single-axle")]
    SingleAxle,
    #[value(name = "tandem", alias = "tandem-axle")]
    TandemAxle,
    #[value(name = "gross", alias = "gvw")]
    GrossVehicleWeight,
}

impl AxleClass {
    pub const ALL: [AxleClass; 3] = [
        AxleClass::SingleAxle,
        AxleClass::TandemAxle,
        AxleClass::GrossVehicleWeight,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AxleClass::SingleAxle => "single axle",
            AxleClass::TandemAxle => "tandem axle",
            AxleClass::GrossVehicleWeight => "gross vehicle weight",
        }
    }
}

impl std::fmt::Display for AxleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for AxleClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match normalized.as_str() {
            "single" | "singleaxle" => Ok(AxleClass::SingleAxle),
            "tandem" | "tandemaxle" => Ok(AxleClass::TandemAxle),
            "gross" | "gvw" | "grossvehicleweight" => Ok(AxleClass::GrossVehicleWeight),
            _ => Err(format!("Unknown axle class: {}", s)),
        }
    }
}

/// Three-state compliance verdict, ordered by severity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    Warning,
    NonCompliant,
}

impl ComplianceStatus {
    /// Non-compliant strictly above the limit, warning from 95% of it.
    pub fn from_weight(weight_pounds: f64, limit_pounds: f64) -> Self {
        match weight_pounds {
            w if w > limit_pounds => ComplianceStatus::NonCompliant,
            w if w >= limit_pounds * WARNING_THRESHOLD => ComplianceStatus::Warning,
            _ => ComplianceStatus::Compliant,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "Compliant",
            ComplianceStatus::Warning => "Warning",
            ComplianceStatus::NonCompliant => "Non-Compliant",
        }
    }

    /// Same value as the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "compliant",
            ComplianceStatus::Warning => "warning",
            ComplianceStatus::NonCompliant => "non_compliant",
        }
    }
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Where the applicable ceiling came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitSource {
    /// Federal baseline (no state entry, or unrecognized code)
    Federal,
    /// State entry in the limit table
    State,
    /// State limit supplied by the caller
    StateOverride,
    /// Bridge formula was lower than the axle-class ceiling
    BridgeFormula,
}

/// Structured result of one classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceVerdict {
    pub status: ComplianceStatus,
    pub weight_pounds: f64,
    pub applicable_limit: u32,
    pub percent_of_limit: f64,
    pub message: String,
    pub jurisdiction: Jurisdiction,
    pub axle_class: AxleClass,
    pub limit_source: LimitSource,
    /// Pounds over the limit, only when non-compliant
    pub excess_pounds: Option<f64>,
}

impl ComplianceVerdict {
    pub fn is_compliant(&self) -> bool {
        self.status == ComplianceStatus::Compliant
    }
}

/// Reject negative, NaN and infinite weights
pub fn validate_weight(weight_pounds: f64) -> Result<f64, ComplianceError> {
    if weight_pounds.is_finite() && weight_pounds >= 0.0 {
        Ok(weight_pounds)
    } else {
        Err(ComplianceError::InvalidWeight(weight_pounds.to_string()))
    }
}
