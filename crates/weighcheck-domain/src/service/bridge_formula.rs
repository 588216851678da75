//! Federal bridge formula
//!
//! `W = 500 * (L*N/(N-1) + 12*N + 36)` where `L` is the outer-to-outer
//! spacing of the group in feet and `N` the number of axles.

use weighcheck_types::ComplianceError;

use crate::model::{BridgeFormulaInput, BridgeLimit};

/// Maximum legal weight for a consecutive axle group.
///
/// One axle is `NotApplicable` whatever the spacing; zero axles or a
/// negative/non-finite spacing on a real group is an error.
pub fn max_group_weight(axle_count: u32, spacing_feet: f64) -> Result<BridgeLimit, ComplianceError> {
    if axle_count == 0 {
        return Err(ComplianceError::InvalidAxleCount(axle_count));
    }
    // N-1 is zero for a single axle
    if axle_count == 1 {
        return Ok(BridgeLimit::NotApplicable);
    }
    if !spacing_feet.is_finite() || spacing_feet < 0.0 {
        return Err(ComplianceError::InvalidSpacing(spacing_feet.to_string()));
    }

    let n = axle_count as f64;
    let weight = 500.0 * ((spacing_feet * n) / (n - 1.0) + 12.0 * n + 36.0);
    Ok(BridgeLimit::MaxWeight(weight))
}

pub fn evaluate(input: &BridgeFormulaInput) -> Result<BridgeLimit, ComplianceError> {
    max_group_weight(input.axle_count, input.spacing_feet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_axles_thirty_feet() {
        // 500 * (30*3/2 + 36 + 36) = 58,500
        let limit = max_group_weight(3, 30.0).unwrap();
        assert_eq!(limit, BridgeLimit::MaxWeight(58_500.0));
    }

    #[test]
    fn test_two_axles_four_feet() {
        // 500 * (4*2/1 + 24 + 36) = 34,000
        let limit = max_group_weight(2, 4.0).unwrap();
        assert_eq!(limit.floor_pounds(), Some(34_000));
    }

    #[test]
    fn test_five_axles_fifty_one_feet() {
        // 500 * (51*5/4 + 60 + 36) = 79,875
        let limit = max_group_weight(5, 51.0).unwrap();
        assert_eq!(limit.floor_pounds(), Some(79_875));
    }

    #[test]
    fn test_single_axle_not_applicable() {
        for spacing in [0.0, 4.0, 30.0, 1_000.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(max_group_weight(1, spacing), Ok(BridgeLimit::NotApplicable));
        }
    }

    #[test]
    fn test_zero_axles_rejected() {
        assert_eq!(
            max_group_weight(0, 10.0),
            Err(ComplianceError::InvalidAxleCount(0))
        );
    }

    #[test]
    fn test_bad_spacing_rejected() {
        assert!(matches!(
            max_group_weight(3, -1.0),
            Err(ComplianceError::InvalidSpacing(_))
        ));
        assert!(matches!(
            max_group_weight(3, f64::NAN),
            Err(ComplianceError::InvalidSpacing(_))
        ));
    }

    #[test]
    fn test_fractional_result_floors() {
        // 500 * (10.5*3/2 + 36 + 36) = 43,875
        let limit = evaluate(&BridgeFormulaInput::new(3, 10.5)).unwrap();
        assert_eq!(limit.floor_pounds(), Some(43_875));

        // 500 * (10.25*4/3 + 48 + 36) = 48,833.33
        let limit = max_group_weight(4, 10.25).unwrap();
        assert_eq!(limit.floor_pounds(), Some(48_833));
    }

    #[test]
    fn test_more_spacing_allows_more_weight() {
        let near = max_group_weight(4, 20.0).unwrap().floor_pounds().unwrap();
        let far = max_group_weight(4, 40.0).unwrap().floor_pounds().unwrap();
        assert!(far > near);
    }
}
