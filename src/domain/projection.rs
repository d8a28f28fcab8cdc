//! SERP click-through curve and goal projection value types

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::error::{AppError, Result};

/// Organic CTR by SERP position, positions 1 to 10
const DEFAULT_CTR_PERCENTS: [f64; 10] = [32.26, 14.67, 8.55, 5.66, 3.93, 2.82, 2.11, 1.63, 1.30, 1.07];

static DEFAULT_CTR_CURVE: Lazy<CtrCurve> = Lazy::new(|| CtrCurve {
    points: DEFAULT_CTR_PERCENTS
        .iter()
        .enumerate()
        .map(|(idx, ctr)| CtrPoint {
            position: idx as u8 + 1,
            ctr_percent: *ctr,
        })
        .collect(),
});

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtrPoint {
    pub position: u8,
    pub ctr_percent: f64,
}

/// Ordered CTR table. Position 1 holds the best CTR and values strictly
/// decrease with position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CtrCurve {
    points: Vec<CtrPoint>,
}

impl CtrCurve {
    /// Build a custom curve from CTR percentages for positions 1, 2, 3, ...
    pub fn new(ctr_percents: &[f64]) -> Result<Self> {
        if ctr_percents.is_empty() {
            return Err(AppError::ValidationError(
                "CTR curve needs at least one position".to_string(),
            ));
        }
        if ctr_percents.len() > u8::MAX as usize {
            return Err(AppError::ValidationError(format!(
                "CTR curve has too many positions ({})",
                ctr_percents.len()
            )));
        }
        if ctr_percents.iter().any(|ctr| !ctr.is_finite() || *ctr <= 0.0) {
            return Err(AppError::ValidationError(
                "CTR values must be positive".to_string(),
            ));
        }
        if ctr_percents.windows(2).any(|pair| pair[1] >= pair[0]) {
            return Err(AppError::ValidationError(
                "CTR values must strictly decrease by position".to_string(),
            ));
        }

        let points = ctr_percents
            .iter()
            .enumerate()
            .map(|(idx, ctr)| CtrPoint {
                position: idx as u8 + 1,
                ctr_percent: *ctr,
            })
            .collect();

        Ok(Self { points })
    }

    pub fn points(&self) -> &[CtrPoint] {
        &self.points
    }

    /// CTR of position 1
    pub fn best_ctr(&self) -> f64 {
        self.points[0].ctr_percent
    }

    pub fn ctr_at(&self, position: u8) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.position == position)
            .map(|p| p.ctr_percent)
    }
}

impl Default for CtrCurve {
    fn default() -> Self {
        DEFAULT_CTR_CURVE.clone()
    }
}

/// Goal the projection works back from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInput {
    #[validate(range(exclusive_min = 0.0))]
    pub projected_monthly_sessions: f64,
}

impl ProjectionInput {
    pub fn new(projected_monthly_sessions: f64) -> Self {
        Self {
            projected_monthly_sessions,
        }
    }
}

/// Expected traffic when ranking at one position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionProjection {
    pub position: u8,
    pub ctr_percent: f64,
    pub expected_sessions: u64,
    /// This position's CTR as a percentage of the best CTR
    pub share_of_best: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub required_search_volume: u64,
    pub per_position: Vec<PositionProjection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_curve() {
        let curve = CtrCurve::default();
        assert_eq!(curve.points().len(), 10);
        assert_eq!(curve.best_ctr(), 32.26);
        assert_eq!(curve.ctr_at(10), Some(1.07));
        assert_eq!(curve.ctr_at(11), None);
    }

    #[test]
    fn test_default_curve_is_strictly_decreasing() {
        let curve = CtrCurve::default();
        assert!(curve
            .points()
            .windows(2)
            .all(|pair| pair[1].ctr_percent < pair[0].ctr_percent));
        assert!(CtrCurve::new(&DEFAULT_CTR_PERCENTS).is_ok());
    }

    #[test]
    fn test_custom_curve_validation() {
        assert!(CtrCurve::new(&[]).is_err());
        assert!(CtrCurve::new(&[10.0, 10.0]).is_err());
        assert!(CtrCurve::new(&[5.0, 8.0]).is_err());
        assert!(CtrCurve::new(&[5.0, 0.0]).is_err());
        assert!(CtrCurve::new(&[f64::NAN]).is_err());

        let curve = CtrCurve::new(&[40.0, 20.0, 5.0]).unwrap();
        assert_eq!(curve.points()[2].position, 3);
    }

    #[test]
    fn test_projection_input_validation() {
        assert!(ProjectionInput::new(4818.0).validate().is_ok());
        assert!(ProjectionInput::new(0.0).validate().is_err());
        assert!(ProjectionInput::new(-5.0).validate().is_err());
    }
}
