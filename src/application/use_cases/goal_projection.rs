// ============================================================
// GOAL PROJECTION USE CASE
// ============================================================
// Work back from a monthly session target to required search volume

use crate::domain::business_context::BusinessContext;
use crate::domain::projection::{CtrCurve, PositionProjection, ProjectionInput, ProjectionResult};
use crate::shared::numeric::to_count;

/// Project required search volume and sessions per SERP position.
///
/// `required = round(target * 100 / ctr[1])` and, for every position,
/// `sessions = round(required * ctr[p] / 100)`, each rounded half up on its
/// own. A target that is zero, negative or not finite yields an all-zero
/// result.
pub fn project(target_monthly_sessions: f64, curve: &CtrCurve) -> ProjectionResult {
    let required_search_volume = if target_monthly_sessions.is_finite() && target_monthly_sessions > 0.0 {
        to_count(target_monthly_sessions * 100.0 / curve.best_ctr())
    } else {
        0
    };

    let best_ctr = curve.best_ctr();
    let per_position = curve
        .points()
        .iter()
        .map(|point| PositionProjection {
            position: point.position,
            ctr_percent: point.ctr_percent,
            expected_sessions: to_count(required_search_volume as f64 * point.ctr_percent / 100.0),
            share_of_best: point.ctr_percent / best_ctr * 100.0,
        })
        .collect();

    ProjectionResult {
        required_search_volume,
        per_position,
    }
}

/// Goal projection over a fixed CTR curve
pub struct GoalProjector {
    curve: CtrCurve,
}

impl GoalProjector {
    pub fn new(curve: CtrCurve) -> Self {
        Self { curve }
    }

    pub fn curve(&self) -> &CtrCurve {
        &self.curve
    }

    pub fn project(&self, input: &ProjectionInput) -> ProjectionResult {
        let result = project(input.projected_monthly_sessions, &self.curve);
        tracing::debug!(
            target_sessions = input.projected_monthly_sessions,
            required_search_volume = result.required_search_volume,
            "Goal projection computed"
        );
        result
    }

    pub fn project_context(&self, context: &BusinessContext) -> ProjectionResult {
        self.project(&context.projection_input())
    }
}

impl Default for GoalProjector {
    fn default() -> Self {
        Self::new(CtrCurve::default())
    }
}
