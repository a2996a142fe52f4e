//! Projection engine for savings plans

use rayon::prelude::*;

use super::balances::{BalanceRow, PlanProjection};
use super::calculator::months_in;
use crate::model::SavingsPlan;

/// Default projection horizon in years
pub const DEFAULT_HORIZON_YEARS: f64 = 5.0;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Horizon in years; partial months are dropped
    pub horizon_years: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_years: DEFAULT_HORIZON_YEARS,
        }
    }
}

impl ProjectionConfig {
    pub fn with_horizon(horizon_years: f64) -> Self {
        Self { horizon_years }
    }

    pub fn projection_months(&self) -> u32 {
        months_in(self.horizon_years).max(0) as u32
    }
}

/// Runs month-by-month projections of savings plans
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run projection for a single plan
    pub fn project_plan(&self, plan: &SavingsPlan) -> PlanProjection {
        let mut result = PlanProjection::new(plan.id, plan.name.clone());
        let monthly_rate = plan.expected_annual_return / 12.0;

        let mut balance = 0.0;
        let mut contributions_to_date = 0.0;
        let mut interest_to_date = 0.0;

        for month in 1..=self.config.projection_months() {
            let interest = balance * monthly_rate;
            balance += interest + plan.monthly_contribution;
            contributions_to_date += plan.monthly_contribution;
            interest_to_date += interest;

            result.add_row(BalanceRow {
                month,
                interest,
                contribution: plan.monthly_contribution,
                contributions_to_date,
                interest_to_date,
                balance,
            });
        }

        result
    }

    /// Run projections for many plans in parallel, preserving input order
    pub fn project_plans(&self, plans: &[SavingsPlan]) -> Vec<PlanProjection> {
        plans.par_iter().map(|plan| self.project_plan(plan)).collect()
    }
}

/// Project every plan over `years` with a default engine
pub fn project_plans(plans: &[SavingsPlan], years: f64) -> Vec<PlanProjection> {
    ProjectionEngine::new(ProjectionConfig::with_horizon(years)).project_plans(plans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlanKind;
    use crate::projection::{future_value, projection_series};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn roth() -> SavingsPlan {
        SavingsPlan::new("Roth IRA", PlanKind::RothIra, 100.0, 0.07, 2019)
    }

    #[test]
    fn test_final_balance_matches_future_value() {
        let engine = ProjectionEngine::new(ProjectionConfig::with_horizon(10.0));
        let summary = engine.project_plan(&roth()).summary();

        assert_eq!(summary.total_months, 120);
        assert_relative_eq!(summary.final_balance, future_value(100.0, 0.07, 10.0), max_relative = 1e-9);
        assert_abs_diff_eq!(summary.total_contributions, 12_000.0, epsilon = 1e-6);
        assert_relative_eq!(
            summary.total_contributions + summary.total_interest,
            summary.final_balance,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_balances_track_series() {
        let projection = project_plans(&[roth()], 3.0).remove(0);
        let series = projection_series(100.0, 0.07, 3.0);

        assert_eq!(projection.rows.len(), series.len());
        for (a, b) in projection.balances().iter().zip(&series) {
            assert_relative_eq!(*a, *b, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_zero_rate_plan_has_no_interest() {
        let plan = SavingsPlan::new("Jar", PlanKind::Other, 50.0, 0.0, 2024);
        let summary = ProjectionEngine::default().project_plan(&plan).summary();
        assert_eq!(summary.total_months, 60);
        assert_abs_diff_eq!(summary.total_interest, 0.0);
        assert_abs_diff_eq!(summary.final_balance, 3000.0);
    }

    #[test]
    fn test_project_plans_preserves_order() {
        let plans = vec![
            roth(),
            SavingsPlan::new("Savings", PlanKind::Savings, 50.0, 0.02, 2021),
            SavingsPlan::new("Index", PlanKind::IndexFund, 200.0, 0.06, 2022),
        ];
        let results = project_plans(&plans, 5.0);

        let ids: Vec<_> = results.iter().map(|r| r.plan_id).collect();
        let expected: Vec<_> = plans.iter().map(|p| p.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_negative_horizon_projects_nothing() {
        let projection = project_plans(&[roth()], -1.0).remove(0);
        assert!(projection.rows.is_empty());
        assert_abs_diff_eq!(projection.summary().final_balance, 0.0);
    }
}
