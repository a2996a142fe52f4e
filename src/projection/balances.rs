//! Projection output structures for savings plans

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single month of a plan projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceRow {
    /// Projection month (1-indexed)
    pub month: u32,

    /// Interest earned this month on the opening balance
    pub interest: f64,

    /// Contribution added at month end
    pub contribution: f64,

    // Running totals
    pub contributions_to_date: f64,
    pub interest_to_date: f64,

    /// End of month balance
    pub balance: f64,
}

/// Complete projection for one savings plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanProjection {
    pub plan_id: Uuid,
    pub plan_name: String,

    /// Monthly balance rows
    pub rows: Vec<BalanceRow>,
}

impl PlanProjection {
    pub fn new(plan_id: Uuid, plan_name: impl Into<String>) -> Self {
        Self {
            plan_id,
            plan_name: plan_name.into(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: BalanceRow) {
        self.rows.push(row);
    }

    /// Balances only, in month order
    pub fn balances(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.balance).collect()
    }

    pub fn summary(&self) -> ProjectionSummary {
        let last = self.rows.last();

        ProjectionSummary {
            total_months: self.rows.len() as u32,
            total_contributions: last.map(|r| r.contributions_to_date).unwrap_or(0.0),
            total_interest: last.map(|r| r.interest_to_date).unwrap_or(0.0),
            final_balance: last.map(|r| r.balance).unwrap_or(0.0),
        }
    }
}

/// Summary statistics for a plan projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_months: u32,
    pub total_contributions: f64,
    pub total_interest: f64,
    pub final_balance: f64,
}
