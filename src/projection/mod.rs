//! Savings projections: closed-form formulas, monthly series and per-plan runs

mod calculator;
mod series;
mod balances;
mod engine;

pub use calculator::{future_value, months_in, spent_vs_saved, InvestmentOption, SpentVsSaved};
pub use series::{projection_series, ProjectionSeries};
pub use balances::{BalanceRow, PlanProjection, ProjectionSummary};
pub use engine::{project_plans, ProjectionConfig, ProjectionEngine, DEFAULT_HORIZON_YEARS};
