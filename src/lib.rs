//! SpendSense - personal finance engine for spending awareness and savings education
//!
//! This library provides:
//! - Savings projections (future value, opportunity cost, monthly balance series)
//! - Monthly aggregation of purchases and income, and a spending-to-income ratio
//! - Lesson progress, onboarding personalization and quiz content
//! - A JSON-backed application state container

pub mod error;
pub mod config;
pub mod model;
pub mod projection;
pub mod aggregate;
pub mod learn;
pub mod store;

// Re-export commonly used types
pub use error::{Error, Result};
pub use config::Config;
pub use model::{IncomeEntry, PlanKind, PurchaseCategory, SavingsPlan, Transaction, UserProfile};
pub use projection::{future_value, projection_series, spent_vs_saved, ProjectionEngine, SpentVsSaved};
pub use aggregate::{debt_to_income_ratio, monthly_buckets, MonthlyBucket};
pub use store::{AppState, Store};
