//! Monthly aggregation of purchases and income

mod buckets;
mod ratio;

pub use buckets::{
    chart_ceiling, monthly_buckets, spending_buckets, trailing_month_starts, MonthlyBucket,
    MonthlyRecord,
};
pub use ratio::debt_to_income_ratio;
