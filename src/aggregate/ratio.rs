//! Spending-to-income ratio

use crate::model::{IncomeEntry, Transaction};

/// Unnecessary impulse spending divided by total income
///
/// Returns 0 when there is no income rather than dividing by zero.
pub fn debt_to_income_ratio(transactions: &[Transaction], incomes: &[IncomeEntry]) -> f64 {
    let unnecessary: f64 = transactions
        .iter()
        .filter(|t| t.category.is_impulse())
        .map(|t| t.amount)
        .sum();
    let income: f64 = incomes.iter().map(|i| i.amount).sum();

    if income <= 0.0 {
        return 0.0;
    }

    unnecessary / income
}
