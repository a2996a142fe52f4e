//! Closed-form savings formulas
//!
//! Rates are annual fractions (0.07 = 7%). Inputs are not validated: negative
//! years or rates flow through the formulas as-is.

use serde::{Deserialize, Serialize};

/// Ratio of projected to spent value above which the long-horizon tip is shown
const MOMENTUM_THRESHOLD: f64 = 1.5;

/// Number of monthly periods in `years`, truncated toward zero
pub fn months_in(years: f64) -> i32 {
    (years * 12.0) as i32
}

/// Future value of a monthly contribution at an annual rate over `years`
///
/// Contributions are made at the end of each month and compound monthly at
/// `annual_rate / 12`. With a zero rate this is simply the sum of contributions.
pub fn future_value(monthly_contribution: f64, annual_rate: f64, years: f64) -> f64 {
    let r = annual_rate / 12.0;
    let n = months_in(years);

    if r == 0.0 {
        return monthly_contribution * n as f64;
    }

    monthly_contribution * ((1.0 + r).powi(n) - 1.0) / r
}

/// Opportunity cost: an amount spent today vs investing it for `years`
///
/// Compounds annually, unlike [`future_value`].
pub fn spent_vs_saved(spent: f64, annual_rate: f64, years: f64) -> SpentVsSaved {
    SpentVsSaved {
        spent,
        would_be: spent * (1.0 + annual_rate).powf(years),
    }
}

/// Result of [`spent_vs_saved`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpentVsSaved {
    /// Amount spent today
    pub spent: f64,
    /// Value the amount would have grown to if invested
    pub would_be: f64,
}

impl SpentVsSaved {
    /// Growth forgone by spending instead of investing
    pub fn forgone(&self) -> f64 {
        self.would_be - self.spent
    }

    /// Tip shown alongside the comparison
    pub fn suggestion(&self) -> &'static str {
        if self.would_be > self.spent * MOMENTUM_THRESHOLD {
            "Tip: Try auto-transferring 10% of monthly income into this option to build momentum."
        } else {
            "Tip: For short horizons, prioritize high-interest debt payoff and emergency fund."
        }
    }
}

/// Investment choices offered when comparing a purchase against investing it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestmentOption {
    #[default]
    RothIra,
    IndexFund,
    Savings,
}

impl InvestmentOption {
    pub const ALL: [InvestmentOption; 3] = [
        InvestmentOption::RothIra,
        InvestmentOption::IndexFund,
        InvestmentOption::Savings,
    ];

    /// Expected annual return for the option
    pub fn annual_rate(&self) -> f64 {
        match self {
            InvestmentOption::RothIra => 0.07,
            InvestmentOption::IndexFund => 0.06,
            InvestmentOption::Savings => 0.02,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InvestmentOption::RothIra => "Roth IRA (7%)",
            InvestmentOption::IndexFund => "Index Fund (6%)",
            InvestmentOption::Savings => "Savings (2%)",
        }
    }
}

impl std::str::FromStr for InvestmentOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "roth-ira" | "roth ira" => Ok(InvestmentOption::RothIra),
            "index-fund" | "index fund" => Ok(InvestmentOption::IndexFund),
            "savings" => Ok(InvestmentOption::Savings),
            other => Err(format!("Unknown investment option: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_future_value_zero_rate() {
        for &(monthly, years) in &[(100.0, 1.0), (250.0, 2.5), (0.0, 10.0), (75.5, 0.0)] {
            let expected = monthly * (years * 12.0_f64).floor();
            assert_abs_diff_eq!(future_value(monthly, 0.0, years), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_future_value_one_percent_monthly() {
        // r = 0.01, n = 12: 100 * (1.01^12 - 1) / 0.01
        let fv = future_value(100.0, 0.12, 1.0);
        let expected = 100.0 * (1.01_f64.powi(12) - 1.0) / 0.01;
        assert_relative_eq!(fv, expected, max_relative = 1e-12);
        assert_abs_diff_eq!(fv, 1268.25, epsilon = 0.01);
    }

    #[test]
    fn test_future_value_truncates_partial_months() {
        // 1.05 years = 12.6 months, only 12 whole contributions
        assert_abs_diff_eq!(
            future_value(100.0, 0.12, 1.05),
            future_value(100.0, 0.12, 1.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_future_value_negative_years_propagates() {
        assert_abs_diff_eq!(future_value(100.0, 0.0, -1.0), -1200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_spent_vs_saved() {
        let result = spent_vs_saved(100.0, 0.07, 10.0);
        assert_abs_diff_eq!(result.spent, 100.0);
        assert_abs_diff_eq!(result.would_be, 196.72, epsilon = 0.01);
        assert_abs_diff_eq!(result.forgone(), 96.72, epsilon = 0.01);
    }

    #[test]
    fn test_spent_vs_saved_compounds_annually() {
        // Annual compounding gives less than monthly compounding at the same nominal rate
        let annual = spent_vs_saved(1000.0, 0.12, 1.0).would_be;
        let monthly = 1000.0 * 1.01_f64.powi(12);
        assert_abs_diff_eq!(annual, 1120.0, epsilon = 1e-9);
        assert!(annual < monthly);
    }

    #[test]
    fn test_suggestion_depends_on_growth() {
        let long = spent_vs_saved(100.0, 0.07, 10.0);
        assert!(long.suggestion().contains("auto-transferring"));

        let short = spent_vs_saved(100.0, 0.07, 2.0);
        assert!(short.suggestion().contains("short horizons"));
    }

    #[test]
    fn test_investment_option_rates() {
        assert_abs_diff_eq!(InvestmentOption::default().annual_rate(), 0.07);
        assert_eq!("index-fund".parse::<InvestmentOption>(), Ok(InvestmentOption::IndexFund));
        assert!(InvestmentOption::ALL
            .windows(2)
            .all(|w| w[0].annual_rate() > w[1].annual_rate()));
    }
}
