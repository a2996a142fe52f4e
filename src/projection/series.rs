//! Month-by-month balance series for charting

use super::calculator::months_in;

/// Iterator over end-of-month balances of a recurring contribution
///
/// Each step compounds the running total by one month and then adds the
/// contribution. The iterator is `Clone`, so a series can be replayed from any
/// point without recomputing the prefix.
#[derive(Debug, Clone)]
pub struct ProjectionSeries {
    monthly_contribution: f64,
    monthly_rate: f64,
    remaining: u32,
    total: f64,
}

impl ProjectionSeries {
    pub fn new(monthly_contribution: f64, annual_rate: f64, years: f64) -> Self {
        Self {
            monthly_contribution,
            monthly_rate: annual_rate / 12.0,
            // A negative horizon produces an empty series
            remaining: months_in(years).max(0) as u32,
            total: 0.0,
        }
    }
}

impl Iterator for ProjectionSeries {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.total = self.total * (1.0 + self.monthly_rate) + self.monthly_contribution;
        Some(self.total)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for ProjectionSeries {}

/// Balances at the end of each month over `years`
pub fn projection_series(monthly_contribution: f64, annual_rate: f64, years: f64) -> Vec<f64> {
    ProjectionSeries::new(monthly_contribution, annual_rate, years).collect()
}
