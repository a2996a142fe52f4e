//! Calendar-month bucketing of dated records

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::{first_of_month, IncomeEntry, Transaction};

/// Headroom above the tallest bucket when sizing a chart axis
const CHART_HEADROOM: f64 = 1.1;

/// A record with a date and an amount that can be grouped by month
pub trait MonthlyRecord {
    fn record_date(&self) -> NaiveDate;
    fn record_amount(&self) -> f64;
}

impl MonthlyRecord for Transaction {
    fn record_date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    fn record_amount(&self) -> f64 {
        self.amount
    }
}

impl MonthlyRecord for IncomeEntry {
    fn record_date(&self) -> NaiveDate {
        self.effective_month
    }

    fn record_amount(&self) -> f64 {
        self.amount
    }
}

/// Totals for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    /// First day of the month
    pub month_start: NaiveDate,

    /// Abbreviated month name, e.g. "Jun"
    pub label: String,

    /// Sum of all records in the month
    pub total: f64,

    /// Sum of records in the month matching the subset predicate
    pub subset: f64,
}

impl MonthlyBucket {
    fn empty(month_start: NaiveDate) -> Self {
        Self {
            month_start,
            label: month_start.format("%b").to_string(),
            total: 0.0,
            subset: 0.0,
        }
    }
}

/// First days of the `months_back` months ending with the month of `reference`, oldest first
pub fn trailing_month_starts(months_back: u32, reference: NaiveDate) -> Vec<NaiveDate> {
    let current = first_of_month(reference);

    (0..months_back)
        .rev()
        .filter_map(|offset| current.checked_sub_months(Months::new(offset)))
        .collect()
}

/// Group records into the trailing `months_back` calendar months ending at `reference`
///
/// Every month in the window gets a bucket, including months with no records.
/// `subset` selects the records counted in [`MonthlyBucket::subset`] in addition
/// to the total. Records outside the window are ignored.
pub fn monthly_buckets<R, F>(
    records: &[R],
    months_back: u32,
    reference: NaiveDate,
    subset: F,
) -> Vec<MonthlyBucket>
where
    R: MonthlyRecord,
    F: Fn(&R) -> bool,
{
    let mut buckets: Vec<MonthlyBucket> = trailing_month_starts(months_back, reference)
        .into_iter()
        .map(MonthlyBucket::empty)
        .collect();

    for record in records {
        let month = first_of_month(record.record_date());
        // Month starts are sorted, so locate the bucket by binary search
        if let Ok(idx) = buckets.binary_search_by_key(&month, |b| b.month_start) {
            let bucket = &mut buckets[idx];
            let amount = record.record_amount();
            bucket.total += amount;
            if subset(record) {
                bucket.subset += amount;
            }
        }
    }

    buckets
}

/// Monthly spending with unnecessary impulse purchases as the subset
pub fn spending_buckets(
    transactions: &[Transaction],
    months_back: u32,
    reference: NaiveDate,
) -> Vec<MonthlyBucket> {
    monthly_buckets(transactions, months_back, reference, |t| t.category.is_impulse())
}

/// Upper bound for a chart's y axis covering every bucket
pub fn chart_ceiling(buckets: &[MonthlyBucket]) -> f64 {
    let max = buckets
        .iter()
        .map(|b| b.total.max(b.subset))
        .reduce(f64::max)
        .unwrap_or(1.0);

    max * CHART_HEADROOM
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PurchaseCategory;
    use approx::assert_abs_diff_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn purchase(y: i32, m: u32, d: u32, amount: f64, category: PurchaseCategory) -> Transaction {
        Transaction::new(date(y, m, d).and_hms_opt(10, 30, 0).unwrap(), amount, category)
    }

    #[test]
    fn test_trailing_month_starts_cross_year() {
        let starts = trailing_month_starts(4, date(2025, 2, 14));
        assert_eq!(
            starts,
            vec![date(2024, 11, 1), date(2024, 12, 1), date(2025, 1, 1), date(2025, 2, 1)]
        );
    }

    #[test]
    fn test_empty_records_still_produce_every_month() {
        let buckets = spending_buckets(&[], 6, date(2025, 6, 30));

        assert_eq!(buckets.len(), 6);
        assert_eq!(buckets[0].month_start, date(2025, 1, 1));
        assert_eq!(buckets[5].month_start, date(2025, 6, 1));
        assert!(buckets.iter().all(|b| b.total == 0.0 && b.subset == 0.0));
    }

    #[test]
    fn test_zero_months_back() {
        let records = vec![purchase(2025, 6, 1, 10.0, PurchaseCategory::Misc)];
        assert!(spending_buckets(&records, 0, date(2025, 6, 15)).is_empty());
    }

    #[test]
    fn test_records_land_in_their_month() {
        let records = vec![
            purchase(2025, 4, 30, 20.0, PurchaseCategory::Necessary),
            purchase(2025, 5, 1, 49.99, PurchaseCategory::UnnecessaryImpulse),
            purchase(2025, 5, 31, 12.5, PurchaseCategory::Necessary),
            purchase(2025, 6, 2, 30.0, PurchaseCategory::UnnecessaryImpulse),
            // Outside the window on both sides
            purchase(2025, 2, 28, 999.0, PurchaseCategory::UnnecessaryImpulse),
            purchase(2025, 7, 1, 999.0, PurchaseCategory::Misc),
        ];

        let buckets = spending_buckets(&records, 3, date(2025, 6, 15));
        let labels: Vec<_> = buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Apr", "May", "Jun"]);

        assert_abs_diff_eq!(buckets[0].total, 20.0);
        assert_abs_diff_eq!(buckets[0].subset, 0.0);
        assert_abs_diff_eq!(buckets[1].total, 62.49, epsilon = 1e-9);
        assert_abs_diff_eq!(buckets[1].subset, 49.99, epsilon = 1e-9);
        assert_abs_diff_eq!(buckets[2].total, 30.0);
        assert_abs_diff_eq!(buckets[2].subset, 30.0);
    }

    #[test]
    fn test_custom_predicate_on_income() {
        let incomes = vec![
            IncomeEntry::new(1000.0, date(2025, 3, 9)),
            IncomeEntry::new(1200.0, date(2025, 5, 20)),
            IncomeEntry::new(300.0, date(2025, 5, 2)),
        ];

        let buckets = monthly_buckets(&incomes, 3, date(2025, 5, 1), |i| i.amount >= 1000.0);
        assert_abs_diff_eq!(buckets[0].total, 1000.0);
        assert_abs_diff_eq!(buckets[1].total, 0.0);
        assert_abs_diff_eq!(buckets[2].total, 1500.0);
        assert_abs_diff_eq!(buckets[2].subset, 1200.0);
    }

    #[test]
    fn test_buckets_are_deterministic() {
        let records = vec![
            purchase(2025, 5, 3, 15.0, PurchaseCategory::NewMonthlyCharge),
            purchase(2025, 6, 3, 25.0, PurchaseCategory::UnnecessaryImpulse),
        ];
        let reference = date(2025, 6, 10);
        assert_eq!(
            spending_buckets(&records, 6, reference),
            spending_buckets(&records, 6, reference)
        );
    }

    #[test]
    fn test_chart_ceiling() {
        assert_abs_diff_eq!(chart_ceiling(&[]), 1.1, epsilon = 1e-12);

        let records = vec![
            purchase(2025, 5, 3, 100.0, PurchaseCategory::Misc),
            purchase(2025, 6, 3, 40.0, PurchaseCategory::Misc),
        ];
        let buckets = spending_buckets(&records, 2, date(2025, 6, 10));
        assert_abs_diff_eq!(chart_ceiling(&buckets), 110.0, epsilon = 1e-9);
    }
}
