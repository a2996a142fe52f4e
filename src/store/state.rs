//! In-memory application state and the mutations the front end performs on it

use chrono::{Days, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aggregate::{debt_to_income_ratio, spending_buckets, MonthlyBucket};
use crate::error::{Error, Result};
use crate::learn::{default_lessons, LessonProgress, Onboarding};
use crate::model::{IncomeEntry, PlanKind, PurchaseCategory, SavingsPlan, Transaction, UserProfile};

/// All records owned by the application
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub purchases: Vec<Transaction>,
    pub incomes: Vec<IncomeEntry>,
    pub plans: Vec<SavingsPlan>,
    pub lessons: Vec<LessonProgress>,
    pub profile: UserProfile,
}

fn days_before(today: NaiveDate, days: u64) -> NaiveDate {
    today - Days::new(days)
}

fn require_positive(amount: f64) -> Result<()> {
    // Written this way so NaN is rejected too
    if !(amount > 0.0) {
        return Err(Error::InvalidAmount(amount));
    }
    Ok(())
}

fn require_non_negative(amount: f64) -> Result<()> {
    if amount.is_nan() || amount < 0.0 {
        return Err(Error::InvalidAmount(amount));
    }
    Ok(())
}

fn take_by_id<T>(items: &mut Vec<T>, id: Uuid, kind: &'static str, key: impl Fn(&T) -> Uuid) -> Result<T> {
    let idx = items
        .iter()
        .position(|item| key(item) == id)
        .ok_or(Error::NotFound { kind, id })?;
    Ok(items.remove(idx))
}

impl AppState {
    /// Demo data shown on first launch, dated relative to `today`
    pub fn seed(today: NaiveDate) -> Self {
        let incomes = vec![
            IncomeEntry::new(1000.0, days_before(today, 120)),
            IncomeEntry::new(1200.0, days_before(today, 30)),
        ];

        let purchases = vec![
            Transaction::new(
                days_before(today, 20).and_time(NaiveTime::MIN),
                49.99,
                PurchaseCategory::UnnecessaryImpulse,
            )
            .with_platform("Instagram")
            .with_note("LED lights ad"),
            Transaction::new(
                days_before(today, 10).and_time(NaiveTime::MIN),
                12.50,
                PurchaseCategory::Necessary,
            )
            .with_note("Groceries"),
        ];

        let plans = vec![
            SavingsPlan::new("Roth IRA", PlanKind::RothIra, 100.0, 0.07, 2019),
            SavingsPlan::new("Savings", PlanKind::Savings, 50.0, 0.02, 2021),
        ];

        Self {
            purchases,
            incomes,
            plans,
            lessons: default_lessons(),
            profile: UserProfile::default(),
        }
    }

    /// True when there are no purchases, incomes or plans
    pub fn is_empty(&self) -> bool {
        self.purchases.is_empty() && self.incomes.is_empty() && self.plans.is_empty()
    }

    /// Clear everything and reload the demo data
    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::seed(today);
    }

    pub fn log_purchase(&mut self, purchase: Transaction) -> Result<Uuid> {
        require_positive(purchase.amount)?;
        let id = purchase.id;
        self.purchases.push(purchase);
        Ok(id)
    }

    pub fn remove_purchase(&mut self, id: Uuid) -> Result<Transaction> {
        take_by_id(&mut self.purchases, id, "purchase", |p| p.id)
    }

    pub fn add_income(&mut self, amount: f64, effective: NaiveDate) -> Result<Uuid> {
        require_positive(amount)?;
        let income = IncomeEntry::new(amount, effective);
        let id = income.id;
        self.incomes.push(income);
        Ok(id)
    }

    pub fn remove_income(&mut self, id: Uuid) -> Result<IncomeEntry> {
        take_by_id(&mut self.incomes, id, "income", |i| i.id)
    }

    pub fn add_plan(&mut self, plan: SavingsPlan) -> Result<Uuid> {
        require_non_negative(plan.monthly_contribution)?;
        let id = plan.id;
        self.plans.push(plan);
        Ok(id)
    }

    /// Replace a plan in place, matched by id
    pub fn update_plan(&mut self, plan: SavingsPlan) -> Result<()> {
        require_non_negative(plan.monthly_contribution)?;
        let slot = self
            .plans
            .iter_mut()
            .find(|p| p.id == plan.id)
            .ok_or(Error::NotFound { kind: "plan", id: plan.id })?;
        *slot = plan;
        Ok(())
    }

    pub fn remove_plan(&mut self, id: Uuid) -> Result<SavingsPlan> {
        take_by_id(&mut self.plans, id, "plan", |p| p.id)
    }

    pub fn plan(&self, id: Uuid) -> Option<&SavingsPlan> {
        self.plans.iter().find(|p| p.id == id)
    }

    /// Complete one step of a lesson, returning its new progress
    pub fn advance_lesson(&mut self, id: Uuid) -> Result<f64> {
        let lesson = self
            .lessons
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(Error::NotFound { kind: "lesson", id })?;
        Ok(lesson.advance())
    }

    /// Apply onboarding answers, regenerating the lesson list
    pub fn personalize(&mut self, onboarding: Onboarding) {
        onboarding.apply(&mut self.profile, &mut self.lessons);
    }

    pub fn debt_to_income_ratio(&self) -> f64 {
        debt_to_income_ratio(&self.purchases, &self.incomes)
    }

    /// Trailing monthly spending with impulse purchases broken out
    pub fn spending_buckets(&self, months_back: u32, reference: NaiveDate) -> Vec<MonthlyBucket> {
        spending_buckets(&self.purchases, months_back, reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_seed_contents() {
        let state = AppState::seed(today());
        assert_eq!(state.incomes.len(), 2);
        assert_eq!(state.purchases.len(), 2);
        assert_eq!(state.plans.len(), 2);
        assert_eq!(state.lessons.len(), 3);
        assert!(!state.is_empty());

        assert_eq!(state.incomes[1].effective_month, NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
        assert_eq!(state.purchases[0].platform.as_deref(), Some("Instagram"));
        assert!(state.purchases[0].impulsive);
        assert!(!state.purchases[1].impulsive);
    }

    #[test]
    fn test_seed_ratio() {
        let state = AppState::seed(today());
        assert_abs_diff_eq!(state.debt_to_income_ratio(), 49.99 / 2200.0, epsilon = 1e-12);
    }

    #[test]
    fn test_log_purchase_rejects_non_positive() {
        let mut state = AppState::default();
        let ts = today().and_time(NaiveTime::MIN);

        for amount in [0.0, -5.0, f64::NAN] {
            let result = state.log_purchase(Transaction::new(ts, amount, PurchaseCategory::Misc));
            assert!(matches!(result, Err(Error::InvalidAmount(_))));
        }
        assert!(state.purchases.is_empty());

        let id = state
            .log_purchase(Transaction::new(ts, 500.0, PurchaseCategory::UnnecessaryImpulse))
            .unwrap();
        assert_eq!(state.purchases[0].id, id);
    }

    #[test]
    fn test_income_add_and_remove() {
        let mut state = AppState::default();
        assert!(state.add_income(0.0, today()).is_err());

        let id = state.add_income(3000.0, today()).unwrap();
        assert_eq!(state.incomes[0].effective_month, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());

        let removed = state.remove_income(id).unwrap();
        assert_abs_diff_eq!(removed.amount, 3000.0);
        assert!(matches!(
            state.remove_income(id),
            Err(Error::NotFound { kind: "income", .. })
        ));
    }

    #[test]
    fn test_update_plan_in_place() {
        let mut state = AppState::seed(today());
        let mut plan = state.plans[0].clone();
        plan.monthly_contribution = 250.0;
        plan.name = "Retirement".to_string();

        state.update_plan(plan.clone()).unwrap();
        assert_eq!(state.plans[0], plan);
        assert_eq!(state.plans.len(), 2);

        let stranger = SavingsPlan::new("Other", PlanKind::Other, 10.0, 0.0, 2025);
        assert!(state.update_plan(stranger).is_err());

        let mut negative = plan;
        negative.monthly_contribution = -1.0;
        assert!(matches!(state.update_plan(negative), Err(Error::InvalidAmount(_))));
    }

    #[test]
    fn test_advance_lesson_and_personalize() {
        let mut state = AppState::seed(today());
        let id = state.lessons[0].id;
        assert_abs_diff_eq!(state.advance_lesson(id).unwrap(), 0.25);
        assert!(state.advance_lesson(Uuid::new_v4()).is_err());

        state.personalize(Onboarding::new(false, 4).unwrap());
        assert_eq!(state.lessons.len(), 1);
        assert!(state.profile.is_personalized());
    }

    #[test]
    fn test_reset_reseeds() {
        let mut state = AppState::seed(today());
        state.personalize(Onboarding::new(true, 3).unwrap());
        state.purchases.clear();
        state.plans.clear();

        state.reset(today());
        assert_eq!(state.purchases.len(), 2);
        assert_eq!(state.plans.len(), 2);
        assert_eq!(state.profile, UserProfile::default());
    }
}
