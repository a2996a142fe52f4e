//! Data model for purchases, income, savings plans and the user profile

mod data;

pub use data::{
    first_of_month, IncomeEntry, PlanKind, PurchaseCategory, SavingsPlan, Transaction, UserProfile,
};
