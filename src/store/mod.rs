//! Application state container and its JSON persistence

mod state;
mod files;

pub use state::AppState;
pub use files::{
    load_state, Store, INCOMES_FILE, LESSONS_FILE, PLANS_FILE, PROFILE_FILE, PURCHASES_FILE,
};
