//! JSON-on-disk persistence, one file per collection

use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::state::AppState;
use crate::error::Result;

pub const PURCHASES_FILE: &str = "purchases.json";
pub const INCOMES_FILE: &str = "incomes.json";
pub const PLANS_FILE: &str = "portfolios.json";
pub const LESSONS_FILE: &str = "lessons.json";
pub const PROFILE_FILE: &str = "profile.json";

/// Application state bound to a data directory
#[derive(Debug)]
pub struct Store {
    dir: PathBuf,
    state: AppState,
}

impl Store {
    /// Open the store in `dir`, seeding demo data dated relative to `today` if it holds no records
    pub fn open_at<P: AsRef<Path>>(dir: P, today: NaiveDate) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;

        let mut store = Self {
            state: load_state(&dir),
            dir,
        };

        if store.state.is_empty() {
            info!("No records in {}, seeding demo data", store.dir.display());
            store.state = AppState::seed(today);
            store.save()?;
        }

        Ok(store)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Write every collection to disk
    pub fn save(&self) -> Result<()> {
        save_file(&self.dir.join(PURCHASES_FILE), &self.state.purchases)?;
        save_file(&self.dir.join(INCOMES_FILE), &self.state.incomes)?;
        save_file(&self.dir.join(PLANS_FILE), &self.state.plans)?;
        save_file(&self.dir.join(LESSONS_FILE), &self.state.lessons)?;
        save_file(&self.dir.join(PROFILE_FILE), &self.state.profile)?;
        debug!("Saved state to {}", self.dir.display());
        Ok(())
    }
}

/// Load every collection from `dir`; missing or unreadable files load as empty
pub fn load_state(dir: &Path) -> AppState {
    let state = AppState {
        purchases: load_file(&dir.join(PURCHASES_FILE)),
        incomes: load_file(&dir.join(INCOMES_FILE)),
        plans: load_file(&dir.join(PLANS_FILE)),
        lessons: load_file(&dir.join(LESSONS_FILE)),
        profile: load_file(&dir.join(PROFILE_FILE)),
    };
    debug!(
        "Loaded {} purchases, {} incomes, {} plans, {} lessons from {}",
        state.purchases.len(),
        state.incomes.len(),
        state.plans.len(),
        state.lessons.len(),
        dir.display()
    );
    state
}

fn load_file<T: DeserializeOwned + Default>(path: &Path) -> T {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return T::default(),
        Err(e) => {
            warn!("Could not read {}: {}", path.display(), e);
            return T::default();
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring corrupt {}: {}", path.display(), e);
            T::default()
        }
    }
}

/// Write `value` as JSON via a temporary file so readers never see a partial write
fn save_file<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    let json = serde_json::to_vec_pretty(value)?;
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
