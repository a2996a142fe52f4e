//! Lesson modules, progress tracking and onboarding-driven tailoring

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::model::UserProfile;

/// Progress added each time a lesson step is completed
pub const LESSON_STEP: f64 = 0.25;

/// Experience levels at or below this are treated as beginners
pub const BEGINNER_MAX_LEVEL: u8 = 2;

pub const TAX_BASICS: &str = "Tax Basics";
pub const RENT_BUDGETING: &str = "Budgeting for U.S. Rent";
pub const UNDERSTANDING_CREDIT: &str = "Understanding Credit";

/// A lesson module and how far the user has worked through it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonProgress {
    pub id: Uuid,
    pub title: String,
    pub description: String,

    /// Completed fraction in [0, 1]
    pub progress: f64,
}

impl LessonProgress {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            progress: 0.0,
        }
    }

    /// Mark one step complete; progress never exceeds 1.0
    pub fn advance(&mut self) -> f64 {
        self.progress = (self.progress + LESSON_STEP).min(1.0);
        self.progress
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Modules offered before the user has personalized anything
pub fn default_lessons() -> Vec<LessonProgress> {
    vec![
        LessonProgress::new(TAX_BASICS, "Understand filing, brackets, and credits."),
        LessonProgress::new(RENT_BUDGETING, "Plan rent, utilities, and deposits."),
        LessonProgress::new(UNDERSTANDING_CREDIT, "Build credit and avoid pitfalls."),
    ]
}

/// Build a fresh lesson list for a profile
///
/// Newcomers and beginners get tax and rent modules ahead of credit. Every
/// lesson starts at zero progress.
pub fn tailor_lessons(profile: &UserProfile) -> Vec<LessonProgress> {
    let mut lessons = Vec::new();

    let is_immigrant = profile.is_immigrant_family == Some(true);
    let level = profile.experience_level.unwrap_or(1);

    if is_immigrant || level <= BEGINNER_MAX_LEVEL {
        lessons.push(LessonProgress::new(TAX_BASICS, "Bullet points on policies and filing."));
        lessons.push(LessonProgress::new(RENT_BUDGETING, "Rent by location, % income."));
    }
    lessons.push(LessonProgress::new(
        UNDERSTANDING_CREDIT,
        "Building credit; impacts car/home buying.",
    ));

    lessons
}

/// Answers submitted through the onboarding questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Onboarding {
    pub is_immigrant: bool,
    pub experience_level: u8,
}

impl Onboarding {
    pub fn new(is_immigrant: bool, experience_level: u8) -> Result<Self> {
        if !(1..=4).contains(&experience_level) {
            return Err(Error::InvalidExperienceLevel(experience_level));
        }
        Ok(Self {
            is_immigrant,
            experience_level,
        })
    }

    /// Overwrite the profile and replace the lesson list wholesale
    ///
    /// Existing progress is discarded, even for modules that reappear.
    pub fn apply(&self, profile: &mut UserProfile, lessons: &mut Vec<LessonProgress>) {
        *profile = UserProfile {
            is_immigrant_family: Some(self.is_immigrant),
            experience_level: Some(self.experience_level),
            personalization_complete: Some(true),
        };
        *lessons = tailor_lessons(profile);
    }
}
