//! Lessons, onboarding personalization and quizzes

mod lessons;
mod content;
mod quiz;

pub use lessons::{
    default_lessons, tailor_lessons, LessonProgress, Onboarding, BEGINNER_MAX_LEVEL, LESSON_STEP,
    RENT_BUDGETING, TAX_BASICS, UNDERSTANDING_CREDIT,
};
pub use content::{
    module_questions, personalized_deck, personalized_module_questions, questions_for, QuizQuestion,
};
pub use quiz::{AnswerOutcome, QuizSession};
