//! Quiz session state: current question, answers and score

use super::content::QuizQuestion;

/// Outcome of answering the current question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub answer_index: usize,
}

/// Walks through a list of questions one at a time
///
/// Only the first answer to each question counts toward the score.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    index: usize,
    selected: Option<usize>,
    score: usize,
    finished: bool,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            index: 0,
            selected: None,
            score: 0,
            finished: false,
        }
    }

    pub fn current(&self) -> Option<&QuizQuestion> {
        if self.finished {
            return None;
        }
        self.questions.get(self.index)
    }

    /// Zero-based position of the current question
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Answer the current question
    ///
    /// Returns `None` when there is no current question or it was already answered.
    pub fn answer(&mut self, choice: usize) -> Option<AnswerOutcome> {
        if self.selected.is_some() {
            return None;
        }
        let question = self.current()?;
        let outcome = AnswerOutcome {
            correct: question.is_correct(choice),
            answer_index: question.answer_index,
        };

        self.selected = Some(choice);
        if outcome.correct {
            self.score += 1;
        }
        Some(outcome)
    }

    /// Move to the next question, or finish after the last one
    pub fn advance(&mut self) {
        if self.questions.is_empty() {
            return;
        }
        if self.index + 1 < self.questions.len() {
            self.index += 1;
            self.selected = None;
        } else {
            self.finished = true;
        }
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learn::{module_questions, TAX_BASICS};

    #[test]
    fn test_full_run() {
        let mut session = QuizSession::new(module_questions(TAX_BASICS));
        assert_eq!(session.len(), 3);

        let first = session.answer(0).unwrap();
        assert!(first.correct);
        session.advance();

        let second = session.answer(2).unwrap();
        assert!(!second.correct);
        assert_eq!(second.answer_index, 0);
        session.advance();

        assert_eq!(session.position(), 2);
        session.answer(0);
        session.advance();

        assert!(session.is_finished());
        assert!(session.current().is_none());
        assert_eq!(session.score(), 2);
    }

    #[test]
    fn test_only_first_answer_counts() {
        let mut session = QuizSession::new(module_questions(TAX_BASICS));
        assert!(!session.answer(3).unwrap().correct);
        assert!(session.answer(0).is_none());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_empty_session() {
        let mut session = QuizSession::new(Vec::new());
        assert!(session.is_empty());
        assert!(session.current().is_none());
        assert!(session.answer(0).is_none());
        session.advance();
        assert!(!session.is_finished());
        assert_eq!(session.score(), 0);
    }
}
