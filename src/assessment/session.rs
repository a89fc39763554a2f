//! Interactive assessment session state
//!
//! A session walks one question bank front to back. Answers are recorded
//! per statement and kept when the user steps back, so revisiting a
//! statement shows the previous choice. Scoring only happens in
//! [`AssessmentSession::finalize`], and only once every statement has an
//! answer.

use super::scorer::score_answers;
use super::scorer::ScoreSheet;
use super::QuestionBank;

/// Likert midpoint, used by collection surfaces when the user just
/// presses through a statement
pub const DEFAULT_ANSWER: u8 = 3;

#[derive(Debug, Clone)]
pub struct AssessmentSession {
    bank: QuestionBank,
    current: usize,
    answers: Vec<Option<u8>>,
}

impl AssessmentSession {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            current: 0,
            answers: vec![None; bank.len()],
        }
    }

    pub fn bank(&self) -> QuestionBank {
        self.bank
    }

    /// Total number of statements in this session
    pub fn total(&self) -> usize {
        self.answers.len()
    }

    /// Zero-based index of the statement currently shown
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Text of the statement currently shown
    pub fn current_statement(&self) -> &'static str {
        self.bank.statements()[self.current]
    }

    /// Previously recorded answer for the current statement, if any
    pub fn current_answer(&self) -> Option<u8> {
        self.answers[self.current]
    }

    /// How many statements have an answer recorded
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// True once every statement has an answer
    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(|a| a.is_some())
    }

    /// Record an answer for the current statement and move to the next one.
    ///
    /// The cursor stays on the final statement once it is reached, so
    /// re-answering the last statement just overwrites it.
    pub fn record_answer(&mut self, value: i64) -> crate::Result<()> {
        if !(1..=5).contains(&value) {
            return Err(crate::CareerRagError::InvalidAnswer(value));
        }
        // Range check above keeps this cast lossless
        self.answers[self.current] = Some(value as u8);
        if self.current + 1 < self.answers.len() {
            self.current += 1;
        }
        Ok(())
    }

    /// Step back to the previous statement. Returns false at the first one.
    pub fn back(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Score the session once all statements are answered
    pub fn finalize(&self) -> crate::Result<ScoreSheet> {
        let unanswered = self.answers.iter().filter(|a| a.is_none()).count();
        if unanswered > 0 {
            return Err(crate::CareerRagError::IncompleteAssessment(unanswered));
        }
        let answers: Vec<u8> = self.answers.iter().map(|a| a.unwrap_or(0)).collect();
        Ok(score_answers(&answers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::RiasecType;

    #[test]
    fn test_fresh_session_starts_at_first_statement() {
        let session = AssessmentSession::new(QuestionBank::Short);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.total(), 12);
        assert_eq!(session.answered_count(), 0);
        assert!(!session.is_complete());
        assert_eq!(session.current_answer(), None);
    }

    #[test]
    fn test_answer_advances_cursor() {
        let mut session = AssessmentSession::new(QuestionBank::Short);
        session.record_answer(4).unwrap();
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn test_rejects_out_of_range_answers() {
        let mut session = AssessmentSession::new(QuestionBank::Short);
        assert!(session.record_answer(0).is_err());
        assert!(session.record_answer(6).is_err());
        assert!(session.record_answer(-3).is_err());
        // Nothing was recorded and the cursor did not move
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.answered_count(), 0);
    }

    #[test]
    fn test_back_preserves_previous_answer() {
        let mut session = AssessmentSession::new(QuestionBank::Short);
        session.record_answer(5).unwrap();
        session.record_answer(2).unwrap();
        assert!(session.back());
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.current_answer(), Some(2));
        assert!(session.back());
        assert_eq!(session.current_answer(), Some(5));
        // At the first statement, back is a no-op
        assert!(!session.back());
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_finalize_requires_all_answers() {
        let mut session = AssessmentSession::new(QuestionBank::Short);
        session.record_answer(3).unwrap();
        session.record_answer(3).unwrap();
        let err = session.finalize().unwrap_err();
        assert!(matches!(
            err,
            crate::CareerRagError::IncompleteAssessment(10)
        ));
    }

    #[test]
    fn test_full_walk_scores_like_the_scorer() {
        let answers: Vec<i64> = vec![5, 1, 2, 4, 3, 1, 5, 2, 2, 4, 3, 1];
        let mut session = AssessmentSession::new(QuestionBank::Short);
        for &a in &answers {
            session.record_answer(a).unwrap();
        }
        assert!(session.is_complete());
        // Cursor parks on the last statement rather than running past it
        assert_eq!(session.current_index(), session.total() - 1);

        let sheet = session.finalize().unwrap();
        let direct: Vec<u8> = answers.iter().map(|&a| a as u8).collect();
        assert_eq!(sheet, score_answers(&direct));
        assert_eq!(sheet.dominant(), RiasecType::Realistic);
    }

    #[test]
    fn test_reanswering_last_statement_overwrites() {
        let mut session = AssessmentSession::new(QuestionBank::Short);
        for _ in 0..12 {
            session.record_answer(3).unwrap();
        }
        let before = session.finalize().unwrap();
        session.record_answer(5).unwrap();
        let after = session.finalize().unwrap();
        assert_eq!(after.total(), before.total() + 2);
    }
}
