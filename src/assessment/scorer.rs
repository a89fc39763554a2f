//! Scoring for RIASEC answers
//!
//! Answers are folded positionally: the answer to statement `i` is added
//! to the type at `i % 6` of the canonical order. The scorer itself does
//! not validate answer values; collection surfaces reject anything outside
//! 1-5 before it gets here.

use serde::Deserialize;
use serde::Serialize;

use super::RiasecType;

/// Per-type score totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreSheet {
    scores: [u32; 6],
}

impl ScoreSheet {
    /// An all-zero sheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sheet from explicit per-type totals in canonical order
    pub fn from_totals(scores: [u32; 6]) -> Self {
        Self { scores }
    }

    /// Score for one type
    pub fn get(&self, riasec_type: RiasecType) -> u32 {
        self.scores[riasec_type as usize]
    }

    /// Add to one type's total
    pub fn add(&mut self, riasec_type: RiasecType, value: u32) {
        self.scores[riasec_type as usize] += value;
    }

    /// Sum over all six types
    pub fn total(&self) -> u32 {
        self.scores.iter().sum()
    }

    /// `(type, score)` pairs in canonical order
    pub fn entries(&self) -> impl Iterator<Item = (RiasecType, u32)> + '_ {
        RiasecType::ALL.into_iter().map(|t| (t, self.get(t)))
    }

    /// The highest-scoring type.
    ///
    /// Ties resolve to the type that comes first in canonical order, so an
    /// all-zero sheet reports `Realistic`.
    pub fn dominant(&self) -> RiasecType {
        let mut best = RiasecType::Realistic;
        for t in RiasecType::ALL {
            if self.get(t) > self.get(best) {
                best = t;
            }
        }
        best
    }
}

/// Fold a slice of Likert answers into a score sheet.
///
/// Statement `i` contributes its answer value to the type at `i % 6`.
/// An empty slice yields the all-zero sheet.
pub fn score_answers(answers: &[u8]) -> ScoreSheet {
    let mut sheet = ScoreSheet::new();
    for (i, &answer) in answers.iter().enumerate() {
        sheet.add(RiasecType::for_question(i), u32::from(answer));
    }
    sheet
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_answers_score_zero() {
        let sheet = score_answers(&[]);
        assert_eq!(sheet.total(), 0);
        for t in RiasecType::ALL {
            assert_eq!(sheet.get(t), 0);
        }
        assert_eq!(sheet.dominant(), RiasecType::Realistic);
    }

    #[test]
    fn test_single_answer_goes_to_realistic() {
        let sheet = score_answers(&[4]);
        assert_eq!(sheet.get(RiasecType::Realistic), 4);
        assert_eq!(sheet.total(), 4);
        assert_eq!(sheet.dominant(), RiasecType::Realistic);
    }

    #[test]
    fn test_positional_assignment_wraps() {
        // Two full cycles: statement 6 lands on Realistic again
        let answers = [1, 2, 3, 4, 5, 1, 5, 1, 1, 1, 1, 1];
        let sheet = score_answers(&answers);
        assert_eq!(sheet.get(RiasecType::Realistic), 6);
        assert_eq!(sheet.get(RiasecType::Investigative), 3);
        assert_eq!(sheet.get(RiasecType::Artistic), 4);
        assert_eq!(sheet.get(RiasecType::Social), 5);
        assert_eq!(sheet.get(RiasecType::Enterprising), 6);
        assert_eq!(sheet.get(RiasecType::Conventional), 2);
    }

    #[test]
    fn test_total_conserves_answer_sum() {
        let answers = [3, 5, 1, 2, 4, 3, 5, 5, 2];
        let sheet = score_answers(&answers);
        let answer_sum: u32 = answers.iter().map(|&a| u32::from(a)).sum();
        assert_eq!(sheet.total(), answer_sum);
    }

    #[test]
    fn test_dominant_prefers_clear_winner() {
        let sheet = score_answers(&[5, 1, 1, 1, 1, 1]);
        assert_eq!(sheet.dominant(), RiasecType::Realistic);

        let sheet = score_answers(&[1, 1, 1, 5, 1, 1]);
        assert_eq!(sheet.dominant(), RiasecType::Social);
    }

    #[test]
    fn test_dominant_tie_breaks_to_earliest() {
        // Investigative and Social tie; Investigative comes first
        let sheet = ScoreSheet::from_totals([1, 7, 2, 7, 3, 4]);
        assert_eq!(sheet.dominant(), RiasecType::Investigative);

        // All equal resolves to Realistic
        let sheet = ScoreSheet::from_totals([3, 3, 3, 3, 3, 3]);
        assert_eq!(sheet.dominant(), RiasecType::Realistic);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let answers = [2, 4, 1, 5, 3, 2, 4, 4, 1, 2, 5, 3];
        assert_eq!(score_answers(&answers), score_answers(&answers));
    }

    #[test]
    fn test_uniform_answers_tie_across_all_types() {
        // 12 statements of 3 put 6 on every type
        let answers = [3u8; 12];
        let sheet = score_answers(&answers);
        for t in RiasecType::ALL {
            assert_eq!(sheet.get(t), 6);
        }
        assert_eq!(sheet.dominant(), RiasecType::Realistic);
    }
}
