//! RIASEC assessment module
//!
//! This module covers the whole assessment lifecycle: the question banks,
//! the interactive session state machine, the scorer that folds Likert
//! answers into per-type totals, and the store that persists the resulting
//! score sheet as CSV for the chat advisor to pick up.

pub mod questions;
pub mod scorer;
pub mod session;
pub mod store;

pub use questions::QuestionBank;
pub use scorer::score_answers;
pub use scorer::ScoreSheet;
pub use session::AssessmentSession;
pub use session::DEFAULT_ANSWER;
pub use store::ResultStore;

use serde::Deserialize;
use serde::Serialize;

/// The six Holland interest types, in canonical order.
///
/// The declaration order matters twice: questions map to types by
/// `index % 6`, and ties for the dominant type resolve to the earliest
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiasecType {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl RiasecType {
    /// All six types in canonical order
    pub const ALL: [RiasecType; 6] = [
        RiasecType::Realistic,
        RiasecType::Investigative,
        RiasecType::Artistic,
        RiasecType::Social,
        RiasecType::Enterprising,
        RiasecType::Conventional,
    ];

    /// Human-readable label, also used in the persisted CSV
    pub fn label(self) -> &'static str {
        match self {
            RiasecType::Realistic => "Realistic",
            RiasecType::Investigative => "Investigative",
            RiasecType::Artistic => "Artistic",
            RiasecType::Social => "Social",
            RiasecType::Enterprising => "Enterprising",
            RiasecType::Conventional => "Conventional",
        }
    }

    /// Parse a label as written by [`ResultStore`]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Realistic" => Some(RiasecType::Realistic),
            "Investigative" => Some(RiasecType::Investigative),
            "Artistic" => Some(RiasecType::Artistic),
            "Social" => Some(RiasecType::Social),
            "Enterprising" => Some(RiasecType::Enterprising),
            "Conventional" => Some(RiasecType::Conventional),
            _ => None,
        }
    }

    /// The type a question at `index` contributes to
    pub fn for_question(index: usize) -> Self {
        Self::ALL[index % 6]
    }
}

impl std::fmt::Display for RiasecType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
