//! Question banks for the RIASEC assessment
//!
//! Two banks are available: the full 42-statement inventory and a short
//! 12-statement screener. Both are laid out so that statement `i` scores
//! the type at position `i % 6` of the canonical order, which is what the
//! scorer relies on.

use serde::Deserialize;
use serde::Serialize;

/// Full 42-statement inventory
pub const FULL_BANK: [&str; 42] = [
    "I like to work on cars",
    "I like to do puzzles",
    "I am good at working independently",
    "I like to work in teams",
    "I am an ambitious person, I set goals for myself",
    "I like to organize things, (files, desks/offices)",
    "I like to build things",
    "I like to do experiments",
    "I like to read about art and music",
    "I like to teach or train people",
    "I like to try to influence or persuade people",
    "I like to have clear instructions to follow",
    "I like to take care of animals",
    "I enjoy science",
    "I enjoy creative writing",
    "I like trying to help people solve their problems",
    "I like selling things",
    "I wouldn't mind working 8 hours per day in an office",
    "I like putting things together or assembling things",
    "I enjoy trying to figure out how things work",
    "I am a creative person",
    "I am interested in healing people",
    "I am quick to take on new responsibilities",
    "I pay attention to details",
    "I like to cook",
    "I like to analyze things (problems/ situations)",
    "I like to play instruments or sing",
    "I enjoy learning about other cultures",
    "I would like to start my own business",
    "I like to do filing or typing",
    "I am a practical person",
    "I like working with numbers or charts",
    "I like acting in plays",
    "I like to get into discussions about issues",
    "I like to lead",
    "I am good at keeping records of my work",
    "I like working outdoors",
    "I am good at math",
    "I like to draw",
    "I like helping people",
    "I like to give speeches",
    "I would like to work in an office",
];

/// Short 12-statement screener
pub const SHORT_BANK: [&str; 12] = [
    "I like working with tools or machines.",
    "I enjoy studying complex problems.",
    "I like creating art or music.",
    "I enjoy helping others and teaching.",
    "I like persuading others to my viewpoint.",
    "I enjoy organizing information and details.",
    "I prefer working outdoors rather than in an office.",
    "I am curious and enjoy learning new things.",
    "I enjoy performing or expressing myself creatively.",
    "I like planning and following structured activities.",
    "I am good at leading and managing others.",
    "I enjoy working with people in groups.",
];

/// Which statement bank an assessment runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionBank {
    Full,
    Short,
}

impl QuestionBank {
    /// The statements of this bank, in asking order
    pub fn statements(self) -> &'static [&'static str] {
        match self {
            QuestionBank::Full => &FULL_BANK,
            QuestionBank::Short => &SHORT_BANK,
        }
    }

    /// Number of statements in this bank
    pub fn len(self) -> usize {
        self.statements().len()
    }

    pub fn is_empty(self) -> bool {
        self.statements().is_empty()
    }

    /// Parse a bank name from CLI input
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "full" => Some(QuestionBank::Full),
            "short" => Some(QuestionBank::Short),
            _ => None,
        }
    }
}

impl std::fmt::Display for QuestionBank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionBank::Full => write!(f, "full"),
            QuestionBank::Short => write!(f, "short"),
        }
    }
}
