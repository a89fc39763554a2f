//! Prompt construction for the career advisor
//!
//! The wording here is deliberately stable: the advisor's persona, the
//! "I DON'T KNOW" escape hatch, and the condense instruction all shape how
//! the model behaves, so changes should be made with care.

use crate::assessment::ScoreSheet;

/// Persona shared by every generation call
pub const SYSTEM_PROMPT: &str = "You are an expert career advisor focused on the RIASEC personality test.\nYour job is to assist users in finding suitable careers based on their RIASEC personality types (Realistic, Investigative, Artistic, Social, Enterprising, and Conventional).\nIf you don't know the answer, say 'I DON'T KNOW'.";

/// Opening message for a fresh chat session
pub const GREETING: &str = "Hello there 👋!\n\nGood to see you, how may I help you today? Have you taken your RIASEC test? What is your personality? Feel free to ask me 😁\n\nps. If you haven't, there's a RIASEC assessment you can take here too :)";

/// Render a score sheet as a single readable line
pub fn scores_line(sheet: &ScoreSheet) -> String {
    let parts: Vec<String> = sheet
        .entries()
        .map(|(riasec_type, score)| format!("{riasec_type}: {score}"))
        .collect();
    parts.join(", ")
}

/// Prefix a user message with what is known about their RIASEC result.
///
/// With a saved result the advisor gets the actual scores; without one it
/// is nudged to ask about the user's type or point them at the test.
pub fn personalize(message: &str, scores: Option<&ScoreSheet>) -> String {
    let riasec_info = match scores {
        Some(sheet) => format!("Your RIASEC type scores are: {}.", scores_line(sheet)),
        None => "What is your RIASEC type? Have you known or do you need to take the test?"
            .to_string(),
    };
    format!("{riasec_info}\n\n{message}")
}

/// Build the prompt that rewrites a follow-up into a standalone question
pub fn condense_prompt(chat_history: &str, question: &str) -> String {
    format!(
        "Given the conversation (between User and Assistant) and a follow-up message from the User, \
transform the follow-up into an independent question that includes all relevant context from the \
previous chat history. Keep the question short. Example: \"What is the best career for someone \
with an Artistic score?\"\n\n\
<Chat History>\n{chat_history}\n\n\
<Follow Up Message>\n{question}\n\n\
<Standalone question>"
    )
}

/// Build the context-bearing instruction block for answer generation
pub fn context_prompt(context: &str) -> String {
    format!(
        "You are an expert career advisor guiding users based on RIASEC personality types. \
Use the RIASEC scores from the user's message to assist users in selecting careers. \
If no score is available, guide the user to take the test. \
If no score and no test and the user stated their RIASEC personality type, \
assist users in selecting careers based on their type.\n\n{context}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::score_answers;

    #[test]
    fn test_scores_line_lists_all_types_in_order() {
        let sheet = score_answers(&[5, 4, 3, 2, 1, 5]);
        assert_eq!(
            scores_line(&sheet),
            "Realistic: 5, Investigative: 4, Artistic: 3, Social: 2, Enterprising: 1, Conventional: 5"
        );
    }

    #[test]
    fn test_personalize_with_saved_scores() {
        let sheet = score_answers(&[3, 3, 3, 3, 3, 3]);
        let personalized = personalize("What suits me?", Some(&sheet));
        assert!(personalized.starts_with("Your RIASEC type scores are:"));
        assert!(personalized.ends_with("What suits me?"));
    }

    #[test]
    fn test_personalize_without_scores_asks_about_type() {
        let personalized = personalize("What suits me?", None);
        assert!(personalized.starts_with("What is your RIASEC type?"));
        assert!(personalized.contains("What suits me?"));
    }

    #[test]
    fn test_condense_prompt_frames_history_and_question() {
        let prompt = condense_prompt("User: hi\nAssistant: hello", "and for Social?");
        assert!(prompt.contains("<Chat History>\nUser: hi\nAssistant: hello"));
        assert!(prompt.contains("<Follow Up Message>\nand for Social?"));
        assert!(prompt.trim_end().ends_with("<Standalone question>"));
    }

    #[test]
    fn test_context_prompt_embeds_context() {
        let prompt = context_prompt("[Source 1]\nNurses help people.");
        assert!(prompt.contains("[Source 1]\nNurses help people."));
        assert!(prompt.contains("guide the user to take the test"));
    }
}
