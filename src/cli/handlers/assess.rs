//! Interactive RIASEC assessment handler

use std::io;

use crate::assessment::AssessmentSession;
use crate::assessment::QuestionBank;
use crate::assessment::ResultStore;
use crate::assessment::DEFAULT_ANSWER;
use crate::cli::output::print_info;
use crate::cli::output::print_prompt;
use crate::cli::output::print_score_sheet;
use crate::cli::output::print_success;
use crate::cli::output::print_warning;
use crate::AppConfig;
use crate::CareerRagError;
use crate::Result;

/// What a line of user input means while answering statements
#[derive(Debug, PartialEq, Eq)]
enum AnswerInput {
    Value(i64),
    Keep,
    Back,
    Quit,
    Invalid,
}

fn parse_answer_input(line: &str) -> AnswerInput {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return AnswerInput::Keep;
    }
    match trimmed.to_lowercase().as_str() {
        "b" | "back" => AnswerInput::Back,
        "q" | "quit" | "exit" => AnswerInput::Quit,
        other => match other.parse::<i64>() {
            Ok(value) => AnswerInput::Value(value),
            Err(_) => AnswerInput::Invalid,
        },
    }
}

/// Handle assess command: walk the chosen question bank on stdin, score
/// the answers and save the result unless `--no-save` was given
pub async fn handle_assess_command(config: &AppConfig, bank: &str, no_save: bool) -> Result<()> {
    let bank = QuestionBank::parse(bank).ok_or_else(|| {
        CareerRagError::Custom(format!(
            "Unknown question bank '{bank}'. Use 'full' or 'short'."
        ))
    })?;

    let mut session = AssessmentSession::new(bank);

    println!("🧭 RIASEC Assessment ({} statements)", session.total());
    println!("{}\n", "=".repeat(36));
    print_info("Rate each statement from 1 (strongly dislike) to 5 (strongly enjoy).");
    print_info(&format!(
        "Press Enter to keep the shown answer (default {DEFAULT_ANSWER}), 'b' to go back, 'q' to quit."
    ));
    println!();

    loop {
        let index = session.current_index();
        let shown = session.current_answer().unwrap_or(DEFAULT_ANSWER);
        print_prompt(&format!(
            "[{}/{}] {} [{}]: ",
            index + 1,
            session.total(),
            session.current_statement(),
            shown
        ));

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        match parse_answer_input(&input) {
            AnswerInput::Keep => {
                session.record_answer(i64::from(shown))?;
            }
            AnswerInput::Value(value) => {
                if let Err(e) = session.record_answer(value) {
                    print_warning(&e.to_string());
                    continue;
                }
            }
            AnswerInput::Back => {
                if !session.back() {
                    print_warning("Already at the first statement.");
                }
                continue;
            }
            AnswerInput::Quit => {
                print_info("Assessment abandoned, nothing saved.");
                return Ok(());
            }
            AnswerInput::Invalid => {
                print_warning("Please answer with a number from 1 to 5.");
                continue;
            }
        }

        // Finished only when the final statement itself was just answered,
        // so stepping back mid-run always walks forward to the end again
        if session.is_complete() && index == session.total() - 1 {
            break;
        }
    }

    let sheet = session.finalize()?;
    println!();
    print_score_sheet(&sheet);
    println!();

    if no_save {
        print_info("Result not saved (--no-save).");
    } else {
        let store = ResultStore::new(config.results_path());
        store.save(&sheet)?;
        print_success(&format!("Result saved to {}", config.results_path()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answer_input() {
        assert_eq!(parse_answer_input("4\n"), AnswerInput::Value(4));
        assert_eq!(parse_answer_input("  2  "), AnswerInput::Value(2));
        assert_eq!(parse_answer_input("\n"), AnswerInput::Keep);
        assert_eq!(parse_answer_input(""), AnswerInput::Keep);
        assert_eq!(parse_answer_input("b"), AnswerInput::Back);
        assert_eq!(parse_answer_input("BACK"), AnswerInput::Back);
        assert_eq!(parse_answer_input("q"), AnswerInput::Quit);
        assert_eq!(parse_answer_input("exit"), AnswerInput::Quit);
        assert_eq!(parse_answer_input("seven"), AnswerInput::Invalid);
    }

    #[test]
    fn test_out_of_range_numbers_parse_as_values() {
        // Range checking belongs to the session, not the parser
        assert_eq!(parse_answer_input("9"), AnswerInput::Value(9));
        assert_eq!(parse_answer_input("-1"), AnswerInput::Value(-1));
    }
}
