use careerrag::assessment::AssessmentSession;
use careerrag::assessment::QuestionBank;
use careerrag::assessment::ResultStore;
use careerrag::assessment::RiasecType;
use careerrag::assessment::ScoreSheet;
use careerrag::chat::prompts;
use careerrag::Result;

/// Walk a whole bank with a repeating answer pattern
fn walk_bank(bank: QuestionBank, pattern: &[i64]) -> AssessmentSession {
    let mut session = AssessmentSession::new(bank);
    for i in 0..session.total() {
        session.record_answer(pattern[i % pattern.len()]).unwrap();
    }
    session
}

#[test]
fn test_full_bank_walk_saves_and_reloads() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("docs").join("riasec_scores.csv");

    // 42 statements cycle through the six types, so a period-6 answer
    // pattern pins each type to a known total: 7 answers of one value each
    let session = walk_bank(QuestionBank::Full, &[5, 4, 3, 2, 1, 1]);
    assert!(session.is_complete());
    let sheet = session.finalize()?;

    assert_eq!(sheet.get(RiasecType::Realistic), 35);
    assert_eq!(sheet.get(RiasecType::Investigative), 28);
    assert_eq!(sheet.get(RiasecType::Artistic), 21);
    assert_eq!(sheet.get(RiasecType::Social), 14);
    assert_eq!(sheet.get(RiasecType::Enterprising), 7);
    assert_eq!(sheet.get(RiasecType::Conventional), 7);
    assert_eq!(sheet.dominant(), RiasecType::Realistic);

    let store = ResultStore::new(&path);
    store.save(&sheet)?;
    let loaded = store.load()?.expect("result should exist after save");
    assert_eq!(loaded, sheet);

    let content = std::fs::read_to_string(&path)?;
    assert_eq!(
        content,
        "Type,Score\nRealistic,35\nInvestigative,28\nArtistic,21\nSocial,14\nEnterprising,7\nConventional,7\n"
    );

    Ok(())
}

#[test]
fn test_short_bank_covers_each_type_twice() -> Result<()> {
    let session = walk_bank(QuestionBank::Short, &[3]);
    let sheet = session.finalize()?;

    // 12 statements over 6 types means exactly two answers per type
    for (_, score) in sheet.entries() {
        assert_eq!(score, 6);
    }
    assert_eq!(sheet.total(), 36);
    // All-equal scores fall back to the first type in canonical order
    assert_eq!(sheet.dominant(), RiasecType::Realistic);

    Ok(())
}

#[test]
fn test_revising_answers_then_resaving_overwrites() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let store = ResultStore::new(dir.path().join("riasec_scores.csv"));

    let mut session = walk_bank(QuestionBank::Short, &[2]);
    store.save(&session.finalize()?)?;

    // Step back to the first statement and walk forward with new answers
    while session.back() {}
    for _ in 0..session.total() {
        session.record_answer(5).unwrap();
    }
    let revised = session.finalize()?;
    store.save(&revised)?;

    let loaded = store.load()?.unwrap();
    assert_eq!(loaded, revised);
    assert_eq!(loaded.total(), 5 * 12);

    Ok(())
}

#[test]
fn test_saved_scores_flow_into_personalization() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let store = ResultStore::new(dir.path().join("riasec_scores.csv"));

    store.save(&ScoreSheet::from_totals([7, 14, 21, 28, 35, 10]))?;
    let loaded = store.load()?.unwrap();

    let personalized = prompts::personalize("Which careers fit me?", Some(&loaded));
    assert!(personalized.starts_with(
        "Your RIASEC type scores are: Realistic: 7, Investigative: 14, Artistic: 21, \
         Social: 28, Enterprising: 35, Conventional: 10."
    ));
    assert!(personalized.ends_with("Which careers fit me?"));

    Ok(())
}

#[test]
fn test_unanswered_user_gets_nudged_to_take_the_test() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let store = ResultStore::new(dir.path().join("riasec_scores.csv"));

    // No save has happened, so the advisor has no scores to cite
    assert!(store.load()?.is_none());
    let personalized = prompts::personalize("Which careers fit me?", None);
    assert!(personalized.starts_with("What is your RIASEC type?"));

    Ok(())
}

#[test]
fn test_question_bank_selection() {
    assert_eq!(QuestionBank::parse("full"), Some(QuestionBank::Full));
    assert_eq!(QuestionBank::parse("Short"), Some(QuestionBank::Short));
    assert_eq!(QuestionBank::parse("long"), None);
    assert_eq!(QuestionBank::Full.len(), 42);
    assert_eq!(QuestionBank::Short.len(), 12);
}
