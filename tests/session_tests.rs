use wordguess::core::{GameError, GameSession, GameStatus, SessionSnapshot};

fn playing(word: &str) -> GameSession {
    GameSession::begin(word, 1, 0).unwrap()
}

fn with_budget(word: &str, score: u32, attempts: u32) -> GameSession {
    let mut snap = playing(word).snapshot();
    snap.score = score;
    snap.attempts_remaining = attempts;
    GameSession::from_snapshot(snap)
}

#[test]
fn new_session_starts_with_full_budgets() {
    let session = playing("cat");
    let snap = session.snapshot();
    assert_eq!(snap.secret_word, "CAT");
    assert_eq!(snap.score, 100);
    assert_eq!(snap.attempts_remaining, 10);
    assert_eq!(snap.status, GameStatus::InProgress);
    assert!(snap.guess_history.is_empty());
    assert_eq!(snap.hints_used, 0);
    assert!(!snap.word_length_revealed);
}

#[test]
fn wrong_guess_costs_points_and_an_attempt() {
    let mut session = playing("CAT");
    let outcome = session.submit_guess("dog").unwrap();
    assert!(!outcome.correct);
    assert_eq!(outcome.snapshot.score, 90);
    assert_eq!(outcome.snapshot.attempts_remaining, 9);
    assert_eq!(outcome.snapshot.guess_history, vec!["dog".to_string()]);
    assert_eq!(outcome.snapshot.status, GameStatus::InProgress);
}

#[test]
fn correct_guess_is_case_insensitive_and_free() {
    let mut session = playing("CAT");
    let outcome = session.submit_guess("  cat ").unwrap();
    assert!(outcome.correct);
    assert_eq!(outcome.snapshot.status, GameStatus::Won);
    assert_eq!(outcome.snapshot.score, 100);
    assert_eq!(outcome.snapshot.guess_history, vec!["cat".to_string()]);
}

#[test]
fn ten_wrong_guesses_lose_the_game() {
    let mut session = playing("CAT");
    for i in 0..10 {
        let outcome = session.submit_guess("dog").unwrap();
        if i < 9 {
            assert_eq!(outcome.snapshot.status, GameStatus::InProgress);
        } else {
            assert_eq!(outcome.snapshot.status, GameStatus::Lost);
            assert!(outcome.message.contains("CAT"));
        }
    }
    let snap = session.snapshot();
    assert_eq!(snap.score, 0);
    assert_eq!(snap.attempts_remaining, 0);
    assert_eq!(snap.guess_history.len(), 10);
}

#[test]
fn score_reaching_zero_loses_and_records_the_guess() {
    let mut session = with_budget("CAT", 10, 7);
    let outcome = session.submit_guess("dog").unwrap();
    assert_eq!(outcome.snapshot.status, GameStatus::Lost);
    assert_eq!(outcome.snapshot.score, 0);
    assert_eq!(outcome.snapshot.attempts_remaining, 6);
    assert_eq!(outcome.snapshot.guess_history, vec!["dog".to_string()]);
}

#[test]
fn invalid_guesses_change_nothing() {
    let mut session = playing("CAT");
    assert!(matches!(
        session.submit_guess("   "),
        Err(GameError::InvalidInput(_))
    ));
    assert!(matches!(
        session.submit_guess("a"),
        Err(GameError::InvalidInput(_))
    ));
    assert_eq!(session.snapshot(), playing("CAT").snapshot());
}

#[test]
fn actions_after_the_end_are_rejected() {
    let mut session = playing("CAT");
    session.submit_guess("cat").unwrap();
    let before = session.snapshot();
    assert_eq!(session.submit_guess("dog"), Err(GameError::GameNotInProgress));
    assert_eq!(session.check_letter('c'), Err(GameError::GameNotInProgress));
    assert_eq!(session.reveal_word_length(), Err(GameError::GameNotInProgress));
    assert_eq!(session.hint_target(), Err(GameError::GameNotInProgress));
    assert_eq!(session.snapshot(), before);
}

#[test]
fn letter_check_counts_occurrences_for_five_points() {
    let mut session = with_budget("BUTTER", 20, 10);
    assert_eq!(session.check_letter('t'), Ok(2));
    assert_eq!(session.score(), 15);
    assert_eq!(session.check_letter('z'), Ok(0));
    assert_eq!(session.score(), 10);
    assert_eq!(session.snapshot().letter_checks_used, 2);
}

#[test]
fn letter_check_example_from_twenty_points() {
    let mut session = with_budget("CAT", 20, 10);
    assert_eq!(session.check_letter('t'), Ok(1));
    assert_eq!(session.score(), 15);
}

#[test]
fn letter_check_needs_five_points() {
    let mut session = with_budget("CAT", 3, 10);
    assert_eq!(session.check_letter('x'), Err(GameError::InsufficientPoints));
    assert_eq!(session.score(), 3);
    assert_eq!(session.snapshot().letter_checks_used, 0);
}

#[test]
fn letter_check_rejects_non_letters() {
    let mut session = playing("CAT");
    assert!(matches!(
        session.check_letter('3'),
        Err(GameError::InvalidInput(_))
    ));
    assert_eq!(session.score(), 100);
}

#[test]
fn word_length_is_revealed_once() {
    let mut session = playing("PLANET");
    assert_eq!(session.reveal_word_length(), Ok(6));
    assert_eq!(session.score(), 95);
    assert!(session.snapshot().word_length_revealed);
    assert_eq!(
        session.reveal_word_length(),
        Err(GameError::InsufficientPoints)
    );
    assert_eq!(session.score(), 95);
}

#[test]
fn hint_unlocks_after_five_wrong_guesses() {
    let mut session = playing("CAT");
    for _ in 0..4 {
        session.submit_guess("dog").unwrap();
    }
    assert!(!session.capabilities().can_use_hint);
    assert_eq!(session.hint_target(), Err(GameError::HintUnavailable));

    session.submit_guess("dog").unwrap();
    assert!(session.capabilities().can_use_hint);
    assert_eq!(session.hint_target(), Ok("CAT".to_string()));
    session.consume_hint().unwrap();
    assert_eq!(session.snapshot().hints_used, 1);
    assert_eq!(session.consume_hint(), Err(GameError::HintUnavailable));
    assert!(!session.capabilities().can_use_hint);
}

#[test]
fn hint_is_free() {
    let mut session = with_budget("CAT", 50, 5);
    session.consume_hint().unwrap();
    assert_eq!(session.score(), 50);
}

#[test]
fn capabilities_follow_the_score() {
    let session = with_budget("CAT", 4, 10);
    let caps = session.capabilities();
    assert!(!caps.can_check_letter);
    assert!(!caps.can_get_word_length);
    assert!(!caps.can_use_hint);

    let caps = playing("CAT").capabilities();
    assert!(caps.can_check_letter);
    assert!(caps.can_get_word_length);
}

#[test]
fn loading_and_failed_sessions_refuse_play() {
    let mut loading = GameSession::loading(2);
    assert_eq!(loading.status(), GameStatus::Loading);
    assert_eq!(loading.submit_guess("dog"), Err(GameError::GameNotInProgress));

    let failed = GameSession::failed(2);
    assert_eq!(failed.status(), GameStatus::Error);
    assert!(!failed.capabilities().can_check_letter);
}

#[test]
fn begin_rejects_level_zero_and_blank_words() {
    assert!(matches!(
        GameSession::begin("cat", 0, 0),
        Err(GameError::InvalidInput(_))
    ));
    assert!(matches!(
        GameSession::begin("  ", 1, 0),
        Err(GameError::InvalidInput(_))
    ));
}

#[test]
fn reset_returns_to_the_initial_budgets() {
    let mut session = playing("CAT");
    session.submit_guess("dog").unwrap();
    session.reset();
    let snap = session.snapshot();
    assert_eq!(snap.score, 100);
    assert_eq!(snap.attempts_remaining, 10);
    assert!(snap.guess_history.is_empty());
    assert_eq!(snap.status, GameStatus::InProgress);
}

#[test]
fn from_snapshot_clamps_out_of_range_budgets() {
    let snap = SessionSnapshot {
        secret_word: "cat".to_string(),
        score: 500,
        attempts_remaining: 50,
        guess_history: Vec::new(),
        level: 0,
        hints_used: 0,
        letter_checks_used: 0,
        word_length_revealed: false,
        status: GameStatus::InProgress,
        time_started: 0,
    };
    let session = GameSession::from_snapshot(snap);
    assert_eq!(session.score(), 100);
    assert_eq!(session.attempts_remaining(), 10);
    assert_eq!(session.level(), 1);
    assert_eq!(session.secret_word(), "CAT");
}

#[test]
fn begin_trims_uppercases_and_stamps_the_start() {
    let session = GameSession::begin("  moon ", 1, 42).unwrap();
    assert_eq!(session.secret_word(), "MOON");
    assert_eq!(session.snapshot().time_started, 42);
}

#[test]
fn history_keeps_original_casing() {
    let mut session = playing("cat");
    session.submit_guess("DoG").unwrap();
    session.submit_guess(" cAt ").unwrap();
    assert_eq!(session.guess_history(), ["DoG", "cAt"]);
    assert_eq!(session.status(), GameStatus::Won);
}

#[test]
fn reset_forgets_the_word_and_paid_actions() {
    let mut session = playing("cat");
    session.reveal_word_length().unwrap();
    session.reset();
    let snap = session.snapshot();
    assert!(!snap.word_length_revealed);
    assert!(snap.secret_word.is_empty());
}

#[test]
fn from_snapshot_clamps_hints_used() {
    let mut snap = with_budget("CAT", 50, 3).snapshot();
    snap.hints_used = 7;
    let mut session = GameSession::from_snapshot(snap);
    assert_eq!(session.snapshot().hints_used, 1);
    assert!(!session.capabilities().can_use_hint);
    assert_eq!(session.consume_hint(), Err(GameError::HintUnavailable));
}
