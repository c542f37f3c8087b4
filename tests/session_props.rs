use proptest::prelude::*;
use wordguess::core::{GameSession, GameStatus};

#[derive(Debug, Clone)]
enum Action {
    Guess(String),
    Letter(char),
    Length,
    Hint,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => "[a-z]{0,6}".prop_map(Action::Guess),
        2 => proptest::char::range('a', 'z').prop_map(Action::Letter),
        1 => Just(Action::Length),
        1 => Just(Action::Hint),
    ]
}

fn apply(session: &mut GameSession, action: &Action) {
    let _ = match action {
        Action::Guess(g) => session.submit_guess(g).map(|_| ()),
        Action::Letter(c) => session.check_letter(*c).map(|_| ()),
        Action::Length => session.reveal_word_length().map(|_| ()),
        Action::Hint => session.consume_hint(),
    };
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Score and attempts never rise and never leave their ranges.
    #[test]
    fn budgets_are_monotone(word in "[a-z]{3,8}", actions in prop::collection::vec(action(), 0..40)) {
        let mut session = GameSession::begin(&word, 1, 0).unwrap();
        let mut prev = session.snapshot();
        for a in &actions {
            apply(&mut session, a);
            let snap = session.snapshot();
            prop_assert!(snap.score <= prev.score);
            prop_assert!(snap.attempts_remaining <= prev.attempts_remaining);
            prop_assert!(snap.score <= 100);
            prop_assert!(snap.attempts_remaining <= 10);
            prop_assert!(snap.hints_used <= 1);
            prop_assert!(snap.guess_history.len() >= prev.guess_history.len());
            prev = snap;
        }
    }

    /// The game is lost exactly when a budget is exhausted without a win.
    #[test]
    fn lost_iff_budget_exhausted(word in "[a-z]{3,8}", actions in prop::collection::vec(action(), 0..40)) {
        let mut session = GameSession::begin(&word, 1, 0).unwrap();
        for a in &actions {
            apply(&mut session, a);
            let snap = session.snapshot();
            match snap.status {
                GameStatus::Lost => prop_assert!(snap.score == 0 || snap.attempts_remaining == 0),
                GameStatus::InProgress => {
                    prop_assert!(snap.attempts_remaining > 0);
                }
                GameStatus::Won => {
                    let last = snap.guess_history.last().cloned().unwrap_or_default();
                    prop_assert_eq!(last.to_uppercase(), snap.secret_word.clone());
                }
                other => prop_assert!(false, "unexpected status {:?}", other),
            }
        }
    }

    /// A terminal session ignores everything that follows.
    #[test]
    fn terminal_sessions_are_frozen(word in "[a-z]{3,8}", actions in prop::collection::vec(action(), 0..20)) {
        let mut session = GameSession::begin(&word, 1, 0).unwrap();
        session.submit_guess(&word).unwrap();
        let frozen = session.snapshot();
        for a in &actions {
            apply(&mut session, a);
        }
        prop_assert_eq!(session.snapshot(), frozen);
    }

    /// The word length is paid for at most once.
    #[test]
    fn length_revealed_at_most_once(word in "[a-z]{3,8}", tries in 1usize..5) {
        let mut session = GameSession::begin(&word, 1, 0).unwrap();
        let successes = (0..tries).filter(|_| session.reveal_word_length().is_ok()).count();
        prop_assert_eq!(successes, 1);
        prop_assert_eq!(session.score(), 95);
    }
}
