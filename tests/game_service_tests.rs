use std::sync::{Arc, Mutex};

use tokio::sync::{broadcast::error::TryRecvError, watch};
use tokio::time::{advance, Duration};
use wordguess::core::{GameError, GameStatus, SessionSnapshot};
use wordguess::{FixedWord, GameEvent, SecretWordSource, WordGame};

struct Broken;

#[async_trait::async_trait]
impl SecretWordSource for Broken {
    async fn fetch_word_for_level(&mut self, _level: u32) -> anyhow::Result<String> {
        Err(anyhow::anyhow!("word service down"))
    }
}

/// Records the status observers see while the word is being fetched.
struct Spy {
    observer: Arc<Mutex<Option<watch::Receiver<SessionSnapshot>>>>,
    seen: Arc<Mutex<Vec<GameStatus>>>,
}

#[async_trait::async_trait]
impl SecretWordSource for Spy {
    async fn fetch_word_for_level(&mut self, _level: u32) -> anyhow::Result<String> {
        let status = self
            .observer
            .lock()
            .unwrap()
            .as_ref()
            .map(|rx| rx.borrow().status);
        if let Some(status) = status {
            self.seen.lock().unwrap().push(status);
        }
        Ok("cat".to_string())
    }
}

fn cat_game() -> WordGame {
    WordGame::seeded(Box::new(FixedWord::new("cat")), 7)
}

#[tokio::test]
async fn start_begins_play_with_the_forced_word() {
    let mut game = cat_game();
    let snap = game.start(1).await.unwrap();
    assert_eq!(snap.secret_word, "CAT");
    assert_eq!(snap.status, GameStatus::InProgress);
    assert_eq!(snap.score, 100);
    assert!(snap.time_started > 0);
    assert!(game.timer().is_running());
}

#[tokio::test]
async fn observers_see_loading_during_start() {
    let observer = Arc::new(Mutex::new(None));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let spy = Spy {
        observer: observer.clone(),
        seen: seen.clone(),
    };
    let mut game = WordGame::seeded(Box::new(spy), 1);
    *observer.lock().unwrap() = Some(game.watch());

    game.start(2).await.unwrap();
    assert_eq!(*seen.lock().unwrap(), vec![GameStatus::Loading]);
    assert_eq!(game.watch().borrow().status, GameStatus::InProgress);
}

#[tokio::test]
async fn wrong_then_right_guess() {
    let mut game = cat_game();
    let mut events = game.subscribe();
    game.start(1).await.unwrap();

    let outcome = game.submit_guess("dog").await.unwrap();
    assert_eq!(outcome.snapshot.score, 90);
    assert_eq!(outcome.snapshot.attempts_remaining, 9);
    assert_eq!(outcome.snapshot.guess_history, vec!["dog".to_string()]);
    assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));

    let outcome = game.submit_guess("cat").await.unwrap();
    assert!(outcome.correct);
    assert_eq!(outcome.snapshot.score, 90);
    match events.try_recv().unwrap() {
        GameEvent::Won {
            final_score, level, ..
        } => {
            assert_eq!(final_score, 90);
            assert_eq!(level, 1);
        }
        other => panic!("unexpected event {:?}", other),
    }
    assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));
    assert!(!game.timer().is_running());

    assert_eq!(
        game.submit_guess("cat").await.unwrap_err(),
        GameError::GameNotInProgress
    );
    assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test(start_paused = true)]
async fn win_reports_completion_seconds() {
    let mut game = cat_game();
    let mut events = game.subscribe();
    game.start(1).await.unwrap();
    advance(Duration::from_secs(42)).await;
    game.submit_guess("CAT").await.unwrap();
    assert_eq!(
        events.try_recv().unwrap(),
        GameEvent::Won {
            final_score: 100,
            completion_time: 42,
            level: 1
        }
    );
}

#[tokio::test]
async fn ten_misses_emit_one_loss() {
    let mut game = cat_game();
    let mut events = game.subscribe();
    game.start(1).await.unwrap();
    for _ in 0..10 {
        game.submit_guess("dog").await.unwrap();
    }
    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(
        events.try_recv().unwrap(),
        GameEvent::Lost {
            secret_word: "CAT".to_string()
        }
    );
    assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test]
async fn failing_source_moves_to_error() {
    let mut game = WordGame::seeded(Box::new(Broken), 1);
    let mut events = game.subscribe();
    let err = game.start(1).await.unwrap_err();
    assert!(matches!(err, GameError::NetworkError(_)));
    assert_eq!(game.status(), GameStatus::Error);
    assert!(matches!(events.try_recv(), Ok(GameEvent::Error { .. })));
    assert!(!game.timer().is_running());
}

#[tokio::test]
async fn level_zero_is_rejected() {
    let mut game = cat_game();
    let err = game.start(0).await.unwrap_err();
    assert!(matches!(err, GameError::InvalidInput(_)));
    assert_eq!(game.status(), GameStatus::Error);
}

#[tokio::test]
async fn paid_actions_publish_snapshots() {
    let mut game = cat_game();
    let rx = game.watch();
    game.start(1).await.unwrap();

    assert_eq!(game.check_letter('c'), Ok(1));
    assert_eq!(rx.borrow().score, 95);
    assert_eq!(game.word_length(), Ok(3));
    assert_eq!(rx.borrow().score, 90);
    assert!(rx.borrow().word_length_revealed);
    assert_eq!(game.word_length(), Err(GameError::InsufficientPoints));
}

#[tokio::test]
async fn hint_after_five_misses_only_once() {
    let mut game = cat_game();
    game.start(1).await.unwrap();
    assert_eq!(game.hint().await, Err(GameError::HintUnavailable));
    for _ in 0..5 {
        game.submit_guess("dog").await.unwrap();
    }
    let hint = game.hint().await.unwrap();
    assert!(!hint.is_empty());
    assert_eq!(game.snapshot().hints_used, 1);
    assert_eq!(game.snapshot().score, 50);
    assert_eq!(game.hint().await, Err(GameError::HintUnavailable));
}

#[tokio::test]
async fn start_replaces_a_finished_session() {
    let mut game = cat_game();
    game.start(1).await.unwrap();
    game.submit_guess("cat").await.unwrap();
    let snap = game.start(2).await.unwrap();
    assert_eq!(snap.level, 2);
    assert_eq!(snap.status, GameStatus::InProgress);
    assert!(snap.guess_history.is_empty());
}

#[tokio::test]
async fn reset_skips_the_word_source() {
    let mut game = cat_game();
    game.start(1).await.unwrap();
    game.submit_guess("dog").await.unwrap();
    game.reset();
    let snap = game.snapshot();
    assert_eq!(snap.status, GameStatus::InProgress);
    assert_eq!(snap.score, 100);
    assert!(snap.secret_word.is_empty());
    assert_eq!(game.timer().formatted(), "00:00");
}
