use std::time::Duration;

use wordguess::core::words_for_level;
use wordguess::providers::in_memory::{Offline, StaticWords};
use wordguess::providers::WordProvider;
use wordguess::{SecretWordSource, WordSource};

struct Stalled;

#[async_trait::async_trait]
impl WordProvider for Stalled {
    async fn get_random_word(&self) -> anyhow::Result<String> {
        std::future::pending().await
    }
}

fn from_table(word: &str, level: u32) -> bool {
    words_for_level(level).contains(&word)
}

#[tokio::test]
async fn local_table_serves_every_level() {
    let mut source = WordSource::from_seed(3);
    for level in 1..=6 {
        let word = source.word_for_level(level).await;
        assert!(from_table(&word, level), "{} not in level {} table", word, level);
    }
}

#[tokio::test]
async fn same_seed_same_words() {
    let mut a = WordSource::from_seed(42);
    let mut b = WordSource::from_seed(42);
    for level in [1, 2, 3, 4, 1] {
        assert_eq!(a.word_for_level(level).await, b.word_for_level(level).await);
    }
}

#[tokio::test]
async fn remote_word_in_band_is_preferred() {
    let mut source =
        WordSource::from_seed(1).with_remote(Box::new(StaticWords::new(["planet"])));
    assert_eq!(source.word_for_level(2).await, "planet");
}

#[tokio::test]
async fn remote_word_out_of_band_falls_back() {
    let mut source = WordSource::from_seed(1)
        .with_remote(Box::new(StaticWords::new(["ox", "ice-cream", "elephants"])));
    let word = source.word_for_level(2).await;
    assert!(from_table(&word, 2));
    let word = source.word_for_level(2).await;
    assert!(from_table(&word, 2));
    // "elephants" has 9 letters, inside level 3's band.
    assert_eq!(source.word_for_level(3).await, "elephants");
}

#[tokio::test]
async fn offline_remote_falls_back() {
    let mut source = WordSource::from_seed(1).with_remote(Box::new(Offline));
    let word = source.fetch_word_for_level(1).await.unwrap();
    assert!(from_table(&word, 1));
}

#[tokio::test(start_paused = true)]
async fn stalled_remote_times_out_to_the_table() {
    let mut source = WordSource::from_seed(1)
        .with_remote(Box::new(Stalled))
        .with_timeout(Duration::from_secs(15));
    let word = source.word_for_level(4).await;
    assert!(from_table(&word, 4));
}
