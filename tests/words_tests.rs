use rand::{rngs::SmallRng, Rng, SeedableRng};
use wordguess::core::{fallback_word_for_level, fits_level, words_for_level, LEVEL_1_WORDS};

/// The two raw draws a fresh rng seeded with `seed` makes from the level 1 bucket.
fn first_two_draws(seed: u64) -> (&'static str, &'static str) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let first = LEVEL_1_WORDS[rng.random_range(0..LEVEL_1_WORDS.len())];
    let second = LEVEL_1_WORDS[rng.random_range(0..LEVEL_1_WORDS.len())];
    (first, second)
}

#[test]
fn fallback_comes_from_level_bucket() {
    let mut rng = SmallRng::seed_from_u64(7);
    for level in 1..=6 {
        for _ in 0..50 {
            let word = fallback_word_for_level(&mut rng, level);
            assert!(words_for_level(level).contains(&word));
        }
    }
}

#[test]
fn out_of_band_first_draw_is_redrawn() {
    let seed = (0..10_000u64)
        .find(|&s| {
            let (first, second) = first_two_draws(s);
            !fits_level(first, 1) && first != second
        })
        .expect("no seed with an out-of-band first draw");
    let (first, second) = first_two_draws(seed);

    let word = fallback_word_for_level(&mut SmallRng::seed_from_u64(seed), 1);
    assert_ne!(word, first);
    assert_eq!(word, second);
}

#[test]
fn in_band_first_draw_is_kept() {
    let seed = (0..10_000u64)
        .find(|&s| {
            let (first, second) = first_two_draws(s);
            fits_level(first, 1) && first != second
        })
        .expect("no seed with an in-band first draw");
    let (first, _) = first_two_draws(seed);

    assert_eq!(fallback_word_for_level(&mut SmallRng::seed_from_u64(seed), 1), first);
}

#[test]
fn fits_level_rejects_non_alphabetic() {
    assert!(!fits_level("house", 2));
    assert!(fits_level("chairs", 2));
    assert!(!fits_level("chair5", 2));
    assert!(!fits_level("", 1));
}
