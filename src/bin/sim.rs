use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use wordguess::core::{words_for_level, GameError, GameStatus};
use wordguess::{WordGame, WordSource};

const CHECK_LETTERS: [char; 3] = ['e', 'a', 'o'];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <level>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let level: u32 = args[2].parse()?;

    let mut seed_rng = SmallRng::seed_from_u64(seed);
    let words = WordSource::new(SmallRng::from_rng(&mut seed_rng));
    let mut game = WordGame::seeded(Box::new(words), seed.wrapping_add(1));
    game.start(level).await.map_err(|e| anyhow::anyhow!(e))?;

    let mut candidates: Vec<&str> = words_for_level(level).to_vec();
    for letter in CHECK_LETTERS {
        let count = game.check_letter(letter).map_err(|e| anyhow::anyhow!(e))?;
        candidates.retain(|w| {
            w.chars().filter(|c| c.eq_ignore_ascii_case(&letter)).count() as u32 == count
        });
    }
    let len = game.word_length().map_err(|e| anyhow::anyhow!(e))?;
    candidates.retain(|w| w.chars().count() == len);

    let mut hint = None;
    for word in candidates {
        if game.status().is_terminal() {
            break;
        }
        game.submit_guess(word).await.map_err(|e| anyhow::anyhow!(e))?;
        if hint.is_none() && game.status() == GameStatus::InProgress {
            match game.hint().await {
                Ok(text) => hint = Some(text),
                Err(GameError::HintUnavailable) => {}
                Err(e) => return Err(anyhow::anyhow!(e)),
            }
        }
    }

    let snapshot = game.snapshot();
    let result = json!({
        "seed": seed,
        "level": snapshot.level,
        "word": snapshot.secret_word,
        "status": format!("{:?}", snapshot.status),
        "score": snapshot.score,
        "attempts_remaining": snapshot.attempts_remaining,
        "guesses": snapshot.guess_history,
        "hint": hint,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
