use anyhow::{Context, Result, ensure};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use wordle_cli::cli::{parse_cli, print_intro};
use wordle_cli::session::{Session, game_loop};
use wordle_cli::wordbank::{EMBEDDED_WORDBANK, load_wordbank_from_file, load_wordbank_from_str, pick_secret};

fn main() -> Result<()> {
    env_logger::init();
    let cli = parse_cli();

    let words = match &cli.wordbank_path {
        Some(path) => load_wordbank_from_file(path)
            .with_context(|| format!("failed to load word bank from '{path}'"))?,
        None => load_wordbank_from_str(EMBEDDED_WORDBANK),
    };
    ensure!(!words.is_empty(), "word bank has no usable five-letter words");
    debug!("loaded {} words", words.len());

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let secret = pick_secret(&words, &mut rng)
        .context("word bank has no usable five-letter words")?
        .clone();
    debug!("secret selected");

    print_intro();
    let mut session = Session::new(secret);
    let outcome = game_loop(&mut session, io::stdin().lock())?;
    debug!("session finished: {outcome:?}");
    Ok(())
}
