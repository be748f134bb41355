use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

fn is_bank_word(word: &str) -> bool {
    word.len() == 5 && word.chars().all(|c| c.is_ascii_alphabetic())
}

// Entries are kept exactly as written; guesses are compared against the
// secret case-sensitively, so the loader must not re-case them.
pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|word| is_bank_word(word))
        .map(str::to_owned)
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if is_bank_word(word) {
            words.push(word.to_owned());
        }
    }
    Ok(words)
}

/// Uniform pick of the session's secret. `None` only for an empty bank,
/// which the caller treats as a fatal startup error.
pub fn pick_secret<'a, R: Rng>(words: &'a [String], rng: &mut R) -> Option<&'a String> {
    words.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_load_from_str_filters_shape() {
        let words = load_wordbank_from_str("mango\ncram\ncramps\ncr4mp\n\n  cheer  \n");
        assert_eq!(words, vec!["mango".to_string(), "cheer".to_string()]);
    }

    #[test]
    fn test_load_from_str_keeps_case() {
        let words = load_wordbank_from_str("Mango\nCHEER\n");
        assert_eq!(words, vec!["Mango".to_string(), "CHEER".to_string()]);
    }

    #[test]
    fn test_embedded_wordbank_is_well_formed() {
        let words = load_wordbank_from_str(EMBEDDED_WORDBANK);
        assert!(!words.is_empty());
        assert_eq!(words.len(), EMBEDDED_WORDBANK.lines().count());
    }

    #[test]
    fn test_pick_secret_is_deterministic_under_a_fixed_seed() {
        let words = load_wordbank_from_str(EMBEDDED_WORDBANK);
        let a = pick_secret(&words, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = pick_secret(&words, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pick_secret_none_on_empty_bank() {
        let words: Vec<String> = Vec::new();
        assert_eq!(pick_secret(&words, &mut StdRng::seed_from_u64(0)), None);
    }

    #[test]
    fn test_pick_secret_comes_from_the_bank() {
        let words = vec!["mango".to_string(), "cheer".to_string()];
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10 {
            let secret = pick_secret(&words, &mut rng).unwrap();
            assert!(words.contains(secret));
        }
    }
}
