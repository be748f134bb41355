use crate::cli::{
    TokenReader, print_attempts_left, print_loss, print_win, read_guess, render_board,
};
use crate::feedback::{Mark, WORD_LEN, evaluate};
use anyhow::{Result, bail};
use log::debug;
use std::io::BufRead;

pub const TOTAL_ATTEMPTS: u32 = 6;

/// Where a session stands. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// What one completed guess produced.
pub struct Round {
    pub marks: [Mark; WORD_LEN],
    pub outcome: Outcome,
    pub attempts_remaining: u32,
}

/// One game: a fixed secret, a guess budget, and an outcome.
///
/// The outcome leaves `InProgress` exactly once: `Won` when a guess equals
/// the secret character-for-character, `Lost` when the budget runs out.
pub struct Session {
    secret: String,
    attempts_remaining: u32,
    outcome: Outcome,
}

impl Session {
    #[must_use]
    pub fn new(secret: String) -> Self {
        debug_assert_eq!(secret.chars().count(), WORD_LEN);
        Self {
            secret,
            attempts_remaining: TOTAL_ATTEMPTS,
            outcome: Outcome::InProgress,
        }
    }

    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// Scores one shape-valid guess and advances the state machine.
    ///
    /// A winning guess does not spend an attempt; a miss does, and the miss
    /// that spends the last one loses the session. Must not be called once
    /// the outcome is terminal.
    pub fn apply_guess(&mut self, guess: &str) -> Round {
        debug_assert_eq!(self.outcome, Outcome::InProgress);
        debug_assert!(self.attempts_remaining > 0);

        let marks = evaluate(&self.secret, guess);
        if guess == self.secret {
            self.outcome = Outcome::Won;
        } else {
            self.attempts_remaining -= 1;
            if self.attempts_remaining == 0 {
                self.outcome = Outcome::Lost;
            }
        }
        debug!(
            "guess {guess:?} scored; outcome {:?}, {} attempts left",
            self.outcome, self.attempts_remaining
        );
        Round {
            marks,
            outcome: self.outcome,
            attempts_remaining: self.attempts_remaining,
        }
    }
}

/// Drives one session over `reader` until it is won or lost.
///
/// Shape-invalid tokens are re-prompted away inside `read_guess` and never
/// reach the state machine. Input running dry mid-game is an error.
pub fn game_loop<R: BufRead>(session: &mut Session, reader: R) -> Result<Outcome> {
    let mut tokens = TokenReader::new(reader);
    loop {
        let Some(guess) = read_guess(&mut tokens)? else {
            bail!("input ended before the game finished");
        };
        let round = session.apply_guess(&guess);
        print!("{}", render_board(&guess, &round.marks));
        match round.outcome {
            Outcome::Won => {
                print_win();
                break;
            }
            Outcome::Lost => {
                print_loss(session.secret());
                break;
            }
            Outcome::InProgress => print_attempts_left(round.attempts_remaining),
        }
    }
    Ok(session.outcome())
}
