use crate::feedback::{Mark, WORD_LEN};
use clap::Parser;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Wordle CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word bank file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Fix the RNG seed so the secret selection is reproducible
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

/// Splits a `BufRead` into whitespace-delimited tokens, one per call.
/// A single input line may carry several guesses; they are consumed in order.
pub struct TokenReader<R: BufRead> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `Ok(None)` once the input is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

/// Shape check for a guess: exactly 5 ASCII letters, either case.
#[must_use]
pub fn is_valid_guess(word: &str) -> bool {
    word.len() == WORD_LEN && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// Reads tokens until one passes the shape check, re-prompting on each
/// failure. `Ok(None)` means the input ended mid-prompt.
pub fn read_guess<R: BufRead>(tokens: &mut TokenReader<R>) -> io::Result<Option<String>> {
    loop {
        let Some(token) = tokens.next_token()? else {
            return Ok(None);
        };
        if is_valid_guess(&token) {
            return Ok(Some(token));
        }
        print_invalid_guess();
    }
}

const RULE: &str = "---+---+---+---+---";

fn render_row(cells: impl Iterator<Item = char>) -> String {
    cells
        .map(|c| format!(" {c} "))
        .collect::<Vec<_>>()
        .join("|")
}

/// The per-guess box: a blank placeholder line, then the guess letters and
/// their marks as rule-separated rows.
#[must_use]
pub fn render_board(guess: &str, marks: &[Mark; WORD_LEN]) -> String {
    let letters = render_row(guess.chars());
    let marks = render_row(marks.iter().map(|m| m.as_char()));
    format!("\n{RULE}\n{letters}\n{RULE}\n{marks}\n{RULE}\n")
}

/// Prints without a trailing newline and flushes, for the `>> ` prompts.
fn prompt(text: &str) {
    print!("{text}");
    let _ = io::stdout().flush();
}

pub fn print_intro() {
    print!("================================WORDLE================================");
    println!(
        "\n\nYou have six tries to guess a random five letter word, with\neach guess revealing information about the answer."
    );
    print!("\nFor example, if the answer were \"cramp\" and you guessed\n\"cheer\":");
    print!("\n\n{RULE}\n c | h | e | e | r \n{RULE}\n G | B | B | B | Y \n{RULE}\n");
    println!("\nWhere:\n(G)reen - Letter is both in the answer and in the correct position.");
    println!("(Y)ellow - Letter is in the answer but in the wrong position.");
    println!("(B)lack - Letter is not in the word.");
    prompt("\nWith that said, guess a five letter word:\n>> ");
}

pub fn print_invalid_guess() {
    prompt("\nInvalid guess. Try again.\n>> ");
}

pub fn print_attempts_left(attempts_remaining: u32) {
    prompt(&format!(
        "\nYou have {attempts_remaining} guesses left. Try again.\n>> "
    ));
}

pub fn print_win() {
    println!("\n===============================YOU WIN!===============================");
}

pub fn print_loss(secret: &str) {
    println!(
        "\nThe word was \"{secret}\".\n===============================YOU LOSE!==============================="
    );
}
