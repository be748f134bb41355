// Library interface for wordle-cli
// This allows integration tests to access internal modules

pub mod cli;
pub mod feedback;
pub mod session;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use feedback::{Mark, WORD_LEN, evaluate};
pub use session::{Outcome, Session, TOTAL_ATTEMPTS, game_loop};
pub use wordbank::{load_wordbank_from_file, load_wordbank_from_str, pick_secret};
