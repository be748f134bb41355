pub const WORD_LEN: usize = 5;

/// Per-letter feedback for one position of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Right letter, right position.
    Correct,
    /// Letter occurs somewhere in the secret, wrong position.
    Present,
    /// Letter does not occur in the secret.
    Absent,
}

impl Mark {
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Mark::Correct => 'G',
            Mark::Present => 'Y',
            Mark::Absent => 'B',
        }
    }
}

/// Scores `guess` against `secret`, one [`Mark`] per position, left to right.
///
/// Comparisons are case-sensitive. The `Present` check is a plain membership
/// test over the secret; it does not consume letter counts, so a letter the
/// secret holds once can be marked `Present` at several guess positions.
/// Both inputs must already be exactly five characters; the shape check
/// happens at the input layer.
#[must_use]
pub fn evaluate(secret: &str, guess: &str) -> [Mark; WORD_LEN] {
    debug_assert_eq!(secret.chars().count(), WORD_LEN);
    debug_assert_eq!(guess.chars().count(), WORD_LEN);

    let mut marks = [Mark::Absent; WORD_LEN];
    for (i, (g, s)) in guess.chars().zip(secret.chars()).enumerate() {
        marks[i] = if g == s {
            Mark::Correct
        } else if secret.contains(g) {
            Mark::Present
        } else {
            Mark::Absent
        };
    }
    marks
}
