//! Per-cell feedback markers

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a revealed cell says about its letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    /// Letter confirmed at this exact position
    Correct,
    /// Letter is in the answer but not at this position
    Present,
    /// Letter is not in the answer (unless another cell says otherwise)
    Absent,
}

impl LetterStatus {
    /// The next status when a grid cell is cycled: absent → present → correct → absent
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Absent => Self::Present,
            Self::Present => Self::Correct,
            Self::Correct => Self::Absent,
        }
    }

    /// Parse a single pattern character
    ///
    /// Accepts 'G'/'g'/🟩 for correct, 'Y'/'y'/🟨 for present and '-'/'_'/⬜/⬛ for absent.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Emoji square for this status
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}

/// Ordering hint shown by numeric Loldle columns
///
/// Display-only: hints never reach the constraint store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderHint {
    /// The answer's value is higher than the guess
    TooLow,
    /// The answer's value is lower than the guess
    TooHigh,
}

impl OrderHint {
    /// Arrow pointing toward the answer
    #[must_use]
    pub const fn arrow(self) -> char {
        match self {
            Self::TooLow => '↑',
            Self::TooHigh => '↓',
        }
    }
}
