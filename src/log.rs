//! Game log entries.

use alloc::string::String;
use core::fmt;

/// Category of a log entry, used by the presentation layer for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum LogCategory {
    /// Game setup.
    Setup,
    /// A card was played.
    CardPlay,
    /// A card effect resolved.
    CardEffect,
    /// A fight was resolved.
    Combat,
    /// A card was defeated and a side lost life.
    LifeLoss,
    /// Thanos collected an Infinity Stone.
    InfinityStone,
    /// The turn passed.
    Turn,
    /// A deck was reshuffled or a card returned to a deck.
    Shuffle,
    /// A rejected action, recorded by the presentation layer.
    Error,
    /// The game ended.
    GameOver,
}

impl LogCategory {
    /// Returns the kebab-case name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::CardPlay => "card-play",
            Self::CardEffect => "card-effect",
            Self::Combat => "combat",
            Self::LifeLoss => "life-loss",
            Self::InfinityStone => "infinity-stone",
            Self::Turn => "turn",
            Self::Shuffle => "shuffle",
            Self::Error => "error",
            Self::GameOver => "game-over",
        }
    }
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the game log.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LogEntry {
    /// Position in the log, starting at 0.
    pub sequence: u64,
    /// Unix time in milliseconds (with `std`), otherwise the sequence number.
    pub timestamp: u64,
    /// Turn number when the entry was written.
    pub turn: u32,
    /// Human-readable message.
    pub message: String,
    /// Category of the entry.
    pub category: LogCategory,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)
    }
}

#[cfg(feature = "std")]
pub(crate) fn timestamp(_sequence: u64) -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |elapsed| {
            u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
        })
}

#[cfg(not(feature = "std"))]
pub(crate) const fn timestamp(sequence: u64) -> u64 {
    sequence
}
