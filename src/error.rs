//! Error types for engine and game operations.

use thiserror::Error;

/// Errors that can occur when building a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside `1..=13`.
    #[error("invalid card rank {0}")]
    InvalidRank(u8),
}

/// Errors that can occur when setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// No dealing layout exists for this many players.
    #[error("number of players invalid: {0}")]
    InvalidPlayerCount(usize),
    /// Fewer than two teams.
    #[error("at least two teams are required, got {0}")]
    TooFewTeams(usize),
    /// Teams without players.
    #[error("teams must have at least one player")]
    EmptyTeam,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// A stacked deck leaves no card to cut.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during the cut, the play, or the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid game state for this phase.
    #[error("invalid game state for this phase")]
    InvalidState,
    /// No cards left to cut.
    #[error("no cards left to cut")]
    NoCards,
    /// The deal failed.
    #[error(transparent)]
    Deal(#[from] DealError),
}
