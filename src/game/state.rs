//! Game state types.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;
use crate::result::{PlayEvent, ShowResult};
use crate::scoring::HandScore;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the deal.
    Dealing,
    /// Hands and crib are set; waiting for the cut.
    Cut,
    /// Cards are being laid.
    Play,
    /// Hands and crib are being counted.
    Count,
    /// Round has ended and can be finished.
    RoundOver,
    /// A team reached the target score.
    GameOver,
}

/// Everything dealt and scored during the current round.
#[derive(Debug, Clone, Default)]
pub struct RoundState {
    /// Undealt cards.
    pub stock: Vec<Card>,
    /// The dealer's crib.
    pub crib: Vec<Card>,
    /// The cut card.
    pub cut: Option<Card>,
    /// Points for cutting a Jack.
    pub his_heels: u8,
    /// Cards laid during the play, across all segments.
    pub played: Vec<Card>,
    /// Play events in order.
    pub events: Vec<PlayEvent>,
    /// Hands counted so far.
    pub shows: Vec<ShowResult>,
    /// The crib's score once counted.
    pub crib_score: Option<HandScore>,
}

/// A seat at the table.
#[derive(Debug, Clone)]
pub struct Player {
    /// Team the seat plays for.
    pub team: usize,
    /// Points pegged by this seat.
    pub score: u16,
    /// Cards held this round.
    pub hand: Hand,
}

/// A team and the seats playing for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    /// Team index.
    pub id: usize,
    /// Seats of the team's players.
    pub seats: Vec<usize>,
}
