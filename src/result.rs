//! Round and game result types.

use alloc::vec::Vec;

use crate::card::Card;
use crate::scoring::HandScore;

/// Something that happened during the play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayEvent {
    /// A card was laid.
    Played {
        /// Seat that laid the card.
        seat: usize,
        /// The card laid.
        card: Card,
        /// Points scored by the card.
        points: u8,
        /// Running count after the card.
        count: u8,
    },
    /// A seat had no card that fits under 31.
    Pass {
        /// Seat that passed.
        seat: usize,
    },
    /// Every seat passed; the last to lay a card is credited.
    LastCard {
        /// Seat that laid the last card.
        seat: usize,
        /// Points awarded (zero for a team past the pin threshold).
        points: u8,
    },
}

/// Score of one seat's hand at the show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowResult {
    /// Seat whose hand was counted.
    pub seat: usize,
    /// The cards shown.
    pub cards: Vec<Card>,
    /// The hand's score breakdown.
    pub score: HandScore,
}

/// Summary of a single round.
///
/// When the game ends mid-round, only the parts played so far are filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Seat that dealt and owns the crib.
    pub dealer: usize,
    /// The cut card.
    pub cut: Option<Card>,
    /// Points for cutting a Jack.
    pub his_heels: u8,
    /// Every play, pass, and last-card award in order.
    pub play_events: Vec<PlayEvent>,
    /// Hands counted at the show, in counting order.
    pub shows: Vec<ShowResult>,
    /// The crib's score, if it was counted.
    pub crib: Option<HandScore>,
    /// Team scores after the round.
    pub team_scores: Vec<u16>,
}

/// Summary of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// Winning team, if any team reached the target score.
    pub winner: Option<usize>,
    /// Number of rounds played, including a partial final round.
    pub rounds: u32,
    /// Final team scores.
    pub team_scores: Vec<u16>,
}
