//! Player hand representation.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;
use crate::play::{FifteenWindow, choose_card};
use crate::scoring::HandScore;

/// A player's hand for one round.
///
/// The kept cards are scored at the show; the play hand is a working copy
/// that empties as cards are laid during the play.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards kept after discarding.
    cards: Vec<Card>,
    /// Cards not yet laid during the play.
    play_hand: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            play_hand: Vec::new(),
        }
    }

    /// Replaces the hand with freshly dealt cards.
    pub fn deal(&mut self, cards: Vec<Card>) {
        self.play_hand.clone_from(&cards);
        self.cards = cards;
    }

    /// Removes the first `n` cards for the crib and resets the play hand to
    /// the cards that remain.
    pub fn discard(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.cards.len());
        let dropped: Vec<Card> = self.cards.drain(..n).collect();
        self.play_hand.clone_from(&self.cards);
        dropped
    }

    /// Returns the kept cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the cards not yet laid.
    #[must_use]
    pub fn play_cards(&self) -> &[Card] {
        &self.play_hand
    }

    /// Chooses and removes the next card to lay.
    ///
    /// See [`choose_card`].
    pub fn play<R: Rng + ?Sized>(
        &mut self,
        played: &[Card],
        count: u8,
        window: FifteenWindow,
        rng: &mut R,
    ) -> (Option<Card>, u8) {
        choose_card(&mut self.play_hand, played, count, window, rng)
    }

    /// Scores the kept cards against the cut.
    #[must_use]
    pub fn score(&self, cut: Card) -> HandScore {
        HandScore::hand(&self.cards, cut)
    }

    /// Returns the number of kept cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand holds no kept cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether every card has been laid.
    #[must_use]
    pub fn is_played_out(&self) -> bool {
        self.play_hand.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.play_hand.clear();
    }
}
