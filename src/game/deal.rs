use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::card::{Card, standard_deck};
use crate::error::{DealError, RoundError};

use super::{Game, GameState, RoundState};

/// How many cards each seat and the crib receive for a player count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealLayout {
    /// Cards dealt to each seat.
    pub hand_size: usize,
    /// Cards dealt straight from the deck into the crib.
    pub crib_from_deck: usize,
    /// Cards each seat gives to the crib.
    pub discard: usize,
}

impl DealLayout {
    /// Returns the layout for `players` seats, or `None` if the count is not
    /// supported.
    #[must_use]
    pub const fn for_players(players: usize) -> Option<Self> {
        let (hand_size, crib_from_deck, discard) = match players {
            2 => (6, 0, 2),
            3 => (5, 1, 1),
            4 => (5, 0, 1),
            6 => (4, 0, 0),
            _ => return None,
        };
        Some(Self {
            hand_size,
            crib_from_deck,
            discard,
        })
    }

    /// Cards that leave the deck before the cut.
    #[must_use]
    pub const fn cards_dealt(&self, players: usize) -> usize {
        players * self.hand_size + self.crib_from_deck
    }
}

impl Game {
    /// Shuffles a fresh deck, deals every seat and fills the crib.
    ///
    /// Cards go out starting with the seat left of the dealer. Each seat then
    /// gives its first `discard` cards to the crib.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a deal.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        let mut stock = standard_deck();
        stock.shuffle(&mut self.rng);
        self.deal_from(stock)
    }

    /// Deals from `stock` in the order given, without shuffling.
    ///
    /// Each seat takes its whole hand from the front of `stock`, starting
    /// left of the dealer; crib cards dealt from the deck come next and the
    /// rest stays in the stock for the cut. Replays a recorded deal or sets
    /// up a known table.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a deal or `stock`
    /// would leave no card to cut. A full deck always suffices.
    pub fn deal_from(&mut self, mut stock: Vec<Card>) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        let seats = self.players.len();
        // The cut needs one card left over.
        if self.layout.cards_dealt(seats) >= stock.len() {
            return Err(DealError::NotEnoughCards);
        }

        let mut round = RoundState::default();
        for offset in 1..=seats {
            let seat = self.seat_after_dealer(offset);
            let dealt: Vec<Card> = stock.drain(..self.layout.hand_size).collect();
            self.players[seat].hand.deal(dealt);
        }
        round.crib.extend(stock.drain(..self.layout.crib_from_deck));

        for offset in 1..=seats {
            let seat = self.seat_after_dealer(offset);
            let discarded = self.players[seat].hand.discard(self.layout.discard);
            round.crib.extend(discarded);
        }
        round.stock = stock;

        debug!(
            dealer = self.dealer,
            crib = round.crib.len(),
            stock = round.stock.len(),
            "dealt"
        );

        self.round = round;
        self.state = GameState::Cut;
        Ok(())
    }

    /// Cuts a card from the undealt stock.
    ///
    /// A Jack scores his heels for the dealer, which can end the game.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for the cut or the stock
    /// is empty.
    pub fn cut(&mut self) -> Result<Card, RoundError> {
        if self.state != GameState::Cut {
            return Err(RoundError::InvalidState);
        }
        if self.round.stock.is_empty() {
            return Err(RoundError::NoCards);
        }

        let index = self.rng.random_range(0..self.round.stock.len());
        let cut = self.round.stock.swap_remove(index);
        self.round.cut = Some(cut);
        self.state = GameState::Play;
        debug!(cut = %cut, "cut");

        if cut.is_jack() {
            let points = self.options.his_heels_points;
            self.round.his_heels = points;
            debug!(dealer = self.dealer, points, "his heels");
            self.award(self.dealer, points);
        }

        Ok(cut)
    }
}
