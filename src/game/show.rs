use alloc::vec::Vec;

use tracing::debug;

use crate::error::RoundError;
use crate::result::{RoundResult, ShowResult};
use crate::scoring::HandScore;

use super::{Game, GameState, RoundState};

impl Game {
    /// Counts every hand and then the crib.
    ///
    /// Hands are shown starting left of the dealer, so the dealer's hand
    /// comes last and is followed by the crib. Counting stops as soon as a
    /// team reaches the target score.
    ///
    /// Returns the hands counted, in counting order.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the counting phase.
    pub fn count(&mut self) -> Result<Vec<ShowResult>, RoundError> {
        if self.state != GameState::Count {
            return Err(RoundError::InvalidState);
        }
        let cut = self.round.cut.ok_or(RoundError::InvalidState)?;

        for offset in 1..=self.players.len() {
            let seat = self.seat_after_dealer(offset);
            let hand = &self.players[seat].hand;
            let score = hand.score(cut);
            self.round.shows.push(ShowResult {
                seat,
                cards: hand.cards().to_vec(),
                score,
            });
            debug!(seat, points = score.total(), "hand counted");

            if self.award(seat, score.total()) {
                return Ok(self.round.shows.clone());
            }
        }

        let crib = HandScore::crib(&self.round.crib, cut);
        self.round.crib_score = Some(crib);
        debug!(dealer = self.dealer, points = crib.total(), "crib counted");

        if !self.award(self.dealer, crib.total()) {
            self.state = GameState::RoundOver;
        }
        Ok(self.round.shows.clone())
    }

    /// Closes the current round and returns its summary.
    ///
    /// After a complete round the deal passes to the left and the game waits
    /// for the next deal. After the game has ended the partial round is
    /// summarized, left in place for inspection, and the game stays over.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is still in progress.
    pub fn finish_round(&mut self) -> Result<RoundResult, RoundError> {
        match self.state {
            GameState::RoundOver | GameState::GameOver => {}
            _ => return Err(RoundError::InvalidState),
        }

        let result = RoundResult {
            dealer: self.dealer,
            cut: self.round.cut,
            his_heels: self.round.his_heels,
            play_events: self.round.events.clone(),
            shows: self.round.shows.clone(),
            crib: self.round.crib_score,
            team_scores: self.team_scores(),
        };

        if self.state == GameState::RoundOver {
            for player in &mut self.players {
                player.hand.clear();
            }
            self.round = RoundState::default();
            self.dealer = self.seat_after_dealer(1);
            self.rounds_played += 1;
            self.state = GameState::Dealing;
        }

        Ok(result)
    }
}
