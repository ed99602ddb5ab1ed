use alloc::vec;
use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::card::Card;
use crate::error::RoundError;
use crate::play::MAX_COUNT;
use crate::result::PlayEvent;
use crate::scoring::award_last_card_with;

use super::{Game, GameState};

/// How a play segment ended.
enum SegmentEnd {
    /// The count reached 31 or everyone passed; play continues after `seat`.
    Closed { seat: usize },
    /// A team reached the target score.
    GameOver,
}

impl Game {
    /// Lays out every play hand, segment by segment.
    ///
    /// Turns rotate starting left of the dealer. A segment closes when the
    /// count reaches 31 or when every seat has passed; in the second case
    /// the last seat to lay a card is credited through
    /// [`award_last_card_with`]. The next segment opens with the seat after
    /// the one that closed the previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the play phase.
    pub fn play(&mut self) -> Result<(), RoundError> {
        if self.state != GameState::Play {
            return Err(RoundError::InvalidState);
        }

        let mut lead = self.seat_after_dealer(1);
        while self
            .players
            .iter()
            .any(|player| !player.hand.is_played_out())
        {
            match self.play_segment(lead) {
                SegmentEnd::Closed { seat } => lead = (seat + 1) % self.players.len(),
                SegmentEnd::GameOver => return Ok(()),
            }
        }

        self.state = GameState::Count;
        Ok(())
    }

    fn play_segment(&mut self, lead: usize) -> SegmentEnd {
        let seats = self.players.len();
        let window = self.options.fifteen_window;

        let mut played: Vec<Card> = Vec::new();
        let mut count: u8 = 0;
        let mut passed = vec![false; seats];
        let mut last_to_lay = lead;
        let mut seat = lead;

        loop {
            let (card, points) = self.players[seat]
                .hand
                .play(&played, count, window, &mut self.rng);

            if let Some(card) = card {
                count += card.count_value();
                played.push(card);
                self.round.played.push(card);
                last_to_lay = seat;
                self.round.events.push(PlayEvent::Played {
                    seat,
                    card,
                    points,
                    count,
                });
                trace!(seat, card = %card, count, points, "card laid");

                if self.award(seat, points) {
                    return SegmentEnd::GameOver;
                }
                if count == MAX_COUNT {
                    debug!(seat, cards = played.len(), "segment closed at 31");
                    return SegmentEnd::Closed { seat };
                }
            } else {
                passed[seat] = true;
                self.round.events.push(PlayEvent::Pass { seat });

                if passed.iter().all(|&has_passed| has_passed) {
                    let team = self.players[last_to_lay].team;
                    let points =
                        award_last_card_with(self.team_score(team), self.options.pin_threshold);
                    self.round.events.push(PlayEvent::LastCard {
                        seat: last_to_lay,
                        points,
                    });
                    debug!(seat = last_to_lay, count, points, "segment closed on a go");

                    if self.award(last_to_lay, points) {
                        return SegmentEnd::GameOver;
                    }
                    return SegmentEnd::Closed { seat: last_to_lay };
                }
            }

            seat = (seat + 1) % seats;
        }
    }
}
