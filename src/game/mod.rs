//! Game engine and round orchestration.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::error::{RoundError, SetupError};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::{GameResult, RoundResult};

mod deal;
mod segment;
mod show;
pub mod state;

pub use deal::DealLayout;
pub use state::{GameState, Player, RoundState, Team};

/// A cribbage game between automated teams.
///
/// The game owns the players, the dealer position, the current round and
/// the random number generator. Rounds advance through [`GameState`] one
/// phase at a time, or all at once through [`Game::play_round`].
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    layout: DealLayout,
    players: Vec<Player>,
    teams: Vec<Team>,
    state: GameState,
    dealer: usize,
    round: RoundState,
    rounds_played: u32,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// Seats alternate between teams, so with two teams of two the partners
    /// sit opposite each other. Seat 0 deals first.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than two teams, a team has no
    /// players, or no dealing layout exists for the player count.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42)?;
    /// assert_eq!(game.state(), GameState::Dealing);
    /// # Ok::<(), cribrs::SetupError>(())
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, SetupError> {
        let team_count = options.teams as usize;
        if team_count < 2 {
            return Err(SetupError::TooFewTeams(team_count));
        }
        if options.players_per_team == 0 {
            return Err(SetupError::EmptyTeam);
        }

        let player_count = options.player_count();
        let layout = DealLayout::for_players(player_count)
            .ok_or(SetupError::InvalidPlayerCount(player_count))?;

        let players = (0..player_count)
            .map(|seat| Player {
                team: seat % team_count,
                score: 0,
                hand: Hand::new(),
            })
            .collect();
        let teams = (0..team_count)
            .map(|id| Team {
                id,
                seats: (id..player_count).step_by(team_count).collect(),
            })
            .collect();

        Ok(Self {
            options,
            layout,
            players,
            teams,
            state: GameState::Dealing,
            dealer: 0,
            round: RoundState::default(),
            rounds_played: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the dealing layout for this table.
    #[must_use]
    pub const fn layout(&self) -> DealLayout {
        self.layout
    }

    /// Returns the dealer's seat.
    #[must_use]
    pub const fn dealer(&self) -> usize {
        self.dealer
    }

    /// Returns the players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the teams.
    #[must_use]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Returns the current round.
    #[must_use]
    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    /// Returns the number of completed rounds.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.round.stock.len()
    }

    /// Returns the summed score of a team's players.
    ///
    /// Returns 0 for an unknown team.
    #[must_use]
    pub fn team_score(&self, team: usize) -> u16 {
        self.players
            .iter()
            .filter(|player| player.team == team)
            .map(|player| player.score)
            .sum()
    }

    /// Returns all team scores in team order.
    #[must_use]
    pub fn team_scores(&self) -> Vec<u16> {
        (0..self.teams.len()).map(|team| self.team_score(team)).collect()
    }

    /// Returns the first team to have reached the target score.
    #[must_use]
    pub fn winner(&self) -> Option<usize> {
        (0..self.teams.len()).find(|&team| self.team_score(team) >= self.options.target_score)
    }

    /// Returns whether a team has reached the target score.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        matches!(self.state, GameState::GameOver)
    }

    /// Credits points to a seat. Returns `true` if this ended the game.
    fn award(&mut self, seat: usize, points: u8) -> bool {
        if points == 0 {
            return false;
        }
        let player = &mut self.players[seat];
        player.score = player.score.saturating_add(u16::from(points));

        let team = player.team;
        let score = self.team_score(team);
        if score >= self.options.target_score {
            info!(team, score, seat, "game over");
            self.state = GameState::GameOver;
            return true;
        }
        false
    }

    /// Seat `offset` places to the left of the dealer.
    fn seat_after_dealer(&self, offset: usize) -> usize {
        (self.dealer + offset) % self.players.len()
    }

    /// Plays a whole round: deal, cut, play, count and finish.
    ///
    /// Phases after a team reaches the target score are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a deal.
    pub fn play_round(&mut self) -> Result<RoundResult, RoundError> {
        self.deal()?;
        if self.state == GameState::Cut {
            self.cut()?;
        }
        if self.state == GameState::Play {
            self.play()?;
        }
        if self.state == GameState::Count {
            self.count()?;
        }
        self.finish_round()
    }

    /// Plays rounds until a team wins or `max_rounds` rounds have been played.
    ///
    /// # Errors
    ///
    /// Returns an error if a round cannot be started.
    pub fn play_to_end(&mut self, max_rounds: u32) -> Result<GameResult, RoundError> {
        let mut rounds = 0;
        while !self.is_game_over() && rounds < max_rounds {
            self.play_round()?;
            rounds += 1;
        }

        Ok(GameResult {
            winner: self.winner(),
            rounds,
            team_scores: self.team_scores(),
        })
    }
}
