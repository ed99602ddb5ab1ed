//! Game configuration options.

use crate::play::FifteenWindow;
use crate::scoring::PIN_THRESHOLD;

/// Configuration options for a cribbage game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cribrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_teams(2)
///     .with_players_per_team(2)
///     .with_target_score(61);
/// assert_eq!(options.player_count(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of teams.
    pub teams: u8,
    /// Number of players in each team.
    pub players_per_team: u8,
    /// Score that ends the game.
    pub target_score: u16,
    /// Team score at which the last-card point is no longer awarded.
    pub pin_threshold: u16,
    /// Points to the dealer when the cut is a Jack.
    pub his_heels_points: u8,
    /// Counts at which the play aims for 15.
    pub fifteen_window: FifteenWindow,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            teams: 2,
            players_per_team: 1,
            target_score: 121,
            pin_threshold: PIN_THRESHOLD,
            his_heels_points: 2,
            fifteen_window: FifteenWindow::Below,
        }
    }
}

impl GameOptions {
    /// Total number of players at the table.
    #[must_use]
    pub const fn player_count(&self) -> usize {
        self.teams as usize * self.players_per_team as usize
    }

    /// Sets the number of teams.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_teams(3);
    /// assert_eq!(options.teams, 3);
    /// ```
    #[must_use]
    pub const fn with_teams(mut self, teams: u8) -> Self {
        self.teams = teams;
        self
    }

    /// Sets the number of players in each team.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_players_per_team(3);
    /// assert_eq!(options.player_count(), 6);
    /// ```
    #[must_use]
    pub const fn with_players_per_team(mut self, players: u8) -> Self {
        self.players_per_team = players;
        self
    }

    /// Sets the score that ends the game.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_target_score(61);
    /// assert_eq!(options.target_score, 61);
    /// ```
    #[must_use]
    pub const fn with_target_score(mut self, score: u16) -> Self {
        self.target_score = score;
        self
    }

    /// Sets the team score at which the last-card point stops.
    #[must_use]
    pub const fn with_pin_threshold(mut self, score: u16) -> Self {
        self.pin_threshold = score;
        self
    }

    /// Sets the points for cutting a Jack.
    #[must_use]
    pub const fn with_his_heels_points(mut self, points: u8) -> Self {
        self.his_heels_points = points;
        self
    }

    /// Sets the counts at which the play aims for 15.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::{FifteenWindow, GameOptions};
    ///
    /// let options = GameOptions::default().with_fifteen_window(FifteenWindow::AtOrBelow);
    /// assert_eq!(options.fifteen_window, FifteenWindow::AtOrBelow);
    /// ```
    #[must_use]
    pub const fn with_fifteen_window(mut self, window: FifteenWindow) -> Self {
        self.fifteen_window = window;
        self
    }
}
