//! A cribbage scoring and play engine with optional `no_std` support.
//!
//! The crate has two pure engines and a [`Game`] type that drives them:
//!
//! - [`score_hand`] and [`HandScore`] count a hand or crib against the cut.
//! - [`choose_card`] and [`evaluate_play`] pick the card that scores the
//!   most right away during the play.
//! - [`Game`] deals, cuts, plays, and counts rounds between automated teams
//!   until one of them reaches the target score.
//!
//! # Example
//!
//! ```
//! use cribrs::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42)?;
//! let result = game.play_to_end(500)?;
//! assert!(result.winner.is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod play;
pub mod result;
pub mod scoring;

// Re-export main types
pub use card::{ACE, Card, DECK_SIZE, JACK, KING, QUEEN, Suit, standard_deck};
pub use error::{CardError, DealError, RoundError, SetupError};
pub use game::{DealLayout, Game, GameState, Player, RoundState, Team};
pub use hand::Hand;
pub use options::GameOptions;
pub use play::{FifteenWindow, Play, PlayKind, choose_card, evaluate_play, playable_cards};
pub use result::{GameResult, PlayEvent, RoundResult, ShowResult};
pub use scoring::{HandScore, award_last_card, award_last_card_with, score_crib, score_hand};
