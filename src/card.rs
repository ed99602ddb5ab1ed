//! Card types and deck utilities.

use alloc::vec::Vec;
use core::fmt;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }
}

/// Rank of the Ace.
pub const ACE: u8 = 1;
/// Rank of the Jack.
pub const JACK: u8 = 11;
/// Rank of the Queen.
pub const QUEEN: u8 = 12;
/// Rank of the King.
pub const KING: u8 = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// A playing card.
///
/// Cards are immutable once built; [`Card::new`] rejects ranks outside
/// `1..=13`, so every `Card` in circulation has a valid count value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is not in `1..=13`.
    pub const fn new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if rank < ACE || rank > KING {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self { suit, rank })
    }

    /// The suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// The value the card adds to the running count: face cards count ten.
    #[must_use]
    pub const fn count_value(&self) -> u8 {
        if self.rank > 10 { 10 } else { self.rank }
    }

    /// Returns whether the card is a Jack.
    #[must_use]
    pub const fn is_jack(&self) -> bool {
        self.rank == JACK
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            ACE => write!(f, "A")?,
            JACK => write!(f, "J")?,
            QUEEN => write!(f, "Q")?,
            KING => write!(f, "K")?,
            rank => write!(f, "{rank}")?,
        }
        write!(f, "{}", self.suit.symbol())
    }
}

/// Builds the 52 unique cards of a standard deck, suit by suit.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in ACE..=KING {
            cards.push(Card { suit, rank });
        }
    }
    cards
}
