//! Hand scoring: pairs, fifteens, flush, runs and nobs.
//!
//! Every function here is pure and ignores the order of its input. The cut
//! card takes part in every rule except the flush, where it can only add a
//! point, and nobs, where it supplies the suit to match.

use crate::card::{Card, KING};

/// Points for a group of equal ranks, indexed by group size.
///
/// Every distinct pair inside the group is worth two points.
pub const PAIR_POINTS: [u8; 5] = [0, 0, 2, 6, 12];

/// Score at or above which a team no longer receives the last-card point.
pub const PIN_THRESHOLD: u16 = 116;

/// Most cards [`score_fifteens`] will enumerate.
pub const MAX_FIFTEEN_CARDS: usize = 16;

/// Points for a group of `multiplicity` cards sharing a rank.
#[must_use]
pub const fn pair_value(multiplicity: u8) -> u8 {
    if (multiplicity as usize) < PAIR_POINTS.len() {
        PAIR_POINTS[multiplicity as usize]
    } else {
        multiplicity.saturating_mul(multiplicity - 1)
    }
}

/// Per-rule breakdown of a hand or crib score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandScore {
    /// Points from cards of equal rank.
    pub pairs: u8,
    /// Points from combinations summing to fifteen.
    pub fifteens: u8,
    /// Points from a flush.
    pub flush: u8,
    /// Points from runs, multiplied by duplicated ranks.
    pub run: u8,
    /// One for his nob.
    pub nobs: u8,
}

impl HandScore {
    /// Scores a player's hand against the cut.
    #[must_use]
    pub fn hand(hand: &[Card], cut: Card) -> Self {
        Self {
            pairs: score_pairs(hand, cut),
            fifteens: score_fifteens(hand, cut),
            flush: score_flush(hand, cut),
            run: score_run(hand, cut),
            nobs: score_nobs(hand, cut),
        }
    }

    /// Scores the crib against the cut.
    ///
    /// Identical to [`HandScore::hand`] except that a crib flush must include
    /// the cut card.
    #[must_use]
    pub fn crib(crib: &[Card], cut: Card) -> Self {
        Self {
            flush: score_crib_flush(crib, cut),
            ..Self::hand(crib, cut)
        }
    }

    /// Sum of all five rules.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.pairs
            .saturating_add(self.fifteens)
            .saturating_add(self.flush)
            .saturating_add(self.run)
            .saturating_add(self.nobs)
    }
}

/// Scores a hand together with the cut card.
///
/// # Example
///
/// ```
/// use cribrs::{Card, Suit, score_hand};
///
/// let hand = [
///     Card::new(Suit::Spades, 5)?,
///     Card::new(Suit::Clubs, 5)?,
///     Card::new(Suit::Diamonds, 5)?,
///     Card::new(Suit::Hearts, 11)?,
/// ];
/// let cut = Card::new(Suit::Hearts, 5)?;
/// assert_eq!(score_hand(&hand, cut), 29);
/// # Ok::<(), cribrs::CardError>(())
/// ```
#[must_use]
pub fn score_hand(hand: &[Card], cut: Card) -> u8 {
    HandScore::hand(hand, cut).total()
}

/// Scores the crib together with the cut card.
#[must_use]
pub fn score_crib(crib: &[Card], cut: Card) -> u8 {
    HandScore::crib(crib, cut).total()
}

fn rank_counts(hand: &[Card], cut: Card) -> [u8; KING as usize + 1] {
    let mut counts = [0u8; KING as usize + 1];
    for card in hand.iter().chain(core::iter::once(&cut)) {
        counts[card.rank() as usize] += 1;
    }
    counts
}

/// Two points for every pair of cards sharing a rank.
#[must_use]
pub fn score_pairs(hand: &[Card], cut: Card) -> u8 {
    rank_counts(hand, cut)
        .into_iter()
        .fold(0u8, |acc, count| acc.saturating_add(pair_value(count)))
}

/// Two points for every distinct combination of cards counting exactly 15.
///
/// At most [`MAX_FIFTEEN_CARDS`] cards are enumerated, the cut included;
/// cards past that are ignored.
#[must_use]
pub fn score_fifteens(hand: &[Card], cut: Card) -> u8 {
    let mut values = [0u8; MAX_FIFTEEN_CARDS];
    let len = (hand.len() + 1).min(MAX_FIFTEEN_CARDS);
    for (slot, card) in values.iter_mut().zip(core::iter::once(&cut).chain(hand)) {
        *slot = card.count_value();
    }

    let mut points: u8 = 0;
    for mask in 1u32..(1 << len) {
        if mask.count_ones() < 2 {
            continue;
        }
        let sum: u32 = (0..len)
            .filter(|&i| mask & (1 << i) != 0)
            .map(|i| u32::from(values[i]))
            .sum();
        if sum == 15 {
            points = points.saturating_add(2);
        }
    }
    points
}

/// Four points when every card of the hand shares a suit, five if the cut
/// matches too.
#[must_use]
pub fn score_flush(hand: &[Card], cut: Card) -> u8 {
    let Some(first) = hand.first() else {
        return 0;
    };
    if !hand.iter().all(|card| card.suit() == first.suit()) {
        return 0;
    }
    if cut.suit() == first.suit() { 5 } else { 4 }
}

/// Five points when every crib card and the cut share a suit.
#[must_use]
pub fn score_crib_flush(crib: &[Card], cut: Card) -> u8 {
    if crib.is_empty() || !crib.iter().all(|card| card.suit() == cut.suit()) {
        return 0;
    }
    5
}

/// Points for the longest run of three or more consecutive ranks.
///
/// A run scores its length times the number of ways it can be formed, so a
/// double run of three (`3 4 4 5`) scores six.
#[must_use]
pub fn score_run(hand: &[Card], cut: Card) -> u8 {
    let counts = rank_counts(hand, cut);

    let mut best: (u8, u8) = (0, 0);
    let mut len: u8 = 0;
    let mut ways: u8 = 1;
    // The trailing zero closes a run ending on a King.
    for count in counts[1..].iter().copied().chain(core::iter::once(0)) {
        if count == 0 {
            if len >= 3 && len > best.0 {
                best = (len, len.saturating_mul(ways));
            }
            len = 0;
            ways = 1;
        } else {
            len += 1;
            ways = ways.saturating_mul(count);
        }
    }
    best.1
}

/// One point for a Jack in hand matching the cut's suit.
#[must_use]
pub fn score_nobs(hand: &[Card], cut: Card) -> u8 {
    u8::from(
        hand.iter()
            .any(|card| card.is_jack() && card.suit() == cut.suit()),
    )
}

/// Point for the last card of a segment that ended with everyone passing.
///
/// A team at or above [`PIN_THRESHOLD`] gets nothing.
#[must_use]
pub const fn award_last_card(current_score: u16) -> u8 {
    award_last_card_with(current_score, PIN_THRESHOLD)
}

/// [`award_last_card`] with a configurable threshold.
#[must_use]
pub const fn award_last_card_with(current_score: u16, pin_threshold: u16) -> u8 {
    if current_score < pin_threshold { 1 } else { 0 }
}
