//! Card selection during the play.
//!
//! The engine looks only at immediate points: reaching 15 or 31 exactly,
//! completing a run at the tail of the played sequence, or matching the rank
//! of the cards just laid. When nothing scores it plays a random legal card.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::card::Card;
use crate::scoring::pair_value;

/// Highest running count of a play segment.
pub const MAX_COUNT: u8 = 31;

/// Longest run that fits under [`MAX_COUNT`] (Ace through Seven).
pub const MAX_PLAY_RUN: usize = 7;

const EXACT_TOTAL_POINTS: u8 = 2;

/// Which counts aim for 15 rather than 31.
///
/// With no card counting 0 or 16 both windows pick the same cards; the
/// choice only changes which target is reported at a count of exactly 15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FifteenWindow {
    /// Aim for 15 while the count is below 15.
    #[default]
    Below,
    /// Aim for 15 while the count is at most 15.
    AtOrBelow,
}

impl FifteenWindow {
    /// The exact total worth points from `count`.
    #[must_use]
    pub const fn target(self, count: u8) -> u8 {
        let aims_fifteen = match self {
            Self::Below => count < 15,
            Self::AtOrBelow => count <= 15,
        };
        if aims_fifteen { 15 } else { MAX_COUNT }
    }
}

/// Why a card was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayKind {
    /// Brings the count to exactly 15 or 31.
    Exact,
    /// Completes a run with the most recent cards.
    Run,
    /// Matches the rank of the most recent cards.
    Pair,
    /// Nothing scores; picked at random.
    Free,
}

/// A chosen card and the points it scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Play {
    /// The card to lay.
    pub card: Card,
    /// Points scored by laying it.
    pub points: u8,
    /// The candidate that selected the card.
    pub kind: PlayKind,
}

/// Returns whether `card` can be laid without passing 31.
#[must_use]
pub const fn is_playable(card: &Card, count: u8) -> bool {
    count.saturating_add(card.count_value()) <= MAX_COUNT
}

/// Cards of `hand` that can be laid at `count`, in hand order.
#[must_use]
pub fn playable_cards(hand: &[Card], count: u8) -> Vec<Card> {
    hand.iter()
        .filter(|card| is_playable(card, count))
        .copied()
        .collect()
}

/// Two points if `card` brings `count` to the current exact total.
#[must_use]
pub const fn exact_total_bonus(card: &Card, count: u8, window: FifteenWindow) -> u8 {
    if count.saturating_add(card.count_value()) == window.target(count) {
        EXACT_TOTAL_POINTS
    } else {
        0
    }
}

/// Length of the longest run formed by `card` and the cards laid just
/// before it, or 0 when there is none.
///
/// Only the last `MAX_PLAY_RUN - 1` played cards are examined.
#[must_use]
pub fn run_points(played: &[Card], card: &Card) -> u8 {
    let available = played.len().min(MAX_PLAY_RUN - 1);
    for tail in (2..=available).rev() {
        let mut ranks = [0u8; MAX_PLAY_RUN];
        ranks[0] = card.rank();
        for (slot, played_card) in ranks[1..=tail]
            .iter_mut()
            .zip(&played[played.len() - tail..])
        {
            *slot = played_card.rank();
        }

        let sorted = &mut ranks[..=tail];
        sorted.sort_unstable();
        if sorted.windows(2).all(|pair| pair[1] == pair[0] + 1) {
            return (tail + 1) as u8;
        }
    }
    0
}

/// Points for matching the rank of the cards laid just before `card`.
#[must_use]
pub fn pair_points(played: &[Card], card: &Card) -> u8 {
    let matching = played
        .iter()
        .rev()
        .take_while(|played_card| played_card.rank() == card.rank())
        .count();
    if matching == 0 {
        0
    } else {
        pair_value(matching as u8 + 1)
    }
}

/// Chooses the card to lay from `hand`.
///
/// Returns `None` only when no card in `hand` fits under 31. Scoring plays
/// are ranked by their structural points plus any exact-total bonus; ties go
/// to the exact-total card, then the run, then the pair. When nothing
/// scores, a playable card is drawn from `rng` and scores zero.
pub fn evaluate_play<R: Rng + ?Sized>(
    hand: &[Card],
    played: &[Card],
    count: u8,
    window: FifteenWindow,
    rng: &mut R,
) -> Option<Play> {
    debug_assert!(count <= MAX_COUNT, "running count {count} exceeds 31");

    let playable = playable_cards(hand, count);
    if playable.is_empty() {
        return None;
    }

    let target = window.target(count);
    let exact = playable
        .iter()
        .find(|card| count + card.count_value() == target)
        .map(|&card| (card, 0, PlayKind::Exact));

    let mut run: Option<(Card, u8, PlayKind)> = None;
    if played.len() >= 2 {
        for card in &playable {
            let points = run_points(played, card);
            if points > 0 && run.is_none_or(|(_, best, _)| points > best) {
                run = Some((*card, points, PlayKind::Run));
            }
        }
    }

    let pair = playable.iter().find_map(|card| {
        let points = pair_points(played, card);
        (points > 0).then_some((*card, points, PlayKind::Pair))
    });

    let mut best: Option<Play> = None;
    for (card, structural, kind) in [exact, run, pair].into_iter().flatten() {
        let points = structural + exact_total_bonus(&card, count, window);
        if best.is_none_or(|play| points > play.points) {
            best = Some(Play { card, points, kind });
        }
    }

    best.or_else(|| {
        playable.choose(rng).map(|&card| Play {
            card,
            points: 0,
            kind: PlayKind::Free,
        })
    })
}

/// Chooses a card from the working play hand and removes it.
///
/// Returns `(None, 0)` when nothing in `play_hand` can be laid, which is the
/// signal to pass.
pub fn choose_card<R: Rng + ?Sized>(
    play_hand: &mut Vec<Card>,
    played: &[Card],
    count: u8,
    window: FifteenWindow,
    rng: &mut R,
) -> (Option<Card>, u8) {
    let Some(play) = evaluate_play(play_hand, played, count, window, rng) else {
        return (None, 0);
    };
    if let Some(index) = play_hand.iter().position(|card| *card == play.card) {
        play_hand.remove(index);
    }
    (Some(play.card), play.points)
}
