//! Play decision tests.

use cribrs::play::{exact_total_bonus, is_playable, pair_points, run_points};
use cribrs::{
    Card, FifteenWindow, PlayKind, Suit, choose_card, evaluate_play, playable_cards,
    standard_deck,
};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank).unwrap()
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

fn count_of(played: &[Card]) -> u8 {
    played.iter().map(Card::count_value).sum()
}

#[test]
fn completes_fifteen() {
    let played = [card(Suit::Spades, 8), card(Suit::Hearts, 5)];
    let mut hand = vec![card(Suit::Clubs, 2), card(Suit::Diamonds, 13)];

    let (chosen, points) = choose_card(
        &mut hand,
        &played,
        count_of(&played),
        FifteenWindow::Below,
        &mut rng(),
    );

    assert_eq!(chosen, Some(card(Suit::Clubs, 2)));
    assert_eq!(points, 2);
    assert_eq!(hand, vec![card(Suit::Diamonds, 13)]);
}

#[test]
fn completes_thirty_one() {
    let played = [
        card(Suit::Spades, 10),
        card(Suit::Hearts, 11),
        card(Suit::Diamonds, 1),
    ];
    let hand = [card(Suit::Hearts, 4), card(Suit::Clubs, 13)];

    let play = evaluate_play(&hand, &played, 21, FifteenWindow::Below, &mut rng()).unwrap();
    assert_eq!(play.card, card(Suit::Clubs, 13));
    assert_eq!(play.points, 2);
    assert_eq!(play.kind, PlayKind::Exact);
}

#[test]
fn run_that_also_makes_fifteen_scores_both() {
    let played = [card(Suit::Spades, 4), card(Suit::Hearts, 6)];
    let hand = [card(Suit::Clubs, 13), card(Suit::Diamonds, 5)];

    let play = evaluate_play(&hand, &played, 10, FifteenWindow::Below, &mut rng()).unwrap();
    assert_eq!(play.card, card(Suit::Diamonds, 5));
    assert_eq!(play.points, 5);
    assert_eq!(play.kind, PlayKind::Run);
}

#[test]
fn run_of_four_from_unordered_tail() {
    let played = [
        card(Suit::Spades, 3),
        card(Suit::Hearts, 5),
        card(Suit::Diamonds, 4),
    ];
    let hand = [card(Suit::Clubs, 6), card(Suit::Diamonds, 2)];

    let play = evaluate_play(&hand, &played, 12, FifteenWindow::Below, &mut rng()).unwrap();
    assert_eq!(play.card, card(Suit::Clubs, 6));
    assert_eq!(play.points, 4);
    assert_eq!(play.kind, PlayKind::Run);
}

#[test]
fn run_must_cover_whole_tail() {
    let played = [
        card(Suit::Spades, 3),
        card(Suit::Hearts, 4),
        card(Suit::Diamonds, 9),
    ];
    assert_eq!(run_points(&played, &card(Suit::Clubs, 5)), 0);
    assert_eq!(run_points(&played, &card(Suit::Clubs, 10)), 0);
    assert_eq!(run_points(&played[..2], &card(Suit::Clubs, 5)), 3);
    assert_eq!(run_points(&played[..1], &card(Suit::Clubs, 5)), 0);
}

#[test]
fn run_with_duplicate_rank_breaks() {
    let played = [
        card(Suit::Spades, 3),
        card(Suit::Hearts, 4),
        card(Suit::Diamonds, 4),
    ];
    assert_eq!(run_points(&played, &card(Suit::Clubs, 5)), 0);
}

#[test]
fn longest_run_is_seven() {
    let played: Vec<Card> = (1..=6).map(|rank| card(Suit::Spades, rank)).collect();
    assert_eq!(run_points(&played, &card(Suit::Hearts, 7)), 7);
}

#[test]
fn pairs_extend_with_matching_tail() {
    let played = [card(Suit::Spades, 7)];
    let hand = [card(Suit::Hearts, 7), card(Suit::Clubs, 2)];
    let play = evaluate_play(&hand, &played, 7, FifteenWindow::Below, &mut rng()).unwrap();
    assert_eq!(play.card, card(Suit::Hearts, 7));
    assert_eq!(play.points, 2);
    assert_eq!(play.kind, PlayKind::Pair);

    let played = [card(Suit::Spades, 4), card(Suit::Hearts, 4)];
    assert_eq!(pair_points(&played, &card(Suit::Clubs, 4)), 6);

    let played = [
        card(Suit::Spades, 2),
        card(Suit::Hearts, 2),
        card(Suit::Diamonds, 2),
    ];
    assert_eq!(pair_points(&played, &card(Suit::Clubs, 2)), 12);

    let played = [card(Suit::Spades, 4), card(Suit::Hearts, 9)];
    assert_eq!(pair_points(&played, &card(Suit::Clubs, 4)), 0);
}

#[test]
fn pair_royal_reaching_fifteen() {
    let played = [card(Suit::Spades, 5), card(Suit::Hearts, 5)];
    let hand = [card(Suit::Diamonds, 5)];

    let play = evaluate_play(&hand, &played, 10, FifteenWindow::Below, &mut rng()).unwrap();
    assert_eq!(play.points, 8);
    assert_eq!(play.kind, PlayKind::Pair);
}

#[test]
fn exact_total_wins_ties() {
    // 6 makes 15 for two points; 9 pairs for two points.
    let played = [card(Suit::Spades, 9)];
    let hand = [card(Suit::Hearts, 9), card(Suit::Clubs, 6)];

    let play = evaluate_play(&hand, &played, 9, FifteenWindow::Below, &mut rng()).unwrap();
    assert_eq!(play.card, card(Suit::Clubs, 6));
    assert_eq!(play.kind, PlayKind::Exact);
    assert_eq!(play.points, 2);
}

#[test]
fn passes_when_nothing_fits() {
    let played = [
        card(Suit::Spades, 10),
        card(Suit::Hearts, 10),
        card(Suit::Diamonds, 5),
    ];
    let mut hand = vec![card(Suit::Clubs, 13), card(Suit::Clubs, 8)];

    let result = choose_card(&mut hand, &played, 25, FifteenWindow::Below, &mut rng());
    assert_eq!(result, (None, 0));
    assert_eq!(hand.len(), 2);

    let mut empty = Vec::new();
    assert_eq!(
        choose_card(&mut empty, &[], 0, FifteenWindow::Below, &mut rng()),
        (None, 0)
    );
}

#[test]
fn free_play_is_seeded() {
    let played = [card(Suit::Spades, 13)];
    let hand = [
        card(Suit::Hearts, 1),
        card(Suit::Clubs, 3),
        card(Suit::Diamonds, 8),
    ];

    let first = evaluate_play(&hand, &played, 10, FifteenWindow::Below, &mut rng()).unwrap();
    let second = evaluate_play(&hand, &played, 10, FifteenWindow::Below, &mut rng()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.points, 0);
    assert_eq!(first.kind, PlayKind::Free);
    assert!(hand.contains(&first.card));
}

#[test]
fn fifteen_windows_agree() {
    let deck = standard_deck();
    for count in 0..=31 {
        for card in &deck {
            assert_eq!(
                exact_total_bonus(card, count, FifteenWindow::Below),
                exact_total_bonus(card, count, FifteenWindow::AtOrBelow),
                "count {count} card {card}"
            );
        }
    }
    assert_eq!(FifteenWindow::Below.target(15), 31);
    assert_eq!(FifteenWindow::AtOrBelow.target(15), 15);
}

#[test]
fn playable_filter_respects_thirty_one() {
    let hand = [
        card(Suit::Spades, 1),
        card(Suit::Hearts, 6),
        card(Suit::Clubs, 7),
        card(Suit::Diamonds, 12),
    ];
    assert_eq!(
        playable_cards(&hand, 25),
        vec![card(Suit::Spades, 1), card(Suit::Hearts, 6)]
    );
    assert!(is_playable(&card(Suit::Diamonds, 12), 21));
    assert!(!is_playable(&card(Suit::Diamonds, 12), 22));
}

#[test]
fn chosen_card_is_always_playable() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut deck = standard_deck();

    for _ in 0..500 {
        deck.shuffle(&mut rng);

        let mut played = Vec::new();
        let mut count = 0;
        for card in &deck[..6] {
            if count + card.count_value() > 31 {
                break;
            }
            count += card.count_value();
            played.push(*card);
        }
        let original: Vec<Card> = deck[6..10].to_vec();
        let mut hand = original.clone();
        let playable = playable_cards(&hand, count);

        let (chosen, points) =
            choose_card(&mut hand, &played, count, FifteenWindow::Below, &mut rng);

        match chosen {
            Some(card) => {
                assert!(playable.contains(&card));
                assert!(count + card.count_value() <= 31);
                assert_eq!(hand.len(), original.len() - 1);
                assert!(!hand.contains(&card));
            }
            None => {
                assert!(playable.is_empty());
                assert_eq!(points, 0);
                assert_eq!(hand, original);
            }
        }
    }
}
