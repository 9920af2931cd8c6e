use poker_hands::evaluator::{Category, Verdict};
use poker_hands::round::{Round, RoundError};
use poker_hands::tally::Tally;

fn round(line: &str) -> Round {
    line.parse().expect("valid round")
}

fn categories(line: &str) -> (Category, Category) {
    let (a, b) = round(line).classify();
    (a.category(), b.category())
}

const ROUNDS: [&str; 5] = [
    "5H 5C 6S 7S KD 2C 3S 8S 8D TD",
    "5D 8C 9S JS AC 2C 5C 7D 8S QH",
    "2H 3H 4H 5H 6H 7D 8D 9D TD JD",
    "AH KH QH JH TH AH KH QH JH TH",
    "2C 3C 4C 5C 6C 2D 3D 4D 5D 7D",
];

#[test]
fn higher_pair_wins() {
    assert_eq!(categories(ROUNDS[0]), (Category::Pair, Category::Pair));
    assert_eq!(round(ROUNDS[0]).verdict(), Verdict::SecondWins);
}

#[test]
fn ace_high_beats_queen_high() {
    assert_eq!(categories(ROUNDS[1]), (Category::HighCard, Category::HighCard));
    assert_eq!(round(ROUNDS[1]).verdict(), Verdict::FirstWins);
}

#[test]
fn higher_straight_flush_wins() {
    assert_eq!(categories(ROUNDS[2]), (Category::StraightFlush, Category::StraightFlush));
    assert_eq!(round(ROUNDS[2]).verdict(), Verdict::SecondWins);
}

#[test]
fn identical_royal_flushes_tie() {
    assert_eq!(categories(ROUNDS[3]), (Category::RoyalFlush, Category::RoyalFlush));
    assert_eq!(round(ROUNDS[3]).verdict(), Verdict::Tie);
}

#[test]
fn straight_flush_beats_lower_category() {
    let (a, b) = categories(ROUNDS[4]);
    assert_eq!(a, Category::StraightFlush);
    assert!(b < a);
    assert_eq!(round(ROUNDS[4]).verdict(), Verdict::FirstWins);
}

#[test]
fn two_pair_ordering_high_then_low_then_kicker() {
    assert_eq!(round("KC KD 3H 3S 2C QC QD JH JS AC").verdict(), Verdict::FirstWins);
    assert_eq!(round("KC KD 3H 3S 2C KH KS 4H 4D 2D").verdict(), Verdict::SecondWins);
    assert_eq!(round("KC KD 3H 3S 5C KH KS 3D 3C 4D").verdict(), Verdict::FirstWins);
    assert_eq!(round("KC KD 3H 3S 5C KH KS 3D 3C 5D").verdict(), Verdict::Tie);
}

#[test]
fn flush_compares_every_card() {
    assert_eq!(round("AH QH 9H 5H 3H AD QD 9D 5D 2D").verdict(), Verdict::FirstWins);
    assert_eq!(round("AH QH 9H 5H 3H AD KD 9D 5D 2D").verdict(), Verdict::SecondWins);
}

#[test]
fn quads_beat_full_house_regardless_of_values() {
    assert_eq!(round("2C 2D 2H 2S 3C AC AD AH KS KC").verdict(), Verdict::FirstWins);
}

#[test]
fn tally_of_all_scenarios() {
    let tally: Tally = ROUNDS.iter().map(|l| round(l).verdict()).collect();
    assert_eq!(tally.first_wins(), 2);
    assert_eq!(tally.second_wins(), 2);
    assert_eq!(tally.ties(), 1);
    assert_eq!(tally.to_string(), "---------------RESULTS---------------\nPlayer 1 2\nPlayer 2 2");
}

#[test]
fn malformed_rounds_are_errors() {
    assert!(matches!("5H 5C 6S 7S KD".parse::<Round>(), Err(RoundError::CardCount(5))));
    assert!(matches!("5H 5C 6S 7S KD 2C 3S 8S 8D XX".parse::<Round>(), Err(RoundError::Card(_))));
}
