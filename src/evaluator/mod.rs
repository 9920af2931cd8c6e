pub(crate) mod compare;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

pub use compare::{compare, Verdict};

use crate::cards::Card;
use crate::hand::{Hand, HandError};
use detector::DETECTORS;
use hand_analysis::HandAnalysis;
use std::fmt;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    /// Strength from 1 (high card) to 10 (royal flush).
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// How many key cards a hand of this category carries.
    pub const fn key_len(self) -> usize {
        match self {
            Category::HighCard => 1,
            Category::Pair => 2,
            Category::ThreeOfAKind | Category::FullHouse => 3,
            Category::TwoPair | Category::FourOfAKind => 4,
            Category::Straight
            | Category::Flush
            | Category::StraightFlush
            | Category::RoyalFlush => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pairs",
            Category::ThreeOfAKind => "Three of a kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A hand together with its category and the key cards that justify it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedHand {
    hand: Hand,
    category: Category,
    key_cards: Vec<Card>,
}

impl ClassifiedHand {
    pub(crate) fn new(hand: Hand, category: Category, key_cards: Vec<Card>) -> Self {
        Self { hand, category, key_cards }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Key cards in ascending order.
    pub fn key_cards(&self) -> &[Card] {
        &self.key_cards
    }

    /// The cards outside the key group, ascending.
    pub fn kickers(&self) -> Vec<Card> {
        self.hand.without(&self.key_cards)
    }
}

impl fmt::Display for ClassifiedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.hand, self.category)
    }
}

/// Classify five cards: checks categories from strongest to weakest and keeps
/// the first match.
///
/// ```
/// use poker_hands::evaluator::{classify, Category};
/// use poker_hands::hand::Hand;
///
/// let hand: Hand = "5H 5C 6S 7S KD".parse().unwrap();
/// let classified = classify(&hand);
/// assert_eq!(classified.category(), Category::Pair);
/// assert_eq!(classified.key_cards().len(), 2);
/// assert_eq!(classified.kickers().len(), 3);
/// ```
pub fn classify(hand: &Hand) -> ClassifiedHand {
    let analysis = HandAnalysis::new(hand);
    let found = DETECTORS
        .iter()
        .find_map(|d| d.key_cards(&analysis).map(|key_cards| (d.category(), key_cards)));
    // HighCardDetector always matches
    debug_assert!(found.is_some());
    let (category, key_cards) =
        found.unwrap_or_else(|| (Category::HighCard, vec![hand.highest()]));
    log::trace!("{hand} -> {category}");
    analysis.build_classification(category, key_cards)
}

/// Classify an arbitrary card slice; anything but five cards is rejected.
pub fn classify_cards(cards: &[Card]) -> Result<ClassifiedHand, HandError> {
    let hand = Hand::from_slice(cards)?;
    Ok(classify(&hand))
}
