//! One showdown line: ten card tokens, five per player.

use crate::cards::{parse_cards, CardParseError};
use crate::evaluator::{classify, compare, ClassifiedHand, Verdict};
use crate::hand::{Hand, HandError, HAND_SIZE};
use std::fmt;
use std::str::FromStr;

/// Cards on one input line.
pub const ROUND_SIZE: usize = 2 * HAND_SIZE;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error("expected 10 cards per round, got {0}")]
    CardCount(usize),
    #[error(transparent)]
    Card(#[from] CardParseError),
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// Player A's and player B's hands for one showdown.
///
/// ```
/// use poker_hands::evaluator::Verdict;
/// use poker_hands::round::Round;
///
/// let round: Round = "5H 5C 6S 7S KD 2C 3S 8S 8D TD".parse().unwrap();
/// assert_eq!(round.verdict(), Verdict::SecondWins);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    first: Hand,
    second: Hand,
}

impl Round {
    pub fn new(first: Hand, second: Hand) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> &Hand {
        &self.first
    }

    pub fn second(&self) -> &Hand {
        &self.second
    }

    /// Classify both hands.
    pub fn classify(&self) -> (ClassifiedHand, ClassifiedHand) {
        (classify(&self.first), classify(&self.second))
    }

    /// Classify both hands and decide the winner.
    pub fn showdown(&self) -> Showdown {
        let (first, second) = self.classify();
        let verdict = compare(&first, &second);
        log::debug!("{first} vs {second}: {verdict}");
        Showdown { first, second, verdict }
    }

    pub fn verdict(&self) -> Verdict {
        self.showdown().verdict
    }
}

/// Both classified hands of a round and the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showdown {
    pub first: ClassifiedHand,
    pub second: ClassifiedHand,
    pub verdict: Verdict,
}

impl FromStr for Round {
    type Err = RoundError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        if cards.len() != ROUND_SIZE {
            return Err(RoundError::CardCount(cards.len()));
        }
        let (a, b) = cards.split_at(HAND_SIZE);
        Ok(Self::new(Hand::from_slice(a)?, Hand::from_slice(b)?))
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::Category;

    #[test]
    fn splits_first_five_and_last_five() {
        let round: Round = "5D 8C 9S JS AC 2C 5C 7D 8S QH".parse().unwrap();
        assert_eq!(round.first().highest().value(), 14);
        assert_eq!(round.second().highest().value(), 12);
        let (a, b) = round.classify();
        assert_eq!(a.category(), Category::HighCard);
        assert_eq!(b.category(), Category::HighCard);
    }

    #[test]
    fn wrong_card_count_is_rejected() {
        assert_eq!("5H 5C 6S".parse::<Round>(), Err(RoundError::CardCount(3)));
        assert_eq!(
            "5H 5C 6S 7S KD 2C 3S 8S 8D TD 9C".parse::<Round>(),
            Err(RoundError::CardCount(11))
        );
        assert_eq!("".parse::<Round>(), Err(RoundError::CardCount(0)));
    }

    #[test]
    fn malformed_card_is_surfaced() {
        let err = "5H 5C 6S 7S KD 2C 3S 8S 8D 10D".parse::<Round>().unwrap_err();
        assert!(matches!(err, RoundError::Card(CardParseError::Malformed(_))));
    }

    #[test]
    fn showdown_carries_categories_and_verdict() {
        let round: Round = "2C 3C 4C 5C 6C 2D 3D 4D 5D 7D".parse().unwrap();
        let showdown = round.showdown();
        assert_eq!(showdown.first.category(), Category::StraightFlush);
        assert_eq!(showdown.second.category(), Category::Flush);
        assert_eq!(showdown.verdict, Verdict::FirstWins);
        assert_eq!(showdown.verdict, round.verdict());
    }

    #[test]
    fn display_shows_both_hands() {
        let round: Round = "KD 5H 7S 5C 6S 2C 3S 8S 8D TD".parse().unwrap();
        assert_eq!(round.to_string(), "5C 5H 6S 7S KD | 2C 3S 8D 8S TD");
    }
}
