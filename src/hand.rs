use crate::cards::{parse_cards, Card, CardParseError};
use std::fmt;
use std::str::FromStr;

/// Number of cards every hand holds.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly 5 cards, got {0}")]
    WrongHandSize(usize),
    #[error(transparent)]
    Card(#[from] CardParseError),
}

/// One player's five cards, kept sorted ascending by rank (then suit).
///
/// ```
/// use poker_hands::cards::Rank;
/// use poker_hands::hand::Hand;
///
/// let hand: Hand = "KD 5H 8C 5C 2S".parse().unwrap();
/// assert_eq!(hand.cards()[0].rank(), Rank::Two);
/// assert_eq!(hand.cards()[4].rank(), Rank::King);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    pub fn new(mut cards: [Card; HAND_SIZE]) -> Self {
        cards.sort_unstable();
        Self { cards }
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            slice.try_into().map_err(|_| HandError::WrongHandSize(slice.len()))?;
        Ok(Self::new(cards))
    }

    /// Cards in ascending order.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn highest(&self) -> Card {
        self.cards[HAND_SIZE - 1]
    }

    pub fn is_single_suit(&self) -> bool {
        let suit = self.cards[0].suit();
        self.cards.iter().all(|c| c.suit() == suit)
    }

    /// The cards of this hand minus `taken`, one occurrence per taken card.
    /// Order stays ascending.
    pub fn without(&self, taken: &[Card]) -> Vec<Card> {
        let mut used = [false; HAND_SIZE];
        for t in taken {
            if let Some(i) = (0..HAND_SIZE).find(|&i| !used[i] && self.cards[i] == *t) {
                used[i] = true;
            }
        }
        self.cards.iter().zip(used).filter(|(_, u)| !u).map(|(c, _)| *c).collect()
    }
}

impl From<[Card; HAND_SIZE]> for Hand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        Self::new(cards)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;
    fn try_from(slice: &[Card]) -> Result<Self, Self::Error> {
        Self::from_slice(slice)
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        Self::from_slice(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
