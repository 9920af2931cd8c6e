use crate::cards::Card;
use crate::evaluator::ClassifiedHand;
use core::cmp::Ordering;
use std::fmt;

/// Outcome of a two-player showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    FirstWins,
    SecondWins,
    Tie,
}

impl Verdict {
    /// The same result seen from the other seat.
    pub const fn reversed(self) -> Self {
        match self {
            Verdict::FirstWins => Verdict::SecondWins,
            Verdict::SecondWins => Verdict::FirstWins,
            Verdict::Tie => Verdict::Tie,
        }
    }
}

impl From<Ordering> for Verdict {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Verdict::FirstWins,
            Ordering::Less => Verdict::SecondWins,
            Ordering::Equal => Verdict::Tie,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::FirstWins => f.write_str("Player 1"),
            Verdict::SecondWins => f.write_str("Player 2"),
            Verdict::Tie => f.write_str("Tie"),
        }
    }
}

/// Compare card values highest first, position by position.
/// `None` when the lists differ in length.
fn cmp_values_desc(a: &[Card], b: &[Card]) -> Option<Ordering> {
    if a.len() != b.len() {
        return None;
    }
    let mut av: Vec<u8> = a.iter().map(|c| c.value()).collect();
    let mut bv: Vec<u8> = b.iter().map(|c| c.value()).collect();
    av.sort_unstable_by(|x, y| y.cmp(x));
    bv.sort_unstable_by(|x, y| y.cmp(x));
    Some(av.cmp(&bv))
}

impl ClassifiedHand {
    /// Category first, then key cards, then kickers.
    ///
    /// Equal categories always carry key groups of equal size; if they ever do
    /// not, the hands are treated as equal.
    pub fn cmp_strength(&self, other: &Self) -> Ordering {
        if self.category() != other.category() {
            return self.category().cmp(&other.category());
        }
        let Some(by_key) = cmp_values_desc(self.key_cards(), other.key_cards()) else {
            log::warn!(
                "key card count mismatch for {}: {} vs {}",
                self.category(),
                self.key_cards().len(),
                other.key_cards().len()
            );
            return Ordering::Equal;
        };
        if by_key != Ordering::Equal {
            return by_key;
        }
        cmp_values_desc(&self.kickers(), &other.kickers()).unwrap_or_else(|| {
            log::warn!("kicker count mismatch for {}", self.category());
            Ordering::Equal
        })
    }
}

/// Decide a showdown between two classified hands.
///
/// ```
/// use poker_hands::evaluator::{classify, compare, Verdict};
/// use poker_hands::hand::Hand;
///
/// let a: Hand = "5H 5C 6S 7S KD".parse().unwrap();
/// let b: Hand = "2C 3S 8S 8D TD".parse().unwrap();
/// assert_eq!(compare(&classify(&a), &classify(&b)), Verdict::SecondWins);
/// ```
pub fn compare(a: &ClassifiedHand, b: &ClassifiedHand) -> Verdict {
    Verdict::from(a.cmp_strength(b))
}
