use crate::cards::Card;
use crate::hand::Hand;

/// Maximal runs of equal-valued cards in a sorted hand.
///
/// Example: 5H 5C 6S 7S KD groups as [[5C, 5H], [6S], [7S], [KD]]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    runs: Vec<Vec<Card>>,
}

impl RankGroups {
    pub fn from_hand(hand: &Hand) -> Self {
        let mut runs: Vec<Vec<Card>> = Vec::new();
        for &card in hand.cards() {
            match runs.last_mut() {
                Some(run) if run[0].value() == card.value() => run.push(card),
                _ => runs.push(vec![card]),
            }
        }
        Self { runs }
    }

    /// Cards from every run of exactly `n` equal values.
    ///
    /// Returns `None` when no run matches, or when the matched cards do not
    /// split evenly into groups of `n`.
    pub fn of_size(&self, n: usize) -> Option<Vec<Card>> {
        if n == 0 {
            return None;
        }
        let matched: Vec<Card> =
            self.runs.iter().filter(|run| run.len() == n).flatten().copied().collect();
        if matched.is_empty() || matched.len() % n != 0 {
            return None;
        }
        Some(matched)
    }

    /// The four cards of a four-of-a-kind, if present.
    pub fn quad(&self) -> Option<Vec<Card>> {
        self.of_size(4)
    }

    /// The three cards of a three-of-a-kind, if present.
    pub fn trips(&self) -> Option<Vec<Card>> {
        self.of_size(3)
    }

    /// Every card that sits in a pair: two cards for one pair, four for two.
    pub fn pairs(&self) -> Option<Vec<Card>> {
        self.of_size(2)
    }

    /// The triple of a full house (trips plus a pair), if present.
    pub fn full_house(&self) -> Option<Vec<Card>> {
        let trips = self.trips()?;
        match self.pairs() {
            Some(pair) if pair.len() == 2 => Some(trips),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn runs(&self) -> &[Vec<Card>] {
        &self.runs
    }
}
