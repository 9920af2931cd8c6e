use crate::cards::{Card, Rank, Suit};
use crate::hand::{Hand, HAND_SIZE};
use crate::round::{Round, ROUND_SIZE};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A standard 52-card deck, used to deal random showdowns.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use poker_hands::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|s| Rank::ALL.into_iter().map(move |r| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }

    /// Deal five cards to each player, or `None` if fewer than ten remain.
    pub fn deal_round(&mut self) -> Option<Round> {
        if self.len() < ROUND_SIZE {
            return None;
        }
        let cards = self.draw_n(ROUND_SIZE);
        let (a, b) = cards.split_at(HAND_SIZE);
        Some(Round::new(Hand::from_slice(a).ok()?, Hand::from_slice(b).ok()?))
    }
}

/// Reproducible stream of random rounds, each from a freshly shuffled deck.
pub fn dealt_rounds(seed: u64) -> impl Iterator<Item = Round> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    std::iter::from_fn(move || {
        let mut deck = Deck::standard();
        deck.shuffle_with(&mut rng);
        deck.deal_round()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_distinct_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        let set: HashSet<Card> = d.cards.iter().copied().collect();
        assert_eq!(set.len(), 52);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
    }

    #[test]
    fn deal_round_uses_ten_distinct_cards() {
        let mut d = Deck::standard();
        d.shuffle_seeded(7);
        let round = d.deal_round().unwrap();
        assert_eq!(d.len(), 42);
        let set: HashSet<Card> =
            round.first().cards().iter().chain(round.second().cards()).copied().collect();
        assert_eq!(set.len(), ROUND_SIZE);
    }

    #[test]
    fn deal_round_stops_when_deck_runs_low() {
        let mut d = Deck::standard();
        let rounds = std::iter::from_fn(|| d.deal_round()).count();
        assert_eq!(rounds, 5);
        assert_eq!(d.len(), 2);
        assert!(d.deal_round().is_none());
    }

    #[test]
    fn dealt_rounds_are_reproducible() {
        let a: Vec<Round> = dealt_rounds(3).take(20).collect();
        let b: Vec<Round> = dealt_rounds(3).take(20).collect();
        assert_eq!(a, b);
        assert_eq!(a.len(), 20);
    }
}
