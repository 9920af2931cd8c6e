use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::Card;
use crate::evaluator::{Category, ClassifiedHand};
use crate::hand::Hand;

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub hand: Hand,
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(hand: &Hand) -> Self {
        Self {
            hand: *hand,
            rank_groups: RankGroups::from_hand(hand),
            suit_info: SuitInfo::detect(hand),
            straight_info: StraightInfo::detect(hand),
        }
    }

    /// All five cards, for categories where every card counts.
    pub fn all_cards(&self) -> Vec<Card> {
        self.hand.cards().to_vec()
    }

    pub fn build_classification(&self, category: Category, key_cards: Vec<Card>) -> ClassifiedHand {
        ClassifiedHand::new(self.hand, category, key_cards)
    }
}
