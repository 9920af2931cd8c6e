use super::hand_analysis::HandAnalysis;
use crate::cards::Card;
use crate::evaluator::Category;

/// Strategy pattern: each detector recognises one category and extracts the
/// key cards that justify it.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn key_cards(&self, analysis: &HandAnalysis) -> Option<Vec<Card>>;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Royal Flush: T-J-Q-K-A, all same suit
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn category(&self) -> Category {
        Category::RoyalFlush
    }

    fn key_cards(&self, analysis: &HandAnalysis) -> Option<Vec<Card>> {
        (analysis.suit_info.is_flush && analysis.straight_info.is_broadway())
            .then(|| analysis.all_cards())
    }
}

/// Straight Flush: Five consecutive ranks, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn key_cards(&self, analysis: &HandAnalysis) -> Option<Vec<Card>> {
        (analysis.suit_info.is_flush && analysis.straight_info.is_straight)
            .then(|| analysis.all_cards())
    }
}

/// Four of a Kind: Four cards of the same rank
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn key_cards(&self, analysis: &HandAnalysis) -> Option<Vec<Card>> {
        analysis.rank_groups.quad()
    }
}

/// Full House: Three of a kind plus a pair; the triple is the key group
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn key_cards(&self, analysis: &HandAnalysis) -> Option<Vec<Card>> {
        analysis.rank_groups.full_house()
    }
}

/// Flush: All five cards of the same suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn key_cards(&self, analysis: &HandAnalysis) -> Option<Vec<Card>> {
        analysis.suit_info.is_flush.then(|| analysis.all_cards())
    }
}

/// Straight: Five consecutive ranks (not all same suit)
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn key_cards(&self, analysis: &HandAnalysis) -> Option<Vec<Card>> {
        analysis.straight_info.is_straight.then(|| analysis.all_cards())
    }
}

/// Three of a Kind: Three cards of the same rank
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn key_cards(&self, analysis: &HandAnalysis) -> Option<Vec<Card>> {
        analysis.rank_groups.trips()
    }
}

/// Two Pair: Two pairs of cards
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn key_cards(&self, analysis: &HandAnalysis) -> Option<Vec<Card>> {
        analysis.rank_groups.pairs().filter(|cards| cards.len() == 4)
    }
}

/// One Pair: Two cards of the same rank
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::Pair
    }

    fn key_cards(&self, analysis: &HandAnalysis) -> Option<Vec<Card>> {
        analysis.rank_groups.pairs().filter(|cards| cards.len() == 2)
    }
}

/// High Card: No matching ranks or sequences
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn key_cards(&self, analysis: &HandAnalysis) -> Option<Vec<Card>> {
        // Always matches as fallback
        Some(vec![analysis.hand.highest()])
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
