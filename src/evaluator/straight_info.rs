use crate::cards::Rank;
use crate::hand::Hand;

/// Information about whether a hand is a straight and its top rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Detect five consecutive values in an ascending hand.
    ///
    /// Ace only counts high: A-2-3-4-5 is not a straight.
    pub fn detect(hand: &Hand) -> Self {
        let cards = hand.cards();
        let is_consecutive = cards.windows(2).all(|w| w[1].value() == w[0].value() + 1);

        if is_consecutive {
            StraightInfo { is_straight: true, top_rank: Some(hand.highest().rank()) }
        } else {
            StraightInfo { is_straight: false, top_rank: None }
        }
    }

    /// True for exactly T-J-Q-K-A.
    pub fn is_broadway(&self) -> bool {
        self.is_straight && self.top_rank == Some(Rank::Ace)
    }
}
