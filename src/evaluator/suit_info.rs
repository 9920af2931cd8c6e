use crate::hand::Hand;

/// Information about whether all cards share the same suit (flush).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub is_flush: bool,
}

impl SuitInfo {
    pub fn detect(hand: &Hand) -> Self {
        SuitInfo { is_flush: hand.is_single_suit() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flush() {
        let info = SuitInfo::detect(&"AS KS QS JS 9S".parse().unwrap());
        assert!(info.is_flush);
    }

    #[test]
    fn test_not_flush() {
        let info = SuitInfo::detect(&"AS KH QS JS 9S".parse().unwrap());
        assert!(!info.is_flush);
    }

    #[test]
    fn test_suits_are_only_compared_for_equality() {
        assert!(SuitInfo::detect(&"2C 9C KC 4C 7C".parse().unwrap()).is_flush);
        assert!(SuitInfo::detect(&"2D 9D KD 4D 7D".parse().unwrap()).is_flush);
    }
}
