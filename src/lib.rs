//! poker-hands: five-card poker showdowns
//!
//! Goals:
//! - Classify a five-card hand into one of ten categories, with the key cards
//!   that justify it
//! - Decide two-player showdowns: category, then key cards, then kickers
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! Ace is always high: A-2-3-4-5 is not a straight.
//!
//! ## Quick start: score a round
//! ```
//! use poker_hands::evaluator::{Category, Verdict};
//! use poker_hands::round::Round;
//!
//! let round: Round = "2H 3H 4H 5H 6H 7D 8D 9D TD JD".parse().unwrap();
//! let (a, b) = round.classify();
//! assert_eq!(a.category(), Category::StraightFlush);
//! assert_eq!(b.category(), Category::StraightFlush);
//! assert_eq!(round.verdict(), Verdict::SecondWins);
//! ```
//!
//! ## CLI
//! Score a file of rounds, one per line:
//! ```sh
//! cargo run --bin poker-hands -- --input hands.txt
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod round;
pub mod tally;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
