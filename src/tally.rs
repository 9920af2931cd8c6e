use crate::evaluator::Verdict;
use crate::round::{Round, RoundError, Showdown};
use std::fmt;
use std::io::{self, BufRead};

/// Running win counts across many rounds.
///
/// ```
/// use poker_hands::evaluator::Verdict;
/// use poker_hands::tally::Tally;
///
/// let tally: Tally = [Verdict::FirstWins, Verdict::Tie, Verdict::FirstWins].into_iter().collect();
/// assert_eq!(tally.first_wins(), 2);
/// assert_eq!(tally.ties(), 1);
/// assert_eq!(tally.rounds(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    first: u64,
    second: u64,
    ties: u64,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::FirstWins => self.first += 1,
            Verdict::SecondWins => self.second += 1,
            Verdict::Tie => self.ties += 1,
        }
    }

    pub fn first_wins(&self) -> u64 {
        self.first
    }

    pub fn second_wins(&self) -> u64 {
        self.second
    }

    pub fn ties(&self) -> u64 {
        self.ties
    }

    pub fn rounds(&self) -> u64 {
        self.first + self.second + self.ties
    }
}

impl Extend<Verdict> for Tally {
    fn extend<I: IntoIterator<Item = Verdict>>(&mut self, iter: I) {
        for v in iter {
            self.record(v);
        }
    }
}

impl FromIterator<Verdict> for Tally {
    fn from_iter<I: IntoIterator<Item = Verdict>>(iter: I) -> Self {
        let mut tally = Tally::new();
        tally.extend(iter);
        tally
    }
}

/// Ties are counted but left out of the printed report.
impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---------------RESULTS---------------")?;
        writeln!(f, "Player 1 {}", self.first)?;
        write!(f, "Player 2 {}", self.second)
    }
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("reading input: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: RoundError,
    },
}

/// Score one round per line of `reader`.
///
/// Blank lines are ignored. A malformed line is logged and skipped, or, when
/// `strict` is set, returned as [`ScoreError::Line`] with its 1-based number.
/// `on_round` sees every scored round; its I/O errors abort the run.
///
/// ```
/// use poker_hands::tally::score_lines;
///
/// let input = "5H 5C 6S 7S KD 2C 3S 8S 8D TD\n\n5D 8C 9S JS AC 2C 5C 7D 8S QH\n";
/// let tally = score_lines(input.as_bytes(), true, |_, _| Ok(())).unwrap();
/// assert_eq!((tally.first_wins(), tally.second_wins()), (1, 1));
/// ```
pub fn score_lines<R, F>(reader: R, strict: bool, mut on_round: F) -> Result<Tally, ScoreError>
where
    R: BufRead,
    F: FnMut(&Round, &Showdown) -> io::Result<()>,
{
    let mut tally = Tally::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.parse::<Round>() {
            Ok(round) => {
                let showdown = round.showdown();
                on_round(&round, &showdown)?;
                tally.record(showdown.verdict);
            }
            Err(source) if strict => return Err(ScoreError::Line { line: i + 1, source }),
            Err(e) => log::warn!("skipping line {}: {e}", i + 1),
        }
    }
    Ok(tally)
}
