use anyhow::{Context, Result};
use clap::Parser;
use poker_hands::deck::dealt_rounds;
use poker_hands::round::{Round, Showdown};
use poker_hands::tally::{score_lines, Tally};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

/// Score two-player five-card showdowns, one round per line.
#[derive(Parser, Debug)]
#[command(name = "poker-hands", version, about)]
struct Args {
    /// Read rounds from this file instead of stdin.
    #[arg(short, long, env = "POKER_HANDS_INPUT")]
    input: Option<PathBuf>,

    /// Score N randomly dealt rounds instead of reading input; wins over --input.
    #[arg(long, value_name = "N")]
    deal: Option<usize>,

    /// Seed for --deal.
    #[arg(long, env = "POKER_HANDS_SEED", default_value_t = 0)]
    seed: u64,

    /// Print every round with both categories and its winner.
    #[arg(short, long)]
    verbose: bool,

    /// Stop at the first malformed line instead of skipping it.
    #[arg(long)]
    strict: bool,
}

fn report(out: &mut impl Write, round: &Round, showdown: &Showdown) -> io::Result<()> {
    writeln!(
        out,
        "{round}: {} vs {} -> {}",
        showdown.first.category(),
        showdown.second.category(),
        showdown.verdict
    )
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    log::debug!("poker-hands {} {:?}", poker_hands::VERSION, args);

    let mut out = io::stdout().lock();
    let verbose = args.verbose;
    let mut on_round = |round: &Round, showdown: &Showdown| -> io::Result<()> {
        if verbose {
            report(&mut out, round, showdown)?;
        }
        Ok(())
    };

    let tally = if let Some(n) = args.deal {
        log::info!("dealing {n} rounds with seed {}", args.seed);
        let mut tally = Tally::new();
        for round in dealt_rounds(args.seed).take(n) {
            let showdown = round.showdown();
            on_round(&round, &showdown)?;
            tally.record(showdown.verdict);
        }
        tally
    } else if let Some(path) = &args.input {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        score_lines(BufReader::new(file), args.strict, on_round)
            .with_context(|| format!("scoring {}", path.display()))?
    } else {
        score_lines(io::stdin().lock(), args.strict, on_round).context("scoring stdin")?
    };

    log::info!("{} rounds scored, {} ties", tally.rounds(), tally.ties());
    writeln!(out, "{tally}")?;
    Ok(())
}
