//! Measure false positive rates against a word list.
//!
//! Words are split into a set that is added to the filter and a set that is
//! only queried. The filter is built with optimal parameters, then with a
//! sweep of bit lengths and round counts around them.
//!
//! Run with `cargo run --release --example wordlist`. Output is logged at
//! `info` unless `RUST_LOG` says otherwise.
use std::fs;
use std::mem;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context};
use bloomchain::{optimal_parameters, BloomHasher, Error, Filter, Sha256Hash, SipHash};
use clap::Parser;
use log::{info, warn};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Newline-delimited list of words
    #[arg(short, long, default_value = "/usr/share/dict/words")]
    input: PathBuf,

    /// Target false positive percentage, also the share of words held back
    #[arg(short, long, default_value_t = 1)]
    false_positive_percent: u32,

    /// Bit length difference between two configurations of the sweep
    #[arg(long, default_value_t = 1_000_000)]
    size_step: i64,

    /// Number of size steps on each side of the optimal bit length
    #[arg(long, default_value_t = 2)]
    size_steps: i64,

    /// Seed for the add/skip partition
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug)]
struct Outcome {
    false_hits: usize,
    percent: f64,
    filter_bytes: usize,
}

fn read_words(path: &Path) -> anyhow::Result<Vec<Vec<u8>>> {
    let input = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

    Ok(input
        .split(|b| *b == b'\n')
        .filter(|word| !word.is_empty())
        .map(|word| word.to_vec())
        .collect())
}

/// Heap and inline bytes held by a list of words.
fn list_bytes(words: &[Vec<u8>]) -> usize {
    words
        .iter()
        .map(|word| word.len() + mem::size_of::<Vec<u8>>())
        .sum()
}

fn measure<H: BloomHasher>(
    add: &[Vec<u8>],
    skip: &[Vec<u8>],
    nbits: usize,
    rounds: usize,
    hasher: H,
) -> anyhow::Result<Outcome> {
    let mut bf = Filter::new(nbits, rounds, hasher)?;
    for word in add {
        bf.add(word)?;
    }
    for word in add {
        if !bf.is_member(word)? {
            bail!(
                "filter returned a negative result for added word {}",
                String::from_utf8_lossy(word)
            );
        }
    }

    let mut false_hits = 0;
    for word in skip {
        if bf.is_member(word)? {
            false_hits += 1;
        }
    }
    let percent = if skip.is_empty() {
        0.
    } else {
        false_hits as f64 * 100. / skip.len() as f64
    };

    Ok(Outcome {
        false_hits,
        percent,
        filter_bytes: bf.as_bytes().len(),
    })
}

fn sweep<H: BloomHasher + Copy>(
    args: &Args,
    add: &[Vec<u8>],
    skip: &[Vec<u8>],
    optimal: (usize, usize),
    hasher: H,
) -> anyhow::Result<()> {
    let (nbits, rounds) = optimal;

    for size_diff in -args.size_steps..=args.size_steps {
        for round_diff in (-6i64..6).step_by(2) {
            if size_diff == 0 && round_diff == 0 {
                continue;
            }
            let bits = nbits as i64 + size_diff * args.size_step;
            let k = rounds as i64 + round_diff;
            if bits <= 0 || k <= 0 {
                warn!("Skipping bit length {} with {} rounds", bits, k);
                continue;
            }
            match measure(add, skip, bits as usize, k as usize, hasher) {
                Ok(outcome) => info!(
                    "Bit length: {}. Rounds: {}. False positive percentage: {:.4}",
                    bits, k, outcome.percent
                ),
                Err(err) => match err.downcast_ref::<Error>() {
                    Some(Error::Construction(reason)) => {
                        warn!("Skipping bit length {} with {} rounds: {}", bits, k, reason)
                    }
                    _ => return Err(err),
                },
            }
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let rng = match args.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let words = read_words(&args.input)?;

    let (skip, add): (Vec<_>, Vec<_>) = words
        .into_iter()
        .partition(|_| rng.u32(0..100) < args.false_positive_percent);

    let optimal = optimal_parameters(add.len(), args.false_positive_percent)?;
    info!(
        "Item count: {}. Target false positive percentage: {}. Optimal length: {}. Optimal rounds: {}",
        add.len(),
        args.false_positive_percent,
        optimal.0,
        optimal.1
    );

    let start = Instant::now();
    let outcome = measure(&add, &skip, optimal.0, optimal.1, Sha256Hash)?;
    info!(
        "Tested with {} items. False hit count: {}. False positive percentage: {:.4}. Duration: {:?}",
        skip.len(),
        outcome.false_hits,
        outcome.percent,
        start.elapsed()
    );

    info!(
        "Memory used by filter bitfield: {} bytes. Memory used by list of added words: {} bytes",
        outcome.filter_bytes,
        list_bytes(&add)
    );

    info!("Results using SipHash:");
    let start = Instant::now();
    sweep(&args, &add, &skip, optimal, SipHash::new())?;
    info!("SipHash sweep took {:?}", start.elapsed());

    info!("Results using SHA-256:");
    let start = Instant::now();
    sweep(&args, &add, &skip, optimal, Sha256Hash)?;
    info!("SHA-256 sweep took {:?}", start.elapsed());

    Ok(())
}
