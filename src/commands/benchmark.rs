//! Benchmark command
//!
//! Encrypts a known plaintext under random keys and measures how often the
//! cracker recovers the key without being told its length.

use crate::cipher::encrypt_sequence;
use crate::core::{CipherError, Key, Plaintext};
use crate::crack::Cracker;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Benchmark parameters
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    pub trials: usize,
    pub min_key_length: usize,
    pub max_key_length: usize,
    /// Longest length the search tries; must be at least `max_key_length`
    pub search_limit: usize,
    /// Fixed seed for reproducible keys
    pub seed: Option<u64>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            trials: 50,
            min_key_length: 3,
            max_key_length: 10,
            search_limit: 12,
            seed: None,
        }
    }

    fn validate(&self) -> Result<(), CipherError> {
        if self.min_key_length == 0 || self.min_key_length > self.max_key_length {
            return Err(CipherError::InvalidKeyLength(self.min_key_length));
        }
        if self.search_limit < self.max_key_length {
            return Err(CipherError::InvalidKeyLength(self.search_limit));
        }
        Ok(())
    }
}

/// Outcome of a single trial
#[derive(Debug, Clone)]
pub struct Trial {
    pub key: String,
    pub recovered: String,
    pub length_found: bool,
    pub key_found: bool,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub trials: Vec<Trial>,
    pub length_hits: usize,
    pub key_hits: usize,
    /// key length → (trials, exact recoveries)
    pub by_length: BTreeMap<usize, (usize, usize)>,
    pub duration: Duration,
    pub cracks_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.trials.is_empty() {
            return 0.0;
        }
        self.key_hits as f64 / self.trials.len() as f64
    }
}

fn random_key(
    rng: &mut StdRng,
    cracker: &Cracker<'_>,
    config: &BenchmarkConfig,
) -> Result<Key, CipherError> {
    let alphabet = cracker.alphabet();
    let length = rng.random_range(config.min_key_length..=config.max_key_length);
    let ordinals: Vec<usize> = (0..length)
        .map(|_| rng.random_range(0..alphabet.len()))
        .collect();
    Key::from_ordinals(&ordinals, alphabet)
}

/// Run `config.trials` blind cracks of `plaintext`
///
/// # Errors
/// - `CipherError::InvalidKeyLength` for an inconsistent length range
/// - `CipherError::EmptyInput` if `plaintext` is empty
/// - anything the cracker reports for a trial
pub fn run_benchmark(
    cracker: &Cracker<'_>,
    plaintext: &Plaintext,
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult, CipherError> {
    config.validate()?;
    if plaintext.is_empty() {
        return Err(CipherError::EmptyInput);
    }

    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let pb = ProgressBar::new(config.trials as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let mut trials = Vec::with_capacity(config.trials);
    let mut by_length: BTreeMap<usize, (usize, usize)> = BTreeMap::new();
    let start = Instant::now();

    for _ in 0..config.trials {
        let key = random_key(&mut rng, cracker, config)?;
        let ciphertext = encrypt_sequence(plaintext, &key, cracker.alphabet())?;
        let search = cracker.search_key_lengths(&ciphertext, config.search_limit)?;

        let best = &search.best().result;
        let length_found = best.key_length == key.len();
        let key_found = best.key == key;

        let entry = by_length.entry(key.len()).or_insert((0, 0));
        entry.0 += 1;
        if key_found {
            entry.1 += 1;
        }

        pb.set_message(format!("{key}"));
        pb.inc(1);

        trials.push(Trial {
            key: key.to_string(),
            recovered: best.key.to_string(),
            length_found,
            key_found,
        });
    }

    pb.finish_and_clear();
    let duration = start.elapsed();

    let length_hits = trials.iter().filter(|t| t.length_found).count();
    let key_hits = trials.iter().filter(|t| t.key_found).count();

    Ok(BenchmarkResult {
        length_hits,
        key_hits,
        by_length,
        cracks_per_second: trials.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
        trials,
        duration,
    })
}
