//! Synthetic read generation from a reference sequence.
//!
//! Reads start uniformly at random, run for `read_length` bases (fewer at
//! the reference end) and carry independent per-base substitutions.

use std::io;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::io::reads::load_reference;
use crate::io::writer::write_lines;

/// Configuration for read simulation
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Expected number of reads covering each reference position
    pub coverage: f64,
    pub read_length: usize,
    /// Per-base substitution probability
    pub error_rate: f64,
    /// Fixed RNG seed for reproducible output
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            coverage: 10.0,
            read_length: 100,
            error_rate: 0.01,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> io::Result<()> {
        if self.read_length == 0 {
            return Err(invalid("read length must be positive".to_string()));
        }
        if !self.coverage.is_finite() || self.coverage < 0.0 {
            return Err(invalid(format!(
                "coverage must be a non-negative number, got {}",
                self.coverage
            )));
        }
        if !(0.0..=1.0).contains(&self.error_rate) {
            return Err(invalid(format!(
                "error rate must be within [0, 1], got {}",
                self.error_rate
            )));
        }
        Ok(())
    }

    /// `round(coverage × reference_len / read_length)`
    pub fn read_count(&self, reference_len: usize) -> usize {
        (self.coverage * reference_len as f64 / self.read_length as f64).round() as usize
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn invalid(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}

/// Replaces `base` by one of its three alternatives, chosen uniformly.
/// Anything other than A, C, G or T is returned unchanged.
pub fn substitute<R: Rng>(base: u8, rng: &mut R) -> u8 {
    let alternatives: &[u8; 3] = match base {
        b'A' => b"TCG",
        b'C' => b"TAG",
        b'G' => b"CAT",
        b'T' => b"CAG",
        _ => return base,
    };
    alternatives[rng.gen_range(0..3)]
}

/// Applies independent substitutions with probability `error_rate`.
pub fn add_errors<R: Rng>(fragment: &str, error_rate: f64, rng: &mut R) -> String {
    fragment
        .bytes()
        .map(|base| {
            if error_rate > 0.0 && rng.gen_bool(error_rate) {
                substitute(base, rng) as char
            } else {
                base as char
            }
        })
        .collect()
}

/// Draws reads from an uppercase ASCII reference.
pub fn simulate_reads<R: Rng>(
    reference: &str,
    config: &SimulationConfig,
    rng: &mut R,
) -> io::Result<Vec<String>> {
    config.validate()?;
    if !reference.is_ascii() {
        return Err(invalid("reference must be ASCII".to_string()));
    }
    if reference.is_empty() {
        return Ok(Vec::new());
    }

    let n = reference.len();
    let count = config.read_count(n);
    let mut reads = Vec::with_capacity(count);
    for _ in 0..count {
        let start = rng.gen_range(0..n);
        let end = (start + config.read_length).min(n);
        reads.push(add_errors(&reference[start..end], config.error_rate, rng));
    }
    Ok(reads)
}

/// Loads a reference, simulates reads and writes one read per line.
pub fn simulate_file(
    reference_path: &str,
    output_path: &str,
    config: &SimulationConfig,
) -> io::Result<usize> {
    config.validate()?;
    let reference = load_reference(reference_path)?;
    let mut rng = config.rng();
    let reads = simulate_reads(&reference, config, &mut rng)?;

    write_lines(output_path, &reads)?;
    info!(
        "Simulated {} reads of up to {} bp (coverage {}, error rate {}) to {}",
        reads.len(),
        config.read_length,
        config.coverage,
        config.error_rate,
        output_path
    );
    Ok(reads.len())
}
