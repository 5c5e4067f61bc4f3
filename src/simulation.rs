//! Monte Carlo driver: sample p, build a lattice, record whether it percolates.
//!
//! Trial `k` draws from its own ChaCha8 stream (`seed`, stream `k`), so results
//! do not depend on how trials are scheduled across threads.

use std::time::Instant;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Beta, Distribution};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{check_probability, ConfigError};
use crate::PercolationGrid;

/// Conditionally parallel iterator over a range.
macro_rules! maybe_par_range {
    ($range:expr) => {{
        #[cfg(feature = "parallel")]
        {
            ($range).into_par_iter()
        }
        #[cfg(not(feature = "parallel"))]
        {
            $range
        }
    }};
}

/// Shape parameters of the Beta distribution p is drawn from.
pub const BETA_SHAPE: f64 = 2.0;

/// Configuration for a simulation sweep.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Lattice side length.
    pub side: usize,
    /// Number of independent lattices to sample.
    pub trials: usize,
    /// Base seed; each trial uses its own stream of it.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            side: 20,
            trials: 1000,
            seed: 12345,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.side == 0 {
            return Err(ConfigError::InvalidSize);
        }
        if self.trials == 0 {
            return Err(ConfigError::InvalidTrialCount);
        }
        Ok(())
    }
}

/// One sampled `(p, percolates)` observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trial {
    pub p: f64,
    pub percolates: bool,
}

/// Draw an opening probability from Beta(2, 2).
pub fn sample_open_probability<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let beta = Beta::new(BETA_SHAPE, BETA_SHAPE).expect("Beta shape parameters are positive");
    beta.sample(rng)
}

/// RNG for trial `index` of a sweep seeded with `seed`.
pub fn trial_rng(seed: u64, index: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(index);
    rng
}

/// Run a single trial: draw p, then the lattice's sites, from the same stream.
pub fn run_trial(side: usize, index: u64, seed: u64) -> Result<Trial, ConfigError> {
    let mut rng = trial_rng(seed, index);
    let p = sample_open_probability(&mut rng);
    let grid = PercolationGrid::new(side, p, &mut rng)?;
    let percolates = grid.percolates();
    log::trace!("trial {}: p={:.4} percolates={}", index, p, percolates);
    Ok(Trial { p, percolates })
}

/// Run every trial of a sweep. Results come back in trial order.
pub fn run(config: &SimulationConfig) -> Result<Vec<Trial>, ConfigError> {
    config.validate()?;

    let t0 = Instant::now();
    let side = config.side;
    let seed = config.seed;
    let trials: Vec<Trial> = maybe_par_range!(0..config.trials)
        .map(|k| run_trial(side, k as u64, seed))
        .collect::<Result<_, _>>()?;

    let hits = trials.iter().filter(|t| t.percolates).count();
    log::debug!(
        "{} trials on {}x{} lattice in {:.1}ms, {} percolated",
        trials.len(),
        side,
        side,
        t0.elapsed().as_secs_f64() * 1000.0,
        hits
    );
    Ok(trials)
}

/// Fraction of `trials` lattices at a fixed `p` that percolate.
pub fn estimate_at(side: usize, p: f64, trials: usize, seed: u64) -> Result<f64, ConfigError> {
    SimulationConfig { side, trials, seed }.validate()?;
    let p = check_probability(p)?;

    let hits = maybe_par_range!(0..trials)
        .map(|k| {
            let mut rng = trial_rng(seed, k as u64);
            PercolationGrid::new(side, p, &mut rng).map(|grid| grid.percolates() as usize)
        })
        .collect::<Result<Vec<usize>, _>>()?
        .into_iter()
        .sum::<usize>();
    Ok(hits as f64 / trials as f64)
}
