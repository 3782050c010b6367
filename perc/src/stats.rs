//! Monte Carlo estimation of the percolation threshold.

use crate::{Error, Percolation, Result};

use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

////////////////////////////////////////////////////////////////////////////////

/// Two-sided 95% quantile of the standard normal distribution.
pub const CONFIDENCE_95: f64 = 1.96;

/// Source of uniformly distributed integers.
pub trait UniformSource {
    /// Returns an integer drawn uniformly from `[lo, hi)`.
    fn uniform(&mut self, lo: usize, hi: usize) -> usize;
}

impl<R: Rng + ?Sized> UniformSource for R {
    fn uniform(&mut self, lo: usize, hi: usize) -> usize {
        self.gen_range(lo..hi)
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Opens uniformly random sites of a fresh lattice until it percolates and
/// returns the fraction of sites opened by then.
pub fn run_trial<P, R>(size: usize, rng: &mut R) -> Result<f64>
where
    P: Percolation,
    R: UniformSource + ?Sized,
{
    let mut lattice = P::new(size)?;
    let mut opened = 0usize;

    while !lattice.percolates() {
        let row = rng.uniform(1, size + 1);
        let col = rng.uniform(1, size + 1);
        if !lattice.is_open(row, col)? {
            lattice.open(row, col)?;
            opened += 1;
        }
    }

    Ok(opened as f64 / (size * size) as f64)
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsConfig {
    /// Lattice side length.
    pub size: usize,
    /// Number of independent trials.
    pub trials: usize,
    /// Seed of the generator the per-trial seeds are drawn from.
    pub seed: u64,
    /// Run trials on the current rayon pool instead of one by one.
    pub parallel: bool,
}

impl StatsConfig {
    pub fn new(size: usize, trials: usize) -> Self {
        Self {
            size,
            trials,
            seed: 0,
            parallel: false,
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Threshold estimates of a finished batch of trials.
#[derive(Clone, Debug, PartialEq)]
pub struct PercolationStats {
    size: usize,
    thresholds: Vec<f64>,
}

impl PercolationStats {
    /// Runs `config.trials` trials on `config.size` lattices of type `P`.
    ///
    /// Each trial gets its own generator seeded from a master generator, so
    /// the result for a given seed does not depend on `config.parallel`.
    pub fn run<P: Percolation>(config: &StatsConfig) -> Result<Self> {
        if config.size == 0 {
            return Err(Error::InvalidSize);
        }
        if config.trials == 0 {
            return Err(Error::InvalidTrials);
        }
        info!(
            "running {} trials on a {}x{} lattice (seed {}, parallel: {})",
            config.trials, config.size, config.size, config.seed, config.parallel
        );

        let mut master = StdRng::seed_from_u64(config.seed);
        let seeds = (0..config.trials)
            .map(|_| master.gen::<u64>())
            .collect::<Vec<_>>();

        let size = config.size;
        let trial = |(k, seed): (usize, u64)| -> Result<f64> {
            let mut rng = StdRng::seed_from_u64(seed);
            let threshold = run_trial::<P, _>(size, &mut rng)?;
            debug!("trial {} finished with threshold {}", k + 1, threshold);
            Ok(threshold)
        };

        let thresholds = if config.parallel {
            seeds
                .into_par_iter()
                .enumerate()
                .map(trial)
                .collect::<Result<Vec<_>>>()?
        } else {
            seeds
                .into_iter()
                .enumerate()
                .map(trial)
                .collect::<Result<Vec<_>>>()?
        };

        let stats = Self { size, thresholds };
        info!("finished with mean {}", stats.mean());
        Ok(stats)
    }

    /// Builds statistics out of already computed threshold estimates.
    pub fn from_thresholds(size: usize, thresholds: Vec<f64>) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidSize);
        }
        if thresholds.is_empty() {
            return Err(Error::InvalidTrials);
        }
        Ok(Self { size, thresholds })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Per-trial estimates, in trial order.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn mean(&self) -> f64 {
        self.thresholds.iter().sum::<f64>() / self.trials() as f64
    }

    /// Sample standard deviation. `NaN` for a single trial.
    pub fn stddev(&self) -> f64 {
        let mean = self.mean();
        let squares = self
            .thresholds
            .iter()
            .map(|x| (x - mean) * (x - mean))
            .sum::<f64>();
        (squares / (self.trials() as f64 - 1.0)).sqrt()
    }

    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_width()
    }

    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_width()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.trials() as f64).sqrt()
    }
}
