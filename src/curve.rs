//! Aggregation of `(p, percolates)` trials into a binned probability curve.

use std::fmt;
use std::io;

use crate::error::ConfigError;
use crate::Trial;

const BAR_WIDTH: usize = 40;

/// Trials whose `p` fell in `[lower, upper)` (the last bin also includes 1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveBin {
    pub lower: f64,
    pub upper: f64,
    pub trials: usize,
    pub percolated: usize,
}

impl CurveBin {
    /// Fraction of this bin's trials that percolated, or `None` if it is empty.
    pub fn fraction(&self) -> Option<f64> {
        if self.trials == 0 {
            None
        } else {
            Some(self.percolated as f64 / self.trials as f64)
        }
    }

    #[inline]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }
}

/// Empirical percolation probability as a function of p, over equal-width bins of `[0, 1]`.
#[derive(Debug, Clone)]
pub struct PercolationCurve {
    bins: Vec<CurveBin>,
}

impl PercolationCurve {
    pub fn from_trials(trials: &[Trial], bins: usize) -> Result<Self, ConfigError> {
        if bins == 0 {
            return Err(ConfigError::InvalidBinCount);
        }
        let width = 1.0 / bins as f64;
        let mut out: Vec<CurveBin> = (0..bins)
            .map(|b| CurveBin {
                lower: b as f64 * width,
                upper: if b + 1 == bins { 1.0 } else { (b + 1) as f64 * width },
                trials: 0,
                percolated: 0,
            })
            .collect();

        for trial in trials {
            let b = ((trial.p * bins as f64) as usize).min(bins - 1);
            out[b].trials += 1;
            if trial.percolates {
                out[b].percolated += 1;
            }
        }
        Ok(Self { bins: out })
    }

    #[inline]
    pub fn bins(&self) -> &[CurveBin] {
        &self.bins
    }

    pub fn total_trials(&self) -> usize {
        self.bins.iter().map(|b| b.trials).sum()
    }

    /// Estimate the p at which the percolation fraction first crosses one half.
    ///
    /// Works on the midpoints of non-empty bins and interpolates linearly
    /// between the two that straddle 0.5. `None` if the fraction never crosses.
    pub fn threshold_estimate(&self) -> Option<f64> {
        let mut prev: Option<(f64, f64)> = None;
        for bin in &self.bins {
            let Some(f) = bin.fraction() else {
                continue;
            };
            let m = bin.midpoint();
            if f == 0.5 {
                return Some(m);
            }
            if let Some((pm, pf)) = prev {
                if (pf < 0.5) != (f < 0.5) {
                    return Some(pm + (0.5 - pf) * (m - pm) / (f - pf));
                }
            }
            prev = Some((m, f));
        }
        None
    }

    /// Write `lower,upper,trials,percolated,fraction` rows with a header line.
    pub fn write_csv<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "lower,upper,trials,percolated,fraction")?;
        for bin in &self.bins {
            write!(
                writer,
                "{:.6},{:.6},{},{},",
                bin.lower, bin.upper, bin.trials, bin.percolated
            )?;
            match bin.fraction() {
                Some(f) => writeln!(writer, "{:.6}", f)?,
                None => writeln!(writer)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for PercolationCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>13} | {:>7} | {:>7} | {:>8} |",
            "p", "trials", "perc", "fraction"
        )?;
        writeln!(f, "{:-<13}-+-{:-<7}-+-{:-<7}-+-{:-<8}-+", "", "", "", "")?;
        for bin in &self.bins {
            let range = format!("{:.3}-{:.3}", bin.lower, bin.upper);
            match bin.fraction() {
                Some(frac) => {
                    let bar = "#".repeat((frac * BAR_WIDTH as f64).round() as usize);
                    writeln!(
                        f,
                        "{:>13} | {:>7} | {:>7} | {:>8.3} | {}",
                        range, bin.trials, bin.percolated, frac, bar
                    )?;
                }
                None => writeln!(
                    f,
                    "{:>13} | {:>7} | {:>7} | {:>8} |",
                    range, bin.trials, bin.percolated, "-"
                )?,
            }
        }
        Ok(())
    }
}
