//! Monte Carlo estimation of site percolation on square lattices.
//!
//! Each [`PercolationGrid`] samples an `n x n` lattice of open/closed sites and
//! uses a [`DisjointSet`] with a virtual bottom sink to decide whether an open
//! path joins the top row to the bottom row. The [`simulation`] driver repeats
//! this for opening probabilities drawn from Beta(2, 2), and
//! [`PercolationCurve`] bins the results into an empirical probability curve.
//!
//! # Example
//!
//! ```
//! use percolation::{simulation, PercolationCurve, PercolationGrid, SimulationConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let grid = PercolationGrid::new(16, 1.0, &mut rng).expect("valid configuration");
//! assert!(grid.percolates());
//!
//! let config = SimulationConfig { side: 8, trials: 200, seed: 42 };
//! let trials = simulation::run(&config).expect("valid configuration");
//! let curve = PercolationCurve::from_trials(&trials, 10).unwrap();
//! assert_eq!(curve.total_trials(), 200);
//! ```

mod curve;
mod error;
mod grid;
pub mod render;
pub mod simulation;
mod union_find;

pub use curve::{CurveBin, PercolationCurve};
pub use error::ConfigError;
pub use grid::{PercolationGrid, SiteView};
pub use simulation::{SimulationConfig, Trial};
pub use union_find::DisjointSet;
