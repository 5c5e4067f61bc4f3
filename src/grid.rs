//! Random site lattice and top-to-bottom percolation detection.
//!
//! Sites are stored row-major, `index = row * side + col`. The connectivity
//! structure has one extra element at `side * side`: a virtual sink that every
//! open bottom-row site is joined to. The lattice percolates when some open
//! top-row site shares a root with the sink.

use rand::distributions::{Bernoulli, Distribution};
use rand::Rng;

use crate::error::{check_probability, ConfigError};
use crate::DisjointSet;

/// One fully built lattice instance. Read-only after construction.
#[derive(Debug, Clone)]
pub struct PercolationGrid {
    side: usize,
    open_probability: Option<f64>,
    sites: Vec<bool>,
    connectivity: DisjointSet,
    percolates: bool,
}

impl PercolationGrid {
    /// Sample a `side x side` lattice where each site is open with probability
    /// `open_probability`, then resolve its connectivity.
    ///
    /// Inputs are validated before the first draw; a rejected call consumes no
    /// randomness. Sites are drawn one Bernoulli trial each, in row-major order,
    /// so a fixed RNG state always yields the same lattice.
    pub fn new<R: Rng + ?Sized>(
        side: usize,
        open_probability: f64,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let cells = cell_count(side)?;
        let p = check_probability(open_probability)?;
        let trial = Bernoulli::new(p).map_err(|_| ConfigError::InvalidProbability(p))?;

        let sites: Vec<bool> = (0..cells).map(|_| trial.sample(rng)).collect();
        Ok(Self::build(side, sites, Some(p)))
    }

    /// Build a lattice from an explicit row-major matrix (`true` = open).
    pub fn from_sites(side: usize, sites: Vec<bool>) -> Result<Self, ConfigError> {
        let cells = cell_count(side)?;
        if sites.len() != cells {
            return Err(ConfigError::SiteCountMismatch {
                expected: cells,
                actual: sites.len(),
            });
        }
        Ok(Self::build(side, sites, None))
    }

    /// Build a lattice from square row literals.
    ///
    /// ```
    /// use percolation::PercolationGrid;
    ///
    /// let grid = PercolationGrid::from_rows(&[
    ///     &[true, true, false],
    ///     &[false, true, false],
    ///     &[false, true, true],
    /// ])
    /// .unwrap();
    /// assert!(grid.percolates());
    /// ```
    pub fn from_rows(rows: &[&[bool]]) -> Result<Self, ConfigError> {
        let side = rows.len();
        let sites: Vec<bool> = rows.iter().flat_map(|row| row.iter().copied()).collect();
        if rows.iter().any(|row| row.len() != side) {
            return Err(ConfigError::SiteCountMismatch {
                expected: side * side,
                actual: sites.len(),
            });
        }
        Self::from_sites(side, sites)
    }

    fn build(side: usize, sites: Vec<bool>, open_probability: Option<f64>) -> Self {
        let cells = sites.len();
        let sink = cells;
        let mut connectivity = DisjointSet::new(cells + 1);

        // Horizontal neighbours; skip pairs that straddle a row boundary.
        for i in 0..cells - 1 {
            if (i + 1) % side != 0 && sites[i] && sites[i + 1] {
                connectivity.union(i, i + 1);
            }
        }

        // Vertical neighbours.
        for i in 0..cells - side {
            if sites[i] && sites[i + side] {
                connectivity.union(i, i + side);
            }
        }

        for i in cells - side..cells {
            if sites[i] {
                connectivity.union(i, sink);
            }
        }

        let percolates = (0..side).any(|i| sites[i] && connectivity.connected(i, sink));

        Self {
            side,
            open_probability,
            sites,
            connectivity,
            percolates,
        }
    }

    /// Whether an open path joins the top row to the bottom row.
    #[inline]
    pub fn percolates(&self) -> bool {
        self.percolates
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// The probability the sites were sampled with, or `None` for explicit matrices.
    #[inline]
    pub fn open_probability(&self) -> Option<f64> {
        self.open_probability
    }

    #[inline]
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.sites().is_open(row, col)
    }

    pub fn open_count(&self) -> usize {
        self.sites.iter().filter(|&&open| open).count()
    }

    /// Read-only view of the site matrix.
    #[inline]
    pub fn sites(&self) -> SiteView<'_> {
        SiteView {
            side: self.side,
            sites: &self.sites,
        }
    }

    /// Whether the site at `(row, col)` is open and connected to the bottom edge.
    pub fn drains(&self, row: usize, col: usize) -> bool {
        self.is_open(row, col)
            && self
                .connectivity
                .connected(row * self.side + col, self.sink())
    }

    /// The connectivity structure, including the sink at index `side * side`.
    #[inline]
    pub fn connectivity(&self) -> &DisjointSet {
        &self.connectivity
    }

    #[inline]
    fn sink(&self) -> usize {
        self.sites.len()
    }
}

fn cell_count(side: usize) -> Result<usize, ConfigError> {
    if side == 0 {
        return Err(ConfigError::InvalidSize);
    }
    // Reserve room for the sink element as well.
    side.checked_mul(side)
        .filter(|cells| cells.checked_add(1).is_some())
        .ok_or(ConfigError::InvalidSize)
}

/// Borrowed row-major view of a lattice's sites.
#[derive(Debug, Clone, Copy)]
pub struct SiteView<'a> {
    side: usize,
    sites: &'a [bool],
}

impl<'a> SiteView<'a> {
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// # Panics
    /// If `row` or `col` is not below `side`.
    #[inline]
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        assert!(col < self.side, "column {} out of range", col);
        self.sites[row * self.side + col]
    }

    #[inline]
    pub fn row(&self, row: usize) -> &'a [bool] {
        let start = row * self.side;
        &self.sites[start..start + self.side]
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &'a [bool]> + 'a {
        self.sites.chunks_exact(self.side)
    }

    #[inline]
    pub fn as_slice(&self) -> &'a [bool] {
        self.sites
    }
}
