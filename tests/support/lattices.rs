#![allow(dead_code)]

use std::collections::VecDeque;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Row-major site matrix with each site open with probability `p`.
pub fn random_sites<R: Rng + ?Sized>(side: usize, p: f64, rng: &mut R) -> Vec<bool> {
    (0..side * side).map(|_| rng.gen_bool(p)).collect()
}

/// Reference answer: breadth-first flood from every open top-row site.
pub fn flood_percolates(side: usize, sites: &[bool]) -> bool {
    let mut seen = vec![false; sites.len()];
    let mut queue: VecDeque<usize> = (0..side).filter(|&c| sites[c]).collect();
    for &i in &queue {
        seen[i] = true;
    }

    while let Some(i) = queue.pop_front() {
        let (r, c) = (i / side, i % side);
        if r + 1 == side {
            return true;
        }
        let mut neighbours = Vec::with_capacity(4);
        if r > 0 {
            neighbours.push(i - side);
        }
        neighbours.push(i + side);
        if c > 0 {
            neighbours.push(i - 1);
        }
        if c + 1 < side {
            neighbours.push(i + 1);
        }
        for j in neighbours {
            if sites[j] && !seen[j] {
                seen[j] = true;
                queue.push_back(j);
            }
        }
    }
    false
}

/// Parse rows of `1` (open) and `0` (closed).
pub fn parse_rows(rows: &[&str]) -> (usize, Vec<bool>) {
    let sites = rows
        .iter()
        .flat_map(|row| row.chars().map(|ch| ch == '1'))
        .collect();
    (rows.len(), sites)
}

/// A lattice that is open only along column `col`.
pub fn single_column(side: usize, col: usize) -> Vec<bool> {
    (0..side * side).map(|i| i % side == col).collect()
}

/// A lattice whose only open sites form a staircase that never steps straight down.
pub fn diagonal(side: usize) -> Vec<bool> {
    (0..side * side).map(|i| i / side == i % side).collect()
}
