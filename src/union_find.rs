//! Disjoint-set (union-find) with union by size and path halving.
//!
//! The universe `0..len` is fixed at construction. Indices outside it are a
//! programming error and panic on the slice access.

use std::cell::Cell;

/// Partition of `0..len` into disjoint groups.
///
/// Parent links live in [`Cell`]s so that read-only queries ([`root`](Self::root),
/// [`connected`](Self::connected)) can still halve the paths they walk.
///
/// ```
/// use percolation::DisjointSet;
///
/// let mut set = DisjointSet::new(4);
/// set.union(0, 1);
/// set.union(2, 3);
/// assert!(set.connected(1, 0));
/// assert!(!set.connected(1, 2));
/// assert_eq!(set.component_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<Cell<usize>>,
    /// Group size; only meaningful at current roots.
    weight: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Create `size` singleton groups.
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).map(Cell::new).collect(),
            weight: vec![1; size],
            components: size,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint groups currently in the partition.
    #[inline]
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Representative of the group containing `i`.
    ///
    /// Every node visited on the way up is re-pointed at its grandparent.
    ///
    /// # Panics
    /// If `i >= self.len()`.
    pub fn root(&self, mut i: usize) -> usize {
        loop {
            let p = self.parent[i].get();
            if p == i {
                return i;
            }
            let grandparent = self.parent[p].get();
            self.parent[i].set(grandparent);
            i = grandparent;
        }
    }

    /// Merge the groups containing `p` and `q`.
    ///
    /// The lighter root is attached under the heavier one; on a tie `q`'s root
    /// goes under `p`'s. Returns `true` if two distinct groups were merged.
    pub fn union(&mut self, p: usize, q: usize) -> bool {
        let rp = self.root(p);
        let rq = self.root(q);
        if rp == rq {
            return false;
        }
        let (keep, absorb) = if self.weight[rp] >= self.weight[rq] {
            (rp, rq)
        } else {
            (rq, rp)
        };
        self.parent[absorb].set(keep);
        self.weight[keep] += self.weight[absorb];
        self.components -= 1;
        true
    }

    /// Whether `p` and `q` are in the same group.
    #[inline]
    pub fn connected(&self, p: usize, q: usize) -> bool {
        self.root(p) == self.root(q)
    }

    /// Number of elements in the group containing `i`.
    #[inline]
    pub fn set_size(&self, i: usize) -> usize {
        self.weight[self.root(i)]
    }

    #[cfg(test)]
    fn depth(&self, mut i: usize) -> usize {
        let mut d = 0;
        while self.parent[i].get() != i {
            i = self.parent[i].get();
            d += 1;
        }
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let set = DisjointSet::new(5);
        assert_eq!(set.len(), 5);
        assert_eq!(set.component_count(), 5);
        for i in 0..5 {
            assert_eq!(set.root(i), i);
            assert_eq!(set.set_size(i), 1);
        }
        assert!(!set.connected(0, 4));
    }

    #[test]
    fn test_empty() {
        let set = DisjointSet::new(0);
        assert!(set.is_empty());
        assert_eq!(set.component_count(), 0);
    }

    #[test]
    fn test_union_reports_merge() {
        let mut set = DisjointSet::new(3);
        assert!(set.union(0, 1));
        assert!(!set.union(1, 0));
        assert!(!set.union(2, 2));
        assert_eq!(set.component_count(), 2);
        assert_eq!(set.set_size(0), 2);
        assert_eq!(set.set_size(2), 1);
    }

    #[test]
    fn test_tie_keeps_first_root() {
        let mut set = DisjointSet::new(2);
        set.union(0, 1);
        assert_eq!(set.root(1), 0);
    }

    #[test]
    fn test_lighter_tree_goes_under_heavier() {
        let mut set = DisjointSet::new(4);
        set.union(1, 2);
        set.union(1, 3);
        // {1,2,3} outweighs {0}, so 1 stays the root even though 0 is passed first.
        set.union(0, 1);
        assert_eq!(set.root(0), 1);
        assert_eq!(set.set_size(0), 4);
    }

    #[test]
    fn test_depth_stays_logarithmic() {
        // Pairwise merging builds the deepest trees union by size allows.
        let n = 1 << 10;
        let mut set = DisjointSet::new(n);
        let mut step = 1;
        while step < n {
            for i in (0..n).step_by(2 * step) {
                set.union(i, i + step);
            }
            step *= 2;
        }
        assert_eq!(set.component_count(), 1);
        let max_depth = (0..n).map(|i| set.depth(i)).max().unwrap();
        assert!(max_depth <= 10, "depth {} exceeds log2(n)", max_depth);
    }

    #[test]
    fn test_root_halves_path() {
        let mut set = DisjointSet::new(8);
        let mut step = 1;
        while step < 8 {
            for i in (0..8).step_by(2 * step) {
                set.union(i, i + step);
            }
            step *= 2;
        }
        let deepest = (0..8).max_by_key(|&i| set.depth(i)).unwrap();
        let before = set.depth(deepest);
        assert_eq!(before, 3);
        set.root(deepest);
        assert!(set.depth(deepest) < before);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_panics() {
        let set = DisjointSet::new(3);
        set.root(3);
    }
}
