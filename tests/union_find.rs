mod support;

use percolation::DisjointSet;
use rand::Rng;
use support::lattices::seeded_rng;

/// Naive partition that relabels a whole group on every merge.
struct Labels(Vec<usize>);

impl Labels {
    fn new(n: usize) -> Self {
        Self((0..n).collect())
    }

    fn union(&mut self, p: usize, q: usize) {
        let (from, to) = (self.0[q], self.0[p]);
        for label in &mut self.0 {
            if *label == from {
                *label = to;
            }
        }
    }

    fn connected(&self, p: usize, q: usize) -> bool {
        self.0[p] == self.0[q]
    }
}

#[test]
fn test_matches_naive_partition() {
    let n = 64;
    for seed in 0..20 {
        let mut rng = seeded_rng(seed);
        let mut set = DisjointSet::new(n);
        let mut labels = Labels::new(n);

        for _ in 0..48 {
            let p = rng.gen_range(0..n);
            let q = rng.gen_range(0..n);
            set.union(p, q);
            labels.union(p, q);
        }

        for p in 0..n {
            for q in 0..n {
                assert_eq!(
                    set.connected(p, q),
                    labels.connected(p, q),
                    "seed {}: ({}, {}) disagree",
                    seed,
                    p,
                    q
                );
            }
        }

        let mut distinct: Vec<usize> = labels.0.clone();
        distinct.sort_unstable();
        distinct.dedup();
        assert_eq!(set.component_count(), distinct.len());
    }
}

#[test]
fn test_union_then_connected() {
    let mut rng = seeded_rng(11);
    let mut set = DisjointSet::new(200);
    for _ in 0..500 {
        let p = rng.gen_range(0..200);
        let q = rng.gen_range(0..200);
        set.union(p, q);
        assert!(set.connected(p, q));
        assert!(set.connected(q, p));
    }
}

#[test]
fn test_transitivity() {
    let mut rng = seeded_rng(12);
    let n = 40;
    let mut set = DisjointSet::new(n);
    for _ in 0..25 {
        set.union(rng.gen_range(0..n), rng.gen_range(0..n));
    }
    for p in 0..n {
        for q in 0..n {
            for r in 0..n {
                if set.connected(p, q) && set.connected(q, r) {
                    assert!(set.connected(p, r));
                }
            }
        }
    }
}

#[test]
fn test_union_idempotent() {
    let mut set = DisjointSet::new(10);
    set.union(1, 2);
    set.union(3, 4);
    let before: Vec<usize> = (0..10).map(|i| set.set_size(i)).collect();
    let components = set.component_count();

    assert!(!set.union(1, 2));
    assert!(!set.union(2, 1));

    let after: Vec<usize> = (0..10).map(|i| set.set_size(i)).collect();
    assert_eq!(before, after);
    assert_eq!(set.component_count(), components);
    assert!(!set.connected(2, 3));
}

#[test]
fn test_weights_track_group_sizes() {
    let mut rng = seeded_rng(13);
    let n = 100;
    let mut set = DisjointSet::new(n);
    for _ in 0..60 {
        set.union(rng.gen_range(0..n), rng.gen_range(0..n));
    }
    for i in 0..n {
        let members = (0..n).filter(|&j| set.connected(i, j)).count();
        assert_eq!(set.set_size(i), members);
    }
}
