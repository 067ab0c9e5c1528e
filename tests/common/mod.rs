// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.
//!
//! Builds the tree of an integer explicitly, using nothing from the crate
//! except the record type, so metric values can be checked against a direct
//! traversal.

#![allow(dead_code)]

use tree_metrics::MetricsRecord;

/// Trial division by every integer up to the square root.
pub fn naive_is_prime(x: u64) -> bool {
    x >= 2 && (2..x).take_while(|d| d * d <= x).all(|d| x % d != 0)
}

/// Number of primes `<= p`.
pub fn naive_prime_rank(p: u64) -> u64 {
    (2..=p).filter(|&x| naive_is_prime(x)).count() as u64
}

/// Prime factors with multiplicity.
pub fn naive_omega(mut n: u64) -> u32 {
    let mut count = 0;
    let mut d = 2;
    while n > 1 {
        while n % d == 0 {
            n /= d;
            count += 1;
        }
        d += 1;
    }
    count
}

/// A rooted tree stored as child lists; vertex 0 is the root.
#[derive(Debug, Clone)]
pub struct ExplicitTree {
    children: Vec<Vec<usize>>,
}

impl ExplicitTree {
    pub fn single() -> Self {
        Self {
            children: vec![Vec::new()],
        }
    }

    /// New root with `below` as its only child.
    pub fn planted(below: &ExplicitTree) -> Self {
        let mut children = vec![vec![1]];
        children.extend(
            below
                .children
                .iter()
                .map(|c| c.iter().map(|&v| v + 1).collect()),
        );
        Self { children }
    }

    /// Identify the roots of `a` and `b`.
    pub fn graft(a: &ExplicitTree, b: &ExplicitTree) -> Self {
        let offset = a.children.len() - 1;
        let mut root = a.children[0].clone();
        root.extend(b.children[0].iter().map(|&v| v + offset));
        let mut children = vec![root];
        children.extend(a.children[1..].iter().cloned());
        children.extend(
            b.children[1..]
                .iter()
                .map(|c| c.iter().map(|&v| v + offset).collect()),
        );
        Self { children }
    }

    /// Tree of `n` under the prime-rank bijection.
    pub fn of(n: u64) -> Self {
        if n == 1 {
            return Self::single();
        }
        if naive_is_prime(n) {
            return Self::planted(&Self::of(naive_prime_rank(n)));
        }
        let low = (2..n).find(|d| n % d == 0).unwrap();
        Self::graft(&Self::of(low), &Self::of(n / low))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Metrics by direct traversal.
    pub fn record(&self, n: u64) -> MetricsRecord {
        let count = self.children.len();
        let mut depth = vec![0u64; count];
        let mut order = vec![0usize];
        let mut i = 0;
        while i < order.len() {
            let v = order[i];
            for &c in &self.children[v] {
                depth[c] = depth[v] + 1;
                order.push(c);
            }
            i += 1;
        }

        let degree = |v: usize| self.children[v].len() as u64 + u64::from(v != 0);
        let is_leaf = |v: usize| v != 0 && self.children[v].is_empty();

        let mut height_below = vec![0u64; count];
        let mut rooted = vec![1u64; count];
        let mut diameter = 0;
        for &v in order.iter().rev() {
            let mut spans: Vec<u64> = self.children[v]
                .iter()
                .map(|&c| height_below[c] + 1)
                .collect();
            spans.sort_unstable_by(|a, b| b.cmp(a));
            height_below[v] = spans.first().copied().unwrap_or(0);
            diameter = diameter.max(spans.iter().take(2).sum::<u64>());
            rooted[v] = self.children[v].iter().map(|&c| 1 + rooted[c]).product();
        }

        let vertices = 0..count;
        let leaves: Vec<usize> = vertices.clone().filter(|&v| is_leaf(v)).collect();
        let path_length: u64 = depth.iter().sum();

        MetricsRecord {
            n,
            vertices: count as u64,
            leaves: leaves.len() as u64,
            pendent_vertices: vertices.clone().filter(|&v| degree(v) == 1).count() as u64,
            edges: count as u64 - 1,
            number_root_subtrees: rooted[0],
            number_subtrees: rooted.iter().sum(),
            number_branching_vertices: vertices.clone().filter(|&v| degree(v) >= 3).count()
                as u64,
            number_sibling_pairs: self
                .children
                .iter()
                .map(|c| (c.len() * c.len().saturating_sub(1) / 2) as u64)
                .sum(),
            height: depth.iter().copied().max().unwrap_or(0),
            eccentricity_of_root: height_below[0],
            level_of_lowest_leaf: vertices
                .clone()
                .filter(|&v| self.children[v].is_empty())
                .map(|v| depth[v])
                .min()
                .unwrap_or(0),
            path_length,
            external_path_length: leaves.iter().map(|&v| depth[v]).sum(),
            internal_path_length: vertices
                .clone()
                .filter(|&v| !self.children[v].is_empty())
                .map(|v| depth[v])
                .sum(),
            diameter,
            visitation_length: path_length + count as u64,
            maximum_vertex_degree: vertices.map(degree).max().unwrap_or(0),
            number_of_prime_factors: naive_omega(n),
        }
    }
}
