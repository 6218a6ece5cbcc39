//! Rank assignment and in-rank ordering passes.

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use petgraph::Direction as EdgeDir;
use std::collections::VecDeque;

/// Kahn ordering over the mirror graph.
///
/// Hand-drawn edges may close cycles; any node left unprocessed when the
/// queue drains is appended in index order so every node still receives a
/// rank.
fn topo_order(mirror: &StableDiGraph<usize, ()>) -> Vec<NodeIndex> {
    let n = mirror.node_count();
    let mut indeg = vec![0usize; n];
    for edge in mirror.edge_references() {
        indeg[edge.target().index()] += 1;
    }

    let mut queue: VecDeque<NodeIndex> = mirror
        .node_indices()
        .filter(|idx| indeg[idx.index()] == 0)
        .collect();

    let mut order = Vec::with_capacity(n);
    let mut placed = vec![false; n];

    while let Some(node) = queue.pop_front() {
        order.push(node);
        placed[node.index()] = true;
        for target in mirror.neighbors_directed(node, EdgeDir::Outgoing) {
            indeg[target.index()] -= 1;
            if indeg[target.index()] == 0 {
                queue.push_back(target);
            }
        }
    }

    if order.len() < n {
        for idx in mirror.node_indices() {
            if !placed[idx.index()] {
                order.push(idx);
            }
        }
    }

    order
}

/// Longest-path rank per node, indexed by mirror node index.
///
/// Roots (and disconnected nodes) sit at rank 0; every edge pushes its
/// target at least one rank past its source. Cycle leftovers from the
/// Kahn pass are ranked best-effort in index order; back-edges into an
/// already-processed node can then leave low ranks unpopulated, so the
/// final ranks are compacted to consecutive indices.
pub(crate) fn assign_ranks(mirror: &StableDiGraph<usize, ()>) -> Vec<usize> {
    let mut ranks = vec![0usize; mirror.node_count()];
    for node in topo_order(mirror) {
        let rank = ranks[node.index()];
        for target in mirror.neighbors_directed(node, EdgeDir::Outgoing) {
            if target != node && ranks[target.index()] < rank + 1 {
                ranks[target.index()] = rank + 1;
            }
        }
    }

    let mut used = ranks.clone();
    used.sort_unstable();
    used.dedup();
    for rank in &mut ranks {
        *rank = used.binary_search(rank).unwrap_or(0);
    }
    ranks
}

/// Bucket nodes by rank and order each bucket with barycenter sweeps.
///
/// Two down/up passes: a node is pulled toward the mean position of its
/// neighbors in the fixed adjacent rank, with its current position as the
/// stable tie-break. Buckets start in input order, which keeps the whole
/// pass deterministic.
pub(crate) fn order_ranks(
    mirror: &StableDiGraph<usize, ()>,
    ranks: &[usize],
) -> Vec<Vec<NodeIndex>> {
    let max_rank = ranks.iter().copied().max().unwrap_or(0);
    let mut buckets: Vec<Vec<NodeIndex>> = vec![Vec::new(); max_rank + 1];
    for idx in mirror.node_indices() {
        buckets[ranks[idx.index()]].push(idx);
    }

    let mut positions = vec![0usize; mirror.node_count()];
    refresh_positions(&buckets, &mut positions);

    for _ in 0..2 {
        for rank in 1..buckets.len() {
            sort_by_barycenter(mirror, &mut buckets[rank], &positions, EdgeDir::Incoming);
            refresh_positions(&buckets, &mut positions);
        }
        for rank in (0..buckets.len().saturating_sub(1)).rev() {
            sort_by_barycenter(mirror, &mut buckets[rank], &positions, EdgeDir::Outgoing);
            refresh_positions(&buckets, &mut positions);
        }
    }

    buckets
}

fn refresh_positions(buckets: &[Vec<NodeIndex>], positions: &mut [usize]) {
    for bucket in buckets {
        for (slot, idx) in bucket.iter().enumerate() {
            positions[idx.index()] = slot;
        }
    }
}

fn sort_by_barycenter(
    mirror: &StableDiGraph<usize, ()>,
    bucket: &mut [NodeIndex],
    positions: &[usize],
    toward: EdgeDir,
) {
    if bucket.len() <= 1 {
        return;
    }

    let mut keyed: Vec<(f32, usize, NodeIndex)> = bucket
        .iter()
        .enumerate()
        .map(|(slot, &idx)| {
            let mut total = 0.0f32;
            let mut count = 0.0f32;
            for neighbor in mirror.neighbors_directed(idx, toward) {
                total += positions[neighbor.index()] as f32;
                count += 1.0;
            }
            let score = if count == 0.0 {
                // No neighbors in the adjacent rank: hold position.
                slot as f32
            } else {
                total / count
            };
            (score, slot, idx)
        })
        .collect();

    keyed.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.1.cmp(&b.1))
    });

    for (slot, entry) in keyed.into_iter().enumerate() {
        bucket[slot] = entry.2;
    }
}
