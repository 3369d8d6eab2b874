use std::ops::Range;

use rand::Rng;

use crate::graph::{DirectedGraph, Edge, MutableGraph};

/// Generates a random directed graph on vertices `0..n` with roughly
/// `edge_factor * n` edges, weights drawn uniformly from `weights`
///
/// Self-loops are skipped; cycles and parallel edges may occur.
pub fn generate_random<R: Rng>(
    n: usize,
    edge_factor: f64,
    weights: Range<f64>,
    rng: &mut R,
) -> DirectedGraph<usize> {
    let mut graph = DirectedGraph::with_capacity(n);
    for v in 0..n {
        graph.add_vertex(v);
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.insert_edge(Edge::new(u, v, rng.gen_range(weights.clone())));
        }
    }

    graph
}

/// Generates a random directed acyclic graph on vertices `0..n`
///
/// Every edge points from a lower to a higher vertex id, so `0..n` is a
/// topological order.
pub fn generate_random_dag<R: Rng>(
    n: usize,
    edge_factor: f64,
    weights: Range<f64>,
    rng: &mut R,
) -> DirectedGraph<usize> {
    let mut graph = DirectedGraph::with_capacity(n);
    for v in 0..n {
        graph.add_vertex(v);
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n - 1);
        let v = rng.gen_range(u + 1..n);
        graph.insert_edge(Edge::new(u, v, rng.gen_range(weights.clone())));
    }

    graph
}

/// Generates a `width * height` grid with unit-weight edges in both
/// directions between horizontally and vertically adjacent cells
///
/// Cell `(x, y)` is vertex `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<usize> {
    let mut graph = DirectedGraph::with_capacity(width * height);
    let index = |x: usize, y: usize| y * width + x;

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            graph.add_vertex(current);

            if x + 1 < width {
                graph.insert_edge(Edge::new(current, index(x + 1, y), 1.0));
                graph.insert_edge(Edge::new(index(x + 1, y), current, 1.0));
            }
            if y + 1 < height {
                graph.insert_edge(Edge::new(current, index(x, y + 1), 1.0));
                graph.insert_edge(Edge::new(index(x, y + 1), current, 1.0));
            }
        }
    }

    graph
}
