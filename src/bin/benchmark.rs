use std::env;
use std::time::{Duration, Instant};

use graph_paths::graph::generators::{generate_random, generate_random_dag};
use graph_paths::graph::{DirectedGraph, Graph};
use graph_paths::{ShortestPathEngine, Strategy};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Benchmark settings read from positional arguments
#[derive(Debug, Clone)]
struct BenchmarkConfig {
    /// Number of vertices per generated graph
    vertices: usize,
    /// Average number of edges per vertex
    edge_factor: f64,
    /// Seed for the graph generators
    seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            vertices: 10_000,
            edge_factor: 4.0,
            seed: 42,
        }
    }
}

impl BenchmarkConfig {
    fn from_args() -> Self {
        let args: Vec<String> = env::args().collect();
        let defaults = BenchmarkConfig::default();
        BenchmarkConfig {
            vertices: args.get(1).and_then(|a| a.parse().ok()).unwrap_or(defaults.vertices),
            edge_factor: args.get(2).and_then(|a| a.parse().ok()).unwrap_or(defaults.edge_factor),
            seed: args.get(3).and_then(|a| a.parse().ok()).unwrap_or(defaults.seed),
        }
    }
}

// Function to benchmark a strategy on a graph
fn benchmark_strategy(strategy: Strategy, graph: &DirectedGraph<usize>, source: usize) -> Option<Duration> {
    println!("Running {:?} on graph with {} vertices...", strategy, graph.vertex_count());

    let engine = ShortestPathEngine::new().with_strategy(strategy);
    let start = Instant::now();
    match engine.compute(graph, &source) {
        Ok(paths) => {
            let duration = start.elapsed();
            println!("  - Found {} reachable vertices in {:?}", paths.reachable().count(), duration);
            Some(duration)
        }
        Err(err) => {
            println!("  - Failed: {}", err);
            None
        }
    }
}

fn print_row(label: &str, timings: &[(Strategy, Option<Duration>)]) {
    let cells: Vec<String> = timings
        .iter()
        .map(|(_, time)| match time {
            Some(time) => format!("{:<12.2}", time.as_secs_f64() * 1000.0),
            None => format!("{:<12}", "n/a"),
        })
        .collect();
    println!("{:<10} | {}", label, cells.join(" | "));
}

fn main() {
    env_logger::init();

    let config = BenchmarkConfig::from_args();
    let mut rng = StdRng::seed_from_u64(config.seed);

    println!("=====================================================");
    println!("Benchmark: Bellman-Ford vs Dijkstra vs Topological");
    println!("Vertices: {}, edge factor: {}, seed: {}", config.vertices, config.edge_factor, config.seed);
    println!("=====================================================");

    let strategies = [Strategy::BellmanFord, Strategy::Dijkstra, Strategy::Topological, Strategy::Auto];
    let graphs = [
        ("cyclic", generate_random(config.vertices, config.edge_factor, 1.0..100.0, &mut rng)),
        ("acyclic", generate_random_dag(config.vertices, config.edge_factor, 1.0..100.0, &mut rng)),
    ];

    let mut results = Vec::new();
    for (label, graph) in &graphs {
        println!("\n{} graph: {} vertices, {} edges", label, graph.vertex_count(), graph.edge_count());
        let timings: Vec<(Strategy, Option<Duration>)> = strategies
            .iter()
            .map(|&strategy| (strategy, benchmark_strategy(strategy, graph, 0)))
            .collect();
        results.push((*label, timings));
    }

    println!("\n=====================================================");
    println!("Summary of Results (ms)");
    println!("=====================================================");
    let header: Vec<String> = strategies.iter().map(|s| format!("{:<12}", format!("{:?}", s))).collect();
    println!("{:<10} | {}", "Graph", header.join(" | "));
    println!("-----------------------------------------------------");
    for (label, timings) in &results {
        print_row(label, timings);
    }
}
