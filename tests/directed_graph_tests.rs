use std::collections::HashSet;

use graph_paths::graph::generators::{generate_random, generate_random_dag};
use graph_paths::{DirectedGraph, Edge, Error, ErrorKind, Graph, MutableGraph, VertexOrder};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Test helper to build a graph of unit-weight edges
fn graph_of(edges: &[(&'static str, &'static str)]) -> DirectedGraph<&'static str> {
    DirectedGraph::from_edges(edges.iter().map(|&(from, to)| Edge::new(from, to, 1.0))).unwrap()
}

fn vertex_set(graph: &DirectedGraph<&'static str>) -> HashSet<&'static str> {
    graph.vertices().copied().collect()
}

fn edge_set<V: Clone + Eq + std::hash::Hash>(edges: impl Iterator<Item = Edge<V>>) -> HashSet<Edge<V>> {
    edges.collect()
}

#[test]
fn test_vertices_appear_exactly_once() {
    let mut graph = DirectedGraph::new();
    graph.add_vertex("a");
    graph.add_vertex("a");
    graph.add_edge(Edge::new("a", "b", 2.0)).unwrap();
    graph.add_edge(Edge::new("b", "c", 1.0)).unwrap();

    for vertex in ["a", "b", "c"] {
        assert!(graph.contains_vertex(&vertex));
        assert_eq!(graph.vertices().filter(|v| **v == vertex).count(), 1);
    }
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert!(!graph.is_empty());
}

#[test]
fn test_add_then_remove_edge_keeps_vertices() {
    let mut graph = DirectedGraph::new();
    let edge = Edge::new(1, 2, 0.5);
    graph.add_edge(edge.clone()).unwrap();
    assert!(graph.contains_edge(&edge));

    graph.remove_edge(&edge).unwrap();
    assert!(!graph.contains_edge(&edge));
    assert!(graph.contains_vertex(&1));
    assert!(graph.contains_vertex(&2));

    let err = graph.remove_edge(&edge).unwrap_err();
    assert!(matches!(err, Error::EdgeNotFound(_)));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_parallel_edges_are_distinct() {
    let mut graph = DirectedGraph::new();
    graph.add_edge(Edge::new('u', 'v', 1.0)).unwrap();
    graph.add_edge(Edge::new('u', 'v', 2.0)).unwrap();
    graph.add_edge(Edge::new('u', 'v', 1.0)).unwrap();

    assert_eq!(graph.edge_count(), 2);
    assert!(graph.contains_edge(&Edge::new('u', 'v', 2.0)));
    assert!(!graph.contains_edge(&Edge::new('u', 'v', 3.0)));
}

#[test]
fn test_nan_weight_is_rejected() {
    let mut graph = DirectedGraph::new();
    let err = graph.add_edge(Edge::new(0, 1, f64::NAN)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(graph.is_empty());
}

#[test]
fn test_remove_vertex_drops_incident_edges() {
    let mut graph = graph_of(&[("a", "b"), ("b", "c"), ("c", "a"), ("a", "c")]);
    graph.remove_vertex(&"c").unwrap();

    assert!(!graph.contains_vertex(&"c"));
    assert_eq!(vertex_set(&graph), HashSet::from(["a", "b"]));
    assert!(graph.edges().all(|edge| edge.from != "c" && edge.to != "c"));
    assert_eq!(graph.edge_count(), 1);

    assert!(matches!(graph.remove_vertex(&"c"), Err(Error::VertexNotFound(_))));
}

#[test]
fn test_outgoing_edges_of_absent_vertex_fails() {
    let graph = graph_of(&[("a", "b")]);
    assert_eq!(graph.outgoing_edges(&"a").unwrap().count(), 1);
    assert_eq!(graph.outgoing_edges(&"b").unwrap().count(), 0);
    let result = graph.outgoing_edges(&"z");
    match result {
        Err(err) => assert_eq!(err.kind(), ErrorKind::NotFound),
        Ok(_) => panic!("absent vertex must not have outgoing edges"),
    }
}

#[test]
fn test_iteration_is_restartable() {
    let graph = graph_of(&[("a", "b"), ("b", "c")]);
    let first: HashSet<_> = graph.edges().cloned().collect();
    let second: HashSet<_> = graph.edges().cloned().collect();
    assert_eq!(first, second);
    assert_eq!(graph.vertices().count(), graph.vertices().count());
}

#[test]
fn test_cycle_detection() {
    let mut graph = graph_of(&[("a", "b"), ("b", "c"), ("c", "a")]);
    assert!(graph.is_cyclic());

    graph.remove_edge(&Edge::new("c", "a", 1.0)).unwrap();
    assert!(!graph.is_cyclic());
}

#[test]
fn test_self_loop_is_a_cycle() {
    let graph = graph_of(&[("a", "a")]);
    assert!(graph.is_cyclic());
}

#[test]
fn test_diamond_is_not_cyclic() {
    // Cross edges into finished vertices are not back edges
    let graph = graph_of(&[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d"), ("e", "d")]);
    assert!(!graph.is_cyclic());
}

#[test]
fn test_topological_order_from_source() {
    let graph = graph_of(&[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d"), ("x", "a")]);
    let order = graph.topological_order(&"a").unwrap();

    assert_eq!(order.len(), 4, "only vertices reachable from the source");
    assert_eq!(order[0], "a");
    let position = |v: &str| order.iter().position(|o| *o == v).unwrap();
    for edge in graph.edges().filter(|edge| edge.from != "x") {
        assert!(position(edge.from) < position(edge.to), "{} out of order", edge);
    }
}

#[test]
fn test_topological_order_rejects_reachable_cycle() {
    let graph = graph_of(&[("s", "a"), ("a", "b"), ("b", "a"), ("t", "u")]);
    let err = graph.topological_order(&"s").unwrap_err();
    assert!(matches!(err, Error::CycleDetected(_)));
    assert_eq!(err.kind(), ErrorKind::InvalidState);

    // The cycle is not reachable from `t`
    assert_eq!(graph.topological_order(&"t").unwrap(), vec!["t", "u"]);
}

#[test]
fn test_topological_sort_covers_every_vertex() {
    let mut rng = StdRng::seed_from_u64(21);
    let graph = generate_random_dag(300, 3.0, 1.0..5.0, &mut rng);
    let order = graph.topological_sort().unwrap();

    assert_eq!(order.len(), graph.vertex_count());
    let mut position = vec![0; order.len()];
    for (i, v) in order.iter().enumerate() {
        position[*v] = i;
    }
    for edge in graph.edges() {
        assert!(position[edge.from] < position[edge.to]);
    }

    assert!(graph_of(&[("a", "b"), ("b", "a")]).topological_sort().is_err());
}

#[test]
fn test_reverse_postorder_respects_edges_of_dag() {
    let graph = graph_of(&[("a", "b"), ("b", "c"), ("d", "c")]);
    let order: Vec<_> = graph.vertices_in(VertexOrder::ReversePostorder).unwrap().collect();
    assert_eq!(order.len(), 4);
    let position = |v: &str| order.iter().position(|o| *o == v).unwrap();
    assert!(position("a") < position("b"));
    assert!(position("b") < position("c"));
    assert!(position("d") < position("c"));

    let any: HashSet<_> = graph.vertices_in(VertexOrder::Any).unwrap().collect();
    assert_eq!(any, vertex_set(&graph));
}

#[test]
fn test_strongly_connected_components() {
    let graph = graph_of(&[("a", "b"), ("b", "a"), ("b", "c")]);
    let components = graph.strongly_connected_components().unwrap();

    let mut found: Vec<HashSet<&str>> = components.iter().map(vertex_set).collect();
    found.sort_by_key(|component| component.len());
    assert_eq!(found, vec![HashSet::from(["c"]), HashSet::from(["a", "b"])]);

    // Components keep only their internal edges
    let pair = components.iter().find(|c| c.vertex_count() == 2).unwrap();
    assert_eq!(pair.edge_count(), 2);
    assert!(!pair.contains_edge(&Edge::new("b", "c", 1.0)));
}

#[test]
fn test_components_partition_random_graph() {
    let mut rng = StdRng::seed_from_u64(99);
    let graph = generate_random(200, 1.5, 1.0..2.0, &mut rng);
    let components = graph.strongly_connected_components().unwrap();

    let total: usize = components.iter().map(|c| c.vertex_count()).sum();
    assert_eq!(total, graph.vertex_count());

    // Every component is strongly connected: all members reach each other
    for component in &components {
        let Some(root) = component.vertices().next() else { continue };
        if component.vertex_count() > 1 {
            assert!(component.is_cyclic(), "a multi-vertex component must be cyclic");
        }
        let transposed = component.transpose();
        let reach = |g: &DirectedGraph<usize>| {
            let mut seen = HashSet::from([*root]);
            let mut stack = vec![*root];
            while let Some(v) = stack.pop() {
                for edge in g.outgoing_edges(&v).unwrap() {
                    if seen.insert(edge.to) {
                        stack.push(edge.to);
                    }
                }
            }
            seen.len()
        };
        assert_eq!(reach(component), component.vertex_count());
        assert_eq!(reach(&transposed), component.vertex_count());
    }
}

#[test]
fn test_transpose_round_trip() {
    let graph = DirectedGraph::from_edges(vec![
        Edge::new(1, 2, 1.5),
        Edge::new(2, 3, -2.0),
        Edge::new(3, 1, 0.0),
        Edge::new(1, 2, 4.0),
    ])
    .unwrap();
    let mut with_isolated = graph.clone();
    with_isolated.add_vertex(9);

    let transposed = with_isolated.transpose();
    assert!(transposed.contains_vertex(&9));
    assert!(transposed.contains_edge(&Edge::new(2, 1, 1.5)));
    assert!(!transposed.contains_edge(&Edge::new(1, 2, 1.5)));

    let round_trip = transposed.transpose();
    assert_eq!(
        round_trip.vertices().copied().collect::<HashSet<_>>(),
        with_isolated.vertices().copied().collect::<HashSet<_>>()
    );
    assert_eq!(
        edge_set(round_trip.edges().cloned()),
        edge_set(with_isolated.edges().cloned())
    );
}

#[test]
fn test_transpose_is_an_independent_copy() {
    let graph = graph_of(&[("a", "b")]);
    let mut transposed = graph.transpose();
    transposed.remove_vertex(&"a").unwrap();

    assert!(graph.contains_vertex(&"a"));
    assert!(graph.contains_edge(&Edge::new("a", "b", 1.0)));
}

#[test]
fn test_edge_ordering_and_display() {
    let mut edges = vec![Edge::new("a", "b", 3.0), Edge::new("b", "c", -1.0), Edge::new("c", "a", 2.0)];
    edges.sort_by(Edge::by_weight);
    let weights: Vec<f64> = edges.iter().map(|edge| edge.weight).collect();
    assert_eq!(weights, vec![-1.0, 2.0, 3.0]);

    let edge = Edge::new("a", "b", 3.0);
    assert_eq!(edge.reversed(), Edge::new("b", "a", 3.0));
    assert!(edge.reversed().is_reverse_of(&edge));
    assert_eq!(edge.to_string(), "\"a\" -(3)-> \"b\"");
}

#[test]
fn test_negative_weight_detection() {
    let mut graph = DirectedGraph::from_edges(vec![Edge::new(1, 2, 0.0), Edge::new(2, 3, 4.5)]).unwrap();
    assert!(!graph.has_negative_weights());

    graph.add_edge(Edge::new(3, 1, -0.5)).unwrap();
    assert!(graph.has_negative_weights());

    graph.remove_edge(&Edge::new(3, 1, -0.5)).unwrap();
    assert!(!graph.has_negative_weights());
}

#[test]
fn test_cycle_detection_with_isolated_vertices() {
    let mut graph = graph_of(&[("a", "b"), ("b", "c")]);
    graph.add_vertex("lonely");
    assert!(!graph.is_cyclic());

    graph.add_edge(Edge::new("c", "a", 1.0)).unwrap();
    assert!(graph.is_cyclic());

    // Removing a vertex on the cycle also removes the edges into it
    graph.remove_vertex(&"b").unwrap();
    assert!(!graph.is_cyclic());
    assert!(!DirectedGraph::<u8>::new().is_cyclic());
}
