// tests/test_grid.rs
use ahash::AHashSet;
use hegraph::{Graph, GraphError, NodeId};

const SIZES: [(usize, usize); 6] = [(2, 2), (3, 3), (3, 5), (5, 3), (4, 4), (6, 4)];

fn grid_points(width: usize, height: usize) -> Vec<[f64; 3]> {
    let mut points = Vec::with_capacity(width * height);
    for i in 0..width {
        for j in 0..height {
            points.push([i as f64, j as f64, 0.0]);
        }
    }
    points
}

/// Column and row of `n` recovered from its point.
fn cell(graph: &Graph<[f64; 3]>, n: NodeId) -> (usize, usize) {
    let p = graph[n].data();
    (p[0] as usize, p[1] as usize)
}

#[test]
fn test_uv_three_by_three() {
    let points = grid_points(3, 3);
    let mut graph = Graph::new();
    graph.uv(3, 3, &points).unwrap();

    assert_eq!(graph.num_nodes(), 9);
    assert_eq!(graph.num_half_edges(), 24);
    assert_eq!(graph.num_faces(), 8);
    assert_eq!(graph.null_edge_loop().unwrap().len(), 8);
    assert_eq!(graph.null_edges().len(), 8);
    graph.validate_connectivity().unwrap();
}

#[test]
fn test_uv_counts_for_rectangular_grids() {
    for (w, h) in SIZES {
        let points = grid_points(w, h);
        let mut graph = Graph::new();
        graph.uv(w, h, &points).unwrap();

        assert_eq!(graph.num_nodes(), w * h, "{w}x{h}");
        assert_eq!(graph.num_faces(), 2 * (w - 1) * (h - 1), "{w}x{h}");
        assert_eq!(graph.num_half_edges(), 3 * graph.num_faces(), "{w}x{h}");

        let loops = graph.null_edge_loops().unwrap();
        assert_eq!(loops.len(), 1, "{w}x{h}");
        assert_eq!(loops[0].len(), 2 * (w + h) - 4, "{w}x{h}");
        graph.validate_connectivity().unwrap();
    }
}

#[test]
fn test_uv_uses_every_point_once() {
    for (w, h) in SIZES {
        let points = grid_points(w, h);
        let mut graph = Graph::new();
        graph.uv(w, h, &points).unwrap();

        for p in &points {
            let hits = graph
                .nodes()
                .iter()
                .filter(|node| std::ptr::eq(node.data(), p))
                .count();
            assert_eq!(hits, 1, "{w}x{h} point {p:?}");
        }
    }
}

#[test]
fn test_uv_interior_nodes_are_closed() {
    for (w, h) in SIZES {
        let points = grid_points(w, h);
        let mut graph = Graph::new();
        graph.uv(w, h, &points).unwrap();

        let mut interior = 0;
        for n in graph.node_ids() {
            let (i, j) = cell(&graph, n);
            let inside = i > 0 && i < w - 1 && j > 0 && j < h - 1;
            assert_eq!(graph.closed(n).unwrap(), inside, "{w}x{h} node ({i}, {j})");
            if !inside {
                assert_eq!(graph.nulls(n).unwrap().len(), 2);
                continue;
            }
            interior += 1;

            let ring = graph.valence(n).unwrap();
            assert_eq!(ring.len(), 6);
            let around: AHashSet<_> = graph
                .neighbors(n)
                .unwrap()
                .into_iter()
                .map(|m| cell(&graph, m))
                .collect();
            let expected: AHashSet<_> = [
                (i - 1, j),
                (i + 1, j),
                (i, j - 1),
                (i, j + 1),
                (i - 1, j + 1),
                (i + 1, j - 1),
            ]
            .into_iter()
            .collect();
            assert_eq!(around, expected, "{w}x{h} node ({i}, {j})");
        }
        assert_eq!(interior, (w - 2) * (h - 2), "{w}x{h}");
    }
}

#[test]
fn test_uv_rejects_bad_input() {
    let points = grid_points(3, 3);

    let mut graph = Graph::new();
    assert!(matches!(
        graph.uv(1, 9, &points),
        Err(GraphError::InvalidParameter { name: "width", .. })
    ));
    assert!(matches!(
        graph.uv(9, 1, &points),
        Err(GraphError::InvalidParameter { name: "height", .. })
    ));
    assert!(matches!(
        graph.uv(3, 4, &points),
        Err(GraphError::InvalidParameter { name: "points", .. })
    ));
    assert!(graph.is_empty());

    let empty: [[f64; 3]; 0] = [];
    assert!(matches!(
        graph.uv(usize::MAX, 3, &empty),
        Err(GraphError::InvalidParameter { name: "width", .. })
    ));
    assert!(matches!(
        graph.uv(3, usize::MAX, &empty),
        Err(GraphError::InvalidParameter { .. })
    ));
    assert!(graph.is_empty());

    graph.uv(3, 3, &points).unwrap();
    assert!(matches!(
        graph.uv(3, 3, &points),
        Err(GraphError::OutOfSequence { operation: "uv", .. })
    ));
}

#[test]
fn test_uv_after_clear() {
    let points = grid_points(4, 3);
    let mut graph = Graph::new();
    graph.uv(4, 3, &points).unwrap();
    graph.clear();
    assert!(graph.is_empty());

    graph.uv(4, 3, &points).unwrap();
    assert_eq!(graph.num_faces(), 12);
    graph.validate_connectivity().unwrap();
}
