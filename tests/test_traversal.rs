// tests/test_traversal.rs
use ahash::AHashSet;
use hegraph::{Graph, NodeId};

fn value(graph: &Graph<u32>, n: NodeId) -> u32 {
    *graph[n].data()
}

fn node_with_value(graph: &Graph<u32>, v: u32) -> NodeId {
    graph
        .node_ids()
        .find(|&n| value(graph, n) == v)
        .expect("value is registered")
}

fn neighbor_values(graph: &Graph<u32>, n: NodeId) -> Vec<u32> {
    graph
        .neighbors(n)
        .unwrap()
        .into_iter()
        .map(|m| value(graph, m))
        .collect()
}

/// Fan grown with `add`; with five values the faces are (0,1,2), (0,2,3)
/// and (2,3,4).
fn make_fan(values: &[u32]) -> Graph<'_, u32> {
    let mut graph = Graph::new();
    for v in values {
        graph.add(v).unwrap();
    }
    graph
}

/// Closed triangular bipyramid: the five-node fan sealed with two ears and
/// a final three-edge hole.
fn make_bipyramid(values: &[u32]) -> Graph<'_, u32> {
    let mut graph = make_fan(values);
    let ring = graph.null_edge_loop().unwrap();
    graph.close_edges(ring[1], ring[2]).unwrap();
    let ring = graph.null_edge_loop().unwrap();
    graph.close_edges(ring[0], ring[1]).unwrap();
    let ring = graph.null_edge_loop().unwrap();
    assert_eq!(ring.len(), 3);
    graph.close(ring[0]).unwrap();
    graph
}

/// 3x3 grid; node value `k` is column `k / 3`, row `k % 3`.
fn make_grid(values: &[u32]) -> Graph<'_, u32> {
    let mut graph = Graph::new();
    graph.uv(3, 3, values).unwrap();
    graph
}

#[test]
fn test_interior_node_valence_is_cyclic() {
    let values: Vec<u32> = (0..9).collect();
    let graph = make_grid(&values);
    let center = node_with_value(&graph, 4);

    assert!(graph.closed(center).unwrap());
    let ring = graph.valence(center).unwrap();
    assert_eq!(ring.len(), 6);

    // every spoke leaves the center and the ring wraps around
    for (i, &e) in ring.iter().enumerate() {
        assert_eq!(graph.endpoints(e).unwrap().0, center);
        let prev = graph.prev(e).unwrap();
        let next_spoke = graph[prev].opp().expect("interior spoke is sealed");
        assert_eq!(next_spoke, ring[(i + 1) % ring.len()]);
    }

    let mut around = neighbor_values(&graph, center);
    around.sort();
    assert_eq!(around, vec![1, 2, 3, 5, 6, 7]);
    assert!(graph.nulls(center).unwrap().is_empty());
}

#[test]
fn test_boundary_node_valence_terminates_at_both_ends() {
    let values: Vec<u32> = (0..9).collect();
    let graph = make_grid(&values);
    let side = node_with_value(&graph, 3);

    assert!(!graph.closed(side).unwrap());
    let ring = graph.valence(side).unwrap();
    assert_eq!(ring.len(), 3);

    let first = ring[0];
    assert!(graph.is_border(first).unwrap());
    let last_prev = graph.prev(*ring.last().unwrap()).unwrap();
    assert!(graph.is_border(last_prev).unwrap());

    let around = neighbor_values(&graph, side);
    assert_eq!(around.len(), ring.len() + 1);
    assert_eq!(around, vec![6, 4, 1, 0]);
}

#[test]
fn test_corner_nodes() {
    let values: Vec<u32> = (0..9).collect();
    let graph = make_grid(&values);

    let corner = node_with_value(&graph, 0);
    assert_eq!(graph.valence(corner).unwrap().len(), 1);
    assert_eq!(neighbor_values(&graph, corner), vec![3, 1]);

    let corner = node_with_value(&graph, 8);
    assert_eq!(graph.valence(corner).unwrap().len(), 1);
    assert_eq!(neighbor_values(&graph, corner), vec![5, 7]);
}

#[test]
fn test_nulls_are_the_two_extreme_border_edges() {
    let values = [0u32, 1, 2, 3, 4];
    let graph = make_fan(&values);
    let apex = node_with_value(&graph, 2);

    let nulls = graph.nulls(apex).unwrap();
    assert_eq!(nulls.len(), 2);

    let (tail, head) = graph.endpoints(nulls[0]).unwrap();
    assert_eq!((tail, value(&graph, head)), (apex, 4));
    let (tail, head) = graph.endpoints(nulls[1]).unwrap();
    assert_eq!((value(&graph, tail), head), (1, apex));

    for &e in &nulls {
        assert!(graph.is_border(e).unwrap());
    }
    assert_eq!(graph.null(apex).unwrap(), nulls[0]);
    assert_eq!(neighbor_values(&graph, apex), vec![4, 3, 0, 1]);
}

#[test]
fn test_node_faces_follow_valence() {
    let values = [0u32, 1, 2, 3, 4];
    let graph = make_fan(&values);
    let apex = node_with_value(&graph, 2);

    let ring = graph.valence(apex).unwrap();
    let faces = graph.node_faces(apex).unwrap();
    assert_eq!(faces.len(), 3);
    for (e, f) in ring.iter().zip(&faces) {
        assert_eq!(graph[*e].face(), *f);
        assert!(graph.face_nodes(*f).unwrap().contains(&apex));
    }
}

#[test]
fn test_isolated_node_has_empty_fan() {
    let values = [0u32];
    let mut graph = Graph::new();
    let n = graph.add_node(&values[0]);

    assert!(graph.valence(n).unwrap().is_empty());
    assert!(graph.neighbors(n).unwrap().is_empty());
    assert!(!graph.closed(n).unwrap());
    assert!(graph.nulls(n).unwrap().is_empty());
}

#[test]
fn test_closed_surface_nodes() {
    let values = [0u32, 1, 2, 3, 4];
    let graph = make_bipyramid(&values);

    assert_eq!(graph.num_faces(), 6);
    let mut degrees = Vec::new();
    for n in graph.node_ids() {
        assert!(graph.closed(n).unwrap());
        assert!(graph.nulls(n).unwrap().is_empty());
        let ring = graph.valence(n).unwrap();
        assert_eq!(graph.neighbors(n).unwrap().len(), ring.len());
        degrees.push(ring.len());
    }
    degrees.sort();
    assert_eq!(degrees, vec![3, 3, 4, 4, 4]);
    // one emanating half-edge per unit of degree
    assert_eq!(degrees.iter().sum::<usize>(), graph.num_half_edges());
}

#[test]
fn test_edge_neighbors() {
    let values = [0u32, 1, 2, 3, 4];
    let graph = make_fan(&values);

    let first = graph.face(0).unwrap();
    let middle = graph.face(1).unwrap();
    let last = graph.face(2).unwrap();
    assert_eq!(graph.edge_neighbors(first).unwrap().as_slice(), &[middle]);
    assert_eq!(graph.edge_neighbors(last).unwrap().as_slice(), &[middle]);

    let around: AHashSet<_> = graph.edge_neighbors(middle).unwrap().into_iter().collect();
    let expected: AHashSet<_> = [first, last].into_iter().collect();
    assert_eq!(around, expected);

    let closed = make_bipyramid(&values);
    for f in closed.face_ids() {
        assert_eq!(closed.edge_neighbors(f).unwrap().len(), 3);
    }
}

#[test]
fn test_face_accessors_share_rotation() {
    let values = [0u32, 1, 2, 3];
    let graph = make_fan(&values);

    for f in graph.face_ids() {
        let edges = graph.face_edges(f).unwrap();
        let nodes = graph.face_nodes(f).unwrap();
        let data = graph.face_data(f).unwrap();
        assert_eq!(edges[0], graph[f].edge());
        for i in 0..3 {
            assert_eq!(graph[edges[i]].node(), nodes[i]);
            assert_eq!(*data[i], value(&graph, nodes[i]));
            assert_eq!(graph[edges[i]].next(), edges[(i + 1) % 3]);
        }
    }
}

#[test]
fn test_half_edge_endpoint_predicates() {
    let values = [0u32, 1, 2];
    let mut graph = Graph::new();
    for v in &values {
        graph.add(v).unwrap();
    }
    let ea = graph.edge(0).unwrap(); // 0 -> 1
    let eb = graph.edge(1).unwrap(); // 1 -> 2

    assert_eq!(*graph.a(ea).unwrap(), 1);
    assert_eq!(*graph.b(ea).unwrap(), 0);
    assert_eq!(graph.prev(eb).unwrap(), ea);

    assert!(graph.ccw_from(ea, eb).unwrap());
    assert!(!graph.ccw_from(eb, ea).unwrap());
    assert!(graph.cw_from(eb, ea).unwrap());
    assert!(!graph.cw_from(ea, eb).unwrap());
    assert!(!graph.is_opp(ea, eb).unwrap());
}

#[test]
fn test_is_opp_after_sealing() {
    let values = [0u32, 1, 2, 3];
    let graph = make_fan(&values);

    for e in graph.edge_ids() {
        if let Some(o) = graph[e].opp() {
            assert!(graph.is_opp(e, o).unwrap());
            assert!(graph.ccw_from(e, o).unwrap());
            assert!(graph.cw_from(e, o).unwrap());
        }
    }
}

#[test]
fn test_visitation_flags_reset() {
    let values = [0u32, 1, 2, 3];
    let mut graph = make_fan(&values);
    let n = graph.node(1).unwrap();
    let e = graph.edge(-1).unwrap();

    graph.set_node_visited(n, true).unwrap();
    graph.set_edge_visited(e, true).unwrap();
    assert!(graph[n].visited());
    assert!(graph[e].visited());

    graph.reset();

    assert!(graph.nodes().iter().all(|node| !node.visited()));
    assert!(graph.half_edges().iter().all(|he| !he.visited()));
    assert_eq!(graph.num_faces(), 2);
}
