use std::iter::FusedIterator;

use bit_vec::BitVec;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::graphs::{
    directed::Directed,
    edge::Edge,
    frontier::{Frontier, FrontierKind, HeapFrontier, SortedFrontier},
    visited::Visited,
};

/// Spanning tree construction options.
#[derive(Debug, Clone, Default)]
pub struct PrimConfig {
    /// Candidate pool implementation.
    pub frontier: FrontierKind,
}

impl PrimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frontier(mut self, frontier: FrontierKind) -> Self {
        self.frontier = frontier;
        self
    }
}

/// Prim's minimum spanning tree as an iterator.
///
/// Each call to `next` selects the lightest edge crossing from the visited
/// vertices to an unvisited one, starting from a single vertex.
/// The iterator ends once every vertex that owns a bucket in the adjacency
/// index has been visited, or as soon as the frontier runs dry, in which
/// case only the component of the start vertex is spanned.
///
/// Vertices without outgoing edges are never waited for. They are still
/// absorbed when some selected edge points at them.
pub struct PrimMst<'g, G, F = HeapFrontier, V = BitVec>
where
    G: Directed + ?Sized,
    F: Frontier,
    V: Visited<usize>,
{
    graph: &'g G,
    visited: V,
    /// Bucket owners not yet visited.
    unvisited: FxHashSet<usize>,
    frontier: F,
}

impl<'g, G, F, V> PrimMst<'g, G, F, V>
where
    G: Directed + ?Sized,
    F: Frontier,
    V: Visited<usize>,
{
    /// Starts a spanning tree at `start`.
    ///
    /// An out of range start gives an iterator that yields nothing.
    pub fn new(graph: &'g G, start: usize) -> Self {
        let mut visited = V::default();
        let mut unvisited = FxHashSet::default();
        let mut frontier = F::default();

        if graph.contains_vertex(start) {
            unvisited.extend(graph.sources());

            visited.visit(start);
            unvisited.remove(&start);

            if let Some(bucket) = graph.outgoing(start) {
                frontier.push_batch(bucket);
            }
        } else {
            debug!(
                start,
                vertex_count = graph.vertex_count(),
                "start vertex out of range, spanning tree is empty"
            );
        }

        Self {
            graph,
            visited,
            unvisited,
            frontier,
        }
    }

    #[inline]
    pub fn is_visited(&self, vertex: usize) -> bool {
        self.visited.is_visited(&vertex)
    }

    /// Number of vertices in the tree so far, the start vertex included.
    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited.visited_count()
    }

    /// Number of candidate edges waiting in the frontier.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    #[inline]
    pub fn into_visited(self) -> V {
        self.visited
    }
}

impl<G, F, V> Iterator for PrimMst<'_, G, F, V>
where
    G: Directed + ?Sized,
    F: Frontier,
    V: Visited<usize>,
{
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        if self.unvisited.is_empty() {
            return None;
        }

        // Edges leading back into the tree are stale, drop them.
        while let Some(edge) = self.frontier.pop_min() {
            let to = edge.to();
            if !self.visited.visit(to) {
                continue;
            }

            self.unvisited.remove(&to);
            if let Some(bucket) = self.graph.outgoing(to) {
                self.frontier.push_batch(bucket);
            }

            trace!(%edge, frontier = self.frontier.len(), "selected spanning tree edge");
            return Some(edge);
        }

        debug!(
            visited = self.visited.visited_count(),
            unreached = self.unvisited.len(),
            "frontier exhausted, start vertex component spanned"
        );
        self.unvisited.clear();
        None
    }
}

impl<G, F, V> FusedIterator for PrimMst<'_, G, F, V>
where
    G: Directed + ?Sized,
    F: Frontier,
    V: Visited<usize>,
{
}

/// Minimum spanning tree of the component of `start`, in selection order.
///
/// Returns an empty list when `start` is out of range.
/// On a disconnected graph only the component of `start` is spanned.
pub fn prim_mst<G>(graph: &G, start: usize) -> Vec<Edge>
where
    G: Directed + ?Sized,
{
    PrimMst::<G, HeapFrontier, BitVec>::new(graph, start).collect()
}

/// Same as [`prim_mst`] with an explicit frontier choice.
pub fn prim_mst_with_config<G>(graph: &G, start: usize, config: &PrimConfig) -> Vec<Edge>
where
    G: Directed + ?Sized,
{
    match config.frontier {
        FrontierKind::Heap => PrimMst::<G, HeapFrontier, BitVec>::new(graph, start).collect(),
        FrontierKind::Sorted => PrimMst::<G, SortedFrontier, BitVec>::new(graph, start).collect(),
    }
}

/// Sum of the weights of a list of edges.
pub fn total_weight(edges: &[Edge]) -> f64 {
    edges.iter().map(Edge::weight).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::graphs::{
        edges::ReadEdges,
        matrix::NO_EDGE,
        random::{generate_random, Pairing, RandomGraph},
        vertices::Vertices,
        weighted::WeightedGraph,
    };

    const X: f64 = NO_EDGE;

    fn graph(matrix: &[Vec<f64>]) -> WeightedGraph {
        WeightedGraph::from_matrix(matrix).unwrap()
    }

    /// Vertices reachable from `start` by following stored edges.
    fn reachable(g: &WeightedGraph, start: usize) -> Vec<bool> {
        let mut seen = vec![false; g.vertex_count()];
        let mut stack = vec![start];
        seen[start] = true;
        while let Some(u) = stack.pop() {
            for edge in g.outgoing(u).unwrap_or(&[]) {
                if !seen[edge.to()] {
                    seen[edge.to()] = true;
                    stack.push(edge.to());
                }
            }
        }
        seen
    }

    /// Kruskal forest weight over the edges inside `component`.
    fn kruskal_weight(g: &WeightedGraph, component: &[bool]) -> f64 {
        fn find(parent: &mut [usize], x: usize) -> usize {
            if parent[x] != x {
                parent[x] = find(parent, parent[x]);
            }
            parent[x]
        }

        let mut edges: Vec<Edge> = g
            .edges()
            .iter()
            .copied()
            .filter(|e| component[e.from()] && component[e.to()])
            .collect();
        edges.sort_by(Edge::cmp_weight);

        let mut parent: Vec<usize> = (0..g.vertex_count()).collect();
        let mut total = 0.0;
        for edge in edges {
            let (a, b) = (find(&mut parent, edge.from()), find(&mut parent, edge.to()));
            if a != b {
                parent[a] = b;
                total += edge.weight();
            }
        }
        total
    }

    #[test]
    fn two_vertices_single_edge() {
        let g = graph(&[vec![X, 5.0], vec![5.0, X]]);
        assert_eq!(prim_mst(&g, 0), vec![Edge::new(0, 1, 5.0)]);
        assert_eq!(prim_mst(&g, 1), vec![Edge::new(1, 0, 5.0)]);
    }

    #[test]
    fn triangle_prefers_two_light_edges() {
        let g = graph(&[
            vec![X, 2.0, 5.0],
            vec![2.0, X, 1.0],
            vec![5.0, 1.0, X],
        ]);

        let tree = prim_mst(&g, 0);
        assert_eq!(tree, vec![Edge::new(0, 1, 2.0), Edge::new(1, 2, 1.0)]);
        assert_eq!(total_weight(&tree), 3.0);
    }

    #[test]
    fn disconnected_vertex_is_left_out() {
        let g = graph(&[vec![X, 4.0, X], vec![4.0, X, X], vec![X, X, X]]);

        let mut mst: PrimMst<WeightedGraph> = PrimMst::new(&g, 0);
        assert_eq!(mst.next(), Some(Edge::new(0, 1, 4.0)));
        assert_eq!(mst.next(), None);
        assert!(!mst.is_visited(2));
        assert_eq!(mst.visited_count(), 2);
    }

    #[test]
    fn two_components_stop_when_frontier_runs_dry() {
        // 0 - 1 and 2 - 3, both with edges, so the unvisited set never empties.
        let g = graph(&[
            vec![X, 1.0, X, X],
            vec![1.0, X, X, X],
            vec![X, X, X, 2.0],
            vec![X, X, 2.0, X],
        ]);

        assert_eq!(prim_mst(&g, 0), vec![Edge::new(0, 1, 1.0)]);
        assert_eq!(prim_mst(&g, 3), vec![Edge::new(3, 2, 2.0)]);
    }

    #[test]
    fn out_of_range_start_is_empty() {
        let g = graph(&vec![vec![1.0; 5]; 5]);
        assert!(prim_mst(&g, 99).is_empty());
        assert!(prim_mst(&g, 5).is_empty());

        let mst: PrimMst<WeightedGraph> = PrimMst::new(&g, 99);
        assert_eq!(mst.visited_count(), 0);
    }

    #[test]
    fn empty_and_single_vertex_graphs() {
        let empty = WeightedGraph::default();
        assert!(prim_mst(&empty, 0).is_empty());

        let single = graph(&[vec![X]]);
        assert!(prim_mst(&single, 0).is_empty());

        let single_loop = graph(&[vec![7.0]]);
        assert!(prim_mst(&single_loop, 0).is_empty());
    }

    #[test]
    fn self_loops_are_never_selected() {
        let g = graph(&[vec![0.0, 3.0], vec![3.0, 0.0]]);

        let tree = prim_mst(&g, 0);
        assert_eq!(tree, vec![Edge::new(0, 1, 3.0)]);
    }

    #[test]
    fn vertices_without_bucket_are_not_waited_for() {
        // Vertex 0 only has an incoming edge.
        let g = graph(&[vec![X, X], vec![1.0, X]]);

        // Nothing leaves 0, and 1 is the only bucket owner.
        assert!(prim_mst(&g, 0).is_empty());
        // From 1 every bucket owner is already visited.
        assert!(prim_mst(&g, 1).is_empty());
    }

    #[test]
    fn vertex_without_bucket_is_absorbed_when_reached() {
        // Vertex 2 has no outgoing edges but 1 points to it.
        let g = graph(&[vec![X, 1.0, X], vec![1.0, X, 0.5], vec![X, X, X]]);

        let mut mst: PrimMst<WeightedGraph> = PrimMst::new(&g, 0);
        assert_eq!(mst.next(), Some(Edge::new(0, 1, 1.0)));
        // Only bucket owners are waited for, so the tree ends before reaching 2.
        assert_eq!(mst.next(), None);
        assert!(!mst.is_visited(2));

        // Starting from 1 the edge to 2 is lighter and gets picked on the way.
        assert_eq!(
            prim_mst(&g, 1),
            vec![Edge::new(1, 2, 0.5), Edge::new(1, 0, 1.0)]
        );
    }

    #[test]
    fn equal_weights_follow_discovery_order() {
        let g = graph(&[
            vec![X, 1.0, 1.0, X],
            vec![1.0, X, X, 1.0],
            vec![1.0, X, X, 1.0],
            vec![X, 1.0, 1.0, X],
        ]);

        assert_eq!(
            prim_mst(&g, 0),
            vec![
                Edge::new(0, 1, 1.0),
                Edge::new(0, 2, 1.0),
                Edge::new(1, 3, 1.0),
            ]
        );
    }

    #[test]
    fn iterator_is_fused_after_exhaustion() {
        let g = graph(&[vec![X, 1.0, X], vec![1.0, X, X], vec![X, X, X]]);
        let mut mst: PrimMst<WeightedGraph> = PrimMst::new(&g, 2);

        assert_eq!(mst.next(), None);
        assert_eq!(mst.next(), None);
        assert_eq!(mst.frontier_len(), 0);
    }

    #[test]
    fn config_selects_frontier() {
        let g = graph(&[
            vec![X, 2.0, 5.0],
            vec![2.0, X, 1.0],
            vec![5.0, 1.0, X],
        ]);

        let heap = prim_mst_with_config(&g, 0, &PrimConfig::new());
        let sorted =
            prim_mst_with_config(&g, 0, &PrimConfig::new().with_frontier(FrontierKind::Sorted));
        assert_eq!(heap, sorted);
        assert_eq!(heap, prim_mst(&g, 0));
    }

    // Symmetric matrices with small integer weights, so ties are common.
    prop_compose! {
        fn symmetric_matrix()
            (size in 0usize..=9)
            (cells in prop::collection::vec(prop::option::of(0u8..=6), size * size), size in Just(size))
            -> Vec<Vec<f64>>
        {
            let mut matrix = vec![vec![X; size]; size];
            for row in 0..size {
                for col in row + 1..size {
                    if let Some(weight) = cells[row * size + col] {
                        matrix[row][col] = f64::from(weight);
                        matrix[col][row] = f64::from(weight);
                    }
                }
            }
            matrix
        }
    }

    proptest! {
        #[test]
        fn prop_tree_is_small_and_has_no_duplicate_pairs(matrix in symmetric_matrix(), start in 0usize..10) {
            let g = graph(&matrix);
            let tree = prim_mst(&g, start);

            prop_assert!(tree.len() <= g.vertex_count().saturating_sub(1));

            let mut pairs = FxHashSet::default();
            for edge in &tree {
                prop_assert!(pairs.insert(edge.unordered_pair()), "duplicate pair {:?}", edge);
            }
        }

        // Each step moves exactly one new vertex into the tree.
        #[test]
        fn prop_each_step_visits_one_new_vertex(matrix in symmetric_matrix(), start in 0usize..9) {
            let g = graph(&matrix);
            prop_assume!(start < g.vertex_count());

            let mut mst: PrimMst<WeightedGraph> = PrimMst::new(&g, start);
            prop_assert_eq!(mst.visited_count(), 1);

            let mut steps = 0;
            loop {
                let before = mst.visited_count();
                let Some(edge) = mst.next() else { break };
                steps += 1;

                prop_assert!(mst.is_visited(edge.from()));
                prop_assert!(mst.is_visited(edge.to()));
                prop_assert_eq!(mst.visited_count(), before + 1);
            }
            prop_assert_eq!(mst.visited_count(), steps + 1);
        }

        #[test]
        fn prop_repeated_runs_are_identical(matrix in symmetric_matrix(), start in 0usize..9) {
            let g = graph(&matrix);
            prop_assert_eq!(prim_mst(&g, start), prim_mst(&g, start));
        }

        #[test]
        fn prop_heap_and_sorted_frontiers_agree(matrix in symmetric_matrix(), start in 0usize..9) {
            let g = graph(&matrix);
            let heap: Vec<Edge> = PrimMst::<_, HeapFrontier, BitVec>::new(&g, start).collect();
            let sorted: Vec<Edge> = PrimMst::<_, SortedFrontier, BitVec>::new(&g, start).collect();
            prop_assert_eq!(heap, sorted);
        }

        #[test]
        fn prop_bitvec_and_hash_set_visited_agree(matrix in symmetric_matrix(), start in 0usize..9) {
            let g = graph(&matrix);
            let bits: Vec<Edge> = PrimMst::<_, HeapFrontier, BitVec>::new(&g, start).collect();
            let hashed: Vec<Edge> =
                PrimMst::<_, HeapFrontier, FxHashSet<usize>>::new(&g, start).collect();
            prop_assert_eq!(bits, hashed);
        }

        // On symmetric input the tree spans the start component at minimum weight.
        #[test]
        fn prop_weight_matches_kruskal_on_start_component(matrix in symmetric_matrix(), start in 0usize..9) {
            let g = graph(&matrix);
            prop_assume!(start < g.vertex_count());

            let component = reachable(&g, start);
            let tree = prim_mst(&g, start);

            prop_assert_eq!(tree.len(), component.iter().filter(|&&inside| inside).count() - 1);
            prop_assert_eq!(total_weight(&tree), kruskal_weight(&g, &component));
        }
    }

    #[test]
    fn random_stress_matches_kruskal_on_connected_graphs() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x_5052_494D_5354_5245);
        let generator = RandomGraph::new()
            .with_edge_probability(0.6)
            .with_pairing(Pairing::AllPairs);

        for size in 1..=24 {
            let matrix = generator.generate(size, &mut rng).unwrap();
            let g = graph(&matrix);
            let component = reachable(&g, 0);

            let tree = prim_mst(&g, 0);
            let expected = kruskal_weight(&g, &component);
            assert!(
                (total_weight(&tree) - expected).abs() < 1e-9,
                "size {size}: prim {} vs kruskal {expected}",
                total_weight(&tree)
            );
        }
    }

    #[test]
    fn reference_generator_graphs_never_need_the_last_vertex() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for size in 2..=12 {
            let g = graph(&generate_random(size, &mut rng));
            for start in 0..size {
                let tree = prim_mst(&g, start);
                assert!(tree.iter().all(|edge| edge.to() != size - 1));
            }
        }
    }
}
