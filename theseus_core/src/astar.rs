use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fxhash::{FxBuildHasher, FxHashMap};
use tracing::debug;

use crate::error::SearchError;
use crate::graph::{Weight, WeightedGraph};
use crate::heuristic::Heuristic;
use crate::path::{PathStep, TraversalPath};
use crate::stopwatch::Stopwatch;

/// https://en.wikipedia.org/wiki/A*_search_algorithm

#[derive(Eq, Copy, Clone, Debug)]
struct HeapItem<'g> {
    node: &'g str,

    /// g_score is the cheapest known weight from start to `node` at push time
    g_score: Weight,

    /// f_score = g_score + h_score, with h_score being the heuristic value
    /// from `node` to the goal
    f_score: Weight,

    /// Push order. Equal f_scores pop first-inserted-first, which keeps tie
    /// handling reproducible across runs.
    seq: u64,
}

impl PartialEq for HeapItem<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.f_score == other.f_score && self.seq == other.seq
    }
}

impl PartialOrd for HeapItem<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip weight to make this a min-heap
        other
            .f_score
            .cmp(&self.f_score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

struct NodeData<'g> {
    settled: bool,
    weight: Weight,
    parent: Option<&'g str>,
}

impl NodeData<'_> {
    fn new() -> Self {
        NodeData {
            settled: false,
            weight: Weight::MAX,
            parent: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// By default a settled node is never revisited, even when a cheaper path
    /// to it turns up later, mirroring the behavior this engine replaced. On
    /// graphs where a longer detour reaches a settled node more cheaply that
    /// forecloses the optimum. Setting this runs textbook A*: a settled node
    /// found via a cheaper path is unsettled and re-queued.
    pub reopen_closed: bool,

    /// Abort with [`SearchError::IterationLimit`] after settling this many
    /// nodes. `None` runs until the open set is exhausted.
    pub iteration_limit: Option<usize>,
}

pub struct AStar<H: Heuristic> {
    heuristic: H,
    options: SearchOptions,
}

impl<H: Heuristic> AStar<H> {
    pub fn with_heuristic(heuristic: H) -> AStar<H> {
        Self::with_options(heuristic, SearchOptions::default())
    }

    pub fn with_options(heuristic: H, options: SearchOptions) -> AStar<H> {
        AStar { heuristic, options }
    }

    /// Least-cost traversal from `start` to `goal`. `Ok(None)` means the open
    /// set was exhausted without reaching the goal, including when `start` or
    /// `goal` is not a node of the graph.
    pub fn calc_path<'a>(
        &'a self,
        graph: &'a WeightedGraph,
        start: &'a str,
        goal: &'a str,
    ) -> Result<Option<TraversalPath>, SearchError> {
        Search::new(graph, &self.heuristic, self.options).run(start, goal)
    }
}

/// Convenience entry point running with default [`SearchOptions`].
pub fn find_path(
    graph: &WeightedGraph,
    heuristic: &impl Heuristic,
    start: &str,
    goal: &str,
) -> Result<Option<TraversalPath>, SearchError> {
    Search::new(graph, heuristic, SearchOptions::default()).run(start, goal)
}

/// Working state of a single run. Allocated per call so concurrent searches
/// over a shared graph stay independent.
struct Search<'g, H: Heuristic> {
    graph: &'g WeightedGraph,
    heuristic: &'g H,
    options: SearchOptions,
    heap: BinaryHeap<HeapItem<'g>>,
    data: FxHashMap<&'g str, NodeData<'g>>,
    next_seq: u64,
}

impl<'g, H: Heuristic> Search<'g, H> {
    fn new(graph: &'g WeightedGraph, heuristic: &'g H, options: SearchOptions) -> Search<'g, H> {
        Search {
            graph,
            heuristic,
            options,
            heap: BinaryHeap::with_capacity(64),
            data: FxHashMap::with_capacity_and_hasher(64, FxBuildHasher::default()),
            next_seq: 0,
        }
    }

    fn push(&mut self, node: &'g str, g_score: Weight, f_score: Weight) {
        self.heap.push(HeapItem {
            node,
            g_score,
            f_score,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    fn run(
        mut self,
        start: &'g str,
        goal: &'g str,
    ) -> Result<Option<TraversalPath>, SearchError> {
        let stopwatch = Stopwatch::new("astar/run");

        let h_start = self.heuristic.estimate(start)?;
        self.push(start, 0, h_start);
        self.data.insert(
            start,
            NodeData {
                settled: false,
                weight: 0,
                parent: None,
            },
        );

        let mut settled_count: usize = 0;

        while let Some(HeapItem { node, g_score, .. }) = self.heap.pop() {
            {
                let data = self.data.entry(node).or_insert_with(NodeData::new);

                // Stale heap entry: the node was settled through a duplicate,
                // or a cheaper duplicate is still queued.
                if data.settled || g_score > data.weight {
                    continue;
                }

                data.settled = true;
            }

            settled_count += 1;
            if let Some(limit) = self.options.iteration_limit {
                if settled_count > limit {
                    return Err(SearchError::IterationLimit(limit));
                }
            }

            if node == goal {
                let path = self.build_path(goal);
                debug!(
                    settled = settled_count,
                    queued = self.next_seq,
                    "reached goal"
                );
                stopwatch.report();
                return Ok(Some(path));
            }

            let graph = self.graph;
            for (adj_node, edge_weight) in graph.outgoing_edges(node) {
                let next_weight = g_score + edge_weight;

                {
                    let adj_data = self.data.entry(adj_node).or_insert_with(NodeData::new);

                    if adj_data.settled && !self.options.reopen_closed {
                        continue;
                    }

                    // An equal-or-better entry already known for this node
                    // wins; stale heap duplicates are skipped when popped.
                    if next_weight >= adj_data.weight {
                        continue;
                    }

                    adj_data.settled = false;
                    adj_data.weight = next_weight;
                    adj_data.parent = Some(node);
                }

                let h_score = self.heuristic.estimate(adj_node)?;
                self.push(adj_node, next_weight, next_weight + h_score);
            }
        }

        debug!(settled = settled_count, "open set exhausted, no path");
        stopwatch.report();

        Ok(None)
    }

    fn build_path(&self, goal: &'g str) -> TraversalPath {
        let mut steps: Vec<PathStep> = Vec::with_capacity(8);

        let mut node = goal;
        loop {
            let data = &self.data[node];
            steps.push(PathStep::new(node.to_string(), data.weight));
            match data.parent {
                Some(parent) => node = parent,
                None => break,
            }
        }

        steps.reverse();

        TraversalPath::new(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::{MapHeuristic, ZeroHeuristic};
    use crate::test_topology_utils::test_topology;

    // Exhaustive enumeration of simple paths, used as the optimality oracle
    // on small graphs.
    fn brute_force_cost(
        graph: &WeightedGraph,
        current: &str,
        goal: &str,
        visited: &mut Vec<String>,
        cost: Weight,
    ) -> Option<Weight> {
        if current == goal {
            return Some(cost);
        }

        let mut best: Option<Weight> = None;
        for (adj, weight) in graph.outgoing_edges(current) {
            if visited.iter().any(|v| v == adj) {
                continue;
            }
            visited.push(adj.to_string());
            if let Some(found) = brute_force_cost(graph, adj, goal, visited, cost + weight) {
                best = Some(best.map_or(found, |b: Weight| b.min(found)));
            }
            visited.pop();
        }

        best
    }

    fn shortest_cost(graph: &WeightedGraph, start: &str, goal: &str) -> Option<Weight> {
        let mut visited = vec![start.to_string()];
        brute_force_cost(graph, start, goal, &mut visited, 0)
    }

    #[test]
    fn test_cheap_detour_beats_direct_edge() {
        let mut graph = WeightedGraph::new(true);
        graph.connect("a", "b", 2);
        graph.connect("b", "c", 2);
        graph.connect("a", "c", 10);

        let path = find_path(&graph, &ZeroHeuristic, "a", "c").unwrap().unwrap();

        let steps: Vec<(&str, Weight)> = path
            .steps()
            .iter()
            .map(|step| (step.node(), step.cost()))
            .collect();
        assert_eq!(steps, vec![("a", 0), ("b", 2), ("c", 4)]);
    }

    #[test]
    fn test_start_equals_goal() {
        let mut graph = WeightedGraph::new(true);
        graph.connect("a", "b", 1);

        let path = find_path(&graph, &ZeroHeuristic, "a", "a").unwrap().unwrap();

        assert_eq!(path.steps().len(), 1);
        assert_eq!(path.start().unwrap().node(), "a");
        assert_eq!(path.total_cost(), 0);
    }

    #[test]
    fn test_unreachable_goal_is_no_path() {
        let mut graph = WeightedGraph::new(true);
        graph.connect("a", "b", 1);
        // "island" only appears as a source, nothing leads to it
        graph.connect("island", "b", 1);

        let result = find_path(&graph, &ZeroHeuristic, "a", "island").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_unknown_start_and_goal_are_no_path() {
        let mut graph = WeightedGraph::new(true);
        graph.connect("a", "b", 1);

        assert!(find_path(&graph, &ZeroHeuristic, "ghost", "b").unwrap().is_none());
        assert!(find_path(&graph, &ZeroHeuristic, "a", "ghost").unwrap().is_none());
    }

    #[test]
    fn test_reference_network_traversal() {
        let graph = test_topology::reference_graph();
        let heuristic = test_topology::reference_heuristic();

        let path = find_path(&graph, &heuristic, "ClientA", "ClientI")
            .unwrap()
            .unwrap();

        let steps: Vec<(&str, Weight)> = path
            .steps()
            .iter()
            .map(|step| (step.node(), step.cost()))
            .collect();
        assert_eq!(
            steps,
            vec![
                ("ClientA", 0),
                ("ClientB", 1),
                ("ClientK", 2),
                ("SwitchB", 4),
                ("ClientI", 8),
            ]
        );
    }

    #[test]
    fn test_costs_are_non_decreasing() {
        let graph = test_topology::reference_graph();
        let heuristic = test_topology::reference_heuristic();

        let path = find_path(&graph, &heuristic, "ClientF", "ClientA")
            .unwrap()
            .unwrap();

        assert_eq!(path.start().unwrap().cost(), 0);
        for pair in path.steps().windows(2) {
            assert!(pair[0].cost() <= pair[1].cost());
        }
    }

    #[test]
    fn test_matches_brute_force_on_reference_network() {
        let graph = test_topology::reference_graph();

        for (start, goal) in [
            ("ClientA", "ClientI"),
            ("ClientC", "ClientD"),
            ("ClientF", "ClientA"),
            ("SwitchA", "ClientK"),
            ("ClientE", "ClientG"),
        ] {
            let expected = shortest_cost(&graph, start, goal);
            let found = find_path(&graph, &ZeroHeuristic, start, goal)
                .unwrap()
                .map(|path| path.total_cost());
            assert_eq!(found, expected, "{start} -> {goal}");
        }
    }

    #[test]
    fn test_equal_cost_paths_are_reported_consistently() {
        let mut graph = WeightedGraph::new(true);
        graph.connect("a", "b", 2);
        graph.connect("a", "c", 2);
        graph.connect("b", "d", 2);
        graph.connect("c", "d", 2);

        let first = find_path(&graph, &ZeroHeuristic, "a", "d").unwrap().unwrap();
        let second = find_path(&graph, &ZeroHeuristic, "a", "d").unwrap().unwrap();

        assert_eq!(first.total_cost(), 4);
        // First-inserted-wins tie handling makes repeated runs identical.
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_heuristic_entry_fails_loudly() {
        let mut graph = WeightedGraph::new(true);
        graph.connect("a", "b", 1);

        let mut heuristic = MapHeuristic::new(Default::default());
        heuristic.insert("a", 0);
        // no entry for "b"

        let err = find_path(&graph, &heuristic, "a", "b").unwrap_err();
        assert!(matches!(err, SearchError::MissingHeuristic(node) if node == "b"));
    }

    #[test]
    fn test_iteration_limit_aborts_search() {
        let mut graph = WeightedGraph::new(true);
        graph.connect("a", "b", 1);
        graph.connect("b", "c", 1);

        let astar = AStar::with_options(
            ZeroHeuristic,
            SearchOptions {
                iteration_limit: Some(1),
                ..Default::default()
            },
        );

        let err = astar.calc_path(&graph, "a", "c").unwrap_err();
        assert!(matches!(err, SearchError::IterationLimit(1)));
    }

    #[test]
    fn test_generous_iteration_limit_still_finds_path() {
        let mut graph = WeightedGraph::new(true);
        graph.connect("a", "b", 1);
        graph.connect("b", "c", 1);

        let astar = AStar::with_options(
            ZeroHeuristic,
            SearchOptions {
                iteration_limit: Some(100),
                ..Default::default()
            },
        );

        let path = astar.calc_path(&graph, "a", "c").unwrap().unwrap();
        assert_eq!(path.total_cost(), 2);
    }

    // An inconsistent heuristic that settles "a" before the cheaper route to
    // it via "b" is discovered. The default mode keeps the foreclosed cost,
    // reopen_closed recovers the optimum.
    fn foreclosure_fixture() -> (WeightedGraph, MapHeuristic) {
        let mut graph = WeightedGraph::new(true);
        graph.connect("s", "a", 3);
        graph.connect("s", "b", 1);
        graph.connect("b", "a", 1);
        graph.connect("a", "g", 1);

        let mut heuristic = MapHeuristic::new(Default::default());
        heuristic.insert("s", 0);
        heuristic.insert("a", 0);
        heuristic.insert("b", 4);
        heuristic.insert("g", 3);

        (graph, heuristic)
    }

    #[test]
    fn test_closed_nodes_are_not_reopened_by_default() {
        let (graph, heuristic) = foreclosure_fixture();

        let path = find_path(&graph, &heuristic, "s", "g").unwrap().unwrap();
        assert_eq!(path.total_cost(), 4);
    }

    #[test]
    fn test_reopen_closed_recovers_the_optimum() {
        let (graph, heuristic) = foreclosure_fixture();

        let astar = AStar::with_options(
            heuristic,
            SearchOptions {
                reopen_closed: true,
                ..Default::default()
            },
        );

        let path = astar.calc_path(&graph, "s", "g").unwrap().unwrap();
        assert_eq!(path.total_cost(), 3);

        let steps: Vec<&str> = path.steps().iter().map(|step| step.node()).collect();
        assert_eq!(steps, vec!["s", "b", "a", "g"]);
    }
}
