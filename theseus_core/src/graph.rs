use fxhash::{FxHashMap, FxHashSet};

/// Cost of traversing a single edge. Signed because heuristic estimates share
/// this type and vulnerability scores are negative; edge weights themselves
/// are expected to be non-negative.
pub type Weight = i64;

/// Adjacency-map graph with weighted directed edges. In undirected mode every
/// stored edge has its mirror (same weight) kept in sync: the initial mapping
/// is mirrored exactly once at construction, and `connect` mirrors
/// incrementally afterwards.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    adjacency: FxHashMap<String, FxHashMap<String, Weight>>,
    directed: bool,
}

impl WeightedGraph {
    pub fn new(directed: bool) -> WeightedGraph {
        WeightedGraph {
            adjacency: FxHashMap::default(),
            directed,
        }
    }

    pub fn from_adjacency(
        adjacency: FxHashMap<String, FxHashMap<String, Weight>>,
        directed: bool,
    ) -> WeightedGraph {
        let mut graph = WeightedGraph {
            adjacency,
            directed,
        };
        if !directed {
            graph.mirror_edges();
        }
        graph
    }

    // Insert the mirror of every edge present in the initial mapping. Runs on
    // a snapshot of the triples so already-mirrored edges are not fed back.
    fn mirror_edges(&mut self) {
        let triples: Vec<(String, String, Weight)> = self
            .adjacency
            .iter()
            .flat_map(|(source, links)| {
                links
                    .iter()
                    .map(|(target, weight)| (source.clone(), target.clone(), *weight))
            })
            .collect();

        for (source, target, weight) in triples {
            self.adjacency.entry(target).or_default().insert(source, weight);
        }
    }

    pub fn directed(&self) -> bool {
        self.directed
    }

    /// Add or overwrite the edge `source -> target`. Missing nodes are created
    /// implicitly; in undirected mode the mirrored edge is written as well.
    pub fn connect(&mut self, source: &str, target: &str, weight: Weight) {
        self.adjacency
            .entry(source.to_string())
            .or_default()
            .insert(target.to_string(), weight);

        if !self.directed {
            self.adjacency
                .entry(target.to_string())
                .or_default()
                .insert(source.to_string(), weight);
        }
    }

    /// Outgoing links of `node`, creating an empty entry when the node is
    /// unknown. The created entry is observable: `nodes()` reports `node`
    /// afterwards even with zero edges.
    pub fn neighbors_of(&mut self, node: &str) -> &FxHashMap<String, Weight> {
        self.adjacency.entry(node.to_string()).or_default()
    }

    /// Read-only edge iteration. Searches use this instead of `neighbors_of`
    /// so a run never mutates the graph it was given.
    pub fn outgoing_edges(&self, node: &str) -> impl Iterator<Item = (&str, Weight)> {
        self.adjacency
            .get(node)
            .into_iter()
            .flatten()
            .map(|(target, weight)| (target.as_str(), *weight))
    }

    pub fn edge_weight(&self, source: &str, target: &str) -> Option<Weight> {
        self.adjacency
            .get(source)
            .and_then(|links| links.get(target))
            .copied()
    }

    /// Every node appearing as a source or as a destination.
    pub fn nodes(&self) -> FxHashSet<&str> {
        let mut nodes = FxHashSet::default();
        for (source, links) in &self.adjacency {
            nodes.insert(source.as_str());
            for target in links.keys() {
                nodes.insert(target.as_str());
            }
        }
        nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes().len()
    }
}
