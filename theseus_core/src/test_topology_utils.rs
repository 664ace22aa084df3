pub mod test_topology {
    use crate::graph::WeightedGraph;
    use crate::heuristic::MapHeuristic;
    use crate::topology::TopologyConfig;

    pub fn reference_graph() -> WeightedGraph {
        TopologyConfig::reference_network()
            .build_graph()
            .expect("reference network must build")
    }

    pub fn reference_heuristic() -> MapHeuristic {
        TopologyConfig::reference_network().build_heuristic()
    }
}
