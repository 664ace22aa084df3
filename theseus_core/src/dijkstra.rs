use crate::astar::AStar;
use crate::heuristic::ZeroHeuristic;

pub struct Dijkstra;

/// Dijkstra is simply a variant of AStar with a zero heuristic
impl Dijkstra {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> AStar<ZeroHeuristic> {
        AStar::with_heuristic(ZeroHeuristic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_topology_utils::test_topology;

    #[test]
    fn test_calc_path() {
        let graph = test_topology::reference_graph();

        let dijkstra = Dijkstra::new();
        let result = dijkstra.calc_path(&graph, "ClientA", "ClientI");

        assert!(result.is_ok());

        let path = result.unwrap().unwrap();
        assert_eq!(path.total_cost(), 8);
    }

    #[test]
    fn test_calc_path_2() {
        let graph = test_topology::reference_graph();

        let dijkstra = Dijkstra::new();
        let result = dijkstra.calc_path(&graph, "ClientC", "ClientD");

        assert!(result.is_ok());

        let path = result.unwrap().unwrap();
        assert_eq!(path.total_cost(), 6);
    }
}
