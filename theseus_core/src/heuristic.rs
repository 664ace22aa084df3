use fxhash::FxHashMap;

use crate::error::SearchError;
use crate::graph::Weight;

pub trait Heuristic {
    /// Estimated remaining cost from `node` to the goal. Must never
    /// overestimate the true remaining cost, otherwise the search can return
    /// a path that is not least-cost.
    fn estimate(&self, node: &str) -> Result<Weight, SearchError>;
}

/// Table-backed heuristic. A node without an entry is a configuration error
/// and fails the lookup rather than being treated as zero.
pub struct MapHeuristic {
    estimates: FxHashMap<String, Weight>,
}

impl MapHeuristic {
    pub fn new(estimates: FxHashMap<String, Weight>) -> MapHeuristic {
        MapHeuristic { estimates }
    }

    pub fn insert(&mut self, node: &str, estimate: Weight) {
        self.estimates.insert(node.to_string(), estimate);
    }
}

impl Heuristic for MapHeuristic {
    fn estimate(&self, node: &str) -> Result<Weight, SearchError> {
        self.estimates
            .get(node)
            .copied()
            .ok_or_else(|| SearchError::MissingHeuristic(node.to_string()))
    }
}

pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    #[inline(always)]
    fn estimate(&self, _node: &str) -> Result<Weight, SearchError> {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_heuristic_lookup() {
        let mut heuristic = MapHeuristic::new(FxHashMap::default());
        heuristic.insert("a", -2);

        assert_eq!(heuristic.estimate("a").unwrap(), -2);
    }

    #[test]
    fn test_map_heuristic_missing_entry_fails() {
        let heuristic = MapHeuristic::new(FxHashMap::default());

        let err = heuristic.estimate("ghost").unwrap_err();
        assert!(matches!(err, SearchError::MissingHeuristic(node) if node == "ghost"));
    }

    #[test]
    fn test_zero_heuristic() {
        assert_eq!(ZeroHeuristic.estimate("anything").unwrap(), 0);
    }
}
