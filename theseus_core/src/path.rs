use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::Weight;

/// One hop of a traversal: the node reached and the accumulated cost from the
/// start up to that node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    node: String,
    cost: Weight,
}

impl PathStep {
    pub fn new(node: String, cost: Weight) -> PathStep {
        PathStep { node, cost }
    }

    pub fn node(&self) -> &str {
        &self.node
    }

    pub fn cost(&self) -> Weight {
        self.cost
    }
}

/// Ordered start-to-goal sequence of steps. Never empty: a search that finds
/// nothing reports no-path instead of an empty traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalPath {
    steps: Vec<PathStep>,
}

impl TraversalPath {
    pub fn new(steps: Vec<PathStep>) -> TraversalPath {
        TraversalPath { steps }
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn start(&self) -> Option<&PathStep> {
        self.steps.first()
    }

    pub fn goal(&self) -> Option<&PathStep> {
        self.steps.last()
    }

    pub fn total_cost(&self) -> Weight {
        self.steps.last().map_or(0, |step| step.cost)
    }
}

impl fmt::Display for TraversalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{}: {}", step.node, step.cost)?;
        }
        Ok(())
    }
}
