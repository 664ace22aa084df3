use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::TopologyError;
use crate::graph::{Weight, WeightedGraph};
use crate::heuristic::MapHeuristic;

/// Vulnerability tier of a node. The inverse score is used as the heuristic
/// estimate: higher severity lowers the estimate, steering the search towards
/// vulnerable hops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    None,
    Minor,
    Medium,
    Major,
}

impl Severity {
    pub fn inverse_score(self) -> Weight {
        match self {
            Severity::None => 0,
            Severity::Minor => -1,
            Severity::Medium => -2,
            Severity::Major => -3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub source: String,
    pub target: String,
    /// Key into [`TopologyConfig::control_weights`].
    pub category: String,
}

impl Link {
    fn new(source: &str, target: &str, category: &str) -> Link {
        Link {
            source: source.to_string(),
            target: target.to_string(),
            category: category.to_string(),
        }
    }
}

/// Explicit description of a network under analysis: security-control
/// strength per link category, the links themselves, and the vulnerability
/// tier of each node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopologyConfig {
    #[serde(default = "default_directed")]
    pub directed: bool,
    /// Traversal cost per link category; stronger controls make a hop more
    /// expensive.
    pub control_weights: FxHashMap<String, Weight>,
    pub links: Vec<Link>,
    pub vulnerabilities: FxHashMap<String, Severity>,
}

fn default_directed() -> bool {
    true
}

impl TopologyConfig {
    pub fn build_graph(&self) -> Result<WeightedGraph, TopologyError> {
        let mut graph = WeightedGraph::new(self.directed);

        for link in &self.links {
            let weight = self.control_weights.get(&link.category).copied().ok_or_else(|| {
                TopologyError::UnknownCategory {
                    link_source: link.source.clone(),
                    target: link.target.clone(),
                    category: link.category.clone(),
                }
            })?;
            graph.connect(&link.source, &link.target, weight);
        }

        Ok(graph)
    }

    pub fn build_heuristic(&self) -> MapHeuristic {
        let estimates = self
            .vulnerabilities
            .iter()
            .map(|(node, severity)| (node.clone(), severity.inverse_score()))
            .collect();

        MapHeuristic::new(estimates)
    }

    /// The two-subdomain client/switch network from the security report this
    /// tool was built around. Control weights come from the report's derived
    /// weight table; most of the table is unreferenced by the link list but
    /// kept so other topologies over the same device kinds can reuse it.
    pub fn reference_network() -> TopologyConfig {
        let control_weights: FxHashMap<String, Weight> = [
            ("firewall_router", 3),
            ("router_firewall", 7),
            ("router_switch", 0),
            ("switch_router", 9),
            ("router_client", 6),
            ("client_router", 3),
            ("router_wireless", 0),
            ("wireless_router", 3),
            ("switch_firewall", 7),
            ("firewall_switch", 0),
            ("switch_client", 4),
            ("client_switch", 2),
            ("wireless_client", 4),
            ("client_wireless", 0),
            ("firewall_client", 4),
            ("client_firewall", 5),
            ("client_client", 1),
        ]
        .into_iter()
        .map(|(category, weight)| (category.to_string(), weight))
        .collect();

        let mut links = Vec::new();

        // Subdomain A
        for client in ["ClientA", "ClientB", "ClientC", "ClientD", "ClientE"] {
            links.push(Link::new(client, "SwitchA", "client_switch"));
            links.push(Link::new("SwitchA", client, "switch_client"));
        }

        // Branch between the subdomains
        links.push(Link::new("SwitchA", "SwitchB", "switch_client"));

        // Subdomain B
        for client in [
            "ClientF", "ClientG", "ClientH", "ClientI", "ClientJ", "ClientK",
        ] {
            links.push(Link::new(client, "SwitchB", "client_switch"));
            links.push(Link::new("SwitchB", client, "switch_client"));
        }

        // Port openings between non-branched clients
        links.push(Link::new("ClientA", "ClientB", "client_client"));
        links.push(Link::new("ClientJ", "ClientB", "client_client"));
        links.push(Link::new("ClientH", "ClientB", "client_client"));
        links.push(Link::new("ClientB", "ClientK", "client_client"));

        let vulnerabilities: FxHashMap<String, Severity> = [
            ("ClientA", Severity::None),
            ("ClientB", Severity::None),
            ("ClientC", Severity::None),
            ("ClientD", Severity::None),
            ("ClientE", Severity::None),
            ("ClientF", Severity::None),
            ("ClientG", Severity::None),
            ("ClientH", Severity::Minor),
            ("ClientI", Severity::None),
            ("ClientJ", Severity::None),
            ("ClientK", Severity::None),
            ("SwitchA", Severity::Minor),
            ("SwitchB", Severity::Medium),
        ]
        .into_iter()
        .map(|(node, severity)| (node.to_string(), severity))
        .collect();

        TopologyConfig {
            directed: true,
            control_weights,
            links,
            vulnerabilities,
        }
    }
}
