use std::path::Path;

use anyhow::Context;
use theseus_core::topology::TopologyConfig;

/// Load a topology description from a JSON file, or fall back to the built-in
/// reference network when no path is given.
pub fn load(path: Option<&Path>) -> Result<TopologyConfig, anyhow::Error> {
    match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read topology file {}", path.display()))?;
            let config: TopologyConfig = serde_json::from_str(&contents)
                .with_context(|| format!("failed to parse topology file {}", path.display()))?;
            Ok(config)
        }
        None => Ok(TopologyConfig::reference_network()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_without_path_uses_reference_network() {
        let config = load(None).unwrap();
        let graph = config.build_graph().unwrap();

        assert_eq!(graph.node_count(), 13);
    }
}
