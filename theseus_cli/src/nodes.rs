use std::path::Path;

use crate::topology_file;

pub fn run(topology: Option<&Path>) -> Result<(), anyhow::Error> {
    let config = topology_file::load(topology)?;
    let graph = config.build_graph()?;

    let mut nodes: Vec<&str> = graph.nodes().into_iter().collect();
    nodes.sort_unstable();

    for node in nodes {
        println!("{node}");
    }

    Ok(())
}
