use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    /// A discovered node has no heuristic entry. Defaulting to zero would
    /// silently break admissibility, so the search fails instead.
    #[error("no heuristic value for node {0:?}")]
    MissingHeuristic(String),

    #[error("search aborted after settling {0} nodes")]
    IterationLimit(usize),
}

#[derive(Error, Debug)]
pub enum TopologyError {
    #[error("link {link_source:?} -> {target:?} references unknown control category {category:?}")]
    UnknownCategory {
        // Named `link_source` rather than `source` because thiserror treats a
        // field named `source` as the error's std source.
        link_source: String,
        target: String,
        category: String,
    },
}
