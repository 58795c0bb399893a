use std::fmt::Debug;

use thiserror::Error;

/// Errors raised while building or converting a graph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("{from} and {to} are already connected")]
    ParallelEdge { from: String, to: String },
    #[error("self loop on {0} is not allowed in this graph")]
    SelfLoop(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl GraphError {
    pub(crate) fn parallel_edge(from: &impl Debug, to: &impl Debug) -> Self {
        Self::ParallelEdge {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
