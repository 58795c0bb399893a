use std::fmt::Debug;

use thiserror::Error;

/// Errors raised while building a pathfinder or running a search.
///
/// An unreachable destination is not an error: searches report it with an
/// empty path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("pathfinder has no {0} function")]
    MissingCollaborator(&'static str),
    #[error("graphs allowing parallel edges are not supported")]
    ParallelEdges,
    #[error("{to} is listed as a successor of {from} but no edge connects them")]
    MissingEdge { from: String, to: String },
    #[error("edge {from} -> {to} has weight {weight}, expected a finite non-negative value")]
    InvalidWeight { from: String, to: String, weight: f64 },
}

impl PathError {
    pub(crate) fn missing_edge(from: &impl Debug, to: &impl Debug) -> Self {
        Self::MissingEdge {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub(crate) fn invalid_weight(from: &impl Debug, to: &impl Debug, weight: f64) -> Self {
        Self::InvalidWeight {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
            weight,
        }
    }
}
