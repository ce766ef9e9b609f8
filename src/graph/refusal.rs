use super::{EdgeId, Vertex};

/// Why a graph declined a mutation.
///
/// A refusal leaves the graph exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Refusal {
    #[error("edge {from} -> {to} would close a cycle")]
    WouldCycle { from: Vertex, to: Vertex },

    #[error("{vertex} already has a parent")]
    SecondParent { vertex: Vertex },

    #[error("source {vertex} is not part of the tree")]
    DetachedSource { vertex: Vertex },

    #[error("{vertex} is not connected to the tree")]
    DetachedVertex { vertex: Vertex },

    #[error("{vertex} is already present")]
    DuplicateVertex { vertex: Vertex },

    #[error("{vertex} is not present")]
    UnknownVertex { vertex: Vertex },

    #[error("no edge with id {0:?}")]
    UnknownEdge(EdgeId),
}

/// Result of a mutation that a graph may refuse.
pub type Outcome<T> = Result<T, Refusal>;
