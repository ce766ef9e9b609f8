//! Vertices, edges and the three graph variants.
//!
//! # Representation
//!
//! Vertices are identified by their payload.
//! Inside a graph, each distinct vertex is stored once and addressed by a
//! lightweight [VertexId]; true edges are addressed by an [EdgeId].
//! An entry log records placeholders (vertices added on their own) and true
//! edges in insertion order, which is the order every query and the textual
//! rendering follow.
//!
//! # Variants
//!
//! [directed::DirectedGraph], [directed::DirectedAcyclicGraph] and
//! [directed::Tree] share no base type.
//! Each owns an [EdgeList] and implements [GrowableGraph], [ShrinkableGraph]
//! and [QueryableGraph] with its own insertion rules.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod refusal;
pub use self::refusal::*;
mod r#trait;
pub use self::r#trait::*;
mod edge_list;
pub use self::edge_list::*;

pub mod directed;
