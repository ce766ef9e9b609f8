mod digraph;
pub use self::digraph::*;
mod acyclic;
pub use self::acyclic::*;
mod tree;
pub use self::tree::*;

#[cfg(test)]
pub use self::tests::*;
