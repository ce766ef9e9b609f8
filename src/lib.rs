//! In-memory directed graphs, directed acyclic graphs and trees sharing one
//! capability contract.
//!
//! ```rust
//! use graph_family::{graph::directed::*, graph::*, graph_lib};
//!
//! let a = Vertex::new("A", 1);
//! let b = Vertex::new("B", 2);
//!
//! let mut dag = DirectedAcyclicGraph::new();
//! assert!(graph_lib::add_edge(&mut dag, &a, &b));
//! assert!(!graph_lib::add_edge(&mut dag, &b, &a));
//! assert_eq!(graph_lib::count_edges(&dag), 1);
//!
//! let mut tree = Tree::new();
//! assert!(graph_lib::add(&mut tree, &a));
//! assert!(!graph_lib::add(&mut tree, &b));
//! assert!(graph_lib::add_edge(&mut tree, &a, &b));
//! assert_eq!(graph_lib::top(&tree), Some(a));
//! ```

pub mod graph;
pub mod graph_lib;
