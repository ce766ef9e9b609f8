use crate::graph::*;
use std::fmt::Display;

/// Interfaces to add vertices and edges.
///
/// Every variant decides on its own which insertions it accepts.
/// A refused insertion leaves the graph unchanged.
pub trait GrowableGraph {
    fn new() -> Self;

    /// Registers `v`, possibly as an isolated vertex.
    fn add(&mut self, v: &Vertex) -> Outcome<VertexId>;

    /// Adds a true edge `u -> v`.
    fn add_edge(&mut self, u: &Vertex, v: &Vertex) -> Outcome<EdgeId>;

    /// Appends a caller-built edge as is, payload included.
    ///
    /// A dest-less edge is handled as [GrowableGraph::add] on its source.
    fn insert_edge(&mut self, edge: Edge) -> Outcome<Entry>;
}

/// Interfaces to remove vertices.
pub trait ShrinkableGraph {
    /// Drops every entry whose source is `v` and returns how many were dropped.
    ///
    /// Edges where `v` is only the destination are kept.
    fn remove(&mut self, v: &Vertex) -> usize;
}

/// Interfaces to query a graph.
///
/// All of them are answered by the variant's [EdgeList],
/// so only [QueryableGraph::edge_list] needs implementing.
pub trait QueryableGraph: Display {
    fn edge_list(&self) -> &EdgeList;

    fn are_adjacent(&self, u: &Vertex, v: &Vertex) -> bool {
        self.edge_list().are_adjacent(u, v)
    }

    /// Destinations of edges leaving `v`, in insertion order.
    fn get_neighbors(&self, v: &Vertex) -> Vec<Vertex> {
        self.edge_list().out_neighbors(v)
    }

    /// The other endpoint of every edge touching `v`, in insertion order.
    fn get_incident_neighbors(&self, v: &Vertex) -> Vec<Vertex> {
        self.edge_list().incident_neighbors(v)
    }

    fn vertex_count(&self) -> usize {
        self.edge_list().vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.edge_list().edge_count()
    }

    fn contains_vertex(&self, v: &Vertex) -> bool {
        self.edge_list().vertex_id(v).is_some()
    }

    /// The first vertex, in insertion order, that no edge points to.
    fn top(&self) -> Option<Vertex> {
        self.edge_list().top()
    }

    /// Copies of all entries, in insertion order.
    fn adjacency_list(&self) -> Vec<Edge> {
        self.edge_list().adjacency_list()
    }
}

/// Anything carrying a replaceable [Value].
pub trait Valued {
    type Output;

    fn value(&self) -> Self::Output;
    fn set_value(&mut self, value: Value);
}

impl Valued for Vertex {
    type Output = Value;

    fn value(&self) -> Value {
        Vertex::value(self).clone()
    }

    fn set_value(&mut self, value: Value) {
        Vertex::set_value(self, value)
    }
}

impl Valued for Edge {
    type Output = Option<Value>;

    fn value(&self) -> Option<Value> {
        Edge::value(self).cloned()
    }

    fn set_value(&mut self, value: Value) {
        Edge::set_value(self, value)
    }
}
