use crate::graph::*;
use std::fmt;
use tracing::{debug, trace};

/// A directed graph that refuses every edge closing a cycle.
///
/// Before an edge `u -> v` is stored, the graph checks whether `v` already
/// reaches `u`. Self-loops are therefore refused as well.
#[derive(Clone, Default)]
pub struct DirectedAcyclicGraph {
    list: EdgeList,
}

impl DirectedAcyclicGraph {
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            list: EdgeList::with_capacity(vertices, edges),
        }
    }

    pub fn set_edge_value(&mut self, eid: EdgeId, value: Value) -> Outcome<()> {
        self.list.set_edge_value(eid, value)
    }

    pub fn replace_vertex(&mut self, old: &Vertex, new: Vertex) -> Outcome<VertexId> {
        self.list.replace_vertex(old, new)
    }

    /// Whether `u -> v` would close a cycle.
    fn would_cycle(&self, u: &Vertex, v: &Vertex) -> bool {
        if u == v {
            return true;
        }
        match (self.list.vertex_id(u), self.list.vertex_id(v)) {
            (Some(src), Some(dst)) => self.list.reaches(dst, src),
            _ => false,
        }
    }

    fn check_edge(&self, u: &Vertex, v: &Vertex) -> Outcome<()> {
        if self.would_cycle(u, v) {
            debug!(source = %u, dest = %v, "refused edge closing a cycle");
            return Err(Refusal::WouldCycle {
                from: u.clone(),
                to: v.clone(),
            });
        }
        Ok(())
    }
}

impl GrowableGraph for DirectedAcyclicGraph {
    fn new() -> Self {
        Self {
            list: EdgeList::new(),
        }
    }

    fn add(&mut self, v: &Vertex) -> Outcome<VertexId> {
        let vid = self.list.push_vertex(v);
        trace!(vertex = %v, ?vid, "added vertex");
        Ok(vid)
    }

    fn add_edge(&mut self, u: &Vertex, v: &Vertex) -> Outcome<EdgeId> {
        self.check_edge(u, v)?;
        let eid = self.list.push_edge(u, v, None);
        trace!(source = %u, dest = %v, ?eid, "added edge");
        Ok(eid)
    }

    fn insert_edge(&mut self, edge: Edge) -> Outcome<Entry> {
        if let Some(dest) = edge.dest() {
            self.check_edge(edge.source(), dest)?;
        }
        let entry = self.list.push(edge);
        trace!(?entry, "inserted edge");
        Ok(entry)
    }
}

impl ShrinkableGraph for DirectedAcyclicGraph {
    fn remove(&mut self, v: &Vertex) -> usize {
        let n = self.list.remove_by_source(v);
        trace!(vertex = %v, removed = n, "removed vertex");
        n
    }
}

impl QueryableGraph for DirectedAcyclicGraph {
    fn edge_list(&self) -> &EdgeList {
        &self.list
    }
}

impl fmt::Display for DirectedAcyclicGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.list, f)
    }
}
