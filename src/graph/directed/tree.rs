use crate::graph::*;
use std::fmt;
use tracing::{debug, trace};

/// A rooted tree with edges pointing from parents to children.
///
/// The first vertex ever added (or the source of the first edge) is the root.
/// After that, a vertex can only join the tree as the child of a vertex
/// already in it, and never gets a second parent.
///
/// [ShrinkableGraph::remove] only drops the edges leaving a vertex, so it may
/// split the tree into a forest. Parentless vertices of that forest can be
/// attached again as long as no cycle is closed.
#[derive(Clone, Default)]
pub struct Tree {
    list: EdgeList,
}

impl Tree {
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

    fn check_edge(&self, u: &Vertex, v: &Vertex) -> Outcome<()> {
        let src = self.list.vertex_id(u);
        let dst = self.list.vertex_id(v);
        let closes_cycle = u == v
            || matches!((src, dst), (Some(src), Some(dst)) if self.list.reaches(dst, src));
        let refusal = if dst.map_or(false, |dst| self.list.has_parent(dst)) {
            Refusal::SecondParent { vertex: v.clone() }
        } else if closes_cycle {
            Refusal::WouldCycle {
                from: u.clone(),
                to: v.clone(),
            }
        } else if !self.list.is_empty() && src.is_none() {
            Refusal::DetachedSource { vertex: u.clone() }
        } else {
            return Ok(());
        };
        debug!(source = %u, dest = %v, %refusal, "refused tree edge");
        Err(refusal)
    }
}

impl GrowableGraph for Tree {
    fn new() -> Self {
        Self {
            list: EdgeList::new(),
        }
    }

    /// Registers the root of an empty tree.
    /// For a vertex already in the tree this is a no-op; any other vertex is refused.
    fn add(&mut self, v: &Vertex) -> Outcome<VertexId> {
        if let Some(vid) = self.list.vertex_id(v) {
            return Ok(vid);
        }
        if !self.list.is_empty() {
            debug!(vertex = %v, "refused detached vertex");
            return Err(Refusal::DetachedVertex { vertex: v.clone() });
        }
        let vid = self.list.push_vertex(v);
        trace!(vertex = %v, ?vid, "added root");
        Ok(vid)
    }

    fn add_edge(&mut self, u: &Vertex, v: &Vertex) -> Outcome<EdgeId> {
        self.check_edge(u, v)?;
        let eid = self.list.push_edge(u, v, None);
        trace!(source = %u, dest = %v, ?eid, "added edge");
        Ok(eid)
    }

    fn insert_edge(&mut self, edge: Edge) -> Outcome<Entry> {
        match edge.dest() {
            Some(dest) => self.check_edge(edge.source(), dest)?,
            None => return self.add(edge.source()).map(Entry::Vertex),
        }
        let entry = self.list.push(edge);
        trace!(?entry, "inserted edge");
        Ok(entry)
    }
}

impl ShrinkableGraph for Tree {
    fn remove(&mut self, v: &Vertex) -> usize {
        let n = self.list.remove_by_source(v);
        trace!(vertex = %v, removed = n, "removed vertex");
        n
    }
}

impl QueryableGraph for Tree {
    fn edge_list(&self) -> &EdgeList {
        &self.list
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.list, f)
    }
}
