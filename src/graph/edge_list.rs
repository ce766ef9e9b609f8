use crate::graph::*;
use ahash::RandomState;
use bimap::BiHashMap;
use petgraph::{
    algo::has_path_connecting,
    graph::{EdgeIndex, NodeIndex},
    stable_graph::StableDiGraph,
    Direction,
};
use std::collections::HashMap;
use std::fmt;

/// Storage shared by all graph variants.
///
/// Each distinct vertex value is stored once in an arena and addressed by a [VertexId].
/// True edges live in the same arena and are addressed by an [EdgeId].
/// On top of the arena, an entry log remembers in which order placeholders and
/// edges were inserted, which is the order every query reports in.
///
/// Ids are minted by [VertexIdFactory] and [EdgeIdFactory] rather than taken from
/// the arena, whose slots get recycled: an id of a removed vertex or edge never
/// comes back to life.
///
/// A vertex stays in the arena exactly as long as some entry refers to it.
#[derive(Clone)]
pub struct EdgeList {
    arena: StableDiGraph<VertexId, (EdgeId, Option<Value>), usize>,
    vertices: BiHashMap<VertexId, Vertex, RandomState, RandomState>,
    nodes: HashMap<VertexId, NodeIndex<usize>, RandomState>,
    edges: HashMap<EdgeId, EdgeIndex<usize>, RandomState>,
    // number of placeholder entries per vertex
    placeholders: HashMap<VertexId, usize, RandomState>,
    vid_factory: VertexIdFactory,
    eid_factory: EdgeIdFactory,
    entries: Vec<Entry>,
}

impl Default for EdgeList {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeList {
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            arena: StableDiGraph::with_capacity(vertices, edges),
            vertices: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
            nodes: HashMap::with_capacity_and_hasher(vertices, RandomState::new()),
            edges: HashMap::with_capacity_and_hasher(edges, RandomState::new()),
            placeholders: HashMap::with_hasher(RandomState::new()),
            vid_factory: VertexIdFactory::new(),
            eid_factory: EdgeIdFactory::new(),
            entries: Vec::with_capacity(vertices + edges),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn vertex_id(&self, v: &Vertex) -> Option<VertexId> {
        self.vertices.get_by_right(v).copied()
    }

    pub fn vertex(&self, vid: VertexId) -> Option<&Vertex> {
        self.vertices.get_by_left(&vid)
    }

    fn node(&self, vid: VertexId) -> Option<NodeIndex<usize>> {
        self.nodes.get(&vid).copied()
    }

    pub fn endpoints(&self, eid: EdgeId) -> Option<(VertexId, VertexId)> {
        let (src, dst) = self.arena.edge_endpoints(*self.edges.get(&eid)?)?;
        Some((self.arena[src], self.arena[dst]))
    }

    /// A copy of the true edge `eid`, payload included.
    pub fn edge(&self, eid: EdgeId) -> Option<Edge> {
        let (src, dst) = self.endpoints(eid)?;
        let (_, value) = self.arena.edge_weight(*self.edges.get(&eid)?)?;
        Some(Edge::from_parts(
            self.vertex(src)?.clone(),
            Some(self.vertex(dst)?.clone()),
            value.clone(),
        ))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.arena.edge_count()
    }

    /// Whether some true edge points to `vid`. Unknown ids have no parent.
    pub fn has_parent(&self, vid: VertexId) -> bool {
        match self.node(vid) {
            Some(n) => self
                .arena
                .neighbors_directed(n, Direction::Incoming)
                .next()
                .is_some(),
            None => false,
        }
    }

    /// Whether `to` can be reached from `from` along true edges.
    /// Every known vertex reaches itself; unknown ids reach nothing.
    pub fn reaches(&self, from: VertexId, to: VertexId) -> bool {
        match (self.node(from), self.node(to)) {
            (Some(a), Some(b)) => has_path_connecting(&self.arena, a, b, None),
            _ => false,
        }
    }

    fn intern(&mut self, v: &Vertex) -> (VertexId, NodeIndex<usize>) {
        if let Some(vid) = self.vertex_id(v) {
            if let Some(n) = self.node(vid) {
                return (vid, n);
            }
        }
        let vid = self.vid_factory.one_more();
        let n = self.arena.add_node(vid);
        self.vertices.insert(vid, v.clone());
        self.nodes.insert(vid, n);
        (vid, n)
    }

    pub fn push_vertex(&mut self, v: &Vertex) -> VertexId {
        let (vid, _) = self.intern(v);
        *self.placeholders.entry(vid).or_insert(0) += 1;
        self.entries.push(Entry::Vertex(vid));
        vid
    }

    pub fn push_edge(&mut self, u: &Vertex, v: &Vertex, value: Option<Value>) -> EdgeId {
        let (_, src) = self.intern(u);
        let (_, dst) = self.intern(v);
        let eid = self.eid_factory.one_more();
        let idx = self.arena.add_edge(src, dst, (eid, value));
        self.edges.insert(eid, idx);
        self.entries.push(Entry::Edge(eid));
        eid
    }

    /// Appends a caller-built edge without any structural check.
    pub fn push(&mut self, edge: Edge) -> Entry {
        match edge.into_parts() {
            (source, Some(dest), value) => Entry::Edge(self.push_edge(&source, &dest, value)),
            (source, None, _) => Entry::Vertex(self.push_vertex(&source)),
        }
    }

    /// Drops every entry whose source is `v`.
    ///
    /// Vertices no longer referenced by any entry leave the arena.
    pub fn remove_by_source(&mut self, v: &Vertex) -> usize {
        let vid = match self.vertex_id(v) {
            Some(vid) => vid,
            None => return 0,
        };
        let before = self.entries.len();
        let mut dropped = vec![];
        let arena = &self.arena;
        let edges = &self.edges;
        self.entries.retain(|entry| match entry {
            Entry::Vertex(x) => *x != vid,
            Entry::Edge(eid) => match edges.get(eid).and_then(|e| arena.edge_endpoints(*e)) {
                Some((src, _)) if arena[src] == vid => {
                    dropped.push(*eid);
                    false
                }
                _ => true,
            },
        });
        self.placeholders.remove(&vid);

        let mut touched = vec![vid];
        for eid in dropped {
            if let Some((_, dst)) = self.endpoints(eid) {
                touched.push(dst);
            }
            if let Some(idx) = self.edges.remove(&eid) {
                self.arena.remove_edge(idx);
            }
        }
        touched.sort();
        touched.dedup();
        for x in touched {
            if !self.is_referenced(x) {
                if let Some(n) = self.nodes.remove(&x) {
                    self.arena.remove_node(n);
                }
                self.vertices.remove_by_left(&x);
            }
        }
        before - self.entries.len()
    }

    fn is_referenced(&self, vid: VertexId) -> bool {
        self.placeholders.contains_key(&vid)
            || self
                .node(vid)
                .map_or(false, |n| self.arena.neighbors_undirected(n).next().is_some())
    }

    pub fn are_adjacent(&self, u: &Vertex, v: &Vertex) -> bool {
        let src = self.vertex_id(u).and_then(|x| self.node(x));
        let dst = self.vertex_id(v).and_then(|x| self.node(x));
        match (src, dst) {
            (Some(src), Some(dst)) => self.arena.find_edge(src, dst).is_some(),
            _ => false,
        }
    }

    fn true_edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.entries.iter().filter_map(move |entry| match entry {
            Entry::Edge(eid) => self.endpoints(*eid),
            Entry::Vertex(_) => None,
        })
    }

    fn vertices_of(&self, ids: Vec<VertexId>) -> Vec<Vertex> {
        ids.into_iter()
            .filter_map(|x| self.vertex(x).cloned())
            .collect()
    }

    pub fn out_neighbors(&self, v: &Vertex) -> Vec<Vertex> {
        let vid = match self.vertex_id(v) {
            Some(vid) => vid,
            None => return vec![],
        };
        let ids = self
            .true_edges()
            .filter(|(src, _)| *src == vid)
            .map(|(_, dst)| dst)
            .collect();
        self.vertices_of(ids)
    }

    pub fn incident_neighbors(&self, v: &Vertex) -> Vec<Vertex> {
        let vid = match self.vertex_id(v) {
            Some(vid) => vid,
            None => return vec![],
        };
        let ids = self
            .true_edges()
            .filter_map(|(src, dst)| {
                if src == vid {
                    Some(dst)
                } else if dst == vid {
                    Some(src)
                } else {
                    None
                }
            })
            .collect();
        self.vertices_of(ids)
    }

    pub fn top(&self) -> Option<Vertex> {
        self.entries
            .iter()
            .flat_map(|entry| {
                let (first, second) = match entry {
                    Entry::Vertex(vid) => (Some(*vid), None),
                    Entry::Edge(eid) => match self.endpoints(*eid) {
                        Some((src, dst)) => (Some(src), Some(dst)),
                        None => (None, None),
                    },
                };
                first.into_iter().chain(second)
            })
            .find(|vid| !self.has_parent(*vid))
            .and_then(|vid| self.vertex(vid).cloned())
    }

    fn entry_as_edge(&self, entry: &Entry) -> Option<Edge> {
        match entry {
            Entry::Vertex(vid) => self.vertex(*vid).cloned().map(Edge::placeholder),
            Entry::Edge(eid) => self.edge(*eid),
        }
    }

    pub fn adjacency_list(&self) -> Vec<Edge> {
        self.entries
            .iter()
            .filter_map(|entry| self.entry_as_edge(entry))
            .collect()
    }

    pub fn set_edge_value(&mut self, eid: EdgeId, value: Value) -> Outcome<()> {
        let weight = self
            .edges
            .get(&eid)
            .and_then(|idx| self.arena.edge_weight_mut(*idx));
        match weight {
            Some((_, payload)) => {
                *payload = Some(value);
                Ok(())
            }
            None => Err(Refusal::UnknownEdge(eid)),
        }
    }

    /// Swaps the payload of the stored vertex `old` for `new`, keeping its edges.
    pub fn replace_vertex(&mut self, old: &Vertex, new: Vertex) -> Outcome<VertexId> {
        let vid = self.vertex_id(old).ok_or_else(|| Refusal::UnknownVertex {
            vertex: old.clone(),
        })?;
        if old == &new {
            return Ok(vid);
        }
        if self.vertices.contains_right(&new) {
            return Err(Refusal::DuplicateVertex { vertex: new });
        }
        self.vertices.remove_by_left(&vid);
        self.vertices.insert(vid, new);
        Ok(vid)
    }
}


impl fmt::Display for EdgeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph (# vertices = {}):", self.vertex_count())?;
        for entry in self.entries.iter() {
            if let Some(edge) = self.entry_as_edge(entry) {
                writeln!(f, "{}", edge)?;
            }
        }
        Ok(())
    }
}
