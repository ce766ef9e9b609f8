use crate::graph::*;
use std::fmt;
use tracing::trace;

/// A directed graph without structural restrictions.
///
/// Parallel edges and self-loops are accepted.
#[derive(Clone, Default)]
pub struct DirectedGraph {
    list: EdgeList,
}

impl DirectedGraph {
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
}

impl GrowableGraph for DirectedGraph {
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
        let eid = self.list.push_edge(u, v, None);
        trace!(source = %u, dest = %v, ?eid, "added edge");
        Ok(eid)
    }

    fn insert_edge(&mut self, edge: Edge) -> Outcome<Entry> {
        let entry = self.list.push(edge);
        trace!(?entry, "inserted edge");
        Ok(entry)
    }
}

impl ShrinkableGraph for DirectedGraph {
    fn remove(&mut self, v: &Vertex) -> usize {
        let n = self.list.remove_by_source(v);
        trace!(vertex = %v, removed = n, "removed vertex");
        n
    }
}

impl QueryableGraph for DirectedGraph {
    fn edge_list(&self) -> &EdgeList {
        &self.list
    }
}

impl fmt::Display for DirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.list, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::directed::tests::*;
    use quickcheck_macros::*;

    #[test]
    fn adjacency_is_directed() {
        let (a, b, c) = abc();
        let mut dg = DirectedGraph::new();
        dg.add(&a).unwrap();
        dg.add(&b).unwrap();
        dg.add(&c).unwrap();
        for (x, y) in [(&a, &b), (&b, &a), (&a, &c), (&c, &a), (&b, &c), (&c, &b)] {
            assert!(!dg.are_adjacent(x, y));
        }
        dg.add_edge(&a, &b).unwrap();
        dg.add_edge(&a, &c).unwrap();
        dg.add_edge(&b, &c).unwrap();
        assert!(dg.are_adjacent(&a, &b));
        assert!(dg.are_adjacent(&a, &c));
        assert!(dg.are_adjacent(&b, &c));
        assert!(!dg.are_adjacent(&c, &a));
    }

    #[test]
    fn neighbors_follow_outgoing_edges() {
        let (a, b, c) = abc();
        let mut dg = DirectedGraph::new();
        dg.add_edge(&a, &b).unwrap();
        dg.add_edge(&a, &c).unwrap();
        dg.add_edge(&b, &c).unwrap();
        assert_eq!(dg.edge_count(), 3);
        assert_eq!(dg.get_neighbors(&a), vec![b.clone(), c.clone()]);
        assert!(dg.get_neighbors(&c).is_empty());
        assert_eq!(dg.get_incident_neighbors(&c), vec![a.clone(), b.clone()]);
        assert_eq!(dg.get_incident_neighbors(&b), vec![a, c]);
    }

    #[test]
    fn neighbors_keep_duplicates() {
        let (a, b, _) = abc();
        let mut dg = DirectedGraph::new();
        dg.add_edge(&a, &b).unwrap();
        dg.add_edge(&a, &b).unwrap();
        assert_eq!(dg.edge_count(), 2);
        assert_eq!(dg.get_neighbors(&a), vec![b.clone(), b]);
    }

    #[test]
    fn remove_preserves_order_of_the_rest() {
        let (a, b, c) = abc();
        let mut dg = DirectedGraph::new();
        dg.add(&a).unwrap();
        dg.add(&b).unwrap();
        dg.add(&c).unwrap();
        assert_eq!(dg.vertex_count(), 3);
        assert_eq!(dg.remove(&a), 1);
        assert_eq!(dg.vertex_count(), 2);
        let sources: Vec<_> = dg.adjacency_list().iter().map(|e| e.source().clone()).collect();
        assert_eq!(sources, vec![b, c]);
    }

    #[test]
    fn remove_only_looks_at_sources() {
        let (a, b, c) = abc();
        let mut dg = DirectedGraph::new();
        dg.add_edge(&a, &b).unwrap();
        dg.add_edge(&c, &b).unwrap();
        assert_eq!(dg.remove(&b), 0);
        assert_eq!(dg.edge_count(), 2);
        assert!(dg.contains_vertex(&b));
    }

    #[test]
    fn insert_edge_keeps_payload() {
        let (a, b, c) = abc();
        let mut dg = DirectedGraph::new();
        dg.add_edge(&a, &b).unwrap();
        dg.add_edge(&a, &c).unwrap();
        let entry = dg
            .insert_edge(Edge::with_value(a.clone(), b.clone(), ("w".to_owned(), 0)))
            .unwrap();
        assert!(matches!(entry, Entry::Edge(_)));
        assert_eq!(dg.edge_count(), 3);
        let list = dg.adjacency_list();
        assert_eq!(list[0], Edge::new(a.clone(), b.clone()));
        assert_eq!(list[1], Edge::new(a.clone(), c));
        assert_eq!(list[2], Edge::new(a.clone(), b.clone()));
        assert_eq!(list[2].value(), Some(&("w".to_owned(), 0)));

        let entry = dg.insert_edge(Edge::placeholder(a)).unwrap();
        assert!(matches!(entry, Entry::Vertex(_)));
        assert_eq!(dg.edge_count(), 3);
    }

    #[test]
    fn top_is_first_vertex_without_parent() {
        let (a, b, c) = abc();
        let mut dg = DirectedGraph::new();
        assert_eq!(dg.top(), None);
        dg.add(&a).unwrap();
        dg.add(&b).unwrap();
        dg.add(&c).unwrap();
        assert_eq!(dg.top(), Some(a.clone()));
        dg.add_edge(&c, &a).unwrap();
        assert_eq!(dg.top(), Some(b));
    }

    #[test]
    fn in_graph_mutation() {
        let (a, b, c) = abc();
        let mut dg = DirectedGraph::new();
        let eid = dg.add_edge(&a, &b).unwrap();
        dg.set_edge_value(eid, ("w".to_owned(), 1)).unwrap();
        assert_eq!(dg.adjacency_list()[0].value(), Some(&("w".to_owned(), 1)));
        dg.replace_vertex(&b, c.clone()).unwrap();
        assert!(dg.are_adjacent(&a, &c));
        assert!(!dg.contains_vertex(&b));
    }

    #[test]
    fn display() {
        let (a, b, c) = abc();
        let mut dg = DirectedGraph::new();
        dg.add(&a).unwrap();
        dg.add(&b).unwrap();
        dg.add(&c).unwrap();
        assert_eq!(
            dg.to_string(),
            "Graph (# vertices = 3):\n\
             (A, 1) -> NULL\n\n\
             (B, 2) -> NULL\n\n\
             (C, 3) -> NULL\n\n"
        );
    }

    #[quickcheck]
    fn matches_entry_log_oracle(ops: Ops) {
        let mut oracle = Oracle::default();
        let mut trial = DirectedGraph::new();
        for op in ops.iter() {
            match op {
                Op::Add(v) => {
                    oracle.add(v);
                    assert!(trial.add(v).is_ok());
                }
                Op::AddEdge(u, v) => {
                    let before = trial.edge_count();
                    oracle.add_edge(u, v);
                    assert!(trial.add_edge(u, v).is_ok());
                    assert!(trial.are_adjacent(u, v));
                    assert_eq!(trial.edge_count(), before + 1);
                }
                Op::Remove(v) => {
                    assert_eq!(trial.remove(v), oracle.remove(v));
                }
            }
            oracle.assert_same(&trial);
        }
    }
}
