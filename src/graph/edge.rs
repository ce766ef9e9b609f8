use super::{Value, Vertex, VertexId};
use std::fmt;

/// ID for true edges, which are essentially `usize`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// A factory to generate `EdgeId` uniquely. Ids are never handed out twice.
#[derive(Clone)]
pub struct EdgeIdFactory(usize);

impl Default for EdgeIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> EdgeId {
        let cur = self.0;
        self.0 += 1;
        EdgeId(cur)
    }
}

impl EdgeId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}

/// One record of a graph's entry log, in insertion order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Entry {
    /// A placeholder registering a vertex on its own.
    Vertex(VertexId),
    /// A true edge.
    Edge(EdgeId),
}

/// A caller-facing edge.
///
/// The source is always present.
/// Without a destination the edge is a placeholder standing for an isolated vertex.
/// Equality compares endpoints only; the payload is not part of an edge's identity.
#[derive(Debug, Clone)]
pub struct Edge {
    source: Vertex,
    dest: Option<Vertex>,
    value: Option<Value>,
}

impl Edge {
    pub fn new(source: Vertex, dest: Vertex) -> Self {
        Self {
            source,
            dest: Some(dest),
            value: None,
        }
    }

    pub fn with_value(source: Vertex, dest: Vertex, value: Value) -> Self {
        Self {
            source,
            dest: Some(dest),
            value: Some(value),
        }
    }

    pub fn placeholder(vertex: Vertex) -> Self {
        Self {
            source: vertex,
            dest: None,
            value: None,
        }
    }

    pub(crate) fn from_parts(source: Vertex, dest: Option<Vertex>, value: Option<Value>) -> Self {
        Self {
            source,
            dest,
            value,
        }
    }

    pub fn source(&self) -> &Vertex {
        &self.source
    }

    pub fn dest(&self) -> Option<&Vertex> {
        self.dest.as_ref()
    }

    pub fn is_true_edge(&self) -> bool {
        self.dest.is_some()
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn set_value(&mut self, value: Value) {
        self.value = Some(value);
    }

    pub fn set_source(&mut self, v: Vertex) {
        self.source = v;
    }

    pub fn set_dest(&mut self, v: Vertex) {
        self.dest = Some(v);
    }

    pub(crate) fn into_parts(self) -> (Vertex, Option<Vertex>, Option<Value>) {
        (self.source, self.dest, self.value)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.dest == other.dest
    }
}

impl Eq for Edge {}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> ", self.source)?;
        match &self.dest {
            Some(dest) => writeln!(f, "{}", dest),
            None => writeln!(f, "NULL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let a = Vertex::new("A", 1);
        let b = Vertex::new("B", 2);
        assert_eq!(Edge::new(a.clone(), b).to_string(), "(A, 1) -> (B, 2)\n");
        assert_eq!(Edge::placeholder(a).to_string(), "(A, 1) -> NULL\n");
    }

    #[test]
    fn payload_is_not_identity() {
        let a = Vertex::new("A", 1);
        let b = Vertex::new("B", 2);
        let plain = Edge::new(a.clone(), b.clone());
        let valued = Edge::with_value(a.clone(), b.clone(), ("w".to_owned(), 9));
        assert_eq!(plain, valued);
        assert_ne!(plain, Edge::new(b, a.clone()));
        assert_ne!(Edge::placeholder(a.clone()), plain);
        assert_eq!(Edge::placeholder(a.clone()), Edge::placeholder(a));
    }

    #[test]
    fn set_value() {
        let mut e = Edge::new(Vertex::new("A", 1), Vertex::new("B", 2));
        assert_eq!(e.value(), None);
        e.set_value(("C".to_owned(), 3));
        assert_eq!(e.value(), Some(&("C".to_owned(), 3)));
    }

    #[test]
    fn endpoints_are_replaceable() {
        let mut e = Edge::placeholder(Vertex::new("A", 1));
        assert!(!e.is_true_edge());
        e.set_dest(Vertex::new("B", 2));
        e.set_source(Vertex::new("C", 3));
        assert!(e.is_true_edge());
        assert_eq!(e.source(), &Vertex::new("C", 3));
        assert_eq!(e.dest(), Some(&Vertex::new("B", 2)));
    }
}
