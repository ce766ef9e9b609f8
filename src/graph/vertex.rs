use std::fmt;

/// Payload carried by vertices and edges: a text label and a number.
pub type Value = (String, i64);

/// Stable handle of a vertex inside one graph, which is essentially `usize`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

/// A factory to generate `VertexId` uniquely. Ids are never handed out twice.
#[derive(Clone)]
pub struct VertexIdFactory(usize);

impl Default for VertexIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> VertexId {
        let cur = self.0;
        self.0 += 1;
        VertexId(cur)
    }
}

impl VertexId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}

/// A vertex is identified by its payload.
///
/// Two vertices holding equal values are the same vertex as far as every graph
/// in this crate is concerned.
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Vertex {
    value: Value,
}

impl Vertex {
    pub fn new(label: impl Into<String>, number: i64) -> Self {
        Self {
            value: (label.into(), number),
        }
    }

    pub fn label(&self) -> &str {
        &self.value.0
    }

    pub fn number(&self) -> i64 {
        self.value.1
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn set_value(&mut self, value: Value) {
        self.value = value;
    }
}

impl From<Value> for Vertex {
    fn from(value: Value) -> Self {
        Self { value }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.value.0, self.value.1)
    }
}
