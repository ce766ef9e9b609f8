//! Free functions working on any graph variant.
//!
//! They only forward to the variant and collapse refusals into `false`,
//! so call sites need not know which variant they hold.
use crate::graph::*;
use std::io::{self, Write};

pub fn add<G: GrowableGraph>(g: &mut G, v: &Vertex) -> bool {
    g.add(v).is_ok()
}

pub fn add_edge<G: GrowableGraph>(g: &mut G, u: &Vertex, v: &Vertex) -> bool {
    g.add_edge(u, v).is_ok()
}

pub fn add_edge_object<G: GrowableGraph>(g: &mut G, edge: Edge) -> bool {
    g.insert_edge(edge).is_ok()
}

/// Returns the number of entries dropped.
pub fn remove<G: ShrinkableGraph>(g: &mut G, v: &Vertex) -> usize {
    g.remove(v)
}

pub fn adjacent<G: QueryableGraph>(g: &G, u: &Vertex, v: &Vertex) -> bool {
    g.are_adjacent(u, v)
}

pub fn neighbors<G: QueryableGraph>(g: &G, v: &Vertex) -> Vec<Vertex> {
    g.get_neighbors(v)
}

pub fn count_vertices<G: QueryableGraph>(g: &G) -> usize {
    g.vertex_count()
}

pub fn count_edges<G: QueryableGraph>(g: &G) -> usize {
    g.edge_count()
}

pub fn value<T: Valued>(x: &T) -> T::Output {
    x.value()
}

pub fn set_value<T: Valued>(x: &mut T, value: Value) {
    x.set_value(value)
}

pub fn top<G: QueryableGraph>(g: &G) -> Option<Vertex> {
    g.top()
}

/// Writes the rendering of `g` to stdout.
pub fn print<G: QueryableGraph>(g: &G) -> io::Result<()> {
    print_to(g, &mut io::stdout().lock())
}

pub fn print_to<G: QueryableGraph, W: Write>(g: &G, out: &mut W) -> io::Result<()> {
    write!(out, "{}", g)?;
    out.flush()
}
