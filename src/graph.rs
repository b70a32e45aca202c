//! Adjacency storage for undirected weighted graphs with a fixed vertex
//! range.
//!
//! Vertices are plain indices in `0..n`. Edge weights must be non-negative;
//! this is validated when an edge is added, so the algorithms in
//! [`algo`](crate::algo) never have to re-check it.

use crate::core::{
    error::{AddEdgeError, AddEdgeErrorKind},
    weight::Weight,
};

/// Undirected graph over vertices `0..n` with weighted edges.
///
/// Multi-edges and self-loops are allowed; shortest-path semantics take the
/// minimum over parallel edges, so they are harmless.
#[derive(Debug, Clone)]
pub struct WeightedGraph<W = f64> {
    adj: Vec<Vec<(usize, W)>>,
    edge_count: usize,
}

impl<W: Weight> WeightedGraph<W> {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Creates a graph with `vertex_count` vertices and the given
    /// `(u, v, weight)` edges, failing on the first invalid one.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, AddEdgeError>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::new(vertex_count);
        graph.extend_with_edges(edges)?;
        Ok(graph)
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.adj.len()
    }

    /// Adds an undirected edge between `u` and `v`.
    ///
    /// Fails if an endpoint is out of range or the weight is negative. The
    /// negativity check compiles away for unsigned weight types.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: W) -> Result<(), AddEdgeError> {
        if !self.contains_vertex(u) || !self.contains_vertex(v) {
            return Err(AddEdgeError::new(AddEdgeErrorKind::EndpointAbsent));
        }

        if !W::is_unsigned() && weight < W::zero() {
            return Err(AddEdgeError::new(AddEdgeErrorKind::NegativeWeight));
        }

        self.adj[u].push((v, weight.clone()));
        if u != v {
            self.adj[v].push((u, weight));
        }
        self.edge_count += 1;

        Ok(())
    }

    /// Adds all given `(u, v, weight)` edges, stopping at the first failure.
    pub fn extend_with_edges<I>(&mut self, edges: I) -> Result<(), AddEdgeError>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        for (u, v, weight) in edges {
            self.add_edge(u, v, weight)?;
        }
        Ok(())
    }

    /// The neighbors of `vertex` as `(neighbor, weight)` pairs, in
    /// insertion order. A self-loop appears once.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = (usize, &W)> + '_ {
        self.adj[vertex].iter().map(|(v, w)| (*v, w))
    }

    pub fn degree(&self, vertex: usize) -> usize {
        self.adj[vertex].len()
    }
}
