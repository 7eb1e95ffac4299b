use crate::graph::traits::{Cost, Graph};
use crate::{Error, Result};

/// A weighted multigraph over a fixed vertex set, stored as adjacency lists.
///
/// The vertex set is fixed at construction; edges are appended one at a time
/// or in bulk, either directed or undirected. Parallel edges between the same
/// pair of vertices are kept separately. Once built, the graph is read-only
/// from the engine's perspective, so concurrent queries over a shared
/// reference are safe.
#[derive(Debug, Clone)]
pub struct WeightedGraph<W>
where
    W: Cost,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Outgoing edges for each vertex: adjacency[from] = [(to, cost)]
    adjacency: Vec<Vec<(usize, W)>>,

    /// Running edge count; an undirected insertion counts twice
    edge_count: usize,
}

impl<W> WeightedGraph<W>
where
    W: Cost,
{
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// A vertex count of zero yields a trivially empty graph.
    pub fn new(vertex_count: usize) -> Self {
        WeightedGraph {
            vertex_count,
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Appends a directed edge to `from`'s adjacency list.
    ///
    /// Fails fast on an out-of-range endpoint or a negative cost, leaving
    /// the adjacency storage untouched.
    pub fn add_edge(&mut self, from: usize, to: usize, cost: W) -> Result<()> {
        if from >= self.vertex_count {
            return Err(Error::InvalidVertex(from));
        }
        if to >= self.vertex_count {
            return Err(Error::InvalidVertex(to));
        }
        if cost < W::zero() {
            return Err(Error::NegativeCost(format!("{:?}", cost)));
        }

        self.adjacency[from].push((to, cost));
        self.edge_count += 1;
        Ok(())
    }

    /// Applies [`add_edge`](Self::add_edge) to each `(from, to, cost)` triple
    /// in order.
    ///
    /// Stops at the first invalid triple; edges inserted before the failure
    /// remain in the graph.
    pub fn add_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        for (from, to, cost) in edges {
            self.add_edge(from, to, cost)?;
        }
        Ok(())
    }

    /// Inserts the triples exactly as given (alias for
    /// [`add_edges`](Self::add_edges)).
    pub fn add_directed<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        self.add_edges(edges)
    }

    /// Inserts each `(a, b, cost)` triple as the two directed edges
    /// `(a, b, cost)` and `(b, a, cost)`.
    ///
    /// The tracked edge count grows by two per logical undirected edge.
    pub fn add_undirected<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        for (a, b, cost) in edges {
            self.add_edge(a, b, cost)?;
            self.add_edge(b, a, cost)?;
        }
        Ok(())
    }
}

impl<W> Graph<W> for WeightedGraph<W>
where
    W: Cost,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.adjacency.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.adjacency
            .get(from)
            .map_or(false, |edges| edges.iter().any(|(target, _)| *target == to))
    }

    fn edge_cost(&self, from: usize, to: usize) -> Option<W> {
        self.adjacency.get(from).and_then(|edges| {
            edges
                .iter()
                .find(|(target, _)| *target == to)
                .map(|(_, cost)| *cost)
        })
    }
}
