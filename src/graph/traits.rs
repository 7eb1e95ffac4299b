use std::fmt::Debug;

use num_traits::Zero;

/// Bound alias for edge costs.
///
/// `Zero` brings `Add` along with the additive identity, which is all the
/// relaxation step needs. Integer costs are the expected instantiation;
/// correctness requires every cost to be non-negative.
pub trait Cost: Copy + Ord + Debug + Zero {}

impl<T> Cost for T where T: Copy + Ord + Debug + Zero {}

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Cost,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in
    /// insertion order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's at least one edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the cost of the first inserted edge between the two vertices,
    /// if any exists
    fn edge_cost(&self, from: usize, to: usize) -> Option<W>;
}
