use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue of `(priority, vertex)` entries over `BinaryHeap`.
///
/// Entries are popped in ascending priority order; ties are broken by vertex
/// index, which callers must not rely on. The queue is a per-query local
/// resource, allocated fresh for every traversal.
#[derive(Debug)]
pub struct BinaryHeapWrapper<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> BinaryHeapWrapper<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        BinaryHeapWrapper {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a vertex with the given priority
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes and returns the minimum-priority entry
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse((priority, vertex))| (vertex, priority))
    }
}

impl<V, P> Default for BinaryHeapWrapper<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
