//! Undirected friendship graph.

use std::collections::BTreeMap;

use crate::domain::CustomerId;

/// Adjacency lists of customer friendships.
///
/// Connections are symmetric appends: connecting `a` and `b` pushes each onto
/// the other's list. Nothing is deduplicated, so connecting the same pair
/// twice doubles the edge, and a self-connection appends the customer to its
/// own list twice. Neighbor lists preserve append order.
#[derive(Debug, Default)]
pub struct FriendGraph {
    adjacency: BTreeMap<CustomerId, Vec<CustomerId>>,
}

impl FriendGraph {
    /// Creates an empty graph.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }

    /// Ensures a node exists for the customer. A no-op when already present.
    pub fn add_customer(&mut self, id: CustomerId) {
        self.adjacency.entry(id).or_default();
    }

    /// Connects two customers, creating nodes for unknown identifiers.
    ///
    /// Never fails: identifiers need not be registered anywhere else.
    pub fn add_connection(&mut self, a: CustomerId, b: CustomerId) {
        self.adjacency.entry(a).or_default().push(b);
        self.adjacency.entry(b).or_default().push(a);
    }

    /// Returns the neighbor list of a customer, empty for unknown identifiers.
    #[must_use]
    pub fn neighbors(&self, id: CustomerId) -> &[CustomerId] {
        self.adjacency.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Whether the customer has a node in the graph.
    #[must_use]
    pub fn contains(&self, id: CustomerId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Iterates over all nodes in ascending identifier order.
    pub fn nodes(&self) -> impl Iterator<Item = (CustomerId, &[CustomerId])> + '_ {
        self.adjacency
            .iter()
            .map(|(id, neighbors)| (*id, neighbors.as_slice()))
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the graph holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
