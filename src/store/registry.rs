//! Customer registry with head insertion.

use std::collections::VecDeque;

use crate::domain::{Customer, CustomerId};

/// The set of registered customers.
///
/// New customers are inserted at the head, so iteration runs from the most
/// recently added to the oldest. Identifiers are not checked for uniqueness:
/// registering an identifier twice leaves both entries in place, and
/// [`find`](Self::find) resolves the identifier to the most recent one.
#[derive(Debug, Default)]
pub struct CustomerRegistry {
    customers: VecDeque<Customer>,
}

impl CustomerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            customers: VecDeque::new(),
        }
    }

    /// Registers a customer at the head of the registry.
    pub fn add(&mut self, id: CustomerId, name: String) -> &Customer {
        self.customers.push_front(Customer::new(id, name));
        &self.customers[0]
    }

    /// Finds a customer by identifier.
    ///
    /// The scan runs head-first, so a duplicated identifier resolves to the
    /// customer registered most recently.
    #[must_use]
    pub fn find(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id() == id)
    }

    /// Iterates over all customers, most recently registered first.
    pub fn iter(&self) -> impl Iterator<Item = &Customer> + '_ {
        self.customers.iter()
    }

    /// Returns the number of registered customers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Whether the registry holds no customers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
