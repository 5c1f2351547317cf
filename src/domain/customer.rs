use std::{fmt, str::FromStr};

/// Numeric identifier of a customer.
///
/// Identifiers are supplied by the caller and are not checked for uniqueness.
/// When the same identifier is registered twice the registry resolves it to
/// the most recently added customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomerId(i64);

impl CustomerId {
    /// Creates an identifier from a raw integer.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for CustomerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CustomerId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A registered customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: CustomerId,
    name: String,
}

impl Customer {
    /// Creates a customer with the given identifier and display name.
    #[must_use]
    pub const fn new(id: CustomerId, name: String) -> Self {
        Self { id, name }
    }

    /// Returns the customer's identifier.
    #[must_use]
    pub const fn id(&self) -> CustomerId {
        self.id
    }

    /// Returns the customer's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Customer {}: {}", self.id, self.name)
    }
}
