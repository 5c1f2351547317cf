//! Domain models for the rental desk.
//!
//! This module contains the core domain types: customers, movies and their
//! catalog handles, and the request/record pair that the rental workflow
//! passes between its queue and its history stack.

/// Customer identity and display.
pub mod customer;
pub use customer::{Customer, CustomerId};

/// Movies, their identifiers, and catalog handles.
pub mod movie;
pub use movie::{Movie, MovieHandle, MovieId};

/// Rental requests and history records.
pub mod record;
pub use record::{ParseRecordError, RentalRecord, RentalRequest};
