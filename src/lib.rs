//! In-memory movie rental desk.
//!
//! Customers, a movie catalog, and the rental workflow state (request queue,
//! history stack, genre tree, friendship graph) held by a single [`Desk`]
//! session.

pub mod domain;
pub use domain::{Customer, CustomerId, Movie, MovieHandle, MovieId, RentalRecord, RentalRequest};

/// In-memory working structures and the desk session that owns them.
pub mod store;
pub use store::{Desk, ProcessError, RecommendError, UndoError, Undone};
