pub mod catalog;
pub mod desk;
pub mod friends;
/// Genre tree and its in-order walk.
pub mod genre;
pub mod history;
pub mod queue;
pub mod registry;

pub use catalog::MovieCatalog;
pub use desk::{Desk, ProcessError, RecommendError, UndoError, Undone};
pub use friends::FriendGraph;
pub use genre::{GenreIndex, GenreNode};
pub use history::RentalHistory;
pub use queue::RentalQueue;
pub use registry::CustomerRegistry;
