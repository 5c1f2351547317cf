//! The rental desk session.
//!
//! [`Desk`] owns every working structure of one session and is the only
//! place where they are mutated together. It holds no globals, so several
//! independent desks can coexist in one process.

use std::collections::BTreeSet;

use thiserror::Error;
use tracing::instrument;

use crate::{
    domain::{Customer, CustomerId, Movie, MovieId, RentalRecord, RentalRequest},
    store::{
        CustomerRegistry, FriendGraph, GenreIndex, MovieCatalog, RentalHistory, RentalQueue,
    },
};

/// Errors that can occur when processing the next rental request.
///
/// Except for [`QueueEmpty`](Self::QueueEmpty), the failing request has
/// already been removed from the queue when the error is returned. Failed
/// requests are not retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProcessError {
    /// No requests are waiting.
    #[error("no pending rental requests")]
    QueueEmpty,
    /// The customer on the request is not registered.
    #[error("customer {0} not found")]
    CustomerNotFound(CustomerId),
    /// The movie on the request is not in the catalog.
    #[error("movie {0} not found")]
    MovieNotFound(MovieId),
    /// The movie is already checked out.
    #[error("{title} is already rented")]
    AlreadyRented {
        /// Identifier of the movie on the request.
        movie: MovieId,
        /// Title of the movie on the request.
        title: String,
    },
}

/// Errors that can occur when undoing the most recent rental.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UndoError {
    /// There is nothing in the history to undo.
    #[error("no rentals to undo")]
    HistoryEmpty,
}

/// Errors that can occur when computing recommendations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecommendError {
    /// The customer is not registered.
    #[error("customer {0} not found")]
    CustomerNotFound(CustomerId),
    /// The customer has no friend connections.
    #[error("customer {0} has no friends yet")]
    NoFriends(CustomerId),
    /// The customer has friends, but none of them have rented anything.
    #[error("friends of customer {0} have not rented any movies")]
    NothingRented(CustomerId),
}

/// Result of undoing the most recent rental.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Undone {
    /// The record removed from the history.
    pub record: RentalRecord,
    /// The movie made available again, when the recorded title still matched
    /// a catalog entry. `None` means the record was consumed without touching
    /// the catalog.
    pub restored: Option<MovieId>,
}

/// One rental desk session.
///
/// The desk owns the customer registry, the movie catalog, the genre index,
/// the friendship graph, the request queue, and the rental history, and keeps
/// them consistent: adding a movie files its handle in the genre index, and
/// registering a customer creates their graph node. All operations run
/// single-threaded through `&mut self`.
#[derive(Debug, Default)]
pub struct Desk {
    registry: CustomerRegistry,
    catalog: MovieCatalog,
    genres: GenreIndex,
    friends: FriendGraph,
    queue: RentalQueue,
    history: RentalHistory,
}

impl Desk {
    /// Creates an empty session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            registry: CustomerRegistry::new(),
            catalog: MovieCatalog::new(),
            genres: GenreIndex::new(),
            friends: FriendGraph::new(),
            queue: RentalQueue::new(),
            history: RentalHistory::new(),
        }
    }

    /// Registers a customer and creates their node in the friendship graph.
    ///
    /// Identifiers are not checked for uniqueness; see
    /// [`CustomerRegistry`] for how duplicates resolve.
    pub fn add_customer(&mut self, id: CustomerId, name: String) -> &Customer {
        self.friends.add_customer(id);
        self.registry.add(id, name)
    }

    /// Adds a movie to the catalog and files it under its genre.
    pub fn add_movie(&mut self, id: MovieId, title: String, genre: String) -> &Movie {
        let handle = self.catalog.add(id, title, genre);
        let movie = self.catalog.get(handle);
        self.genres.insert(movie.genre(), handle);
        movie
    }

    /// Looks up a customer by identifier.
    #[must_use]
    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.registry.find(id)
    }

    /// Looks up a movie by identifier.
    #[must_use]
    pub fn movie(&self, id: MovieId) -> Option<&Movie> {
        self.catalog.find(id).map(|handle| self.catalog.get(handle))
    }

    /// Iterates over all customers, most recently registered first.
    pub fn customers(&self) -> impl Iterator<Item = &Customer> + '_ {
        self.registry.iter()
    }

    /// Iterates over all movies in catalog order.
    pub fn movies(&self) -> impl Iterator<Item = &Movie> + '_ {
        self.catalog.iter()
    }

    /// Walks the genre index in order, resolving each bucket to its movies.
    pub fn movies_by_genre(&self) -> impl Iterator<Item = (&str, Vec<&Movie>)> + '_ {
        self.genres.iter().map(|(genre, handles)| {
            let movies = handles
                .iter()
                .map(|&handle| self.catalog.get(handle))
                .collect();
            (genre, movies)
        })
    }

    /// Connects two customers in the friendship graph.
    ///
    /// Unregistered identifiers are accepted and get graph nodes of their
    /// own; see [`FriendGraph::add_connection`].
    pub fn connect(&mut self, a: CustomerId, b: CustomerId) {
        self.friends.add_connection(a, b);
    }

    /// Returns the friends of a customer, empty for unknown identifiers.
    #[must_use]
    pub fn friends_of(&self, id: CustomerId) -> &[CustomerId] {
        self.friends.neighbors(id)
    }

    /// Queues a rental request without validating it.
    pub fn enqueue_rental(&mut self, customer: CustomerId, movie: MovieId) {
        self.queue.enqueue(RentalRequest::new(customer, movie));
    }

    /// Returns the number of requests waiting in the queue.
    #[must_use]
    pub fn pending_requests(&self) -> usize {
        self.queue.len()
    }

    /// Processes the oldest rental request.
    ///
    /// The request is dequeued before any validation, so a failed attempt
    /// consumes it; the next call moves on to the following request. On
    /// success the movie is marked rented and the returned record has been
    /// pushed onto the history.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::QueueEmpty`] when nothing is queued, and the
    /// lookup and availability errors described on [`ProcessError`] for a
    /// request that fails validation.
    #[instrument(skip(self))]
    pub fn process_next(&mut self) -> Result<RentalRecord, ProcessError> {
        let request = self.queue.dequeue().ok_or(ProcessError::QueueEmpty)?;

        let customer = self
            .registry
            .find(request.customer)
            .ok_or(ProcessError::CustomerNotFound(request.customer))?
            .name()
            .to_string();
        let handle = self
            .catalog
            .find(request.movie)
            .ok_or(ProcessError::MovieNotFound(request.movie))?;

        let movie = self.catalog.get_mut(handle);
        if movie.is_rented() {
            return Err(ProcessError::AlreadyRented {
                movie: request.movie,
                title: movie.title().to_string(),
            });
        }
        movie.set_rented(true);

        let record = RentalRecord::new(customer, movie.title().to_string());
        self.history.push(record.clone());
        Ok(record)
    }

    /// Undoes the most recent rental.
    ///
    /// Pops the top history record and makes the first catalog movie with
    /// exactly the recorded title available again. When no title matches, the
    /// record is still consumed and `restored` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`UndoError::HistoryEmpty`] when there is nothing to undo.
    #[instrument(skip(self))]
    pub fn undo_last(&mut self) -> Result<Undone, UndoError> {
        let record = self.history.pop().ok_or(UndoError::HistoryEmpty)?;

        let restored = self.catalog.find_by_title(record.title()).map(|handle| {
            let movie = self.catalog.get_mut(handle);
            movie.set_rented(false);
            movie.id()
        });

        Ok(Undone { record, restored })
    }

    /// Collects the titles rented by a customer's friends.
    ///
    /// Friends that do not resolve to a registered customer are skipped. A
    /// history record counts when its customer name equals the friend's name.
    /// The result is a set: duplicates collapse and no ordering beyond that
    /// of the set itself is promised.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::CustomerNotFound`] for an unregistered
    /// customer, [`RecommendError::NoFriends`] when the customer has no
    /// connections, and [`RecommendError::NothingRented`] when the scan turns
    /// up no titles. A successful result is never empty.
    #[instrument(skip(self))]
    pub fn recommendations_for(
        &self,
        id: CustomerId,
    ) -> Result<BTreeSet<String>, RecommendError> {
        if self.registry.find(id).is_none() {
            return Err(RecommendError::CustomerNotFound(id));
        }

        let friends = self.friends.neighbors(id);
        if friends.is_empty() {
            return Err(RecommendError::NoFriends(id));
        }

        let mut titles = BTreeSet::new();
        for &friend in friends {
            let Some(friend) = self.registry.find(friend) else {
                continue;
            };
            for record in self.history.iter_recent() {
                if record.customer() == friend.name() {
                    titles.insert(record.title().to_string());
                }
            }
        }

        if titles.is_empty() {
            return Err(RecommendError::NothingRented(id));
        }
        Ok(titles)
    }

    /// Iterates over the rental history, most recent first.
    pub fn history(&self) -> impl Iterator<Item = &RentalRecord> + '_ {
        self.history.iter_recent()
    }

    /// Returns the genre index, for rendering and inspection.
    #[must_use]
    pub const fn genre_index(&self) -> &GenreIndex {
        &self.genres
    }

    /// Returns the friendship graph, for rendering and inspection.
    #[must_use]
    pub const fn friend_graph(&self) -> &FriendGraph {
        &self.friends
    }

    /// Returns the movie catalog, for rendering and inspection.
    #[must_use]
    pub const fn catalog(&self) -> &MovieCatalog {
        &self.catalog
    }

    /// Returns the customer registry, for rendering and inspection.
    #[must_use]
    pub const fn registry(&self) -> &CustomerRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desk_with_alice_and_matrix() -> Desk {
        let mut desk = Desk::new();
        desk.add_customer(CustomerId::new(1), "Alice".to_string());
        desk.add_movie(MovieId::new(10), "Matrix".to_string(), "SciFi".to_string());
        desk
    }

    #[test]
    fn processing_rents_the_movie_and_records_history() {
        let mut desk = desk_with_alice_and_matrix();
        desk.enqueue_rental(CustomerId::new(1), MovieId::new(10));

        let record = desk.process_next().unwrap();
        assert_eq!(record.to_string(), "Alice rented Matrix");
        assert!(desk.movie(MovieId::new(10)).unwrap().is_rented());

        let history: Vec<_> = desk.history().collect();
        assert_eq!(history, [&record]);
    }

    #[test]
    fn processing_an_empty_queue_changes_nothing() {
        let mut desk = desk_with_alice_and_matrix();

        assert_eq!(desk.process_next(), Err(ProcessError::QueueEmpty));
        assert!(!desk.movie(MovieId::new(10)).unwrap().is_rented());
        assert_eq!(desk.history().count(), 0);
    }

    #[test]
    fn failed_request_is_consumed() {
        let mut desk = desk_with_alice_and_matrix();
        desk.enqueue_rental(CustomerId::new(99), MovieId::new(10));
        desk.enqueue_rental(CustomerId::new(1), MovieId::new(10));

        assert_eq!(
            desk.process_next(),
            Err(ProcessError::CustomerNotFound(CustomerId::new(99)))
        );
        // The bad request is gone; the next call reaches the good one.
        assert!(desk.process_next().is_ok());
        assert_eq!(desk.process_next(), Err(ProcessError::QueueEmpty));
    }

    #[test]
    fn unknown_movie_is_reported_and_consumed() {
        let mut desk = desk_with_alice_and_matrix();
        desk.enqueue_rental(CustomerId::new(1), MovieId::new(77));

        assert_eq!(
            desk.process_next(),
            Err(ProcessError::MovieNotFound(MovieId::new(77)))
        );
        assert_eq!(desk.pending_requests(), 0);
    }

    #[test]
    fn renting_a_rented_movie_fails() {
        let mut desk = desk_with_alice_and_matrix();
        desk.add_customer(CustomerId::new(2), "Bob".to_string());
        desk.enqueue_rental(CustomerId::new(1), MovieId::new(10));
        desk.enqueue_rental(CustomerId::new(2), MovieId::new(10));

        desk.process_next().unwrap();
        assert_eq!(
            desk.process_next(),
            Err(ProcessError::AlreadyRented {
                movie: MovieId::new(10),
                title: "Matrix".to_string(),
            })
        );
        // Still rented by Alice, and only her rental is on record.
        assert!(desk.movie(MovieId::new(10)).unwrap().is_rented());
        assert_eq!(desk.history().count(), 1);
    }

    #[test]
    fn undo_restores_the_movie_and_pops_history() {
        let mut desk = desk_with_alice_and_matrix();
        desk.enqueue_rental(CustomerId::new(1), MovieId::new(10));
        desk.process_next().unwrap();

        let undone = desk.undo_last().unwrap();
        assert_eq!(undone.record.to_string(), "Alice rented Matrix");
        assert_eq!(undone.restored, Some(MovieId::new(10)));
        assert!(!desk.movie(MovieId::new(10)).unwrap().is_rented());

        assert_eq!(desk.undo_last(), Err(UndoError::HistoryEmpty));
    }

    // Undo scans by title, not by identifier: with two copies of a title in
    // the catalog, the first one entered is the one restored, even when the
    // rental actually went to the second.
    #[test]
    fn undo_with_duplicate_titles_restores_the_first_catalog_entry() {
        let mut desk = Desk::new();
        desk.add_customer(CustomerId::new(1), "Alice".to_string());
        desk.add_movie(MovieId::new(10), "Matrix".to_string(), "SciFi".to_string());
        desk.add_movie(MovieId::new(11), "Matrix".to_string(), "Action".to_string());

        desk.enqueue_rental(CustomerId::new(1), MovieId::new(11));
        desk.process_next().unwrap();
        assert!(desk.movie(MovieId::new(11)).unwrap().is_rented());

        let undone = desk.undo_last().unwrap();
        assert_eq!(undone.restored, Some(MovieId::new(10)));
        // The copy that was actually rented stays rented.
        let movies: Vec<_> = desk.movies().collect();
        assert!(!movies[0].is_rented());
        assert!(movies[1].is_rented());
    }

    // Undo consumes the record even when no catalog title matches it.
    #[test]
    fn undo_without_a_matching_title_restores_nothing() {
        let mut desk = desk_with_alice_and_matrix();
        desk.history
            .push(RentalRecord::new("Alice".to_string(), "Gone".to_string()));

        let undone = desk.undo_last().unwrap();
        assert_eq!(undone.record.title(), "Gone");
        assert_eq!(undone.restored, None);
        assert!(!desk.movie(MovieId::new(10)).unwrap().is_rented());
        assert_eq!(desk.history().count(), 0);
    }

    #[test]
    fn recommendations_collect_friend_rentals_as_a_set() {
        let mut desk = Desk::new();
        desk.add_customer(CustomerId::new(1), "Alice".to_string());
        desk.add_customer(CustomerId::new(2), "Bob".to_string());
        desk.add_movie(MovieId::new(10), "Matrix".to_string(), "SciFi".to_string());
        desk.connect(CustomerId::new(1), CustomerId::new(2));

        desk.enqueue_rental(CustomerId::new(1), MovieId::new(10));
        desk.process_next().unwrap();

        let titles = desk.recommendations_for(CustomerId::new(2)).unwrap();
        assert_eq!(titles, BTreeSet::from(["Matrix".to_string()]));
    }

    #[test]
    fn recommendation_errors_cover_each_report() {
        let mut desk = Desk::new();
        desk.add_customer(CustomerId::new(1), "Alice".to_string());
        desk.add_customer(CustomerId::new(2), "Bob".to_string());

        assert_eq!(
            desk.recommendations_for(CustomerId::new(9)),
            Err(RecommendError::CustomerNotFound(CustomerId::new(9)))
        );
        assert_eq!(
            desk.recommendations_for(CustomerId::new(1)),
            Err(RecommendError::NoFriends(CustomerId::new(1)))
        );

        desk.connect(CustomerId::new(1), CustomerId::new(2));
        assert_eq!(
            desk.recommendations_for(CustomerId::new(1)),
            Err(RecommendError::NothingRented(CustomerId::new(1)))
        );
    }

    #[test]
    fn unresolved_friends_are_skipped() {
        let mut desk = desk_with_alice_and_matrix();
        // Connect Alice to an id nobody registered.
        desk.connect(CustomerId::new(1), CustomerId::new(42));

        desk.enqueue_rental(CustomerId::new(1), MovieId::new(10));
        desk.process_next().unwrap();

        // Id 42 has Alice as its only friend, and Alice has rented.
        let titles = desk.recommendations_for(CustomerId::new(42));
        // 42 is not registered, so the lookup itself fails first.
        assert_eq!(
            titles,
            Err(RecommendError::CustomerNotFound(CustomerId::new(42)))
        );

        // Alice's only friend is unregistered, so nothing counts as rented.
        assert_eq!(
            desk.recommendations_for(CustomerId::new(1)),
            Err(RecommendError::NothingRented(CustomerId::new(1)))
        );
    }

    #[test]
    fn adding_a_customer_creates_their_graph_node() {
        let desk = desk_with_alice_and_matrix();
        assert!(desk.friend_graph().contains(CustomerId::new(1)));
        assert!(desk.friends_of(CustomerId::new(1)).is_empty());
    }

    #[test]
    fn genre_view_shares_rental_state_with_the_catalog() {
        let mut desk = desk_with_alice_and_matrix();
        desk.enqueue_rental(CustomerId::new(1), MovieId::new(10));
        desk.process_next().unwrap();

        let by_genre: Vec<_> = desk.movies_by_genre().collect();
        let (genre, movies) = &by_genre[0];
        assert_eq!(*genre, "SciFi");
        assert!(movies[0].is_rented());
    }
}
