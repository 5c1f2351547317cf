//! Append-ordered movie store.

use crate::domain::{Movie, MovieHandle, MovieId};

/// The single owner of all movie records.
///
/// Movies are appended in arrival order and never removed. Adding a movie
/// mints a [`MovieHandle`] that indexes this store; other structures hold
/// handles rather than copies, so a rental-state change made here is visible
/// through every view. Lookups by identifier or title scan in append order
/// and return the first match.
#[derive(Debug, Default)]
pub struct MovieCatalog {
    movies: Vec<Movie>,
}

impl MovieCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self { movies: Vec::new() }
    }

    /// Appends a movie and returns its handle.
    pub fn add(&mut self, id: MovieId, title: String, genre: String) -> MovieHandle {
        let handle = MovieHandle::new(self.movies.len());
        self.movies.push(Movie::new(id, title, genre));
        handle
    }

    /// Finds the first movie (in append order) with the given identifier.
    #[must_use]
    pub fn find(&self, id: MovieId) -> Option<MovieHandle> {
        self.movies
            .iter()
            .position(|movie| movie.id() == id)
            .map(MovieHandle::new)
    }

    /// Finds the first movie (in append order) with exactly the given title.
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<MovieHandle> {
        self.movies
            .iter()
            .position(|movie| movie.title() == title)
            .map(MovieHandle::new)
    }

    /// Returns the movie behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not produced by this catalog.
    #[must_use]
    pub fn get(&self, handle: MovieHandle) -> &Movie {
        &self.movies[handle.index()]
    }

    /// Returns the movie behind a handle, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not produced by this catalog.
    #[must_use]
    pub fn get_mut(&mut self, handle: MovieHandle) -> &mut Movie {
        &mut self.movies[handle.index()]
    }

    /// Iterates over all movies in append order.
    pub fn iter(&self) -> impl Iterator<Item = &Movie> + '_ {
        self.movies.iter()
    }

    /// Returns the number of movies in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether the catalog holds no movies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> MovieCatalog {
        let mut catalog = MovieCatalog::new();
        catalog.add(MovieId::new(10), "Matrix".to_string(), "SciFi".to_string());
        catalog.add(MovieId::new(11), "Up".to_string(), "Comedy".to_string());
        catalog
    }

    #[test]
    fn handles_resolve_to_their_movies() {
        let mut catalog = MovieCatalog::new();
        let handle = catalog.add(MovieId::new(10), "Matrix".to_string(), "SciFi".to_string());

        assert_eq!(catalog.get(handle).title(), "Matrix");
    }

    #[test]
    fn find_scans_in_append_order() {
        let catalog = seeded();
        let handle = catalog.find(MovieId::new(11)).unwrap();
        assert_eq!(catalog.get(handle).title(), "Up");
        assert!(catalog.find(MovieId::new(99)).is_none());
    }

    #[test]
    fn duplicate_title_resolves_to_first_entry() {
        let mut catalog = seeded();
        catalog.add(MovieId::new(12), "Matrix".to_string(), "Action".to_string());

        let handle = catalog.find_by_title("Matrix").unwrap();
        assert_eq!(catalog.get(handle).id(), MovieId::new(10));
    }

    #[test]
    fn mutation_through_handle_is_shared() {
        let mut catalog = seeded();
        let handle = catalog.find(MovieId::new(10)).unwrap();

        catalog.get_mut(handle).set_rented(true);

        let again = catalog.find(MovieId::new(10)).unwrap();
        assert!(catalog.get(again).is_rented());
    }
}
