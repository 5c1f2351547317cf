use std::{fmt, str::FromStr};

/// Numeric identifier of a movie.
///
/// Like customer identifiers, movie identifiers are caller-supplied and never
/// checked for uniqueness. Lookups resolve a duplicated identifier to the
/// earliest catalog entry carrying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MovieId(i64);

impl MovieId {
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

impl From<i64> for MovieId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MovieId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A stable handle to a movie held by a [`MovieCatalog`](crate::store::MovieCatalog).
///
/// Handles are minted by the catalog when a movie is added and index into its
/// backing store. The genre index holds handles rather than movie values, so
/// a rental-state change made through the catalog is observed by every index
/// that shares the handle. Movies are never removed, so a handle stays valid
/// for the life of the catalog that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MovieHandle(usize);

impl MovieHandle {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

/// A movie in the catalog.
///
/// The rental flag is the only mutable part of a movie and starts out clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    id: MovieId,
    title: String,
    genre: String,
    rented: bool,
}

impl Movie {
    /// Creates an available movie with the given identifier, title, and genre.
    #[must_use]
    pub const fn new(id: MovieId, title: String, genre: String) -> Self {
        Self {
            id,
            title,
            genre,
            rented: false,
        }
    }

    /// Returns the movie's identifier.
    #[must_use]
    pub const fn id(&self) -> MovieId {
        self.id
    }

    /// Returns the movie's title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the movie's genre.
    #[must_use]
    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Whether the movie is currently checked out.
    #[must_use]
    pub const fn is_rented(&self) -> bool {
        self.rented
    }

    /// Marks the movie as checked out or available.
    pub fn set_rented(&mut self, rented: bool) {
        self.rented = rented;
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let state = if self.rented { "RENTED" } else { "AVAILABLE" };
        write!(f, "Movie {}: {} ({}) [{state}]", self.id, self.title, self.genre)
    }
}
