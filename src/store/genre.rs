//! Binary search tree of genres.
//!
//! Each node keys one genre and carries the handles of every movie filed
//! under it, in insertion order. The tree is deliberately plain: no
//! rebalancing and no deletion, so inserting genres in sorted order degrades
//! it to a linked list. Genre comparison is byte-wise [`str`] ordering.

use std::cmp::Ordering;

use crate::domain::MovieHandle;

/// One node of the genre tree.
#[derive(Debug)]
pub struct GenreNode {
    genre: String,
    movies: Vec<MovieHandle>,
    left: Option<Box<GenreNode>>,
    right: Option<Box<GenreNode>>,
}

impl GenreNode {
    fn leaf(genre: String, movie: MovieHandle) -> Self {
        Self {
            genre,
            movies: vec![movie],
            left: None,
            right: None,
        }
    }

    /// Returns the genre this node keys.
    #[must_use]
    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Returns the handles filed under this genre, in insertion order.
    #[must_use]
    pub fn movies(&self) -> &[MovieHandle] {
        &self.movies
    }

    /// Returns the left child (genres ordered before this one).
    #[must_use]
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Returns the right child (genres ordered after this one).
    #[must_use]
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

/// An index of movies grouped by genre.
///
/// Insertion order of genres decides the shape of the tree; an in-order walk
/// always yields genres in ascending order regardless of shape.
#[derive(Debug, Default)]
pub struct GenreIndex {
    root: Option<Box<GenreNode>>,
}

impl GenreIndex {
    /// Creates an empty index.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Files a movie under a genre.
    ///
    /// An unseen genre becomes a new node holding just this movie; a known
    /// genre has the movie appended to its bucket.
    pub fn insert(&mut self, genre: &str, movie: MovieHandle) {
        let mut node = &mut self.root;
        while let Some(current) = node {
            match genre.cmp(current.genre()) {
                Ordering::Less => node = &mut current.left,
                Ordering::Greater => node = &mut current.right,
                Ordering::Equal => {
                    current.movies.push(movie);
                    return;
                }
            }
        }
        *node = Some(Box::new(GenreNode::leaf(genre.to_string(), movie)));
    }

    /// Returns the root node, for structural inspection.
    #[must_use]
    pub fn root(&self) -> Option<&GenreNode> {
        self.root.as_deref()
    }

    /// Whether the index holds no genres.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Walks the tree in order, yielding each genre and its bucket.
    ///
    /// Genres ascend; buckets keep their insertion order. The walk does not
    /// modify the tree, so repeating it yields the same sequence.
    pub fn iter(&self) -> InOrder<'_> {
        InOrder {
            stack: Vec::new(),
            next: self.root(),
        }
    }
}

/// In-order iterator over a [`GenreIndex`].
///
/// Uses an explicit stack of the nodes whose left subtrees have been entered
/// but not yet yielded.
#[derive(Debug)]
pub struct InOrder<'a> {
    stack: Vec<&'a GenreNode>,
    next: Option<&'a GenreNode>,
}

impl<'a> Iterator for InOrder<'a> {
    type Item = (&'a str, &'a [MovieHandle]);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.next {
            self.stack.push(node);
            self.next = node.left();
        }
        let node = self.stack.pop()?;
        self.next = node.right();
        Some((node.genre(), node.movies()))
    }
}
