use std::{fmt, str::FromStr};

use crate::domain::{CustomerId, MovieId};

/// A pending request for one customer to rent one movie.
///
/// Requests are accepted without validation and sit in the rental queue until
/// processed. Processing consumes the request whether or not it succeeds, so
/// each request is attempted at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalRequest {
    /// The customer asking to rent.
    pub customer: CustomerId,
    /// The movie being asked for.
    pub movie: MovieId,
}

impl RentalRequest {
    /// Creates a request pairing a customer with a movie.
    #[must_use]
    pub const fn new(customer: CustomerId, movie: MovieId) -> Self {
        Self { customer, movie }
    }
}

impl fmt::Display for RentalRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Request: Customer {} wants Movie {}", self.customer, self.movie)
    }
}

/// A completed rental, as remembered by the history stack.
///
/// Records are stored structured but render as the line
/// `<customer> rented <title>`, which is also the format [`FromStr`] accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalRecord {
    customer: String,
    title: String,
}

impl RentalRecord {
    /// Creates a record of `customer` renting `title`.
    #[must_use]
    pub const fn new(customer: String, title: String) -> Self {
        Self { customer, title }
    }

    /// Returns the name of the customer who rented.
    #[must_use]
    pub fn customer(&self) -> &str {
        &self.customer
    }

    /// Returns the title that was rented.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl fmt::Display for RentalRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} rented {}", self.customer, self.title)
    }
}

/// Error returned when a string is not of the form `<customer> rented <title>`.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("not a rental record: '{0}' (expected '<customer> rented <title>')")]
pub struct ParseRecordError(String);

impl FromStr for RentalRecord {
    type Err = ParseRecordError;

    /// Splits on the first occurrence of `" rented "`.
    ///
    /// A customer name that itself contains `" rented "` therefore parses at
    /// the wrong point. The split rule is kept for compatibility with the
    /// rendered form; code that has a [`RentalRecord`] in hand should read the
    /// structured fields instead of re-parsing the display line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (customer, title) = s
            .split_once(" rented ")
            .ok_or_else(|| ParseRecordError(s.to_string()))?;
        Ok(Self::new(customer.to_string(), title.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_display_format() {
        let request = RentalRequest::new(CustomerId::new(1), MovieId::new(10));
        assert_eq!(request.to_string(), "Request: Customer 1 wants Movie 10");
    }

    #[test]
    fn record_round_trips_through_display() {
        let record = RentalRecord::new("Alice".to_string(), "Matrix".to_string());
        let line = record.to_string();
        assert_eq!(line, "Alice rented Matrix");
        assert_eq!(line.parse::<RentalRecord>().unwrap(), record);
    }

    #[test]
    fn parse_splits_on_first_marker() {
        // A title containing the marker survives: only the first occurrence
        // splits.
        let record: RentalRecord = "Alice rented The One They Rented".parse().unwrap();
        assert_eq!(record.customer(), "Alice");
        assert_eq!(record.title(), "The One They Rented");

        // A customer name containing the marker does not: the first
        // occurrence wins regardless of which side it came from.
        let record: RentalRecord = "A rented B rented Matrix".parse().unwrap();
        assert_eq!(record.customer(), "A");
        assert_eq!(record.title(), "B rented Matrix");
    }

    #[test]
    fn parse_rejects_lines_without_marker() {
        assert!("Alice returned Matrix".parse::<RentalRecord>().is_err());
    }
}
