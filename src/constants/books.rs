//! Constants for validating books listed by sellers.

/// The earliest publication year accepted for a newly listed book.
pub const BOOK_MIN_YEAR: i64 = 2020;
