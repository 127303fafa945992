//! Services which correspond to routes and define core business logic.
pub mod books;
pub mod sellers;
