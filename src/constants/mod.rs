//! Constants (primary environment variables/secrets) used across the application.
pub mod api;
pub mod books;
pub mod db;
pub mod passwords;
mod secrets;
