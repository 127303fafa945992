//! Small helpers shared by routes and services.
pub mod email;
pub mod httperror;
