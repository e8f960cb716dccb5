//! Domain types and validation rules for the movie catalog.
//!
//! Nothing in this crate touches the network; the database and HTTP layers depend
//! on it for the shared error taxonomy and the field rules applied to
//! incoming movie payloads.

pub mod config;
pub mod error;
pub mod movie;
pub mod types;
