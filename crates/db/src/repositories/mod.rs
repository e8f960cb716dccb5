//! Repository layer.

pub mod movie_repo;

pub use movie_repo::MovieRepo;
