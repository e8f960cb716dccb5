pub mod health;
pub mod movie;
pub mod root;
