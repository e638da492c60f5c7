//! Data Transfer Objects for API requests and responses.
//!
//! The list endpoint's query parameters live in
//! [`crate::validation::ListParams`] next to their validation rules.

pub mod bookmark;
pub mod health;
