//! Storage abstraction and seed data for CareerPath.
//!
//! This crate provides a trait-based interface for loading the goal
//! collection and question bank, a JSON file implementation, and the
//! built-in sample data.

#![warn(missing_docs)]

pub mod trait_;
pub mod json_storage;
pub mod seed;

pub use trait_::{Storage, StorageError, Result};
pub use json_storage::JsonStorage;
