//! MongoDB sink for generated datasets.
//!
//! The [`Seeder`] clears the existing collections and inserts each generated
//! record sequentially, preserving input order.

mod seeder;

pub use seeder::{SeedError, Seeder};
