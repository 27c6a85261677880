//! Marina Test Utils
//!
//! Shared testing utilities for building unit and integration tests for the
//! marina API. This crate offers a builder pattern for creating test contexts
//! with in-memory SQLite databases plus entity factories with sensible
//! defaults.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_boat_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_cargo_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
