//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization plus a `create_*`
//! convenience function for quick default creation. Factories insert directly
//! through SeaORM active models, bypassing validation, so tests can also set
//! up states the API would reject.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!     let boat = factory::boat::create_boat(db, "auth0|captain").await?;
//!     let load = factory::load::create_load(db).await?;
//!     Ok(())
//! }
//! ```

pub mod boat;
pub mod helpers;
pub mod load;
