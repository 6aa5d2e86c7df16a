//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let (initiator, category, event) = factory::helpers::create_event_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let event = factory::event::EventFactory::new(&db, initiator.id, category.id)
//!     .state(EventState::Published)
//!     .participant_limit(10)
//!     .build()
//!     .await?;
//! ```

pub mod category;
pub mod comment;
pub mod compilation;
pub mod event;
pub mod helpers;
pub mod location;
pub mod rating;
pub mod request;
pub mod user;

pub use category::create_category;
pub use comment::create_comment;
pub use compilation::create_compilation;
pub use event::{create_event, create_published_event};
pub use location::create_location;
pub use rating::create_rating;
pub use request::create_request;
pub use user::create_user;
