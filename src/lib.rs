//! Northwind Mapping Harness
//!
//! Shared test infrastructure for exercising relational mapping overrides
//! against a seeded Northwind-style dataset. The harness owns the pieces the
//! mapping tests share: the entity field catalogs, a declarative override
//! layer compiled into an immutable mapping snapshot, and a fixture that
//! provisions the seeded store and hands out read-only query contexts.
//!
//! # Overview
//!
//! The harness consists of four main components:
//! - **Mapping override layer**: plain-data rules (keep, rename, exclude) per
//!   field, validated when compiled into an [`mapping::EntityMapping`]
//! - **SharedFixture**: class-scoped owner of the seeded store and compiled
//!   [`mapping::MappingModel`], minting per-test contexts
//! - **QueryContext**: short-lived, read-only handle executing lazy queries
//!   over the mapped record shapes
//! - **Seed dataset**: deterministic reference data with fixed cardinalities
//!   (91 customers, 9 employees, 830 orders)
//!
//! # Usage
//!
//! ```rust,ignore
//! use northwind_harness::fixture::SharedFixture;
//! use northwind_harness::model::MappedEmployee;
//!
//! #[tokio::test]
//! async fn all_employees() -> Result<(), northwind_harness::error::HarnessError> {
//!     let fixture = SharedFixture::initialize("").await?;
//!     let context = fixture.create_context();
//!
//!     let employees = context.query::<MappedEmployee>().all().await?;
//!     assert_eq!(employees.len(), 9);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod fixture;
pub mod mapping;
pub mod model;
pub mod seed;
pub mod sql_log;
