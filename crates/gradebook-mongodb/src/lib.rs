//! MongoDB helpers for gradebook
//!
//! This crate wraps the `mongodb` driver with the small set of collection
//! operations the gradebook platform needs:
//!
//! - connection management with pool configuration and health checking
//! - the top-students aggregation (average topic score, ranked descending)
//! - full-collection listing and counting
//!
//! Documents are handled untyped as [`bson::Document`]; their schema belongs
//! to the store, not to this crate.

pub mod aggregation;
pub mod connection;
pub mod listing;

pub use aggregation::{top_students, top_students_pipeline};
pub use connection::{Connection, PoolConfig};
pub use gradebook_common::{GradebookError, Result};
pub use listing::{count_all, list_all};
