//! Instrumented Redis cache for gradebook data
//!
//! Stores values under freshly generated UUID keys and records every store
//! call: a per-method counter plus input/output history lists, replayable
//! on demand. Backed by a deadpool-managed Redis connection pool.

pub mod cache;
pub mod error;
pub mod value;

mod record;

pub use cache::{Cache, CacheConfig};
pub use error::CacheError;
pub use record::CallReport;
pub use value::CacheValue;

// Re-export the workspace error for callers that unify error handling
pub use gradebook_common::{GradebookError, Result};
