//! Common utilities for gradebook
//!
//! This crate provides the error type and result alias shared across all
//! gradebook modules.

pub mod error;

pub use error::{GradebookError, Result};
