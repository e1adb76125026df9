//! Common utilities module
//!
//! Shared error type for every pipeline stage.

pub mod error;

pub use error::{PipelineError, Result};
