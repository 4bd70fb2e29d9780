//! Core domain types
//!
//! This module contains the domain structures shared between the HTTP client
//! and the CLI. These types represent the fundamental entities of the
//! analysis workflow: the document being analyzed, the key that correlates a
//! submission with later status polls, and the report that comes back.

pub mod document;
pub mod report;

pub use document::{Document, DocumentError, JobKey};
pub use report::{JobStatus, Report};
