//! Data Transfer Objects for the analysis service wire protocol
//!
//! This module contains the JSON shapes the remote analysis service actually
//! speaks, kept separate from the domain types the rest of the code reasons
//! about.

pub mod status;

pub use status::StatusResponse;
