//! Analyst Core
//!
//! Core types for the document analysis client.
//!
//! This crate contains:
//! - Domain types: the entities the client and CLI reason about
//!   (Document, JobKey, JobStatus, Report)
//! - DTOs: wire shapes for the analysis service endpoints

pub mod domain;
pub mod dto;
