//! # Engine Module
//!
//! Configuration and error plumbing shared by the analysis workflows.
//!
//! - **Configuration** ([`config`]) - Analysis settings and their validating builder
//! - **Error Handling** ([`error`]) - [`error::EngineError`], wrapping configuration,
//!   strain-table, and template failures

pub mod config;
pub mod error;
