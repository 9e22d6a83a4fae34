//! # Workflows Module
//!
//! High-level entry points that tie the [`crate::core`] models and the
//! [`crate::engine`] configuration together.
//!
//! - **Conformer Analysis** ([`analyze`]) - Strain comparison of both chairs of a
//!   molecule, with per-substituent contributions and optional drawing geometry

pub mod analyze;
