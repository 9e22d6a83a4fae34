//! # chairflip Core Library
//!
//! Geometry and strain-energy engine for six-membered rings in the chair
//! conformation: substituted cyclohexanes and D-hexopyranose sugars.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`MoleculeState`, ring
//!   templates), drawing geometry, the strain-constant table and energy model, and
//!   the sugar templates. Everything here is a pure function over immutable values.
//!
//! - **[`engine`]: Configuration and Errors.** `AnalysisConfig` with its builder
//!   and the `EngineError` type that the workflows surface.
//!
//! - **[`workflows`]: The Public API.** End-to-end procedures, such as comparing
//!   both chairs of a molecule and laying them out for drawing.
//!
//! ## Example
//!
//! ```
//! use chairflip::core::models::molecule::MoleculeState;
//! use chairflip::core::models::substituent::Position;
//! use chairflip::core::strain::energy::{Preference, compare_conformers};
//!
//! let state = MoleculeState::new().set_substituent(0, Position::Axial, "CH3");
//! let comparison = compare_conformers(&state);
//!
//! assert_eq!(comparison.preferred, Preference::Flipped);
//! assert_eq!(comparison.percent_preferred, 95);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
