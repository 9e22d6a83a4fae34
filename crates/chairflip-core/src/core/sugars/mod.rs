//! # Sugars Module
//!
//! D-hexopyranose templates and their expansion into molecule states.
//!
//! Ring indices follow the pyranose template: index 0 is the anomeric carbon C1,
//! indices 1..=4 are C2..C5, and index 5 is the ring oxygen. Templates record the
//! fixed substituents on C2..C5 in the 4C1 chair; the anomeric hydroxyl is added
//! when a template is instantiated for a chosen anomer.
//!
//! - [`templates`] - Static sugar template table
//! - [`resolver`] - Template lookup, instantiation, and anomer/sugar switching

pub mod resolver;
pub mod templates;
