//! # Models Module
//!
//! Value types describing a six-membered ring in the chair conformation and the
//! substituents attached to it.
//!
//! ## Overview
//!
//! - [`ring`] - Static ring templates (atom layout, axial directions, heteroatoms)
//! - [`substituent`] - Axial/equatorial positions, anomers, and substituent records
//! - [`molecule`] - The immutable [`molecule::MoleculeState`] and its transitions
//!
//! All types here are plain values. Ring templates are process-wide constants; a
//! `MoleculeState` is owned by its caller and every transition returns a new one.

pub mod molecule;
pub mod ring;
pub mod substituent;
