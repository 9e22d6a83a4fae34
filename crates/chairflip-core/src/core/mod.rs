//! # Core Module
//!
//! Stateless building blocks for chair-conformation analysis.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Ring templates, substituents, and the
//!   immutable molecule state with its transitions
//! - **Drawing Geometry** ([`geometry`]) - Ring-atom coordinates and substituent bond
//!   vectors for either chair
//! - **Strain Energetics** ([`strain`]) - Strain constants, conformer energies, and
//!   Boltzmann populations
//! - **Sugar Templates** ([`sugars`]) - D-hexopyranose templates and anomer handling
//!
//! ## Scientific Foundation
//!
//! A ring flip interconverts the two chairs of a six-membered ring and swaps every
//! substituent between axial and equatorial. Axial groups pay a 1,3-diaxial penalty
//! (their A-value); the chair with the smaller total penalty dominates at
//! equilibrium, in the ratio given by the Boltzmann factor `exp(ΔE/RT)`.

pub mod geometry;
pub mod models;
pub mod strain;
pub mod sugars;
