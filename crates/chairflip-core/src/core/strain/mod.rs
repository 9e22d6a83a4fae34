//! # Strain Module
//!
//! Empirical strain model for chair conformers.
//!
//! Each substituent carries a strain constant (its A-value): the energy penalty
//! it pays when axial, from 1,3-diaxial clashes. A conformer's strain energy is
//! the sum over its axial substituents, and the gap between the two chairs gives
//! their Boltzmann populations at 298 K.
//!
//! - [`table`] - Built-in and file-loaded strain constants
//! - [`energy`] - Conformer energies, population ratios, and the flip comparison

pub mod energy;
pub mod table;
