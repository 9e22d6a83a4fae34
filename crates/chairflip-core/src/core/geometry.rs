//! 2D drawing geometry for chair projections.
//!
//! Ring atoms keep their template coordinates in both conformers; a ring flip
//! only inverts which vertical sense each atom's axial bond takes. Substituent
//! bonds are derived from those axial senses:
//!
//! - axial bonds are purely vertical, [`AXIAL_LENGTH`] long;
//! - equatorial bonds point radially away from the ring centroid, tilted by a
//!   small vertical bias, and are exactly [`EQUATORIAL_LENGTH`] long.

use crate::core::models::ring::{AxialDirection, RING_SIZE, RingKind, RingTemplate};
use crate::core::models::substituent::Position;
use nalgebra::{Point2, Vector2};

pub const AXIAL_LENGTH: f64 = 45.0;
pub const EQUATORIAL_LENGTH: f64 = 40.0;

const AXIAL_LABEL_OFFSET: f64 = 15.0;
const EQUATORIAL_VERTICAL_BIAS: f64 = 0.3;
const EQUATORIAL_LABEL_SCALE: f64 = 1.4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingAtomView {
    pub position: Point2<f64>,
    pub axial_dir: AxialDirection,
    pub is_ring_heteroatom: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondVector {
    pub bond_start: Point2<f64>,
    pub bond_end: Point2<f64>,
    pub label_point: Point2<f64>,
}

impl BondVector {
    pub fn length(&self) -> f64 {
        (self.bond_end - self.bond_start).norm()
    }
}

pub fn ring_coordinates(kind: RingKind, flipped: bool) -> [RingAtomView; RING_SIZE] {
    template_coordinates(RingTemplate::for_kind(kind), flipped)
}

pub fn template_coordinates(template: &RingTemplate, flipped: bool) -> [RingAtomView; RING_SIZE] {
    template.atoms.map(|atom| RingAtomView {
        position: atom.position(),
        axial_dir: atom.axial_dir.in_conformer(flipped),
        is_ring_heteroatom: atom.is_ring_heteroatom,
    })
}

/// Bond and label placement for a substituent drawn in the given conformer.
///
/// `position` is the position as seen in that conformer, not the stored one.
///
/// # Panics
///
/// Panics if `carbon_index >= RING_SIZE`.
pub fn substituent_vector(
    kind: RingKind,
    carbon_index: usize,
    position: Position,
    flipped: bool,
) -> BondVector {
    template_substituent_vector(RingTemplate::for_kind(kind), carbon_index, position, flipped)
}

pub fn template_substituent_vector(
    template: &RingTemplate,
    carbon_index: usize,
    position: Position,
    flipped: bool,
) -> BondVector {
    let atom = template.atom(carbon_index);
    let origin = atom.position();
    let dir = atom.axial_dir.in_conformer(flipped).sign();

    match position {
        Position::Axial => {
            let up_down = Vector2::new(0.0, dir);
            BondVector {
                bond_start: origin,
                bond_end: origin + up_down * AXIAL_LENGTH,
                label_point: origin + up_down * (AXIAL_LENGTH + AXIAL_LABEL_OFFSET),
            }
        }
        Position::Equatorial => {
            let radial = (origin - template.centroid()).normalize();
            let tilted = radial + Vector2::new(0.0, EQUATORIAL_VERTICAL_BIAS * dir);
            let bond = tilted.normalize() * EQUATORIAL_LENGTH;
            BondVector {
                bond_start: origin,
                bond_end: origin + bond,
                label_point: origin + bond * EQUATORIAL_LABEL_SCALE,
            }
        }
    }
}
