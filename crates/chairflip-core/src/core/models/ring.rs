use nalgebra::Point2;
use std::fmt;

pub const RING_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RingKind {
    #[default]
    Cyclohexane,
    Pyranose,
}

impl fmt::Display for RingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RingKind::Cyclohexane => write!(f, "cyclohexane"),
            RingKind::Pyranose => write!(f, "pyranose"),
        }
    }
}

/// Vertical sense of an atom's axial bond in drawing coordinates.
///
/// Drawing coordinates grow downward, so `Up` carries a sign of `-1` and `Down`
/// a sign of `+1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxialDirection {
    Up,
    Down,
}

impl AxialDirection {
    pub fn sign(self) -> f64 {
        match self {
            AxialDirection::Up => -1.0,
            AxialDirection::Down => 1.0,
        }
    }

    pub fn inverted(self) -> Self {
        match self {
            AxialDirection::Up => AxialDirection::Down,
            AxialDirection::Down => AxialDirection::Up,
        }
    }

    /// Direction seen in the given conformer.
    pub fn in_conformer(self, flipped: bool) -> Self {
        if flipped { self.inverted() } else { self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingAtom {
    pub x: f64,
    pub y: f64,
    pub axial_dir: AxialDirection, // Axial sense in the unflipped chair
    pub is_ring_heteroatom: bool,
}

impl RingAtom {
    const fn carbon(x: f64, y: f64, axial_dir: AxialDirection) -> Self {
        Self {
            x,
            y,
            axial_dir,
            is_ring_heteroatom: false,
        }
    }

    const fn oxygen(x: f64, y: f64, axial_dir: AxialDirection) -> Self {
        Self {
            x,
            y,
            axial_dir,
            is_ring_heteroatom: true,
        }
    }

    pub fn position(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingTemplate {
    pub kind: RingKind,
    pub atoms: [RingAtom; RING_SIZE],
}

use AxialDirection::{Down, Up};

// Projected chair skeleton: left tip at index 0, right tip at index 3. Opposite
// bonds are parallel, so the outline is centrally symmetric about (200, 135).
static CYCLOHEXANE_TEMPLATE: RingTemplate = RingTemplate {
    kind: RingKind::Cyclohexane,
    atoms: [
        RingAtom::carbon(100.0, 150.0, Down),
        RingAtom::carbon(160.0, 110.0, Up),
        RingAtom::carbon(240.0, 125.0, Down),
        RingAtom::carbon(300.0, 120.0, Up),
        RingAtom::carbon(240.0, 160.0, Down),
        RingAtom::carbon(160.0, 145.0, Up),
    ],
};

// Indices 0..=4 are C1..C5; index 5 is the ring oxygen bridging C5 and C1.
static PYRANOSE_TEMPLATE: RingTemplate = RingTemplate {
    kind: RingKind::Pyranose,
    atoms: [
        RingAtom::carbon(100.0, 150.0, Down),
        RingAtom::carbon(160.0, 110.0, Up),
        RingAtom::carbon(240.0, 125.0, Down),
        RingAtom::carbon(300.0, 120.0, Up),
        RingAtom::carbon(240.0, 160.0, Down),
        RingAtom::oxygen(160.0, 145.0, Up),
    ],
};

impl RingTemplate {
    pub fn for_kind(kind: RingKind) -> &'static RingTemplate {
        match kind {
            RingKind::Cyclohexane => &CYCLOHEXANE_TEMPLATE,
            RingKind::Pyranose => &PYRANOSE_TEMPLATE,
        }
    }

    pub fn atom(&self, index: usize) -> &RingAtom {
        &self.atoms[index]
    }

    pub fn centroid(&self) -> Point2<f64> {
        let (sum_x, sum_y) = self
            .atoms
            .iter()
            .fold((0.0, 0.0), |(sx, sy), atom| (sx + atom.x, sy + atom.y));
        let n = RING_SIZE as f64;
        Point2::new(sum_x / n, sum_y / n)
    }

    pub fn heteroatom_index(&self) -> Option<usize> {
        self.atoms.iter().position(|atom| atom.is_ring_heteroatom)
    }
}
