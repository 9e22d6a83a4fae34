use super::ring::{RING_SIZE, RingKind};
use super::substituent::{Anomer, IMPLICIT_HYDROGEN, Position, Substituent};

/// Immutable snapshot of a substituted chair.
///
/// Every transition borrows `self` and returns a fresh state with its own
/// substituent list, so callers may keep old states around (e.g. for undo)
/// without aliasing.
///
/// Invariants:
/// - at most one substituent per `(carbon_index, position)` slot;
/// - no substituent carries the implicit hydrogen group `"H"`;
/// - positions are stored relative to the unflipped chair.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MoleculeState {
    ring_kind: RingKind,
    flipped: bool,
    substituents: Vec<Substituent>,
    sugar_type: Option<String>,
    anomer: Option<Anomer>,
}

impl MoleculeState {
    /// An unflipped, unsubstituted cyclohexane.
    pub fn new() -> Self {
        Self::default()
    }

    /// Equivalent to [`MoleculeState::new`].
    pub fn reset() -> Self {
        Self::new()
    }

    pub(crate) fn sugar(
        sugar_type: &str,
        anomer: Anomer,
        substituents: Vec<Substituent>,
    ) -> Self {
        Self {
            ring_kind: RingKind::Pyranose,
            flipped: false,
            substituents,
            sugar_type: Some(sugar_type.to_string()),
            anomer: Some(anomer),
        }
    }

    pub fn ring_kind(&self) -> RingKind {
        self.ring_kind
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn substituents(&self) -> &[Substituent] {
        &self.substituents
    }

    pub fn sugar_type(&self) -> Option<&str> {
        self.sugar_type.as_deref()
    }

    pub fn anomer(&self) -> Option<Anomer> {
        self.anomer
    }

    /// Places `group` at the given slot, replacing whatever was there.
    ///
    /// Setting the implicit hydrogen `"H"` clears the slot, which makes this
    /// equivalent to [`MoleculeState::remove_substituent`].
    #[must_use]
    pub fn set_substituent(&self, carbon_index: usize, position: Position, group: &str) -> Self {
        debug_assert!(carbon_index < RING_SIZE, "carbon index {carbon_index} out of range");
        let mut substituents = self.substituents_without(carbon_index, position);
        if group != IMPLICIT_HYDROGEN {
            substituents.push(Substituent::new(carbon_index, position, group));
        }
        Self {
            substituents,
            ..self.clone_header()
        }
    }

    /// Clears the given slot. Clearing an empty slot is a no-op.
    #[must_use]
    pub fn remove_substituent(&self, carbon_index: usize, position: Position) -> Self {
        debug_assert!(carbon_index < RING_SIZE, "carbon index {carbon_index} out of range");
        Self {
            substituents: self.substituents_without(carbon_index, position),
            ..self.clone_header()
        }
    }

    pub fn get_substituent(&self, carbon_index: usize, position: Position) -> Option<&str> {
        self.substituents
            .iter()
            .find(|sub| sub.occupies(carbon_index, position))
            .map(|sub| sub.group.as_str())
    }

    /// Toggles the ring flip. Stored positions are left untouched.
    #[must_use]
    pub fn flip_chair(&self) -> Self {
        Self {
            flipped: !self.flipped,
            ..self.clone()
        }
    }

    fn substituents_without(&self, carbon_index: usize, position: Position) -> Vec<Substituent> {
        self.substituents
            .iter()
            .filter(|sub| !sub.occupies(carbon_index, position))
            .cloned()
            .collect()
    }

    fn clone_header(&self) -> Self {
        Self {
            ring_kind: self.ring_kind,
            flipped: self.flipped,
            substituents: Vec::new(),
            sugar_type: self.sugar_type.clone(),
            anomer: self.anomer,
        }
    }
}
