use super::table::StrainTable;
use crate::core::models::molecule::MoleculeState;
use crate::core::models::substituent::{Position, Substituent};
use std::fmt;

/// RT at 298 K, in kcal/mol.
pub const RT_KCAL_PER_MOL: f64 = 0.592;

/// Energy differences below this are reported as a 50/50 population.
pub const DEGENERACY_THRESHOLD: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preference {
    Current,
    Flipped,
}

impl Preference {
    pub fn opposite(self) -> Self {
        match self {
            Preference::Current => Preference::Flipped,
            Preference::Flipped => Preference::Current,
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preference::Current => write!(f, "current"),
            Preference::Flipped => write!(f, "flipped"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConformerComparison {
    pub energy_current: f64,  // kcal/mol, conformer the state is drawn in
    pub energy_flipped: f64,  // kcal/mol, the ring-flipped partner
    pub delta_e: f64,         // |energy_current - energy_flipped|
    pub preferred: Preference,
    pub percent_preferred: u8, // Equilibrium population of the preferred conformer, 50..=100
}

/// An axial substituent's share of a conformer's strain energy.
#[derive(Debug, Clone, PartialEq)]
pub struct StrainContribution {
    pub carbon_index: usize,
    pub group: String,
    pub energy: f64,
}

/// Position of `sub` as seen in the conformer with the given flip flag.
///
/// Stored positions refer to the unflipped chair, so a flipped conformer sees
/// every axial group as equatorial and vice versa.
pub fn resolved_position(sub: &Substituent, flipped: bool) -> Position {
    if flipped {
        sub.position.opposite()
    } else {
        sub.position
    }
}

pub fn strain_energy(state: &MoleculeState, conformer_flipped: bool) -> f64 {
    strain_energy_with(state, conformer_flipped, &StrainTable::standard())
}

/// Sum of strain constants over the substituents that are axial in the queried
/// conformer. Equatorial substituents contribute nothing.
pub fn strain_energy_with(
    state: &MoleculeState,
    conformer_flipped: bool,
    table: &StrainTable,
) -> f64 {
    state
        .substituents()
        .iter()
        .filter(|sub| resolved_position(sub, conformer_flipped) == Position::Axial)
        .map(|sub| table.constant(&sub.group))
        .fold(0.0, |total, constant| total + constant) // `sum` of nothing is -0.0
}

pub fn strain_contributions(
    state: &MoleculeState,
    conformer_flipped: bool,
    table: &StrainTable,
) -> Vec<StrainContribution> {
    state
        .substituents()
        .iter()
        .filter(|sub| resolved_position(sub, conformer_flipped) == Position::Axial)
        .map(|sub| StrainContribution {
            carbon_index: sub.carbon_index,
            group: sub.group.clone(),
            energy: table.constant(&sub.group),
        })
        .collect()
}

/// Equilibrium percentage of the lower-energy conformer for a gap of `delta_e`.
///
/// Computes `100 K / (K + 1)` with `K = exp(ΔE/RT)`, in the overflow-free form
/// `100 / (1 + exp(-ΔE/RT))`.
pub fn boltzmann_percent(delta_e: f64) -> u8 {
    if delta_e < DEGENERACY_THRESHOLD {
        return 50;
    }
    let fraction = 1.0 / (1.0 + (-delta_e / RT_KCAL_PER_MOL).exp());
    (100.0 * fraction).round() as u8
}

pub fn compare_conformers(state: &MoleculeState) -> ConformerComparison {
    compare_conformers_with(state, &StrainTable::standard())
}

/// Compares the conformer `state` is in against its ring-flipped partner.
///
/// Ties go to the current conformer.
pub fn compare_conformers_with(state: &MoleculeState, table: &StrainTable) -> ConformerComparison {
    let energy_current = strain_energy_with(state, state.is_flipped(), table);
    let energy_flipped = strain_energy_with(state, !state.is_flipped(), table);
    let delta_e = (energy_current - energy_flipped).abs();
    let preferred = if energy_current <= energy_flipped {
        Preference::Current
    } else {
        Preference::Flipped
    };

    ConformerComparison {
        energy_current,
        energy_flipped,
        delta_e,
        preferred,
        percent_preferred: boltzmann_percent(delta_e),
    }
}
