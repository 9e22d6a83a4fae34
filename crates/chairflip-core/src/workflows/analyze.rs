use crate::core::geometry::{self, BondVector, RingAtomView};
use crate::core::models::molecule::MoleculeState;
use crate::core::models::ring::{RING_SIZE, RingKind};
use crate::core::models::substituent::Position;
use crate::core::strain::energy::{
    self, ConformerComparison, StrainContribution, resolved_position,
};
use crate::core::strain::table::StrainTable;
use crate::engine::config::AnalysisConfig;
use crate::engine::error::EngineError;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct SubstituentDrawing {
    pub carbon_index: usize,
    pub group: String,
    pub stored_position: Position,
    pub resolved_position: Position, // Position as seen in this conformer
    pub bond: BondVector,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConformerGeometry {
    pub ring: [RingAtomView; RING_SIZE],
    pub substituents: Vec<SubstituentDrawing>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConformerView {
    pub flipped: bool,
    pub energy: f64,
    pub contributions: Vec<StrainContribution>,
    pub geometry: Option<ConformerGeometry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub ring_kind: RingKind,
    pub comparison: ConformerComparison,
    pub current: ConformerView,
    pub flipped: ConformerView,
}

impl AnalysisReport {
    pub fn preferred_view(&self) -> &ConformerView {
        match self.comparison.preferred {
            energy::Preference::Current => &self.current,
            energy::Preference::Flipped => &self.flipped,
        }
    }
}

/// Compares both chairs of `state` under the configured strain table.
#[instrument(skip_all, name = "conformer_analysis")]
pub fn run(state: &MoleculeState, config: &AnalysisConfig) -> Result<AnalysisReport, EngineError> {
    info!(
        "Analyzing {} with {} substituent(s).",
        state.ring_kind(),
        state.substituents().len()
    );
    let table = config.strain_table.resolve()?;
    debug!("Strain table ready with {} custom constant(s).", table.custom_len());

    for sub in state.substituents() {
        if !table.contains(&sub.group) {
            debug!(
                "No strain constant for group '{}' at carbon {}; treating it as strain-free.",
                sub.group, sub.carbon_index
            );
        }
    }

    let report = analyze_with_table(state, &table, config.include_geometry);
    info!(
        "Preferred conformer: {} ({}%, ΔE = {:.2} kcal/mol).",
        report.comparison.preferred, report.comparison.percent_preferred, report.comparison.delta_e
    );
    Ok(report)
}

pub fn analyze_with_table(
    state: &MoleculeState,
    table: &StrainTable,
    include_geometry: bool,
) -> AnalysisReport {
    let comparison = energy::compare_conformers_with(state, table);
    let view = |flipped: bool, strain: f64| ConformerView {
        flipped,
        energy: strain,
        contributions: energy::strain_contributions(state, flipped, table),
        geometry: include_geometry.then(|| conformer_geometry(state, flipped)),
    };

    AnalysisReport {
        ring_kind: state.ring_kind(),
        current: view(state.is_flipped(), comparison.energy_current),
        flipped: view(!state.is_flipped(), comparison.energy_flipped),
        comparison,
    }
}

pub fn conformer_geometry(state: &MoleculeState, flipped: bool) -> ConformerGeometry {
    let kind = state.ring_kind();
    let substituents = state
        .substituents()
        .iter()
        .map(|sub| {
            let position = resolved_position(sub, flipped);
            SubstituentDrawing {
                carbon_index: sub.carbon_index,
                group: sub.group.clone(),
                stored_position: sub.position,
                resolved_position: position,
                bond: geometry::substituent_vector(kind, sub.carbon_index, position, flipped),
            }
        })
        .collect();

    ConformerGeometry {
        ring: geometry::ring_coordinates(kind, flipped),
        substituents,
    }
}
