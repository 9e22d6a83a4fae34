use super::templates::{SUGAR_TEMPLATES, SugarTemplate};
use crate::core::models::molecule::MoleculeState;
use crate::core::models::substituent::{Anomer, Position, Substituent};
use thiserror::Error;

const ANOMERIC_CARBON: usize = 0;
const ANOMERIC_GROUP: &str = "OH";

/// Failures of the sugar operations.
///
/// [`instantiate_sugar`] and [`change_sugar_type`] fail only with
/// `UnknownTemplate`. [`toggle_anomer`] additionally returns `NotASugar` for a
/// state that was not built from a template, such as a plain cyclohexane.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum TemplateError {
    #[error("Unknown sugar template: '{key}'")]
    UnknownTemplate { key: String },

    /// The state carries no sugar type to re-instantiate.
    #[error("Molecule state is not derived from a sugar template")]
    NotASugar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SugarSummary {
    pub key: &'static str,
    pub display_name: &'static str,
}

pub fn list_sugars() -> Vec<SugarSummary> {
    SUGAR_TEMPLATES
        .entries()
        .map(|(&key, template)| SugarSummary {
            key,
            display_name: template.display_name,
        })
        .collect()
}

pub fn sugar_template(key: &str) -> Option<&'static SugarTemplate> {
    SUGAR_TEMPLATES.get(key)
}

/// Builds an unflipped pyranose from the named template.
///
/// The template's fixed substituents are copied in order, followed by the
/// anomeric hydroxyl on C1. That hydroxyl is equatorial when `anomer` is the
/// template's equatorial-favoring anomer and axial otherwise.
pub fn instantiate_sugar(key: &str, anomer: Anomer) -> Result<MoleculeState, TemplateError> {
    let template = sugar_template(key).ok_or_else(|| TemplateError::UnknownTemplate {
        key: key.to_string(),
    })?;

    let anomeric_position = if anomer == template.equatorial_favoring_anomer {
        Position::Equatorial
    } else {
        Position::Axial
    };

    let substituents = template
        .substituents
        .iter()
        .map(|sub| Substituent::new(sub.carbon_index, sub.position, sub.group))
        .chain(std::iter::once(Substituent::new(
            ANOMERIC_CARBON,
            anomeric_position,
            ANOMERIC_GROUP,
        )))
        .collect();

    Ok(MoleculeState::sugar(key, anomer, substituents))
}

/// Re-instantiates the state's sugar with the opposite anomer.
///
/// The result is always unflipped; any edits made to the previous state are
/// discarded along with its flip.
pub fn toggle_anomer(state: &MoleculeState) -> Result<MoleculeState, TemplateError> {
    let key = state.sugar_type().ok_or(TemplateError::NotASugar)?;
    let anomer = state.anomer().unwrap_or(Anomer::Alpha);
    instantiate_sugar(key, anomer.opposite())
}

/// Re-instantiates with a different sugar, keeping the current anomer
/// (alpha if the state has none). The result is always unflipped.
pub fn change_sugar_type(state: &MoleculeState, key: &str) -> Result<MoleculeState, TemplateError> {
    let anomer = state.anomer().unwrap_or(Anomer::Alpha);
    instantiate_sugar(key, anomer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ring::RingKind;

    fn anomeric(state: &MoleculeState) -> &Substituent {
        state
            .substituents()
            .iter()
            .find(|sub| sub.carbon_index == ANOMERIC_CARBON)
            .unwrap()
    }

    #[test]
    fn beta_glucose_has_equatorial_anomeric_hydroxyl() {
        let state = instantiate_sugar("glucose", Anomer::Beta).unwrap();
        assert_eq!(state.substituents().len(), 5);
        assert_eq!(state.ring_kind(), RingKind::Pyranose);
        assert!(!state.is_flipped());
        assert_eq!(state.sugar_type(), Some("glucose"));
        assert_eq!(state.anomer(), Some(Anomer::Beta));

        let c1 = anomeric(&state);
        assert_eq!(c1.position, Position::Equatorial);
        assert_eq!(c1.group, "OH");
    }

    #[test]
    fn alpha_glucose_differs_only_at_anomeric_carbon() {
        let alpha = instantiate_sugar("glucose", Anomer::Alpha).unwrap();
        let beta = instantiate_sugar("glucose", Anomer::Beta).unwrap();

        assert_eq!(alpha.substituents().len(), 5);
        assert_eq!(anomeric(&alpha).position, Position::Axial);
        assert_eq!(alpha.substituents()[..4], beta.substituents()[..4]);
    }

    #[test]
    fn instantiated_sugar_has_template_length_plus_one_substituents() {
        for summary in list_sugars() {
            let template = sugar_template(summary.key).unwrap();
            for anomer in [Anomer::Alpha, Anomer::Beta] {
                let state = instantiate_sugar(summary.key, anomer).unwrap();
                assert_eq!(state.substituents().len(), template.substituents.len() + 1);
                assert_eq!(
                    state.substituents().last().unwrap().carbon_index,
                    ANOMERIC_CARBON
                );
            }
        }
    }

    #[test]
    fn unknown_sugar_key_fails() {
        let result = instantiate_sugar("fructose", Anomer::Alpha);
        assert_eq!(
            result,
            Err(TemplateError::UnknownTemplate {
                key: "fructose".to_string()
            })
        );
    }

    #[test]
    fn list_sugars_returns_stable_display_order() {
        let keys: Vec<_> = list_sugars().into_iter().map(|s| s.key).collect();
        assert_eq!(keys, vec!["glucose", "galactose", "mannose", "allose", "talose"]);
        assert_eq!(list_sugars()[0].display_name, "D-Glucose");
    }

    #[test]
    fn toggle_anomer_switches_anomer_and_resets_flip() {
        let beta = instantiate_sugar("mannose", Anomer::Beta).unwrap().flip_chair();
        let alpha = toggle_anomer(&beta).unwrap();
        assert_eq!(alpha.anomer(), Some(Anomer::Alpha));
        assert_eq!(alpha.sugar_type(), Some("mannose"));
        assert!(!alpha.is_flipped());
        assert_eq!(anomeric(&alpha).position, Position::Axial);

        assert_eq!(toggle_anomer(&alpha).unwrap(), instantiate_sugar("mannose", Anomer::Beta).unwrap());
    }

    #[test]
    fn toggle_anomer_on_plain_cyclohexane_fails() {
        assert_eq!(
            toggle_anomer(&MoleculeState::new()),
            Err(TemplateError::NotASugar)
        );
    }

    #[test]
    fn change_sugar_type_keeps_anomer_and_resets_flip() {
        let glucose = instantiate_sugar("glucose", Anomer::Beta).unwrap().flip_chair();
        let galactose = change_sugar_type(&glucose, "galactose").unwrap();
        assert_eq!(galactose.sugar_type(), Some("galactose"));
        assert_eq!(galactose.anomer(), Some(Anomer::Beta));
        assert!(!galactose.is_flipped());
        assert_eq!(galactose.get_substituent(3, Position::Axial), Some("OH"));
    }

    #[test]
    fn change_sugar_type_from_plain_state_defaults_to_alpha() {
        let state = change_sugar_type(&MoleculeState::new(), "glucose").unwrap();
        assert_eq!(state.anomer(), Some(Anomer::Alpha));
    }

    #[test]
    fn change_sugar_type_to_unknown_key_fails() {
        let glucose = instantiate_sugar("glucose", Anomer::Beta).unwrap();
        assert!(matches!(
            change_sugar_type(&glucose, "sucrose"),
            Err(TemplateError::UnknownTemplate { .. })
        ));
    }
}
