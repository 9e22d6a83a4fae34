use crate::core::models::substituent::{Anomer, Position};
use phf::{OrderedMap, phf_ordered_map};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateSubstituent {
    pub carbon_index: usize,
    pub position: Position,
    pub group: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SugarTemplate {
    pub display_name: &'static str,
    pub substituents: &'static [TemplateSubstituent],
    /// Anomer whose C1 hydroxyl is equatorial in the reference chair.
    pub equatorial_favoring_anomer: Anomer,
}

const fn equatorial(carbon_index: usize, group: &'static str) -> TemplateSubstituent {
    TemplateSubstituent {
        carbon_index,
        position: Position::Equatorial,
        group,
    }
}

const fn axial(carbon_index: usize, group: &'static str) -> TemplateSubstituent {
    TemplateSubstituent {
        carbon_index,
        position: Position::Axial,
        group,
    }
}

pub(crate) static SUGAR_TEMPLATES: OrderedMap<&'static str, SugarTemplate> = phf_ordered_map! {
    "glucose" => SugarTemplate {
        display_name: "D-Glucose",
        substituents: &[
            equatorial(1, "OH"),
            equatorial(2, "OH"),
            equatorial(3, "OH"),
            equatorial(4, "CH2OH"),
        ],
        equatorial_favoring_anomer: Anomer::Beta,
    },
    "galactose" => SugarTemplate {
        display_name: "D-Galactose",
        substituents: &[
            equatorial(1, "OH"),
            equatorial(2, "OH"),
            axial(3, "OH"),
            equatorial(4, "CH2OH"),
        ],
        equatorial_favoring_anomer: Anomer::Beta,
    },
    "mannose" => SugarTemplate {
        display_name: "D-Mannose",
        substituents: &[
            axial(1, "OH"),
            equatorial(2, "OH"),
            equatorial(3, "OH"),
            equatorial(4, "CH2OH"),
        ],
        equatorial_favoring_anomer: Anomer::Beta,
    },
    "allose" => SugarTemplate {
        display_name: "D-Allose",
        substituents: &[
            equatorial(1, "OH"),
            axial(2, "OH"),
            equatorial(3, "OH"),
            equatorial(4, "CH2OH"),
        ],
        equatorial_favoring_anomer: Anomer::Beta,
    },
    "talose" => SugarTemplate {
        display_name: "D-Talose",
        substituents: &[
            axial(1, "OH"),
            equatorial(2, "OH"),
            axial(3, "OH"),
            equatorial(4, "CH2OH"),
        ],
        equatorial_favoring_anomer: Anomer::Beta,
    },
};
