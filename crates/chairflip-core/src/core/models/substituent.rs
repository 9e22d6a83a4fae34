use super::ring::RING_SIZE;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Group name for an implicit hydrogen. Never stored as a substituent.
pub const IMPLICIT_HYDROGEN: &str = "H";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Axial,
    Equatorial,
}

impl Position {
    pub fn opposite(self) -> Self {
        match self {
            Position::Axial => Position::Equatorial,
            Position::Equatorial => Position::Axial,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Axial => write!(f, "axial"),
            Position::Equatorial => write!(f, "equatorial"),
        }
    }
}

impl FromStr for Position {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "axial" | "ax" | "a" => Ok(Position::Axial),
            "equatorial" | "eq" | "e" => Ok(Position::Equatorial),
            _ => Err(NotationError::InvalidPosition(s.to_string())),
        }
    }
}

/// Configuration at the anomeric carbon of a pyranose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anomer {
    Alpha,
    Beta,
}

impl Anomer {
    pub fn opposite(self) -> Self {
        match self {
            Anomer::Alpha => Anomer::Beta,
            Anomer::Beta => Anomer::Alpha,
        }
    }
}

impl fmt::Display for Anomer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomer::Alpha => write!(f, "alpha"),
            Anomer::Beta => write!(f, "beta"),
        }
    }
}

impl FromStr for Anomer {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alpha" | "a" | "α" => Ok(Anomer::Alpha),
            "beta" | "b" | "β" => Ok(Anomer::Beta),
            _ => Err(NotationError::InvalidAnomer(s.to_string())),
        }
    }
}

/// A group attached to a ring atom.
///
/// `position` is always recorded relative to the unflipped chair. Use
/// [`resolved_position`](crate::core::strain::energy::resolved_position) to see
/// where the group sits in a particular conformer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Substituent {
    pub carbon_index: usize,
    pub position: Position,
    pub group: String,
}

impl Substituent {
    pub fn new(carbon_index: usize, position: Position, group: impl Into<String>) -> Self {
        Self {
            carbon_index,
            position,
            group: group.into(),
        }
    }

    pub fn occupies(&self, carbon_index: usize, position: Position) -> bool {
        self.carbon_index == carbon_index && self.position == position
    }
}

impl fmt::Display for Substituent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.carbon_index, self.position, self.group)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("Invalid substituent notation '{0}'. Expected 'CARBON:POSITION:GROUP' (e.g., '0:axial:CH3').")]
    InvalidFormat(String),

    #[error("Invalid carbon index '{0}'. Expected an integer from 0 to 5.")]
    InvalidCarbonIndex(String),

    #[error("Invalid position '{0}'. Expected 'axial' or 'equatorial'.")]
    InvalidPosition(String),

    #[error("Invalid anomer '{0}'. Expected 'alpha' or 'beta'.")]
    InvalidAnomer(String),

    #[error("Substituent group cannot be empty in '{0}'.")]
    EmptyGroup(String),
}

/// Parses the `CARBON:POSITION:GROUP` notation.
///
/// The carbon index is range-checked here. State transitions assume a valid index.
impl FromStr for Substituent {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().splitn(3, ':').collect();
        let [carbon, position, group] = parts.as_slice() else {
            return Err(NotationError::InvalidFormat(s.to_string()));
        };

        let carbon_index = carbon
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|&i| i < RING_SIZE)
            .ok_or_else(|| NotationError::InvalidCarbonIndex(carbon.to_string()))?;
        let position = position.parse::<Position>()?;
        let group = group.trim();
        if group.is_empty() {
            return Err(NotationError::EmptyGroup(s.to_string()));
        }

        Ok(Substituent::new(carbon_index, position, group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_opposite_swaps_axial_and_equatorial() {
        assert_eq!(Position::Axial.opposite(), Position::Equatorial);
        assert_eq!(Position::Equatorial.opposite(), Position::Axial);
    }

    #[test]
    fn position_parses_long_and_short_forms() {
        assert_eq!("axial".parse(), Ok(Position::Axial));
        assert_eq!("AX".parse(), Ok(Position::Axial));
        assert_eq!("eq".parse(), Ok(Position::Equatorial));
        assert_eq!(" Equatorial ".parse(), Ok(Position::Equatorial));
        assert!(matches!(
            "up".parse::<Position>(),
            Err(NotationError::InvalidPosition(_))
        ));
    }

    #[test]
    fn anomer_parses_and_displays() {
        assert_eq!("alpha".parse(), Ok(Anomer::Alpha));
        assert_eq!("β".parse(), Ok(Anomer::Beta));
        assert_eq!(Anomer::Beta.to_string(), "beta");
        assert_eq!(Anomer::Alpha.opposite(), Anomer::Beta);
        assert!("gamma".parse::<Anomer>().is_err());
    }

    #[test]
    fn substituent_notation_parses_all_fields() {
        let sub: Substituent = "2:eq:OH".parse().unwrap();
        assert_eq!(sub, Substituent::new(2, Position::Equatorial, "OH"));
    }

    #[test]
    fn substituent_notation_accepts_parenthesized_groups() {
        let sub: Substituent = "0:axial:C(CH3)3".parse().unwrap();
        assert_eq!(sub.group, "C(CH3)3");
    }

    #[test]
    fn substituent_notation_rejects_out_of_range_carbon() {
        assert!(matches!(
            "6:axial:CH3".parse::<Substituent>(),
            Err(NotationError::InvalidCarbonIndex(_))
        ));
        assert!(matches!(
            "x:axial:CH3".parse::<Substituent>(),
            Err(NotationError::InvalidCarbonIndex(_))
        ));
    }

    #[test]
    fn substituent_notation_rejects_missing_fields_and_empty_group() {
        assert!(matches!(
            "0:axial".parse::<Substituent>(),
            Err(NotationError::InvalidFormat(_))
        ));
        assert!(matches!(
            "0:axial: ".parse::<Substituent>(),
            Err(NotationError::EmptyGroup(_))
        ));
    }

    #[test]
    fn substituent_display_matches_notation() {
        let sub = Substituent::new(4, Position::Axial, "Cl");
        assert_eq!(sub.to_string(), "4:axial:Cl");
        assert_eq!(sub.to_string().parse::<Substituent>(), Ok(sub));
    }

    #[test]
    fn occupies_matches_only_exact_slot() {
        let sub = Substituent::new(1, Position::Axial, "OH");
        assert!(sub.occupies(1, Position::Axial));
        assert!(!sub.occupies(1, Position::Equatorial));
        assert!(!sub.occupies(2, Position::Axial));
    }
}
