use chairflip::core::models::ring::AxialDirection;
use chairflip::core::strain::energy::Preference;
use chairflip::core::strain::table::KnownSubstituent;
use chairflip::core::sugars::resolver::SugarSummary;
use chairflip::workflows::analyze::{AnalysisReport, ConformerGeometry, ConformerView};
use std::fmt;

fn conformer_label(flipped: bool) -> &'static str {
    if flipped { "flipped chair" } else { "reference chair" }
}

fn direction_label(dir: AxialDirection) -> &'static str {
    match dir {
        AxialDirection::Up => "up",
        AxialDirection::Down => "down",
    }
}

/// Renders the energy comparison and per-substituent strain of both chairs.
pub fn render_report(report: &AnalysisReport, precision: usize) -> String {
    ReportDisplay { report, precision }.to_string()
}

pub fn render_sugars(sugars: &[SugarSummary]) -> String {
    SugarListDisplay(sugars).to_string()
}

pub fn render_substituents(entries: &[KnownSubstituent], precision: usize) -> String {
    SubstituentListDisplay { entries, precision }.to_string()
}

struct ReportDisplay<'a> {
    report: &'a AnalysisReport,
    precision: usize,
}

impl fmt::Display for ReportDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        let cmp = &report.comparison;
        let p = self.precision;
        let views = [("Current", &report.current), ("Flipped", &report.flipped)];

        writeln!(f, "Ring: {}", report.ring_kind)?;
        for (name, view) in views {
            writeln!(
                f,
                "{} ({}): {:.p$} kcal/mol",
                name,
                conformer_label(view.flipped),
                view.energy
            )?;
            write_contributions(f, view, p)?;
        }
        writeln!(f, "ΔE: {:.p$} kcal/mol", cmp.delta_e)?;

        let preferred = match cmp.preferred {
            Preference::Current => "current conformer",
            Preference::Flipped => "flipped conformer",
        };
        writeln!(
            f,
            "Preferred: {} ({}% at equilibrium)",
            preferred, cmp.percent_preferred
        )?;

        for (name, view) in views {
            if let Some(geometry) = &view.geometry {
                writeln!(f)?;
                writeln!(f, "{} geometry ({}):", name, conformer_label(view.flipped))?;
                write_geometry(f, geometry, p)?;
            }
        }
        Ok(())
    }
}

fn write_contributions(f: &mut fmt::Formatter<'_>, view: &ConformerView, p: usize) -> fmt::Result {
    if view.contributions.is_empty() {
        return writeln!(f, "  no axial strain");
    }
    for c in &view.contributions {
        writeln!(f, "  C{} axial {}: {:.p$}", c.carbon_index, c.group, c.energy)?;
    }
    Ok(())
}

fn write_geometry(f: &mut fmt::Formatter<'_>, geometry: &ConformerGeometry, p: usize) -> fmt::Result {
    for (i, atom) in geometry.ring.iter().enumerate() {
        let element = if atom.is_ring_heteroatom { "O" } else { "C" };
        writeln!(
            f,
            "  atom {} {} ({:.p$}, {:.p$}) axial {}",
            i,
            element,
            atom.position.x,
            atom.position.y,
            direction_label(atom.axial_dir)
        )?;
    }
    for sub in &geometry.substituents {
        let b = &sub.bond;
        writeln!(
            f,
            "  {} on C{} {} -> ({:.p$}, {:.p$}) label ({:.p$}, {:.p$})",
            sub.group,
            sub.carbon_index,
            sub.resolved_position,
            b.bond_end.x,
            b.bond_end.y,
            b.label_point.x,
            b.label_point.y
        )?;
    }
    Ok(())
}

struct SugarListDisplay<'a>(&'a [SugarSummary]);

impl fmt::Display for SugarListDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.0.iter().map(|s| s.key.len()).max().unwrap_or(0);
        for sugar in self.0 {
            writeln!(f, "{:<width$}  {}", sugar.key, sugar.display_name)?;
        }
        Ok(())
    }
}

struct SubstituentListDisplay<'a> {
    entries: &'a [KnownSubstituent],
    precision: usize,
}

impl fmt::Display for SubstituentListDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.entries.iter().map(|e| e.group.len()).max().unwrap_or(0);
        let p = self.precision;
        for entry in self.entries {
            writeln!(f, "{:<width$}  {:.p$} kcal/mol", entry.group, entry.strain_constant)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chairflip::core::models::molecule::MoleculeState;
    use chairflip::core::models::substituent::Position;
    use chairflip::core::strain::table::{StrainTable, list_known_substituents};
    use chairflip::core::sugars::resolver::list_sugars;
    use chairflip::workflows::analyze::analyze_with_table;

    fn methyl_report(include_geometry: bool) -> AnalysisReport {
        let state = MoleculeState::new().set_substituent(0, Position::Axial, "CH3");
        analyze_with_table(&state, &StrainTable::standard(), include_geometry)
    }

    #[test]
    fn report_lists_energies_and_preference() {
        let text = render_report(&methyl_report(false), 2);
        assert!(text.contains("Ring: cyclohexane"));
        assert!(text.contains("Current (reference chair): 1.74 kcal/mol"));
        assert!(text.contains("C0 axial CH3: 1.74"));
        assert!(text.contains("Flipped (flipped chair): 0.00 kcal/mol"));
        assert!(text.contains("no axial strain"));
        assert!(text.contains("ΔE: 1.74 kcal/mol"));
        assert!(text.contains("Preferred: flipped conformer (95% at equilibrium)"));
        assert!(!text.contains("geometry"));
    }

    #[test]
    fn strain_free_report_prints_unsigned_zero() {
        let state = MoleculeState::new();
        let text = render_report(&analyze_with_table(&state, &StrainTable::standard(), false), 2);
        assert!(text.contains("Current (reference chair): 0.00 kcal/mol"));
        assert!(text.contains("Flipped (flipped chair): 0.00 kcal/mol"));
        assert!(!text.contains("-0.00"));
    }

    #[test]
    fn report_honors_precision() {
        let text = render_report(&methyl_report(false), 4);
        assert!(text.contains("ΔE: 1.7400 kcal/mol"));
    }

    #[test]
    fn geometry_section_lists_atoms_and_bonds() {
        let text = render_report(&methyl_report(true), 1);
        assert!(text.contains("Current geometry (reference chair):"));
        assert!(text.contains("Flipped geometry (flipped chair):"));
        assert!(text.contains("atom 0 C (100.0, 150.0) axial down"));
        assert!(text.contains("CH3 on C0 axial -> (100.0, 195.0)"));
        assert!(text.contains("CH3 on C0 equatorial"));
    }

    #[test]
    fn sugar_listing_is_aligned() {
        let text = render_sugars(&list_sugars());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("glucose"));
        let column = lines[0].find("D-").unwrap();
        assert!(lines.iter().all(|l| l.find("D-") == Some(column)));
    }

    #[test]
    fn substituent_listing_shows_constants() {
        let text = render_substituents(&list_known_substituents(), 2);
        assert!(text.lines().any(|l| l.starts_with("CH3 ") && l.ends_with("1.74 kcal/mol")));
        assert!(text.lines().any(|l| l.starts_with("C(CH3)3") && l.contains("4.90")));
    }
}
