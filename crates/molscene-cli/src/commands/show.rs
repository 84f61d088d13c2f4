use super::source;
use crate::cli::ShowArgs;
use crate::error::Result;
use molscene::core::models::molecule::MolecularModel;
use std::io::Write;
use tracing::{info, warn};

pub fn run(args: ShowArgs) -> Result<()> {
    let loaded = source::load(&args.source)?;
    let model = if args.strict {
        let (atoms, bonds) = loaded.model.into_parts();
        MolecularModel::with_unique_ids(atoms, bonds)?
    } else {
        let duplicates = loaded.model.duplicate_ids();
        if !duplicates.is_empty() {
            warn!("Model contains duplicate atom ids: {:?}", duplicates);
        }
        loaded.model
    };

    info!(
        "Showing model with {} atoms and {} bonds",
        model.atom_count(),
        model.bond_count()
    );
    let stdout = std::io::stdout();
    write_tables(&model, loaded.name.as_deref(), &mut stdout.lock())?;
    Ok(())
}

pub fn write_tables(
    model: &MolecularModel,
    name: Option<&str>,
    out: &mut impl Write,
) -> std::io::Result<()> {
    writeln!(
        out,
        "Model: {} ({} atoms, {} bonds)",
        name.unwrap_or("<unnamed>"),
        model.atom_count(),
        model.bond_count()
    )?;

    writeln!(out)?;
    writeln!(
        out,
        "{:>5}  {:<4} {:>4} {:>6}  {:>12} {:>12} {:>12}",
        "index", "elem", "Z", "id", "x", "y", "z"
    )?;
    for (index, atom) in model.atoms().iter().enumerate() {
        writeln!(
            out,
            "{:>5}  {:<4} {:>4} {:>6}  {:>12.4} {:>12.4} {:>12.4}",
            index,
            atom.symbol().unwrap_or("?"),
            atom.element_number(),
            atom.id(),
            atom.x(),
            atom.y(),
            atom.z()
        )?;
    }

    if model.bond_count() > 0 {
        writeln!(out)?;
        writeln!(out, "{:>5}  {:>6} {:>6}  {}", "bond", "atom1", "atom2", "order")?;
        for (index, bond) in model.bonds().iter().enumerate() {
            writeln!(
                out,
                "{:>5}  {:>6} {:>6}  {}",
                index,
                bond.atom_index1(),
                bond.atom_index2(),
                bond.order()
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables_for(model: &MolecularModel, name: Option<&str>) -> String {
        let mut buffer = Vec::new();
        write_tables(model, name, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn ethanol_lists_every_atom_and_bond() {
        let text = tables_for(&MolecularModel::ethanol(), Some("ethanol"));
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Model: ethanol (9 atoms, 8 bonds)"));
        assert!(text.contains("    0  C       6      0       -0.4059      -0.0951       0.0000"));
        assert!(text.contains("    2  O       8      2"));
        assert!(text.contains("    0       0      1  Single"));
        // header, blank, column header, 9 atoms, blank, column header, 8 bonds
        assert_eq!(text.lines().count(), 1 + 1 + 1 + 9 + 1 + 1 + 8);
    }

    #[test]
    fn empty_model_has_no_bond_table() {
        let text = tables_for(&MolecularModel::default(), None);
        assert!(text.starts_with("Model: <unnamed> (0 atoms, 0 bonds)"));
        assert!(!text.contains("order"));
    }

    #[test]
    fn unassigned_elements_print_a_question_mark() {
        let model = MolecularModel::new(
            vec![molscene::core::models::atom::Atom::at(150, 0.0, 0.0, 0.0, 0).unwrap()],
            Vec::new(),
        )
        .unwrap();
        assert!(tables_for(&model, None).contains("    0  ?     150"));
    }
}
