use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use xyzbond::{BondSet, Color, ElementTable, Structure};

#[derive(Serialize)]
struct StructureReport<'a> {
    title: &'a str,
    atom_count: usize,
    origin: [f64; 3],
    bounding_box_max: [f64; 3],
    centroid_offset: Option<[f64; 3]>,
    atoms: Vec<AtomRecord<'a>>,
    bond_count: usize,
    bonds: Vec<BondRecord>,
}

#[derive(Serialize)]
struct AtomRecord<'a> {
    symbol: &'a str,
    position: [f64; 3],
    radius: f64,
    color: Color,
}

#[derive(Serialize)]
struct BondRecord {
    i: usize,
    j: usize,
    length: f64,
}

/// Writes the structure and its bonds as a single JSON document.
pub fn write_json<W: Write>(mut out: W, structure: &Structure, bonds: &BondSet) -> Result<()> {
    let atoms = structure
        .symbols()
        .iter()
        .zip(structure.positions())
        .zip(structure.radii())
        .zip(structure.colors())
        .map(|(((symbol, position), radius), color)| AtomRecord {
            symbol: symbol.as_str(),
            position: *position,
            radius: *radius,
            color: *color,
        })
        .collect();

    let report = StructureReport {
        title: structure.title(),
        atom_count: structure.atom_count(),
        origin: structure.origin(),
        bounding_box_max: structure.bounding_box_max(),
        centroid_offset: structure.centroid_offset(),
        atoms,
        bond_count: bonds.bond_count(),
        bonds: bonds
            .iter()
            .map(|(bond, length)| BondRecord {
                i: bond.i,
                j: bond.j,
                length,
            })
            .collect(),
    };

    serde_json::to_writer_pretty(&mut out, &report)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Writes one line per bond: both indices, both symbols, and the length.
pub fn write_text<W: Write>(mut out: W, structure: &Structure, bonds: &BondSet) -> Result<()> {
    let symbols = structure.symbols();

    writeln!(out, "# {}", structure.title().trim())?;
    writeln!(
        out,
        "# atoms: {}  bonds: {}",
        structure.atom_count(),
        bonds.bond_count()
    )?;
    writeln!(out, "# {:>6} {:>6} {:<3} {:<3} {:>10}", "i", "j", "a", "b", "length")?;
    for (bond, length) in bonds.iter() {
        writeln!(
            out,
            "  {:>6} {:>6} {:<3} {:<3} {:>10.6}",
            bond.i, bond.j, symbols[bond.i], symbols[bond.j], length
        )?;
    }
    out.flush()?;
    Ok(())
}

/// Writes the table in the same line format it is loaded from.
///
/// Floats use their shortest exact representation, so the listing reloads
/// to an equal table.
pub fn write_table<W: Write>(mut out: W, table: &ElementTable) -> Result<()> {
    writeln!(out, "# symbol  Z  covalent_radius  max_bonds  r  g  b")?;
    for entry in table.iter() {
        writeln!(
            out,
            "{:<3} {:>3}  {}  {}  {} {} {}",
            entry.symbol,
            entry.atomic_number,
            entry.covalent_radius,
            entry.max_bonds,
            entry.color[0],
            entry.color[1],
            entry.color[2]
        )?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use xyzbond::{StructureLoader, detect_bonds};

    const WATER: &str = "3\nwater\nO 0 0 0\nH 0 0 0.9\nH 0 0 -0.9\n";

    fn water() -> (Structure, BondSet) {
        let s = StructureLoader::new(ElementTable::builtin())
            .parse(WATER, false)
            .unwrap();
        let b = detect_bonds(&s);
        (s, b)
    }

    #[test]
    fn text_report_lists_each_bond() {
        let (s, b) = water();
        let mut buf = Vec::new();
        write_text(&mut buf, &s, &b).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("# water\n# atoms: 3  bonds: 2\n"));
        let rows: Vec<_> = text.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains(" 0 ") && rows[0].contains(" 1 ") && rows[0].contains("0.900000"));
    }

    #[test]
    fn json_report_round_trips_through_serde_json() {
        let (s, b) = water();
        let mut buf = Vec::new();
        write_json(&mut buf, &s, &b).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["atom_count"], 3);
        assert_eq!(value["bond_count"], 2);
        assert_eq!(value["atoms"][0]["symbol"], "O");
        assert_eq!(value["bonds"][1]["i"], 0);
        assert_eq!(value["bonds"][1]["j"], 2);
        assert!(value["centroid_offset"].is_null());
    }

    #[test]
    fn table_listing_reloads_to_the_same_table() {
        let mut buf = Vec::new();
        write_table(&mut buf, ElementTable::builtin()).unwrap();
        let reloaded = ElementTable::load(buf.as_slice()).unwrap();

        assert_eq!(reloaded.len(), ElementTable::builtin().len());
        let o = reloaded.lookup("O").unwrap();
        assert_eq!(o.atomic_number, 8);
        assert_eq!(o.covalent_radius, 0.66);
    }

    #[test]
    fn table_listing_keeps_every_decimal() {
        let original: ElementTable = "\
H 1 0.315 1 0.125 0.5 0.333
Og 118 1.5703125 0 0.1 0.2 0.30000001
"
        .parse()
        .unwrap();

        let mut buf = Vec::new();
        write_table(&mut buf, &original).unwrap();
        let reloaded = ElementTable::load(buf.as_slice()).unwrap();

        assert_eq!(reloaded.len(), 2);
        for entry in original.iter() {
            assert_eq!(reloaded.lookup(entry.symbol.as_str()).unwrap(), entry);
        }
        assert_eq!(reloaded.lookup("H").unwrap().covalent_radius, 0.315);
        assert_eq!(reloaded.lookup("H").unwrap().color, [0.125, 0.5, 0.333]);
    }
}
