use std::collections::HashMap;
use std::io::{self, Write};

use xyzbond::{BondSet, Structure};

use crate::util::text::{format_vec3, truncate};

const INDENT: &str = "      ";
const KEY_WIDTH: usize = 18;
const VALUE_WIDTH: usize = 34;
const MAX_DISTRIBUTION_ROWS: usize = 12;

pub fn print_structure_info(structure: &Structure) {
    let title = if structure.title().trim().is_empty() {
        "(untitled)".to_string()
    } else {
        structure.title().trim().to_string()
    };

    let mut rows = vec![
        ("Title", title),
        ("Atoms", structure.atom_count().to_string()),
        ("Origin (Å)", format_vec3(structure.origin(), 3)),
        ("Extent (Å)", format_vec3(structure.bounding_box_max(), 3)),
    ];
    if let Some(offset) = structure.centroid_offset() {
        rows.push(("Centered on", format_vec3(offset, 3)));
    }
    if structure.is_large() {
        rows.push(("Display hint", "large structure".to_string()));
    }

    print_kv_table(&mut io::stderr().lock(), "Structure Summary", &rows);
}

pub fn print_element_distribution(structure: &Structure) {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for symbol in structure.symbols() {
        *counts.entry(symbol.as_str()).or_insert(0) += 1;
    }

    let mut sorted: Vec<_> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    print_distribution(
        &mut io::stderr().lock(),
        "Element Distribution",
        &sorted,
        structure.atom_count(),
    );
}

pub fn print_bond_summary(structure: &Structure, bonds: &BondSet) {
    let mut rows = vec![("Bonds", bonds.bond_count().to_string())];

    if !bonds.is_empty() {
        let lengths = bonds.lengths();
        let min = lengths.iter().copied().fold(f64::INFINITY, f64::min);
        let max = lengths.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = lengths.iter().sum::<f64>() / lengths.len() as f64;
        rows.push(("Shortest (Å)", format!("{min:.4}")));
        rows.push(("Longest (Å)", format!("{max:.4}")));
        rows.push(("Mean (Å)", format!("{mean:.4}")));
    }

    let degrees = bonds.degrees(structure.atom_count());
    let isolated = degrees.iter().filter(|&&d| d == 0).count();
    rows.push(("Isolated atoms", isolated.to_string()));
    rows.push((
        "Over max bonds",
        bonds.overbonded(structure).len().to_string(),
    ));

    print_kv_table(&mut io::stderr().lock(), "Connectivity", &rows);
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{INDENT}{left}{}{mid}{}{right}",
            "─".repeat(KEY_WIDTH + 2),
            "─".repeat(VALUE_WIDTH + 2)
        )
    };

    let _ = writeln!(out, "{INDENT}┌─ {} ─┐", truncate(title, KEY_WIDTH + VALUE_WIDTH));
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));
    for (key, value) in rows {
        let _ = writeln!(
            out,
            "{INDENT}│ {:<KEY_WIDTH$} │ {:>VALUE_WIDTH$} │",
            truncate(key, KEY_WIDTH),
            truncate(value, VALUE_WIDTH)
        );
    }
    let _ = writeln!(out, "{}", rule("└", "┴", "┘"));
}

fn print_distribution(out: &mut impl Write, title: &str, data: &[(&str, usize)], total: usize) {
    const NAME_W: usize = 8;
    const COUNT_W: usize = 8;
    const BAR_W: usize = 20;

    let dist_w = BAR_W + 8;
    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{INDENT}{left}{}{mid}{}{mid}{}{right}",
            "─".repeat(NAME_W + 2),
            "─".repeat(COUNT_W + 2),
            "─".repeat(dist_w + 2)
        )
    };

    let _ = writeln!(out, "{INDENT}┌─ {title} ─┐");
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));
    let _ = writeln!(
        out,
        "{INDENT}│ {:<NAME_W$} │ {:>COUNT_W$} │ {:<dist_w$} │",
        "Element", "Count", "Share"
    );
    let _ = writeln!(out, "{}", rule("├", "┼", "┤"));

    for (name, count) in data.iter().take(MAX_DISTRIBUTION_ROWS) {
        let pct = if total == 0 {
            0.0
        } else {
            *count as f64 / total as f64 * 100.0
        };
        let filled = ((pct / 100.0) * BAR_W as f64).round() as usize;
        let bar = format!(
            "{}{}  {:>5.1}%",
            "█".repeat(filled),
            "░".repeat(BAR_W.saturating_sub(filled)),
            pct
        );
        let _ = writeln!(
            out,
            "{INDENT}│ {:<NAME_W$} │ {:>COUNT_W$} │ {:<dist_w$} │",
            truncate(name, NAME_W),
            count,
            bar
        );
    }
    if data.len() > MAX_DISTRIBUTION_ROWS {
        let _ = writeln!(
            out,
            "{INDENT}│ {:<NAME_W$} │ {:>COUNT_W$} │ {:<dist_w$} │",
            "...",
            "...",
            format!("({} more)", data.len() - MAX_DISTRIBUTION_ROWS)
        );
    }
    let _ = writeln!(out, "{}", rule("└", "┴", "┘"));
}
