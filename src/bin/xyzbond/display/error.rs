use std::io::{self, Write};

use anyhow::Error;
use xyzbond::{LoadError, MAX_ATOMS, TableError};

use crate::util::text::wrap;

const INNER_WIDTH: usize = 60;

pub fn print_error(err: &Error) {
    let mut out = io::stderr().lock();
    let bar = "═".repeat(INNER_WIDTH + 2);
    let divider = "─".repeat(INNER_WIDTH + 2);

    let _ = writeln!(out);
    let _ = writeln!(out, "   ╔{bar}╗");
    let _ = writeln!(out, "   ║ {:<INNER_WIDTH$} ║", "✗ Error");
    let _ = writeln!(out, "   ╟{divider}╢");
    for line in wrap(&err.to_string(), INNER_WIDTH) {
        let _ = writeln!(out, "   ║ {line:<INNER_WIDTH$} ║");
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(out, "   ╟{divider}╢");
        let _ = writeln!(out, "   ║ {:<INNER_WIDTH$} ║", "Caused by:");
        for line in wrap(&cause.to_string(), INNER_WIDTH - 2) {
            let _ = writeln!(out, "   ║   {line:<w$} ║", w = INNER_WIDTH - 2);
        }
    }

    let hints = hints_for(err);
    if !hints.is_empty() {
        let _ = writeln!(out, "   ╟{divider}╢");
        let _ = writeln!(out, "   ║ {:<INNER_WIDTH$} ║", "Hints:");
        for hint in hints {
            for (i, line) in wrap(&hint, INNER_WIDTH - 4).into_iter().enumerate() {
                let bullet = if i == 0 { "•" } else { " " };
                let _ = writeln!(out, "   ║   {bullet} {line:<w$} ║", w = INNER_WIDTH - 4);
            }
        }
    }

    let _ = writeln!(out, "   ╚{bar}╝");
    let _ = writeln!(out);
}

/// Collects remediation hints by inspecting the typed errors in the chain.
fn hints_for(err: &Error) -> Vec<String> {
    if let Some(load) = err.chain().find_map(|e| e.downcast_ref::<LoadError>()) {
        return load_hints(load);
    }
    if let Some(table) = err.chain().find_map(|e| e.downcast_ref::<TableError>()) {
        return table_hints(table);
    }
    if let Some(io_err) = err.chain().find_map(|e| e.downcast_ref::<io::Error>()) {
        return std_io_hints(io_err);
    }
    fallback_hints(err)
}

fn load_hints(err: &LoadError) -> Vec<String> {
    match err {
        LoadError::Io { source } => std_io_hints(source),
        LoadError::InvalidAtomCount { .. } => vec![
            "The first line must hold the number of atoms as an integer".into(),
            format!("Structures are limited to {MAX_ATOMS} atoms"),
        ],
        LoadError::TruncatedInput { expected, found } => vec![
            format!("The atom count promises {expected} lines but the input has {found}"),
            "Check that the count on line 1 matches the atom lines that follow".into(),
            "Remember that line 2 is a title line, even if left blank".into(),
        ],
        LoadError::MalformedCoordinateLine { line, .. } => vec![
            format!("Inspect line {line} of the input"),
            "Every atom line must read: symbol x y z".into(),
        ],
        LoadError::CoordinateOutOfRange { atom, .. } => vec![
            format!("Inspect atom {atom} (line {} of the input)", atom + 3),
            "Coordinates must be finite and span less than about 1.8e308 per axis".into(),
        ],
        LoadError::UnknownElement { source, .. } => vec![
            format!("'{}' is not in the element table", source.symbol()),
            "Symbols are case-sensitive (e.g. 'Cl', not 'CL')".into(),
            "Supply a custom table with --elements <FILE>".into(),
            "Run `xyzbond elements` to list the known symbols".into(),
        ],
    }
}

fn table_hints(err: &TableError) -> Vec<String> {
    match err {
        TableError::Io { source } => std_io_hints(source),
        TableError::MalformedReferenceData { line, .. } => vec![
            format!("Inspect line {line} of the element table"),
            "Data lines read: symbol Z radius max_bonds r g b".into(),
            "Color channels must lie within [0, 1]".into(),
        ],
        TableError::DuplicateSymbol { symbol, .. } => vec![
            format!("'{symbol}' is defined more than once"),
            "Remove the duplicate or pass --allow-duplicates to keep the last one".into(),
        ],
    }
}

fn std_io_hints(err: &io::Error) -> Vec<String> {
    use io::ErrorKind;

    let hints: &[&str] = match err.kind() {
        ErrorKind::NotFound => &["Check that the file path is spelled correctly"],
        ErrorKind::PermissionDenied => &["Check the file permissions"],
        ErrorKind::InvalidData => &["The input is not valid UTF-8 text"],
        ErrorKind::BrokenPipe => &["The consumer of stdout exited early"],
        _ => &["Check the file path and its permissions"],
    };
    hints.iter().map(|h| h.to_string()).collect()
}

fn fallback_hints(err: &Error) -> Vec<String> {
    let text = err
        .chain()
        .map(|e| e.to_string().to_lowercase())
        .collect::<Vec<_>>()
        .join("\n");

    if text.contains("stdin") || text.contains("terminal") {
        vec!["Pass an input file or pipe XYZ data to stdin".into()]
    } else {
        Vec::new()
    }
}
