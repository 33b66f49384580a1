use crate::io::error::Error;
use crate::model::structure::MAX_ATOMS;
use std::io::BufRead;

pub(super) const AXES: [&str; 3] = ["x", "y", "z"];

/// Raw contents of one XYZ frame before element resolution.
#[derive(Debug)]
pub(super) struct Frame {
    pub title: String,
    pub atoms: Vec<(String, [f64; 3])>,
}

/// Reads the first frame of an XYZ atom list.
///
/// Lines after the declared atom block are left unread.
pub(super) fn read<R: BufRead>(reader: R) -> Result<Frame, Error> {
    let mut lines = reader.lines();

    let count_line = next_line(&mut lines)?.ok_or(Error::TruncatedInput {
        expected: 2,
        found: 0,
    })?;
    let atom_count = parse_atom_count(&count_line)?;
    let expected = atom_count + 2;

    let title = next_line(&mut lines)?.ok_or(Error::TruncatedInput { expected, found: 1 })?;

    let mut atoms = Vec::with_capacity(atom_count);
    for idx in 0..atom_count {
        let ln = idx + 3;
        let raw = next_line(&mut lines)?.ok_or(Error::TruncatedInput {
            expected,
            found: ln - 1,
        })?;
        atoms.push(parse_atom_line(&raw, ln)?);
    }

    Ok(Frame {
        title: title.trim_end().to_string(),
        atoms,
    })
}

fn next_line<I>(lines: &mut I) -> Result<Option<String>, Error>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    lines.next().transpose().map_err(Error::from)
}

fn parse_atom_count(line: &str) -> Result<usize, Error> {
    let token = line
        .split_whitespace()
        .next()
        .ok_or_else(|| Error::invalid_atom_count("first line is empty"))?;
    let count = token
        .parse::<i64>()
        .map_err(|_| Error::invalid_atom_count(format!("'{token}' is not an integer")))?;

    if count < 0 {
        return Err(Error::invalid_atom_count(format!(
            "{count} is negative"
        )));
    }
    if count > MAX_ATOMS as i64 {
        return Err(Error::invalid_atom_count(format!(
            "{count} exceeds the limit of {MAX_ATOMS} atoms"
        )));
    }
    Ok(count as usize)
}

fn parse_atom_line(line: &str, ln: usize) -> Result<(String, [f64; 3]), Error> {
    let tokens: Vec<_> = line.split_whitespace().collect();
    if tokens.len() != 4 {
        return Err(Error::malformed_line(
            ln,
            format!(
                "expected 4 fields (symbol x y z), found {}",
                tokens.len()
            ),
        ));
    }

    let mut position = [0.0; 3];
    for (k, token) in tokens[1..].iter().enumerate() {
        let value = token.parse::<f64>().map_err(|_| {
            Error::malformed_line(ln, format!("invalid {} coordinate '{token}'", AXES[k]))
        })?;
        if !value.is_finite() {
            return Err(Error::malformed_line(
                ln,
                format!("non-finite {} coordinate '{token}'", AXES[k]),
            ));
        }
        position[k] = value;
    }

    Ok((tokens[0].to_string(), position))
}
