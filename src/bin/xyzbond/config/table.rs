use std::borrow::Cow;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use xyzbond::{DuplicatePolicy, ElementTable};

use crate::cli::TableOptions;

/// Where the active element table came from.
#[derive(Debug, Clone)]
pub enum TableSource {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for TableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableSource::Builtin => write!(f, "built-in"),
            TableSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub fn load_table(opts: &TableOptions) -> Result<(Cow<'static, ElementTable>, TableSource)> {
    let Some(path) = &opts.elements else {
        return Ok((Cow::Borrowed(ElementTable::builtin()), TableSource::Builtin));
    };

    let policy = if opts.allow_duplicates {
        DuplicatePolicy::LastWins
    } else {
        DuplicatePolicy::Reject
    };

    let file = File::open(path)
        .with_context(|| format!("Failed to open element table: {}", path.display()))?;
    let table = ElementTable::load_with(BufReader::new(file), policy)
        .with_context(|| format!("Failed to load element table: {}", path.display()))?;

    Ok((Cow::Owned(table), TableSource::File(path.clone())))
}
