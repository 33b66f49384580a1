use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result};

pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

/// A command's input or output: a file when a path was given, otherwise the
/// matching standard stream.
#[derive(Debug, Clone, Copy)]
pub struct Endpoint<'a> {
    path: Option<&'a Path>,
    stream: &'static str,
}

impl<'a> Endpoint<'a> {
    pub fn input(path: Option<&'a Path>) -> Self {
        Self {
            path,
            stream: "stdin",
        }
    }

    pub fn output(path: Option<&'a Path>) -> Self {
        Self {
            path,
            stream: "stdout",
        }
    }

    pub fn is_stream(&self) -> bool {
        self.path.is_none()
    }

    /// True when reading would block on a user typing into the terminal.
    pub fn is_interactive_stdin(&self) -> bool {
        self.is_stream() && self.stream == "stdin" && io::stdin().is_terminal()
    }

    pub fn reader(&self) -> Result<Box<dyn BufRead>> {
        Ok(match self.path {
            Some(p) => {
                let file = File::open(p)
                    .with_context(|| format!("Failed to open input file: {}", p.display()))?;
                Box::new(BufReader::new(file))
            }
            None => Box::new(io::stdin().lock()),
        })
    }

    pub fn writer(&self) -> Result<Box<dyn Write>> {
        Ok(match self.path {
            Some(p) => {
                let file = File::create(p)
                    .with_context(|| format!("Failed to create output file: {}", p.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(BufWriter::new(io::stdout().lock())),
        })
    }
}

impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path {
            Some(p) => write!(f, "{}", p.display()),
            None => f.write_str(self.stream),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streams_are_named_after_their_role() {
        assert_eq!(Endpoint::input(None).to_string(), "stdin");
        assert_eq!(Endpoint::output(None).to_string(), "stdout");
        assert!(Endpoint::output(None).is_stream());
        assert!(!Endpoint::output(None).is_interactive_stdin());
    }

    #[test]
    fn files_are_named_by_path() {
        let path = Path::new("data/water.xyz");
        let input = Endpoint::input(Some(path));
        assert_eq!(input.to_string(), "data/water.xyz");
        assert!(!input.is_stream());
        assert!(!input.is_interactive_stdin());
    }

    #[test]
    fn missing_input_file_reports_its_path() {
        let path = Path::new("definitely/not/here.xyz");
        let err = Endpoint::input(Some(path)).reader().err().unwrap();
        assert!(err.to_string().contains("definitely/not/here.xyz"));
        assert!(err.downcast_ref::<io::Error>().is_some());
    }
}
