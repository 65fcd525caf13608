//! Strict readers and writers for the DIMACS `cnf` and `edge` text formats.
//!
//! Both formats share the same line discipline: blank lines and lines starting with `c` are
//! comments, exactly one `p <kind> <ids> <entries>` line must come before any data line, and the
//! declared counts must match what was actually read.
pub mod cnf;
pub mod graph;

use std::io::{self, BufRead, BufReader, Lines, Read};

use log::trace;
use thiserror::Error;

use crate::instance::InstanceError;

#[derive(Error, Debug)]
pub enum DimacsError {
    #[error("malformed problem line at line {0}")]
    MalformedHeader(usize),
    #[error("wrong problem type at line {line}: expected {expected}, found {found}")]
    WrongProblemType {
        line: usize,
        expected: &'static str,
        found: String,
    },
    #[error("second problem line at line {0}")]
    DuplicateHeader(usize),
    #[error("no problem line found")]
    MissingHeader,
    #[error("data before problem line at line {0}")]
    BeforeHeader(usize),
    #[error("clause line does not end in 0 at line {0}")]
    Unterminated(usize),
    #[error("0 used as a literal at line {0}")]
    MisplacedZero(usize),
    #[error("empty clause at line {0}")]
    EmptyClause(usize),
    #[error("malformed edge line at line {0}")]
    MalformedEdge(usize),
    #[error("not a valid value at line {line}: {token}")]
    InvalidToken { line: usize, token: String },
    #[error("declared {declared} {what} but found {actual}")]
    CountMismatch {
        what: &'static str,
        declared: usize,
        actual: usize,
    },
    #[error("invalid instance")]
    Instance(#[from] InstanceError),
    #[error("io error")]
    IO(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, DimacsError>;

/// The declared counts from a `p` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DimacsHeader {
    pub(crate) ids: usize,
    pub(crate) entries: usize,
}

impl DimacsHeader {
    fn parse(line_no: usize, line: &str, kind: &'static str) -> Result<Self> {
        let words = line.split_whitespace().collect::<Vec<_>>();
        if words.len() != 4 || words[0] != "p" {
            return Err(DimacsError::MalformedHeader(line_no));
        }
        if words[1] != kind {
            return Err(DimacsError::WrongProblemType {
                line: line_no,
                expected: kind,
                found: words[1].to_string(),
            });
        }
        let count = |w: &str| {
            w.parse::<usize>()
                .map_err(|_| DimacsError::MalformedHeader(line_no))
        };
        Ok(Self {
            ids: count(words[2])?,
            entries: count(words[3])?,
        })
    }
}

/// Yields the non-comment lines of a DIMACS document with their 1-based line numbers.
pub(crate) struct ProblemLines<R: Read> {
    lines: Lines<BufReader<R>>,
    line_no: usize,
}

impl<R: Read> ProblemLines<R> {
    pub(crate) fn new(reader: R) -> Self {
        ProblemLines {
            lines: BufReader::new(reader).lines(),
            line_no: 0,
        }
    }

    /// Reads up to and including the problem line.
    pub(crate) fn header(&mut self, kind: &'static str) -> Result<DimacsHeader> {
        match self.next_line()? {
            None => Err(DimacsError::MissingHeader),
            Some((line_no, line)) if line.starts_with('p') => {
                let header = DimacsHeader::parse(line_no, &line, kind)?;
                trace!("header: {:?}", header);
                Ok(header)
            }
            Some((line_no, _)) => Err(DimacsError::BeforeHeader(line_no)),
        }
    }

    /// The next data line. A further problem line is an error.
    pub(crate) fn data_line(&mut self) -> Result<Option<(usize, String)>> {
        match self.next_line()? {
            Some((line_no, line)) if line.starts_with('p') => {
                Err(DimacsError::DuplicateHeader(line_no))
            }
            other => Ok(other),
        }
    }

    fn next_line(&mut self) -> Result<Option<(usize, String)>> {
        for line in self.lines.by_ref() {
            self.line_no += 1;
            let line = line?;
            let trimmed = line.trim();
            // Blank lines and lines starting with c are comments
            if trimmed.is_empty() || trimmed.starts_with('c') {
                continue;
            }
            return Ok(Some((self.line_no, trimmed.to_string())));
        }
        Ok(None)
    }
}

pub(crate) fn check_count(what: &'static str, declared: usize, actual: usize) -> Result<()> {
    if declared != actual {
        return Err(DimacsError::CountMismatch {
            what,
            declared,
            actual,
        });
    }
    Ok(())
}

pub(crate) fn parse_token<T: std::str::FromStr>(line: usize, token: &str) -> Result<T> {
    token.parse::<T>().map_err(|_| DimacsError::InvalidToken {
        line,
        token: token.to_string(),
    })
}
