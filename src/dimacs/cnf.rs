use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use itertools::Itertools;
use log::debug;

use super::{check_count, parse_token, DimacsError, ProblemLines, Result};
use crate::instance::{Clause, Cnf, Literal};

pub fn parse<P: AsRef<Path>>(filename: P) -> Result<Cnf> {
    let file = File::open(filename)?;
    read(file)
}

pub fn read<R: Read>(reader: R) -> Result<Cnf> {
    let mut lines = ProblemLines::new(reader);
    let header = lines.header("cnf")?;
    let mut cnf = Cnf::with_header(header.ids, header.entries);

    while let Some((line_no, line)) = lines.data_line()? {
        cnf.push_clause(parse_clause(line_no, &line)?);
    }

    check_count("clauses", cnf.num_clauses(), cnf.clauses().len())?;
    check_count("variables", cnf.num_vars(), cnf.variables().len())?;
    debug!(
        "read cnf with {} variables and {} clauses",
        cnf.num_vars(),
        cnf.num_clauses()
    );
    Ok(cnf)
}

fn parse_clause(line_no: usize, line: &str) -> Result<Clause> {
    let words = line.split_whitespace().collect::<Vec<_>>();
    let (&last, body) = match words.split_last() {
        Some(split) => split,
        None => return Err(DimacsError::Unterminated(line_no)),
    };
    if last != "0" {
        return Err(DimacsError::Unterminated(line_no));
    }
    if body.is_empty() {
        return Err(DimacsError::EmptyClause(line_no));
    }

    let mut literals = Vec::with_capacity(body.len());
    for &word in body {
        let value = parse_token::<i64>(line_no, word)?;
        if value == 0 {
            return Err(DimacsError::MisplacedZero(line_no));
        }
        let literal = Literal::from_dimacs(value).ok_or_else(|| DimacsError::InvalidToken {
            line: line_no,
            token: word.to_string(),
        })?;
        literals.push(literal);
    }
    Ok(Clause::new(literals)?)
}

/// Serialises a complete formula. Nothing is written if the formula is incomplete.
pub fn write<W: Write>(writer: W, cnf: &Cnf) -> Result<()> {
    cnf.check_complete()?;

    let mut writer = BufWriter::new(writer);
    writeln!(writer, "c CNF problem written by npreduce")?;
    writeln!(writer, "p cnf {} {}", cnf.num_vars(), cnf.num_clauses())?;
    for clause in cnf.clauses() {
        writeln!(writer, "{} 0", clause.iter().join(" "))?;
    }
    writer.flush()?;
    Ok(())
}
