use std::collections::BTreeSet;

use fnv::FnvHashSet;

use super::{Clause, InstanceError, Literal, Variable};

/// A CNF formula together with its declared header counts.
///
/// The declared counts and the actual contents only have to agree once the
/// formula is complete, which is checked before it is serialised.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cnf {
    num_vars: usize,
    num_clauses: usize,
    variables: BTreeSet<Variable>,
    clauses: Vec<Clause>,
}

impl Cnf {
    pub fn new() -> Cnf {
        Cnf::default()
    }

    pub(crate) fn with_header(num_vars: usize, num_clauses: usize) -> Cnf {
        Cnf {
            num_vars,
            num_clauses,
            variables: BTreeSet::new(),
            clauses: Vec::with_capacity(num_clauses),
        }
    }

    /// Builds a complete formula from DIMACS literal values.
    pub fn from_clauses(clauses: Vec<Vec<i64>>) -> Result<Cnf, InstanceError> {
        let mut cnf = Cnf::new();
        for values in clauses {
            cnf.push_clause(Clause::from_dimacs(&values)?);
        }
        cnf.recount();
        Ok(cnf)
    }

    pub(crate) fn push_clause(&mut self, clause: Clause) {
        self.variables.extend(clause.iter().map(|l| l.var()));
        self.clauses.push(clause);
    }

    pub(crate) fn add_variable(&mut self, var: Variable) {
        self.variables.insert(var);
    }

    pub(crate) fn set_num_vars(&mut self, num_vars: usize) {
        self.num_vars = num_vars;
    }

    /// Sets the declared counts from the actual contents.
    pub(crate) fn recount(&mut self) {
        self.num_vars = self.variables.len();
        self.num_clauses = self.clauses.len();
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn num_clauses(&self) -> usize {
        self.num_clauses
    }

    pub fn variables(&self) -> &BTreeSet<Variable> {
        &self.variables
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn highest_variable(&self) -> u64 {
        self.variables.last().map(|v| v.0).unwrap_or(0)
    }

    pub fn max_clause_width(&self) -> usize {
        self.clauses.iter().map(Clause::len).max().unwrap_or(0)
    }

    pub fn is_complete(&self) -> bool {
        self.check_complete().is_ok()
    }

    pub fn check_complete(&self) -> Result<(), InstanceError> {
        if self.num_vars > 0
            && self.num_clauses > 0
            && self.variables.len() == self.num_vars
            && self.clauses.len() == self.num_clauses
        {
            return Ok(());
        }
        Err(InstanceError::Incomplete {
            kind: "cnf",
            declared_ids: self.num_vars,
            actual_ids: self.variables.len(),
            declared_items: self.num_clauses,
            actual_items: self.clauses.len(),
        })
    }

    /// Whether every clause holds under `model`. A literal is true iff it is in the model.
    pub fn evaluate(&self, model: &[Literal]) -> bool {
        let truths: FnvHashSet<Literal> = model.iter().copied().collect();
        self.clauses
            .iter()
            .all(|clause| clause.iter().any(|lit| truths.contains(lit)))
    }
}
