use core::fmt;

use super::{InstanceError, Literal};

/// A disjunction of literals. Order is kept exactly as given; repeated
/// variables and tautologies are not simplified away.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(literals: Vec<Literal>) -> Result<Clause, InstanceError> {
        if literals.is_empty() {
            return Err(InstanceError::EmptyClause);
        }
        Ok(Clause { literals })
    }

    pub fn from_dimacs(values: &[i64]) -> Result<Clause, InstanceError> {
        let literals = values
            .iter()
            .map(|&v| Literal::from_dimacs(v).ok_or(InstanceError::ZeroLiteral))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(literals)
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_unit(&self) -> bool {
        self.len() == 1
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn iter(&self) -> impl Iterator<Item = &Literal> + '_ {
        self.literals.iter()
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut fst = true;
        for &lit in &self.literals {
            if !fst {
                write!(f, ", ")?;
            }
            fst = false;
            write!(f, "{:?}", lit)?;
        }
        Ok(())
    }
}
