use crate::instance::{Cnf, Node, Variable};
use crate::instance::{Literal, MAX_VARIABLE};

/// Hands out identifiers above everything already used by an instance, in strictly increasing
/// order. One allocator belongs to exactly one reduction run.
#[derive(Clone, Debug)]
pub struct FreshIds {
    highest: u64,
    issued: u64,
}

impl FreshIds {
    pub fn above(highest: u64) -> FreshIds {
        FreshIds { highest, issued: 0 }
    }

    pub fn for_cnf(cnf: &Cnf) -> FreshIds {
        Self::above(cnf.highest_variable())
    }

    /// `None` once the next id would no longer fit a DIMACS literal.
    pub fn next(&mut self) -> Option<u64> {
        let id = self.highest.checked_add(self.issued + 1)?;
        if id > MAX_VARIABLE {
            return None;
        }
        self.issued += 1;
        Some(id)
    }

    pub fn next_variable(&mut self) -> Option<Variable> {
        self.next().map(Variable)
    }

    pub fn next_literal(&mut self) -> Option<Literal> {
        self.next_variable().and_then(|v| Literal::new(v, true))
    }

    pub fn next_node(&mut self) -> Option<Node> {
        self.next().map(|id| Node(id as i64))
    }

    /// How many ids have been handed out so far.
    pub fn issued(&self) -> u64 {
        self.issued
    }

    /// The id everything handed out sits above.
    pub fn highest(&self) -> u64 {
        self.highest
    }
}
