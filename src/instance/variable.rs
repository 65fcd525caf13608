use std::fmt;

/// Largest identifier that still has a representable negation in DIMACS.
pub const MAX_VARIABLE: u64 = i64::MAX as u64;

#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Variable(pub u64);

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}
