use std::fmt;

use super::variable::MAX_VARIABLE;
use super::Variable;

/// A literal in its DIMACS encoding: the sign is the polarity, the magnitude the variable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal(i64);

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.polarity() {
            write!(f, "{:?}", self.var())
        } else {
            write!(f, "!{:?}", self.var())
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Literal {
    /// Returns `None` for variable 0 or one too large to negate.
    pub fn new(var: Variable, polarity: bool) -> Option<Literal> {
        if var.0 == 0 || var.0 > MAX_VARIABLE {
            return None;
        }
        let value = var.0 as i64;
        Some(Literal(if polarity { value } else { -value }))
    }

    /// `0` is the clause terminator and `i64::MIN` has no positive counterpart.
    pub fn from_dimacs(value: i64) -> Option<Literal> {
        match value {
            0 | i64::MIN => None,
            _ => Some(Literal(value)),
        }
    }

    pub fn to_dimacs(&self) -> i64 {
        self.0
    }

    pub fn var(&self) -> Variable {
        Variable(self.0.unsigned_abs())
    }

    pub fn polarity(&self) -> bool {
        self.0 > 0
    }

    pub fn invert(&self) -> Literal {
        Literal(-self.0)
    }
}

#[cfg(test)]
mod test {
    use crate::instance::*;

    #[test]
    fn test_literal_bookkeeping() {
        for idx in vec![1, 10000000, 1000, 1 << 46] {
            let var = Variable(idx);
            let lit = Literal::new(var, true).unwrap();
            assert_eq!(lit.var(), var);
            assert_eq!(lit.invert().var(), var);
            assert_eq!(lit.polarity(), true);
            assert_eq!(lit.invert().polarity(), false);
            assert_eq!(lit.invert().to_dimacs(), -(idx as i64));
        }
    }

    #[test]
    fn test_unrepresentable_literals() {
        assert_eq!(Literal::from_dimacs(0), None);
        assert_eq!(Literal::from_dimacs(i64::MIN), None);
        assert_eq!(Literal::new(Variable(0), true), None);
        assert_eq!(Literal::new(Variable(1 << 63), false), None);
        assert!(Literal::from_dimacs(i64::MAX).is_some());
    }
}
