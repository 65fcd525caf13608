// The `instance` module contains the data model for CNF formulas and graphs. Instances are built up
// while parsing or reducing and are treated as immutable once handed out.
mod variable;
pub use crate::instance::variable::{Variable, MAX_VARIABLE};

mod literal;
pub use crate::instance::literal::Literal;

mod clause;
pub use crate::instance::clause::Clause;

mod cnf;
pub use crate::instance::cnf::Cnf;

mod graph;
pub use crate::instance::graph::{Coloring, Edge, Graph, Node};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstanceError {
    #[error("literal must not be zero")]
    ZeroLiteral,
    #[error("clause has no literals")]
    EmptyClause,
    #[error("duplicate edge: {0} {1}")]
    DuplicateEdge(i64, i64),
    #[error(
        "incomplete {kind}: declared {declared_ids} ids and {declared_items} entries, \
         found {actual_ids} ids and {actual_items} entries"
    )]
    Incomplete {
        kind: &'static str,
        declared_ids: usize,
        actual_ids: usize,
        declared_items: usize,
        actual_items: usize,
    },
}
