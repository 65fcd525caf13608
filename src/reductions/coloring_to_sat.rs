//! Graph k-colouring as CNF.
//!
//! Node `n` having colour `c` (`0 <= c < k`) is the variable `n * k + c`. Each node gets an
//! at-least-one clause over its `k` variables and an at-most-one clause per colour pair; each
//! edge gets one clause per colour forbidding both endpoints from taking it.
use fnv::FnvHashSet;
use itertools::Itertools;
use log::{debug, trace};

use super::{ReductionError, Result};
use crate::instance::{Clause, Cnf, Coloring, Edge, Graph, Literal, Node, Variable};

/// The variable meaning "`node` has colour `color`".
pub fn color_variable(node: Node, color: u64, colors: u64) -> Result<Variable> {
    if node.0 < 1 {
        return Err(ReductionError::NodeOutOfRange(node));
    }
    (node.0 as u64)
        .checked_mul(colors)
        .and_then(|base| base.checked_add(color))
        .filter(|&id| Literal::new(Variable(id), true).is_some())
        .map(Variable)
        .ok_or(ReductionError::IdSpaceExhausted)
}

fn color_count(colors: i64) -> Result<u64> {
    if colors <= 0 {
        return Err(ReductionError::InvalidColorCount(colors));
    }
    Ok(colors as u64)
}

fn literal(var: Variable, polarity: bool) -> Result<Literal> {
    Literal::new(var, polarity).ok_or(ReductionError::IdSpaceExhausted)
}

pub fn reduce(graph: &Graph, colors: i64) -> Result<Cnf> {
    let k = color_count(colors)?;
    let mut cnf = Cnf::new();

    for &node in graph.nodes() {
        let vars = (0..k)
            .map(|c| color_variable(node, c, k))
            .collect::<Result<Vec<_>>>()?;

        // At least one colour
        let at_least_one = vars
            .iter()
            .map(|&v| literal(v, true))
            .collect::<Result<Vec<_>>>()?;
        cnf.push_clause(Clause::new(at_least_one)?);

        // At most one colour
        for (&a, &b) in vars.iter().tuple_combinations() {
            cnf.push_clause(Clause::new(vec![literal(a, false)?, literal(b, false)?])?);
        }
        trace!("node {:?}: colour variables {:?}", node, vars);
    }

    // Adjacent nodes differ
    for &Edge(u, v) in graph.edges() {
        for c in 0..k {
            let a = color_variable(u, c, k)?;
            let b = color_variable(v, c, k)?;
            cnf.push_clause(Clause::new(vec![literal(a, false)?, literal(b, false)?])?);
        }
    }

    cnf.recount();
    debug!(
        "{}-colouring of {} nodes and {} edges encoded as {} variables and {} clauses",
        k,
        graph.nodes().len(),
        graph.edges().len(),
        cnf.num_vars(),
        cnf.num_clauses()
    );
    Ok(cnf)
}

/// Recovers the colouring from a model of the reduced formula: each node takes the unique colour
/// whose variable is true.
pub fn decode(graph: &Graph, colors: i64, model: &[Literal]) -> Result<Coloring> {
    let k = color_count(colors)?;
    let truths: FnvHashSet<Variable> = model
        .iter()
        .filter(|lit| lit.polarity())
        .map(|lit| lit.var())
        .collect();

    let mut coloring = Coloring::new();
    for &node in graph.nodes() {
        let mut chosen = None;
        for c in 0..k {
            if truths.contains(&color_variable(node, c, k)?) {
                if chosen.is_some() {
                    return Err(ReductionError::UndecodableNode(node));
                }
                chosen = Some(c as usize);
            }
        }
        let color = chosen.ok_or(ReductionError::UndecodableNode(node))?;
        coloring.insert(node, color);
    }
    Ok(coloring)
}
