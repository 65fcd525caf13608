use log::{debug, trace};

use super::{ReductionError, Result};
use crate::fresh_ids::FreshIds;
use crate::instance::{Clause, Cnf, Literal};

/// Rewrites every clause wider than three literals into an equisatisfiable chain of 3-literal
/// clauses linked by fresh variables. Narrower clauses are copied unchanged.
pub fn reduce(cnf: &Cnf) -> Result<Cnf> {
    let mut ids = FreshIds::for_cnf(cnf);
    let mut out = Cnf::new();
    for &var in cnf.variables() {
        out.add_variable(var);
    }

    for clause in cnf.clauses() {
        if clause.len() <= 3 {
            out.push_clause(clause.clone());
            continue;
        }
        for link in split_clause(clause, &mut ids)? {
            trace!("{:?} => {:?}", clause, link);
            out.push_clause(link);
        }
    }

    out.recount();
    out.set_num_vars(cnf.num_vars() + ids.issued() as usize);
    debug!(
        "split {} clauses into {}, adding {} fresh variables above {}",
        cnf.num_clauses(),
        out.num_clauses(),
        ids.issued(),
        ids.highest()
    );
    Ok(out)
}

/// `[l1, l2, f1], [-f1, l3, f2], ..., [-f(w-3), l(w-1), lw]`
fn split_clause(clause: &Clause, ids: &mut FreshIds) -> Result<Vec<Clause>> {
    let lits = clause.literals();
    let w = lits.len();
    let fresh = (0..w - 3)
        .map(|_| ids.next_literal().ok_or(ReductionError::IdSpaceExhausted))
        .collect::<Result<Vec<Literal>>>()?;

    let mut links = Vec::with_capacity(w - 2);
    links.push(Clause::new(vec![lits[0], lits[1], fresh[0]])?);
    for i in 1..w - 3 {
        links.push(Clause::new(vec![fresh[i - 1].invert(), lits[i + 1], fresh[i]])?);
    }
    links.push(Clause::new(vec![
        fresh[w - 4].invert(),
        lits[w - 2],
        lits[w - 1],
    ])?);
    Ok(links)
}
