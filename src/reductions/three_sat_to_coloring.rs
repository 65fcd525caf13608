//! 3-SAT as graph 3-colouring.
//!
//! Two fresh nodes, `False` and `Ground`, are joined by an edge, so any node adjacent to both
//! must take the remaining colour, which plays the role of "true". Literals are nodes named by
//! their signed DIMACS value. Each clause becomes a gadget whose output node is adjacent to both
//! `False` and `Ground` and can only be coloured true when one of its literal nodes is. A literal
//! and its negation are joined to each other and to `Ground`, so exactly one of them is true.
use itertools::Itertools;
use log::{debug, trace};

use super::{ReductionError, Result};
use crate::fresh_ids::FreshIds;
use crate::instance::{Clause, Cnf, Coloring, Graph, Literal, Node};

/// The reduced graph along with the two reference nodes needed to read a colouring back.
#[derive(Clone, Debug)]
pub struct ColoringGadget {
    pub graph: Graph,
    pub false_node: Node,
    pub ground_node: Node,
}

impl ColoringGadget {
    /// Maps a proper 3-colouring of the gadget graph back to a model of `cnf`. A literal node is
    /// true iff its colour differs from the colour of `False`.
    pub fn decode(&self, cnf: &Cnf, coloring: &Coloring) -> Vec<Literal> {
        let false_color = coloring.get(&self.false_node);
        cnf.variables()
            .iter()
            .filter_map(|&var| {
                let positive = Literal::new(var, true)?;
                let value = match coloring.get(&literal_node(positive)) {
                    Some(color) => Some(color) != false_color,
                    None => coloring.get(&literal_node(positive.invert())) == false_color,
                };
                Some(if value { positive } else { positive.invert() })
            })
            .collect()
    }
}

fn literal_node(lit: Literal) -> Node {
    Node(lit.to_dimacs())
}

struct GadgetBuilder {
    graph: Graph,
    ids: FreshIds,
    false_node: Node,
    ground_node: Node,
}

impl GadgetBuilder {
    fn new(mut ids: FreshIds) -> Result<GadgetBuilder> {
        let false_node = ids.next_node().ok_or(ReductionError::IdSpaceExhausted)?;
        let ground_node = ids.next_node().ok_or(ReductionError::IdSpaceExhausted)?;
        let mut graph = Graph::new();
        graph.merge_edge(false_node, ground_node);
        Ok(GadgetBuilder {
            graph,
            ids,
            false_node,
            ground_node,
        })
    }

    fn fresh(&mut self) -> Result<Node> {
        let node = self.ids.next_node().ok_or(ReductionError::IdSpaceExhausted)?;
        self.graph.add_node(node);
        Ok(node)
    }

    fn connect(&mut self, a: Node, b: Node) {
        if !self.graph.merge_edge(a, b) {
            trace!("edge {:?}-{:?} already present", a, b);
        }
    }

    /// Forces `node` to the true colour.
    fn force_true(&mut self, node: Node) {
        self.connect(node, self.ground_node);
        self.connect(node, self.false_node);
    }

    fn add_clause(&mut self, clause: &Clause) -> Result<()> {
        let lits = clause.iter().map(|&l| literal_node(l)).collect::<Vec<_>>();
        for &lit in &lits {
            self.graph.add_node(lit);
        }

        match lits[..] {
            [l] => {
                self.connect(self.false_node, l);
                self.connect(self.ground_node, l);
            }
            [l1, l2] => {
                let atl1 = self.fresh()?;
                let atl2 = self.fresh()?;
                self.connect(atl1, atl2);
                self.connect(atl1, l1);
                self.connect(atl2, l2);

                let output = self.fresh()?;
                self.connect(output, atl1);
                self.connect(output, atl2);
                self.force_true(output);
            }
            [l1, l2, l3] => {
                let atl1 = self.fresh()?;
                let atl2 = self.fresh()?;
                let atl3 = self.fresh()?;
                self.connect(l1, atl1);
                self.connect(l2, atl2);
                self.connect(l3, atl3);
                self.connect(atl1, atl2);

                // first OR-gadget, its output is only kept off Ground
                let half_output = self.fresh()?;
                self.connect(half_output, atl1);
                self.connect(half_output, atl2);
                self.connect(half_output, self.ground_node);

                let bridge = self.fresh()?;
                self.connect(bridge, half_output);
                self.connect(bridge, atl3);

                let output = self.fresh()?;
                self.connect(output, bridge);
                self.connect(output, atl3);
                self.force_true(output);
            }
            _ => unreachable!("clause widths are checked before building"),
        }
        Ok(())
    }

    /// Joins every literal present in both polarities to its negation and to `Ground`.
    fn link_negations(&mut self) {
        let pairs = self
            .graph
            .nodes()
            .iter()
            .filter(|n| n.0 > 0 && self.graph.contains_node(Node(-n.0)))
            .map(|&n| (n, Node(-n.0)))
            .collect_vec();
        trace!("negation pairs: {:?}", pairs);
        for (pos, neg) in pairs {
            self.connect(pos, neg);
            self.connect(pos, self.ground_node);
            self.connect(neg, self.ground_node);
        }
    }

    fn build(mut self) -> ColoringGadget {
        self.graph.recount();
        ColoringGadget {
            graph: self.graph,
            false_node: self.false_node,
            ground_node: self.ground_node,
        }
    }
}

pub fn reduce(cnf: &Cnf) -> Result<ColoringGadget> {
    if let Some((clause, width)) = cnf
        .clauses()
        .iter()
        .map(Clause::len)
        .find_position(|&w| w > 3)
    {
        return Err(ReductionError::NotThreeSat { clause, width });
    }

    let ids = FreshIds::for_cnf(cnf);
    debug!("gadget nodes start above {}", ids.highest());
    let mut builder = GadgetBuilder::new(ids)?;
    for clause in cnf.clauses() {
        if clause.is_unit() {
            trace!("unit clause {:?} wired straight to False and Ground", clause);
        }
        builder.add_clause(clause)?;
    }
    builder.link_negations();

    let gadget = builder.build();
    debug!(
        "{} clauses over {} variables became {} nodes and {} edges",
        cnf.num_clauses(),
        cnf.num_vars(),
        gadget.graph.num_nodes(),
        gadget.graph.num_edges()
    );
    Ok(gadget)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::instance::Edge;
    use unordered_pair::UnorderedPair;

    fn edge_keys(graph: &Graph) -> Vec<(i64, i64)> {
        let mut keys = graph
            .edges()
            .iter()
            .map(|e| {
                let UnorderedPair(a, b) = e.key();
                (a.0.min(b.0), a.0.max(b.0))
            })
            .collect_vec();
        keys.sort();
        keys
    }

    #[test]
    fn test_unit_clause_forced_true() {
        let cnf = Cnf::from_clauses(vec![vec![1]]).unwrap();
        let gadget = reduce(&cnf).unwrap();
        assert_eq!(gadget.false_node, Node(2));
        assert_eq!(gadget.ground_node, Node(3));
        assert_eq!(
            gadget.graph.edges(),
            &[
                Edge(Node(2), Node(3)),
                Edge(Node(2), Node(1)),
                Edge(Node(3), Node(1)),
            ]
        );
        assert_eq!(gadget.graph.num_nodes(), 3);
        assert!(gadget.graph.is_complete());
    }

    #[test]
    fn test_two_literal_gadget() {
        let cnf = Cnf::from_clauses(vec![vec![1, -2]]).unwrap();
        let gadget = reduce(&cnf).unwrap();
        // False = 3, Ground = 4, ATL = 5, 6, output = 7
        assert_eq!(
            edge_keys(&gadget.graph),
            vec![(-2, 6), (1, 5), (3, 4), (3, 7), (4, 7), (5, 6), (5, 7), (6, 7)]
        );
        assert_eq!(gadget.graph.num_nodes(), 7);
    }

    #[test]
    fn test_three_literal_gadget() {
        let cnf = Cnf::from_clauses(vec![vec![1, 2, 3]]).unwrap();
        let gadget = reduce(&cnf).unwrap();
        // False = 4, Ground = 5, ATL = 6, 7, 8, half output = 9, bridge = 10, output = 11
        assert_eq!(
            edge_keys(&gadget.graph),
            vec![
                (1, 6),
                (2, 7),
                (3, 8),
                (4, 5),
                (4, 11),
                (5, 9),
                (5, 11),
                (6, 7),
                (6, 9),
                (7, 9),
                (8, 10),
                (8, 11),
                (9, 10),
                (10, 11),
            ]
        );
        assert_eq!(gadget.graph.num_nodes(), 11);
        assert_eq!(gadget.graph.num_edges(), 14);
    }

    #[test]
    fn test_negations_linked_once() {
        // the unit clause already joins Ground to 1, the negation pass must not repeat it
        let cnf = Cnf::from_clauses(vec![vec![1], vec![-1]]).unwrap();
        let gadget = reduce(&cnf).unwrap();
        assert_eq!(
            edge_keys(&gadget.graph),
            vec![(-1, 1), (-1, 2), (-1, 3), (1, 2), (1, 3), (2, 3)]
        );
        assert_eq!(gadget.graph.num_edges(), 6);
        assert_eq!(gadget.graph.num_nodes(), 4);
        assert!(gadget.graph.is_complete());
    }

    #[test]
    fn test_repeated_clauses_do_not_duplicate_edges() {
        let cnf = Cnf::from_clauses(vec![vec![2], vec![2], vec![1, 2]]).unwrap();
        let gadget = reduce(&cnf).unwrap();
        let keys = edge_keys(&gadget.graph);
        assert_eq!(keys.len(), keys.iter().unique().count());
        assert_eq!(gadget.graph.num_edges(), keys.len());
    }

    #[test]
    fn test_rejects_wide_clauses() {
        let cnf = Cnf::from_clauses(vec![vec![1, 2], vec![1, 2, 3, 4]]).unwrap();
        assert_eq!(
            reduce(&cnf).unwrap_err(),
            ReductionError::NotThreeSat {
                clause: 1,
                width: 4
            }
        );
    }

    #[test]
    fn test_decode() {
        let cnf = Cnf::from_clauses(vec![vec![1], vec![-2]]).unwrap();
        let gadget = reduce(&cnf).unwrap();
        // False = 3, Ground = 4
        let coloring: Coloring = [
            (Node(3), 0),
            (Node(4), 1),
            (Node(1), 2),
            (Node(-2), 2),
        ]
        .into_iter()
        .collect();
        assert!(gadget.graph.is_proper_coloring(&coloring));
        let model = gadget.decode(&cnf, &coloring);
        assert_eq!(
            model.iter().map(|l| l.to_dimacs()).collect_vec(),
            vec![1, -2]
        );
        assert!(cnf.evaluate(&model));
    }
}
