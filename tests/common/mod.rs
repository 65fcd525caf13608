#![allow(dead_code)]

use std::collections::BTreeMap;

use npreduce::instance::{Cnf, Coloring, Graph, Literal, Node};

pub fn lits(values: &[i64]) -> Vec<Literal> {
    values
        .iter()
        .map(|&v| Literal::from_dimacs(v).unwrap())
        .collect()
}

pub fn clause_values(cnf: &Cnf) -> Vec<Vec<i64>> {
    cnf.clauses()
        .iter()
        .map(|c| c.iter().map(|l| l.to_dimacs()).collect())
        .collect()
}

/// Tries every assignment of the formula's variables. Only for tiny formulas.
pub fn brute_force_model(cnf: &Cnf) -> Option<Vec<Literal>> {
    let vars = cnf.variables().iter().copied().collect::<Vec<_>>();
    assert!(vars.len() <= 20, "too many variables to enumerate");
    (0u64..1 << vars.len()).find_map(|bits| {
        let model = vars
            .iter()
            .enumerate()
            .map(|(i, &var)| Literal::new(var, bits >> i & 1 == 1).unwrap())
            .collect::<Vec<_>>();
        cnf.evaluate(&model).then_some(model)
    })
}

/// Backtracking search for a proper colouring with `colors` colours.
pub fn brute_force_coloring(graph: &Graph, colors: usize) -> Option<Coloring> {
    let nodes = graph.nodes().iter().copied().collect::<Vec<_>>();
    let adjacency: BTreeMap<Node, Vec<Node>> = nodes
        .iter()
        .map(|&n| (n, graph.neighbours(n).collect()))
        .collect();
    let mut coloring = Coloring::new();
    if extend(&nodes, &adjacency, colors, &mut coloring) {
        Some(coloring)
    } else {
        None
    }
}

fn extend(
    nodes: &[Node],
    adjacency: &BTreeMap<Node, Vec<Node>>,
    colors: usize,
    coloring: &mut Coloring,
) -> bool {
    let Some((&node, rest)) = nodes.split_first() else {
        return true;
    };
    for color in 0..colors {
        let clashes = adjacency[&node]
            .iter()
            .any(|n| coloring.get(n) == Some(&color));
        if clashes {
            continue;
        }
        coloring.insert(node, color);
        if extend(rest, adjacency, colors, coloring) {
            return true;
        }
        coloring.remove(&node);
    }
    false
}
