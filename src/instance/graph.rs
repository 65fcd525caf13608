use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use fnv::FnvHashSet;
use unordered_pair::UnorderedPair;

use super::InstanceError;

#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Node(pub i64);

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// An undirected edge, kept in the orientation it was inserted with.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Edge(pub Node, pub Node);

impl Edge {
    /// The orientation-free identity of the edge.
    pub fn key(&self) -> UnorderedPair<Node> {
        UnorderedPair(self.0, self.1)
    }
}

/// Colour index per node.
pub type Coloring = BTreeMap<Node, usize>;

/// A simple undirected graph with its declared header counts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    num_nodes: usize,
    num_edges: usize,
    nodes: BTreeSet<Node>,
    edges: Vec<Edge>,
    // orientation-free pairs of everything in `edges`
    edge_index: FnvHashSet<UnorderedPair<Node>>,
}

impl Graph {
    pub fn new() -> Graph {
        Graph::default()
    }

    pub(crate) fn with_header(num_nodes: usize, num_edges: usize) -> Graph {
        Graph {
            num_nodes,
            num_edges,
            ..Graph::default()
        }
    }

    /// Builds a complete graph from `(a, b)` pairs, rejecting duplicates.
    pub fn from_edges(edges: &[(i64, i64)]) -> Result<Graph, InstanceError> {
        let mut graph = Graph::new();
        for &(a, b) in edges {
            graph.add_edge(Node(a), Node(b))?;
        }
        graph.recount();
        Ok(graph)
    }

    pub(crate) fn add_node(&mut self, node: Node) {
        self.nodes.insert(node);
    }

    /// Inserts `a–b`, failing if it or `b–a` is already present.
    pub(crate) fn add_edge(&mut self, a: Node, b: Node) -> Result<(), InstanceError> {
        if !self.merge_edge(a, b) {
            return Err(InstanceError::DuplicateEdge(a.0, b.0));
        }
        Ok(())
    }

    /// Inserts `a–b` unless it or `b–a` is already present. Returns whether it was new.
    pub(crate) fn merge_edge(&mut self, a: Node, b: Node) -> bool {
        let edge = Edge(a, b);
        if !self.edge_index.insert(edge.key()) {
            return false;
        }
        self.nodes.insert(a);
        self.nodes.insert(b);
        self.edges.push(edge);
        true
    }

    pub(crate) fn recount(&mut self) {
        self.num_nodes = self.nodes.len();
        self.num_edges = self.edges.len();
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn nodes(&self) -> &BTreeSet<Node> {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn contains_node(&self, node: Node) -> bool {
        self.nodes.contains(&node)
    }

    pub fn contains_edge(&self, a: Node, b: Node) -> bool {
        self.edge_index.contains(&UnorderedPair(a, b))
    }

    pub fn neighbours(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.edges.iter().filter_map(move |e| match *e {
            Edge(a, b) if a == node => Some(b),
            Edge(a, b) if b == node => Some(a),
            _ => None,
        })
    }

    /// Largest identifier magnitude in use, 0 for an empty graph.
    pub fn highest_node(&self) -> u64 {
        self.nodes
            .iter()
            .map(|n| n.0.unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    pub fn is_complete(&self) -> bool {
        self.check_complete().is_ok()
    }

    pub fn check_complete(&self) -> Result<(), InstanceError> {
        if self.num_nodes > 0
            && self.num_edges > 0
            && self.nodes.len() == self.num_nodes
            && self.edges.len() == self.num_edges
        {
            return Ok(());
        }
        Err(InstanceError::Incomplete {
            kind: "graph",
            declared_ids: self.num_nodes,
            actual_ids: self.nodes.len(),
            declared_items: self.num_edges,
            actual_items: self.edges.len(),
        })
    }

    /// Every node is coloured and no edge joins two nodes of the same colour.
    pub fn is_proper_coloring(&self, coloring: &Coloring) -> bool {
        self.nodes.iter().all(|n| coloring.contains_key(n))
            && self
                .edges
                .iter()
                .all(|Edge(a, b)| coloring.get(a) != coloring.get(b))
    }
}
