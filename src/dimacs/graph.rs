use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use log::debug;

use super::{check_count, parse_token, DimacsError, ProblemLines, Result};
use crate::instance::{Edge, Graph, Node};

pub fn parse<P: AsRef<Path>>(filename: P) -> Result<Graph> {
    let file = File::open(filename)?;
    read(file)
}

pub fn read<R: Read>(reader: R) -> Result<Graph> {
    let mut lines = ProblemLines::new(reader);
    let header = lines.header("edge")?;
    let mut graph = Graph::with_header(header.ids, header.entries);

    while let Some((line_no, line)) = lines.data_line()? {
        let (a, b) = parse_edge(line_no, &line)?;
        graph.add_edge(a, b)?;
    }

    check_count("edges", graph.num_edges(), graph.edges().len())?;
    check_count("nodes", graph.num_nodes(), graph.nodes().len())?;
    debug!(
        "read graph with {} nodes and {} edges",
        graph.num_nodes(),
        graph.num_edges()
    );
    Ok(graph)
}

fn parse_edge(line_no: usize, line: &str) -> Result<(Node, Node)> {
    match line.split_whitespace().collect::<Vec<_>>()[..] {
        ["e", a, b] => Ok((
            Node(parse_token(line_no, a)?),
            Node(parse_token(line_no, b)?),
        )),
        _ => Err(DimacsError::MalformedEdge(line_no)),
    }
}

/// Serialises a complete graph, edges in stored order and orientation.
pub fn write<W: Write>(writer: W, graph: &Graph) -> Result<()> {
    graph.check_complete()?;

    let mut writer = BufWriter::new(writer);
    writeln!(writer, "c graph problem written by npreduce")?;
    writeln!(writer, "p edge {} {}", graph.num_nodes(), graph.num_edges())?;
    for Edge(a, b) in graph.edges() {
        writeln!(writer, "e {} {}", a.0, b.0)?;
    }
    writer.flush()?;
    Ok(())
}
