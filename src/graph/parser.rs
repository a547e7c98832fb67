use std::io::BufRead;

use log::warn;

use crate::graph::adjacency::{check_weight, AdjacencyGraph, EdgeSet, GraphBuilder};
use crate::{Error, Result, VertexId, Weight};

/// Reads an adjacency description, one row per source vertex:
///
/// ```text
/// <vertex> <target1>,<weight1> <target2>,<weight2> ...
/// ```
///
/// Ids above `max_nodes` are logged and skipped: an over-bound row vertex
/// drops its whole row unread, an over-bound target drops only that pair.
/// Malformed tokens in kept rows abort the parse. A vertex given two rows
/// keeps the later one.
pub fn parse_adjacency<R: BufRead>(reader: R, max_nodes: VertexId) -> Result<AdjacencyGraph> {
    let mut builder = GraphBuilder::with_max_nodes(max_nodes);

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;

        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else {
            continue;
        };
        let vertex = parse_vertex(first, line_no)?;
        if !builder.accepts(vertex) {
            warn!(
                "line {}: vertex {} exceeds max nodes {}, row skipped",
                line_no, vertex, max_nodes
            );
            continue;
        }

        let mut row = EdgeSet::new();
        for token in tokens {
            let (target, weight) = parse_pair(token, line_no)?;
            if builder.accepts(target) {
                row.insert((target, weight));
            } else {
                warn!(
                    "line {}: target {} exceeds max nodes {}, edge skipped",
                    line_no, target, max_nodes
                );
            }
        }

        if builder.set_row(vertex, row)? {
            warn!("line {}: vertex {} defined again, earlier row replaced", line_no, vertex);
        }
    }

    builder.build()
}

/// Convenience wrapper around [`parse_adjacency`] for in-memory text
pub fn parse_adjacency_str(text: &str, max_nodes: VertexId) -> Result<AdjacencyGraph> {
    parse_adjacency(text.as_bytes(), max_nodes)
}

fn parse_vertex(token: &str, line: usize) -> Result<VertexId> {
    token.parse().map_err(|_| Error::Parse {
        line,
        message: format!("invalid vertex id '{}'", token),
    })
}

fn parse_pair(token: &str, line: usize) -> Result<(VertexId, Weight)> {
    let (target, weight) = token.split_once(',').ok_or_else(|| Error::Parse {
        line,
        message: format!("expected <target>,<weight> but found '{}'", token),
    })?;

    let target = parse_vertex(target, line)?;
    let weight: Weight = weight.parse().map_err(|_| Error::Parse {
        line,
        message: format!("invalid edge weight '{}'", weight),
    })?;
    check_weight(weight).map_err(|err| Error::Parse {
        line,
        message: err.to_string(),
    })?;

    Ok((target, weight))
}
