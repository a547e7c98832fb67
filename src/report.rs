use std::fmt;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::algorithm::ShortestPathResult;
use crate::config::OutputFormat;
use crate::{Distance, Result, VertexId};

/// Outcome for a single vertex
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexReport {
    pub vertex: VertexId,
    /// None if the vertex is unreachable
    pub distance: Option<Distance>,
    /// Shortest path, source excluded
    pub path: Vec<VertexId>,
}

/// Distances and paths for every vertex, ordered by vertex id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub source: VertexId,
    pub vertices: Vec<VertexReport>,
}

impl Report {
    pub fn from_result(result: &ShortestPathResult) -> Self {
        let vertices = result
            .distances
            .keys()
            .map(|&vertex| VertexReport {
                vertex,
                distance: result.distance(vertex),
                path: result.path(vertex).map(<[_]>::to_vec).unwrap_or_default(),
            })
            .collect();

        Report {
            source: result.source,
            vertices,
        }
    }

    /// One line per vertex
    pub fn render_text(&self) -> String {
        self.vertices
            .iter()
            .map(|entry| format!("{}\n", entry))
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Text => out.write_all(self.render_text().as_bytes())?,
            OutputFormat::Json => writeln!(out, "{}", self.to_json()?)?,
        }
        Ok(())
    }
}

impl fmt::Display for VertexReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.distance {
            Some(distance) => write!(f, "{} => {} [", self.vertex, distance)?,
            None => write!(f, "{} => unreachable [", self.vertex)?,
        }
        for (i, vertex) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", vertex)?;
        }
        write!(f, "]")
    }
}
