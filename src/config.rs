use std::path::PathBuf;

use crate::{Error, Result, VertexId};

/// Command line synopsis, printed on usage errors
pub const USAGE: &str = "Usage: dijkstra SOURCE_NODE MAX_NODES [FILENAME] [--json]";

/// How the final report is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `<vertex> => <distance> [<path>]` line per vertex
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Configuration for one shortest path run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Vertex the distances are measured from
    pub source: VertexId,
    /// Largest vertex id accepted from the input
    pub max_nodes: VertexId,
    /// Graph file; prompted for when absent
    pub input: Option<PathBuf>,
    pub format: OutputFormat,
}

impl RunConfig {
    pub fn new(source: VertexId, max_nodes: VertexId) -> Self {
        RunConfig {
            source,
            max_nodes,
            input: None,
            format: OutputFormat::default(),
        }
    }

    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Parses `SOURCE_NODE MAX_NODES [FILENAME] [--json]`, program name
    /// excluded. Flags may appear anywhere.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut positional = Vec::new();
        let mut format = OutputFormat::Text;

        for arg in args.into_iter().map(Into::into) {
            match arg.as_str() {
                "--json" => format = OutputFormat::Json,
                flag if flag.starts_with("--") => {
                    return Err(usage(format!("Unknown option '{}'", flag)));
                }
                _ => positional.push(arg),
            }
        }

        let (source, max_nodes, input) = match positional.as_slice() {
            [source, max_nodes] => (source, max_nodes, None),
            [source, max_nodes, input] => (source, max_nodes, Some(PathBuf::from(input))),
            _ => return Err(usage("Invalid number of arguments".to_string())),
        };

        Ok(RunConfig {
            source: parse_id(source, "SOURCE_NODE")?,
            max_nodes: parse_id(max_nodes, "MAX_NODES")?,
            input,
            format,
        })
    }
}

fn parse_id(value: &str, name: &str) -> Result<VertexId> {
    value
        .parse()
        .map_err(|_| usage(format!("{} must be a non-negative integer, got '{}'", name, value)))
}

fn usage(message: String) -> Error {
    Error::Usage(format!("{}\n{}", message, USAGE))
}
