use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::RunConfig;
use crate::graph::{parse_adjacency, AdjacencyGraph};
use crate::{Error, Result, VertexId};

pub const PROMPT: &str = "Input file: ";
pub const RETRY_MESSAGE: &str = "Unable to open that file. Try again.";

/// Opens and parses a graph file
pub fn read_graph_file(path: &Path, max_nodes: VertexId) -> Result<AdjacencyGraph> {
    let file = File::open(path)?;
    debug!("Reading graph from {}", path.display());
    parse_adjacency(BufReader::new(file), max_nodes)
}

/// Asks for a file name until one can be opened.
///
/// End of input before a usable name is given is a usage error.
pub fn prompt_for_file<R, W>(input: &mut R, output: &mut W) -> Result<(PathBuf, File)>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::Usage("No input file given".to_string()));
        }

        let path = PathBuf::from(line.trim());
        match File::open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(err) => {
                debug!("Cannot open {}: {}", path.display(), err);
                writeln!(output, "{}", RETRY_MESSAGE)?;
            }
        }
    }
}

/// Loads the graph named by `config`, prompting on `input`/`output` when no
/// file was given.
pub fn load_graph<R, W>(config: &RunConfig, input: &mut R, output: &mut W) -> Result<AdjacencyGraph>
where
    R: BufRead,
    W: Write,
{
    match &config.input {
        Some(path) => read_graph_file(path, config.max_nodes),
        None => {
            let (path, file) = prompt_for_file(input, output)?;
            debug!("Reading graph from {}", path.display());
            parse_adjacency(BufReader::new(file), config.max_nodes)
        }
    }
}
