use std::env;
use std::io;
use std::process::ExitCode;

use dijkstra_heap::config::RunConfig;
use dijkstra_heap::graph::Graph;
use dijkstra_heap::input::load_graph;
use dijkstra_heap::report::Report;
use dijkstra_heap::{Error, IndexedDijkstra, Result, ShortestPathAlgorithm};
use log::{error, info};

fn run() -> Result<()> {
    let config = RunConfig::from_args(env::args().skip(1))?;

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    let graph = load_graph(&config, &mut input, &mut out)?;
    info!(
        "Graph has {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let result = IndexedDijkstra::new().compute_shortest_paths(&graph, config.source)?;
    Report::from_result(&result).write_to(&mut out, config.format)
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Usage(message)) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("{}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
