//! Command implementations and argument parsing for the `sssp` binary.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand, ValueEnum};
use sssp_core::{
    DEFAULT_DELTA, DEFAULT_THREADS, DeltaSteppingBuilder, Graph, RunStats, ShortestPaths,
    SsspError, VertexId, dijkstra,
};
use sssp_providers_edge_list::{EdgeListError, EdgeListOptions, EdgeListProvider};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::samples::SampleGraph;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "sssp", about = "Compute single-source shortest paths.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute distances from one source vertex.
    Run(RunCommand),
}

/// Shortest-path algorithm selectable from the command line.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum Algorithm {
    /// Parallel bucketed Delta-Stepping.
    #[default]
    DeltaStepping,
    /// Sequential binary-heap Dijkstra.
    Dijkstra,
}

impl Algorithm {
    /// Label used in output and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DeltaStepping => "delta-stepping",
            Self::Dijkstra => "dijkstra",
        }
    }
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Source vertex.
    #[arg(long, default_value_t = 0)]
    pub source: VertexId,

    /// Bucket width for Delta-Stepping.
    #[arg(long, default_value_t = DEFAULT_DELTA)]
    pub delta: u64,

    /// Worker threads for Delta-Stepping.
    #[arg(long, default_value_t = DEFAULT_THREADS)]
    pub threads: usize,

    /// Algorithm to run.
    #[arg(long, value_enum, default_value_t = Algorithm::DeltaStepping)]
    pub algorithm: Algorithm,

    /// Abort Delta-Stepping if it is still running after this many
    /// milliseconds.
    #[arg(long = "deadline-ms")]
    pub deadline_ms: Option<u64>,

    /// Graph to load.
    #[command(subcommand)]
    pub input: GraphInput,
}

/// Graph sources.
#[derive(Debug, Subcommand, Clone)]
pub enum GraphInput {
    /// Read a `tail head weight` edge list.
    File(FileArgs),
    /// Use a built-in graph.
    Sample(SampleArgs),
}

/// Edge-list file arguments.
#[derive(Debug, Args, Clone)]
pub struct FileArgs {
    /// Path to the edge list.
    pub path: PathBuf,

    /// Insert every edge in both directions.
    #[arg(long)]
    pub undirected: bool,

    /// Vertex count; inferred from the largest endpoint when omitted.
    #[arg(long)]
    pub vertices: Option<usize>,

    /// Override name for the graph (defaults to the file stem).
    #[arg(long)]
    pub name: Option<String>,
}

/// Built-in graph arguments.
#[derive(Debug, Args, Clone)]
pub struct SampleArgs {
    /// Which built-in graph to use.
    #[arg(value_enum)]
    pub graph: SampleGraph,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The edge-list file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Edge-list parsing failed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// Configuring or running an engine failed.
    #[error(transparent)]
    Core(#[from] SsspError),
}

impl CliError {
    /// Stable code of the underlying engine error, if any.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Core(error) => Some(error.code().as_str()),
            Self::Io { .. } | Self::EdgeList(_) => None,
        }
    }
}

/// Outcome of a `run` command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the graph that was loaded.
    pub graph: String,
    /// Algorithm that produced the distances.
    pub algorithm: Algorithm,
    /// Computed distances.
    pub paths: ShortestPaths,
    /// Wall-clock time spent computing distances, excluding loading.
    pub elapsed: Duration,
    /// Work counters, available for Delta-Stepping runs.
    pub stats: Option<RunStats>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the graph or computing distances fails.
///
/// # Examples
/// ```
/// use sssp_cli::cli::{Algorithm, Cli, Command, GraphInput, RunCommand, SampleArgs, SampleGraph, run_cli};
///
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         source: 0,
///         delta: 1,
///         threads: 2,
///         algorithm: Algorithm::DeltaStepping,
///         deadline_ms: None,
///         input: GraphInput::Sample(SampleArgs { graph: SampleGraph::Classic9 }),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.paths.distance(8), Some(14));
/// # Ok::<(), sssp_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        algorithm = command.algorithm.label(),
        source = command.source,
        graph = field::Empty,
    ),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let (name, graph) = load_graph(command.input.clone())?;
    Span::current().record("graph", field::display(&name));

    let started = Instant::now();
    let (paths, stats) = match command.algorithm {
        Algorithm::DeltaStepping => {
            let mut builder = DeltaSteppingBuilder::new()
                .with_delta(command.delta)
                .with_threads(command.threads);
            if let Some(millis) = command.deadline_ms {
                builder = builder.with_deadline(Duration::from_millis(millis));
            }
            let (paths, stats) = builder.build()?.run_with_stats(&graph, command.source)?;
            (paths, Some(stats))
        }
        Algorithm::Dijkstra => (dijkstra(&graph, command.source)?, None),
    };
    let elapsed = started.elapsed();

    info!(
        graph = name.as_str(),
        vertices = graph.vertex_count(),
        reachable = paths.reachable_count(),
        elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
        "command completed"
    );
    Ok(ExecutionSummary {
        graph: name,
        algorithm: command.algorithm,
        paths,
        elapsed,
        stats,
    })
}

pub(super) fn load_graph(input: GraphInput) -> Result<(String, Graph), CliError> {
    match input {
        GraphInput::Sample(SampleArgs { graph }) => Ok((graph.name().to_owned(), graph.graph())),
        GraphInput::File(args) => load_edge_list(args),
    }
}

#[instrument(
    name = "cli.load_edge_list",
    err,
    skip(args),
    fields(path = %args.path.display(), undirected = args.undirected),
)]
fn load_edge_list(args: FileArgs) -> Result<(String, Graph), CliError> {
    let FileArgs {
        path,
        undirected,
        vertices,
        name,
    } = args;
    let mut options = EdgeListOptions::default();
    if undirected {
        options = options.undirected();
    }
    if let Some(count) = vertices {
        options = options.with_vertex_count(count);
    }

    let reader = open_reader(&path)?;
    let provider =
        EdgeListProvider::try_from_reader(derive_graph_name(&path, name.as_deref()), reader, options)?;
    info!(
        graph = provider.name(),
        edges = provider.edges_read(),
        vertices = provider.graph().vertex_count(),
        "edge list loaded"
    );
    let name = provider.name().to_owned();
    Ok((name, provider.into_graph()))
}

pub(super) fn open_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_graph_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "graph".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` as a header followed by a tab-separated
/// vertex/distance table. Unreachable vertices print as `inf`.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use sssp_cli::cli::{Algorithm, ExecutionSummary, render_summary};
/// use sssp_core::{ShortestPaths, UNREACHABLE};
///
/// let summary = ExecutionSummary {
///     graph: "demo".into(),
///     algorithm: Algorithm::Dijkstra,
///     paths: ShortestPaths::new(0, vec![0, 3, UNREACHABLE]),
///     elapsed: Duration::from_micros(1500),
///     stats: None,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer).expect("utf-8");
/// assert!(text.contains("elapsed: 0.001500s"));
/// assert!(text.ends_with("1\t3\n2\tinf\n"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "algorithm: {}", summary.algorithm.label())?;
    writeln!(writer, "source: {}", summary.paths.source())?;
    writeln!(writer, "elapsed: {:.6}s", summary.elapsed.as_secs_f64())?;
    writeln!(writer, "Vertex\tDistance from Source")?;
    for (vertex, distance) in summary.paths.iter() {
        match distance {
            Some(distance) => writeln!(writer, "{vertex}\t{distance}")?,
            None => writeln!(writer, "{vertex}\tinf")?,
        }
    }
    Ok(())
}
