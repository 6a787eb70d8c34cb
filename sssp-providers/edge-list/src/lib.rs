//! Edge-list provider that builds a [`Graph`] from line-based text.
//!
//! Each non-blank line holds one directed edge as three whitespace-separated
//! fields, `tail head weight`. A `#` starts a comment that runs to the end of
//! the line. Weights are read as signed integers and passed through
//! unchanged; the shortest-path engines reject negative weights at run time.
use std::io::BufRead;

use sssp_core::{Graph, GraphError, VertexId, Weight};

/// Errors produced while reading an edge list.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EdgeListError {
    /// The input held no edges and no explicit vertex count was supplied.
    #[error("edge list contains no edges")]
    EmptyInput,
    /// A line could not be parsed as `tail head weight`.
    #[error("line {line}: {message}")]
    Parse {
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },
    /// An endpoint exceeds the explicitly configured vertex count.
    #[error("line {line}: vertex {vertex} is out of range for {vertex_count} vertices")]
    VertexOutOfRange {
        /// One-based line number.
        line: usize,
        /// Offending endpoint.
        vertex: VertexId,
        /// Configured vertex count.
        vertex_count: usize,
    },
    /// Reading from the underlying source failed.
    #[error("failed to read edge list: {0}")]
    Io(#[from] std::io::Error),
    /// The graph rejected an edge.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Interpretation options for an edge list.
///
/// # Examples
/// ```
/// use sssp_providers_edge_list::EdgeListOptions;
///
/// let options = EdgeListOptions::default().undirected().with_vertex_count(10);
/// assert!(options.is_undirected());
/// assert_eq!(options.vertex_count(), Some(10));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct EdgeListOptions {
    undirected: bool,
    vertex_count: Option<usize>,
}

impl EdgeListOptions {
    /// Inserts every edge in both directions.
    #[must_use]
    pub const fn undirected(mut self) -> Self {
        self.undirected = true;
        self
    }

    /// Fixes the vertex count instead of inferring it from the largest
    /// endpoint. Vertices without edges are kept.
    #[must_use]
    pub const fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = Some(vertex_count);
        self
    }

    /// Whether edges are mirrored.
    #[must_use]
    pub const fn is_undirected(&self) -> bool {
        self.undirected
    }

    /// Explicit vertex count, if configured.
    #[must_use]
    pub const fn vertex_count(&self) -> Option<usize> {
        self.vertex_count
    }
}

/// A graph loaded from an edge list, with the name of its source.
#[derive(Clone, Debug)]
pub struct EdgeListProvider {
    name: String,
    graph: Graph,
    edges_read: usize,
}

struct ParsedEdge {
    line: usize,
    tail: VertexId,
    head: VertexId,
    weight: Weight,
}

impl EdgeListProvider {
    /// Reads an edge list from `reader`.
    ///
    /// # Errors
    /// Returns [`EdgeListError::Parse`] for malformed lines,
    /// [`EdgeListError::VertexOutOfRange`] when an endpoint exceeds an
    /// explicit vertex count, [`EdgeListError::EmptyInput`] when there is
    /// nothing to build a graph from, and [`EdgeListError::Io`] when reading
    /// fails.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use sssp_providers_edge_list::{EdgeListOptions, EdgeListProvider};
    ///
    /// let raw = "# tail head weight\n0 1 4\n1 2 3\n";
    /// let provider =
    ///     EdgeListProvider::try_from_reader("demo", Cursor::new(raw), EdgeListOptions::default())?;
    /// assert_eq!(provider.graph().vertex_count(), 3);
    /// assert_eq!(provider.edges_read(), 2);
    /// # Ok::<(), sssp_providers_edge_list::EdgeListError>(())
    /// ```
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
        options: EdgeListOptions,
    ) -> Result<Self, EdgeListError> {
        let mut parsed = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line_number = index.saturating_add(1);
            if let Some(edge) = parse_line(line_number, &line?)? {
                parsed.push(edge);
            }
        }

        let vertex_count = resolve_vertex_count(&parsed, options.vertex_count)?;
        let mut graph = Graph::new(vertex_count);
        for edge in &parsed {
            if options.undirected {
                graph.add_undirected_edge(edge.tail, edge.head, edge.weight)?;
            } else {
                graph.add_edge(edge.tail, edge.head, edge.weight)?;
            }
        }

        Ok(Self {
            name: name.into(),
            graph,
            edges_read: parsed.len(),
        })
    }

    /// Name of the source the graph was read from.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The loaded graph.
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Consumes the provider, returning the graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Number of edge lines read, before undirected mirroring.
    #[must_use]
    pub const fn edges_read(&self) -> usize {
        self.edges_read
    }
}

fn parse_line(line: usize, raw: &str) -> Result<Option<ParsedEdge>, EdgeListError> {
    let content = raw.split_once('#').map_or(raw, |(before, _)| before).trim();
    if content.is_empty() {
        return Ok(None);
    }

    let mut fields = content.split_whitespace();
    let (Some(tail), Some(head), Some(weight), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(EdgeListError::Parse {
            line,
            message: format!("expected `tail head weight`, found `{content}`"),
        });
    };

    Ok(Some(ParsedEdge {
        line,
        tail: parse_field(line, "tail", tail)?,
        head: parse_field(line, "head", head)?,
        weight: parse_field(line, "weight", weight)?,
    }))
}

fn parse_field<T: std::str::FromStr>(
    line: usize,
    field: &str,
    raw: &str,
) -> Result<T, EdgeListError>
where
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|error| EdgeListError::Parse {
        line,
        message: format!("invalid {field} `{raw}`: {error}"),
    })
}

fn resolve_vertex_count(
    edges: &[ParsedEdge],
    explicit: Option<usize>,
) -> Result<usize, EdgeListError> {
    let Some(vertex_count) = explicit else {
        return edges
            .iter()
            .map(|edge| edge.tail.max(edge.head))
            .max()
            .map(|largest| largest.saturating_add(1))
            .ok_or(EdgeListError::EmptyInput);
    };

    for edge in edges {
        for vertex in [edge.tail, edge.head] {
            if vertex >= vertex_count {
                return Err(EdgeListError::VertexOutOfRange {
                    line: edge.line,
                    vertex,
                    vertex_count,
                });
            }
        }
    }
    Ok(vertex_count)
}
