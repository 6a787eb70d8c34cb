//! Built-in graphs selectable from the command line.

use clap::ValueEnum;
use sssp_core::{Graph, samples};

/// Sample graphs shipped with the binary.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SampleGraph {
    /// Classic undirected nine-vertex textbook graph.
    #[value(name = "classic9")]
    Classic9,
    /// Undirected fifteen-vertex mesh.
    #[value(name = "mesh15")]
    Mesh15,
}

impl SampleGraph {
    /// Name reported in logs and summaries.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Classic9 => "classic9",
            Self::Mesh15 => "mesh15",
        }
    }

    /// Builds the graph.
    #[must_use]
    pub fn graph(self) -> Graph {
        match self {
            Self::Classic9 => samples::classic_nine_vertex(),
            Self::Mesh15 => samples::fifteen_vertex_mesh(),
        }
    }
}
