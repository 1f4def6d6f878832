//! Terminal operation: serialize the working set to a sink

use std::io::Write;

use super::core::{ChainState, Traversal};
use crate::config::{EndPolicy, TraversalConfig};
use crate::error::{TraversalError, TraversalResult};
use crate::node::Node;

impl Traversal {
    /// Terminate the chain, writing the selected node verbatim to `sink`
    ///
    /// An errored chain returns its error and writes nothing. Otherwise the
    /// node chosen by the configured [`EndPolicy`] is written byte for byte;
    /// it is already valid JSON.
    ///
    /// # Errors
    ///
    /// - The chain's terminal error, if any
    /// - `WrongWorkingSetSize` under `EndPolicy::RequireSingleton` with more than one node
    /// - `EmptyWorkingSet` if a selector left nothing to write
    /// - `Io` if the sink fails
    pub fn end<W: Write>(self, mut sink: W) -> TraversalResult<()> {
        let stats = self.stats.clone();
        let node = terminal_node(self.state, &self.config)?;

        sink.write_all(node.as_bytes())?;
        sink.flush()?;

        if let Some(stats) = stats {
            stats.record_bytes(node.len());
        }
        Ok(())
    }

    /// Terminate the chain into an owned byte buffer
    ///
    /// # Errors
    ///
    /// Same as [`Traversal::end`], minus sink failures.
    pub fn end_to_vec(self) -> TraversalResult<Vec<u8>> {
        let mut out = Vec::new();
        self.end(&mut out)?;
        Ok(out)
    }

    /// Terminate the chain into a `String`
    ///
    /// # Errors
    ///
    /// Same as [`Traversal::end`], minus sink failures.
    pub fn end_to_string(self) -> TraversalResult<String> {
        let stats = self.stats.clone();
        let node = terminal_node(self.state, &self.config)?;
        if let Some(stats) = stats {
            stats.record_bytes(node.len());
        }
        Ok(node.raw().to_string())
    }
}

fn terminal_node(state: ChainState, config: &TraversalConfig) -> TraversalResult<Node> {
    let nodes = match state {
        ChainState::Active(nodes) => nodes,
        ChainState::Errored(error) => return Err(error),
    };

    match config.end_policy {
        EndPolicy::RequireSingleton if nodes.len() != 1 => {
            Err(TraversalError::wrong_working_set_size(1, nodes.len()))
        }
        _ => {
            let found = nodes.len();
            if found > 1 {
                tracing::warn!(
                    dropped = found - 1,
                    "end serializes the first node only; trailing nodes discarded"
                );
            }
            nodes.into_iter().next().ok_or(TraversalError::EmptyWorkingSet)
        }
    }
}
