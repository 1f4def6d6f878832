//! Script execution
//!
//! Drives a [`Traversal`] through the steps of a [`Script`], logging the
//! working-set size after each one and stopping at the first failure.

use std::io::Write;
use std::sync::Arc;

use traverse_core::{Traversal, TraversalConfig, TraversalError, TraversalStats};

use super::loader::{Script, ScriptError};
use super::step::{Step, string_field};

/// Outcome of a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Steps applied, including implicit start and end
    pub steps_applied: usize,
    /// Unknown steps skipped
    pub steps_skipped: usize,
}

/// Executes scripts against in-memory documents
#[derive(Debug, Clone, Default)]
pub struct ScriptRunner {
    config: TraversalConfig,
    stats: Option<Arc<TraversalStats>>,
}

impl ScriptRunner {
    #[must_use]
    pub fn new(config: TraversalConfig) -> Self {
        Self {
            config,
            stats: None,
        }
    }

    /// Record every chain this runner starts into `stats`
    #[must_use]
    pub fn with_stats(mut self, stats: Arc<TraversalStats>) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Run `script` over `data`, writing the final node to `sink`
    ///
    /// A script that does not begin with `start` starts implicitly, and one
    /// that does not finish with `end` ends implicitly. Steps after an explicit
    /// `end` are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ScriptError::Traversal` naming the first step that left the
    /// chain errored, or the step at which `end` failed.
    pub fn run<W: Write>(
        &self,
        data: &[u8],
        script: &Script,
        mut sink: W,
    ) -> Result<RunSummary, ScriptError> {
        let mut summary = RunSummary {
            steps_applied: 0,
            steps_skipped: 0,
        };
        let mut traversal: Option<Traversal> = None;

        for (i, step) in script.steps().iter().enumerate() {
            let number = i + 1;

            let current = match (step, traversal.take()) {
                (Step::Unknown, current) => {
                    summary.steps_skipped += 1;
                    traversal = current;
                    continue;
                }
                (Step::Start, _) => {
                    log::info!("Start");
                    self.start(data)
                }
                (_, Some(current)) => current,
                (_, None) => {
                    log::info!("#{number}: implicit start before {step}");
                    summary.steps_applied += 1;
                    self.start(data)
                }
            };

            if let Step::End = step {
                end(current, &mut sink, number, step)?;
                summary.steps_applied += 1;
                let remaining = script.len() - number;
                if remaining > 0 {
                    log::warn!("#{number}: end reached; ignoring {remaining} remaining step(s)");
                }
                return Ok(summary);
            }

            let next = apply(current, step);
            if let Some(error) = next.error() {
                return Err(step_failed(number, step, error.clone()));
            }
            log::info!("#{number}: {step}: {}", next.len());
            summary.steps_applied += 1;
            traversal = Some(next);
        }

        let number = script.len() + 1;
        let current = match traversal {
            Some(current) => current,
            None => {
                summary.steps_applied += 1;
                self.start(data)
            }
        };
        end(current, &mut sink, number, &Step::End)?;
        summary.steps_applied += 1;
        Ok(summary)
    }

    fn start(&self, data: &[u8]) -> Traversal {
        let traversal = Traversal::start_with(data, self.config.clone());
        match &self.stats {
            Some(stats) => traversal.with_stats(Arc::clone(stats)),
            None => traversal,
        }
    }
}

fn apply(traversal: Traversal, step: &Step) -> Traversal {
    match step {
        Step::Start | Step::End | Step::Unknown => traversal,
        Step::ObjectKey { key } => traversal.object_key(key),
        Step::ArraySlice => traversal.array_slice(),
        Step::ArrayIndex { index } => traversal.array_index(*index),
        Step::ArraySingleton => traversal.array_singleton(),
        Step::Inspect { key } => traversal.inspect(|index, node| match string_field(node, key) {
            Ok(Some(value)) => log::info!("{value}"),
            Ok(None) => log::warn!("ERROR: {index}: no entry for key '{key}'"),
            Err(e) => log::warn!("ERROR: {index}: {e}"),
        }),
        Step::Filter { key, value } => traversal.filter(|node| {
            matches!(string_field(node, key), Ok(Some(found)) if found == *value)
        }),
    }
}

fn end<W: Write>(
    traversal: Traversal,
    sink: &mut W,
    number: usize,
    step: &Step,
) -> Result<(), ScriptError> {
    traversal
        .end(sink)
        .map_err(|error| step_failed(number, step, error))
}

fn step_failed(step: usize, name: &Step, source: TraversalError) -> ScriptError {
    ScriptError::Traversal {
        step,
        name: name.to_string(),
        source,
    }
}
