//! Scripted traversal driver
//!
//! Reads a list of named steps and replays them against a document, the way a
//! caller would chain the operations by hand.
//!
//! ```json
//! [
//!     {"name": "start"},
//!     {"name": "object-key", "key": "configs"},
//!     {"name": "array-slice"},
//!     {"name": "filter", "key": "@type", "value": "admin.Bootstrap"},
//!     {"name": "end"}
//! ]
//! ```

mod loader;
mod runner;
mod step;

pub use loader::{Script, ScriptError};
pub use runner::{RunSummary, ScriptRunner};
pub use step::Step;
