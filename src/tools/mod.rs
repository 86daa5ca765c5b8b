//! Query-building tools exposed to the agent orchestrator
//!
//! Every search tool shares one control-flow skeleton: validate the input,
//! resolve the date/season context, interpolate a query template, delegate to
//! the search collaborator and wrap the raw result in a descriptive envelope.
//! The skeleton is implemented once in [`SearchTool`]; the instances in
//! [`catalog`] differ only in input schema, query template and output prefix.
//!
//! Collaborator failures never escape a tool. A failed lookup degrades to an
//! informative text result so the surrounding multi-step plan keeps going;
//! only invalid input (a missing required field) is a hard error, raised
//! before any search is attempted.

pub mod catalog;
pub mod context;
pub mod file_writer;
pub mod inputs;
pub mod registry;

pub use context::ToolContext;
pub use file_writer::FileWriterTool;
pub use registry::{Tool, ToolRegistry};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::search::SearchClient;

/// Input schema for a search tool. Implementors are plain serde structs;
/// `subject` names the entity for error envelopes (e.g. "Kylian Mbappe stats").
pub trait ToolInput: DeserializeOwned {
    fn subject(&self) -> String;
}

/// Data-driven definition of one search tool: everything that varies between
/// the seven instances lives here.
pub struct ToolDef<I> {
    pub name: &'static str,
    pub description: &'static str,
    /// Verb for the error envelope, e.g. "searching" or "verifying"
    pub error_verb: &'static str,
    /// Builds the natural-language search query from input and date context
    pub query: fn(&I, &ToolContext) -> String,
    /// Builds the descriptive prefix placed above the raw search result
    pub prefix: fn(&I, &ToolContext) -> String,
}

/// The shared adapter. Holds a [`ToolDef`] and runs the common skeleton.
pub struct SearchTool<I: ToolInput> {
    def: ToolDef<I>,
}

impl<I: ToolInput> SearchTool<I> {
    pub const fn new(def: ToolDef<I>) -> Self {
        Self { def }
    }

    pub fn name(&self) -> &'static str {
        self.def.name
    }

    pub fn description(&self) -> &'static str {
        self.def.description
    }

    /// Builds the search query this tool would send for the given input.
    pub fn build_query(&self, input: &I, ctx: &ToolContext) -> String {
        (self.def.query)(input, ctx)
    }

    /// Builds the descriptive prefix placed above the raw search result.
    pub fn build_prefix(&self, input: &I, ctx: &ToolContext) -> String {
        (self.def.prefix)(input, ctx)
    }

    /// Deserializes raw tool arguments into the tool's input schema.
    /// A missing required field fails here, before any search runs.
    pub fn parse_input(&self, args: Value) -> Result<I, AppError> {
        serde_json::from_value(args).map_err(|e| AppError::tool_input(self.def.name, e.to_string()))
    }

    /// Validates raw arguments and runs the tool. The returned string is
    /// either the result envelope or a descriptive error message; only
    /// input validation produces an `Err`.
    pub async fn run(
        &self,
        client: &SearchClient,
        ctx: &ToolContext,
        args: Value,
    ) -> Result<String, AppError> {
        let input = self.parse_input(args)?;
        Ok(self.run_input(client, ctx, &input).await)
    }

    /// Runs the tool with an already-validated input. Collaborator failures
    /// are converted to an error string, never propagated.
    pub async fn run_input(&self, client: &SearchClient, ctx: &ToolContext, input: &I) -> String {
        let query = (self.def.query)(input, ctx);
        debug!(tool = self.def.name, "Built search query: {query}");

        match client.search(&query).await {
            Ok(result) => format!("{}\n{}", (self.def.prefix)(input, ctx), result),
            Err(e) => {
                warn!(tool = self.def.name, "Search failed: {e}");
                format!(
                    "Error {} for {}: {e}",
                    self.def.error_verb,
                    input.subject()
                )
            }
        }
    }
}
