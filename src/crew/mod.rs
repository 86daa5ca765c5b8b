//! Declarative crew wiring for the team-selection pipeline
//!
//! This module declares WHAT the pipeline is: agent roles, task chain, tool
//! bindings and knowledge sources. Executing it - sequencing tasks, calling
//! the LLM, retrying, aggregating the final report - is entirely the external
//! orchestrator's job. The crate hands over a serialized [`KickoffPlan`] and
//! a [`ToolRegistry`](crate::tools::ToolRegistry) the orchestrator can invoke
//! tools through.

pub mod agents;
pub mod inputs;
pub mod tasks;

pub use agents::AgentSpec;
pub use inputs::CrewInputs;
pub use tasks::TaskSpec;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// How the orchestrator should run the task chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Process {
    Sequential,
}

/// A file fed to the orchestrator's knowledge layer, chunked for retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeSourceSpec {
    pub path: String,
    pub chunk_size: u32,
    pub chunk_overlap: u32,
}

/// The whole pipeline: agents, tasks, knowledge and process mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewSpec {
    pub name: String,
    pub process: Process,
    pub agents: Vec<AgentSpec>,
    pub tasks: Vec<TaskSpec>,
    pub knowledge_sources: Vec<KnowledgeSourceSpec>,
}

impl CrewSpec {
    /// Assembles the Champions League fantasy team-selection crew: seven
    /// agents, seven sequential tasks ending in the team report, and the
    /// four knowledge files.
    pub fn champions_league() -> Self {
        Self {
            name: "Champions League Fantasy Expert".to_string(),
            process: Process::Sequential,
            agents: agents::champions_league_agents(),
            tasks: tasks::champions_league_tasks(),
            knowledge_sources: vec![
                KnowledgeSourceSpec {
                    path: "knowledge/champions_league_fantasy_rules.md".to_string(),
                    chunk_size: 1000,
                    chunk_overlap: 200,
                },
                KnowledgeSourceSpec {
                    path: "knowledge/top_champions_league_teams.md".to_string(),
                    chunk_size: 1000,
                    chunk_overlap: 200,
                },
                KnowledgeSourceSpec {
                    path: "knowledge/fantasy_strategies.md".to_string(),
                    chunk_size: 1000,
                    chunk_overlap: 200,
                },
                KnowledgeSourceSpec {
                    path: "knowledge/user_preference.txt".to_string(),
                    chunk_size: 500,
                    chunk_overlap: 100,
                },
            ],
        }
    }

    /// Looks up an agent by name.
    pub fn agent(&self, name: &str) -> Option<&AgentSpec> {
        self.agents.iter().find(|agent| agent.name == name)
    }

    /// Looks up a task by name.
    pub fn task(&self, name: &str) -> Option<&TaskSpec> {
        self.tasks.iter().find(|task| task.name == name)
    }
}

/// The handoff payload for the external orchestrator: the crew definition
/// plus the interpolation inputs for this run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KickoffPlan {
    pub crew: CrewSpec,
    pub inputs: CrewInputs,
}

impl KickoffPlan {
    pub fn new(crew: CrewSpec, inputs: CrewInputs) -> Self {
        Self { crew, inputs }
    }

    /// Serializes the plan as pretty JSON.
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
