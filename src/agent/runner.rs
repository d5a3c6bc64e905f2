use tracing::info;

use super::AgentDescriptor;

/// Output of a single agent run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub final_output: String,
}

/// Executes one prompt against an agent's model.
pub struct Runner;

impl Runner {
    /// Sends the agent's instructions as the preamble and `input` as the user turn,
    /// then waits for the single reply. Failures are returned unchanged.
    pub async fn run(agent: &AgentDescriptor, input: &str) -> anyhow::Result<RunResult> {
        info!(
            "Running agent '{}' on model {}",
            agent.name,
            agent.model.model_id()
        );
        let final_output = agent.model.complete(&agent.instructions, input).await?;
        info!("Agent '{}' returned {} characters", agent.name, final_output.len());
        Ok(RunResult { final_output })
    }
}
