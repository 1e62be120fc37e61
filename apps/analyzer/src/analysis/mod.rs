// Resume analysis: prompt construction, the model call, and reply parsing.
// All model traffic goes through llm_client.

pub mod handlers;
pub mod prompts;
pub mod sections;
pub mod upload;

use async_trait::async_trait;
use tracing::info;

use crate::analysis::prompts::{build_system_prompt, build_user_message};
use crate::llm_client::{LlmClient, LlmError};

/// Sends resume text (and an optional job description) for analysis and
/// returns the model's raw reply.
///
/// Carried in `AppState` as `Arc<dyn ResumeAnalyst>`.
#[async_trait]
pub trait ResumeAnalyst: Send + Sync {
    async fn analyse(&self, resume_text: &str, job_description: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl ResumeAnalyst for LlmClient {
    async fn analyse(&self, resume_text: &str, job_description: &str) -> Result<String, LlmError> {
        let system = build_system_prompt(job_description);
        let user = build_user_message(resume_text, job_description);

        info!(
            model = self.model(),
            resume_chars = resume_text.len(),
            with_job_description = !job_description.trim().is_empty(),
            "Requesting resume analysis"
        );
        self.chat_text(&system, &user).await
    }
}
