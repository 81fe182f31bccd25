//! Prompt pipeline — template → completion provider → plain text.

use std::sync::Arc;

use tracing::info;

use crate::chat::template::{PromptTemplate, RenderedPrompt};
use crate::config::PromptConfig;
use crate::llm_client::{CompletionProvider, LlmError};

pub struct PromptPipeline {
    provider: Arc<dyn CompletionProvider>,
    question: PromptTemplate,
    summary: PromptTemplate,
}

impl PromptPipeline {
    pub fn new(provider: Arc<dyn CompletionProvider>, prompts: PromptConfig) -> Self {
        Self {
            provider,
            question: prompts.question,
            summary: prompts.summary,
        }
    }

    /// Answers a single free-form question.
    pub async fn answer(&self, question: &str) -> Result<String, LlmError> {
        info!(
            "Answering question ({} chars) with {}",
            question.chars().count(),
            self.provider.model()
        );
        self.run(self.question.render(question)).await
    }

    /// Summarizes text extracted from a document.
    pub async fn summarize(&self, text: &str) -> Result<String, LlmError> {
        info!(
            "Summarizing {} chars with {}",
            text.chars().count(),
            self.provider.model()
        );
        self.run(self.summary.render(text)).await
    }

    async fn run(&self, prompt: RenderedPrompt) -> Result<String, LlmError> {
        let output = self.provider.complete(&prompt.system, &prompt.user).await?;
        let output = output.trim();
        if output.is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(output.to_string())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::prompts::{
        QUESTION_SLOT, QUESTION_SYSTEM, QUESTION_USER_TEMPLATE, SUMMARY_SLOT, SUMMARY_SYSTEM,
        SUMMARY_USER_TEMPLATE,
    };

    /// Canned provider that records every prompt it receives.
    pub struct StubProvider {
        reply: Result<String, u16>,
        pub seen: Mutex<Vec<RenderedPrompt>>,
    }

    impl StubProvider {
        pub fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                seen: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CompletionProvider for StubProvider {
        async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
            self.seen.lock().unwrap().push(RenderedPrompt {
                system: system.to_string(),
                user: user.to_string(),
            });
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "upstream exploded".to_string(),
                }),
            }
        }

        fn model(&self) -> &str {
            "stub-model"
        }
    }

    pub fn default_prompts() -> PromptConfig {
        PromptConfig {
            question: PromptTemplate::new(QUESTION_SYSTEM, QUESTION_USER_TEMPLATE, QUESTION_SLOT)
                .unwrap(),
            summary: PromptTemplate::new(SUMMARY_SYSTEM, SUMMARY_USER_TEMPLATE, SUMMARY_SLOT)
                .unwrap(),
        }
    }

    #[tokio::test]
    async fn test_answer_uses_question_template() {
        let stub = Arc::new(StubProvider::replying("Ownership is a set of rules."));
        let pipeline = PromptPipeline::new(stub.clone(), default_prompts());

        let answer = pipeline.answer("What is ownership?").await.unwrap();
        assert_eq!(answer, "Ownership is a set of rules.");

        let seen = stub.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].system, QUESTION_SYSTEM);
        assert_eq!(seen[0].user, "Question: What is ownership?");
    }

    #[tokio::test]
    async fn test_summarize_uses_summary_template() {
        let stub = Arc::new(StubProvider::replying("A greeting."));
        let pipeline = PromptPipeline::new(stub.clone(), default_prompts());

        pipeline.summarize("Hello world").await.unwrap();

        let seen = stub.seen.lock().unwrap();
        assert_eq!(seen[0].system, SUMMARY_SYSTEM);
        assert_eq!(seen[0].user, "Text: Hello world");
    }

    #[tokio::test]
    async fn test_output_is_trimmed() {
        let stub = Arc::new(StubProvider::replying("\n  answer  \n"));
        let pipeline = PromptPipeline::new(stub, default_prompts());
        assert_eq!(pipeline.answer("q").await.unwrap(), "answer");
    }

    #[tokio::test]
    async fn test_blank_output_is_empty_content() {
        let stub = Arc::new(StubProvider::replying("   "));
        let pipeline = PromptPipeline::new(stub, default_prompts());
        assert!(matches!(
            pipeline.answer("q").await,
            Err(LlmError::EmptyContent)
        ));
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let stub = Arc::new(StubProvider::failing(500));
        let pipeline = PromptPipeline::new(stub, default_prompts());
        assert!(matches!(
            pipeline.summarize("text").await,
            Err(LlmError::Api { status: 500, .. })
        ));
    }
}
