use crate::domain::{AssistantMessage, ResponseSelector, ScriptedAssistant};
use bughive_errors::AppError;
use std::time::Duration;

pub struct AskAssistant {
    selector: Box<dyn ResponseSelector>,
    latency: Duration,
}

impl AskAssistant {
    pub fn new(selector: Box<dyn ResponseSelector>, latency: Duration) -> Self {
        Self { selector, latency }
    }

    pub fn greeting(&self) -> AssistantMessage {
        ScriptedAssistant::greeting()
    }

    pub async fn execute(&self, input: &str) -> Result<AssistantMessage, AppError> {
        if input.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Type a question for the assistant".to_string(),
            ));
        }

        tokio::time::sleep(self.latency).await;
        let reply = ScriptedAssistant::reply(input, self.selector.as_ref())?;
        tracing::debug!("Assistant replied with {} suggestions", reply.suggestions.len());
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CyclingSelector, FixedSelector, MessageRole};

    #[tokio::test]
    async fn test_reply_after_latency() {
        let assistant = AskAssistant::new(Box::new(FixedSelector(2)), Duration::ZERO);
        let reply = assistant.execute("Suggest solutions for memory leaks").await.unwrap();
        assert_eq!(reply.role, MessageRole::Assistant);
        assert!(reply.content.contains("memory leak"));
    }

    #[tokio::test]
    async fn test_blank_question_skips_latency() {
        let assistant = AskAssistant::new(Box::new(CyclingSelector::new()), Duration::from_secs(3600));
        assert!(matches!(
            assistant.execute("").await,
            Err(AppError::InvalidInput(_))
        ));
    }
}
