use bughive_errors::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

pub const QUICK_PROMPTS: [(&str, &str); 3] = [
    ("Analyze Priorities", "Analyze current high priority bugs"),
    ("Find Duplicates", "Find potential duplicate bug reports"),
    ("Get Solutions", "Suggest solutions for memory leaks"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionKind {
    Priority,
    Label,
    Assignment,
    Duplicate,
    Solution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub title: String,
    pub description: String,
    /// Percentage, 0..=100.
    pub confidence: u8,
}

impl Suggestion {
    fn new(kind: SuggestionKind, title: &str, description: &str, confidence: u8) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.to_string(),
            confidence,
        }
    }

    pub fn confidence_tier(&self) -> ConfidenceTier {
        match self.confidence {
            90.. => ConfidenceTier::High,
            80..=89 => ConfidenceTier::Medium,
            _ => ConfidenceTier::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantMessage {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub suggestions: Vec<Suggestion>,
}

impl AssistantMessage {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_suggestions(mut self, suggestions: Vec<Suggestion>) -> Self {
        self.suggestions = suggestions;
        self
    }
}

/// Picks which canned response to use. Called once for the reply text and
/// once for its suggestions, so the two can differ.
pub trait ResponseSelector: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}

/// Always the same index (clamped to the available responses).
pub struct FixedSelector(pub usize);

impl ResponseSelector for FixedSelector {
    fn pick(&self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

/// Round robin over the responses.
#[derive(Default)]
pub struct CyclingSelector {
    next: AtomicUsize,
}

impl CyclingSelector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResponseSelector for CyclingSelector {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.next.fetch_add(1, Ordering::Relaxed) % len
    }
}

struct CannedResponse {
    content: &'static str,
    suggestions: fn() -> Vec<Suggestion>,
}

const RESPONSES: [CannedResponse; 3] = [
    CannedResponse {
        content: "Based on the bug patterns I've analyzed, I recommend prioritizing the memory leak issue as 'Critical' due to its performance impact. The login button issue should be 'High' priority as it affects user authentication flow.",
        suggestions: triage_suggestions,
    },
    CannedResponse {
        content: "I found 3 potential duplicate reports related to mobile UI issues. The 'Login button not responding' bug appears similar to issue #87 from last month. Would you like me to merge them?",
        suggestions: duplicate_suggestions,
    },
    CannedResponse {
        content: "For the memory leak in the dashboard component, I suggest adding cleanup for event listeners and memoizing expensive derived state. This pattern has resolved similar issues in 89% of cases.",
        suggestions: solution_suggestions,
    },
];

fn triage_suggestions() -> Vec<Suggestion> {
    vec![
        Suggestion::new(
            SuggestionKind::Priority,
            "Auto-prioritize Critical Bugs",
            "Apply AI-suggested priorities to 5 pending bugs",
            94,
        ),
        Suggestion::new(
            SuggestionKind::Assignment,
            "Suggest Assignees",
            "Match bugs to developers based on expertise",
            87,
        ),
    ]
}

fn duplicate_suggestions() -> Vec<Suggestion> {
    vec![
        Suggestion::new(
            SuggestionKind::Duplicate,
            "Merge Duplicates",
            "Combine 3 similar mobile UI bug reports",
            91,
        ),
        Suggestion::new(
            SuggestionKind::Label,
            "Add Smart Labels",
            "Apply 'mobile-ui', 'login-flow' labels automatically",
            96,
        ),
    ]
}

fn solution_suggestions() -> Vec<Suggestion> {
    vec![
        Suggestion::new(
            SuggestionKind::Solution,
            "Generate Code Fix",
            "Create a pull request with the suggested solution",
            85,
        ),
        Suggestion::new(
            SuggestionKind::Priority,
            "Track Performance Impact",
            "Monitor memory usage after implementing fix",
            93,
        ),
    ]
}

pub struct ScriptedAssistant;

impl ScriptedAssistant {
    pub fn greeting() -> AssistantMessage {
        AssistantMessage::new(
            MessageRole::Assistant,
            "Hi! I'm your AI Bug Assistant. I can help you analyze bugs, suggest priorities, find duplicates, and provide solutions. What would you like me to help you with?",
        )
        .with_suggestions(vec![
            Suggestion::new(
                SuggestionKind::Priority,
                "Analyze Current Bugs",
                "Get AI-powered priority suggestions for open bugs",
                95,
            ),
            Suggestion::new(
                SuggestionKind::Duplicate,
                "Find Duplicates",
                "Scan for potential duplicate bug reports",
                88,
            ),
            Suggestion::new(
                SuggestionKind::Solution,
                "Suggest Solutions",
                "Get AI-generated solution recommendations",
                92,
            ),
        ])
    }

    pub fn reply(
        input: &str,
        selector: &dyn ResponseSelector,
    ) -> Result<AssistantMessage, AppError> {
        if input.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Type a question for the assistant".to_string(),
            ));
        }

        let content = RESPONSES[selector.pick(RESPONSES.len())].content;
        let suggestions = (RESPONSES[selector.pick(RESPONSES.len())].suggestions)();

        Ok(AssistantMessage::new(MessageRole::Assistant, content).with_suggestions(suggestions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_rejected() {
        assert!(ScriptedAssistant::reply("   ", &FixedSelector(0)).is_err());
    }

    #[test]
    fn test_fixed_selector_is_deterministic() {
        let first = ScriptedAssistant::reply("find duplicates", &FixedSelector(1)).unwrap();
        let second = ScriptedAssistant::reply("anything else", &FixedSelector(1)).unwrap();

        assert_eq!(first.role, MessageRole::Assistant);
        assert_eq!(first.content, second.content);
        assert_eq!(first.suggestions, second.suggestions);
        assert!(first.content.contains("duplicate"));
    }

    #[test]
    fn test_fixed_selector_clamps() {
        assert_eq!(FixedSelector(10).pick(3), 2);
    }

    #[test]
    fn test_cycling_selector_draws_content_and_suggestions_separately() {
        let selector = CyclingSelector::new();
        let reply = ScriptedAssistant::reply("analyze", &selector).unwrap();

        assert_eq!(reply.content, RESPONSES[0].content);
        assert_eq!(reply.suggestions, (RESPONSES[1].suggestions)());
        assert_eq!(selector.pick(3), 2);
        assert_eq!(selector.pick(3), 0);
    }

    #[test]
    fn test_confidence_tiers() {
        let tier = |confidence| {
            Suggestion::new(SuggestionKind::Label, "t", "d", confidence).confidence_tier()
        };
        assert_eq!(tier(96), ConfidenceTier::High);
        assert_eq!(tier(90), ConfidenceTier::High);
        assert_eq!(tier(85), ConfidenceTier::Medium);
        assert_eq!(tier(42), ConfidenceTier::Low);
    }

    #[test]
    fn test_greeting_offers_three_suggestions() {
        assert_eq!(ScriptedAssistant::greeting().suggestions.len(), 3);
    }
}
