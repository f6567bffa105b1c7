use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Critical,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    /// Severity rank used by the priority sort: critical=4 down to low=1.
    pub fn rank(self) -> u8 {
        match self {
            Priority::Critical => 4,
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low Priority",
            Priority::Medium => "Medium Priority",
            Priority::High => "High Priority",
            Priority::Critical => "Critical",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BugStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl BugStatus {
    pub const ALL: [BugStatus; 4] = [
        BugStatus::Open,
        BugStatus::InProgress,
        BugStatus::Resolved,
        BugStatus::Closed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BugStatus::Open => "open",
            BugStatus::InProgress => "in-progress",
            BugStatus::Resolved => "resolved",
            BugStatus::Closed => "closed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BugStatus::Open => "Open",
            BugStatus::InProgress => "In Progress",
            BugStatus::Resolved => "Resolved",
            BugStatus::Closed => "Closed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for BugStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub avatar: Option<String>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: None,
        }
    }

    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// First character of every whitespace-separated word.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bug {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: BugStatus,
    pub votes: i32,
    pub comments: u32,
    pub author: Author,
    /// Display string such as "2 hours ago"; not sortable.
    pub created_at: String,
    pub tracker_url: Option<String>,
    pub labels: Vec<String>,
}

impl Bug {
    pub fn new(id: impl Into<String>, title: impl Into<String>, author: Author) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            priority: Priority::default(),
            status: BugStatus::Open,
            votes: 0,
            comments: 0,
            author,
            created_at: "just now".to_string(),
            tracker_url: None,
            labels: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: BugStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_votes(mut self, votes: i32) -> Self {
        self.votes = votes;
        self
    }

    pub fn with_comments(mut self, comments: u32) -> Self {
        self.comments = comments;
        self
    }

    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }

    pub fn with_tracker_url(mut self, tracker_url: Option<String>) -> Self {
        self.tracker_url = tracker_url;
        self
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_synced(&self) -> bool {
        self.tracker_url.is_some()
    }

    /// Case-insensitive match against title, description, labels and author.
    /// `needle` must already be lowercase.
    pub fn matches_text(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .labels
                .iter()
                .any(|label| label.to_lowercase().contains(needle))
            || self.author.name.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_rank_orders_by_severity() {
        assert!(Priority::Critical.rank() > Priority::High.rank());
        assert!(Priority::High.rank() > Priority::Medium.rank());
        assert!(Priority::Medium.rank() > Priority::Low.rank());
    }

    #[test]
    fn test_status_wire_form_is_kebab_case() {
        let json = serde_json::to_string(&BugStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        assert_eq!(BugStatus::parse("in-progress"), Some(BugStatus::InProgress));
        assert_eq!(Priority::parse("urgent"), None);
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Sarah Chen"), "SC");
        assert_eq!(initials("  Maria   Gonzalez "), "MG");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_matches_text_checks_every_field() {
        let bug = Bug::new("1", "Crash on save", Author::new("Lisa Wang"))
            .with_description("Editor closes unexpectedly")
            .with_labels(["Persistence"]);

        assert!(bug.matches_text("crash"));
        assert!(bug.matches_text("unexpectedly"));
        assert!(bug.matches_text("persist"));
        assert!(bug.matches_text("lisa"));
        assert!(!bug.matches_text("mobile"));
    }
}
