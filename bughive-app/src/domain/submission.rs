use super::bug::{Author, Bug, Priority};
use bughive_errors::AppError;
use serde::{Deserialize, Serialize};

pub const MAX_LABELS: usize = 10;
pub const MAX_LABEL_LENGTH: usize = 32;
/// Points awarded for a submitted report.
pub const SUBMISSION_POINTS: u32 = 50;

/// File metadata only; the payload itself never leaves the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentMeta {
    pub name: String,
    pub size_bytes: u64,
    pub content_type: String,
}

/// What the submitter gets back once the report is on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub bug_id: String,
    pub points: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugSubmission {
    pub title: String,
    pub description: String,
    pub steps_to_reproduce: String,
    pub expected_behavior: String,
    pub actual_behavior: String,
    pub priority: Priority,
    /// `owner/name` or a repository URL.
    pub repository: Option<String>,
    pub labels: Vec<String>,
    pub attachments: Vec<AttachmentMeta>,
}

impl BugSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the label was added.
    pub fn add_label(&mut self, text: &str) -> bool {
        let label = text.trim();
        if label.is_empty() || self.labels.iter().any(|existing| existing == label) {
            return false;
        }
        self.labels.push(label.to_string());
        true
    }

    pub fn remove_label(&mut self, text: &str) {
        self.labels.retain(|label| label != text);
    }

    pub fn add_attachment(&mut self, attachment: AttachmentMeta) {
        self.attachments.push(attachment);
    }

    pub fn remove_attachment(&mut self, index: usize) {
        if index < self.attachments.len() {
            self.attachments.remove(index);
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }

    /// Field checks that need no infrastructure. The repository reference is
    /// checked separately by the input sanitizer on the server.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::InvalidSubmission("Title is required".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(AppError::InvalidSubmission(
                "Description is required".to_string(),
            ));
        }
        if self.labels.len() > MAX_LABELS {
            return Err(AppError::InvalidSubmission(format!(
                "At most {MAX_LABELS} labels are allowed"
            )));
        }
        if let Some(label) = self
            .labels
            .iter()
            .find(|label| label.chars().count() > MAX_LABEL_LENGTH)
        {
            return Err(AppError::InvalidSubmission(format!(
                "Label \"{label}\" is longer than {MAX_LABEL_LENGTH} characters"
            )));
        }
        Ok(())
    }

    pub fn repository(&self) -> Option<&str> {
        self.repository
            .as_deref()
            .map(str::trim)
            .filter(|repo| !repo.is_empty())
    }

    /// Builds the record added to the board. Votes and comments start at zero.
    pub fn into_bug(self, id: String, author: Author) -> Bug {
        let tracker_url = self.repository().map(tracker_url_for);
        Bug::new(id, self.title.trim(), author)
            .with_description(self.description.trim())
            .with_priority(self.priority)
            .with_tracker_url(tracker_url)
            .with_labels(self.labels)
    }
}

fn tracker_url_for(repository: &str) -> String {
    if repository.starts_with("http://") || repository.starts_with("https://") {
        repository.to_string()
    } else {
        format!("https://github.com/{repository}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BugStatus;

    fn filled() -> BugSubmission {
        BugSubmission {
            title: "Crash on export".to_string(),
            description: "CSV export crashes the tab".to_string(),
            ..BugSubmission::new()
        }
    }

    #[test]
    fn test_empty_description_blocks_submit() {
        let submission = BugSubmission {
            description: String::new(),
            ..filled()
        };
        assert!(!submission.can_submit());
        assert_eq!(
            submission.validate(),
            Err(AppError::InvalidSubmission(
                "Description is required".to_string()
            ))
        );
    }

    #[test]
    fn test_whitespace_title_blocks_submit() {
        let submission = BugSubmission {
            title: "   ".to_string(),
            ..filled()
        };
        assert!(!submission.can_submit());
        assert!(submission.validate().is_err());
    }

    #[test]
    fn test_labels_are_trimmed_and_unique() {
        let mut submission = BugSubmission::new();
        assert!(submission.add_label(" mobile "));
        assert!(!submission.add_label("mobile"));
        assert!(!submission.add_label("   "));
        assert!(submission.add_label("login"));
        assert_eq!(submission.labels, vec!["mobile", "login"]);

        submission.remove_label("mobile");
        assert_eq!(submission.labels, vec!["login"]);
    }

    #[test]
    fn test_too_many_labels_rejected() {
        let mut submission = filled();
        for i in 0..=MAX_LABELS {
            submission.add_label(&format!("label-{i}"));
        }
        assert!(submission.validate().is_err());
    }

    #[test]
    fn test_remove_attachment_out_of_range_is_noop() {
        let mut submission = BugSubmission::new();
        submission.add_attachment(AttachmentMeta {
            name: "trace.log".to_string(),
            size_bytes: 2048,
            content_type: "text/plain".to_string(),
        });
        submission.remove_attachment(5);
        assert_eq!(submission.attachments.len(), 1);
        submission.remove_attachment(0);
        assert!(submission.attachments.is_empty());
    }

    #[test]
    fn test_into_bug_starts_open_with_no_votes() {
        let mut submission = filled();
        submission.priority = Priority::High;
        submission.repository = Some("acme/web".to_string());
        submission.add_label("export");

        let bug = submission.into_bug("7".to_string(), Author::new("Abebe Goben"));
        assert_eq!(bug.status, BugStatus::Open);
        assert_eq!(bug.votes, 0);
        assert_eq!(bug.comments, 0);
        assert_eq!(bug.priority, Priority::High);
        assert_eq!(bug.tracker_url.as_deref(), Some("https://github.com/acme/web"));
        assert_eq!(bug.labels, vec!["export"]);
    }
}
