use super::{lock, BugBoard};
use crate::domain::{Author, BugSubmission, SubmissionReceipt, SUBMISSION_POINTS};
use crate::infrastructure::security::InputSanitizer;
use bughive_errors::AppError;
use std::future::Future;
use std::sync::{Arc, Mutex};

/// Receives validated reports before they join the board.
pub trait SubmissionSink: Send + Sync {
    fn deliver(
        &self,
        submission: &BugSubmission,
    ) -> impl Future<Output = Result<(), AppError>> + Send;
}

pub struct SubmitBug<S> {
    board: Arc<Mutex<BugBoard>>,
    sink: S,
}

impl<S: SubmissionSink> SubmitBug<S> {
    pub fn new(board: Arc<Mutex<BugBoard>>, sink: S) -> Self {
        Self { board, sink }
    }

    pub async fn execute(
        &self,
        submission: BugSubmission,
        author: Author,
    ) -> Result<SubmissionReceipt, AppError> {
        let submission = InputSanitizer::clean_submission(submission)?;
        submission.validate()?;

        self.sink.deliver(&submission).await.inspect_err(|e| {
            tracing::warn!("Submission sink rejected \"{}\": {}", submission.title, e);
        })?;

        let bug_id = {
            let mut board = lock(&self.board)?;
            let bug_id = board.next_id();
            board.add_bug(submission.into_bug(bug_id.clone(), author))?;
            bug_id
        };
        tracing::info!("Bug {} submitted", bug_id);

        Ok(SubmissionReceipt {
            bug_id,
            points: SUBMISSION_POINTS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BugQuery, BugStatus, Priority, SortKey};
    use crate::infrastructure::seed::SeedData;

    struct Accepting;

    impl SubmissionSink for Accepting {
        async fn deliver(&self, _submission: &BugSubmission) -> Result<(), AppError> {
            Ok(())
        }
    }

    struct Rejecting;

    impl SubmissionSink for Rejecting {
        async fn deliver(&self, _submission: &BugSubmission) -> Result<(), AppError> {
            Err(AppError::SubmissionFailed("sink offline".to_string()))
        }
    }

    fn board() -> Arc<Mutex<BugBoard>> {
        Arc::new(Mutex::new(BugBoard::new(SeedData::demo().bugs)))
    }

    fn submission() -> BugSubmission {
        let mut submission = BugSubmission {
            title: "Tooltip flickers".to_string(),
            description: "Hovering the vote button makes the tooltip flicker".to_string(),
            priority: Priority::Low,
            repository: Some("acme/bughive".to_string()),
            ..BugSubmission::new()
        };
        submission.add_label("ui");
        submission
    }

    #[tokio::test]
    async fn test_submission_joins_board() {
        let board = board();
        let receipt = SubmitBug::new(board.clone(), Accepting)
            .execute(submission(), Author::new("Abebe Goben"))
            .await
            .unwrap();

        assert_eq!(receipt.bug_id, "7");
        assert_eq!(receipt.points, 50);

        let board = board.lock().unwrap();
        let bug = board.bug("7").unwrap();
        assert_eq!(bug.status, BugStatus::Open);
        assert_eq!(bug.votes, 0);
        assert_eq!(bug.author.name, "Abebe Goben");

        let newest = board.view(&BugQuery::new().with_sort(SortKey::Created));
        assert_eq!(newest.bugs.last().unwrap().id, "7");
    }

    #[tokio::test]
    async fn test_empty_description_rejected_before_sink() {
        let board = board();
        let invalid = BugSubmission {
            description: "  ".to_string(),
            ..submission()
        };

        let result = SubmitBug::new(board.clone(), Rejecting)
            .execute(invalid, Author::new("Abebe Goben"))
            .await;
        assert!(matches!(result, Err(AppError::InvalidSubmission(_))));
        assert_eq!(board.lock().unwrap().bugs().len(), 6);
    }

    #[tokio::test]
    async fn test_sink_failure_leaves_board_unchanged() {
        let board = board();
        let result = SubmitBug::new(board.clone(), Rejecting)
            .execute(submission(), Author::new("Abebe Goben"))
            .await;
        assert!(matches!(result, Err(AppError::SubmissionFailed(_))));
        assert_eq!(board.lock().unwrap().bugs().len(), 6);
    }

    #[tokio::test]
    async fn test_bad_repository_rejected() {
        let invalid = BugSubmission {
            repository: Some("not a repo at all".to_string()),
            ..submission()
        };
        let result = SubmitBug::new(board(), Accepting)
            .execute(invalid, Author::new("Abebe Goben"))
            .await;
        assert!(matches!(result, Err(AppError::InvalidSubmission(_))));
    }
}
