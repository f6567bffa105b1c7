use super::{lock, BugBoard};
use crate::domain::{VoteDirection, VoteOutcome, VoteTicket};
use bughive_errors::AppError;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Confirms an optimistic vote with whatever backs the board.
pub trait VoteCommitter: Send + Sync {
    fn commit(&self, ticket: &VoteTicket) -> impl Future<Output = Result<(), AppError>> + Send;
}

/// Commits that take longer than this are rolled back as timeouts.
pub const DEFAULT_COMMIT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct CastVote<C> {
    board: Arc<Mutex<BugBoard>>,
    committer: Arc<C>,
    commit_timeout: Duration,
}

impl<C: VoteCommitter + 'static> CastVote<C> {
    pub fn new(board: Arc<Mutex<BugBoard>>, committer: C) -> Self {
        Self {
            board,
            committer: Arc::new(committer),
            commit_timeout: DEFAULT_COMMIT_TIMEOUT,
        }
    }

    pub fn with_commit_timeout(mut self, commit_timeout: Duration) -> Self {
        self.commit_timeout = commit_timeout;
        self
    }

    /// Begins the vote, then commits and settles on a spawned task so a
    /// dropped request cannot leave the vote pending. A failed or timed out
    /// commit is rolled back and its error returned.
    pub async fn execute(
        &self,
        bug_id: &str,
        caller: &str,
        direction: VoteDirection,
    ) -> Result<VoteOutcome, AppError> {
        let ticket = {
            let mut board = lock(&self.board)?;
            board.begin_vote(bug_id, caller, direction)?
        };
        tracing::debug!(
            "Vote pending: bug={} caller={} delta={} votes={}",
            ticket.bug_id,
            ticket.caller,
            ticket.delta,
            ticket.votes
        );

        let board = self.board.clone();
        let committer = self.committer.clone();
        let commit_timeout = self.commit_timeout;

        let settling = tokio::spawn(async move {
            let committed = tokio::time::timeout(commit_timeout, committer.commit(&ticket))
                .await
                .unwrap_or(Err(AppError::Timeout));

            let (choice, votes) = {
                let mut board = lock(&board)?;
                board.settle_vote(&ticket, committed.clone())?
            };

            match committed {
                Ok(()) => {
                    tracing::info!("Vote committed: bug={} votes={}", ticket.bug_id, votes);
                    Ok(VoteOutcome {
                        bug_id: ticket.bug_id,
                        choice,
                        votes,
                    })
                }
                Err(e) => {
                    tracing::warn!(
                        "Vote rolled back: bug={} votes={} error={}",
                        ticket.bug_id,
                        votes,
                        e
                    );
                    Err(e)
                }
            }
        });

        settling
            .await
            .map_err(|e| AppError::Internal(format!("vote task failed: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::seed::SeedData;
    use tokio::sync::Notify;
    use VoteDirection::{Down, Up};

    const ME: &str = "Abebe Goben";

    struct Instant;

    impl VoteCommitter for Instant {
        async fn commit(&self, _ticket: &VoteTicket) -> Result<(), AppError> {
            Ok(())
        }
    }

    struct Failing;

    impl VoteCommitter for Failing {
        async fn commit(&self, _ticket: &VoteTicket) -> Result<(), AppError> {
            Err(AppError::VoteCommitFailed("backend unavailable".to_string()))
        }
    }

    struct Gated(Arc<Notify>);

    impl VoteCommitter for Gated {
        async fn commit(&self, _ticket: &VoteTicket) -> Result<(), AppError> {
            self.0.notified().await;
            Ok(())
        }
    }

    fn board() -> Arc<Mutex<BugBoard>> {
        Arc::new(Mutex::new(BugBoard::new(SeedData::demo().bugs)))
    }

    #[tokio::test]
    async fn test_toggle_up_twice() {
        let use_case = CastVote::new(board(), Instant);

        let first = use_case.execute("2", ME, Up).await.unwrap();
        assert_eq!((first.choice, first.votes), (Some(Up), 43));

        let second = use_case.execute("2", ME, Up).await.unwrap();
        assert_eq!((second.choice, second.votes), (None, 42));
    }

    #[tokio::test]
    async fn test_failed_commit_restores_count_and_choice() {
        let board = board();
        CastVote::new(board.clone(), Instant)
            .execute("1", ME, Down)
            .await
            .unwrap();

        let result = CastVote::new(board.clone(), Failing)
            .execute("1", ME, Up)
            .await;
        assert!(matches!(result, Err(AppError::VoteCommitFailed(_))));

        let board = board.lock().unwrap();
        assert_eq!(board.bug("1").unwrap().votes, 23);
        assert_eq!(board.vote_of("1", ME), Some(Down));
        assert!(!board.is_pending("1", ME));
    }

    #[tokio::test]
    async fn test_second_vote_rejected_until_commit_resolves() {
        let board = board();
        let gate = Arc::new(Notify::new());
        let use_case = CastVote::new(board.clone(), Gated(gate.clone()));

        let (first, second) = tokio::join!(use_case.execute("2", ME, Up), async {
            let second = use_case.execute("2", ME, Down).await;
            gate.notify_one();
            second
        });

        assert_eq!(second, Err(AppError::VoteInFlight("2".to_string())));
        let first = first.unwrap();
        assert_eq!((first.choice, first.votes), (Some(Up), 43));
        assert!(!board.lock().unwrap().is_pending("2", ME));
    }

    #[tokio::test]
    async fn test_dropped_request_still_settles() {
        let board = board();
        let gate = Arc::new(Notify::new());
        let use_case = CastVote::new(board.clone(), Gated(gate.clone()));

        let dropped =
            tokio::time::timeout(Duration::from_millis(10), use_case.execute("2", ME, Up)).await;
        assert!(dropped.is_err());
        assert!(board.lock().unwrap().is_pending("2", ME));

        gate.notify_one();
        for _ in 0..100 {
            if !board.lock().unwrap().is_pending("2", ME) {
                break;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }

        {
            let board = board.lock().unwrap();
            assert!(!board.is_pending("2", ME));
            assert_eq!(board.bug("2").unwrap().votes, 43);
            assert_eq!(board.vote_of("2", ME), Some(Up));
        }

        let retry = CastVote::new(board.clone(), Instant)
            .execute("2", ME, Up)
            .await
            .unwrap();
        assert_eq!((retry.choice, retry.votes), (None, 42));
    }

    #[tokio::test]
    async fn test_hung_commit_rolls_back_as_timeout() {
        let board = board();
        let use_case = CastVote::new(board.clone(), Gated(Arc::new(Notify::new())))
            .with_commit_timeout(Duration::from_millis(5));

        assert_eq!(use_case.execute("2", ME, Up).await, Err(AppError::Timeout));

        let board = board.lock().unwrap();
        assert!(!board.is_pending("2", ME));
        assert_eq!(board.bug("2").unwrap().votes, 42);
        assert_eq!(board.vote_of("2", ME), None);
    }

    #[tokio::test]
    async fn test_unknown_bug_never_reaches_committer() {
        let use_case = CastVote::new(board(), Failing);
        assert_eq!(
            use_case.execute("404", ME, Up).await,
            Err(AppError::BugNotFound("404".to_string()))
        );
    }
}
