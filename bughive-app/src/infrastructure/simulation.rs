use crate::application::{SubmissionSink, VoteCommitter};
use crate::domain::{BugSubmission, ResponseSelector, VoteTicket};
use bughive_errors::AppError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use std::time::Duration;

/// Stands in for a remote vote store: waits, then accepts.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedCommitter {
    latency: Duration,
}

impl SimulatedCommitter {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl VoteCommitter for SimulatedCommitter {
    async fn commit(&self, ticket: &VoteTicket) -> Result<(), AppError> {
        tokio::time::sleep(self.latency).await;
        tracing::debug!(
            "Simulated vote commit: bug={} caller={} choice={:?}",
            ticket.bug_id,
            ticket.caller,
            ticket.choice
        );
        Ok(())
    }
}

/// Stands in for the tracker API: waits, logs the payload, accepts.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSink {
    latency: Duration,
}

impl SimulatedSink {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl SubmissionSink for SimulatedSink {
    async fn deliver(&self, submission: &BugSubmission) -> Result<(), AppError> {
        tokio::time::sleep(self.latency).await;
        tracing::info!(
            title = %submission.title,
            priority = %submission.priority,
            repository = submission.repository().unwrap_or("-"),
            labels = submission.labels.len(),
            attachments = submission.attachments.len(),
            "Bug report delivered"
        );
        Ok(())
    }
}

/// Reproducible pseudo-random picks.
pub struct SeededSelector {
    rng: Mutex<StdRng>,
}

impl SeededSelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ResponseSelector for SeededSelector {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        match self.rng.lock() {
            Ok(mut rng) => rng.gen_range(0..len),
            Err(poisoned) => poisoned.into_inner().gen_range(0..len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VoteDirection;

    #[test]
    fn test_same_seed_same_picks() {
        let a = SeededSelector::new(7);
        let b = SeededSelector::new(7);
        let picks_a: Vec<_> = (0..16).map(|_| a.pick(3)).collect();
        let picks_b: Vec<_> = (0..16).map(|_| b.pick(3)).collect();
        assert_eq!(picks_a, picks_b);
        assert!(picks_a.iter().all(|&i| i < 3));
        assert_eq!(a.pick(0), 0);
    }

    #[tokio::test]
    async fn test_simulated_commit_succeeds() {
        let ticket = VoteTicket {
            bug_id: "1".to_string(),
            caller: "Abebe Goben".to_string(),
            requested: VoteDirection::Up,
            prior: None,
            choice: Some(VoteDirection::Up),
            delta: 1,
            votes: 25,
        };
        assert!(SimulatedCommitter::new(Duration::ZERO).commit(&ticket).await.is_ok());
    }

    #[tokio::test]
    async fn test_simulated_sink_accepts() {
        let submission = BugSubmission {
            title: "Tooltip flickers".to_string(),
            ..BugSubmission::new()
        };
        assert!(SimulatedSink::new(Duration::ZERO).deliver(&submission).await.is_ok());
    }
}
