use crate::application::{lock, AskAssistant, BoardSnapshot, BugBoard, CastVote, SubmitBug};
use crate::domain::{
    BugQuery, CyclingSelector, InboxView, Leaderboard, NotificationFilter, NotificationInbox,
    Project, ResponseSelector, UserProfile,
};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::security::RateLimiter;
use crate::infrastructure::seed::SeedData;
use crate::infrastructure::simulation::{SeededSelector, SimulatedCommitter, SimulatedSink};
use bughive_errors::AppError;
use std::sync::{Arc, Mutex};

/// Upper bound (exclusive) of the all-time leaderboard bonus.
const ALL_TIME_BONUS_RANGE: usize = 1000;

#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    pub board: Arc<Mutex<BugBoard>>,
    pub cast_vote: Arc<CastVote<SimulatedCommitter>>,
    pub submit_bug: Arc<SubmitBug<SimulatedSink>>,
    pub assistant: Arc<AskAssistant>,
    pub leaderboard: Arc<Leaderboard>,
    pub inbox: Arc<Mutex<NotificationInbox>>,
    pub projects: Arc<Vec<Project>>,
    pub profile: Arc<UserProfile>,
    pub rate_limiter: RateLimiter,
}

impl AppContext {
    pub fn new(config: AppConfig, seed: SeedData) -> Self {
        let board = Arc::new(Mutex::new(BugBoard::new(seed.bugs)));

        let bonus_selector = selector(config.assistant_seed);
        let leaderboard = Leaderboard::from_weekly(seed.weekly_leaderboard, |_| {
            bonus_selector.pick(ALL_TIME_BONUS_RANGE) as u32
        });

        Self {
            cast_vote: Arc::new(CastVote::new(
                board.clone(),
                SimulatedCommitter::new(config.vote_latency),
            )),
            submit_bug: Arc::new(SubmitBug::new(
                board.clone(),
                SimulatedSink::new(config.submit_latency),
            )),
            assistant: Arc::new(AskAssistant::new(
                selector(config.assistant_seed),
                config.assistant_latency,
            )),
            board,
            leaderboard: Arc::new(leaderboard),
            inbox: Arc::new(Mutex::new(NotificationInbox::new(seed.notifications))),
            projects: Arc::new(seed.projects),
            profile: Arc::new(seed.profile),
            rate_limiter: RateLimiter::new(),
            config: Arc::new(config),
        }
    }

    pub fn from_env() -> Self {
        let config = AppConfig::from_env();
        match config.assistant_seed {
            Some(seed) => tracing::info!("Assistant responses seeded with {}", seed),
            None => tracing::info!("Assistant responses cycle in order"),
        }
        tracing::info!("Demo user: {}", config.demo_user);
        Self::new(config, SeedData::demo())
    }

    /// The caller every request acts as; there is no sign-in.
    pub fn demo_user(&self) -> &str {
        &self.config.demo_user
    }

    pub fn board_snapshot(&self, query: &BugQuery) -> Result<BoardSnapshot, AppError> {
        Ok(lock(&self.board)?.snapshot(query, self.demo_user()))
    }

    pub fn notifications(&self, filter: NotificationFilter) -> Result<InboxView, AppError> {
        Ok(lock(&self.inbox)?.view(filter))
    }

    /// Runs `change` against the inbox under its lock.
    pub fn update_inbox<T>(
        &self,
        change: impl FnOnce(&mut NotificationInbox) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        change(&mut *lock(&self.inbox)?)
    }
}

fn selector(seed: Option<u64>) -> Box<dyn ResponseSelector> {
    match seed {
        Some(seed) => Box::new(SeededSelector::new(seed)),
        None => Box::new(CyclingSelector::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LeaderboardPeriod, VoteDirection};
    use std::time::Duration;

    fn context() -> AppContext {
        let config = AppConfig {
            vote_latency: Duration::ZERO,
            submit_latency: Duration::ZERO,
            assistant_latency: Duration::ZERO,
            assistant_seed: Some(3),
            ..AppConfig::default()
        };
        AppContext::new(config, SeedData::demo())
    }

    #[test]
    fn test_all_time_board_is_reproducible() {
        let a = context();
        let b = context();
        assert_eq!(
            a.leaderboard.entries(LeaderboardPeriod::AllTime),
            b.leaderboard.entries(LeaderboardPeriod::AllTime)
        );
        assert_eq!(a.leaderboard.entries(LeaderboardPeriod::Weekly).len(), 5);
    }

    #[tokio::test]
    async fn test_vote_reaches_shared_board() {
        let context = context();
        let outcome = context
            .cast_vote
            .execute("2", context.demo_user(), VoteDirection::Up)
            .await
            .unwrap();
        assert_eq!(outcome.votes, 43);
        assert_eq!(context.board.lock().unwrap().bug("2").unwrap().votes, 43);

        let snapshot = context.board_snapshot(&BugQuery::new()).unwrap();
        assert_eq!(snapshot.my_votes.get("2"), Some(&VoteDirection::Up));
        assert!(snapshot.pending.is_empty());
    }

    #[test]
    fn test_inbox_updates_are_shared() {
        let context = context();
        let other = context.clone();
        assert_eq!(context.notifications(NotificationFilter::Unread).unwrap().unread_count, 3);

        other.update_inbox(|inbox| inbox.mark_read("1")).unwrap();
        assert_eq!(context.notifications(NotificationFilter::All).unwrap().unread_count, 2);

        assert_eq!(
            context.update_inbox(|inbox| inbox.delete("99")),
            Err(AppError::NotificationNotFound("99".to_string()))
        );
    }
}
