use crate::domain::{
    tally, Bug, BugPage, BugQuery, StatusCounts, VoteDirection, VoteEntry, VotePhase, VoteTicket,
};
use bughive_errors::AppError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct VoteKey {
    bug_id: String,
    caller: String,
}

impl VoteKey {
    fn new(bug_id: &str, caller: &str) -> Self {
        Self {
            bug_id: bug_id.to_string(),
            caller: caller.to_string(),
        }
    }
}

/// Everything a bug list needs for one render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub page: BugPage,
    pub counts: StatusCounts,
    /// The caller's active votes, keyed by bug id.
    pub my_votes: HashMap<String, VoteDirection>,
    /// Bugs with a vote from the caller still waiting on its commit.
    pub pending: Vec<String>,
}

/// Ordered bug collection plus per-caller votes. Vote counts are adjusted
/// optimistically in `begin_vote` and confirmed or rolled back in
/// `settle_vote`.
#[derive(Debug, Clone, Default)]
pub struct BugBoard {
    bugs: Vec<Bug>,
    votes: HashMap<VoteKey, VoteEntry>,
}

impl BugBoard {
    pub fn new(bugs: Vec<Bug>) -> Self {
        Self {
            bugs,
            votes: HashMap::new(),
        }
    }

    pub fn bugs(&self) -> &[Bug] {
        &self.bugs
    }

    pub fn bug(&self, id: &str) -> Option<&Bug> {
        self.bugs.iter().find(|bug| bug.id == id)
    }

    pub fn view(&self, query: &BugQuery) -> BugPage {
        query.apply(&self.bugs)
    }

    pub fn status_counts(&self) -> StatusCounts {
        StatusCounts::tally(&self.bugs)
    }

    pub fn vote_of(&self, bug_id: &str, caller: &str) -> Option<VoteDirection> {
        self.votes
            .get(&VoteKey::new(bug_id, caller))
            .and_then(|entry| entry.choice)
    }

    pub fn entry(&self, bug_id: &str, caller: &str) -> Option<VoteEntry> {
        self.votes.get(&VoteKey::new(bug_id, caller)).copied()
    }

    pub fn is_pending(&self, bug_id: &str, caller: &str) -> bool {
        self.entry(bug_id, caller)
            .is_some_and(|entry| entry.is_pending())
    }

    pub fn snapshot(&self, query: &BugQuery, caller: &str) -> BoardSnapshot {
        let mut my_votes = HashMap::new();
        let mut pending = Vec::new();
        for (key, entry) in &self.votes {
            if key.caller != caller {
                continue;
            }
            if let Some(choice) = entry.choice {
                my_votes.insert(key.bug_id.clone(), choice);
            }
            if entry.is_pending() {
                pending.push(key.bug_id.clone());
            }
        }
        pending.sort();

        BoardSnapshot {
            page: self.view(query),
            counts: self.status_counts(),
            my_votes,
            pending,
        }
    }

    /// Applies the vote optimistically and marks the pair pending.
    pub fn begin_vote(
        &mut self,
        bug_id: &str,
        caller: &str,
        requested: VoteDirection,
    ) -> Result<VoteTicket, AppError> {
        let key = VoteKey::new(bug_id, caller);
        let prior_entry = self.votes.get(&key).copied();
        if prior_entry.is_some_and(|entry| entry.is_pending()) {
            return Err(AppError::VoteInFlight(bug_id.to_string()));
        }

        let bug = self
            .bugs
            .iter_mut()
            .find(|bug| bug.id == bug_id)
            .ok_or_else(|| AppError::BugNotFound(bug_id.to_string()))?;

        let prior = prior_entry.and_then(|entry| entry.choice);
        let transition = tally(prior, requested);
        bug.votes += transition.delta;
        let votes = bug.votes;

        self.votes.insert(
            key,
            VoteEntry {
                choice: transition.choice,
                phase: VotePhase::Pending {
                    prior,
                    delta: transition.delta,
                },
            },
        );

        Ok(VoteTicket {
            bug_id: bug_id.to_string(),
            caller: caller.to_string(),
            requested,
            prior,
            choice: transition.choice,
            delta: transition.delta,
            votes,
        })
    }

    /// Commits on `Ok`, rolls the optimistic change back on `Err`.
    /// Returns the caller's resulting choice and the bug's count.
    pub fn settle_vote(
        &mut self,
        ticket: &VoteTicket,
        outcome: Result<(), AppError>,
    ) -> Result<(Option<VoteDirection>, i32), AppError> {
        let key = VoteKey::new(&ticket.bug_id, &ticket.caller);
        let entry = self
            .votes
            .get_mut(&key)
            .filter(|entry| entry.is_pending())
            .ok_or_else(|| {
                AppError::Internal(format!("no pending vote on bug {}", ticket.bug_id))
            })?;
        let VotePhase::Pending { prior, delta } = entry.phase else {
            return Err(AppError::Internal(format!(
                "no pending vote on bug {}",
                ticket.bug_id
            )));
        };

        let bug = self
            .bugs
            .iter_mut()
            .find(|bug| bug.id == ticket.bug_id)
            .ok_or_else(|| AppError::BugNotFound(ticket.bug_id.clone()))?;

        match outcome {
            Ok(()) => entry.phase = VotePhase::Committed,
            Err(_) => {
                bug.votes -= delta;
                entry.choice = prior;
                entry.phase = VotePhase::Failed;
            }
        }

        Ok((entry.choice, bug.votes))
    }

    /// Next free numeric identifier.
    pub fn next_id(&self) -> String {
        let max = self
            .bugs
            .iter()
            .filter_map(|bug| bug.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }

    /// Appends a new record. Identifiers must stay unique.
    pub fn add_bug(&mut self, bug: Bug) -> Result<(), AppError> {
        if self.bug(&bug.id).is_some() {
            return Err(AppError::Internal(format!("duplicate bug id {}", bug.id)));
        }
        self.bugs.push(bug);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::seed::SeedData;
    use VoteDirection::{Down, Up};

    const ME: &str = "Abebe Goben";

    fn board() -> BugBoard {
        BugBoard::new(SeedData::demo().bugs)
    }

    fn cast(board: &mut BugBoard, bug_id: &str, direction: VoteDirection) -> (Option<VoteDirection>, i32) {
        let ticket = board.begin_vote(bug_id, ME, direction).unwrap();
        board.settle_vote(&ticket, Ok(())).unwrap()
    }

    #[test]
    fn test_memory_leak_scenario() {
        let mut board = board();
        assert_eq!(board.bug("2").unwrap().votes, 42);

        assert_eq!(cast(&mut board, "2", Up), (Some(Up), 43));
        assert_eq!(board.vote_of("2", ME), Some(Up));

        assert_eq!(cast(&mut board, "2", Up), (None, 42));
        assert_eq!(board.vote_of("2", ME), None);
    }

    #[test]
    fn test_switching_direction_moves_two() {
        let mut board = board();
        assert_eq!(cast(&mut board, "1", Up), (Some(Up), 25));
        assert_eq!(cast(&mut board, "1", Down), (Some(Down), 23));
        assert_eq!(cast(&mut board, "1", Up), (Some(Up), 25));
    }

    #[test]
    fn test_optimistic_count_visible_while_pending() {
        let mut board = board();
        let ticket = board.begin_vote("3", ME, Down).unwrap();
        assert_eq!(ticket.votes, 11);
        assert_eq!(board.bug("3").unwrap().votes, 11);
        assert!(board.is_pending("3", ME));
    }

    #[test]
    fn test_second_vote_rejected_while_pending() {
        let mut board = board();
        let ticket = board.begin_vote("2", ME, Up).unwrap();

        assert_eq!(
            board.begin_vote("2", ME, Down),
            Err(AppError::VoteInFlight("2".to_string()))
        );
        assert_eq!(board.bug("2").unwrap().votes, 43);

        // Other bugs and other callers are independent.
        assert!(board.begin_vote("1", ME, Up).is_ok());
        assert!(board.begin_vote("2", "Sarah Chen", Up).is_ok());

        board.settle_vote(&ticket, Ok(())).unwrap();
        assert!(board.begin_vote("2", ME, Down).is_ok());
    }

    #[test]
    fn test_failed_commit_rolls_back() {
        let mut board = board();
        cast(&mut board, "4", Up);
        assert_eq!(board.bug("4").unwrap().votes, 19);

        let ticket = board.begin_vote("4", ME, Down).unwrap();
        assert_eq!(ticket.votes, 17);

        let settled = board
            .settle_vote(&ticket, Err(AppError::VoteCommitFailed("offline".to_string())))
            .unwrap();
        assert_eq!(settled, (Some(Up), 19));
        assert_eq!(board.entry("4", ME).unwrap().phase, VotePhase::Failed);

        // A failed pair accepts new votes.
        assert_eq!(cast(&mut board, "4", Up), (None, 18));
    }

    #[test]
    fn test_unknown_bug() {
        let mut board = board();
        assert_eq!(
            board.begin_vote("99", ME, Up),
            Err(AppError::BugNotFound("99".to_string()))
        );
        assert!(board.entry("99", ME).is_none());
    }

    #[test]
    fn test_settle_without_pending_vote_is_error() {
        let mut board = board();
        let ticket = board.begin_vote("5", ME, Up).unwrap();
        board.settle_vote(&ticket, Ok(())).unwrap();
        assert!(matches!(
            board.settle_vote(&ticket, Ok(())),
            Err(AppError::Internal(_))
        ));
    }

    #[test]
    fn test_snapshot_reports_callers_votes_only() {
        let mut board = board();
        cast(&mut board, "1", Up);
        let ticket = board.begin_vote("6", ME, Down).unwrap();
        board.begin_vote("3", "Sarah Chen", Up).unwrap();

        let snapshot = board.snapshot(&BugQuery::new().with_limit(Some(3)), ME);
        assert_eq!(snapshot.my_votes.get("1"), Some(&Up));
        assert_eq!(snapshot.my_votes.get("6"), Some(&Down));
        assert!(!snapshot.my_votes.contains_key("3"));
        assert_eq!(snapshot.pending, vec!["6".to_string()]);
        assert_eq!(snapshot.page.bugs.len(), 3);
        assert_eq!(snapshot.page.total, 6);
        assert_eq!(snapshot.counts.all, 6);

        board.settle_vote(&ticket, Ok(())).unwrap();
    }

    #[test]
    fn test_next_id_follows_highest_numeric_id() {
        assert_eq!(board().next_id(), "7");
        assert_eq!(BugBoard::default().next_id(), "1");
    }

    #[test]
    fn test_add_bug_rejects_duplicate_id() {
        let mut board = board();
        let bug = board.bug("1").unwrap().clone();
        assert!(board.add_bug(bug).is_err());
        assert_eq!(board.bugs().len(), 6);
    }
}
