use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    fn weight(self) -> i32 {
        match self {
            VoteDirection::Up => 1,
            VoteDirection::Down => -1,
        }
    }
}

/// Result of applying a requested direction on top of the caller's prior vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTransition {
    pub choice: Option<VoteDirection>,
    pub delta: i32,
}

/// Toggle semantics: same direction clears, opposite direction replaces.
pub fn tally(prior: Option<VoteDirection>, requested: VoteDirection) -> VoteTransition {
    let choice = if prior == Some(requested) {
        None
    } else {
        Some(requested)
    };
    let weight = |vote: Option<VoteDirection>| vote.map_or(0, VoteDirection::weight);

    VoteTransition {
        choice,
        delta: weight(choice) - weight(prior),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VotePhase {
    Pending {
        prior: Option<VoteDirection>,
        delta: i32,
    },
    Committed,
    Failed,
}

/// A caller's vote on one bug plus where its commit stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteEntry {
    pub choice: Option<VoteDirection>,
    pub phase: VotePhase,
}

impl VoteEntry {
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, VotePhase::Pending { .. })
    }
}

/// Handed out by `begin_vote`; settling it commits or rolls back the change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTicket {
    pub bug_id: String,
    pub caller: String,
    pub requested: VoteDirection,
    pub prior: Option<VoteDirection>,
    pub choice: Option<VoteDirection>,
    pub delta: i32,
    /// Optimistic count right after the delta was applied.
    pub votes: i32,
}

/// What the caller sees once a vote has been settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteOutcome {
    pub bug_id: String,
    pub choice: Option<VoteDirection>,
    pub votes: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use VoteDirection::{Down, Up};

    #[test]
    fn test_transition_table() {
        let table = [
            (None, Up, Some(Up), 1),
            (None, Down, Some(Down), -1),
            (Some(Up), Up, None, -1),
            (Some(Up), Down, Some(Down), -2),
            (Some(Down), Down, None, 1),
            (Some(Down), Up, Some(Up), 2),
        ];

        for (prior, requested, choice, delta) in table {
            assert_eq!(
                tally(prior, requested),
                VoteTransition { choice, delta },
                "prior={prior:?} requested={requested:?}"
            );
        }
    }

    #[test]
    fn test_same_vote_twice_nets_zero() {
        for direction in [Up, Down] {
            let first = tally(None, direction);
            let second = tally(first.choice, direction);
            assert_eq!(second.choice, None);
            assert_eq!(first.delta + second.delta, 0);
        }
    }
}
