mod bug_board;

#[cfg(feature = "ssr")]
mod ask_assistant;
#[cfg(feature = "ssr")]
mod cast_vote;
#[cfg(feature = "ssr")]
mod submit_bug;

pub use bug_board::{BoardSnapshot, BugBoard};

#[cfg(feature = "ssr")]
pub use ask_assistant::AskAssistant;
#[cfg(feature = "ssr")]
pub use cast_vote::{CastVote, VoteCommitter};
#[cfg(feature = "ssr")]
pub use submit_bug::{SubmissionSink, SubmitBug};

#[cfg(feature = "ssr")]
pub(crate) fn lock<T>(
    mutex: &std::sync::Mutex<T>,
) -> Result<std::sync::MutexGuard<'_, T>, bughive_errors::AppError> {
    mutex
        .lock()
        .map_err(|e| bughive_errors::AppError::Internal(format!("state lock poisoned: {e}")))
}
