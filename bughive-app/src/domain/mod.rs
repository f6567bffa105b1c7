mod assistant;
mod bug;
mod bug_query;
mod leaderboard;
mod notification;
mod project;
mod submission;
mod user;
mod vote;

pub use assistant::{
    AssistantMessage, ConfidenceTier, CyclingSelector, FixedSelector, MessageRole,
    ResponseSelector, ScriptedAssistant, Suggestion, SuggestionKind, QUICK_PROMPTS,
};
pub use bug::{initials, Author, Bug, BugStatus, Priority};
pub use bug_query::{BugPage, BugQuery, PriorityFilter, SortKey, StatusCounts, StatusFilter};
pub use leaderboard::{
    Badge, BadgeRarity, Contributions, Leaderboard, LeaderboardEntry, LeaderboardPeriod,
};
pub use notification::{
    InboxView, Notification, NotificationFilter, NotificationInbox, NotificationKind,
    NotificationMeta, NotificationPriority,
};
pub use project::{
    filter_projects, BugCounts, Project, ProjectFilter, ProjectPriority, ProjectStatus,
    SyncStatus,
};
pub use submission::{
    AttachmentMeta, BugSubmission, SubmissionReceipt, MAX_LABELS, MAX_LABEL_LENGTH,
    SUBMISSION_POINTS,
};
pub use user::{ProfileBadge, ProfileStats, UserProfile};
pub use vote::{tally, VoteDirection, VoteEntry, VoteOutcome, VotePhase, VoteTicket, VoteTransition};
