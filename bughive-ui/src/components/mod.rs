mod avatar;
mod bug_card;
mod chat_message;
mod error_display;
mod leaderboard_card;
mod loading_spinner;
mod navigation;
mod notification_item;
mod project_card;
mod submission_form;

pub use avatar::Avatar;
pub use bug_card::BugCard;
pub use chat_message::ChatMessage;
pub use error_display::{server_error_message, ErrorDisplay};
pub use leaderboard_card::LeaderboardCard;
pub use loading_spinner::LoadingSpinner;
pub use navigation::Navigation;
pub use notification_item::NotificationItem;
pub use project_card::ProjectCard;
pub use submission_form::SubmissionForm;
