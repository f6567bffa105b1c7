mod assistant;
mod bugs;
mod home;
mod leaderboard;
mod not_found;
mod notifications;
mod profile;
mod projects;
mod submit;

pub use assistant::AssistantPage;
pub use bugs::{BugList, BugsPage};
pub use home::HomePage;
pub use leaderboard::LeaderboardPage;
pub use not_found::NotFound;
pub use notifications::NotificationCenter;
pub use profile::{get_profile, ProfilePage};
pub use projects::ProjectsPage;
pub use submit::SubmitBugPage;
