use super::leaderboard::BadgeRarity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub total_points: u32,
    pub rank: u32,
    pub bugs_reported: u32,
    pub bugs_verified: u32,
    pub bugs_resolved: u32,
    pub votes_given: u32,
    pub votes_received: u32,
    pub streak_days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileBadge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub rarity: BadgeRarity,
    pub unlocked_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub avatar: Option<String>,
    pub location: Option<String>,
    pub bio: String,
    pub join_date: String,
    pub github_username: Option<String>,
    pub stats: ProfileStats,
    pub badges: Vec<ProfileBadge>,
}

impl UserProfile {
    pub fn initials(&self) -> String {
        super::bug::initials(&self.name)
    }
}
