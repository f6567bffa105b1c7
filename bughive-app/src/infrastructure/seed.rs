use crate::domain::{
    Author, Badge, BadgeRarity, Bug, BugCounts, BugStatus, Contributions, LeaderboardEntry,
    Notification, NotificationKind, NotificationMeta, NotificationPriority, Priority,
    ProfileBadge, ProfileStats, Project, ProjectPriority, ProjectStatus, SyncStatus, UserProfile,
};

/// The demo dataset. Owned by whoever builds the app state; nothing here is
/// shared or mutated in place.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub bugs: Vec<Bug>,
    pub weekly_leaderboard: Vec<LeaderboardEntry>,
    pub notifications: Vec<Notification>,
    pub projects: Vec<Project>,
    pub profile: UserProfile,
}

impl SeedData {
    pub fn demo() -> Self {
        Self {
            bugs: bugs(),
            weekly_leaderboard: weekly_leaderboard(),
            notifications: notifications(),
            projects: projects(),
            profile: profile(),
        }
    }
}

fn bugs() -> Vec<Bug> {
    vec![
        Bug::new("1", "Login button not responding on mobile devices", Author::new("Sarah Chen"))
            .with_description("When using the app on mobile browsers, the login button becomes unresponsive after entering credentials. This affects iOS Safari and Chrome mobile.")
            .with_priority(Priority::High)
            .with_votes(24)
            .with_comments(8)
            .with_created_at("2 hours ago")
            .with_tracker_url(Some("https://github.com/project/repo/issues/123".to_string()))
            .with_labels(["mobile", "login", "ui"]),
        Bug::new("2", "Memory leak in dashboard component", Author::new("Abebe Goben"))
            .with_description("The dashboard component appears to have a memory leak that causes performance degradation over time. Users report slowness after extended use.")
            .with_priority(Priority::Critical)
            .with_status(BugStatus::InProgress)
            .with_votes(42)
            .with_comments(15)
            .with_created_at("4 hours ago")
            .with_labels(["performance", "memory", "dashboard"]),
        Bug::new("3", "Incorrect date formatting in reports", Author::new("Maria Gonzalez"))
            .with_description("Date values in generated reports show incorrect formatting for non-US locales. The date appears in MM/DD/YYYY format regardless of user locale settings.")
            .with_priority(Priority::Medium)
            .with_votes(12)
            .with_comments(3)
            .with_created_at("1 day ago")
            .with_tracker_url(Some("https://github.com/project/repo/issues/124".to_string()))
            .with_labels(["i18n", "reports", "formatting"]),
        Bug::new("4", "API timeout errors during file upload", Author::new("David Park"))
            .with_description("Large file uploads consistently timeout after 30 seconds. This affects users trying to upload documents larger than 10MB.")
            .with_priority(Priority::High)
            .with_votes(18)
            .with_comments(6)
            .with_created_at("2 days ago")
            .with_labels(["api", "upload", "timeout"]),
        Bug::new("5", "Dark mode toggle not persisting", Author::new("Lisa Wang"))
            .with_description("The dark mode setting resets to light mode after browser refresh. User preferences are not being saved properly.")
            .with_priority(Priority::Low)
            .with_status(BugStatus::Resolved)
            .with_votes(8)
            .with_comments(4)
            .with_created_at("3 days ago")
            .with_labels(["ui", "settings", "persistence"]),
        Bug::new("6", "Search functionality returns incorrect results", Author::new("John Smith"))
            .with_description("The search feature sometimes returns unrelated results or fails to find exact matches. This appears to be an indexing issue.")
            .with_priority(Priority::Medium)
            .with_votes(15)
            .with_comments(9)
            .with_created_at("4 days ago")
            .with_labels(["search", "indexing", "database"]),
    ]
}

fn entry(
    id: &str,
    name: &str,
    points: u32,
    weekly_points: u32,
    badges: Vec<Badge>,
    (bugs_reported, bugs_verified, votes_given): (u32, u32, u32),
) -> LeaderboardEntry {
    LeaderboardEntry {
        id: id.to_string(),
        name: name.to_string(),
        avatar: None,
        points,
        rank: id.parse().unwrap_or_default(),
        weekly_points,
        badges,
        contributions: Contributions {
            bugs_reported,
            bugs_verified,
            votes_given,
        },
    }
}

fn weekly_leaderboard() -> Vec<LeaderboardEntry> {
    vec![
        entry(
            "1",
            "Abebe Goben",
            2840,
            380,
            vec![
                Badge::new("1", "Bug Hunter", "🐛", BadgeRarity::Epic),
                Badge::new("2", "Community Champion", "👑", BadgeRarity::Legendary),
            ],
            (15, 28, 142),
        ),
        entry(
            "2",
            "Sarah Chen",
            2650,
            320,
            vec![Badge::new("3", "Top Voter", "👍", BadgeRarity::Rare)],
            (12, 22, 189),
        ),
        entry(
            "3",
            "Maria Gonzalez",
            2450,
            290,
            vec![Badge::new("4", "Bug Squasher", "🔨", BadgeRarity::Common)],
            (18, 16, 97),
        ),
        entry(
            "4",
            "David Park",
            2200,
            250,
            vec![Badge::new("5", "Verifier", "✅", BadgeRarity::Rare)],
            (8, 32, 156),
        ),
        entry(
            "5",
            "Lisa Wang",
            1980,
            210,
            vec![Badge::new("6", "Contributor", "🌟", BadgeRarity::Common)],
            (14, 12, 98),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn notification(
    id: &str,
    kind: NotificationKind,
    title: &str,
    message: &str,
    timestamp: &str,
    is_read: bool,
    priority: NotificationPriority,
    action_url: Option<&str>,
    meta: NotificationMeta,
) -> Notification {
    Notification {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        message: message.to_string(),
        timestamp: timestamp.to_string(),
        is_read,
        priority,
        action_url: action_url.map(str::to_string),
        meta,
    }
}

fn notifications() -> Vec<Notification> {
    vec![
        notification(
            "1",
            NotificationKind::BadgeEarned,
            "New Badge Unlocked!",
            "Congratulations! You've earned the 'Streak Master' badge for maintaining a 30-day contribution streak.",
            "2 minutes ago",
            false,
            NotificationPriority::High,
            None,
            NotificationMeta {
                badge_name: Some("Streak Master".to_string()),
                points: Some(100),
                ..Default::default()
            },
        ),
        notification(
            "2",
            NotificationKind::BugUpdate,
            "Bug Status Updated",
            "Bug #234 'Memory leak in dashboard' has been marked as resolved. You earned 25 bonus points for accurate reporting!",
            "1 hour ago",
            false,
            NotificationPriority::Medium,
            Some("/bugs/234"),
            NotificationMeta {
                bug_id: Some("234".to_string()),
                points: Some(25),
                ..Default::default()
            },
        ),
        notification(
            "3",
            NotificationKind::RankChange,
            "Rank Promotion!",
            "Amazing work! You've climbed from rank #3 to rank #1 on the global leaderboard.",
            "3 hours ago",
            false,
            NotificationPriority::High,
            None,
            NotificationMeta {
                old_rank: Some(3),
                new_rank: Some(1),
                points: Some(50),
                ..Default::default()
            },
        ),
        notification(
            "4",
            NotificationKind::Verification,
            "Bug Verified",
            "Your bug report 'Login button not responding on mobile' has been verified by the community. +15 points!",
            "5 hours ago",
            true,
            NotificationPriority::Medium,
            None,
            NotificationMeta {
                points: Some(15),
                ..Default::default()
            },
        ),
        notification(
            "5",
            NotificationKind::Comment,
            "New Comment on Your Bug",
            "Sarah Chen commented on your bug report #245: 'I can reproduce this issue on iOS Safari as well.'",
            "1 day ago",
            true,
            NotificationPriority::Low,
            Some("/bugs/245"),
            NotificationMeta::default(),
        ),
        notification(
            "6",
            NotificationKind::Achievement,
            "Achievement Unlocked!",
            "You've unlocked the 'Quality Assurance' achievement! Your last 10 bug reports were all verified.",
            "2 days ago",
            true,
            NotificationPriority::Medium,
            None,
            NotificationMeta {
                points: Some(200),
                ..Default::default()
            },
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    name: &str,
    description: &str,
    repository: &str,
    status: ProjectStatus,
    member_count: u32,
    (total, open, in_progress, resolved): (u32, u32, u32, u32),
    priority: ProjectPriority,
    last_activity: &str,
    maintainers: &[&str],
    sync_status: SyncStatus,
) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        repository: repository.to_string(),
        status,
        member_count,
        bug_counts: BugCounts {
            total,
            open,
            in_progress,
            resolved,
        },
        priority,
        last_activity: last_activity.to_string(),
        maintainers: maintainers.iter().map(|m| m.to_string()).collect(),
        sync_status,
    }
}

fn projects() -> Vec<Project> {
    vec![
        project(
            "1",
            "React Dashboard",
            "Modern admin dashboard built with React and TypeScript",
            "company/react-dashboard",
            ProjectStatus::Active,
            12,
            (89, 23, 8, 58),
            ProjectPriority::High,
            "2 minutes ago",
            &["Sarah Chen", "Abebe Goben"],
            SyncStatus::Synced,
        ),
        project(
            "2",
            "Mobile App Backend",
            "Node.js API for mobile application with PostgreSQL",
            "company/mobile-backend",
            ProjectStatus::Active,
            8,
            (156, 45, 12, 99),
            ProjectPriority::High,
            "15 minutes ago",
            &["Maria Gonzalez", "David Park"],
            SyncStatus::Synced,
        ),
        project(
            "3",
            "Documentation Site",
            "Static site generator for project documentation",
            "company/docs-site",
            ProjectStatus::Active,
            5,
            (34, 7, 2, 25),
            ProjectPriority::Medium,
            "1 hour ago",
            &["Lisa Wang"],
            SyncStatus::Pending,
        ),
        project(
            "4",
            "Legacy Migration Tool",
            "Data migration utilities for legacy system upgrade",
            "company/legacy-migration",
            ProjectStatus::Archived,
            3,
            (67, 2, 0, 65),
            ProjectPriority::Low,
            "2 weeks ago",
            &["John Smith"],
            SyncStatus::Error,
        ),
    ]
}

fn profile_badge(
    id: &str,
    name: &str,
    description: &str,
    icon: &str,
    rarity: BadgeRarity,
    unlocked_at: &str,
) -> ProfileBadge {
    ProfileBadge {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        rarity,
        unlocked_at: unlocked_at.to_string(),
    }
}

fn profile() -> UserProfile {
    UserProfile {
        id: "1".to_string(),
        name: "Abebe Goben".to_string(),
        username: "abebegoben".to_string(),
        email: "abebe@example.com".to_string(),
        avatar: None,
        location: Some("San Francisco, CA".to_string()),
        bio: "Full-stack developer passionate about open source and bug hunting. Love helping projects improve their quality!".to_string(),
        join_date: "2023-08-15".to_string(),
        github_username: Some("abebegoben".to_string()),
        stats: ProfileStats {
            total_points: 2840,
            rank: 1,
            bugs_reported: 42,
            bugs_verified: 156,
            bugs_resolved: 89,
            votes_given: 234,
            votes_received: 421,
            streak_days: 28,
        },
        badges: vec![
            profile_badge("1", "Bug Hunter", "Reported 25+ verified bugs", "🐛", BadgeRarity::Epic, "2024-01-10"),
            profile_badge("2", "Community Champion", "Helped verify 100+ bug reports", "👑", BadgeRarity::Legendary, "2024-01-05"),
            profile_badge("3", "Streak Master", "30-day contribution streak", "🔥", BadgeRarity::Rare, "2024-01-15"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_bug_ids_are_unique() {
        let seed = SeedData::demo();
        let ids: HashSet<_> = seed.bugs.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids.len(), seed.bugs.len());
    }

    #[test]
    fn test_leaderboard_ranks_follow_points() {
        let board = SeedData::demo().weekly_leaderboard;
        assert!(board.windows(2).all(|w| w[0].points >= w[1].points));
        assert_eq!(board.iter().map(|e| e.rank).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }
}
