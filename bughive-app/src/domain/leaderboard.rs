use serde::{Deserialize, Serialize};

pub const VISIBLE_BADGES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeRarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl BadgeRarity {
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeRarity::Common => "common",
            BadgeRarity::Rare => "rare",
            BadgeRarity::Epic => "epic",
            BadgeRarity::Legendary => "legendary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub rarity: BadgeRarity,
}

impl Badge {
    pub fn new(id: &str, name: &str, icon: &str, rarity: BadgeRarity) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            rarity,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributions {
    pub bugs_reported: u32,
    pub bugs_verified: u32,
    pub votes_given: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeaderboardPeriod {
    #[default]
    Weekly,
    AllTime,
}

impl LeaderboardPeriod {
    pub fn label(self) -> &'static str {
        match self {
            LeaderboardPeriod::Weekly => "This Week",
            LeaderboardPeriod::AllTime => "All Time",
        }
    }

    pub fn points_caption(self) -> &'static str {
        match self {
            LeaderboardPeriod::Weekly => "pts this week",
            LeaderboardPeriod::AllTime => "total pts",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub points: u32,
    pub rank: u32,
    pub weekly_points: u32,
    pub badges: Vec<Badge>,
    pub contributions: Contributions,
}

impl LeaderboardEntry {
    pub fn display_points(&self, period: LeaderboardPeriod) -> u32 {
        match period {
            LeaderboardPeriod::Weekly => self.weekly_points,
            LeaderboardPeriod::AllTime => self.points,
        }
    }

    pub fn visible_badges(&self) -> &[Badge] {
        &self.badges[..self.badges.len().min(VISIBLE_BADGES)]
    }

    pub fn hidden_badge_count(&self) -> usize {
        self.badges.len().saturating_sub(VISIBLE_BADGES)
    }

    pub fn is_podium(&self) -> bool {
        self.rank <= 3
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    weekly: Vec<LeaderboardEntry>,
    all_time: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Derives the all-time board from the weekly one: each entry gains
    /// `bonus(entry)` on top of its total, and the previous total moves into
    /// the secondary column. The all-time board is re-ranked by points.
    pub fn from_weekly<F>(weekly: Vec<LeaderboardEntry>, mut bonus: F) -> Self
    where
        F: FnMut(&LeaderboardEntry) -> u32,
    {
        let mut all_time: Vec<LeaderboardEntry> = weekly
            .iter()
            .map(|entry| LeaderboardEntry {
                points: entry.points + bonus(entry),
                weekly_points: entry.points,
                ..entry.clone()
            })
            .collect();

        all_time.sort_by(|a, b| b.points.cmp(&a.points));
        for (index, entry) in all_time.iter_mut().enumerate() {
            entry.rank = index as u32 + 1;
        }

        Self { weekly, all_time }
    }

    pub fn entries(&self, period: LeaderboardPeriod) -> &[LeaderboardEntry] {
        match period {
            LeaderboardPeriod::Weekly => &self.weekly,
            LeaderboardPeriod::AllTime => &self.all_time,
        }
    }

    /// Top three of the weekly board.
    pub fn spotlight(&self) -> &[LeaderboardEntry] {
        &self.weekly[..self.weekly.len().min(3)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, points: u32, rank: u32, badges: usize) -> LeaderboardEntry {
        LeaderboardEntry {
            id: id.to_string(),
            name: format!("User {id}"),
            avatar: None,
            points,
            rank,
            weekly_points: points / 10,
            badges: (0..badges)
                .map(|i| Badge::new(&i.to_string(), "Bug Hunter", "🐛", BadgeRarity::Epic))
                .collect(),
            contributions: Contributions::default(),
        }
    }

    #[test]
    fn test_display_points_follow_period() {
        let e = entry("1", 2840, 1, 0);
        assert_eq!(e.display_points(LeaderboardPeriod::Weekly), 284);
        assert_eq!(e.display_points(LeaderboardPeriod::AllTime), 2840);
    }

    #[test]
    fn test_badge_overflow() {
        let e = entry("1", 100, 1, 5);
        assert_eq!(e.visible_badges().len(), 3);
        assert_eq!(e.hidden_badge_count(), 2);
        assert_eq!(entry("2", 100, 2, 1).hidden_badge_count(), 0);
    }

    #[test]
    fn test_all_time_board_is_reranked() {
        let weekly = vec![entry("a", 300, 1, 0), entry("b", 200, 2, 0)];
        let board = Leaderboard::from_weekly(weekly, |e| if e.id == "b" { 500 } else { 0 });

        let all_time = board.entries(LeaderboardPeriod::AllTime);
        assert_eq!(all_time[0].id, "b");
        assert_eq!(all_time[0].points, 700);
        assert_eq!(all_time[0].weekly_points, 200);
        assert_eq!(all_time[0].rank, 1);
        assert_eq!(all_time[1].rank, 2);

        assert_eq!(board.entries(LeaderboardPeriod::Weekly)[0].id, "a");
    }

    #[test]
    fn test_spotlight_caps_at_three() {
        let weekly = (1..=5).map(|i| entry(&i.to_string(), 100 * i, i, 0)).collect();
        let board = Leaderboard::from_weekly(weekly, |_| 0);
        assert_eq!(board.spotlight().len(), 3);
    }
}
