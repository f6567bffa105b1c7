use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Active,
    Archived,
    Planning,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Archived => "archived",
            ProjectStatus::Planning => "planning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectPriority {
    Low,
    Medium,
    High,
}

impl ProjectPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectPriority::Low => "low",
            ProjectPriority::Medium => "medium",
            ProjectPriority::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyncStatus {
    Synced,
    Pending,
    Error,
}

impl SyncStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SyncStatus::Synced => "synced",
            SyncStatus::Pending => "pending",
            SyncStatus::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugCounts {
    pub total: u32,
    pub open: u32,
    pub in_progress: u32,
    pub resolved: u32,
}

impl BugCounts {
    pub fn resolved_percent(&self) -> u32 {
        percent(self.resolved, self.total)
    }

    pub fn in_progress_percent(&self) -> u32 {
        percent(self.in_progress, self.total)
    }
}

fn percent(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((f64::from(part) / f64::from(total)) * 100.0).round() as u32
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub repository: String,
    pub status: ProjectStatus,
    pub member_count: u32,
    pub bug_counts: BugCounts,
    pub priority: ProjectPriority,
    pub last_activity: String,
    pub maintainers: Vec<String>,
    pub sync_status: SyncStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectFilter {
    #[default]
    All,
    Active,
    Archived,
}

impl ProjectFilter {
    pub fn accepts(self, status: ProjectStatus) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Active => status == ProjectStatus::Active,
            ProjectFilter::Archived => status == ProjectStatus::Archived,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Active => "active",
            ProjectFilter::Archived => "archived",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "active" => ProjectFilter::Active,
            "archived" => ProjectFilter::Archived,
            _ => ProjectFilter::All,
        }
    }
}

pub fn filter_projects(projects: &[Project], filter: ProjectFilter) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| filter.accepts(project.status))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::seed::SeedData;

    #[test]
    fn test_percentages_round() {
        let counts = BugCounts {
            total: 89,
            open: 23,
            in_progress: 8,
            resolved: 58,
        };
        assert_eq!(counts.resolved_percent(), 65);
        assert_eq!(counts.in_progress_percent(), 9);
        assert_eq!(BugCounts::default().resolved_percent(), 0);
    }

    #[test]
    fn test_filter_projects() {
        let projects = SeedData::demo().projects;
        assert_eq!(filter_projects(&projects, ProjectFilter::All).len(), 4);
        assert_eq!(filter_projects(&projects, ProjectFilter::Active).len(), 3);

        let archived = filter_projects(&projects, ProjectFilter::Archived);
        assert_eq!(archived.len(), 1);
        assert_eq!(archived[0].name, "Legacy Migration Tool");
    }
}
