use super::bug::{Bug, BugStatus, Priority};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(BugStatus),
}

impl StatusFilter {
    pub fn accepts(self, status: BugStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    /// Unknown values fall back to `All`.
    pub fn parse(value: &str) -> Self {
        BugStatus::parse(value).map_or(StatusFilter::All, StatusFilter::Only)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    pub fn accepts(self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(wanted) => wanted == priority,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PriorityFilter::All => "all",
            PriorityFilter::Only(priority) => priority.as_str(),
        }
    }

    pub fn parse(value: &str) -> Self {
        Priority::parse(value).map_or(PriorityFilter::All, PriorityFilter::Only)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Votes,
    Created,
    Comments,
    Priority,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Votes,
        SortKey::Created,
        SortKey::Comments,
        SortKey::Priority,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Votes => "votes",
            SortKey::Created => "created",
            SortKey::Comments => "comments",
            SortKey::Priority => "priority",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Votes => "Most Voted",
            SortKey::Created => "Newest",
            SortKey::Comments => "Most Discussed",
            SortKey::Priority => "Priority",
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == value)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugQuery {
    pub search: String,
    pub status: StatusFilter,
    pub priority: PriorityFilter,
    pub sort: SortKey,
    pub limit: Option<usize>,
}

impl BugQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: PriorityFilter) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// "Clear Filters": everything back to default except the page cap.
    pub fn reset(&mut self) {
        *self = Self {
            limit: self.limit,
            ..Self::default()
        };
    }

    pub fn is_filtered(&self) -> bool {
        !self.search.trim().is_empty()
            || self.status != StatusFilter::All
            || self.priority != PriorityFilter::All
    }

    pub fn matches(&self, bug: &Bug) -> bool {
        let needle = self.search.trim().to_lowercase();
        self.matches_with(bug, &needle)
    }

    fn matches_with(&self, bug: &Bug, needle: &str) -> bool {
        bug.matches_text(needle) && self.status.accepts(bug.status) && self.priority.accepts(bug.priority)
    }

    /// Filter, then sort, then cap. `total` is the filtered count before the cap.
    pub fn apply(&self, bugs: &[Bug]) -> BugPage {
        let needle = self.search.trim().to_lowercase();
        let mut matched: Vec<Bug> = bugs
            .iter()
            .filter(|bug| self.matches_with(bug, &needle))
            .cloned()
            .collect();

        match self.sort {
            SortKey::Votes => matched.sort_by(|a, b| b.votes.cmp(&a.votes)),
            SortKey::Comments => matched.sort_by(|a, b| b.comments.cmp(&a.comments)),
            SortKey::Priority => matched.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank())),
            SortKey::Created => matched.sort_by(|a, b| a.id.cmp(&b.id)),
        }

        let total = matched.len();
        if let Some(limit) = self.limit {
            matched.truncate(limit);
        }

        BugPage {
            bugs: matched,
            total,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugPage {
    pub bugs: Vec<Bug>,
    pub total: usize,
}

impl BugPage {
    pub fn has_more(&self) -> bool {
        self.total > self.bugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bugs.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub all: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub closed: usize,
}

impl StatusCounts {
    pub fn tally(bugs: &[Bug]) -> Self {
        bugs.iter().fold(
            StatusCounts {
                all: bugs.len(),
                ..Default::default()
            },
            |mut counts, bug| {
                match bug.status {
                    BugStatus::Open => counts.open += 1,
                    BugStatus::InProgress => counts.in_progress += 1,
                    BugStatus::Resolved => counts.resolved += 1,
                    BugStatus::Closed => counts.closed += 1,
                }
                counts
            },
        )
    }

    pub fn get(&self, filter: StatusFilter) -> usize {
        match filter {
            StatusFilter::All => self.all,
            StatusFilter::Only(BugStatus::Open) => self.open,
            StatusFilter::Only(BugStatus::InProgress) => self.in_progress,
            StatusFilter::Only(BugStatus::Resolved) => self.resolved,
            StatusFilter::Only(BugStatus::Closed) => self.closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::seed::SeedData;

    fn seed_bugs() -> Vec<Bug> {
        SeedData::demo().bugs
    }

    fn ids(page: &BugPage) -> Vec<&str> {
        page.bugs.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_search_mobile_matches_one_seed_bug() {
        let page = BugQuery::new().with_search("mobile").apply(&seed_bugs());
        assert_eq!(page.total, 1);
        assert_eq!(ids(&page), vec!["1"]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_covers_author() {
        let bugs = seed_bugs();
        assert_eq!(BugQuery::new().with_search("MEMORY").apply(&bugs).total, 1);
        assert_eq!(BugQuery::new().with_search("david park").apply(&bugs).total, 1);
        assert_eq!(BugQuery::new().with_search("   ").apply(&bugs).total, bugs.len());
    }

    #[test]
    fn test_filters_yield_subset_and_are_idempotent() {
        let bugs = seed_bugs();
        let queries = [
            BugQuery::new().with_status(StatusFilter::Only(BugStatus::Open)),
            BugQuery::new().with_priority(PriorityFilter::Only(Priority::High)),
            BugQuery::new()
                .with_search("ui")
                .with_status(StatusFilter::Only(BugStatus::Open)),
            BugQuery::new().with_search("nothing like this"),
        ];

        for query in queries {
            let page = query.apply(&bugs);
            assert!(page.bugs.iter().all(|bug| query.matches(bug)));
            assert!(page.bugs.iter().all(|bug| bugs.contains(bug)));

            let again = query.apply(&page.bugs);
            assert_eq!(again, page);
        }
    }

    #[test]
    fn test_sort_by_votes_is_descending() {
        let page = BugQuery::new().with_sort(SortKey::Votes).apply(&seed_bugs());
        assert!(page.bugs.windows(2).all(|w| w[0].votes >= w[1].votes));
        assert_eq!(page.bugs[0].id, "2");
    }

    #[test]
    fn test_sort_by_priority_and_comments() {
        let bugs = seed_bugs();

        let by_priority = BugQuery::new().with_sort(SortKey::Priority).apply(&bugs);
        assert!(by_priority
            .bugs
            .windows(2)
            .all(|w| w[0].priority.rank() >= w[1].priority.rank()));
        assert_eq!(by_priority.bugs[0].priority, Priority::Critical);

        let by_comments = BugQuery::new().with_sort(SortKey::Comments).apply(&bugs);
        assert!(by_comments
            .bugs
            .windows(2)
            .all(|w| w[0].comments >= w[1].comments));
    }

    #[test]
    fn test_sort_by_created_uses_identifier_order() {
        let page = BugQuery::new().with_sort(SortKey::Created).apply(&seed_bugs());
        assert_eq!(ids(&page), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_limit_returns_prefix_and_true_total() {
        let bugs = seed_bugs();
        let full = BugQuery::new().apply(&bugs);

        for limit in [0, 1, 3, 6, 10] {
            let page = BugQuery::new().with_limit(Some(limit)).apply(&bugs);
            assert_eq!(page.bugs.len(), limit.min(full.total));
            assert_eq!(page.total, full.total);
            assert_eq!(page.bugs[..], full.bugs[..page.bugs.len()]);
            assert_eq!(page.has_more(), limit < full.total);
        }
    }

    #[test]
    fn test_reset_keeps_limit() {
        let mut query = BugQuery::new()
            .with_search("login")
            .with_sort(SortKey::Comments)
            .with_status(StatusFilter::Only(BugStatus::Resolved))
            .with_limit(Some(3));
        assert!(query.is_filtered());

        query.reset();
        assert_eq!(query, BugQuery::new().with_limit(Some(3)));
        assert!(!query.is_filtered());
    }

    #[test]
    fn test_status_counts() {
        let counts = StatusCounts::tally(&seed_bugs());
        assert_eq!(counts.all, 6);
        assert_eq!(counts.open, 4);
        assert_eq!(counts.in_progress, 1);
        assert_eq!(counts.resolved, 1);
        assert_eq!(counts.closed, 0);
        assert_eq!(counts.get(StatusFilter::Only(BugStatus::Open)), 4);
    }

    #[test]
    fn test_filter_values_parse_from_select_options() {
        assert_eq!(StatusFilter::parse("all"), StatusFilter::All);
        assert_eq!(
            StatusFilter::parse("in-progress"),
            StatusFilter::Only(BugStatus::InProgress)
        );
        assert_eq!(PriorityFilter::parse("critical").as_str(), "critical");
        assert_eq!(SortKey::parse("bogus"), SortKey::Votes);
    }
}
