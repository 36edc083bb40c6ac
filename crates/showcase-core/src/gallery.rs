//! Gallery Transform
//!
//! Filter by status, sort by date or vibe score, slice into pages.
//! Recomputed from scratch whenever the query or the scores change.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::domain::{Project, ProjectStatus};

pub const PROJECTS_PER_PAGE: usize = 6;

/// Vibe scores reported by the voting widgets, keyed by project id
pub type VibeScores = HashMap<String, i64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ProjectStatus),
}

impl StatusFilter {
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => project.status == *status,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        if s == "all" {
            Some(StatusFilter::All)
        } else {
            ProjectStatus::parse(s).map(StatusFilter::Only)
        }
    }
}

/// Select options for the status filter: (value, label)
pub const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("all", "🌐 ALL"),
    ("live", "✅ LIVE"),
    ("development", "🔧 DEV"),
    ("concept", "💡 IDEA"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Latest,
    Vibe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Sort key plus direction. `Desc` is newest / highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortOrder {
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// `"{key}_{direction}"`, the value of the sort select.
    pub fn as_value(&self) -> &'static str {
        match (self.key, self.direction) {
            (SortKey::Latest, SortDirection::Desc) => "latest_desc",
            (SortKey::Latest, SortDirection::Asc) => "latest_asc",
            (SortKey::Vibe, SortDirection::Desc) => "vibe_desc",
            (SortKey::Vibe, SortDirection::Asc) => "vibe_asc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let (key, direction) = value.split_once('_')?;
        let key = match key {
            "latest" => SortKey::Latest,
            "vibe" => SortKey::Vibe,
            _ => return None,
        };
        let direction = match direction {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            _ => return None,
        };
        Some(Self { key, direction })
    }

    /// Ordering of `a` relative to `b` under this sort.
    pub fn compare(&self, a: &Project, b: &Project, scores: &VibeScores) -> Ordering {
        let descending = match self.key {
            SortKey::Latest => b.date_added.cmp(&a.date_added),
            SortKey::Vibe => {
                let score_a = scores.get(&a.id).copied().unwrap_or(0);
                let score_b = scores.get(&b.id).copied().unwrap_or(0);
                score_b.cmp(&score_a).then_with(|| b.date_added.cmp(&a.date_added))
            }
        };
        match self.direction {
            SortDirection::Desc => descending,
            SortDirection::Asc => descending.reverse(),
        }
    }
}

/// Select options for the sort control: (value, label)
pub const SORT_OPTIONS: &[(&str, &str)] = &[
    ("latest_desc", "📅 DATE: NEWEST→OLDEST"),
    ("latest_asc", "📅 DATE: OLDEST→NEWEST"),
    ("vibe_desc", "⚡ VIBE: HIGH→LOW"),
    ("vibe_asc", "⚡ VIBE: LOW→HIGH"),
];

/// Everything the gallery controls select
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryQuery {
    pub status: StatusFilter,
    pub sort: SortOrder,
    /// 1-based
    pub page: usize,
}

impl Default for GalleryQuery {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            sort: SortOrder::default(),
            page: 1,
        }
    }
}

impl GalleryQuery {
    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn next_page(&mut self, total_pages: usize) {
        if self.page < total_pages {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        if (1..=total_pages).contains(&page) {
            self.page = page;
        }
    }
}

/// Filter then stable-sort. The input order is kept among equal keys.
pub fn filter_and_sort<'a>(
    projects: &'a [Project],
    status: StatusFilter,
    sort: SortOrder,
    scores: &VibeScores,
) -> Vec<&'a Project> {
    let mut selected: Vec<&Project> = projects.iter().filter(|p| status.matches(p)).collect();
    selected.sort_by(|a, b| sort.compare(a, b, scores));
    selected
}

/// One page of a list plus the numbers the pagination bar shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub total_pages: usize,
    /// Index of the first item on this page within the full list
    pub start_index: usize,
    /// Items after this page
    pub remaining: usize,
}

impl<'a, T> PageView<'a, T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Two-digit display number of the item at `offset` on this page.
    pub fn ordinal(&self, offset: usize) -> String {
        format!("{:02}", self.start_index + offset + 1)
    }
}

pub fn total_pages(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}

/// Slice out 1-based `page`. Out-of-range pages are empty.
pub fn paginate<T>(list: &[T], page: usize, per_page: usize) -> PageView<'_, T> {
    let total = total_pages(list.len(), per_page);
    let start = page.saturating_sub(1).saturating_mul(per_page);
    let (items, end) = if page == 0 || start >= list.len() {
        (&list[0..0], start)
    } else {
        let end = (start + per_page).min(list.len());
        (&list[start..end], end)
    };

    PageView {
        items,
        page,
        total_pages: total,
        start_index: start,
        remaining: list.len().saturating_sub(end),
    }
}
