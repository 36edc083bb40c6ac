//! Gallery State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use showcase_core::gallery::{filter_and_sort, paginate, GalleryQuery, VibeScores, PROJECTS_PER_PAGE};
use showcase_core::{load_projects, Project};

const PROJECTS_JSON: &str = include_str!("../data/projects.json");

/// Gallery state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct GalleryState {
    /// Static project list, never mutated after load
    pub projects: Vec<Project>,
    /// Vibe scores reported by the voting widgets, keyed by project id
    pub vibe_scores: VibeScores,
    /// Filter, sort and page selection
    pub query: GalleryQuery,
    /// Set when the embedded project data failed to parse
    pub load_error: Option<String>,
}

impl GalleryState {
    pub fn load() -> Self {
        match load_projects(PROJECTS_JSON) {
            Ok(projects) => {
                log::info!("Loaded {} projects", projects.len());
                Self { projects, ..Default::default() }
            }
            Err(err) => {
                log::error!("Failed to load projects: {}", err);
                Self { load_error: Some(err.to_string()), ..Default::default() }
            }
        }
    }
}

/// Type alias for the store
pub type GalleryStore = Store<GalleryState>;

/// Get the gallery store from context
pub fn use_gallery_store() -> GalleryStore {
    expect_context::<GalleryStore>()
}

/// The cards and pager numbers of the current page, detached from the store
#[derive(Clone, Debug, PartialEq, Default)]
pub struct GalleryPage {
    /// (two-digit ordinal, project)
    pub cards: Vec<(String, Project)>,
    pub page: usize,
    pub total_pages: usize,
    /// Projects matching the filter, across all pages
    pub matching: usize,
    pub remaining: usize,
}

impl GalleryPage {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Filter, sort and slice the projects for `query`.
pub fn current_page(projects: &[Project], query: GalleryQuery, scores: &VibeScores) -> GalleryPage {
    let list = filter_and_sort(projects, query.status, query.sort, scores);
    let view = paginate(&list, query.page, PROJECTS_PER_PAGE);
    GalleryPage {
        cards: view
            .items
            .iter()
            .enumerate()
            .map(|(i, project)| (view.ordinal(i), (*project).clone()))
            .collect(),
        page: view.page,
        total_pages: view.total_pages,
        matching: list.len(),
        remaining: view.remaining,
    }
}

// ========================
// Store Helper Functions
// ========================

/// Record a widget's reported score. Unchanged scores do not notify.
pub fn store_set_vibe_score(store: &GalleryStore, project_id: String, score: i64) {
    let unchanged = store
        .vibe_scores()
        .with_untracked(|scores| scores.get(&project_id) == Some(&score));
    if !unchanged {
        store.vibe_scores().write().insert(project_id, score);
    }
}

/// Page for the current query; tracks only the fields it reads.
pub fn page_memo(store: GalleryStore) -> Memo<GalleryPage> {
    Memo::new(move |_| {
        let query = store.query().get();
        store.projects().with(|projects| {
            store.vibe_scores().with(|scores| current_page(projects, query, scores))
        })
    })
}

pub fn store_update_query(store: &GalleryStore, update: impl FnOnce(&mut GalleryQuery)) {
    update(&mut store.query().write());
}
