use super::rows::{self, ListRowViewModel};
use contracts::domain::a001_catalog_item::CatalogDocument;
use contracts::shared::error::LoadError;
use contracts::shared::summary::{self, CatalogSummary};
use leptos::prelude::*;

/// Identifies one load request; only the newest ticket may publish results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Clone, Debug, Default)]
pub struct LoadTracker {
    generation: u64,
}

impl LoadTracker {
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket(self.generation)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }
}

/// Everything derived from one successful load.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedCatalog {
    pub document: CatalogDocument,
    pub rows: Vec<ListRowViewModel>,
    pub summary: CatalogSummary,
}

impl LoadedCatalog {
    pub fn from_document(document: CatalogDocument) -> Self {
        let rows = rows::render(&document.items);
        let summary = summary::summarize(&document.items);
        Self {
            document,
            rows,
            summary,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded(LoadedCatalog),
    Failed(LoadError),
}

#[derive(Clone, Debug)]
pub struct CatalogListState {
    tracker: LoadTracker,
    pub status: LoadStatus,
}

impl Default for CatalogListState {
    fn default() -> Self {
        Self {
            tracker: LoadTracker::default(),
            status: LoadStatus::Idle,
        }
    }
}

impl CatalogListState {
    /// Starts a new generation; any earlier in-flight load becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.status = LoadStatus::Loading;
        self.tracker.begin()
    }

    /// Applies a finished load. Returns `false` when the ticket is stale and
    /// the result was discarded.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<CatalogDocument, LoadError>,
    ) -> bool {
        if !self.tracker.is_current(ticket) {
            return false;
        }
        self.status = match result {
            Ok(document) => LoadStatus::Loaded(LoadedCatalog::from_document(document)),
            Err(e) => LoadStatus::Failed(e),
        };
        true
    }

    pub fn rows(&self) -> &[ListRowViewModel] {
        match &self.status {
            LoadStatus::Loaded(catalog) => &catalog.rows,
            _ => &[],
        }
    }

    pub fn summary(&self) -> Option<CatalogSummary> {
        match &self.status {
            LoadStatus::Loaded(catalog) => Some(catalog.summary),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match &self.status {
            LoadStatus::Failed(e) => Some(e),
            _ => None,
        }
    }
}

pub fn create_state() -> RwSignal<CatalogListState> {
    RwSignal::new(CatalogListState::default())
}
