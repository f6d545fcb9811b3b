//! The chapter catalog: the full chapter list plus its transient filter
//! state.

use std::sync::Arc;

use tracing::info;

use crate::content_api::{ContentApi, FetchError};

use super::chapter::Chapter;
use super::filter::{filter_chapters, FilterCriteria};
use super::juz::InvalidJuzNumber;

/// Holds the chapter list for the lifetime of the catalog view.
///
/// The list is fetched at most once per instance; discarding the instance
/// discards the data. Filter criteria live here too so the embedding view
/// only deals in one handle.
pub struct ChapterCatalog {
    api: Arc<dyn ContentApi>,
    chapters: Option<Vec<Chapter>>,
    criteria: FilterCriteria,
}

impl ChapterCatalog {
    pub fn new(api: Arc<dyn ContentApi>) -> Self {
        Self {
            api,
            chapters: None,
            criteria: FilterCriteria::default(),
        }
    }

    /// Fetch the chapter list, once.
    ///
    /// The first successful call populates the in-memory list; later calls
    /// return it without touching the network. A failed call leaves the
    /// catalog unloaded, so the caller may try again by reloading the view.
    pub async fn load_chapters(&mut self) -> Result<&[Chapter], FetchError> {
        if self.chapters.is_none() {
            let fetched: Vec<Chapter> = self
                .api
                .list_chapters()
                .await?
                .iter()
                .map(|c| c.to_chapter())
                .collect();
            info!(count = fetched.len(), "chapter catalog loaded");
            self.chapters = Some(fetched);
        }
        Ok(self.chapters.as_deref().unwrap_or_default())
    }

    /// Whether `load_chapters` has succeeded on this instance.
    pub fn is_loaded(&self) -> bool {
        self.chapters.is_some()
    }

    /// The unfiltered list, empty if not yet loaded.
    pub fn chapters(&self) -> &[Chapter] {
        self.chapters.as_deref().unwrap_or_default()
    }

    /// Look up one chapter by id in the loaded list.
    pub fn chapter(&self, chapter_id: u16) -> Option<&Chapter> {
        self.chapters().iter().find(|c| c.id == chapter_id)
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Clear all criteria, restoring the unfiltered list. No network call.
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    /// The loaded list with the current criteria applied.
    pub fn filtered(&self) -> Result<Vec<Chapter>, InvalidJuzNumber> {
        filter_chapters(self.chapters(), &self.criteria)
    }
}
