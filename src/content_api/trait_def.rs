//! ContentApi trait definition.
//!
//! Abstracts the remote content service so the catalog and reader can be
//! driven by the HTTP client in production and by in-memory fakes in tests.

use async_trait::async_trait;

use super::error::FetchResult;
use super::models::{ApiAudioFile, ApiChapter, ApiJuz, ApiReciter, ApiVerse};

/// The remote content service, as seen by this crate.
///
/// All operations are read-only HTTP GETs on the remote side. Implementors
/// return the API response models; conversion to catalog/reader models is
/// the caller's business.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// The full chapter list.
    async fn list_chapters(&self) -> FetchResult<Vec<ApiChapter>>;

    /// Metadata of one chapter.
    async fn get_chapter(&self, chapter_id: u16) -> FetchResult<ApiChapter>;

    /// The verses of one chapter, with the configured translation.
    async fn list_verses(&self, chapter_id: u16) -> FetchResult<Vec<ApiVerse>>;

    /// The full juz index, in source order.
    async fn list_juzs(&self) -> FetchResult<Vec<ApiJuz>>;

    /// Available reciters.
    async fn list_recitations(&self) -> FetchResult<Vec<ApiReciter>>;

    /// The audio file for one (recitation, chapter) pair.
    async fn get_chapter_audio(
        &self,
        recitation_id: u32,
        chapter_id: u16,
    ) -> FetchResult<ApiAudioFile>;
}
