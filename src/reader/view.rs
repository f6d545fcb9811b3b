//! Chapter view aggregation.
//!
//! One chapter view is assembled from three independent responses: chapter
//! metadata, the verse list, and the full juz index. All three are required;
//! the fetches run concurrently and the view is built only when every one of
//! them has succeeded. Partial data is never shown.

use serde::Serialize;

use crate::catalog::{Chapter, Verse};
use crate::content_api::models::{resolve_juz_number, ApiChapter, ApiJuz, ApiVerse};
use crate::content_api::{ContentApi, FetchError};

use super::sanitize::sanitize_translation;

/// Everything the detail view renders for one chapter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChapterView {
    pub chapter: Chapter,
    /// Verses in ascending verse-number order, translations sanitized.
    pub verses: Vec<Verse>,
    /// Badge for the juz the chapter starts in; absent when the juz index
    /// does not mention the chapter.
    pub juz_number: Option<u8>,
}

/// Fetch and aggregate one chapter view.
///
/// The three required requests are issued concurrently; the first failure
/// fails the whole operation.
pub async fn load_chapter_view(
    api: &dyn ContentApi,
    chapter_id: u16,
) -> Result<ChapterView, FetchError> {
    let (chapter, verses, juzs) = tokio::try_join!(
        api.get_chapter(chapter_id),
        api.list_verses(chapter_id),
        api.list_juzs(),
    )?;

    Ok(build_chapter_view(chapter_id, &chapter, &verses, &juzs))
}

/// Assemble the view from already-fetched responses.
fn build_chapter_view(
    chapter_id: u16,
    chapter: &ApiChapter,
    verses: &[ApiVerse],
    juzs: &[ApiJuz],
) -> ChapterView {
    let mut verses: Vec<Verse> = verses.iter().map(|v| v.to_verse(chapter_id)).collect();
    // Source order is expected to be ascending already; do not rely on it.
    verses.sort_by_key(|v| v.verse_number);

    for verse in &mut verses {
        if let Some(raw) = verse.translation.take() {
            verse.translation = Some(sanitize_translation(&raw));
        }
    }

    ChapterView {
        chapter: chapter.to_chapter(),
        verses,
        juz_number: resolve_juz_number(juzs, chapter_id),
    }
}
