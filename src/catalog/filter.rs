//! Client-side chapter filtering.
//!
//! Filtering is a pure function over the loaded chapter list: a chapter
//! passes when every active criterion accepts it, and criteria left empty
//! accept everything. The output preserves the input order; filtering never
//! reorders.

use serde::{Deserialize, Serialize};

use super::chapter::{Chapter, RevelationPlace};
use super::juz::{juz_span, InvalidJuzNumber};

/// Chapter length buckets by verse count.
///
/// The buckets partition every possible verse count: short is below 50,
/// medium is 50..=99, long is 100 and up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerseLength {
    Short,
    Medium,
    Long,
}

impl VerseLength {
    /// The bucket a verse count falls into.
    pub fn bucket_for(verses_count: u32) -> Self {
        match verses_count {
            0..=49 => Self::Short,
            50..=99 => Self::Medium,
            _ => Self::Long,
        }
    }

    pub fn contains(&self, verses_count: u32) -> bool {
        Self::bucket_for(verses_count) == *self
    }
}

/// Transient filter state of the catalog view. Not persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against the simple or translated
    /// name. Empty means no search.
    pub search_text: String,
    pub juz_number: Option<u8>,
    pub revelation_place: Option<RevelationPlace>,
    pub verse_length: Option<VerseLength>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty()
            && self.juz_number.is_none()
            && self.revelation_place.is_none()
            && self.verse_length.is_none()
    }
}

/// Apply `criteria` to `chapters`, preserving order.
///
/// A juz number outside 1..=30 is rejected up front rather than matching
/// nothing.
pub fn filter_chapters(
    chapters: &[Chapter],
    criteria: &FilterCriteria,
) -> Result<Vec<Chapter>, InvalidJuzNumber> {
    // Validate the juz criterion before looking anything up.
    let juz = criteria.juz_number.map(juz_span).transpose()?;

    let needle = criteria.search_text.trim().to_lowercase();

    let filtered = chapters
        .iter()
        .filter(|chapter| {
            let search_ok = needle.is_empty()
                || chapter.name_simple.to_lowercase().contains(&needle)
                || chapter.translated_name.to_lowercase().contains(&needle);

            let juz_ok = juz.map_or(true, |span| span.contains_chapter(chapter.id));

            let revelation_ok = criteria
                .revelation_place
                .map_or(true, |place| chapter.revelation_place == Some(place));

            let length_ok = criteria
                .verse_length
                .map_or(true, |bucket| bucket.contains(chapter.verses_count));

            search_ok && juz_ok && revelation_ok && length_ok
        })
        .cloned()
        .collect();

    Ok(filtered)
}
