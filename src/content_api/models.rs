//! Models for the content API responses.
//!
//! These types match the JSON the remote service returns and include
//! conversion methods to the catalog and reader models. Fields the service
//! may omit default rather than fail the whole payload.

use std::collections::HashMap;

use serde::Deserialize;

use crate::catalog::{Chapter, RevelationPlace, Verse, VerseKey};
use crate::reader::{AudioAsset, Reciter};

// =============================================================================
// Response Envelopes
// =============================================================================

#[derive(Clone, Debug, Deserialize)]
pub struct ChaptersEnvelope {
    pub chapters: Vec<ApiChapter>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ChapterEnvelope {
    pub chapter: ApiChapter,
}

#[derive(Clone, Debug, Deserialize)]
pub struct VersesEnvelope {
    pub verses: Vec<ApiVerse>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct JuzsEnvelope {
    pub juzs: Vec<ApiJuz>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RecitationsEnvelope {
    pub recitations: Vec<ApiReciter>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AudioFileEnvelope {
    pub audio_file: ApiAudioFile,
}

// =============================================================================
// Chapters
// =============================================================================

#[derive(Clone, Debug, Deserialize)]
pub struct ApiTranslatedName {
    pub name: String,
}

/// Chapter from the content API.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiChapter {
    pub id: u16,
    pub name_simple: String,
    #[serde(default)]
    pub name_arabic: String,
    pub translated_name: ApiTranslatedName,
    pub revelation_place: String,
    pub verses_count: u32,
    #[serde(default)]
    pub bismillah_pre: bool,
}

impl ApiChapter {
    /// Convert to the catalog Chapter model.
    pub fn to_chapter(&self) -> Chapter {
        Chapter {
            id: self.id,
            name_simple: self.name_simple.clone(),
            name_arabic: self.name_arabic.clone(),
            translated_name: self.translated_name.name.clone(),
            revelation_place: RevelationPlace::from_api_str(&self.revelation_place),
            verses_count: self.verses_count,
            bismillah_pre: self.bismillah_pre,
        }
    }
}

// =============================================================================
// Verses
// =============================================================================

#[derive(Clone, Debug, Deserialize)]
pub struct ApiTranslation {
    #[serde(default)]
    pub resource_id: Option<u32>,
    pub text: String,
}

/// Verse from the content API, requested with one translation resource and
/// the original-text field selected.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiVerse {
    pub id: u32,
    pub verse_key: String,
    pub verse_number: u32,
    #[serde(default)]
    pub text_uthmani: Option<String>,
    #[serde(default)]
    pub translations: Vec<ApiTranslation>,
}

impl ApiVerse {
    /// Convert to the reader Verse model.
    ///
    /// The first translation, when present, becomes the verse translation;
    /// the translation list is never indexed blindly. A malformed verse key
    /// falls back to the position the verse claims within `chapter_id`.
    pub fn to_verse(&self, chapter_id: u16) -> Verse {
        let key = self.verse_key.parse::<VerseKey>().unwrap_or(VerseKey {
            chapter: chapter_id,
            verse: self.verse_number,
        });
        Verse {
            key,
            verse_number: self.verse_number,
            text: self.text_uthmani.clone().unwrap_or_default(),
            translation: self.translations.first().map(|t| t.text.clone()),
        }
    }
}

// =============================================================================
// Juz Index
// =============================================================================

/// One juz record from the full juz index.
///
/// `verse_mapping` keys identify chapters; both the bare `"2"` form and the
/// composite `"2:1-141"` form occur, so matching goes through the leading
/// chapter segment of the key.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiJuz {
    pub id: u32,
    pub juz_number: u8,
    #[serde(default)]
    pub verse_mapping: HashMap<String, String>,
}

impl ApiJuz {
    /// Whether this juz's verse mapping mentions `chapter_id`.
    pub fn covers_chapter(&self, chapter_id: u16) -> bool {
        self.verse_mapping
            .keys()
            .any(|key| mapping_key_chapter(key) == Some(chapter_id))
    }
}

/// The chapter id a verse-mapping key refers to: the key up to the first
/// `:` separator, or the whole key when there is none.
fn mapping_key_chapter(key: &str) -> Option<u16> {
    let chapter = key.split(':').next().unwrap_or(key);
    chapter.trim().parse().ok()
}

/// The number of the first juz in `juzs` whose mapping mentions
/// `chapter_id`, in the order the index was returned.
pub fn resolve_juz_number(juzs: &[ApiJuz], chapter_id: u16) -> Option<u8> {
    juzs.iter()
        .find(|juz| juz.covers_chapter(chapter_id))
        .map(|juz| juz.juz_number)
}

// =============================================================================
// Recitations
// =============================================================================

/// Reciter from the recitations resource list.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiReciter {
    pub id: u32,
    pub reciter_name: String,
    #[serde(default)]
    pub style: Option<String>,
}

impl ApiReciter {
    pub fn to_reciter(&self) -> Reciter {
        Reciter {
            id: self.id,
            name: self.reciter_name.clone(),
            style: self.style.clone(),
        }
    }
}

/// Chapter audio file for a (recitation, chapter) pair.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiAudioFile {
    pub id: u32,
    pub chapter_id: u16,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub format: Option<String>,
    pub audio_url: String,
}

impl ApiAudioFile {
    pub fn to_audio_asset(&self, recitation_id: u32) -> AudioAsset {
        AudioAsset {
            recitation_id,
            chapter_id: self.chapter_id,
            audio_url: self.audio_url.clone(),
            format: self.format.clone(),
            file_size: self.file_size,
        }
    }
}
