use serde::{Deserialize, Serialize};

/// A reciter the user can pick for chapter playback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reciter {
    pub id: u32,
    pub name: String,
    /// Recitation style, when the source distinguishes one.
    pub style: Option<String>,
}

/// A playable recording of one chapter by one reciter.
///
/// Fetched lazily, only once both the reciter and the chapter are known.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioAsset {
    pub recitation_id: u32,
    pub chapter_id: u16,
    pub audio_url: String,
    pub format: Option<String>,
    pub file_size: Option<u64>,
}
