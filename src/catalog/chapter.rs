use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of chapters in the source text. Chapter ids run 1..=114.
pub const CHAPTER_COUNT: u16 = 114;

/// Whether `id` is a valid chapter id.
pub fn is_valid_chapter_id(id: u16) -> bool {
    (1..=CHAPTER_COUNT).contains(&id)
}

/// A chapter identifier arrived from outside (route parameter, user input)
/// that does not name one of the 114 chapters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid chapter id {0:?}, expected an integer in 1..=114")]
pub struct InvalidChapterId(pub String);

/// Parse a route parameter into a chapter id.
///
/// The router hands the identifier over as a string; anything that is not an
/// integer in 1..=114 is rejected before a request is issued.
pub fn parse_chapter_param(raw: &str) -> Result<u16, InvalidChapterId> {
    raw.trim()
        .parse::<u16>()
        .ok()
        .filter(|id| is_valid_chapter_id(*id))
        .ok_or_else(|| InvalidChapterId(raw.to_string()))
}

/// Where a chapter was revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevelationPlace {
    Meccan,
    Medinan,
}

impl RevelationPlace {
    /// Parse the value the content API uses.
    ///
    /// Upstream data is not consistent: the medinan value has been observed
    /// as both "madina" and "madinah". Unrecognized values map to `None`
    /// rather than being guessed at.
    pub fn from_api_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "makkah" | "mecca" | "meccan" => Some(Self::Meccan),
            "madina" | "madinah" | "medina" | "medinan" => Some(Self::Medinan),
            _ => None,
        }
    }
}

/// A chapter as held in the catalog. Immutable once fetched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: u16,
    pub name_simple: String,
    pub name_arabic: String,
    pub translated_name: String,
    /// `None` when the API reported a value we do not recognize.
    pub revelation_place: Option<RevelationPlace>,
    pub verses_count: u32,
    /// Whether the basmala is displayed before the first verse.
    pub bismillah_pre: bool,
}
