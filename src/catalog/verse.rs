use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::chapter::is_valid_chapter_id;

/// Composite key identifying a verse: `"chapter:verse"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseKey {
    pub chapter: u16,
    pub verse: u32,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid verse key {0:?}, expected \"chapter:verse\"")]
pub struct InvalidVerseKey(pub String);

impl FromStr for VerseKey {
    type Err = InvalidVerseKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidVerseKey(s.to_string());
        let (chapter, verse) = s.split_once(':').ok_or_else(invalid)?;
        let chapter: u16 = chapter.trim().parse().map_err(|_| invalid())?;
        let verse: u32 = verse.trim().parse().map_err(|_| invalid())?;
        if !is_valid_chapter_id(chapter) || verse == 0 {
            return Err(invalid());
        }
        Ok(Self { chapter, verse })
    }
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

/// A verse of one chapter. Immutable once fetched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub key: VerseKey,
    /// 1-based position within the chapter.
    pub verse_number: u32,
    /// Original text.
    pub text: String,
    /// Translation, when the requested translation resource covers this
    /// verse. Sanitized to plain text before display.
    pub translation: Option<String>,
}
