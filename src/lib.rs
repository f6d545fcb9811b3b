//! Quran Reader Content Library
//!
//! This library implements the data layer of a Quran reader: a typed client
//! for the remote content API, a filterable chapter catalog, and a chapter
//! reader that aggregates metadata, verses and the juz index into one
//! render-ready view. Rendering and routing are left to the embedding
//! application.

pub mod catalog;
pub mod config;
pub mod content_api;
pub mod reader;

// Re-export commonly used types for convenience
pub use catalog::{
    Chapter, ChapterCatalog, FilterCriteria, InvalidJuzNumber, RevelationPlace, Verse, VerseKey,
    VerseLength,
};
pub use config::ReaderConfig;
pub use content_api::{ContentApi, FetchError, HttpContentApi};
pub use reader::{AudioAsset, AudioState, ChapterReader, ChapterView, ReaderState, Reciter};
