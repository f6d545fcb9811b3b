mod catalog;
pub mod chapter;
mod filter;
mod juz;
mod verse;

pub use catalog::ChapterCatalog;
pub use chapter::{
    is_valid_chapter_id, parse_chapter_param, Chapter, InvalidChapterId, RevelationPlace,
    CHAPTER_COUNT,
};
pub use filter::{filter_chapters, FilterCriteria, VerseLength};
pub use juz::{juz_span, InvalidJuzNumber, JuzSpan, JUZ_COUNT};
pub use verse::{InvalidVerseKey, Verse, VerseKey};
