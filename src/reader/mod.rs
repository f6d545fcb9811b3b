mod audio;
mod reader;
mod sanitize;
mod view;

pub use audio::{AudioAsset, Reciter};
pub use reader::{AudioState, AudioTicket, ChapterReader, LoadTicket, ReaderState, ReadyState};
pub use sanitize::sanitize_translation;
pub use view::{load_chapter_view, ChapterView};
