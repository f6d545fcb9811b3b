//! Static juz index.
//!
//! The 30 juz divisions start and end mid-chapter, but for catalog filtering
//! only the chapter span matters: a chapter belongs to a juz filter when its
//! id falls inside the inclusive span of chapters that juz touches. The
//! spans are fixed properties of the text and are compiled in.

use thiserror::Error;

/// Number of juz divisions.
pub const JUZ_COUNT: u8 = 30;

/// Inclusive span of chapter ids touched by one juz.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JuzSpan {
    pub juz_number: u8,
    pub first_chapter: u16,
    pub last_chapter: u16,
}

impl JuzSpan {
    pub fn contains_chapter(&self, chapter_id: u16) -> bool {
        (self.first_chapter..=self.last_chapter).contains(&chapter_id)
    }
}

/// A juz number outside 1..=30. This is a programming or configuration
/// error on the caller's side, never silently ignored.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("invalid juz index {0}, expected 1..=30")]
pub struct InvalidJuzNumber(pub u8);

const fn span(juz_number: u8, first_chapter: u16, last_chapter: u16) -> JuzSpan {
    JuzSpan {
        juz_number,
        first_chapter,
        last_chapter,
    }
}

const JUZ_SPANS: [JuzSpan; JUZ_COUNT as usize] = [
    span(1, 1, 2),
    span(2, 2, 2),
    span(3, 2, 3),
    span(4, 3, 4),
    span(5, 4, 4),
    span(6, 4, 5),
    span(7, 5, 6),
    span(8, 6, 7),
    span(9, 7, 8),
    span(10, 8, 9),
    span(11, 9, 11),
    span(12, 11, 12),
    span(13, 12, 14),
    span(14, 15, 16),
    span(15, 17, 18),
    span(16, 18, 20),
    span(17, 21, 22),
    span(18, 23, 25),
    span(19, 25, 27),
    span(20, 27, 29),
    span(21, 29, 33),
    span(22, 33, 36),
    span(23, 36, 39),
    span(24, 39, 41),
    span(25, 41, 45),
    span(26, 46, 51),
    span(27, 51, 57),
    span(28, 58, 66),
    span(29, 67, 77),
    span(30, 78, 114),
];

/// Look up the chapter span of a juz. Fails loudly on an out-of-range
/// juz number.
pub fn juz_span(juz_number: u8) -> Result<JuzSpan, InvalidJuzNumber> {
    if juz_number == 0 || juz_number > JUZ_COUNT {
        return Err(InvalidJuzNumber(juz_number));
    }
    Ok(JUZ_SPANS[juz_number as usize - 1])
}
