//! Test fixture payloads mirroring the content API's JSON shapes.
//!
//! The chapter table carries the real names, verse counts and revelation
//! places of all 114 chapters so list-level assertions run against
//! realistic data. Verse bodies are synthesized per chapter.

use serde_json::{json, Value};

use quran_reader::catalog::{juz_span, CHAPTER_COUNT, JUZ_COUNT};

/// (id, name_simple, translated_name, meccan, verses_count)
const CHAPTERS: [(u16, &str, &str, bool, u32); CHAPTER_COUNT as usize] = [
    (1, "Al-Fatihah", "The Opener", true, 7),
    (2, "Al-Baqarah", "The Cow", false, 286),
    (3, "Ali 'Imran", "Family of Imran", false, 200),
    (4, "An-Nisa", "The Women", false, 176),
    (5, "Al-Ma'idah", "The Table Spread", false, 120),
    (6, "Al-An'am", "The Cattle", true, 165),
    (7, "Al-A'raf", "The Heights", true, 206),
    (8, "Al-Anfal", "The Spoils of War", false, 75),
    (9, "At-Tawbah", "The Repentance", false, 129),
    (10, "Yunus", "Jonah", true, 109),
    (11, "Hud", "Hud", true, 123),
    (12, "Yusuf", "Joseph", true, 111),
    (13, "Ar-Ra'd", "The Thunder", false, 43),
    (14, "Ibrahim", "Abraham", true, 52),
    (15, "Al-Hijr", "The Rocky Tract", true, 99),
    (16, "An-Nahl", "The Bee", true, 128),
    (17, "Al-Isra", "The Night Journey", true, 111),
    (18, "Al-Kahf", "The Cave", true, 110),
    (19, "Maryam", "Mary", true, 98),
    (20, "Taha", "Ta-Ha", true, 135),
    (21, "Al-Anbya", "The Prophets", true, 112),
    (22, "Al-Hajj", "The Pilgrimage", false, 78),
    (23, "Al-Mu'minun", "The Believers", true, 118),
    (24, "An-Nur", "The Light", false, 64),
    (25, "Al-Furqan", "The Criterion", true, 77),
    (26, "Ash-Shu'ara", "The Poets", true, 227),
    (27, "An-Naml", "The Ant", true, 93),
    (28, "Al-Qasas", "The Stories", true, 88),
    (29, "Al-'Ankabut", "The Spider", true, 69),
    (30, "Ar-Rum", "The Romans", true, 60),
    (31, "Luqman", "Luqman", true, 34),
    (32, "As-Sajdah", "The Prostration", true, 30),
    (33, "Al-Ahzab", "The Combined Forces", false, 73),
    (34, "Saba", "Sheba", true, 54),
    (35, "Fatir", "Originator", true, 45),
    (36, "Ya-Sin", "Ya Sin", true, 83),
    (37, "As-Saffat", "Those Who Set the Ranks", true, 182),
    (38, "Sad", "The Letter Sad", true, 88),
    (39, "Az-Zumar", "The Troops", true, 75),
    (40, "Ghafir", "The Forgiver", true, 85),
    (41, "Fussilat", "Explained in Detail", true, 54),
    (42, "Ash-Shuraa", "The Consultation", true, 53),
    (43, "Az-Zukhruf", "The Ornaments of Gold", true, 89),
    (44, "Ad-Dukhan", "The Smoke", true, 59),
    (45, "Al-Jathiyah", "The Crouching", true, 37),
    (46, "Al-Ahqaf", "The Wind-Curved Sandhills", true, 35),
    (47, "Muhammad", "Muhammad", false, 38),
    (48, "Al-Fath", "The Victory", false, 29),
    (49, "Al-Hujurat", "The Rooms", false, 18),
    (50, "Qaf", "The Letter Qaf", true, 45),
    (51, "Adh-Dhariyat", "The Winnowing Winds", true, 60),
    (52, "At-Tur", "The Mount", true, 49),
    (53, "An-Najm", "The Star", true, 62),
    (54, "Al-Qamar", "The Moon", true, 55),
    (55, "Ar-Rahman", "The Beneficent", false, 78),
    (56, "Al-Waqi'ah", "The Inevitable", true, 96),
    (57, "Al-Hadid", "The Iron", false, 29),
    (58, "Al-Mujadila", "The Pleading Woman", false, 22),
    (59, "Al-Hashr", "The Exile", false, 24),
    (60, "Al-Mumtahanah", "She That Is To Be Examined", false, 13),
    (61, "As-Saf", "The Ranks", false, 14),
    (62, "Al-Jumu'ah", "The Congregation", false, 11),
    (63, "Al-Munafiqun", "The Hypocrites", false, 11),
    (64, "At-Taghabun", "The Mutual Disillusion", false, 18),
    (65, "At-Talaq", "The Divorce", false, 12),
    (66, "At-Tahrim", "The Prohibition", false, 12),
    (67, "Al-Mulk", "The Sovereignty", true, 30),
    (68, "Al-Qalam", "The Pen", true, 52),
    (69, "Al-Haqqah", "The Reality", true, 52),
    (70, "Al-Ma'arij", "The Ascending Stairways", true, 44),
    (71, "Nuh", "Noah", true, 28),
    (72, "Al-Jinn", "The Jinn", true, 28),
    (73, "Al-Muzzammil", "The Enshrouded One", true, 20),
    (74, "Al-Muddaththir", "The Cloaked One", true, 56),
    (75, "Al-Qiyamah", "The Resurrection", true, 40),
    (76, "Al-Insan", "The Man", false, 31),
    (77, "Al-Mursalat", "The Emissaries", true, 50),
    (78, "An-Naba", "The Tidings", true, 40),
    (79, "An-Nazi'at", "Those Who Drag Forth", true, 46),
    (80, "'Abasa", "He Frowned", true, 42),
    (81, "At-Takwir", "The Overthrowing", true, 29),
    (82, "Al-Infitar", "The Cleaving", true, 19),
    (83, "Al-Mutaffifin", "The Defrauding", true, 36),
    (84, "Al-Inshiqaq", "The Sundering", true, 25),
    (85, "Al-Buruj", "The Mansions of the Stars", true, 22),
    (86, "At-Tariq", "The Nightcomer", true, 17),
    (87, "Al-A'la", "The Most High", true, 19),
    (88, "Al-Ghashiyah", "The Overwhelming", true, 26),
    (89, "Al-Fajr", "The Dawn", true, 30),
    (90, "Al-Balad", "The City", true, 20),
    (91, "Ash-Shams", "The Sun", true, 15),
    (92, "Al-Layl", "The Night", true, 21),
    (93, "Ad-Duhaa", "The Morning Hours", true, 11),
    (94, "Ash-Sharh", "The Relief", true, 8),
    (95, "At-Tin", "The Fig", true, 8),
    (96, "Al-'Alaq", "The Clot", true, 19),
    (97, "Al-Qadr", "The Power", true, 5),
    (98, "Al-Bayyinah", "The Clear Proof", false, 8),
    (99, "Az-Zalzalah", "The Earthquake", false, 8),
    (100, "Al-'Adiyat", "The Courser", true, 11),
    (101, "Al-Qari'ah", "The Calamity", true, 11),
    (102, "At-Takathur", "The Rivalry in World Increase", true, 8),
    (103, "Al-'Asr", "The Declining Day", true, 3),
    (104, "Al-Humazah", "The Traducer", true, 9),
    (105, "Al-Fil", "The Elephant", true, 5),
    (106, "Quraysh", "Quraysh", true, 4),
    (107, "Al-Ma'un", "The Small Kindnesses", true, 7),
    (108, "Al-Kawthar", "The Abundance", true, 3),
    (109, "Al-Kafirun", "The Disbelievers", true, 6),
    (110, "An-Nasr", "The Divine Support", false, 3),
    (111, "Al-Masad", "The Palm Fiber", true, 5),
    (112, "Al-Ikhlas", "The Sincerity", true, 4),
    (113, "Al-Falaq", "The Daybreak", true, 5),
    (114, "An-Nas", "Mankind", true, 6),
];

fn chapter_value(entry: &(u16, &str, &str, bool, u32)) -> Value {
    let (id, name_simple, translated, meccan, verses_count) = *entry;
    json!({
        "id": id,
        "name_simple": name_simple,
        "name_arabic": "",
        "translated_name": {"language_name": "english", "name": translated},
        // The upstream service has been seen spelling the medinan value
        // both ways; alternate to keep the equivalence exercised.
        "revelation_place": if meccan {
            "makkah".to_string()
        } else if id % 2 == 0 {
            "madinah".to_string()
        } else {
            "madina".to_string()
        },
        "verses_count": verses_count,
        "bismillah_pre": id != 1 && id != 9
    })
}

/// The full `"chapters"` array.
pub fn chapters_array() -> Value {
    Value::Array(CHAPTERS.iter().map(chapter_value).collect())
}

/// The `"verses"` array for one chapter: `verses_count` verses with a
/// footnote-marked translation each.
pub fn verses_array(chapter_id: u16, verses_count: u32) -> Value {
    let verses: Vec<Value> = (1..=verses_count)
        .map(|n| {
            json!({
                "id": u32::from(chapter_id) * 1000 + n,
                "verse_key": format!("{}:{}", chapter_id, n),
                "verse_number": n,
                "text_uthmani": format!("text {}:{}", chapter_id, n),
                "translations": [{
                    "resource_id": 33,
                    "text": format!(
                        "Translation of {}:{}<sup foot_note={}>1</sup>",
                        chapter_id, n, n
                    )
                }]
            })
        })
        .collect();
    Value::Array(verses)
}

/// The full `"juzs"` array, derived from the fixed chapter spans.
pub fn juzs_array() -> Value {
    let juzs: Vec<Value> = (1..=JUZ_COUNT)
        .map(|number| {
            let span = juz_span(number).expect("fixture juz number");
            let mapping: serde_json::Map<String, Value> = (span.first_chapter
                ..=span.last_chapter)
                .map(|chapter_id| {
                    let verses = CHAPTERS[chapter_id as usize - 1].4;
                    (chapter_id.to_string(), json!(format!("1-{}", verses)))
                })
                .collect();
            json!({
                "id": number,
                "juz_number": number,
                "verse_mapping": mapping
            })
        })
        .collect();
    Value::Array(juzs)
}

/// The `"recitations"` array.
pub fn recitations_array() -> Value {
    json!([
        {"id": 1, "reciter_name": "AbdulBaset AbdulSamad", "style": "Mujawwad"},
        {"id": 7, "reciter_name": "Mishari Rashid al-'Afasy", "style": null}
    ])
}

/// The `"audio_file"` object for one (recitation, chapter) pair.
pub fn audio_file(recitation_id: u32, chapter_id: u16) -> Value {
    json!({
        "id": u32::from(chapter_id) + recitation_id * 1000,
        "chapter_id": chapter_id,
        "file_size": 1_595_520,
        "format": "mp3",
        "audio_url": format!("https://audio.example.net/{}/{}.mp3", recitation_id, chapter_id)
    })
}
