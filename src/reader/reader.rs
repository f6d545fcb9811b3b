//! The chapter reader state machine.
//!
//! Outer states: `Idle -> Loading -> {Ready | Failed}`. Loading is entered
//! whenever the chapter identifier changes; Ready holds the aggregated view.
//! Selecting a reciter runs a sub-transition inside Ready
//! (`AudioLoading -> AudioReady | AudioFailed`) and can never demote the
//! outer state.
//!
//! Every load is tagged with the generation current when it was issued; a
//! completion whose generation has been overtaken is discarded, so a
//! response for a chapter the user already navigated away from can never
//! overwrite newer state.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::content_api::{ContentApi, FetchError, FetchResult};

use super::audio::{AudioAsset, Reciter};
use super::view::{load_chapter_view, ChapterView};

/// Outer reader state.
#[derive(Clone, Debug, PartialEq)]
pub enum ReaderState {
    Idle,
    Loading { chapter_id: u16 },
    Ready(ReadyState),
    Failed { chapter_id: u16, message: String },
}

/// The Ready state: the aggregated view plus the audio sub-state.
#[derive(Clone, Debug, PartialEq)]
pub struct ReadyState {
    pub view: ChapterView,
    pub audio: AudioState,
}

/// Audio sub-state within Ready.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AudioState {
    /// No reciter selected yet.
    #[default]
    NotSelected,
    Loading {
        recitation_id: u32,
    },
    Ready(AudioAsset),
    /// Re-selecting a reciter retries; the verse view stays intact.
    Failed {
        recitation_id: u32,
        message: String,
    },
}

/// Ticket identifying one chapter load. A completion only lands while its
/// ticket is still the newest one.
#[derive(Clone, Copy, Debug)]
pub struct LoadTicket {
    chapter_id: u16,
    generation: u64,
}

/// Ticket identifying one audio load.
#[derive(Clone, Copy, Debug)]
pub struct AudioTicket {
    recitation_id: u32,
    chapter_id: u16,
    generation: u64,
}

/// Drives chapter loading and audio selection against the content API.
pub struct ChapterReader {
    api: Arc<dyn ContentApi>,
    state: ReaderState,
    load_generation: u64,
    audio_generation: u64,
}

impl ChapterReader {
    pub fn new(api: Arc<dyn ContentApi>) -> Self {
        Self {
            api,
            state: ReaderState::Idle,
            load_generation: 0,
            audio_generation: 0,
        }
    }

    pub fn state(&self) -> &ReaderState {
        &self.state
    }

    /// The aggregated view, when Ready.
    pub fn view(&self) -> Option<&ChapterView> {
        match &self.state {
            ReaderState::Ready(ready) => Some(&ready.view),
            _ => None,
        }
    }

    /// The audio sub-state, when Ready.
    pub fn audio(&self) -> Option<&AudioState> {
        match &self.state {
            ReaderState::Ready(ready) => Some(&ready.audio),
            _ => None,
        }
    }

    /// Load a chapter: issue the three required fetches concurrently and
    /// enter Ready or Failed.
    pub async fn load_chapter(&mut self, chapter_id: u16) -> &ReaderState {
        let ticket = self.begin_load(chapter_id);
        let api = Arc::clone(&self.api);
        let result = load_chapter_view(api.as_ref(), chapter_id).await;
        self.complete_load(ticket, result);
        &self.state
    }

    /// Enter Loading for `chapter_id` and invalidate everything in flight.
    pub fn begin_load(&mut self, chapter_id: u16) -> LoadTicket {
        self.load_generation += 1;
        // Navigating away also orphans any in-flight audio fetch.
        self.audio_generation += 1;
        self.state = ReaderState::Loading { chapter_id };
        LoadTicket {
            chapter_id,
            generation: self.load_generation,
        }
    }

    /// Apply the outcome of a chapter load, unless it has gone stale.
    ///
    /// Returns whether the result was applied.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<ChapterView, FetchError>,
    ) -> bool {
        if ticket.generation != self.load_generation {
            debug!(
                chapter_id = ticket.chapter_id,
                "discarding stale chapter load"
            );
            return false;
        }
        self.state = match result {
            Ok(view) => ReaderState::Ready(ReadyState {
                view,
                audio: AudioState::NotSelected,
            }),
            Err(err) => {
                warn!(chapter_id = ticket.chapter_id, error = %err, "chapter load failed");
                ReaderState::Failed {
                    chapter_id: ticket.chapter_id,
                    message: err.to_string(),
                }
            }
        };
        true
    }

    /// Fetch the reciter list. Best effort: a failure is logged and shows
    /// up as an empty list, it never blocks the verse view.
    pub async fn load_reciters(&self) -> Vec<Reciter> {
        match self.api.list_recitations().await {
            Ok(reciters) => reciters.iter().map(|r| r.to_reciter()).collect(),
            Err(err) => {
                warn!(error = %err, "reciter list unavailable");
                Vec::new()
            }
        }
    }

    /// Select a reciter and fetch the chapter recording.
    ///
    /// Returns false when no chapter is ready or the result was discarded
    /// as stale.
    pub async fn select_reciter(&mut self, recitation_id: u32) -> bool {
        let Some(ticket) = self.begin_audio(recitation_id) else {
            return false;
        };
        let api = Arc::clone(&self.api);
        let result = api
            .get_chapter_audio(ticket.recitation_id, ticket.chapter_id)
            .await
            .map(|file| file.to_audio_asset(ticket.recitation_id));
        self.complete_audio(ticket, result)
    }

    /// Enter AudioLoading for `recitation_id`, if a chapter is ready.
    pub fn begin_audio(&mut self, recitation_id: u32) -> Option<AudioTicket> {
        let ReaderState::Ready(ready) = &mut self.state else {
            warn!(recitation_id, "reciter selected while no chapter is ready");
            return None;
        };
        self.audio_generation += 1;
        ready.audio = AudioState::Loading { recitation_id };
        Some(AudioTicket {
            recitation_id,
            chapter_id: ready.view.chapter.id,
            generation: self.audio_generation,
        })
    }

    /// Apply the outcome of an audio load, unless it has gone stale.
    ///
    /// An audio failure lands in the audio sub-state only; the outer state
    /// stays Ready.
    pub fn complete_audio(&mut self, ticket: AudioTicket, result: FetchResult<AudioAsset>) -> bool {
        if ticket.generation != self.audio_generation {
            debug!(
                recitation_id = ticket.recitation_id,
                "discarding stale audio load"
            );
            return false;
        }
        let ReaderState::Ready(ready) = &mut self.state else {
            return false;
        };
        ready.audio = match result {
            Ok(asset) => AudioState::Ready(asset),
            Err(err) => {
                warn!(
                    recitation_id = ticket.recitation_id,
                    chapter_id = ticket.chapter_id,
                    error = %err,
                    "audio load failed"
                );
                AudioState::Failed {
                    recitation_id: ticket.recitation_id,
                    message: err.to_string(),
                }
            }
        };
        true
    }
}
