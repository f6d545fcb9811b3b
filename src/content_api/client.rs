//! HTTP client for the remote content API.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::catalog::{is_valid_chapter_id, InvalidChapterId};
use crate::config::ReaderConfig;

use super::error::{FetchError, FetchResult};
use super::models::{
    ApiAudioFile, ApiChapter, ApiJuz, ApiReciter, ApiVerse, AudioFileEnvelope, ChapterEnvelope,
    ChaptersEnvelope, JuzsEnvelope, RecitationsEnvelope, VersesEnvelope,
};
use super::trait_def::ContentApi;

/// Client for the remote content API.
///
/// Holds one connection pool for the life of the client; requests share the
/// configured timeout and base origin.
#[derive(Clone)]
pub struct HttpContentApi {
    client: Client,
    base_url: String,
    translation_id: u32,
}

impl HttpContentApi {
    /// Build a client from a validated configuration.
    pub fn new(config: &ReaderConfig) -> Result<Self> {
        config.validate().context("invalid reader configuration")?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("failed to create HTTP client")?;

        // Ensure base_url doesn't have a trailing slash
        let base_url = config.api_origin.trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            translation_id: config.translation_id,
        })
    }

    /// Base origin requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn check_chapter_id(chapter_id: u16) -> FetchResult<()> {
        if is_valid_chapter_id(chapter_id) {
            Ok(())
        } else {
            Err(InvalidChapterId(chapter_id.to_string()).into())
        }
    }

    /// Issue one GET and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: String) -> FetchResult<T> {
        debug!(%url, "content api request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url,
            });
        }

        response.json::<T>().await.map_err(|source| {
            if source.is_decode() {
                FetchError::Parse { url, source }
            } else {
                FetchError::Network { url, source }
            }
        })
    }
}

#[async_trait]
impl ContentApi for HttpContentApi {
    async fn list_chapters(&self) -> FetchResult<Vec<ApiChapter>> {
        let url = format!("{}/chapters", self.base_url);
        let envelope: ChaptersEnvelope = self.get_json(url).await?;
        Ok(envelope.chapters)
    }

    async fn get_chapter(&self, chapter_id: u16) -> FetchResult<ApiChapter> {
        Self::check_chapter_id(chapter_id)?;
        let url = format!("{}/chapters/{}", self.base_url, chapter_id);
        let envelope: ChapterEnvelope = self.get_json(url).await?;
        Ok(envelope.chapter)
    }

    async fn list_verses(&self, chapter_id: u16) -> FetchResult<Vec<ApiVerse>> {
        Self::check_chapter_id(chapter_id)?;
        let url = format!(
            "{}/verses/by_chapter/{}?translations={}&fields=text_uthmani",
            self.base_url, chapter_id, self.translation_id
        );
        let envelope: VersesEnvelope = self.get_json(url).await?;
        Ok(envelope.verses)
    }

    async fn list_juzs(&self) -> FetchResult<Vec<ApiJuz>> {
        let url = format!("{}/juzs", self.base_url);
        let envelope: JuzsEnvelope = self.get_json(url).await?;
        Ok(envelope.juzs)
    }

    async fn list_recitations(&self) -> FetchResult<Vec<ApiReciter>> {
        let url = format!("{}/resources/recitations", self.base_url);
        let envelope: RecitationsEnvelope = self.get_json(url).await?;
        Ok(envelope.recitations)
    }

    async fn get_chapter_audio(
        &self,
        recitation_id: u32,
        chapter_id: u16,
    ) -> FetchResult<ApiAudioFile> {
        Self::check_chapter_id(chapter_id)?;
        let url = format!(
            "{}/chapter_recitations/{}/{}",
            self.base_url, recitation_id, chapter_id
        );
        let envelope: AudioFileEnvelope = self.get_json(url).await?;
        Ok(envelope.audio_file)
    }
}
