//! REST client for the scanner backend's `/api/v1` surface.
//!
//! Reads return typed records; writes are fire-and-forget from the
//! dashboard's perspective — a failure surfaces to the caller once,
//! nothing retries.

use anyhow::bail;

use crate::records::{
    AudioStatus, FrequencyRecord, NewFrequency, RecordingRecord, RecordingStats, ScannerStatus,
    TransmissionRecord,
};

#[derive(Clone)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base, path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let response = self.http.get(self.url(path)).send().await?;
        if !response.status().is_success() {
            bail!("HTTP {}", response.status());
        }
        Ok(response.json().await?)
    }

    async fn expect_success(&self, response: reqwest::Response) -> anyhow::Result<()> {
        if !response.status().is_success() {
            bail!("HTTP {}", response.status());
        }
        Ok(())
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    pub async fn frequencies(&self) -> anyhow::Result<Vec<FrequencyRecord>> {
        self.get_json("/frequencies").await
    }

    pub async fn transmissions(&self, limit: usize) -> anyhow::Result<Vec<TransmissionRecord>> {
        self.get_json(&format!("/transmissions?limit={}", limit)).await
    }

    pub async fn recordings(&self, limit: usize) -> anyhow::Result<Vec<RecordingRecord>> {
        self.get_json(&format!("/recordings?limit={}", limit)).await
    }

    pub async fn recording_stats(&self) -> anyhow::Result<RecordingStats> {
        self.get_json("/recordings/stats/summary").await
    }

    pub async fn scanner_status(&self) -> anyhow::Result<ScannerStatus> {
        self.get_json("/scanner/status").await
    }

    pub async fn audio_status(&self) -> anyhow::Result<AudioStatus> {
        self.get_json("/audio/status").await
    }

    // ── Writes ────────────────────────────────────────────────────────────

    pub async fn start_scanner(&self) -> anyhow::Result<()> {
        let r = self.http.post(self.url("/scanner/start")).send().await?;
        self.expect_success(r).await
    }

    pub async fn stop_scanner(&self) -> anyhow::Result<()> {
        let r = self.http.post(self.url("/scanner/stop")).send().await?;
        self.expect_success(r).await
    }

    pub async fn enable_audio(&self) -> anyhow::Result<()> {
        let r = self.http.post(self.url("/audio/enable")).send().await?;
        self.expect_success(r).await
    }

    pub async fn disable_audio(&self) -> anyhow::Result<()> {
        let r = self.http.post(self.url("/audio/disable")).send().await?;
        self.expect_success(r).await
    }

    pub async fn create_frequency(&self, frequency: &NewFrequency) -> anyhow::Result<()> {
        let r = self
            .http
            .post(self.url("/frequencies"))
            .json(frequency)
            .send()
            .await?;
        self.expect_success(r).await
    }

    pub async fn set_frequency_enabled(&self, id: i64, enabled: bool) -> anyhow::Result<()> {
        let r = self
            .http
            .put(self.url(&format!("/frequencies/{}", id)))
            .json(&serde_json::json!({ "enabled": enabled }))
            .send()
            .await?;
        self.expect_success(r).await
    }

    pub async fn delete_frequency(&self, id: i64) -> anyhow::Result<()> {
        let r = self
            .http
            .delete(self.url(&format!("/frequencies/{}", id)))
            .send()
            .await?;
        self.expect_success(r).await
    }

    pub async fn set_recording_favorite(&self, id: i64, is_favorite: bool) -> anyhow::Result<()> {
        let r = self
            .http
            .patch(self.url(&format!("/recordings/{}", id)))
            .json(&serde_json::json!({ "is_favorite": is_favorite }))
            .send()
            .await?;
        self.expect_success(r).await
    }

    pub async fn delete_recording(&self, id: i64) -> anyhow::Result<()> {
        let r = self
            .http
            .delete(self.url(&format!("/recordings/{}", id)))
            .send()
            .await?;
        self.expect_success(r).await
    }

    pub async fn maintenance_cleanup(&self, days: u32) -> anyhow::Result<()> {
        let r = self
            .http
            .post(self.url(&format!("/maintenance/cleanup?days={}", days)))
            .send()
            .await?;
        self.expect_success(r).await
    }
}
