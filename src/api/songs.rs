use once_cell::sync::Lazy;

use crate::downloads::DownloadError;

static SONG_HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Something that can produce the raw bytes behind a song locator.
#[allow(async_fn_in_trait)]
pub trait SongSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, DownloadError>;
}

/// Plain GET against the song locator. Uses the browser's fetch on wasm.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpSongSource;

impl SongSource for HttpSongSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, DownloadError> {
        let response = SONG_HTTP_CLIENT
            .get(url)
            .send()
            .await
            .map_err(|err| DownloadError::Network(err.to_string()))?;

        if !response.status().is_success() {
            return Err(DownloadError::Status(response.status().as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| DownloadError::Network(err.to_string()))?;
        Ok(bytes.to_vec())
    }
}
