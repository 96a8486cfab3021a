//! Song downloads and the per-slot "downloaded" flags shown on the buttons.

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(not(target_arch = "wasm32"))]
mod native;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserSaveTarget;
#[cfg(not(target_arch = "wasm32"))]
pub use native::FileSaveTarget;

use chrono::Utc;
use thiserror::Error;

use crate::api::{SongSlot, SongSource};
use crate::diagnostics::log_perf;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownloadError {
    #[error("Invalid song number: {0}")]
    InvalidSong(i32),
    #[error("Failed to fetch the song data: {0}")]
    Network(String),
    #[error("Failed to fetch the song data: HTTP {0}")]
    Status(u16),
    #[error("Failed to save {file_name}: {reason}")]
    Save { file_name: String, reason: String },
}

/// Hands downloaded bytes to the platform's "save file" behavior.
pub trait SaveTarget {
    fn save(&self, bytes: &[u8], file_name: &str) -> Result<(), DownloadError>;
}

#[cfg(target_arch = "wasm32")]
pub type PlatformSaveTarget = BrowserSaveTarget;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformSaveTarget = FileSaveTarget;

pub fn platform_save_target() -> PlatformSaveTarget {
    #[cfg(target_arch = "wasm32")]
    {
        BrowserSaveTarget
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        FileSaveTarget::in_download_dir()
    }
}

/// Button state for both song slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DownloadState {
    downloaded: [bool; 2],
}

impl DownloadState {
    pub fn is_downloaded(&self, slot: SongSlot) -> bool {
        self.downloaded[slot.index()]
    }

    pub fn mark_downloaded(&mut self, slot: SongSlot) {
        self.downloaded[slot.index()] = true;
    }

    pub fn reset(&mut self) {
        self.downloaded = [false; 2];
        tracing::info!("Page refreshed");
    }

    pub fn button_label(&self, slot: SongSlot) -> String {
        let number = slot.number();
        if self.is_downloaded(slot) {
            format!("Song {number} Downloaded")
        } else {
            format!("Download Song {number}")
        }
    }
}

/// Fetches the song behind `song_number` and triggers a save of it.
///
/// Returns the slot that was saved so the caller can flip its flag. Nothing is
/// fetched for numbers outside the catalog.
pub async fn download_song<S, T>(
    song_number: i32,
    source: &S,
    target: &T,
) -> Result<SongSlot, DownloadError>
where
    S: SongSource,
    T: SaveTarget,
{
    let slot =
        SongSlot::from_number(song_number).ok_or(DownloadError::InvalidSong(song_number))?;
    let descriptor = slot.descriptor();
    let started_at = Utc::now();

    tracing::info!("Fetching song data from: {}", descriptor.url);
    let bytes = source.fetch(descriptor.url).await?;
    tracing::info!("Received {} bytes for {}", bytes.len(), descriptor.file_name);

    target.save(&bytes, descriptor.file_name)?;
    log_perf(
        "download_song",
        started_at,
        &format!("slot={} bytes={}", slot.number(), bytes.len()),
    );
    Ok(descriptor.slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeSource {
        fail_with: Option<DownloadError>,
        calls: RefCell<Vec<String>>,
    }

    impl SongSource for FakeSource {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>, DownloadError> {
            self.calls.borrow_mut().push(url.to_string());
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(vec![0xFF, 0xFB, 0x90]),
            }
        }
    }

    #[derive(Default)]
    struct RecordingTarget {
        saved: RefCell<Vec<(String, usize)>>,
        fail: Cell<bool>,
    }

    impl SaveTarget for RecordingTarget {
        fn save(&self, bytes: &[u8], file_name: &str) -> Result<(), DownloadError> {
            if self.fail.get() {
                return Err(DownloadError::Save {
                    file_name: file_name.to_string(),
                    reason: "denied".to_string(),
                });
            }
            self.saved
                .borrow_mut()
                .push((file_name.to_string(), bytes.len()));
            Ok(())
        }
    }

    async fn run(
        number: i32,
        source: &FakeSource,
        target: &RecordingTarget,
        state: &mut DownloadState,
    ) -> Result<SongSlot, DownloadError> {
        let result = download_song(number, source, target).await;
        if let Ok(slot) = result {
            state.mark_downloaded(slot);
        }
        result
    }

    #[tokio::test]
    async fn successful_download_saves_once_and_flips_slot() {
        let source = FakeSource::default();
        let target = RecordingTarget::default();
        let mut state = DownloadState::default();
        assert_eq!(state.button_label(SongSlot::One), "Download Song 1");

        let slot = run(1, &source, &target, &mut state).await.unwrap();

        assert_eq!(slot, SongSlot::One);
        assert_eq!(
            source.calls.borrow().as_slice(),
            ["https://www.rougue.com/music/sample.mp3"]
        );
        assert_eq!(
            target.saved.borrow().as_slice(),
            [("song1_sample.mp3".to_string(), 3)]
        );
        assert!(state.is_downloaded(SongSlot::One));
        assert!(!state.is_downloaded(SongSlot::Two));
        assert_eq!(state.button_label(SongSlot::One), "Song 1 Downloaded");
    }

    #[tokio::test]
    async fn failed_fetch_leaves_slot_untouched() {
        let source = FakeSource {
            fail_with: Some(DownloadError::Status(404)),
            ..FakeSource::default()
        };
        let target = RecordingTarget::default();
        let mut state = DownloadState::default();

        let err = run(2, &source, &target, &mut state).await.unwrap_err();

        assert_eq!(err, DownloadError::Status(404));
        assert!(target.saved.borrow().is_empty());
        assert!(!state.is_downloaded(SongSlot::Two));
        assert_eq!(state.button_label(SongSlot::Two), "Download Song 2");
    }

    #[tokio::test]
    async fn network_error_leaves_slot_untouched() {
        let source = FakeSource {
            fail_with: Some(DownloadError::Network("connection reset".to_string())),
            ..FakeSource::default()
        };
        let target = RecordingTarget::default();
        let mut state = DownloadState::default();

        assert!(run(2, &source, &target, &mut state).await.is_err());
        assert_eq!(state, DownloadState::default());
    }

    #[tokio::test]
    async fn invalid_number_never_touches_the_network() {
        let source = FakeSource::default();
        let target = RecordingTarget::default();
        let mut state = DownloadState::default();

        let err = run(3, &source, &target, &mut state).await.unwrap_err();

        assert_eq!(err, DownloadError::InvalidSong(3));
        assert_eq!(err.to_string(), "Invalid song number: 3");
        assert!(source.calls.borrow().is_empty());
        assert!(target.saved.borrow().is_empty());
        assert_eq!(state, DownloadState::default());
    }

    #[tokio::test]
    async fn failed_save_leaves_slot_untouched() {
        let source = FakeSource::default();
        let target = RecordingTarget::default();
        target.fail.set(true);
        let mut state = DownloadState::default();

        let err = run(1, &source, &target, &mut state).await.unwrap_err();

        assert!(matches!(err, DownloadError::Save { .. }));
        assert!(!state.is_downloaded(SongSlot::One));
    }

    #[tokio::test]
    async fn slots_complete_independently() {
        let source = FakeSource::default();
        let target = RecordingTarget::default();
        let mut state = DownloadState::default();

        let (first, second) = tokio::join!(
            download_song(2, &source, &target),
            download_song(1, &source, &target)
        );
        state.mark_downloaded(first.unwrap());
        state.mark_downloaded(second.unwrap());

        assert!(state.is_downloaded(SongSlot::One));
        assert!(state.is_downloaded(SongSlot::Two));
        assert_eq!(target.saved.borrow().len(), 2);
    }

    #[test]
    fn refresh_resets_both_slots_and_is_idempotent() {
        let mut state = DownloadState::default();
        state.mark_downloaded(SongSlot::One);
        state.mark_downloaded(SongSlot::Two);

        state.reset();
        assert_eq!(state, DownloadState::default());
        assert_eq!(state.button_label(SongSlot::Two), "Download Song 2");

        state.reset();
        assert_eq!(state, DownloadState::default());
    }
}
