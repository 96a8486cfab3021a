use serde::{Deserialize, Serialize};

use crate::config::SONG_CATALOG;

/// Payload carried by the page query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQueryPayload {
    pub lyrics: String,
    #[serde(rename = "DownloadSong")]
    #[allow(dead_code)]
    pub download_song: String,
}

/// One of the two fixed download slots on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SongSlot {
    One,
    Two,
}

impl SongSlot {
    pub const ALL: [SongSlot; 2] = [SongSlot::One, SongSlot::Two];

    pub fn from_number(number: i32) -> Option<Self> {
        match number {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    pub fn index(self) -> usize {
        usize::from(self.number() - 1)
    }

    pub fn descriptor(self) -> &'static SongDescriptor {
        &SONG_CATALOG[self.index()]
    }
}

/// Where a song is fetched from and the file name it is saved under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SongDescriptor {
    pub slot: SongSlot,
    pub url: &'static str,
    pub file_name: &'static str,
}
