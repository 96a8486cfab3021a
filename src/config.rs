//! Static page configuration and the fixed song catalog.

use crate::api::{SongDescriptor, SongSlot};

pub const PAGE_TITLE: &str = "Page 2: Lyrics & Songs";
pub const LYRICS_PLACEHOLDER: &str = "Loading lyrics...";
pub const SUSPENSE_FALLBACK: &str = "Loading...";

pub static SONG_CATALOG: [SongDescriptor; 2] = [
    SongDescriptor {
        slot: SongSlot::One,
        url: "https://www.rougue.com/music/sample.mp3",
        file_name: "song1_sample.mp3",
    },
    SongDescriptor {
        slot: SongSlot::Two,
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-2.mp3",
        file_name: "song2_sample.mp3",
    },
];
