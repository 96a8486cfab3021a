use dioxus::prelude::*;

use crate::api::{next_payload, HttpSongSource, PageQueryPayload, SongSlot};
use crate::components::{view_label, AppView};
use crate::config::{LYRICS_PLACEHOLDER, PAGE_TITLE, SUSPENSE_FALLBACK};
use crate::downloads::{download_song, platform_save_target, DownloadState};

/// Route entry for `/songs?data=...`.
#[component]
pub fn Songs(data: String) -> Element {
    let route = use_route::<AppView>();

    rsx! {
        document::Title { "{view_label(&route)}" }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "page-loading", "{SUSPENSE_FALLBACK}" }
            },
            SongsPage { data }
        }
    }
}

#[component]
fn SongsPage(data: String) -> Element {
    let mut payload = use_signal(|| None::<PageQueryPayload>);
    let mut download_state = use_signal(DownloadState::default);

    // Re-decode whenever the raw query value changes.
    use_effect(use_reactive!(|data| {
        let next = next_payload(payload.peek().clone(), &data);
        if *payload.peek() != next {
            payload.set(next);
        }
    }));

    let lyrics = payload
        .read()
        .as_ref()
        .map(|payload| payload.lyrics.clone())
        .unwrap_or_else(|| LYRICS_PLACEHOLDER.to_string());

    let on_refresh = move |_| {
        download_state.with_mut(|state| state.reset());
    };

    rsx! {
        div { class: "songs-page",
            h1 { class: "page-title", "{PAGE_TITLE}" }

            section { class: "songs-section",
                // Both blocks read the same field.
                LyricsBlock { title: "Lyrics 1", text: lyrics.clone() }
                LyricsBlock { title: "Lyrics 2", text: lyrics }
            }

            section { class: "songs-section",
                for slot in SongSlot::ALL {
                    div { key: "{slot.number()}", class: "song-entry",
                        h3 { class: "song-title", "Song {slot.number()}" }
                        button {
                            class: "download-button",
                            onclick: move |_| start_download(i32::from(slot.number()), download_state),
                            "{download_state.read().button_label(slot)}"
                        }
                    }
                }
            }

            button { class: "refresh-button", onclick: on_refresh, "Refresh" }
        }
    }
}

fn start_download(song_number: i32, mut download_state: Signal<DownloadState>) {
    spawn(async move {
        let target = platform_save_target();
        match download_song(song_number, &HttpSongSource, &target).await {
            Ok(slot) => download_state.with_mut(|state| state.mark_downloaded(slot)),
            Err(err) => tracing::error!("Error downloading the song: {err}"),
        }
    });
}

#[component]
fn LyricsBlock(title: &'static str, text: String) -> Element {
    rsx! {
        div { class: "lyrics-block",
            h2 { class: "lyrics-title", "{title}" }
            p { class: "lyrics-text", "{text}" }
        }
    }
}
