// Browser "save file" via a transient object URL and a synthetic anchor click.
use js_sys::{Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::{DownloadError, SaveTarget};

const SONG_MIME_TYPE: &str = "audio/mpeg";

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSaveTarget;

/// Object URL revoked when dropped, whichever way the save exits.
struct ObjectUrl(String);

impl ObjectUrl {
    fn for_blob(blob: &Blob) -> Result<Self, JsValue> {
        Url::create_object_url_with_blob(blob).map(Self)
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.0);
    }
}

/// Hidden anchor attached to `<body>`; detached again on drop.
struct AttachedAnchor(HtmlAnchorElement);

impl Drop for AttachedAnchor {
    fn drop(&mut self) {
        self.0.remove();
    }
}

fn song_blob(bytes: &[u8]) -> Result<Blob, JsValue> {
    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes).into());
    let options = BlobPropertyBag::new();
    options.set_type(SONG_MIME_TYPE);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
}

fn trigger_save(bytes: &[u8], file_name: &str) -> Result<(), JsValue> {
    let document = window()
        .and_then(|win| win.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let blob = song_blob(bytes)?;
    let url = ObjectUrl::for_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(url.as_str());
    anchor.set_download(file_name);
    anchor.set_attribute("style", "display: none")?;
    body.append_child(&anchor)?;
    let anchor = AttachedAnchor(anchor);

    anchor.0.click();
    Ok(())
}

impl SaveTarget for BrowserSaveTarget {
    fn save(&self, bytes: &[u8], file_name: &str) -> Result<(), DownloadError> {
        trigger_save(bytes, file_name).map_err(|err| DownloadError::Save {
            file_name: file_name.to_string(),
            reason: format!("{err:?}"),
        })
    }
}
