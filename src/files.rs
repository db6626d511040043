//! Local File Reading
//!
//! Turns a picked file into a data URL for the avatar and attachment
//! fields. The backend stores the URL opaquely, so the only client-side
//! rule is the size cap.

use js_sys::Promise;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader};

/// Upload cap, matches the backend's request body limit
pub const MAX_UPLOAD_BYTES: u64 = 2 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileError {
    #[error("file is {size_kb} KB, the limit is {limit_kb} KB")]
    TooLarge { size_kb: u32, limit_kb: u32 },
    #[error("could not read the selected file")]
    Unreadable,
}

/// Reads a file into a `data:` URL string
pub async fn read_as_data_url(file: &File) -> Result<String, FileError> {
    if file.size() > MAX_UPLOAD_BYTES as f64 {
        return Err(FileError::TooLarge {
            size_kb: (file.size() / 1024.0).ceil() as u32,
            limit_kb: (MAX_UPLOAD_BYTES / 1024) as u32,
        });
    }

    let reader = FileReader::new().map_err(|_| FileError::Unreadable)?;
    let loaded = {
        let reader = reader.clone();
        Promise::new(&mut move |resolve, reject| {
            let onload = Closure::once_into_js(move |_: web_sys::Event| {
                let _ = resolve.call0(&JsValue::NULL);
            });
            reader.set_onload(Some(onload.unchecked_ref()));
            let onerror = Closure::once_into_js(move |_: web_sys::Event| {
                let _ = reject.call0(&JsValue::NULL);
            });
            reader.set_onerror(Some(onerror.unchecked_ref()));
        })
    };
    reader.read_as_data_url(file).map_err(|_| FileError::Unreadable)?;
    JsFuture::from(loaded).await.map_err(|_| FileError::Unreadable)?;

    reader
        .result()
        .ok()
        .and_then(|value| value.as_string())
        .ok_or(FileError::Unreadable)
}
