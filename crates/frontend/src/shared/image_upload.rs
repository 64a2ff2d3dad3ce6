//! Image ingestion for the property form.
//!
//! Each picked file is decoded on its own: the bytes are read through
//! `File::array_buffer`, base64-wrapped into a self-contained `data:` URL
//! and dispatched to the draft owner as soon as that decode lands. With
//! several files in flight the completion order is not the selection order;
//! the draft appends in whatever order the decodes finish.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{DragEvent, File, FileList, HtmlInputElement};

use crate::shared::icons::icon;

/// MIME gate: only `image/*` files are ingested.
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Read one file into an embeddable data URL.
pub async fn file_to_data_url(file: File) -> Result<String, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("falha ao ler {}: {:?}", file.name(), e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(to_data_url(&file.type_(), &bytes))
}

fn ingest_files(files: FileList, on_loaded: Callback<String>) {
    for i in 0..files.length() {
        let Some(file) = files.get(i) else { continue };
        if !is_image_mime(&file.type_()) {
            log::debug!("skipping non-image file {}", file.name());
            continue;
        }
        // Independent decode per file; a failed one is dropped without
        // touching the draft.
        leptos::task::spawn_local(async move {
            match file_to_data_url(file).await {
                Ok(url) => on_loaded.run(url),
                Err(e) => log::warn!("image decode failed: {e}"),
            }
        });
    }
}

/// Click-to-pick / drag-and-drop surface. Emits one `on_loaded` per decoded
/// image; removal and ordering are the draft owner's business.
#[component]
pub fn ImageDropZone(on_loaded: Callback<String>) -> impl IntoView {
    let handle_change = move |ev: leptos::ev::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok());
        if let Some(input) = input {
            if let Some(files) = input.files() {
                ingest_files(files, on_loaded);
            }
            // Allow re-picking the same file.
            input.set_value("");
        }
    };

    let handle_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            ingest_files(files, on_loaded);
        }
    };

    let swallow_drag = |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    };

    view! {
        <label
            class="upload-zone"
            on:dragover=swallow_drag
            on:dragenter=swallow_drag
            on:drop=handle_drop
        >
            {icon("upload-cloud")}
            <p class="upload-zone__hint">
                <span class="upload-zone__hint-strong">"Clique para enviar"</span>
                " ou arraste e solte"
            </p>
            <p class="upload-zone__formats">"PNG, JPG, WEBP, etc."</p>
            <input
                type="file"
                multiple
                accept="image/*"
                class="upload-zone__input"
                on:change=handle_change
            />
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_gate_accepts_only_images() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/webp"));
        assert!(!is_image_mime("application/pdf"));
        assert!(!is_image_mime("text/html"));
        assert!(!is_image_mime(""));
    }

    #[test]
    fn data_url_embeds_mime_and_base64_payload() {
        let url = to_data_url("image/png", b"abc");
        assert_eq!(url, "data:image/png;base64,YWJj");
    }
}
