use leptos::*;

use crate::analytics::{comments_to_csv, export_file_name};
use crate::models::Comment;

#[component]
pub fn ExportButton(comments: Memo<Vec<Comment>>) -> impl IntoView {
    let on_export = move |_| {
        let csv = comments.with(|c| comments_to_csv(c));
        let file_name = export_file_name(chrono::Utc::now().date_naive());
        tracing::info!(%file_name, rows = comments.with(Vec::len), "exporting comments");
        download_csv(&csv, &file_name);
    };

    view! {
        <button
            class="btn btn-primary export-button"
            on:click=on_export
            disabled=move || comments.with(Vec::is_empty)
        >
            <i class="ion-android-download"></i>
            " Export CSV"
        </button>
    }
}

#[cfg(feature = "hydrate")]
fn download_csv(csv: &str, file_name: &str) {
    if let Err(err) = browser::save_file(csv, file_name, crate::analytics::CSV_MIME_TYPE) {
        tracing::error!("CSV download failed: {err:?}");
    }
}

#[cfg(not(feature = "hydrate"))]
fn download_csv(_csv: &str, file_name: &str) {
    tracing::warn!(%file_name, "CSV download requested outside the browser");
}

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    /// Hands `contents` to the browser as a file download via a temporary
    /// object URL.
    pub fn save_file(contents: &str, file_name: &str, mime_type: &str) -> Result<(), JsValue> {
        let parts = js_sys::Array::of1(&JsValue::from_str(contents));
        let mut options = BlobPropertyBag::new();
        options.type_(mime_type);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
        let href = Url::create_object_url_with_blob(&blob)?;

        let document = leptos::document();
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        let link = document
            .create_element("a")?
            .dyn_into::<HtmlAnchorElement>()?;
        link.set_href(&href);
        link.set_download(file_name);

        body.append_child(&link)?;
        link.click();
        body.remove_child(&link)?;
        Url::revoke_object_url(&href)
    }
}
