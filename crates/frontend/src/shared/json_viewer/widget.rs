use crate::shared::icons::icon;
use leptos::prelude::*;

/// Read-only JSON panel with copy and download actions.
#[component]
pub fn JsonViewer(
    /// Pretty-printed JSON to show
    #[prop(into)]
    json_content: Signal<String>,
    /// File name offered by the download action
    #[prop(into)]
    file_name: Signal<String>,
    #[prop(optional)] title: Option<String>,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let handle_copy = move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        let content = json_content.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            let promise = clipboard.write_text(&content);
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                log::warn!("clipboard write failed: {:?}", e);
            }
        });
        set_copied.set(true);

        // reset after 2 s
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(2000).await;
            set_copied.try_set(false);
        });
    };

    let handle_download = move |_| {
        download_text(
            &json_content.get_untracked(),
            &file_name.get_untracked(),
            "application/json",
        );
    };

    view! {
        <div class="json-viewer">
            <div class="modal-header modal-header--compact">
                <h3 class="modal-title">{title.unwrap_or_else(|| "JSON".to_string())}</h3>
                <div class="modal-header-actions">
                    <button
                        class="button button--secondary"
                        on:click=handle_copy
                        title="Copy to clipboard"
                    >
                        {move || if copied.get() {
                            view! { <>{icon("check")}{"Copied!"}</> }.into_any()
                        } else {
                            view! { <>{icon("copy")}{"Copy"}</> }.into_any()
                        }}
                    </button>
                    <button
                        class="button button--success"
                        on:click=handle_download
                        title="Download as file"
                    >
                        {icon("download")}
                        {"Download"}
                    </button>
                </div>
            </div>

            <div class="json-viewer__body">
                <pre class="json-viewer__content">{move || json_content.get()}</pre>
            </div>

            <div class="json-viewer__footer">
                {"Size: "}
                <strong>{move || format!("{} chars", json_content.with(|s| s.len()))}</strong>
                {" | "}
                {"Lines: "}
                <strong>{move || json_content.with(|s| s.lines().count())}</strong>
            </div>
        </div>
    }
}

/// Offer `content` to the browser as a file download.
fn download_text(content: &str, file_name: &str, mime: &str) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let blob_parts = js_sys::Array::new();
    blob_parts.push(&wasm_bindgen::JsValue::from_str(content));

    let blob_property_bag = web_sys::BlobPropertyBag::new();
    blob_property_bag.set_type(mime);

    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &blob_property_bag)
    else {
        log::warn!("could not create blob for {}", file_name);
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };

    if let Ok(link) = document
        .create_element("a")
        .map_err(|_| ())
        .and_then(|a| a.dyn_into::<web_sys::HtmlAnchorElement>().map_err(|_| ()))
    {
        link.set_href(&url);
        link.set_download(file_name);
        link.click();
    }

    web_sys::Url::revoke_object_url(&url).ok();
}
