//! Readme and changelog tabs - markdown files next to the resource source

use super::super::model::{document_url, fetch_text};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ReadmeTab(#[prop(into)] source_url: Signal<String>) -> impl IntoView {
    view! { <RemoteDocument source_url=source_url file="README.md" /> }
}

#[component]
pub fn ChangelogTab(#[prop(into)] source_url: Signal<String>) -> impl IntoView {
    view! { <RemoteDocument source_url=source_url file="CHANGELOG.md" /> }
}

/// Text of `file` fetched from the directory `source_url` points to.
#[component]
fn RemoteDocument(source_url: Signal<String>, file: &'static str) -> impl IntoView {
    let text = RwSignal::new(None::<Result<String, String>>);
    let requested = StoredValue::new(String::new());

    Effect::new(move |_| {
        let source_url = source_url.get();
        if source_url.is_empty() {
            text.set(Some(Err("No source repository".to_string())));
            return;
        }

        let url = document_url(&source_url, file);
        requested.set_value(url.clone());
        text.set(None);
        spawn_local(async move {
            let result = fetch_text(&url).await;
            // A newer source URL may have been requested meanwhile
            if requested.try_get_value().as_deref() == Some(url.as_str()) {
                text.try_set(Some(result));
            }
        });
    });

    view! {
        {move || match text.get() {
            None => view! {
                <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-xl);">
                    <Spinner />
                    <span>{format!("Loading {}...", file)}</span>
                </Flex>
            }.into_any(),
            Some(Ok(content)) => view! {
                <pre class="document-view">{content}</pre>
            }.into_any(),
            Some(Err(err)) => view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{format!("{} unavailable: {}", file, err)}</span>
                </div>
            }.into_any(),
        }}
    }
}
