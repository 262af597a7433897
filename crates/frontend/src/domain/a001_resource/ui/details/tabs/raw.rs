//! Raw tab - the resource record as received

use crate::shared::json_viewer::JsonViewer;
use contracts::domain::a001_resource::Resource;
use leptos::prelude::*;

#[component]
pub fn RawTab(#[prop(into)] resource: Signal<Resource>) -> impl IntoView {
    let json = Signal::derive(move || {
        resource.with(|r| {
            serde_json::to_string_pretty(r).unwrap_or_else(|e| format!("serialization error: {}", e))
        })
    });
    let file_name = Signal::derive(move || {
        resource.with(|r| format!("{}-{}.json", r.id, r.resource_version))
    });

    view! { <JsonViewer json_content=json file_name=file_name title="Raw resource".to_string() /> }
}
