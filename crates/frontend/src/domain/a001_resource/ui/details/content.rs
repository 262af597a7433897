//! Rendering of schema-tagged tab content
//!
//! A tab descriptor carries a type tag and a JSON payload. The tag picks how
//! the payload is shown: scalars as text, arrays as one block per element,
//! objects as labelled blocks. Unknown tags render nothing and the caller
//! drops the tab.

use contracts::domain::a001_resource::{EffectiveType, TabDescriptor};
use leptos::prelude::*;
use serde_json::Value;

/// Display form of a tab descriptor's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedContent {
    Text(String),
    Lines(Vec<String>),
    Fields(Vec<(String, String)>),
}

/// Map a tab descriptor to its display form.
///
/// Returns `None` for an unknown type tag, for missing or `null` content,
/// and for `array`/`object` tags whose payload has another JSON shape.
pub fn render_content(tab: &TabDescriptor) -> Option<RenderedContent> {
    let content = match &tab.content {
        None | Some(Value::Null) => return None,
        Some(content) => content,
    };

    match tab.effective_type() {
        EffectiveType::Scalar(_) => Some(RenderedContent::Text(value_text(content))),
        EffectiveType::Array => {
            let items = content.as_array()?;
            Some(RenderedContent::Lines(items.iter().map(value_text).collect()))
        }
        EffectiveType::Object => {
            let fields = content.as_object()?;
            Some(RenderedContent::Fields(
                fields
                    .iter()
                    .map(|(key, value)| (key.clone(), value_text(value)))
                    .collect(),
            ))
        }
        EffectiveType::Unknown(tag) => {
            log::debug!("tab '{}' has unsupported type '{}', skipped", tab.name, tag);
            None
        }
    }
}

/// Text form of a JSON value; strings lose their quotes.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Tab title from a descriptor name: `max_retry_count` -> `Max Retry Count`.
pub fn tab_title(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn ContentView(content: RenderedContent) -> impl IntoView {
    match content {
        RenderedContent::Text(text) => view! {
            <div class="tab-content__text">{text}</div>
        }
        .into_any(),
        RenderedContent::Lines(lines) => view! {
            <div class="tab-content__lines">
                {lines
                    .into_iter()
                    .map(|line| view! { <div class="tab-content__line">{line}</div> })
                    .collect_view()}
            </div>
        }
        .into_any(),
        RenderedContent::Fields(fields) => view! {
            <div class="tab-content__fields">
                {fields
                    .into_iter()
                    .map(|(key, value)| {
                        view! {
                            <div class="tab-content__field">
                                <div class="tab-content__label">{key}</div>
                                <div class="tab-content__value">{value}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}
