//! Usage tab - how to call the resource

use super::super::model::ExampleEntry;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn UsageTab(
    #[prop(into)] usage: Signal<Option<String>>,
    #[prop(into)] examples: Signal<Vec<ExampleEntry>>,
    #[prop(into)] id: Signal<String>,
) -> impl IntoView {
    // A tested example is the most trustworthy usage sample
    let tested_example = Signal::derive(move || {
        examples.with(|entries| entries.iter().find(|e| e.tested).cloned())
    });

    view! {
        <Card>
            <h4 class="details-section__title">{move || format!("Using {}", id.get())}</h4>
            {move || match usage.get() {
                Some(snippet) => view! { <pre class="code-block">{snippet}</pre> }.into_any(),
                None => view! {
                    <div style="color: var(--color-text-secondary);">"No usage reference provided"</div>
                }.into_any(),
            }}
        </Card>
        <Show when=move || tested_example.with(Option::is_some)>
            <Card>
                <h4 class="details-section__title">
                    "Tested example "
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"tested"</Badge>
                </h4>
                {move || tested_example.get().map(|entry| view! {
                    <a href=entry.url.clone() target="_blank" rel="noopener">{entry.url.clone()}</a>
                    <pre class="code-block">{entry.content}</pre>
                })}
            </Card>
        </Show>
    }
}
