//! Optional group - pill selector over the optional descriptors

use super::super::content::ContentView;
use super::super::layout::OptionalPane;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn OptionalTab(panes: Vec<OptionalPane>) -> impl IntoView {
    let active = RwSignal::new(0usize);
    let panes = StoredValue::new(panes);

    view! {
        <Flex gap=FlexGap::Small style="margin-bottom: var(--spacing-md); flex-wrap: wrap;">
            {panes
                .get_value()
                .into_iter()
                .enumerate()
                .map(|(index, pane)| {
                    view! {
                        <Button
                            shape=ButtonShape::Circular
                            size=ButtonSize::Small
                            appearance=Signal::derive(move || {
                                if active.get() == index {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Subtle
                                }
                            })
                            on_click=move |_| active.set(index)
                        >
                            {pane.label}
                        </Button>
                    }
                })
                .collect_view()}
        </Flex>
        {move || {
            let index = active.get();
            panes
                .with_value(|panes| panes.get(index).and_then(|pane| pane.content.clone()))
                .map(|content| view! { <ContentView content=content /> })
        }}
    }
}
