//! Example tab - fetched example sources

use super::super::model::ExampleEntry;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ExampleTab(#[prop(into)] examples: Signal<Vec<ExampleEntry>>) -> impl IntoView {
    view! {
        <Flex vertical=true gap=FlexGap::Medium>
            {move || {
                examples
                    .get()
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <Card>
                                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                                    <a href=entry.url.clone() target="_blank" rel="noopener">
                                        {entry.url.clone()}
                                    </a>
                                    {if entry.tested {
                                        view! {
                                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                                                "tested"
                                            </Badge>
                                        }
                                        .into_any()
                                    } else {
                                        view! {
                                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>
                                                "untested"
                                            </Badge>
                                        }
                                        .into_any()
                                    }}
                                </Flex>
                                <pre class="code-block">{entry.content}</pre>
                            </Card>
                        }
                    })
                    .collect_view()
            }}
        </Flex>
    }
}
