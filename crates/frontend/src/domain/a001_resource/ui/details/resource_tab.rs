//! Tabbed view of a resource
//!
//! - keeps the selected tab in sync with the browser address
//! - fetches example sources whenever the example list changes
//! - composes fixed, required and optional tabs and routes each body to its viewer

use super::content::ContentView;
use super::layout::{compose_tabs, TabBody, TabLayout};
use super::model::ExampleEntry;
use super::navigation::{page_segment, resolve_selected};
use super::tabs::{
    ChangelogTab, ExampleTab, OptionalTab, ParametersTab, RawTab, ReadmeTab, UsageTab, VersionsTab,
};
use super::view_model::ResourceTabVm;
use crate::shared::icons::icon;
use contracts::domain::a001_resource::{CodeExample, Resource, TabDescriptor};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

#[component]
pub fn ResourceTab(
    #[prop(into)] resource: Signal<Resource>,
    #[prop(into)] required_tabs: Signal<Vec<TabDescriptor>>,
    #[prop(into)] optional_tabs: Signal<Vec<TabDescriptor>>,
) -> impl IntoView {
    let vm = ResourceTabVm::new();
    let params = use_params_map();
    let navigate = StoredValue::new_local(use_navigate());

    // Address -> selected tab
    Effect::new(move |_| {
        let page = params.with(|p| page_segment(p.get("page").as_deref()));
        vm.on_address(page);
    });

    // Example sources follow the example list, not the whole record
    Effect::new(move |previous: Option<Vec<CodeExample>>| {
        let examples = resource.with(|r| r.code_examples().to_vec());
        if previous.as_ref() != Some(&examples) {
            vm.load_examples(examples.clone());
        }
        examples
    });

    let layout = Memo::new(move |_| {
        resource.with(|r| {
            vm.examples.with(|examples| {
                required_tabs.with(|required| {
                    optional_tabs.with(|optional| compose_tabs(r, examples, required, optional))
                })
            })
        })
    });

    let is_loading = Memo::new(move |_| layout.with(|l| matches!(l, TabLayout::Loading)));

    let active = Memo::new(move |_| {
        let selected = vm.selected.get();
        layout.with(|l| resolve_selected(&selected, &l.keys()).to_string())
    });

    let on_select = Callback::new(move |tab: String| {
        let snapshot = resource.get_untracked();
        navigate.with_value(|navigate| vm.select_tab(&tab, &snapshot, navigate));
    });

    view! {
        {move || {
            if is_loading.get() {
                view! {
                    <div class="tabs tabs--placeholder">
                        <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-4xl); justify-content: center;">
                            <Spinner />
                            <span>"Loading..."</span>
                        </Flex>
                    </div>
                }
                .into_any()
            } else {
                view! {
                    <div class="tabs">
                        <ExampleStatus vm=vm />
                        <TabBar layout=layout active=active on_select=on_select />
                        <div style="padding-top: var(--spacing-lg);">
                            <TabContent vm=vm layout=layout active=active resource=resource />
                        </div>
                    </div>
                }
                .into_any()
            }
        }}
    }
}

/// Progress of the example fetch and the examples that could not be fetched
#[component]
fn ExampleStatus(vm: ResourceTabVm) -> impl IntoView {
    view! {
        <Show when=move || vm.examples_loading.get()>
            <Flex gap=FlexGap::Small align=FlexAlign::Center style="margin-bottom: var(--spacing-md);">
                <Spinner size=SpinnerSize::Small />
                <span>"Loading examples..."</span>
            </Flex>
        </Show>
        <Show when=move || vm.example_failures.with(|f| !f.is_empty())>
            <div class="warning-box" style="margin-bottom: var(--spacing-md);">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">
                    "Some examples could not be loaded: "
                    {move || {
                        vm.example_failures.with(|failures| {
                            failures
                                .iter()
                                .map(|f| format!("{} ({})", f.url, f.error))
                                .collect::<Vec<_>>()
                                .join(", ")
                        })
                    }}
                </span>
            </div>
        </Show>
    }
}

/// Tab bar using THAW buttons
#[component]
fn TabBar(layout: Memo<TabLayout>, active: Memo<String>, on_select: Callback<String>) -> impl IntoView {
    let headers = Memo::new(move |_| {
        layout.with(|l| match l {
            TabLayout::Tabs(tabs) => tabs
                .iter()
                .map(|t| (t.key.clone(), t.title.clone()))
                .collect::<Vec<_>>(),
            TabLayout::Loading => Vec::new(),
        })
    });

    view! {
        <Flex
            gap=FlexGap::Small
            align=FlexAlign::Center
            style="margin-bottom: var(--spacing-md); padding: var(--spacing-sm); background: var(--color-bg-secondary); border-radius: var(--radius-lg); border: 1px solid var(--color-border); flex-wrap: wrap;"
        >
            {move || {
                headers
                    .get()
                    .into_iter()
                    .map(|(key, title)| {
                        let key_for_active = key.clone();
                        let key_for_click = key.clone();
                        view! {
                            <Button
                                appearance=Signal::derive(move || {
                                    if active.get() == key_for_active {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Subtle
                                    }
                                })
                                size=ButtonSize::Small
                                on_click=move |_| on_select.run(key_for_click.clone())
                            >
                                <span class="tab-icon">{icon(&key)}</span>
                                {title}
                            </Button>
                        }
                    })
                    .collect_view()
            }}
        </Flex>
    }
}

/// Body of the active tab
#[component]
fn TabContent(
    vm: ResourceTabVm,
    layout: Memo<TabLayout>,
    active: Memo<String>,
    resource: Signal<Resource>,
) -> impl IntoView {
    // Only a change of the active body re-creates the viewer
    let active_body = Memo::new(move |_| {
        let key = active.get();
        layout.with(|l| match l {
            TabLayout::Tabs(tabs) => tabs.iter().find(|t| t.key == key).map(|t| t.body.clone()),
            TabLayout::Loading => None,
        })
    });

    // Viewers re-run only when their own field changes
    let source_url = Memo::new(move |_| resource.with(|r| r.source_url.clone()));
    let id = Memo::new(move |_| resource.with(|r| r.id.clone()));
    let database = Memo::new(move |_| resource.with(|r| r.database.clone()));
    let usage = Memo::new(move |_| resource.with(|r| r.example_usage.clone()));
    let params = Memo::new(move |_| resource.with(|r| r.arguments.clone().unwrap_or_default()));
    let examples: Signal<Vec<ExampleEntry>> = vm.examples.into();

    view! {
        {move || match active_body.get() {
            Some(TabBody::Readme) => view! { <ReadmeTab source_url=source_url /> }.into_any(),
            Some(TabBody::Changelog) => view! { <ChangelogTab source_url=source_url /> }.into_any(),
            Some(TabBody::Usage) => {
                view! { <UsageTab usage=usage examples=examples id=id /> }.into_any()
            }
            Some(TabBody::Parameters) => view! { <ParametersTab params=params /> }.into_any(),
            Some(TabBody::Example) => view! { <ExampleTab examples=examples /> }.into_any(),
            Some(TabBody::Versions) => {
                view! { <VersionsTab id=id database=database /> }.into_any()
            }
            Some(TabBody::Dynamic(content)) => view! { <ContentView content=content /> }.into_any(),
            Some(TabBody::Optional(panes)) => view! { <OptionalTab panes=panes /> }.into_any(),
            Some(TabBody::Raw) => view! { <RawTab resource=resource /> }.into_any(),
            None => ().into_any(),
        }}
    }
}
