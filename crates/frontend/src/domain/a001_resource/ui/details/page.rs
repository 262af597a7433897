use super::resource_tab::ResourceTab;
use super::view_model::{shows_tabs, ResourcePageVm};
use contracts::domain::a001_resource::ResourceQuery;
use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};
use thaw::*;

/// Resource page: header and the tabbed resource view
#[component]
pub fn ResourcePage() -> impl IntoView {
    let vm = ResourcePageVm::new();
    let params = use_params_map();
    let query = use_query_map();

    Effect::new(move |_| {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        if id.is_empty() {
            return;
        }
        let resource_query = query.with(|q| ResourceQuery {
            database: q.get("database").filter(|s| !s.is_empty()),
            version: q.get("version").filter(|s| !s.is_empty()),
        });
        vm.load(id, resource_query);
    });

    let resource = vm.resource();

    view! {
        <div class="page page--detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h2>
                        {move || {
                            let id = resource.with(|r| r.id.clone());
                            if id.is_empty() {
                                params.with(|p| p.get("id")).unwrap_or_default()
                            } else {
                                id
                            }
                        }}
                    </h2>
                    <Show when=move || !resource.with(|r| r.is_empty())>
                        <Flex gap=FlexGap::Small align=FlexAlign::Center>
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                                {move || resource.with(|r| r.database.clone())}
                            </Badge>
                            <Badge appearance=BadgeAppearance::Outline>
                                {move || resource.with(|r| format!("v{}", r.resource_version))}
                            </Badge>
                        </Flex>
                    </Show>
                </div>
                <div class="page__header-right">
                    <Show when=move || vm.loading.get()>
                        <Spinner size=SpinnerSize::Small />
                    </Show>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    vm.error
                        .get()
                        .map(|e| {
                            view! {
                                <div class="warning-box" style="margin-bottom: var(--spacing-md);">
                                    <span class="warning-box__icon">"⚠"</span>
                                    <span class="warning-box__text">{e}</span>
                                </div>
                            }
                        })
                }}
                <Show when=move || vm.error.with(|e| shows_tabs(e.as_deref()))>
                    <ResourceTab
                        resource=resource
                        required_tabs=vm.required_tabs()
                        optional_tabs=vm.optional_tabs()
                    />
                </Show>
            </div>
        </div>
    }
}
