//! Versions tab - published versions of the resource in its database

use super::super::model::fetch_versions;
use contracts::domain::a001_resource::ResourceVersion;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn VersionsTab(
    #[prop(into)] id: Signal<String>,
    #[prop(into)] database: Signal<String>,
) -> impl IntoView {
    let versions = RwSignal::new(Vec::<ResourceVersion>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let requested = StoredValue::new(None::<VersionsRequest>);

    Effect::new(move |_| {
        let Some(request) = VersionsRequest::new(id.get(), database.get()) else {
            return;
        };
        requested.set_value(Some(request.clone()));
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let result = fetch_versions(&request.id, &request.database).await;
            // Another resource may have been selected meanwhile
            if !request.is_current(requested.try_get_value().flatten().as_ref()) {
                return;
            }
            match result {
                Ok(list) => {
                    versions.try_set(list);
                }
                Err(e) => {
                    log::warn!("versions of '{}' failed to load: {}", request.id, e);
                    error.try_set(Some(e));
                }
            }
            loading.try_set(false);
        });
    });

    view! {
        <h3 class="font-weight-light versions-table-title">
            {move || format!("Versions of {}", id.get())}
        </h3>
        {move || {
            if loading.get() {
                view! { <Spinner size=SpinnerSize::Small /> }.into_any()
            } else if let Some(err) = error.get() {
                view! {
                    <div class="warning-box">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{err}</span>
                    </div>
                }
                .into_any()
            } else {
                view! {
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=120.0>"Version"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Database"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Published"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {versions
                                .get()
                                .into_iter()
                                .map(|v| {
                                    let published = v
                                        .published_at
                                        .map(|at| at.with_timezone(&chrono::Local).format("%Y-%m-%d").to_string())
                                        .unwrap_or_else(|| "-".to_string());
                                    view! {
                                        <TableRow>
                                            <TableCell>{v.version}</TableCell>
                                            <TableCell>{v.database}</TableCell>
                                            <TableCell>{published}</TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()}
                        </TableBody>
                    </Table>
                }
                .into_any()
            }
        }}
    }
}

/// Id and database a version list was requested for.
#[derive(Debug, Clone, PartialEq, Eq)]
struct VersionsRequest {
    id: String,
    database: String,
}

impl VersionsRequest {
    /// No request is made before the resource id is known.
    fn new(id: String, database: String) -> Option<Self> {
        (!id.is_empty()).then_some(Self { id, database })
    }

    fn is_current(&self, latest: Option<&VersionsRequest>) -> bool {
        latest == Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_request_without_id() {
        assert_eq!(VersionsRequest::new(String::new(), "pg".to_string()), None);
        assert!(VersionsRequest::new("42".to_string(), String::new()).is_some());
    }

    #[test]
    fn test_only_latest_request_is_current() {
        let first = VersionsRequest::new("42".to_string(), "pg".to_string()).unwrap();
        let second = VersionsRequest::new("42".to_string(), "mysql".to_string()).unwrap();
        assert!(!first.is_current(Some(&second)));
        assert!(second.is_current(Some(&second)));
        assert!(!first.is_current(None));
    }
}
