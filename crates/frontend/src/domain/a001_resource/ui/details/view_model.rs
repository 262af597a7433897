//! ViewModels for the resource page
//!
//! `ResourcePageVm` loads the resource record, `ResourceTabVm` owns the
//! selected tab and the fetched example sources.

use super::model::{
    self, fetch_examples, ExampleBatch, ExampleEntry, ExampleFailure, HttpExampleSource,
};
use super::navigation::{build_address, parse_query, Query, TabNavigator, DEFAULT_TAB};
use contracts::domain::a001_resource::{
    CodeExample, Resource, ResourceDetails, ResourceQuery, TabDescriptor,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;

// ============================================================================
// Page
// ============================================================================

#[derive(Clone, Copy)]
pub struct ResourcePageVm {
    pub details: RwSignal<Option<ResourceDetails>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    generation: StoredValue<Generation>,
}

impl ResourcePageVm {
    pub fn new() -> Self {
        Self {
            details: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            generation: StoredValue::new(Generation::default()),
        }
    }

    /// Resource snapshot; empty until the record is loaded.
    pub fn resource(&self) -> Signal<Resource> {
        let details = self.details;
        Signal::derive(move || {
            details.with(|d| d.as_ref().map(|d| d.resource.clone()).unwrap_or_default())
        })
    }

    pub fn required_tabs(&self) -> Signal<Vec<TabDescriptor>> {
        let details = self.details;
        Signal::derive(move || {
            details.with(|d| d.as_ref().map(|d| d.required_tabs.clone()).unwrap_or_default())
        })
    }

    pub fn optional_tabs(&self) -> Signal<Vec<TabDescriptor>> {
        let details = self.details;
        Signal::derive(move || {
            details.with(|d| d.as_ref().map(|d| d.optional_tabs.clone()).unwrap_or_default())
        })
    }

    /// Load the record for `id`, unless the one on screen already matches.
    pub fn load(&self, id: String, query: ResourceQuery) {
        let already_loaded = self.details.with_untracked(|d| {
            d.as_ref()
                .map(|d| is_loaded(&d.resource, &id, &query))
                .unwrap_or(false)
        });
        if already_loaded {
            return;
        }

        let mut generation = 0;
        self.generation.update_value(|g| generation = g.begin());
        self.loading.set(true);
        self.error.set(None);

        let vm = *self;
        spawn_local(async move {
            let result = model::fetch_details(&id, &query).await;
            if !vm.generation.try_with_value(|g| g.is_current(generation)).unwrap_or(false) {
                log::debug!("resource '{}' response superseded, dropped", id);
                return;
            }
            match result {
                Ok(details) => {
                    log::info!(
                        "resource '{}' loaded: {} required, {} optional tabs",
                        id,
                        details.required_tabs.len(),
                        details.optional_tabs.len()
                    );
                    vm.details.try_set(Some(details));
                }
                Err(e) => {
                    log::error!("resource '{}' failed to load: {}", id, e);
                    vm.details.try_set(None);
                    vm.error.try_set(Some(e));
                }
            }
            vm.loading.try_set(false);
        });
    }
}

/// True when `resource` is the record addressed by `id` and `query`.
///
/// A missing database or version in the query accepts any value.
pub fn is_loaded(resource: &Resource, id: &str, query: &ResourceQuery) -> bool {
    resource.id == id
        && query
            .database
            .as_deref()
            .map_or(true, |db| db == resource.database)
        && query
            .version
            .as_deref()
            .map_or(true, |v| v == resource.resource_version)
}

/// Tabs are only shown for a resource that loaded without error.
pub fn shows_tabs(error: Option<&str>) -> bool {
    error.is_none()
}

/// Counter telling the latest request apart from superseded ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generation {
    current: u64,
}

impl Generation {
    /// Start a request; every earlier one becomes stale.
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.current == generation
    }
}

/// How an example batch starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchStart {
    /// Nothing to fetch: commit this batch right away
    Ready(ExampleBatch),
    /// Fetch, then commit only while this generation is current
    Fetch(u64),
}

/// Begin a batch for `examples`, superseding any batch still in flight.
pub fn start_batch(generation: &mut Generation, examples: &[CodeExample]) -> BatchStart {
    let current = generation.begin();
    if examples.is_empty() {
        BatchStart::Ready(ExampleBatch::default())
    } else {
        BatchStart::Fetch(current)
    }
}

// ============================================================================
// Tabs
// ============================================================================

#[derive(Clone, Copy)]
pub struct ResourceTabVm {
    navigator: StoredValue<TabNavigator>,
    /// Selected tab as requested; may name a tab that is not rendered
    pub selected: RwSignal<String>,
    pub examples: RwSignal<Vec<ExampleEntry>>,
    pub example_failures: RwSignal<Vec<ExampleFailure>>,
    pub examples_loading: RwSignal<bool>,
    examples_generation: StoredValue<Generation>,
}

impl ResourceTabVm {
    pub fn new() -> Self {
        Self {
            navigator: StoredValue::new(TabNavigator::new()),
            selected: RwSignal::new(DEFAULT_TAB.to_string()),
            examples: RwSignal::new(Vec::new()),
            example_failures: RwSignal::new(Vec::new()),
            examples_loading: RwSignal::new(false),
            examples_generation: StoredValue::new(Generation::default()),
        }
    }

    /// The address resolver reported `page` as the current page segment.
    pub fn on_address(&self, page: Option<String>) {
        let mut applied = None;
        self.navigator.update_value(|nav| {
            if nav.address_changed(page.as_deref()) {
                applied = Some(nav.selected().to_string());
            }
        });
        if let Some(tab) = applied {
            log::debug!("tab '{}' selected from address", tab);
            self.selected.set(tab);
        }
    }

    /// The user picked `tab`: select it and replace the address in place.
    pub fn select_tab<F>(&self, tab: &str, resource: &Resource, navigate: &F)
    where
        F: Fn(&str, NavigateOptions),
    {
        let mut to_write = None;
        self.navigator
            .update_value(|nav| to_write = nav.user_selected(tab));
        let Some(tab) = to_write else {
            return;
        };
        self.selected.set(tab.clone());

        let address = build_address(resource, &tab, &current_query());
        let url = address.to_url();
        log::debug!("tab '{}' selected, address -> {}", tab, url);
        navigate(
            &url,
            NavigateOptions {
                replace: true,
                scroll: false,
                ..Default::default()
            },
        );
    }

    /// Fetch the sources of `examples` and replace the current entries.
    ///
    /// Entries are committed in one go once every example was tried. A
    /// newer call supersedes an unfinished one, whose results are dropped.
    pub fn load_examples(&self, examples: Vec<CodeExample>) {
        let mut start = BatchStart::Ready(ExampleBatch::default());
        self.examples_generation
            .update_value(|g| start = start_batch(g, &examples));

        let generation = match start {
            BatchStart::Ready(batch) => {
                self.commit(batch);
                return;
            }
            BatchStart::Fetch(generation) => generation,
        };

        self.examples_loading.set(true);
        let vm = *self;
        spawn_local(async move {
            let batch = fetch_examples(&HttpExampleSource, &examples).await;
            let current = vm
                .examples_generation
                .try_with_value(|g| g.is_current(generation))
                .unwrap_or(false);
            if !current {
                log::debug!("example batch {} superseded, dropped", generation);
                return;
            }
            log::debug!(
                "example batch {}: {} fetched, {} failed",
                generation,
                batch.entries.len(),
                batch.failures.len()
            );
            vm.commit(batch);
        });
    }

    fn commit(&self, batch: ExampleBatch) {
        self.examples.try_set(batch.entries);
        self.example_failures.try_set(batch.failures);
        self.examples_loading.try_set(false);
    }
}

/// Query of the current browser address.
fn current_query() -> Query {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .map(|search| parse_query(&search))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource() -> Resource {
        Resource {
            id: "42".to_string(),
            database: "pg".to_string(),
            resource_version: "1.2".to_string(),
            ..Default::default()
        }
    }

    fn query(database: Option<&str>, version: Option<&str>) -> ResourceQuery {
        ResourceQuery {
            database: database.map(str::to_string),
            version: version.map(str::to_string),
        }
    }

    fn example(url: &str) -> CodeExample {
        CodeExample {
            example: url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_generation_only_latest_is_current() {
        let mut generation = Generation::default();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_superseded_batch_is_not_committed() {
        let mut generation = Generation::default();
        let BatchStart::Fetch(first) = start_batch(&mut generation, &[example("a")]) else {
            panic!("expected a fetch");
        };
        let BatchStart::Fetch(second) = start_batch(&mut generation, &[example("b")]) else {
            panic!("expected a fetch");
        };

        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_empty_example_list_commits_at_once() {
        let mut generation = Generation::default();
        let BatchStart::Fetch(in_flight) = start_batch(&mut generation, &[example("a")]) else {
            panic!("expected a fetch");
        };

        assert_eq!(
            start_batch(&mut generation, &[]),
            BatchStart::Ready(ExampleBatch::default())
        );
        // the earlier fetch must not overwrite the empty state
        assert!(!generation.is_current(in_flight));
    }

    #[test]
    fn test_is_loaded_matches_id_and_given_tags() {
        assert!(is_loaded(&resource(), "42", &query(None, None)));
        assert!(is_loaded(&resource(), "42", &query(Some("pg"), Some("1.2"))));
        assert!(!is_loaded(&resource(), "43", &query(None, None)));
        assert!(!is_loaded(&resource(), "42", &query(Some("mysql"), None)));
        assert!(!is_loaded(&resource(), "42", &query(None, Some("2.0"))));
    }

    #[test]
    fn test_load_error_hides_tabs() {
        assert!(shows_tabs(None));
        assert!(!shows_tabs(Some("resource '42' not found")));
    }
}
