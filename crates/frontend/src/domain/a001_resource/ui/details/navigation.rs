//! Selected tab <-> browser address synchronisation
//!
//! `TabNavigator` owns the selected tab. Two transitions change it:
//! - the address resolver reports a page segment (`address_changed`)
//! - the user picks a tab (`user_selected`), which yields the page to write
//!
//! The navigator remembers the pages it asked for, so the address changes
//! caused by its own writes are recognised as echoes and ignored.

use contracts::domain::a001_resource::Resource;
use serde_json::{Map, Value};

pub const DEFAULT_TAB: &str = "readme";

/// Query keys owned by the route itself; never carried over.
const ROUTE_QUERY_KEYS: [&str; 2] = ["id", "page"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabNavigator {
    selected: String,
    address_ready: bool,
    /// Page segments of addresses requested but not yet observed
    pending_echoes: Vec<Option<String>>,
}

impl Default for TabNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl TabNavigator {
    pub fn new() -> Self {
        Self {
            selected: DEFAULT_TAB.to_string(),
            address_ready: false,
            pending_echoes: Vec::new(),
        }
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn is_address_ready(&self) -> bool {
        self.address_ready
    }

    /// Address -> state. Returns true when the selection was (re)applied.
    ///
    /// The first call marks the address as ready and always applies: the
    /// page segment when present, `readme` otherwise. Later calls apply only
    /// when they are not the echo of the navigator's own write.
    pub fn address_changed(&mut self, page: Option<&str>) -> bool {
        let page = page.filter(|p| !p.is_empty());

        if self.address_ready {
            let echo = self
                .pending_echoes
                .iter()
                .position(|expected| expected.as_deref() == page);
            if let Some(index) = echo {
                self.pending_echoes.drain(..=index);
                return false;
            }
        } else {
            self.address_ready = true;
        }
        self.pending_echoes.clear();

        self.selected = page.unwrap_or(DEFAULT_TAB).to_string();
        true
    }

    /// User -> state -> address. Returns the tab whose address should be
    /// written, or `None` when the tab is already selected.
    pub fn user_selected(&mut self, tab: &str) -> Option<String> {
        if tab == self.selected {
            return None;
        }
        self.selected = tab.to_string();
        self.pending_echoes.push(page_for_tab(tab).map(str::to_string));
        Some(self.selected.clone())
    }
}

/// Page path segment for a tab; `readme` lives at the bare resource path.
pub fn page_for_tab(tab: &str) -> Option<&str> {
    (tab != DEFAULT_TAB).then_some(tab)
}

/// First non-empty path segment of a route tail such as `usage/extra`.
pub fn page_segment(raw: Option<&str>) -> Option<String> {
    raw?.split('/')
        .find(|segment| !segment.is_empty())
        .map(str::to_string)
}

/// The tab to display: the selected one if it is rendered, else `readme`.
pub fn resolve_selected<'a>(selected: &'a str, rendered_keys: &[&str]) -> &'a str {
    if rendered_keys.contains(&selected) {
        selected
    } else {
        DEFAULT_TAB
    }
}

// ============================================================================
// Address
// ============================================================================

/// Query of an address: ordered keys, one value each.
pub type Query = Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub path: String,
    pub query: Query,
}

impl Address {
    pub fn to_url(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        match serde_qs::to_string(&self.query) {
            Ok(query) => format!("{}?{}", self.path, query),
            Err(e) => {
                log::warn!("query of {} not serializable: {}", self.path, e);
                self.path.clone()
            }
        }
    }
}

/// Address of `tab` for `resource`, keeping the unrelated parts of the
/// previous query.
///
/// `database` and `version` replace any previous value in place; keys the
/// previous query lacks are appended.
pub fn build_address(resource: &Resource, tab: &str, previous_query: &Query) -> Address {
    let base = format!("/resources/{}", urlencoding::encode(&resource.id));
    let path = match page_for_tab(tab) {
        Some(page) => format!("{}/{}", base, urlencoding::encode(page)),
        None => base,
    };

    let mut query: Query = previous_query
        .iter()
        .filter(|(key, _)| !ROUTE_QUERY_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    query.insert("database".to_string(), Value::String(resource.database.clone()));
    query.insert("version".to_string(), Value::String(resource.resource_version.clone()));

    Address { path, query }
}

/// Decode a `?a=1&b=2` search string. An undecodable query counts as empty.
pub fn parse_query(search: &str) -> Query {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_else(|e| {
        log::warn!("query '{}' ignored: {}", search, e);
        Query::new()
    })
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

    fn query(items: &[(&str, &str)]) -> Query {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect()
    }

    fn keys(query: &Query) -> Vec<&str> {
        query.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_initial_state_is_readme() {
        let nav = TabNavigator::new();
        assert_eq!(nav.selected(), "readme");
        assert!(!nav.is_address_ready());
    }

    #[test]
    fn test_address_ready_with_page_selects_it() {
        let mut nav = TabNavigator::new();
        assert!(nav.address_changed(Some("parameters")));
        assert_eq!(nav.selected(), "parameters");
        assert!(nav.is_address_ready());
    }

    #[test]
    fn test_address_ready_without_page_resets_to_readme() {
        let mut nav = TabNavigator::new();
        nav.user_selected("usage");
        assert!(nav.address_changed(None));
        assert_eq!(nav.selected(), "readme");
    }

    #[test]
    fn test_user_selection_returns_tab_to_write() {
        let mut nav = TabNavigator::new();
        nav.address_changed(None);
        assert_eq!(nav.user_selected("usage"), Some("usage".to_string()));
        assert_eq!(nav.selected(), "usage");
        assert_eq!(nav.user_selected("usage"), None);
    }

    #[test]
    fn test_echo_of_own_write_is_ignored() {
        let mut nav = TabNavigator::new();
        nav.address_changed(None);
        nav.user_selected("usage");
        assert!(!nav.address_changed(Some("usage")));
        assert_eq!(nav.selected(), "usage");

        nav.user_selected("readme");
        assert!(!nav.address_changed(None));
        assert_eq!(nav.selected(), "readme");
    }

    #[test]
    fn test_quick_selections_do_not_bounce_back() {
        let mut nav = TabNavigator::new();
        nav.address_changed(None);
        nav.user_selected("usage");
        nav.user_selected("versions");
        assert!(!nav.address_changed(Some("usage")));
        assert!(!nav.address_changed(Some("versions")));
        assert_eq!(nav.selected(), "versions");
    }

    #[test]
    fn test_external_navigation_is_adopted() {
        let mut nav = TabNavigator::new();
        nav.address_changed(None);
        nav.user_selected("usage");
        nav.address_changed(Some("usage"));
        // back button
        assert!(nav.address_changed(None));
        assert_eq!(nav.selected(), "readme");
    }

    #[test]
    fn test_resolve_selected_falls_back_to_readme() {
        let keys = ["readme", "usage", "raw"];
        assert_eq!(resolve_selected("usage", &keys), "usage");
        assert_eq!(resolve_selected("example", &keys), "readme");
    }

    #[test]
    fn test_page_segment() {
        assert_eq!(page_segment(Some("parameters")), Some("parameters".to_string()));
        assert_eq!(page_segment(Some("usage/extra")), Some("usage".to_string()));
        assert_eq!(page_segment(Some("")), None);
        assert_eq!(page_segment(None), None);
    }

    #[test]
    fn test_address_for_tab_strips_route_keys() {
        let previous = query(&[("id", "42"), ("page", "readme"), ("ref", "home")]);
        let address = build_address(&resource(), "usage", &previous);
        assert_eq!(address.path, "/resources/42/usage");
        assert_eq!(address.query, query(&[("ref", "home"), ("database", "pg"), ("version", "1.2")]));
        assert_eq!(keys(&address.query), ["ref", "database", "version"]);
        assert_eq!(address.to_url(), "/resources/42/usage?ref=home&database=pg&version=1.2");
    }

    #[test]
    fn test_address_for_readme_is_base_path() {
        let previous = query(&[("database", "mysql"), ("version", "0.9")]);
        let address = build_address(&resource(), "readme", &previous);
        assert_eq!(address.path, "/resources/42");
        assert_eq!(address.query, query(&[("database", "pg"), ("version", "1.2")]));
        assert_eq!(address.to_url(), "/resources/42?database=pg&version=1.2");
    }

    #[test]
    fn test_address_overrides_keep_key_order() {
        let previous = query(&[("version", "0.9"), ("ref", "home"), ("database", "mysql")]);
        let address = build_address(&resource(), "raw", &previous);
        assert_eq!(keys(&address.query), ["version", "ref", "database"]);
        assert_eq!(address.query["version"], "1.2");
        assert_eq!(address.query["database"], "pg");
    }

    #[test]
    fn test_repeated_tags_in_address_leave_one_value() {
        let previous = parse_query("?database=mysql&database=old&version=0.9");
        let url = build_address(&resource(), "usage", &previous).to_url();

        let (path, search) = url.split_once('?').unwrap();
        assert_eq!(path, "/resources/42/usage");
        let databases: Vec<_> = search.split('&').filter(|p| p.starts_with("database=")).collect();
        let versions: Vec<_> = search.split('&').filter(|p| p.starts_with("version=")).collect();
        assert_eq!(databases, ["database=pg"]);
        assert_eq!(versions, ["version=1.2"]);
    }

    #[test]
    fn test_parse_query() {
        let parsed = parse_query("?database=pg&note=a%20b");
        assert_eq!(parsed, query(&[("database", "pg"), ("note", "a b")]));
        assert_eq!(keys(&parsed), ["database", "note"]);
        assert!(parse_query("").is_empty());
        assert!(parse_query("?").is_empty());
    }
}
