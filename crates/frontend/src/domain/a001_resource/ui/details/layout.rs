//! Composition of the resource tab set
//!
//! Order: readme, changelog, usage, parameters?, example?, versions,
//! required tabs, optional group?, raw.

use super::content::{render_content, tab_title, RenderedContent};
use super::model::ExampleEntry;
use contracts::domain::a001_resource::{is_fixed_tab_key, Resource, TabDescriptor};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabBody {
    Readme,
    Changelog,
    Usage,
    Parameters,
    Example,
    Versions,
    Dynamic(RenderedContent),
    Optional(Vec<OptionalPane>),
    Raw,
}

/// One pane of the optional group, selected by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionalPane {
    pub label: String,
    pub content: Option<RenderedContent>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSpec {
    pub key: String,
    pub title: String,
    pub body: TabBody,
}

impl TabSpec {
    fn fixed(key: &str, title: &str, body: TabBody) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabLayout {
    /// Resource not loaded yet
    Loading,
    Tabs(Vec<TabSpec>),
}

impl TabLayout {
    pub fn keys(&self) -> Vec<&str> {
        match self {
            TabLayout::Loading => Vec::new(),
            TabLayout::Tabs(tabs) => tabs.iter().map(|t| t.key.as_str()).collect(),
        }
    }
}

pub fn compose_tabs(
    resource: &Resource,
    examples: &[ExampleEntry],
    required: &[TabDescriptor],
    optional: &[TabDescriptor],
) -> TabLayout {
    if resource.is_empty() {
        return TabLayout::Loading;
    }

    let mut tabs = vec![
        TabSpec::fixed("readme", "Readme", TabBody::Readme),
        TabSpec::fixed("changelog", "Changelog", TabBody::Changelog),
        TabSpec::fixed("usage", "Usage", TabBody::Usage),
    ];
    if resource.arguments.is_some() {
        tabs.push(TabSpec::fixed("parameters", "Parameters", TabBody::Parameters));
    }
    if !examples.is_empty() {
        tabs.push(TabSpec::fixed("example", "Example", TabBody::Example));
    }
    tabs.push(TabSpec::fixed("versions", "Versions", TabBody::Versions));

    let mut dynamic_keys = HashSet::new();
    for descriptor in required {
        if is_fixed_tab_key(&descriptor.name) || dynamic_keys.contains(descriptor.name.as_str()) {
            log::warn!("tab '{}' duplicates an existing tab key, skipped", descriptor.name);
            continue;
        }
        // Only a rendered tab claims its key
        if let Some(content) = render_content(descriptor) {
            dynamic_keys.insert(descriptor.name.as_str());
            tabs.push(TabSpec {
                key: descriptor.name.clone(),
                title: tab_title(&descriptor.name),
                body: TabBody::Dynamic(content),
            });
        }
    }

    if !optional.is_empty() {
        let panes = optional
            .iter()
            .map(|descriptor| OptionalPane {
                label: descriptor.name.clone(),
                content: render_content(descriptor),
            })
            .collect();
        tabs.push(TabSpec::fixed("optional", "Optional", TabBody::Optional(panes)));
    }

    tabs.push(TabSpec::fixed("raw", "Raw", TabBody::Raw));
    TabLayout::Tabs(tabs)
}
