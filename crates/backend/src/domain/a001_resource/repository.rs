//! Resource catalog: a JSON array of `ResourceDetails` loaded once at start-up

use chrono::{DateTime, Utc};
use contracts::domain::a001_resource::{is_fixed_tab_key, ResourceDetails, ResourceVersion};
use once_cell::sync::OnceCell;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

static CATALOG: OnceCell<Catalog> = OnceCell::new();

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog is already initialized")]
    AlreadyInitialized,

    #[error("catalog is not initialized")]
    NotInitialized,
}

#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<ResourceDetails>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<ResourceDetails> = serde_json::from_str(json)?;
        for entry in &entries {
            report_tab_collisions(entry);
        }
        Ok(Self { entries })
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for `id`, optionally narrowed by database and version.
    ///
    /// Entries are kept in file order, so without a version the last
    /// matching entry is the latest one.
    pub fn find(
        &self,
        id: &str,
        database: Option<&str>,
        version: Option<&str>,
    ) -> Option<&ResourceDetails> {
        self.entries
            .iter()
            .filter(|e| is_match(e, id, database))
            .filter(|e| version.map_or(true, |v| e.resource.resource_version == v))
            .last()
    }

    /// Published versions of `id`, in file order.
    pub fn versions(&self, id: &str, database: Option<&str>) -> Vec<ResourceVersion> {
        self.entries
            .iter()
            .filter(|e| is_match(e, id, database))
            .map(|e| ResourceVersion {
                version: e.resource.resource_version.clone(),
                database: e.resource.database.clone(),
                published_at: published_at(e),
            })
            .collect()
    }
}

fn is_match(entry: &ResourceDetails, id: &str, database: Option<&str>) -> bool {
    entry.resource.id == id && database.map_or(true, |db| entry.resource.database == db)
}

/// `published_at` is not a typed field of a resource, catalogs carry it as
/// an RFC 3339 string next to the other keys.
fn published_at(entry: &ResourceDetails) -> Option<DateTime<Utc>> {
    entry
        .resource
        .extra
        .get("published_at")
        .and_then(|v| v.as_str())
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|d| d.with_timezone(&Utc))
}

fn report_tab_collisions(entry: &ResourceDetails) {
    let mut seen = HashSet::new();
    for descriptor in &entry.required_tabs {
        if is_fixed_tab_key(&descriptor.name) || !seen.insert(descriptor.name.as_str()) {
            tracing::warn!(
                "resource '{}' v{}: tab '{}' collides with another tab key",
                entry.resource.id,
                entry.resource.resource_version,
                descriptor.name
            );
        }
    }
}

pub fn initialize_catalog(path: &Path) -> Result<(), CatalogError> {
    let catalog = Catalog::load(path)?;
    if catalog.is_empty() {
        tracing::warn!("Catalog {} has no entries", path.display());
    }
    tracing::info!(
        "Catalog loaded from {}: {} entries",
        path.display(),
        catalog.len()
    );
    CATALOG
        .set(catalog)
        .map_err(|_| CatalogError::AlreadyInitialized)
}

pub fn get_catalog() -> Result<&'static Catalog, CatalogError> {
    CATALOG.get().ok_or(CatalogError::NotInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_JSON: &str = r#"[
        {
            "resource": { "id": "pg_backup", "database": "postgres", "resource_version": "1.0.0",
                          "published_at": "2024-01-10T12:00:00Z" },
            "required_tabs": [ { "name": "retention", "schema": { "type": "integer" }, "content": 7 } ]
        },
        {
            "resource": { "id": "pg_backup", "database": "postgres", "resource_version": "1.1.0" }
        },
        {
            "resource": { "id": "pg_backup", "database": "mysql", "resource_version": "0.9.0" }
        },
        {
            "resource": { "id": "other", "database": "postgres", "resource_version": "2.0.0" },
            "optional_tabs": [ { "name": "notes", "schema": { "type": ["string", "null"] }, "content": "n" } ]
        }
    ]"#;

    fn catalog() -> Catalog {
        Catalog::from_json(CATALOG_JSON).unwrap()
    }

    #[test]
    fn test_catalog_parses() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 4);
        let other = catalog.find("other", None, None).unwrap();
        assert_eq!(other.optional_tabs.len(), 1);
        assert!(other.required_tabs.is_empty());
    }

    #[test]
    fn test_find_without_version_takes_latest() {
        let catalog = catalog();
        let found = catalog.find("pg_backup", Some("postgres"), None).unwrap();
        assert_eq!(found.resource.resource_version, "1.1.0");

        // no database: last entry for the id overall
        let found = catalog.find("pg_backup", None, None).unwrap();
        assert_eq!(found.resource.database, "mysql");
    }

    #[test]
    fn test_find_with_version() {
        let catalog = catalog();
        let found = catalog.find("pg_backup", Some("postgres"), Some("1.0.0")).unwrap();
        assert_eq!(found.required_tabs[0].name, "retention");
        assert!(catalog.find("pg_backup", Some("postgres"), Some("9.9.9")).is_none());
        assert!(catalog.find("missing", None, None).is_none());
    }

    #[test]
    fn test_versions() {
        let versions = catalog().versions("pg_backup", Some("postgres"));
        let numbers: Vec<_> = versions.iter().map(|v| v.version.as_str()).collect();
        assert_eq!(numbers, ["1.0.0", "1.1.0"]);
        assert_eq!(
            versions[0].published_at.map(|d| d.to_rfc3339()),
            Some("2024-01-10T12:00:00+00:00".to_string())
        );
        assert_eq!(versions[1].published_at, None);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Catalog::load(Path::new("/nonexistent/resources.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/resources.json"));
    }
}
