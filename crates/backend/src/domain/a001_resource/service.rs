use super::repository::get_catalog;
use contracts::domain::a001_resource::{ResourceDetails, ResourceQuery, ResourceVersion};

/// Resource addressed by `id` and `query`, `None` when the catalog has no match
pub async fn get_details(id: &str, query: &ResourceQuery) -> anyhow::Result<Option<ResourceDetails>> {
    let catalog = get_catalog()?;
    Ok(catalog
        .find(id, query.database.as_deref(), query.version.as_deref())
        .cloned())
}

pub async fn list_versions(id: &str, database: Option<&str>) -> anyhow::Result<Vec<ResourceVersion>> {
    let catalog = get_catalog()?;
    Ok(catalog.versions(id, database))
}
