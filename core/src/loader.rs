//! One-shot catalog loading.
//!
//! Frontends supply a [`CatalogSource`] (browser fetch, HTTP client) and
//! call [`load_catalog`] once at startup. A failed load is logged and
//! yields an empty catalog; nothing is retried.

use std::future::Future;

use hashbrown::HashMap;
use roster_types::Character;

use crate::catalog::{Catalog, sort_records};
use crate::error::LoadError;

/// The single fallible seam: fetch the raw record list from somewhere.
pub trait CatalogSource {
    /// Human-readable location, used in logs
    fn location(&self) -> &str;

    fn fetch(&self) -> impl Future<Output = Result<Vec<Character>, LoadError>>;
}

/// Decode a catalog document. The body must be a JSON array of records.
pub fn parse_records(body: &str) -> Result<Vec<Character>, LoadError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if !value.is_array() {
        return Err(LoadError::NotAnArray);
    }
    Ok(serde_json::from_value(value)?)
}

/// Fetch, sort and index the catalog.
///
/// Never fails: any [`LoadError`] is reported through `tracing` and an
/// empty catalog (no groups, no records) is returned.
pub async fn load_catalog<S: CatalogSource>(source: &S) -> Catalog {
    match source.fetch().await {
        Ok(records) => {
            let catalog = build_catalog(records);
            tracing::info!(
                source = source.location(),
                records = catalog.len(),
                groups = catalog.groups().len(),
                "Catalog loaded"
            );
            catalog
        }
        Err(e) => {
            tracing::error!(source = source.location(), error = %e, "Error fetching catalog");
            Catalog::empty()
        }
    }
}

/// Sort fetched records by display name and group them.
pub fn build_catalog(mut records: Vec<Character>) -> Catalog {
    sort_records(&mut records);
    warn_duplicate_names(&records);
    Catalog::from_records(records)
}

/// Warn once per duplicated name, in catalog order. Returns the names warned about.
fn warn_duplicate_names(records: &[Character]) -> Vec<&str> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut duplicates = Vec::new();
    for record in records {
        let name = record.display_name.as_str();
        let count = seen.entry(name).or_default();
        *count += 1;
        if *count == 2 {
            tracing::warn!(name, "Duplicate display name in catalog");
            duplicates.push(name);
        }
    }
    duplicates
}
