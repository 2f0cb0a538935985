//! Catalog aggregation
//!
//! Decodes the nested category → stream catalog returned by the remote
//! service and flattens it into a uniform list of stream records. Optional
//! fields default to empty/absent so one sparse stream object never fails
//! the whole catalog.

use serde::Deserialize;

/// Top-level catalog response: a list of category groups.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub streams: Vec<CategoryGroup>,
}

/// One category with its streams.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryGroup {
    pub category: String,
    #[serde(default)]
    pub streams: Vec<RawStream>,
}

/// One stream object as returned by the catalog endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStream {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub starts_at: Option<i64>,
    #[serde(default)]
    pub ends_at: Option<i64>,
}

/// A flattened stream record, carrying its parent category's name.
///
/// Created once per run by [`aggregate`] and immutable afterwards.
#[derive(Debug, Clone)]
pub struct StreamRecord {
    pub id: u64,
    pub name: String,
    pub tag: String,
    pub category: String,
    pub poster: String,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
}

/// Flatten the nested catalog into one record per stream.
pub fn aggregate(catalog: &CatalogResponse) -> Vec<StreamRecord> {
    let mut records = Vec::new();

    for group in &catalog.streams {
        for stream in &group.streams {
            records.push(StreamRecord {
                id: stream.id,
                name: stream.name.clone(),
                tag: stream.tag.clone().unwrap_or_default(),
                category: group.category.clone(),
                poster: stream.poster.clone().unwrap_or_default(),
                start_time: stream.starts_at,
                end_time: stream.ends_at,
            });
        }
    }

    records
}
