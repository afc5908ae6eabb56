//! Caller-facing upload listing
//!
//! Runs the collector for one account and attaches gateway URLs.
//! Serialises to `{ "total", "ids", "urls", "partial" }`.

use crate::error::Result;
use crate::gateway::Gateway;
use crate::graphql::IndexService;
use crate::pagination::{CollectionResult, PaginatedCollector};
use crate::types::AccountId;
use serde::{Deserialize, Serialize};

/// Uploads owned by one account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadListing {
    /// Number of ids, always `ids.len()`
    pub total: usize,
    /// Item ids, newest first
    pub ids: Vec<String>,
    /// Retrieval URL for each id, same order
    pub urls: Vec<String>,
    /// The list may be incomplete
    pub partial: bool,
}

impl UploadListing {
    /// Build a listing from a collection result
    pub fn from_result(result: CollectionResult, gateway: &Gateway) -> Self {
        let partial = result.partial();
        let ids = result.into_ids();
        let urls = gateway.retrieval_urls(&ids);
        Self {
            total: ids.len(),
            ids,
            urls,
            partial,
        }
    }
}

/// List every upload owned by `owner`
pub async fn list_uploads<S: IndexService>(
    collector: &PaginatedCollector<S>,
    gateway: &Gateway,
    owner: &AccountId,
) -> Result<UploadListing> {
    let result = collector.collect(owner).await?;
    Ok(UploadListing::from_result(result, gateway))
}
