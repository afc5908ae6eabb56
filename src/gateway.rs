//! Retrieval URLs for uploaded items
//!
//! Pure string mapping from an item id to its public gateway URL.

use crate::config::DEFAULT_GATEWAY_BASE;

/// Public gateway serving uploaded content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gateway {
    base: String,
}

impl Gateway {
    /// Create a gateway; the base is trimmed and a `/` is appended when missing
    ///
    /// Ids always land after a path separator, so a prefix that must be
    /// followed directly by the id (for example `https://host/get?id=`)
    /// cannot be expressed.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into().trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Self { base }
    }

    /// Base prefix, always ending in `/`
    pub fn base(&self) -> &str {
        &self.base
    }

    /// URL serving `item_id`
    pub fn retrieval_url(&self, item_id: &str) -> String {
        format!("{}{}", self.base, item_id)
    }

    /// URLs for `ids`, in the same order
    pub fn retrieval_urls<I, T>(&self, ids: I) -> Vec<String>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        ids.into_iter()
            .map(|id| self.retrieval_url(id.as_ref()))
            .collect()
    }
}

impl Default for Gateway {
    fn default() -> Self {
        Self::new(DEFAULT_GATEWAY_BASE)
    }
}
