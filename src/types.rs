//! Common types used throughout irys-uploads
//!
//! Account identifiers, remote pages and their edges.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static EVM_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("valid EVM address pattern"));

// ============================================================================
// Account Identifier
// ============================================================================

/// Owner whose uploads are being listed
///
/// The collector treats this as an opaque query parameter. Use
/// [`AccountId::parse`] at the edge to enforce the EVM address format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Wrap a value without checking its format
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Parse a trimmed EVM address (`0x` followed by 40 hex characters)
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if EVM_ADDRESS.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(Error::invalid_account(trimmed))
        }
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for AccountId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// ============================================================================
// Pages
// ============================================================================

/// One `(item id, cursor)` pair returned by the remote index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Edge {
    /// Content identifier of the upload, if present
    pub item_id: Option<String>,
    /// Continuation token pointing after this item
    pub cursor: Option<String>,
}

impl Edge {
    /// Create an edge; empty strings count as absent
    pub fn new(item_id: Option<String>, cursor: Option<String>) -> Self {
        Self {
            item_id: item_id.filter(|s| !s.is_empty()),
            cursor: cursor.filter(|s| !s.is_empty()),
        }
    }

    /// Edge with both an id and a cursor
    pub fn with_cursor(item_id: impl Into<String>, cursor: impl Into<String>) -> Self {
        Self::new(Some(item_id.into()), Some(cursor.into()))
    }

    /// Edge with an id but no continuation token
    pub fn terminal(item_id: impl Into<String>) -> Self {
        Self::new(Some(item_id.into()), None)
    }
}

/// One response from the remote index, in remote order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// Edges in the order the remote returned them
    pub edges: Vec<Edge>,
}

impl Page {
    /// Create a page from edges
    pub fn new(edges: Vec<Edge>) -> Self {
        Self { edges }
    }

    /// An empty page (end of list)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of edges, including those without an id
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check if the page has no edges
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Identifiers present on this page, skipping missing ones
    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        self.edges.iter().filter_map(|e| e.item_id.as_deref())
    }

    /// Cursor of the last edge, if any
    pub fn last_cursor(&self) -> Option<&str> {
        self.edges.last().and_then(|e| e.cursor.as_deref())
    }
}
