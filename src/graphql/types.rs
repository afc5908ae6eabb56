//! GraphQL wire types

use crate::types::{Edge, Page};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body posted to the GraphQL endpoint
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a> {
    /// Query document
    pub query: &'a str,
    /// Query variables
    pub variables: ListVariables<'a>,
}

/// Variables for the transactions listing query
#[derive(Debug, Clone, Serialize)]
pub struct ListVariables<'a> {
    /// Owners filter; always a single account here
    pub owners: [&'a str; 1],
    /// Page size
    pub limit: u32,
    /// Continuation token, serialised as `null` on the first page
    pub after: Option<&'a str>,
}

/// Response envelope
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphQlResponse {
    /// Query result, absent when the query failed
    #[serde(default)]
    pub data: Option<TransactionsData>,
    /// Application-level errors reported by the endpoint
    #[serde(default)]
    pub errors: Option<Vec<Value>>,
}

/// `data` object of the listing query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionsData {
    /// Transactions owned by the requested account
    #[serde(default)]
    pub transactions: Option<TransactionsConnection>,
}

/// Paged `transactions` connection
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionsConnection {
    /// Edges in remote order
    #[serde(default)]
    pub edges: Option<Vec<TransactionEdge>>,
}

/// One transaction and the cursor pointing after it
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionEdge {
    /// Transaction node
    #[serde(default)]
    pub node: Option<EdgeNode>,
    /// Continuation token for the page after this edge
    #[serde(default)]
    pub cursor: Option<String>,
}

/// Transaction node; only the id is requested
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EdgeNode {
    /// Content identifier of the upload
    #[serde(default)]
    pub id: Option<String>,
}

impl GraphQlResponse {
    /// Messages of any application-level errors in the body
    pub fn error_messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .flatten()
            .map(|err| match err.get("message").and_then(Value::as_str) {
                Some(message) => message.to_string(),
                None => err.to_string(),
            })
            .collect()
    }

    /// Convert into a page; absent `data`, `transactions` or `edges` yields an empty page
    pub fn into_page(self) -> Page {
        let edges = self
            .data
            .and_then(|d| d.transactions)
            .and_then(|t| t.edges)
            .unwrap_or_default()
            .into_iter()
            .map(|edge| Edge::new(edge.node.and_then(|n| n.id), edge.cursor))
            .collect();
        Page::new(edges)
    }
}
