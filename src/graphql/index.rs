//! Index service trait and the GraphQL implementation

use super::types::{GraphQlRequest, GraphQlResponse, ListVariables};
use crate::config::CollectorConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RateLimiterConfig};
use crate::types::{AccountId, Page};
use async_trait::async_trait;
use tracing::debug;

/// Transactions of one owner, newest first, starting after a cursor
pub const LIST_TRANSACTIONS_QUERY: &str = r"
query list($owners:[String!]!,$limit:Int,$after:String){
  transactions(owners:$owners, limit:$limit, order: DESC, after:$after){
    edges{
      node{ id }
      cursor
    }
  }
}
";

/// A cursor-paginated index of uploads
///
/// Implementations must return edges in a stable order and signal the end
/// of the list with an empty page or an edge without a cursor.
#[async_trait]
pub trait IndexService: Send + Sync {
    /// Fetch up to `limit` items owned by `owner`, starting after `after`
    async fn fetch_page(&self, owner: &AccountId, limit: u32, after: Option<&str>)
        -> Result<Page>;
}

#[async_trait]
impl<T: IndexService + ?Sized> IndexService for &T {
    async fn fetch_page(
        &self,
        owner: &AccountId,
        limit: u32,
        after: Option<&str>,
    ) -> Result<Page> {
        (**self).fetch_page(owner, limit, after).await
    }
}

#[async_trait]
impl<T: IndexService + ?Sized> IndexService for std::sync::Arc<T> {
    async fn fetch_page(
        &self,
        owner: &AccountId,
        limit: u32,
        after: Option<&str>,
    ) -> Result<Page> {
        (**self).fetch_page(owner, limit, after).await
    }
}

/// Irys GraphQL index reached over HTTP
#[derive(Debug)]
pub struct GraphqlIndex {
    client: HttpClient,
    endpoint: String,
}

impl GraphqlIndex {
    /// Create an index over an existing client
    pub fn new(client: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Build the HTTP client and index from collector config
    pub fn from_config(config: &CollectorConfig) -> Result<Self> {
        let mut http = HttpClientConfig::builder().timeout(config.timeout());
        if let Some(rps) = config.requests_per_second {
            http = http.rate_limit(RateLimiterConfig::per_second(rps));
        }
        let client = HttpClient::with_config(http.build())?;
        Ok(Self::new(client, config.endpoint.clone()))
    }

    /// Endpoint this index posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl IndexService for GraphqlIndex {
    async fn fetch_page(
        &self,
        owner: &AccountId,
        limit: u32,
        after: Option<&str>,
    ) -> Result<Page> {
        let request = GraphQlRequest {
            query: LIST_TRANSACTIONS_QUERY,
            variables: ListVariables {
                owners: [owner.as_str()],
                limit,
                after,
            },
        };
        let body = serde_json::to_value(&request)?;

        let response: GraphQlResponse = self.client.post_json(&self.endpoint, &body).await?;

        let messages = response.error_messages();
        if !messages.is_empty() {
            return Err(Error::graphql(messages));
        }

        let page = response.into_page();
        debug!(
            owner = %owner,
            after = after.unwrap_or("<start>"),
            edges = page.len(),
            "Fetched index page"
        );
        Ok(page)
    }
}
