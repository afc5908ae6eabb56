//! # irys-uploads
//!
//! List every upload owned by an EVM wallet on the Irys cursor-paginated
//! GraphQL index, and derive public gateway URLs for each.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use irys_uploads::{list_uploads, AccountId, CollectorConfig, Gateway, GraphqlIndex,
//!     PaginatedCollector, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = CollectorConfig::default().with_env_overrides();
//!     let index = GraphqlIndex::from_config(&config)?;
//!     let collector = PaginatedCollector::from_config(index, &config);
//!     let gateway = Gateway::new(config.gateway_base.as_str());
//!
//!     let owner = AccountId::parse("0x3F20EBe6AB8CCdf07a77bFbF16530d30B2504E12")?;
//!     let listing = list_uploads(&collector, &gateway, &owner).await?;
//!     println!("{} uploads (partial: {})", listing.total, listing.partial);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  list_uploads(owner) → { total, ids, urls, partial }     │
//! └──────────────────────────────────────────────────────────┘
//!                    │                         │
//! ┌──────────────────┴───────────┐  ┌──────────┴──────────┐
//! │      PaginatedCollector      │  │       Gateway       │
//! │ empty page │ missing cursor  │  │  id → base + id     │
//! │ short page │ cursor repeat   │  └─────────────────────┘
//! │ page ceiling                 │
//! └──────────────────────────────┘
//!                    │
//! ┌──────────────────┴───────────┐
//! │  IndexService (GraphqlIndex) │
//! │  HttpClient + rate limiter   │
//! └──────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Account identifiers and remote pages
pub mod types;

/// Collector configuration
pub mod config;

/// HTTP client with rate limiting
pub mod http;

/// Remote indexing service
pub mod graphql;

/// Cursor-walking collector
pub mod pagination;

/// Gateway retrieval URLs
pub mod gateway;

/// Caller-facing listing
pub mod listing;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::CollectorConfig;
pub use error::{Error, Result};
pub use gateway::Gateway;
pub use graphql::{GraphqlIndex, IndexService};
pub use listing::{list_uploads, UploadListing};
pub use pagination::{CollectionResult, PaginatedCollector, Termination};
pub use types::{AccountId, Edge, Page};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
