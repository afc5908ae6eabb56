//! Cursor-walking collector
//!
//! Fetches pages strictly one after another, each request starting after
//! the cursor produced by the previous response.

use super::types::{CollectionResult, CollectorState, Step, Termination};
use crate::config::{CollectorConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_PAGE_SIZE};
use crate::error::{Error, Result};
use crate::graphql::IndexService;
use crate::types::AccountId;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Walks the remote index for one account until a terminal state
#[derive(Debug, Clone)]
pub struct PaginatedCollector<S> {
    service: S,
    page_size: u32,
    max_iterations: u32,
    stop_on_short_page: bool,
}

impl<S: IndexService> PaginatedCollector<S> {
    /// Create a collector with default page size and ceiling
    pub fn new(service: S) -> Self {
        Self {
            service,
            page_size: DEFAULT_PAGE_SIZE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            stop_on_short_page: true,
        }
    }

    /// Create a collector from config
    pub fn from_config(service: S, config: &CollectorConfig) -> Self {
        Self::new(service)
            .with_page_size(config.page_size)
            .with_max_iterations(config.max_iterations)
            .with_stop_on_short_page(config.stop_on_short_page)
    }

    /// Set items requested per page (clamped to at least 1)
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Set the page ceiling (clamped to at least 1)
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }

    /// Treat a short page as the end of the list
    #[must_use]
    pub fn with_stop_on_short_page(mut self, enabled: bool) -> Self {
        self.stop_on_short_page = enabled;
        self
    }

    /// Items requested per page
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Page ceiling
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// The index this collector reads from
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Collect every identifier owned by `owner`
    ///
    /// Any remote failure aborts the run; nothing collected so far is returned.
    pub async fn collect(&self, owner: &AccountId) -> Result<CollectionResult> {
        let start = Instant::now();
        let mut state = CollectorState::new();

        let termination = loop {
            if state.pages >= self.max_iterations {
                warn!(
                    owner = %owner,
                    pages = state.pages,
                    ids = state.ids.len(),
                    "Page ceiling reached, listing may be incomplete"
                );
                break Termination::IterationLimit;
            }

            let page = self
                .service
                .fetch_page(owner, self.page_size, state.cursor.as_deref())
                .await?;

            match state.absorb(page, self.page_size, self.stop_on_short_page) {
                Step::Next(cursor) => {
                    debug!(page = state.pages, ids = state.ids.len(), cursor = %cursor, "Following cursor");
                }
                Step::Stop(termination) => {
                    if let Termination::CursorRepeated { cursor } = &termination {
                        warn!(
                            owner = %owner,
                            cursor = %cursor,
                            page = state.pages,
                            "Cursor repeated, stopping to avoid a loop"
                        );
                    }
                    break termination;
                }
            }
        };

        let termination = if termination.is_complete() && state.hit_ceiling(self.max_iterations)
        {
            warn!(
                owner = %owner,
                pages = state.pages,
                reason = termination.as_str(),
                "Last allowed page was full, listing may be incomplete"
            );
            Termination::IterationLimit
        } else {
            termination
        };

        let result = state.finish(termination);
        info!(
            owner = %owner,
            total = result.total(),
            pages = result.pages(),
            partial = result.partial(),
            reason = result.termination().as_str(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Collection finished"
        );
        Ok(result)
    }

    /// Collect with a caller deadline
    ///
    /// On expiry the in-flight request is dropped and the run fails with
    /// [`Error::Timeout`].
    pub async fn collect_within(
        &self,
        owner: &AccountId,
        deadline: Duration,
    ) -> Result<CollectionResult> {
        tokio::time::timeout(deadline, self.collect(owner))
            .await
            .map_err(|_| Error::Timeout {
                timeout_ms: deadline.as_millis() as u64,
            })?
    }
}
