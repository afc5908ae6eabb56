//! Pagination module
//!
//! Walks a cursor-paginated index to completion.
//!
//! # Overview
//!
//! [`PaginatedCollector`] issues one page request at a time and stops in one
//! of the [`Termination`] states:
//!
//! | State | Result |
//! |-------|--------|
//! | `EmptyPage` | complete |
//! | `MissingCursor` | complete |
//! | `ShortPage` | complete |
//! | `CursorRepeated` | partial |
//! | `IterationLimit` | partial |
//!
//! A remote failure is the only other way out, and it returns an error
//! instead of a result.

mod collector;
mod types;

pub use collector::PaginatedCollector;
pub use types::{CollectionResult, CollectorState, Step, Termination};
