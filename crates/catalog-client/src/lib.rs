//! Entity store boundary for the catalog dock
//!
//! This crate defines the narrow interface the dock uses to look up
//! catalog entities (artists, releases, deliverables), plus an in-memory
//! implementation backed by plain vectors.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              CatalogStore trait                  │
//! │  - find_artists(term, limit)                     │
//! │  - find_releases(term, limit)                    │
//! │  - find_deliverables(term, limit)                │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │  MemoryCatalog  │
//!              │ (in-memory scan)│
//!              └─────────────────┘
//! ```
//!
//! All lookups are case-insensitive substring matches against the entity
//! display name, capped at `limit` results. The dock does not care whether
//! a real backend implements this with SQL `ILIKE`, a full-text index, or
//! a linear scan.

pub mod memory;
pub mod store;
pub mod types;

pub use memory::MemoryCatalog;
pub use store::{CatalogStore, StoreError};
pub use types::{ArtistRecord, DeliverableKind, DeliverableRecord, ReleaseRecord};
