//! skillmap-core - Content layer for skillmap
//!
//! Provides the roadmap descriptor model, site configuration, content loader,
//! and the shared content store.

pub mod content;
pub mod error;
pub mod models;
pub mod store;

pub use error::{ContentError, DegradedState, LoadReport};
pub use models::{Roadmap, SiteConfig};
pub use store::ContentStore;
