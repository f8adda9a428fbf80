//! Content store with DashMap + parking_lot::RwLock
//!
//! Uses DashMap for roadmaps (per-entry locking) and parking_lot::RwLock
//! for the site config and listing order (better fairness than
//! std::sync::RwLock).

use crate::content::ContentLoader;
use crate::error::{DegradedState, LoadReport};
use crate::models::{Roadmap, SiteConfig};
use dashmap::DashMap;
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Central content store for skillmap
///
/// Thread-safe access to the site configuration and all loaded roadmaps.
pub struct ContentStore {
    /// Path to the content directory
    content_dir: PathBuf,

    /// Site configuration (low contention, frequent reads)
    site: RwLock<SiteConfig>,

    /// Roadmaps by id
    /// Arc<Roadmap> for cheap cloning out of the map
    roadmaps: DashMap<String, Arc<Roadmap>>,

    /// Listing order (roadmap ids sorted by id)
    order: RwLock<Vec<String>>,

    /// Current degraded state
    degraded_state: RwLock<DegradedState>,
}

impl ContentStore {
    /// Create a new content store
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
            site: RwLock::new(SiteConfig::default()),
            roadmaps: DashMap::new(),
            order: RwLock::new(Vec::new()),
            degraded_state: RwLock::new(DegradedState::Healthy),
        }
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Get current degraded state
    pub fn degraded_state(&self) -> DegradedState {
        self.degraded_state.read().clone()
    }

    /// Load all content with a LoadReport for graceful degradation
    pub fn load(&self) -> LoadReport {
        info!(content_dir = %self.content_dir.display(), "Starting content load");

        let loader = ContentLoader::new(&self.content_dir);
        let (content, report) = loader.load_all();

        {
            let mut guard = self.site.write();
            *guard = content.site;
        }

        self.roadmaps.clear();
        let mut order = Vec::with_capacity(content.roadmaps.len());
        for roadmap in content.roadmaps {
            order.push(roadmap.id.clone());
            self.roadmaps.insert(roadmap.id.clone(), Arc::new(roadmap));
        }
        {
            let mut guard = self.order.write();
            *guard = order;
        }

        self.update_degraded_state(&report);

        info!(
            site_loaded = report.site_loaded,
            roadmaps_scanned = report.roadmaps_scanned,
            roadmaps_failed = report.roadmaps_failed,
            errors = report.errors.len(),
            "Content load complete"
        );

        report
    }

    /// Update degraded state based on load report
    fn update_degraded_state(&self, report: &LoadReport) {
        let mut state = self.degraded_state.write();

        if report.has_fatal_errors() {
            let mut missing = Vec::new();
            if !report.site_loaded {
                missing.push("site".to_string());
            }
            missing.push("roadmaps".to_string());
            *state = DegradedState::Partial {
                missing,
                reason: "Fatal errors during load".to_string(),
            };
            return;
        }

        let mut missing = Vec::new();

        if !report.site_loaded {
            missing.push("site".to_string());
        }
        if report.roadmaps_failed > 0 {
            missing.push(format!("{} roadmaps", report.roadmaps_failed));
        }

        if missing.is_empty() {
            *state = DegradedState::Healthy;
        } else {
            let reason = format!("Missing: {}", missing.join(", "));
            *state = DegradedState::Partial { missing, reason };
        }
    }

    // ===================
    // Read accessors
    // ===================

    /// Get a clone of the site configuration
    pub fn site(&self) -> SiteConfig {
        self.site.read().clone()
    }

    /// Get a roadmap by id
    /// Returns Arc<Roadmap> for cheap cloning
    pub fn roadmap(&self, id: &str) -> Option<Arc<Roadmap>> {
        self.roadmaps.get(id).map(|r| Arc::clone(r.value()))
    }

    /// Get all roadmaps in listing order
    pub fn roadmaps(&self) -> Vec<Arc<Roadmap>> {
        let order = self.order.read();
        order
            .iter()
            .filter_map(|id| self.roadmaps.get(id).map(|r| Arc::clone(r.value())))
            .collect()
    }

    /// Get all roadmap ids in listing order
    pub fn roadmap_ids(&self) -> Vec<String> {
        self.order.read().clone()
    }

    /// Get roadmap count
    pub fn roadmap_count(&self) -> usize {
        self.roadmaps.len()
    }
}
