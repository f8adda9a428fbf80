//! Content loader with graceful degradation
//!
//! Reads site.json and roadmaps/*.json from a content directory. A malformed
//! roadmap file is recorded in the LoadReport and skipped; the rest of the
//! content still loads.

use crate::error::{ContentError, LoadError, LoadReport};
use crate::models::{Roadmap, SiteConfig};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// File name of the site configuration inside the content directory
pub const SITE_CONFIG_FILE: &str = "site.json";

/// Subdirectory holding the roadmap descriptor files
pub const ROADMAPS_DIR: &str = "roadmaps";

/// Result of a full content load, possibly degraded
#[derive(Debug, Default)]
pub struct LoadedContent {
    pub site: SiteConfig,
    /// Roadmaps sorted by id
    pub roadmaps: Vec<Roadmap>,
}

/// Loader for a content directory
pub struct ContentLoader {
    content_dir: PathBuf,
}

impl ContentLoader {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
        }
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Parse a single roadmap descriptor file
    pub fn parse_roadmap(&self, path: &Path) -> Result<Roadmap, ContentError> {
        let content = std::fs::read_to_string(path).map_err(|e| ContentError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let roadmap: Roadmap =
            serde_json::from_str(&content).map_err(|e| ContentError::JsonParse {
                path: path.to_path_buf(),
                source: e,
            })?;

        roadmap
            .validate()
            .map_err(|reason| ContentError::InvalidRoadmap {
                path: path.to_path_buf(),
                reason,
            })?;

        Ok(roadmap)
    }

    /// Load site.json with graceful degradation
    ///
    /// A missing file is a warning and the defaults apply; a malformed file
    /// is an error and the defaults apply.
    pub fn load_site(&self, report: &mut LoadReport) -> SiteConfig {
        let path = self.content_dir.join(SITE_CONFIG_FILE);

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(?path, "site.json not found, using defaults");
                report.add_warning("site", format!("{} not found, using defaults", path.display()));
                return SiteConfig::default();
            }
            Err(e) => {
                warn!(?path, error = %e, "Failed to read site.json");
                report.add_error(LoadError::error(
                    "site",
                    ContentError::FileRead {
                        path: path.clone(),
                        source: e,
                    }
                    .to_string(),
                ));
                return SiteConfig::default();
            }
        };

        match serde_json::from_str::<SiteConfig>(&content) {
            Ok(site) => {
                debug!(?path, "Loaded site configuration");
                report.site_loaded = true;
                site
            }
            Err(e) => {
                warn!(?path, error = %e, "Failed to parse site.json");
                report.add_error(LoadError::error(
                    "site",
                    format!("Failed to parse {}: {}", path.display(), e),
                ));
                SiteConfig::default()
            }
        }
    }

    /// Load all roadmap descriptors with graceful degradation
    ///
    /// Discovery order is stable (sorted by file name), and on a duplicate id
    /// the first file wins.
    pub fn load_roadmaps(&self, report: &mut LoadReport) -> Vec<Roadmap> {
        let dir = self.content_dir.join(ROADMAPS_DIR);
        if !dir.is_dir() {
            report.add_fatal(
                "roadmaps",
                ContentError::RoadmapsDirNotFound { path: dir }.to_string(),
            );
            return Vec::new();
        }

        let mut by_id: BTreeMap<String, Roadmap> = BTreeMap::new();

        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable roadmaps entry");
                    report.add_error(LoadError::error("roadmaps", e.to_string()));
                    continue;
                }
            };
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            report.roadmaps_scanned += 1;
            match self.parse_roadmap(path) {
                Ok(roadmap) => {
                    if by_id.contains_key(&roadmap.id) {
                        warn!(?path, id = %roadmap.id, "Duplicate roadmap id, keeping first");
                        report.roadmaps_failed += 1;
                        report.add_error(LoadError::error(
                            "roadmaps",
                            ContentError::DuplicateRoadmap {
                                id: roadmap.id.clone(),
                                path: path.to_path_buf(),
                            }
                            .to_string(),
                        ));
                    } else {
                        debug!(?path, id = %roadmap.id, "Loaded roadmap");
                        by_id.insert(roadmap.id.clone(), roadmap);
                    }
                }
                Err(e) => {
                    warn!(?path, error = %e, "Skipping roadmap file");
                    report.roadmaps_failed += 1;
                    report.add_error(LoadError::error("roadmaps", e.to_string()));
                }
            }
        }

        if by_id.is_empty() && !report.has_fatal_errors() {
            report.add_warning("roadmaps", "No roadmap descriptors found");
        }

        by_id.into_values().collect()
    }

    /// Load the whole content directory
    ///
    /// Fatal conditions (missing directories) are recorded in the report
    /// rather than returned; callers check `has_fatal_errors` like they would
    /// after any other load.
    pub fn load_all(&self) -> (LoadedContent, LoadReport) {
        let mut report = LoadReport::new();

        if !self.content_dir.is_dir() {
            report.add_fatal(
                "content",
                ContentError::ContentDirNotFound {
                    path: self.content_dir.clone(),
                }
                .to_string(),
            );
            return (LoadedContent::default(), report);
        }

        let site = self.load_site(&mut report);
        let roadmaps = self.load_roadmaps(&mut report);

        (LoadedContent { site, roadmaps }, report)
    }
}
