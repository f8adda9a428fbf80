//! Roadmap descriptor model

use serde::{Deserialize, Serialize};

/// A roadmap descriptor (from content/roadmaps/<id>.json)
///
/// Read-only metadata about a single roadmap: the page header and the index
/// render from these fields alone. The roadmap body (nodes, resources) lives
/// outside this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    /// Unique identifier, also the page path segment (e.g. "frontend")
    pub id: String,

    /// Display title (e.g. "Frontend Developer")
    pub title: String,

    /// Short display title used in UI copy and analytics (e.g. "Frontend")
    pub featured_title: String,

    /// One-line description rendered under the page heading
    pub description: String,
}

impl Roadmap {
    /// Validate the descriptor after parsing
    ///
    /// Returns the reason the descriptor is unusable, if any. Identifiers
    /// double as URL path segments, so whitespace and slashes are rejected.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("id must not be empty".to_string());
        }
        if self.id.contains(char::is_whitespace) || self.id.contains('/') {
            return Err(format!("id '{}' is not a valid path segment", self.id));
        }
        if self.title.trim().is_empty() {
            return Err("title must not be empty".to_string());
        }
        if self.featured_title.trim().is_empty() {
            return Err("featuredTitle must not be empty".to_string());
        }
        Ok(())
    }
}
