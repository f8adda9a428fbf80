//! CLI commands for content inspection
//!
//! Provides list, show, and check formatting using ContentStore directly.

use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use skillmap_core::{ContentError, Roadmap, SiteConfig};
use skillmap_web::api::{has_partner_news, is_interactive};
use std::sync::Arc;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug)]
pub enum CliError {
    NotFound {
        source: ContentError,
        loaded: usize,
    },
    AmbiguousId {
        prefix: String,
        count: usize,
        suggestions: String,
    },
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::NotFound { source, loaded } => {
                write!(f, "{} ({} roadmaps loaded)", source, loaded)
            }
            CliError::AmbiguousId {
                prefix,
                count,
                suggestions,
            } => {
                write!(
                    f,
                    "Ambiguous roadmap id '{}': matches {} roadmaps\n{}",
                    prefix, count, suggestions
                )
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::NotFound { source, .. } => Some(source),
            CliError::AmbiguousId { .. } => None,
        }
    }
}

// ============================================================================
// Query Helpers
// ============================================================================

/// Find roadmap by exact id or unique prefix
pub fn find_roadmap(roadmaps: &[Arc<Roadmap>], id: &str) -> Result<Arc<Roadmap>, CliError> {
    // Try exact match first
    if let Some(roadmap) = roadmaps.iter().find(|r| r.id == id) {
        return Ok(Arc::clone(roadmap));
    }

    let matches: Vec<_> = roadmaps.iter().filter(|r| r.id.starts_with(id)).collect();

    match matches.len() {
        0 => Err(CliError::NotFound {
            source: ContentError::RoadmapNotFound { id: id.to_string() },
            loaded: roadmaps.len(),
        }),
        1 => Ok(Arc::clone(matches[0])),
        count => {
            let suggestions = matches
                .iter()
                .take(5)
                .map(|r| format!("  - {}", r.id))
                .collect::<Vec<_>>()
                .join("\n");
            Err(CliError::AmbiguousId {
                prefix: id.to_string(),
                count,
                suggestions,
            })
        }
    }
}

// ============================================================================
// Formatters
// ============================================================================

/// Format roadmaps as table (human) or JSON
pub fn format_roadmap_table(roadmaps: &[Arc<Roadmap>], json: bool, no_color: bool) -> String {
    if json {
        let plain: Vec<&Roadmap> = roadmaps.iter().map(|r| r.as_ref()).collect();
        return serde_json::to_string_pretty(&plain).unwrap_or_else(|_| "[]".to_string());
    }

    if roadmaps.is_empty() {
        return "No roadmaps loaded.".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    // Apply colors only if enabled
    if no_color {
        table.set_header(vec!["ID", "Title", "Featured", "Interactive", "Description"]);
    } else {
        table.set_header(vec![
            Cell::new("ID").fg(Color::Cyan),
            Cell::new("Title").fg(Color::Cyan),
            Cell::new("Featured").fg(Color::Cyan),
            Cell::new("Interactive").fg(Color::Cyan),
            Cell::new("Description").fg(Color::Cyan),
        ]);
    }

    for roadmap in roadmaps {
        let interactive = if is_interactive(&roadmap.id) {
            "yes"
        } else {
            "-"
        };
        let description = truncate(&roadmap.description, 48);

        table.add_row(Row::from(vec![
            roadmap.id.as_str(),
            &roadmap.title,
            &roadmap.featured_title,
            interactive,
            &description,
        ]));
    }

    table.to_string()
}

/// Format single roadmap info (human or JSON)
pub fn format_roadmap_info(roadmap: &Roadmap, site: &SiteConfig, json: bool) -> String {
    if json {
        return serde_json::to_string_pretty(roadmap).unwrap_or_else(|_| "{}".to_string());
    }

    let mut lines = vec![];
    lines.push(format!("ID:              {}", roadmap.id));
    lines.push(format!("Title:           {}", roadmap.title));
    lines.push(format!("Featured title:  {}", roadmap.featured_title));
    lines.push(format!("Description:     {}", roadmap.description));
    lines.push(format!("Page path:       /{}", roadmap.id));
    lines.push(format!(
        "Interactive:     {}",
        if is_interactive(&roadmap.id) {
            "yes"
        } else {
            "no"
        }
    ));
    lines.push(format!(
        "Partner news:    {}",
        if has_partner_news(&roadmap.id) {
            "yes"
        } else {
            "no"
        }
    ));
    lines.push(format!(
        "Suggest changes: {}?title=[Suggestion] {}",
        site.issue_url, roadmap.title
    ));

    lines.join("\n")
}

// ============================================================================
// Utilities
// ============================================================================

fn truncate(s: &str, max: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max {
        s.to_string()
    } else {
        // Use char-based truncation to avoid panicking on multi-byte characters
        s.chars().take(max - 1).collect::<String>() + "…"
    }
}

// ============================================================================
// Tests
// ============================================================================
