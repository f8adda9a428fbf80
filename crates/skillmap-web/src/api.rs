//! API client utilities and shared types for frontend

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

/// Roadmap ids whose pages have interactive nodes with attached resources
pub const INTERACTIVE_ROADMAP_IDS: [&str; 3] = ["frontend", "backend", "devops"];

/// Roadmap ids that carry partner news coverage
pub const PARTNER_NEWS_ROADMAP_IDS: [&str; 3] = ["frontend", "backend", "devops"];

/// Roadmap descriptor matching backend API response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapData {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub featured_title: String,
    #[serde(default)]
    pub description: String,
}

impl RoadmapData {
    /// Display title for banners and analytics labels
    pub fn featured_title(&self) -> &str {
        if self.featured_title.is_empty() {
            &self.title
        } else {
            &self.featured_title
        }
    }
}

/// Roadmaps listing response from API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapsResponse {
    pub count: u64,
    pub roadmaps: Vec<RoadmapData>,
}

/// Site configuration matching backend API response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub issue_url: String,
    #[serde(default)]
    pub signup_form_action: String,
    #[serde(default)]
    pub signup_email_field: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "skillmap".to_string(),
            tagline: "Community curated roadmaps for developers".to_string(),
            issue_url: "https://github.com/skillmap-dev/skillmap/issues/new".to_string(),
            signup_form_action: "https://newsletter.skillmap.sh/subscribe".to_string(),
            signup_email_field: "EMAIL".to_string(),
        }
    }
}

impl SiteInfo {
    /// Prefilled issue URL for the Suggest Changes link
    pub fn suggest_changes_url(&self, title: &str) -> String {
        format!("{}?title=[Suggestion] {}", self.issue_url, title)
    }
}

/// Whether a roadmap page has clickable nodes with resources
pub fn is_interactive(roadmap_id: &str) -> bool {
    INTERACTIVE_ROADMAP_IDS.contains(&roadmap_id)
}

/// Whether a roadmap has partner news coverage
pub fn has_partner_news(roadmap_id: &str) -> bool {
    PARTNER_NEWS_ROADMAP_IDS.contains(&roadmap_id)
}

/// Fetch all roadmaps from API
pub async fn fetch_roadmaps() -> Result<RoadmapsResponse, String> {
    let response = Request::get("/api/roadmaps")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let roadmaps = response
        .json::<RoadmapsResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(roadmaps)
}

/// Fetch a single roadmap from API
pub async fn fetch_roadmap(id: &str) -> Result<RoadmapData, String> {
    let response = Request::get(&format!("/api/roadmaps/{}", id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status() == 404 {
        return Err(format!("Roadmap not found: {}", id));
    }
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let roadmap = response
        .json::<RoadmapData>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(roadmap)
}

/// Fetch site configuration from API
pub async fn fetch_site() -> Result<SiteInfo, String> {
    let response = Request::get("/api/site")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let site = response
        .json::<SiteInfo>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(site)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interactive_allow_list() {
        assert!(is_interactive("frontend"));
        assert!(is_interactive("backend"));
        assert!(is_interactive("devops"));
        assert!(!is_interactive("python"));
        assert!(!is_interactive(""));
    }

    #[test]
    fn test_partner_news_allow_list() {
        assert!(has_partner_news("frontend"));
        assert!(has_partner_news("devops"));
        assert!(!has_partner_news("android"));
    }

    #[test]
    fn test_suggest_changes_url() {
        let site = SiteInfo {
            issue_url: "https://github.com/skillmap-dev/skillmap/issues/new".to_string(),
            ..SiteInfo::default()
        };
        assert_eq!(
            site.suggest_changes_url("Frontend"),
            "https://github.com/skillmap-dev/skillmap/issues/new?title=[Suggestion] Frontend"
        );
    }

    #[test]
    fn test_roadmap_data_camel_case() {
        let json = r#"{"id": "frontend", "title": "Frontend Developer", "featuredTitle": "Frontend", "description": "Guide"}"#;
        let roadmap: RoadmapData = serde_json::from_str(json).unwrap();
        assert_eq!(roadmap.featured_title, "Frontend");
        assert_eq!(roadmap.featured_title(), "Frontend");
    }

    #[test]
    fn test_featured_title_falls_back_to_title() {
        let roadmap = RoadmapData {
            id: "python".to_string(),
            title: "Python Developer".to_string(),
            ..RoadmapData::default()
        };
        assert_eq!(roadmap.featured_title(), "Python Developer");
    }

    #[test]
    fn test_site_info_default() {
        let site = SiteInfo::default();
        assert_eq!(site.name, "skillmap");
        assert_eq!(site.signup_email_field, "EMAIL");
    }
}
