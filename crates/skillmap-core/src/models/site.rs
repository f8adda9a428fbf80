//! Site configuration model

use serde::{Deserialize, Serialize};

/// Site-wide configuration (from content/site.json)
///
/// Supplies the external URLs the page header links and forms point at.
/// Every field has a compiled-in default so a missing or partial site.json
/// degrades to the stock site instead of failing the load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site name, shown in chrome and the index page
    #[serde(default = "default_name")]
    pub name: String,

    /// One-line tagline for the index page
    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// Base issue-tracker URL for the "Suggest Changes" link
    #[serde(default = "default_issue_url")]
    pub issue_url: String,

    /// External signup endpoint the modal forms POST to
    #[serde(default = "default_signup_form_action")]
    pub signup_form_action: String,

    /// Form field name the signup endpoint expects for the email input
    #[serde(default = "default_signup_email_field")]
    pub signup_email_field: String,
}

fn default_name() -> String {
    "skillmap".to_string()
}

fn default_tagline() -> String {
    "Community curated roadmaps for developers".to_string()
}

fn default_issue_url() -> String {
    "https://github.com/skillmap-dev/skillmap/issues/new".to_string()
}

fn default_signup_form_action() -> String {
    "https://newsletter.skillmap.sh/subscribe".to_string()
}

fn default_signup_email_field() -> String {
    "EMAIL".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            tagline: default_tagline(),
            issue_url: default_issue_url(),
            signup_form_action: default_signup_form_action(),
            signup_email_field: default_signup_email_field(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_site_json_fills_defaults() {
        let json = r#"{ "name": "myroadmaps" }"#;
        let site: SiteConfig = serde_json::from_str(json).unwrap();

        assert_eq!(site.name, "myroadmaps");
        assert_eq!(site.signup_email_field, "EMAIL");
        assert!(site.issue_url.contains("issues/new"));
    }

    #[test]
    fn test_empty_object_matches_default() {
        let site: SiteConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(site, SiteConfig::default());
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = serde_json::to_string(&SiteConfig::default()).unwrap();
        assert!(json.contains("\"issueUrl\""));
        assert!(json.contains("\"signupFormAction\""));
        assert!(json.contains("\"signupEmailField\""));
    }
}
