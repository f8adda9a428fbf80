//! Header banners: promo alert and the interactive-roadmap callout

use crate::api::{has_partner_news, is_interactive};
use leptos::prelude::*;

/// Partner news link, UTM-tagged
const PARTNER_NEWS_URL: &str =
    "https://thenewstack.io?utm_source=skillmap&utm_medium=Referral&utm_campaign=Banner";

/// Promotional alert pill pinned to the header container
#[component]
pub fn NewAlertBanner() -> impl IntoView {
    view! {
        <div class="new-alert-banner hide-mobile">
            <span class="badge badge-new">"New"</span>
            "Roadmaps are now interactive"
        </div>
    }
}

/// Resource callout under the action row, interactive roadmaps only
///
/// Partner-flagged roadmaps get a news strip above the callout line.
#[component]
pub fn ResourceCallout(roadmap_id: String, featured_title: String) -> impl IntoView {
    if !is_interactive(&roadmap_id) {
        return None;
    }

    let partner_strip = has_partner_news(&roadmap_id).then(|| {
        let desktop_title = featured_title.clone();
        let mobile_title = featured_title.clone();
        view! {
            <p class="callout-partner">
                <span class="hide-mobile">
                    "Get the latest " {desktop_title} " news from our sister site "
                    <a
                        href=PARTNER_NEWS_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="partner-link"
                    >
                        "TheNewStack.io"
                        <svg xmlns="http://www.w3.org/2000/svg" width="12" height="12" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <path d="M15 3h6v6"/>
                            <path d="M10 14 21 3"/>
                            <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h6"/>
                        </svg>
                    </a>
                </span>
                <span class="show-mobile">
                    "Get latest " {mobile_title} " news on "
                    <a
                        href=PARTNER_NEWS_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="partner-link"
                    >
                        "TheNewStack.io"
                    </a>
                </span>
            </p>
        }
    });

    Some(view! {
        <div class="resource-callout">
            {partner_strip}
            <p class="callout-note">
                <span class="badge badge-new">"New"</span>
                "Resources are here, try clicking any nodes."
            </p>
        </div>
    })
}
