//! Roadmap page header component
//!
//! Title, description, the action row (back link, download, subscribe,
//! suggest changes) and the conditional banners.

use crate::api::RoadmapData;
use crate::app::use_site;
use crate::components::{NewAlertBanner, ResourceCallout, RoadmapDownloader, RoadmapSubscriber};
use leptos::prelude::*;
use leptos_router::components::A;

/// Page header for a roadmap
#[component]
pub fn RoadmapPageHeader(roadmap: RoadmapData) -> impl IntoView {
    let site = use_site();

    let suggest_title = roadmap.title.clone();
    let suggest_url = move || site.get().suggest_changes_url(&suggest_title);

    view! {
        <header class="roadmap-header">
            <div class="roadmap-header-container">
                <NewAlertBanner />

                <h1 class="roadmap-title">{roadmap.title.clone()}</h1>
                <p class="roadmap-description">{roadmap.description.clone()}</p>

                <div class="roadmap-actions">
                    <A href="/roadmaps" attr:class="btn btn-header btn-back">
                        "←"
                        <span class="btn-back-label hide-mobile">"All Roadmaps"</span>
                    </A>

                    <RoadmapDownloader featured_title=roadmap.featured_title().to_string() />
                    <RoadmapSubscriber featured_title=roadmap.featured_title().to_string() />

                    <div class="roadmap-actions-right">
                        <a
                            class="btn btn-header btn-suggest"
                            href=suggest_url
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <span class="btn-icon-left">
                                <svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                    <path d="M7.9 20A9 9 0 1 0 4 16.1L2 22Z"/>
                                </svg>
                            </span>
                            "Suggest Changes"
                        </a>
                    </div>
                </div>

                <ResourceCallout
                    roadmap_id=roadmap.id.clone()
                    featured_title=roadmap.featured_title().to_string()
                />
            </div>
        </header>
    }
}
