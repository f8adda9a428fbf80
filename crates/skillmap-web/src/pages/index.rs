//! Roadmap index page component

use crate::api::{fetch_roadmaps, RoadmapData};
use crate::app::use_site;
use leptos::prelude::*;
use leptos_router::components::A;

/// Roadmap index page
#[component]
pub fn RoadmapIndex() -> impl IntoView {
    let site = use_site();

    let roadmaps_resource = LocalResource::new(fetch_roadmaps);

    view! {
        <div class="page index-page">
            <div class="index-hero">
                <h1 class="index-title">{move || site.get().name}</h1>
                <p class="index-tagline">{move || site.get().tagline}</p>
            </div>

            <Suspense fallback=move || {
                view! { <div class="loading">"Loading roadmaps..."</div> }
            }>
                {move || {
                    roadmaps_resource
                        .get()
                        .map(|result| {
                            match result.as_ref() {
                                Ok(response) if response.roadmaps.is_empty() => {
                                    view! {
                                        <div class="empty-state">
                                            <p>"No roadmaps published yet."</p>
                                            <p class="hint">
                                                "Add descriptors to the content directory to see them here."
                                            </p>
                                        </div>
                                    }
                                        .into_any()
                                }
                                Ok(response) => {
                                    let roadmaps = response.roadmaps.clone();
                                    view! {
                                        <div class="roadmap-grid">
                                            <For
                                                each=move || roadmaps.clone()
                                                key=|roadmap| roadmap.id.clone()
                                                children=move |roadmap: RoadmapData| {
                                                    view! { <RoadmapCard roadmap=roadmap /> }
                                                }
                                            />
                                        </div>
                                    }
                                        .into_any()
                                }
                                Err(e) => {
                                    let error_msg = e.clone();
                                    view! {
                                        <div class="error-state">
                                            <p>"Failed to load roadmaps"</p>
                                            <p class="hint">{error_msg}</p>
                                        </div>
                                    }
                                        .into_any()
                                }
                            }
                        })
                }}

            </Suspense>
        </div>
    }
}

/// Single card in the index grid
#[component]
fn RoadmapCard(roadmap: RoadmapData) -> impl IntoView {
    let href = format!("/{}", roadmap.id);

    view! {
        <A href=href attr:class="roadmap-card">
            <h2 class="roadmap-card-title">{roadmap.title.clone()}</h2>
            <p class="roadmap-card-description">{roadmap.description.clone()}</p>
        </A>
    }
}
