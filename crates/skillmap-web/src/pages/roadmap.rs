//! Roadmap page component

use crate::api::fetch_roadmap;
use crate::components::{EmptyState, RoadmapPageHeader};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Roadmap page: header plus the roadmap canvas
#[component]
pub fn RoadmapPage() -> impl IntoView {
    let params = use_params_map();
    let roadmap_id = Memo::new(move |_| {
        params.with(|params| params.get("id").unwrap_or_default())
    });

    // Refetches when the route param changes
    let roadmap_resource = LocalResource::new(move || {
        let id = roadmap_id.get();
        async move { fetch_roadmap(&id).await }
    });

    view! {
        <div class="page roadmap-page">
            <Suspense fallback=move || {
                view! { <div class="loading">"Loading roadmap..."</div> }
            }>
                {move || {
                    roadmap_resource
                        .get()
                        .map(|result| {
                            match result.as_ref() {
                                Ok(roadmap) => {
                                    let roadmap = roadmap.clone();
                                    view! {
                                        <RoadmapPageHeader roadmap=roadmap />
                                        <section class="roadmap-body">
                                            <div class="roadmap-canvas">
                                                <p class="hint">
                                                    "The interactive roadmap canvas renders here."
                                                </p>
                                            </div>
                                        </section>
                                    }
                                        .into_any()
                                }
                                Err(e) => {
                                    let description =
                                        "We could not find a roadmap with that id.".to_string();
                                    view! {
                                        <EmptyState
                                            title="Roadmap not found"
                                            description=description
                                            hint=e.clone()
                                        />
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
