//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::api::{fetch_site, SiteInfo};
use crate::pages::{RoadmapIndex, RoadmapPage};

/// Site configuration context
///
/// Holds the defaults until `/api/site` resolves; pages keep working if it
/// never does.
#[derive(Clone, Copy)]
pub struct SiteContext {
    site: RwSignal<SiteInfo>,
}

impl SiteContext {
    fn new() -> Self {
        Self {
            site: RwSignal::new(SiteInfo::default()),
        }
    }

    /// Current site configuration
    pub fn get(&self) -> SiteInfo {
        self.site.get()
    }
}

/// Hook to access the site configuration context
pub fn use_site() -> SiteContext {
    expect_context::<SiteContext>()
}

/// Provider that fetches the site configuration once (wraps app root)
#[component]
pub fn SiteProvider(children: Children) -> impl IntoView {
    let context = SiteContext::new();
    provide_context(context);

    // Fetch site config (use LocalResource for CSR with non-Send futures)
    let site_resource = LocalResource::new(fetch_site);

    Effect::new(move |_| {
        if let Some(site) = site_resource
            .get()
            .and_then(|result| result.as_ref().ok().cloned())
        {
            context.site.set(site);
        }
    });

    children()
}

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <SiteProvider>
            <Router>
                <div class="app">
                    <main class="content">
                        <Routes fallback=|| "Not found">
                            <Route path=path!("/") view=RoadmapIndex />
                            <Route path=path!("/roadmaps") view=RoadmapIndex />
                            <Route path=path!("/:id") view=RoadmapPage />
                        </Routes>
                    </main>
                </div>
            </Router>
        </SiteProvider>
    }
}
