//! Empty state component for missing or unloadable pages

use leptos::prelude::*;
use leptos_router::components::A;

/// Empty state with a back link to the roadmap index
#[component]
pub fn EmptyState(
    /// Short headline (e.g., "Roadmap not found")
    title: &'static str,
    /// What happened
    description: String,
    /// Optional extra detail (e.g., the failing id or error)
    #[prop(optional)]
    hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state-icon">
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="64"
                    height="64"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="1.5"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    // Map icon (lucide-map)
                    <path d="M14.106 5.553a2 2 0 0 0 1.788 0l3.659-1.83A1 1 0 0 1 21 4.619v12.764a1 1 0 0 1-.553.894l-4.553 2.277a2 2 0 0 1-1.788 0l-4.212-2.106a2 2 0 0 0-1.788 0l-3.659 1.83A1 1 0 0 1 3 19.381V6.618a1 1 0 0 1 .553-.894l4.553-2.277a2 2 0 0 1 1.788 0z"/>
                    <path d="M15 5.764v15"/>
                    <path d="M9 3.236v15"/>
                </svg>
            </div>
            <h2 class="empty-state-title">{title}</h2>
            <p class="empty-state-description">{description}</p>

            {hint.map(|h| {
                view! { <p class="empty-state-hint hint">{h}</p> }
            })}

            <div class="empty-state-actions">
                <A href="/roadmaps" attr:class="btn btn-primary">
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="16"
                        height="16"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    >
                        <path d="m12 19-7-7 7-7"/>
                        <path d="M19 12H5"/>
                    </svg>
                    " Back to All Roadmaps"
                </A>
            </div>
        </div>
    }
}
