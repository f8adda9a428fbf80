//! Download and subscribe funnel triggers
//!
//! Each trigger owns its modal open state. Clicking the button records the
//! click event and opens the shared email capture modal; submitting records
//! the submit event and closes it.

use crate::analytics::{track, AnalyticsEvent};
use crate::app::use_site;
use crate::components::EmailCaptureModal;
use leptos::prelude::*;

/// Download trigger button and modal (hidden on mobile)
#[component]
pub fn RoadmapDownloader(featured_title: String) -> impl IntoView {
    let title = StoredValue::new(featured_title);
    let (open, set_open) = signal(false);
    let site = use_site();

    // Escape closes the modal
    leptos::leptos_dom::helpers::window_event_listener(leptos::ev::keydown, move |e| {
        if e.key() == "Escape" {
            set_open.set(false);
        }
    });

    view! {
        <>
            <button
                class="btn btn-header btn-download hide-mobile"
                on:click=move |_| {
                    title.with_value(|t| track(&AnalyticsEvent::download_clicked(t)));
                    set_open.set(true);
                }
            >
                <span class="btn-icon-left">
                    <svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/>
                        <polyline points="7 10 12 15 17 10"/>
                        <line x1="12" x2="12" y1="15" y2="3"/>
                    </svg>
                </span>
                "Download"
            </button>

            <Show when=move || open.get()>
                <EmailCaptureModal
                    heading="Download Roadmap"
                    prompt="Enter your email below to receive the download link."
                    submit_label="Send Link"
                    form_action=site.get().signup_form_action
                    email_field_name=site.get().signup_email_field
                    on_close=move || set_open.set(false)
                    on_submit=move || {
                        title.with_value(|t| track(&AnalyticsEvent::download_submitted(t)));
                        set_open.set(false);
                    }
                />
            </Show>
        </>
    }
}

/// Subscribe trigger button and modal
#[component]
pub fn RoadmapSubscriber(featured_title: String) -> impl IntoView {
    let title = StoredValue::new(featured_title);
    let (open, set_open) = signal(false);
    let site = use_site();

    // Escape closes the modal
    leptos::leptos_dom::helpers::window_event_listener(leptos::ev::keydown, move |e| {
        if e.key() == "Escape" {
            set_open.set(false);
        }
    });

    view! {
        <>
            <button
                class="btn btn-header btn-subscribe"
                on:click=move |_| {
                    title.with_value(|t| track(&AnalyticsEvent::subscribe_clicked(t)));
                    set_open.set(true);
                }
            >
                <span class="btn-icon-left">
                    <svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <circle cx="12" cy="12" r="4"/>
                        <path d="M16 8v5a3 3 0 0 0 6 0v-1a10 10 0 1 0-4 8"/>
                    </svg>
                </span>
                "Subscribe"
            </button>

            <Show when=move || open.get()>
                <EmailCaptureModal
                    heading="Subscribe"
                    prompt="Enter your email below to receive updates to this roadmap."
                    submit_label="Subscribe"
                    form_action=site.get().signup_form_action
                    email_field_name=site.get().signup_email_field
                    on_close=move || set_open.set(false)
                    on_submit=move || {
                        title.with_value(|t| track(&AnalyticsEvent::subscribe_submitted(t)));
                        set_open.set(false);
                    }
                />
            </Show>
        </>
    }
}
