//! Email capture modal component
//!
//! Shared shell for the download and subscribe funnels. The form posts to
//! the signup endpoint in a new tab; the browser owns validation and the
//! actual submission.

use leptos::prelude::*;

/// Email capture modal
///
/// `on_submit` fires alongside the browser's form submission (no
/// prevent-default), so the handler only records the event and closes.
#[component]
pub fn EmailCaptureModal(
    heading: &'static str,
    prompt: &'static str,
    submit_label: &'static str,
    form_action: String,
    email_field_name: String,
    on_close: impl Fn() + 'static + Copy + Send + Sync,
    on_submit: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div
                class="modal-content email-capture-modal"
                on:click=move |e| e.stop_propagation()
            >
                <button class="modal-close" on:click=move |_| on_close()>
                    "×"
                </button>

                <div class="modal-body">
                    <h2>{heading}</h2>
                    <p class="modal-prompt">{prompt}</p>
                    <form
                        action=form_action
                        method="post"
                        target="_blank"
                        on:submit=move |_| on_submit()
                    >
                        <input
                            class="email-input"
                            type="email"
                            name=email_field_name
                            placeholder="Email address"
                            required=true
                            autofocus=true
                        />
                        <button type="submit" class="btn btn-submit">
                            {submit_label}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
