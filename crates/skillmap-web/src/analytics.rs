//! Analytics event construction and dispatch
//!
//! Event construction is pure so the taxonomy is testable natively. Dispatch
//! logs the event and forwards it to window.gtag when the page carries one;
//! pages without gtag just get the log line.

/// Category shared by the whole subscription funnel
pub const EVENT_CATEGORY_SUBSCRIPTION: &str = "Subscription";

/// A single analytics event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub category: String,
    pub action: String,
    pub label: String,
}

impl AnalyticsEvent {
    /// Download button clicked on a roadmap page
    pub fn download_clicked(featured_title: &str) -> Self {
        Self {
            category: EVENT_CATEGORY_SUBSCRIPTION.to_string(),
            action: format!("Clicked Download {} Roadmap", featured_title),
            label: format!("Download {} Roadmap Button", featured_title),
        }
    }

    /// Download email form submitted
    pub fn download_submitted(featured_title: &str) -> Self {
        Self {
            category: EVENT_CATEGORY_SUBSCRIPTION.to_string(),
            action: format!("Submitted Download {} Roadmap Email", featured_title),
            label: format!("PDF / Subscribe {} Roadmap", featured_title),
        }
    }

    /// Subscribe button clicked on a roadmap page
    pub fn subscribe_clicked(featured_title: &str) -> Self {
        Self {
            category: EVENT_CATEGORY_SUBSCRIPTION.to_string(),
            action: format!("Clicked Subscribe {} Roadmap", featured_title),
            label: format!("Subscribe {} Roadmap Button", featured_title),
        }
    }

    /// Subscribe email form submitted
    pub fn subscribe_submitted(featured_title: &str) -> Self {
        Self {
            category: EVENT_CATEGORY_SUBSCRIPTION.to_string(),
            action: format!("Submitted Subscribe {} Roadmap Email", featured_title),
            label: format!("Email / Subscribe {} Roadmap", featured_title),
        }
    }
}

/// Record an event
pub fn track(event: &AnalyticsEvent) {
    leptos::logging::log!(
        "analytics: {} / {} / {}",
        event.category,
        event.action,
        event.label
    );

    #[cfg(target_arch = "wasm32")]
    dispatch_gtag(event);
}

/// Gtag parameter object for an `event` call
#[cfg(target_arch = "wasm32")]
#[derive(serde::Serialize)]
struct GtagParams {
    event_category: String,
    event_label: String,
}

/// Forward an event to window.gtag if the page defines one
#[cfg(target_arch = "wasm32")]
fn dispatch_gtag(event: &AnalyticsEvent) {
    use wasm_bindgen::{JsCast, JsValue};

    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };

    let gtag = match js_sys::Reflect::get(&window, &JsValue::from_str("gtag")) {
        Ok(value) => value,
        Err(_) => return,
    };
    let gtag = match gtag.dyn_ref::<js_sys::Function>() {
        Some(f) => f,
        None => return,
    };

    let params = GtagParams {
        event_category: event.category.clone(),
        event_label: event.label.clone(),
    };
    let params = match serde_wasm_bindgen::to_value(&params) {
        Ok(value) => value,
        Err(e) => {
            leptos::logging::warn!("Failed to serialize gtag params: {:?}", e);
            return;
        }
    };

    if let Err(e) = gtag.call3(
        &JsValue::NULL,
        &JsValue::from_str("event"),
        &JsValue::from_str(&event.action),
        &params,
    ) {
        leptos::logging::warn!("gtag dispatch failed: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_clicked_event() {
        let event = AnalyticsEvent::download_clicked("Frontend");
        assert_eq!(event.category, "Subscription");
        assert_eq!(event.action, "Clicked Download Frontend Roadmap");
        assert_eq!(event.label, "Download Frontend Roadmap Button");
    }

    #[test]
    fn test_download_submitted_event() {
        let event = AnalyticsEvent::download_submitted("Frontend");
        assert_eq!(event.category, "Subscription");
        assert_eq!(event.action, "Submitted Download Frontend Roadmap Email");
        assert_eq!(event.label, "PDF / Subscribe Frontend Roadmap");
    }

    #[test]
    fn test_subscribe_clicked_event() {
        let event = AnalyticsEvent::subscribe_clicked("DevOps");
        assert_eq!(event.category, "Subscription");
        assert_eq!(event.action, "Clicked Subscribe DevOps Roadmap");
        assert_eq!(event.label, "Subscribe DevOps Roadmap Button");
    }

    #[test]
    fn test_subscribe_submitted_event() {
        let event = AnalyticsEvent::subscribe_submitted("DevOps");
        assert_eq!(event.category, "Subscription");
        assert_eq!(event.action, "Submitted Subscribe DevOps Roadmap Email");
        assert_eq!(event.label, "Email / Subscribe DevOps Roadmap");
    }
}
