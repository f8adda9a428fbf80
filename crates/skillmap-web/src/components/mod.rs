//! Leptos UI components

mod alert_banner;
mod email_capture;
mod empty_state;
mod page_header;
mod subscribe;

pub use alert_banner::{NewAlertBanner, ResourceCallout};
pub use email_capture::EmailCaptureModal;
pub use empty_state::EmptyState;
pub use page_header::RoadmapPageHeader;
pub use subscribe::{RoadmapDownloader, RoadmapSubscriber};
