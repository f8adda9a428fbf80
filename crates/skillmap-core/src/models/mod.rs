//! Content models for skillmap

pub mod roadmap;
pub mod site;

pub use roadmap::Roadmap;
pub use site::SiteConfig;
