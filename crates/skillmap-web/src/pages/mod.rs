//! Page components

mod index;
mod roadmap;

pub use index::RoadmapIndex;
pub use roadmap::RoadmapPage;
