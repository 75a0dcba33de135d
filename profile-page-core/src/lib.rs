//! Profile Page Core Library
//!
//! Provides the platform-independent part of a single-page personal profile:
//! - Profile record types and loading (types)
//! - Navigation graph: section ids, predecessor/successor, hint labels (graph)
//! - UI tree materialization and HTML serialization (dom)
//! - Navigation controller: active section, hint timers, scroll requests (navigation)
//!
//! The front end only has to implement [`Viewport`] and feed input events
//! into [`NavigationController`].

pub mod assets;
pub mod config;
pub mod dom;
pub mod error;
pub mod graph;
pub mod navigation;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use assets::{AssetCatalog, IconResolver};
pub use config::NavigationSettings;
pub use error::{ConfigurationError, PageError, PageResult};
pub use graph::{NavigationGraph, SectionKind, SectionNode};
pub use navigation::{
    IntersectionEntry, KeyOutcome, NavKey, NavigationController, ScrollBehavior, Viewport,
};
pub use types::{Account, ContentSection, HintDirection, NavHint, ProfileRecord, SectionId};
