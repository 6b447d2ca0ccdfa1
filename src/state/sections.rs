//! Typed registry of scroll-target sections.
//!
//! ARCHITECTURE
//! ============
//! `App` creates one [`SectionRegistry`] and the dashboard binds each
//! section's `node_ref` from it. Navigation then resolves targets through
//! the registry instead of querying the document by id.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

use leptos::html::Section;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Overview,
    Projects,
    Skills,
    Analytics,
    Activity,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Overview,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Analytics,
        SectionId::Activity,
    ];

    /// Element id (and `data-section` value) of the section.
    #[must_use]
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Analytics => "analytics",
            Self::Activity => "activity",
        }
    }

    fn slot(self) -> usize {
        match self {
            Self::Overview => 0,
            Self::Projects => 1,
            Self::Skills => 2,
            Self::Analytics => 3,
            Self::Activity => 4,
        }
    }
}

/// One `NodeRef` per [`SectionId`], created once at startup.
#[derive(Clone, Copy)]
pub struct SectionRegistry {
    refs: [NodeRef<Section>; 5],
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self { refs: std::array::from_fn(|_| NodeRef::new()) }
    }

    #[must_use]
    pub fn node_ref(&self, id: SectionId) -> NodeRef<Section> {
        self.refs[id.slot()]
    }

    /// Smoothly center `id` in the viewport. Unmounted sections are skipped.
    pub fn scroll_to(&self, id: SectionId) {
        #[cfg(feature = "csr")]
        {
            match self.node_ref(id).get_untracked() {
                Some(element) => crate::util::dom::scroll_into_view_centered(&element),
                None => leptos::logging::log!("section {} is not mounted", id.dom_id()),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    }
}
