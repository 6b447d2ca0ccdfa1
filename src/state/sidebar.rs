//! Sidebar display mode and navigation selection.
//!
//! DESIGN
//! ======
//! The desktop collapse toggle and the mobile show/hide toggle both act on
//! one [`SidebarMode`]. While hidden on mobile the sidebar remembers which
//! desktop mode to come back to, so the two triggers never disagree about
//! what is on screen.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use crate::consts::{SIDEBAR_COLLAPSED_PX, SIDEBAR_EXPANDED_PX};
use crate::state::sections::SectionId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarMode {
    #[default]
    Expanded,
    Collapsed,
    HiddenMobile,
}

/// Fixed set of navigation entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MenuItem {
    Overview,
    Projects,
    Skills,
    Analytics,
    Activity,
    Resume,
}

impl MenuItem {
    pub const ALL: [MenuItem; 6] = [
        MenuItem::Overview,
        MenuItem::Projects,
        MenuItem::Skills,
        MenuItem::Analytics,
        MenuItem::Activity,
        MenuItem::Resume,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Analytics => "Analytics",
            Self::Activity => "Activity",
            Self::Resume => "Resume",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Overview => "◧",
            Self::Projects => "▤",
            Self::Skills => "✦",
            Self::Analytics => "▥",
            Self::Activity => "↻",
            Self::Resume => "✎",
        }
    }

    /// Section this entry scrolls to, if any.
    #[must_use]
    pub fn section(self) -> Option<SectionId> {
        match self {
            Self::Overview => Some(SectionId::Overview),
            Self::Projects => Some(SectionId::Projects),
            Self::Skills => Some(SectionId::Skills),
            Self::Analytics => Some(SectionId::Analytics),
            Self::Activity => Some(SectionId::Activity),
            Self::Resume => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    mode: SidebarMode,
    /// Desktop mode restored when a mobile-hidden sidebar is shown again.
    restore: SidebarMode,
    active: Option<MenuItem>,
}

impl SidebarState {
    /// Initial state: hidden on narrow viewports, expanded otherwise.
    #[must_use]
    pub fn new(mobile: bool) -> Self {
        let mode = if mobile { SidebarMode::HiddenMobile } else { SidebarMode::Expanded };
        Self { mode, restore: SidebarMode::Expanded, active: None }
    }

    #[must_use]
    pub fn mode(&self) -> SidebarMode {
        self.mode
    }

    #[must_use]
    pub fn active(&self) -> Option<MenuItem> {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, item: MenuItem) -> bool {
        self.active == Some(item)
    }

    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.mode == SidebarMode::Collapsed
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.mode == SidebarMode::HiddenMobile
    }

    /// Flip between expanded and collapsed. While hidden, only the mode to
    /// restore changes.
    pub fn toggle_collapse(&mut self) {
        match self.mode {
            SidebarMode::Expanded => self.mode = SidebarMode::Collapsed,
            SidebarMode::Collapsed => self.mode = SidebarMode::Expanded,
            SidebarMode::HiddenMobile => {
                self.restore = match self.restore {
                    SidebarMode::Collapsed => SidebarMode::Expanded,
                    _ => SidebarMode::Collapsed,
                };
            }
        }
    }

    /// Show or hide the sidebar on small screens.
    ///
    /// Showing returns to the desktop mode held before hiding, so a sidebar
    /// collapsed before it was hidden comes back collapsed (72px offset)
    /// rather than expanded.
    pub fn toggle_mobile(&mut self) {
        if self.mode == SidebarMode::HiddenMobile {
            self.mode = self.restore;
        } else {
            self.restore = self.mode;
            self.mode = SidebarMode::HiddenMobile;
        }
    }

    /// Make `item` the single active entry and return its scroll target.
    pub fn select(&mut self, item: MenuItem) -> Option<SectionId> {
        self.active = Some(item);
        item.section()
    }

    /// Leading offset of the main column in CSS pixels.
    #[must_use]
    pub fn main_offset_px(&self) -> u32 {
        match self.mode {
            SidebarMode::Expanded => SIDEBAR_EXPANDED_PX,
            SidebarMode::Collapsed => SIDEBAR_COLLAPSED_PX,
            SidebarMode::HiddenMobile => 0,
        }
    }

    /// Class list for the sidebar container.
    #[must_use]
    pub fn container_class(&self) -> &'static str {
        match self.mode {
            SidebarMode::Expanded => "sidebar",
            SidebarMode::Collapsed => "sidebar collapsed",
            SidebarMode::HiddenMobile => "sidebar hidden-mobile",
        }
    }
}
