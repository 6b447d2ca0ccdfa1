//! Dashboard/profile view switching.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Visibility of the three top-level subtrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageVisibility {
    pub main: bool,
    pub sidebar: bool,
    pub profile: bool,
}

impl Default for PageVisibility {
    fn default() -> Self {
        Self { main: true, sidebar: true, profile: false }
    }
}

impl PageVisibility {
    /// Hide the dashboard and sidebar, show the profile page.
    pub fn open_profile(&mut self) {
        self.main = false;
        self.sidebar = false;
        self.profile = true;
    }

    /// Return to the dashboard.
    pub fn close_profile(&mut self) {
        self.main = true;
        self.sidebar = true;
        self.profile = false;
    }
}
