//! Local UI chrome state (menus, picker, scroll, active section).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of `theme` so the navigation
//! controls can evolve independently of the palette contract.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Page sections reachable from the navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    About,
    Experience,
    Projects,
    Writing,
    Contact,
}

impl Section {
    /// Navigation order.
    pub const NAV: [Section; 5] = [Self::About, Self::Experience, Self::Projects, Self::Writing, Self::Contact];

    /// Element id used as the scroll anchor.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Writing => "writing",
            Self::Contact => "contact",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Writing => "Writing",
            Self::Contact => "Contact",
        }
    }

    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

/// UI state for the navigation bar and theme picker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub menu_open: bool,
    pub picker_open: bool,
    pub scrolled: bool,
    pub active_section: Section,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            self.picker_open = false;
        }
    }

    pub fn toggle_picker(&mut self) {
        self.picker_open = !self.picker_open;
    }

    /// A nav link was followed: remember it and collapse the mobile menu.
    pub fn navigate(&mut self, section: Section) {
        self.active_section = section;
        self.menu_open = false;
    }

    /// A palette was chosen from the picker.
    pub fn palette_chosen(&mut self) {
        self.picker_open = false;
    }
}
