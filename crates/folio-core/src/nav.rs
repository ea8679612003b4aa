#![forbid(unsafe_code)]

//! Sections and the responsive navigation sidebar.
//!
//! On wide viewports the sidebar is a permanent column. Below the mobile
//! breakpoint it is hidden behind a menu control and, when opened, overlays
//! the content. The overlay closes when the user picks a nav item, closes it
//! explicitly, or when the viewport grows past the breakpoint.

/// Viewports narrower than this are treated as mobile.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;
/// Width of the desktop sidebar column.
pub const SIDEBAR_WIDTH_PX: u32 = 256;

#[must_use]
pub const fn is_mobile(viewport_width_px: u32) -> bool {
    viewport_width_px < MOBILE_BREAKPOINT_PX
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Page regions, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Education,
    Experience,
    Projects,
    Hobbies,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Education,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Hobbies,
    ];

    /// Entries listed in the sidebar nav (the landing section is reached
    /// through the sidebar header instead).
    pub const NAV: [SectionId; 5] = [
        SectionId::About,
        SectionId::Education,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Hobbies,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Education => "Education",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Hobbies => "Hobbies",
        }
    }

    /// Anchor name, also accepted on the command line.
    pub const fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Education => "education",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Hobbies => "hobbies",
        }
    }

    pub fn index(self) -> usize {
        SectionId::ALL
            .iter()
            .position(|&s| s == self)
            .unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        SectionId::ALL.get(index).copied()
    }

    /// Parse an anchor name, case-insensitively, with an optional leading `#`.
    pub fn from_anchor(name: &str) -> Option<Self> {
        let name = name.trim().trim_start_matches('#');
        SectionId::ALL
            .into_iter()
            .find(|s| s.anchor().eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn next(self) -> Self {
        let i = (self.index() + 1) % SectionId::ALL.len();
        SectionId::ALL[i]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let len = SectionId::ALL.len();
        let i = (self.index() + len - 1) % len;
        SectionId::ALL[i]
    }
}

// ---------------------------------------------------------------------------
// Sidebar
// ---------------------------------------------------------------------------

/// Visibility state of the navigation sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sidebar {
    mobile: bool,
    open: bool,
}

impl Sidebar {
    pub fn new(viewport_width_px: u32) -> Self {
        Self {
            mobile: is_mobile(viewport_width_px),
            open: false,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    /// Mobile overlay currently shown.
    pub fn is_open(&self) -> bool {
        self.mobile && self.open
    }

    /// Whether the sidebar is drawn at all.
    pub fn is_visible(&self) -> bool {
        !self.mobile || self.open
    }

    /// Open the overlay (menu control). No-op on desktop.
    pub fn open(&mut self) -> bool {
        if !self.mobile || self.open {
            return false;
        }
        self.open = true;
        true
    }

    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn toggle(&mut self) -> bool {
        if self.open { self.close() } else { self.open() }
    }

    /// A nav item was chosen: the mobile overlay closes.
    pub fn on_nav_link_click(&mut self) {
        if self.mobile {
            self.open = false;
        }
    }

    /// Re-evaluate the breakpoint. Entering desktop closes the overlay.
    pub fn on_viewport_resize(&mut self, viewport_width_px: u32) {
        self.mobile = is_mobile(viewport_width_px);
        if !self.mobile {
            self.open = false;
        }
    }
}
