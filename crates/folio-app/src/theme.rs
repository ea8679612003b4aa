#![forbid(unsafe_code)]

//! Shared colors, styles, and glyphs.
//!
//! # Spacing
//!
//! | Token | Value | Use Case |
//! |-------|-------|----------|
//! | `XS` | 1 | Between inline elements |
//! | `SM` | 2 | Between cards and list items |
//! | `MD` | 3 | Panel padding |

use folio_core::profile::Icon;
use ratatui::style::{Modifier, Style};

/// Foreground colors.
pub mod fg {
    use ratatui::style::Color;

    pub const PRIMARY: Color = Color::Rgb(226, 232, 240);
    pub const SECONDARY: Color = Color::Rgb(148, 163, 184);
    pub const MUTED: Color = Color::Rgb(100, 116, 139);
    pub const DISABLED: Color = Color::Rgb(71, 85, 105);
    pub const ON_ACCENT: Color = Color::Rgb(15, 23, 42);
}

/// Background colors.
pub mod bg {
    use ratatui::style::Color;

    pub const BASE: Color = Color::Rgb(15, 23, 42);
    pub const SURFACE: Color = Color::Rgb(30, 41, 59);
    pub const RAISED: Color = Color::Rgb(51, 65, 85);
    pub const OVERLAY: Color = Color::Rgb(2, 6, 23);
}

/// Accent colors.
pub mod accent {
    use ratatui::style::Color;

    pub const PRIMARY: Color = Color::Rgb(56, 189, 248);
    pub const LINK: Color = Color::Rgb(125, 211, 252);
    pub const TAG: Color = Color::Rgb(167, 139, 250);
    pub const SUCCESS: Color = Color::Rgb(74, 222, 128);
    pub const WARNING: Color = Color::Rgb(250, 204, 21);
}

/// Cell spacing tokens.
pub mod spacing {
    /// Extra-small spacing (1 cell).
    pub const XS: u16 = 1;
    /// Small spacing (2 cells).
    pub const SM: u16 = 2;
    /// Medium spacing (3 cells).
    pub const MD: u16 = 3;
}

// ---------------------------------------------------------------------------
// Named styles
// ---------------------------------------------------------------------------

pub fn base() -> Style {
    Style::new().fg(fg::PRIMARY).bg(bg::BASE)
}

pub fn heading() -> Style {
    Style::new().fg(fg::PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn subtitle() -> Style {
    Style::new().fg(fg::SECONDARY).add_modifier(Modifier::ITALIC)
}

pub fn body() -> Style {
    Style::new().fg(fg::PRIMARY)
}

pub fn muted() -> Style {
    Style::new().fg(fg::MUTED)
}

pub fn link() -> Style {
    Style::new()
        .fg(accent::LINK)
        .add_modifier(Modifier::UNDERLINED)
}

// ---------------------------------------------------------------------------
// Component styles
// ---------------------------------------------------------------------------

/// Sidebar background.
pub fn sidebar() -> Style {
    Style::new().fg(fg::SECONDARY).bg(bg::SURFACE)
}

/// Current nav item.
pub fn nav_active() -> Style {
    Style::new()
        .fg(fg::PRIMARY)
        .bg(bg::RAISED)
        .add_modifier(Modifier::BOLD)
}

pub fn nav_item() -> Style {
    Style::new().fg(fg::SECONDARY)
}

/// Card border.
pub fn card_border(focused: bool) -> Style {
    if focused {
        Style::new().fg(accent::PRIMARY)
    } else {
        Style::new().fg(fg::DISABLED)
    }
}

pub fn card_title() -> Style {
    Style::new().fg(fg::PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn image_placeholder() -> Style {
    Style::new().fg(fg::MUTED).bg(bg::RAISED)
}

/// Tag badge, highlighted when it is the active filter.
pub fn badge(selected: bool) -> Style {
    if selected {
        Style::new()
            .fg(fg::ON_ACCENT)
            .bg(accent::TAG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::new().fg(accent::TAG).bg(bg::RAISED)
    }
}

/// Skill badge on experience cards.
pub fn skill_badge() -> Style {
    Style::new().fg(fg::SECONDARY).bg(bg::RAISED)
}

pub fn button(enabled: bool) -> Style {
    if enabled {
        Style::new().fg(fg::ON_ACCENT).bg(accent::PRIMARY)
    } else {
        Style::new()
            .fg(fg::DISABLED)
            .bg(bg::SURFACE)
            .add_modifier(Modifier::DIM)
    }
}

/// Secondary (outline) button.
pub fn button_outline(enabled: bool) -> Style {
    if enabled {
        Style::new().fg(accent::PRIMARY).bg(bg::SURFACE)
    } else {
        Style::new().fg(fg::DISABLED).add_modifier(Modifier::DIM)
    }
}

/// Status bar background.
pub fn status_bar() -> Style {
    Style::new().fg(fg::MUTED).bg(bg::SURFACE)
}

pub fn status_message() -> Style {
    Style::new().fg(accent::SUCCESS)
}

/// Help overlay background.
pub fn help_overlay() -> Style {
    Style::new().fg(fg::PRIMARY).bg(bg::OVERLAY)
}

pub fn help_key() -> Style {
    Style::new().fg(accent::WARNING).add_modifier(Modifier::BOLD)
}

pub fn footer() -> Style {
    Style::new().fg(fg::MUTED)
}

// ---------------------------------------------------------------------------
// Glyphs
// ---------------------------------------------------------------------------

/// Chevrons on the strip scroll controls.
pub const CHEVRON_LEFT: &str = "‹";
pub const CHEVRON_RIGHT: &str = "›";
/// Dismiss mark on the active filter chip.
pub const DISMISS: &str = "✕";
pub const ELLIPSIS: &str = "…";

/// Single-column glyph for an icon.
pub const fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::User => "◉",
        Icon::Code => "⟨",
        Icon::Zap => "↯",
        Icon::GraduationCap => "▲",
        Icon::Briefcase => "■",
        Icon::FolderKanban => "▦",
        Icon::Coffee => "♨",
        Icon::Puzzle => "✚",
        Icon::Guitar => "♫",
        Icon::BookOpen => "≡",
        Icon::Cat => "ω",
        Icon::Dumbbell => "═",
        Icon::Bike => "⊙",
        Icon::Gauge => "◔",
        Icon::Heart => "♥",
        Icon::Download => "↓",
        Icon::Menu => "☰",
    }
}
